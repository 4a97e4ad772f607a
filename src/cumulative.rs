use serde::{Deserialize, Serialize};

use crate::amortization::PeriodRecord;

/// Principal and interest repaid so far, as of the end of a period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub period: u32,
    pub cumulative_principal: f64,
    pub cumulative_interest: f64,
}

/// Running totals of the principal and interest portions of a schedule.
///
/// The output has one point per input record, in the same order. An empty schedule
/// yields an empty series.
pub fn cumulative_series(schedule: &[PeriodRecord]) -> Vec<CumulativePoint> {
    schedule
        .iter()
        .scan((0.0, 0.0), |(principal, interest), record| {
            *principal += record.principal_portion;
            *interest += record.interest_portion;
            Some(CumulativePoint {
                period: record.period,
                cumulative_principal: *principal,
                cumulative_interest: *interest,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::{compute_equal_payment, compute_equal_principal};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_schedule_yields_empty_series() {
        assert!(cumulative_series(&[]).is_empty());
    }

    #[test]
    fn test_running_sums_over_hand_built_schedule() {
        let schedule = [
            PeriodRecord {
                period: 1,
                payment_amount: 110.0,
                principal_portion: 100.0,
                interest_portion: 10.0,
                remaining_principal: 200.0,
            },
            PeriodRecord {
                period: 2,
                payment_amount: 105.0,
                principal_portion: 100.0,
                interest_portion: 5.0,
                remaining_principal: 100.0,
            },
        ];

        let series = cumulative_series(&schedule);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].period, 1);
        assert_eq!(series[0].cumulative_principal, 100.0);
        assert_eq!(series[0].cumulative_interest, 10.0);
        assert_eq!(series[1].period, 2);
        assert_eq!(series[1].cumulative_principal, 200.0);
        assert_eq!(series[1].cumulative_interest, 15.0);
    }

    #[test]
    fn test_final_point_matches_loan_totals() {
        for result in [
            compute_equal_payment(1_000_000.0, 4.2, 360),
            compute_equal_principal(1_000_000.0, 4.2, 360),
        ] {
            let series = cumulative_series(&result.schedule);
            let last = series.last().unwrap();

            assert_eq!(series.len(), 360);
            assert_eq!(last.period, 360);
            assert_abs_diff_eq!(last.cumulative_principal, 1_000_000.0, epsilon = 0.01);
            assert_abs_diff_eq!(last.cumulative_interest, result.total_interest, epsilon = 0.01);
        }
    }
}
