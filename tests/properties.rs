use approx::assert_abs_diff_eq;
use cn_mortgage::{
    AmortizationResult, LoanParameters, RepaymentConvention, compute, compute_equal_payment,
    compute_equal_principal, cumulative_series,
};
use proptest::prelude::{Just, prop_assert, prop_assert_eq, prop_oneof, proptest};
use rstest::rstest;

const EPSILON: f64 = 0.01;

fn assert_schedule_invariants(params: &LoanParameters, result: &AmortizationResult) {
    assert_eq!(result.schedule.len(), params.term_months as usize);

    let repaid: f64 = result.schedule.iter().map(|r| r.principal_portion).sum();
    assert_abs_diff_eq!(repaid, params.principal, epsilon = EPSILON);
    assert_abs_diff_eq!(
        result.total_payment,
        result.total_interest + params.principal,
        epsilon = EPSILON
    );

    for (index, record) in result.schedule.iter().enumerate() {
        assert_eq!(record.period as usize, index + 1);
        assert!(record.remaining_principal >= 0.0);
        assert!(record.payment_amount >= 0.0);
        assert!(record.principal_portion >= 0.0);
        assert!(record.interest_portion >= 0.0);
    }
    assert_eq!(result.schedule.last().map(|r| r.remaining_principal), Some(0.0));
}

#[rstest]
#[case(LoanParameters::new(1_000_000.0, 4.2, 360))]
#[case(LoanParameters::new(500_000.0, 3.95, 120))]
#[case(LoanParameters::new(2_000_000.0, 4.65, 300))]
#[case(LoanParameters::new(50_000.0, 3.7, 60))]
#[case(LoanParameters::new(10_000.0, 20.0, 1))]
fn test_invariants_hold_for_both_conventions(#[case] params: LoanParameters) {
    for convention in [RepaymentConvention::EqualPayment, RepaymentConvention::EqualPrincipal] {
        let result = compute(&params, convention);
        assert_schedule_invariants(&params, &result);
    }
}

#[test]
fn test_ten_year_equal_payment_totals_reconcile() {
    let result = compute_equal_payment(500_000.0, 3.95, 120);

    assert_abs_diff_eq!(
        result.total_payment - result.total_interest,
        500_000.0,
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(result.first_period_payment, 5050.38, epsilon = EPSILON);
}

#[test]
fn test_equal_principal_thirty_year_first_and_last_payment() {
    let result = compute_equal_principal(1_000_000.0, 4.2, 360);

    // 1_000_000 / 360 + 1_000_000 * 0.0035
    assert_abs_diff_eq!(result.schedule[0].payment_amount, 6277.78, epsilon = EPSILON);
    // 2777.78 * (1 + 0.0035)
    assert_abs_diff_eq!(result.schedule[359].payment_amount, 2787.50, epsilon = EPSILON);
}

fn any_convention() -> impl proptest::strategy::Strategy<Value = RepaymentConvention> {
    prop_oneof![
        Just(RepaymentConvention::EqualPayment),
        Just(RepaymentConvention::EqualPrincipal),
    ]
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_schedule_repays_principal_exactly_once(
        principal in 1_000u32..5_000_000,
        rate_bp in 10u32..2_000,
        term_months in 1u32..=480,
        convention in any_convention(),
    ) {
        let params = LoanParameters::new(f64::from(principal), f64::from(rate_bp) / 100.0, term_months);
        let result = compute(&params, convention);

        prop_assert_eq!(result.schedule.len(), term_months as usize);

        let repaid: f64 = result.schedule.iter().map(|r| r.principal_portion).sum();
        prop_assert!((repaid - params.principal).abs() < EPSILON);
        prop_assert!(
            (result.total_payment - result.total_interest - params.principal).abs() < EPSILON
        );
        prop_assert!(result.schedule.iter().all(|r| r.remaining_principal >= 0.0));

        let mut previous = params.principal;
        for record in &result.schedule {
            prop_assert!(record.remaining_principal <= previous + 1e-6);
            previous = record.remaining_principal;
        }
    }

    #[test]
    fn prop_equal_payment_is_level(
        principal in 1_000u32..5_000_000,
        rate_bp in 10u32..2_000,
        term_months in 1u32..=480,
    ) {
        let result = compute_equal_payment(f64::from(principal), f64::from(rate_bp) / 100.0, term_months);
        let first = result.first_period_payment;

        prop_assert!(result.schedule.iter().all(|r| (r.payment_amount - first).abs() < EPSILON));
    }

    #[test]
    fn prop_equal_principal_is_level_and_declining(
        principal in 1_000u32..5_000_000,
        rate_bp in 10u32..2_000,
        term_months in 1u32..=480,
    ) {
        let result = compute_equal_principal(f64::from(principal), f64::from(rate_bp) / 100.0, term_months);
        let portion = result.schedule[0].principal_portion;

        prop_assert!(result.schedule.iter().all(|r| (r.principal_portion - portion).abs() < EPSILON));
        for pair in result.schedule.windows(2) {
            prop_assert!(pair[1].payment_amount <= pair[0].payment_amount);
        }
        prop_assert_eq!(result.first_period_payment, result.schedule[0].payment_amount);
    }

    #[test]
    fn prop_cumulative_series_ends_at_totals(
        principal in 1_000u32..5_000_000,
        rate_bp in 10u32..2_000,
        term_months in 1u32..=480,
        convention in any_convention(),
    ) {
        let params = LoanParameters::new(f64::from(principal), f64::from(rate_bp) / 100.0, term_months);
        let result = compute(&params, convention);
        let series = cumulative_series(&result.schedule);

        prop_assert_eq!(series.len(), result.schedule.len());
        let last = series[series.len() - 1];
        prop_assert_eq!(last.period, term_months);
        prop_assert!((last.cumulative_principal - params.principal).abs() < EPSILON);
        prop_assert!((last.cumulative_interest - result.total_interest).abs() < EPSILON);
    }
}
