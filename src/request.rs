//! The form-facing side of the calculator: loan terms as a borrower enters them
//! (amount in 万元, term in years), validated and converted before they reach the
//! engine.

use anyhow::{Context, bail};
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::amortization::{self, AmortizationResult, LoanParameters, RepaymentConvention};

/// Yuan per 万.
const WAN: Decimal = dec!(10000);
const MONTHS_PER_YEAR: u32 = 12;

/// Accepted loan amount, in 万元.
pub const LOAN_AMOUNT_RANGE: RangeInclusive<Decimal> = dec!(1)..=dec!(10000);
/// Accepted loan term, in years.
pub const LOAN_YEARS_RANGE: RangeInclusive<u32> = 1..=30;
/// Accepted annual rate, as a percentage.
pub const ANNUAL_RATE_RANGE: RangeInclusive<Decimal> = dec!(0.1)..=dec!(20);

/// Common loan terms, in years.
pub const TERM_PRESETS_YEARS: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// A named annual rate offered as a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatePreset {
    pub label: &'static str,
    /// Annual rate as a percentage.
    pub annual_rate: Decimal,
}

/// Housing-provident-fund rates and the commercial LPR with the usual spreads.
pub const RATE_PRESETS: [RatePreset; 5] = [
    RatePreset {
        label: "3.7% (公积金5年以下)",
        annual_rate: dec!(3.7),
    },
    RatePreset {
        label: "4.2% (公积金5年以上)",
        annual_rate: dec!(4.2),
    },
    RatePreset {
        label: "3.95% (商贷LPR)",
        annual_rate: dec!(3.95),
    },
    RatePreset {
        label: "4.3% (商贷LPR+35BP)",
        annual_rate: dec!(4.3),
    },
    RatePreset {
        label: "4.65% (商贷LPR+70BP)",
        annual_rate: dec!(4.65),
    },
];

/// Loan terms as entered on the mortgage form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MortgageRequest {
    /// Amount borrowed, in 万元 (units of 10,000 yuan).
    pub loan_amount: Decimal,
    /// Loan term in whole years.
    pub loan_years: u32,
    /// Annual rate as a percentage (e.g. 4.2 for 4.2%).
    pub annual_rate: Decimal,
    #[serde(rename = "repaymentType")]
    pub repayment: RepaymentConvention,
}

impl Default for MortgageRequest {
    /// 1,000,000 yuan over 30 years at 4.2%, equal payment.
    fn default() -> Self {
        Self {
            loan_amount: dec!(100),
            loan_years: 30,
            annual_rate: dec!(4.2),
            repayment: RepaymentConvention::EqualPayment,
        }
    }
}

impl MortgageRequest {
    /// Parses a form payload. Fields left out take their default values.
    pub fn from_json(payload: &str) -> Result<Self, anyhow::Error> {
        serde_json::from_str(payload).context("Invalid mortgage request payload.")
    }

    /// Validates the request and converts it into engine units: yuan and months.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount, term or rate falls outside
    /// [`LOAN_AMOUNT_RANGE`], [`LOAN_YEARS_RANGE`] or [`ANNUAL_RATE_RANGE`].
    pub fn to_parameters(&self) -> Result<LoanParameters, anyhow::Error> {
        if !LOAN_AMOUNT_RANGE.contains(&self.loan_amount) {
            bail!(
                "Loan amount must be between {} and {} 万, got {}.",
                LOAN_AMOUNT_RANGE.start(),
                LOAN_AMOUNT_RANGE.end(),
                self.loan_amount
            );
        }
        if !LOAN_YEARS_RANGE.contains(&self.loan_years) {
            bail!(
                "Loan term must be between {} and {} years, got {}.",
                LOAN_YEARS_RANGE.start(),
                LOAN_YEARS_RANGE.end(),
                self.loan_years
            );
        }
        if !ANNUAL_RATE_RANGE.contains(&self.annual_rate) {
            bail!(
                "Annual rate must be between {}% and {}%, got {}%.",
                ANNUAL_RATE_RANGE.start(),
                ANNUAL_RATE_RANGE.end(),
                self.annual_rate
            );
        }

        let principal = self
            .loan_amount
            .checked_mul(WAN)
            .and_then(|yuan| yuan.to_f64())
            .context("Loan amount is out of range.")?;
        let annual_rate_percent = self
            .annual_rate
            .to_f64()
            .context("Annual rate is out of range.")?;
        let term_months = self.loan_years * MONTHS_PER_YEAR;

        Ok(LoanParameters::new(principal, annual_rate_percent, term_months))
    }
}

/// Validates a request and schedules it under its chosen repayment convention.
///
/// This is the entry point for form callers: invalid input is rejected here and never
/// reaches the engine.
///
/// # Errors
///
/// Returns an error when the request fails [`MortgageRequest::to_parameters`].
pub fn calculate_mortgage(request: &MortgageRequest) -> Result<AmortizationResult, anyhow::Error> {
    let params = request.to_parameters().inspect_err(|e| {
        warn!("Rejected mortgage request {request:?}: {e}");
    })?;

    let result = amortization::compute(&params, request.repayment);
    debug!(
        "Scheduled {} yuan at {}% over {} months ({:?}): first payment {:.2}, total interest {:.2}",
        params.principal,
        params.annual_rate_percent,
        params.term_months,
        request.repayment,
        result.first_period_payment,
        result.total_interest,
    );

    Ok(result)
}
