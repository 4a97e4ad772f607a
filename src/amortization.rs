//! Repayment schedules for fixed-rate, fixed-term loans.
//!
//! Two conventions are supported:
//! - **Equal payment (等额本息)**: the French annuity. Every monthly payment is the
//!   same; the interest share shrinks and the principal share grows over time.
//! - **Equal principal (等额本金)**: the principal repaid each month is constant, so
//!   the payment starts high and declines as the outstanding balance falls.
//!
//! All arithmetic is `f64` and no per-period rounding is applied. The functions here
//! do not validate their input: a non-positive principal or rate, or a zero term,
//! yields NaN/infinite figures. Validate at the boundary (see [`crate::request`]).

use serde::{Deserialize, Serialize};

/// Loan terms fed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed, in whole currency units.
    pub principal: f64,
    /// Nominal annual rate as a percentage (e.g. 4.2 for 4.2%).
    pub annual_rate_percent: f64,
    /// Number of monthly periods.
    pub term_months: u32,
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    /// Whether the engine's preconditions hold: positive, finite principal and rate,
    /// and at least one period.
    pub fn is_valid(&self) -> bool {
        self.principal.is_finite()
            && self.principal > 0.0
            && self.annual_rate_percent.is_finite()
            && self.annual_rate_percent > 0.0
            && self.term_months >= 1
    }
}

/// Which repayment convention to schedule the loan under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepaymentConvention {
    /// Constant monthly payment (等额本息).
    #[default]
    EqualPayment,
    /// Constant monthly principal, declining payment (等额本金).
    EqualPrincipal,
}

/// One row of a repayment schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// 1-based period number.
    pub period: u32,
    /// Total paid this period.
    pub payment_amount: f64,
    /// The part of the payment that reduces the balance.
    pub principal_portion: f64,
    /// The part of the payment that covers interest.
    pub interest_portion: f64,
    /// Balance outstanding after this period's payment.
    pub remaining_principal: f64,
}

/// A full repayment schedule with its aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// The payment due in period 1. Under equal principal this is the largest one.
    pub first_period_payment: f64,
    /// Sum of all payments over the life of the loan.
    pub total_payment: f64,
    /// `total_payment` minus the principal.
    pub total_interest: f64,
    /// One record per month, in period order.
    pub schedule: Vec<PeriodRecord>,
}

impl AmortizationResult {
    /// The payment due in the final period, or 0 for an empty schedule.
    pub fn last_period_payment(&self) -> f64 {
        self.schedule
            .last()
            .map(|record| record.payment_amount)
            .unwrap_or_default()
    }

    pub fn term_months(&self) -> usize {
        self.schedule.len()
    }
}

/// Converts a nominal annual percentage into the monthly rate used by both conventions.
///
/// The annual rate is simply split over twelve months (4.2% -> 0.0035), which is how
/// Chinese lenders quote monthly interest.
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// Schedules a loan under the given convention.
pub fn compute(params: &LoanParameters, convention: RepaymentConvention) -> AmortizationResult {
    match convention {
        RepaymentConvention::EqualPayment => compute_equal_payment(
            params.principal,
            params.annual_rate_percent,
            params.term_months,
        ),
        RepaymentConvention::EqualPrincipal => compute_equal_principal(
            params.principal,
            params.annual_rate_percent,
            params.term_months,
        ),
    }
}

/// Schedules a loan with a constant monthly payment (等额本息).
///
/// The payment formula is: M = P * [r(1 + r)^n] / [(1 + r)^n - 1]
///
/// # Arguments
///
/// * `principal` - The amount borrowed.
/// * `annual_rate_percent` - The nominal annual rate as a percentage.
/// * `term_months` - The number of monthly payments.
pub fn compute_equal_payment(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> AmortizationResult {
    let rate = monthly_rate(annual_rate_percent);
    let growth = (1.0 + rate).powf(f64::from(term_months));
    let fixed_payment = principal * rate * growth / (growth - 1.0);

    let mut balance = principal;
    let mut schedule = Vec::with_capacity(term_months as usize);

    for period in 1..=term_months {
        let interest = balance * rate;
        let principal_portion = fixed_payment - interest;
        balance = (balance - principal_portion).max(0.0);

        schedule.push(PeriodRecord {
            period,
            payment_amount: fixed_payment,
            principal_portion,
            interest_portion: interest,
            remaining_principal: settle(balance, period, term_months),
        });
    }

    let total_payment = fixed_payment * f64::from(term_months);

    AmortizationResult {
        first_period_payment: fixed_payment,
        total_payment,
        total_interest: total_payment - principal,
        schedule,
    }
}

/// Schedules a loan with a constant monthly principal portion (等额本金).
///
/// Each payment is `principal / n` plus interest on the balance still outstanding, so
/// payments decrease period over period. The total is accumulated from the schedule.
///
/// # Arguments
///
/// * `principal` - The amount borrowed.
/// * `annual_rate_percent` - The nominal annual rate as a percentage.
/// * `term_months` - The number of monthly payments.
pub fn compute_equal_principal(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
) -> AmortizationResult {
    let rate = monthly_rate(annual_rate_percent);
    let fixed_principal = principal / f64::from(term_months);

    let mut balance = principal;
    let mut total_payment = 0.0;
    let mut schedule = Vec::with_capacity(term_months as usize);

    for period in 1..=term_months {
        let interest = balance * rate;
        let payment = fixed_principal + interest;
        balance = (balance - fixed_principal).max(0.0);
        total_payment += payment;

        schedule.push(PeriodRecord {
            period,
            payment_amount: payment,
            principal_portion: fixed_principal,
            interest_portion: interest,
            remaining_principal: settle(balance, period, term_months),
        });
    }

    // NaN rather than 0 when the term is empty, so misuse stays visible.
    let first_period_payment = schedule
        .first()
        .map(|record| record.payment_amount)
        .unwrap_or(f64::NAN);

    AmortizationResult {
        first_period_payment,
        total_payment,
        total_interest: total_payment - principal,
        schedule,
    }
}

/// The loan is fully repaid after the final period; drop any float residue there.
fn settle(balance: f64, period: u32, term_months: u32) -> f64 {
    if period == term_months && balance.is_finite() {
        0.0
    } else {
        balance
    }
}
