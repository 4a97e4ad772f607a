//! `cn_mortgage` is a Rust library for calculating fixed-rate mortgage repayment
//! schedules the way Chinese retail lenders quote them.
//!
//! It supports the two repayment conventions offered on Chinese home loans:
//! - **等额本息 (equal payment)**: the same total payment every month, with the
//!   principal share growing as the interest share shrinks.
//! - **等额本金 (equal principal)**: the same principal repaid every month, leading
//!   to decreasing total payments over time and less interest overall.
//!
//! ## Usage
//!
//! Add `cn_mortgage` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cn_mortgage = "0.1.0"
//! ```
//!
//! Form callers go through [`calculate_mortgage`], which validates the request
//! (amount in 万元, term in years) before scheduling it:
//!
//! ```rust
//! use cn_mortgage::{calculate_mortgage, cumulative_series, format_currency, MortgageRequest};
//!
//! fn main() {
//!     let request = MortgageRequest::default(); // 100万 over 30 years at 4.2%
//!
//!     match calculate_mortgage(&request) {
//!         Ok(result) => {
//!             println!("Monthly Payment: {}", format_currency(result.first_period_payment));
//!             println!("Total Paid:      {}", format_currency(result.total_payment));
//!             println!("Total Interest:  {}", format_currency(result.total_interest));
//!
//!             let progress = cumulative_series(&result.schedule);
//!             assert_eq!(progress.len(), 360);
//!         }
//!         Err(e) => {
//!             eprintln!("Error calculating mortgage: {}", e);
//!         }
//!     }
//! }
//! ```
//!
//! Callers that already hold validated figures in yuan and months can use the engine
//! directly with [`compute_equal_payment`], [`compute_equal_principal`] or [`compute`].

pub mod amortization;
pub mod cumulative;
pub mod format;
pub mod request;

pub use amortization::{
    AmortizationResult, LoanParameters, PeriodRecord, RepaymentConvention, compute,
    compute_equal_payment, compute_equal_principal, monthly_rate,
};
pub use cumulative::{CumulativePoint, cumulative_series};
pub use format::{format_currency, format_wan};
pub use request::{
    ANNUAL_RATE_RANGE, LOAN_AMOUNT_RANGE, LOAN_YEARS_RANGE, MortgageRequest, RATE_PRESETS,
    RatePreset, TERM_PRESETS_YEARS, calculate_mortgage,
};
