//! # FinCalc Formulas
//!
//! Closed-form financial formulas for the FinCalc calculation engine.
//!
//! This crate provides:
//!
//! - **Growth**: Compound interest, future value, inflation adjustment
//! - **Annuities**: Loan amortization (EMI) and annuity-due streams (SIP)
//! - **Returns**: ROI, annualized return, dividend yield
//! - **Trading**: Break-even, profit/loss, position sizing
//! - **Portfolio**: Rebalancing adjustments against target allocations
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: No validation, no state, no I/O; callers
//!   (the engine's validator) guarantee domains before invoking
//! - **Decimal Rates**: Every rate argument is a decimal fraction
//!   (`0.075` for 7.5%); percentage division happens upstream
//! - **Numerical Stability**: Zero-rate and zero-denominator forms are
//!   special-cased, never left to produce NaN

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod annuity;
pub mod fx;
pub mod growth;
pub mod lending;
pub mod portfolio;
pub mod property;
pub mod returns;
pub mod tax;
pub mod trading;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::annuity::{loan_emi, sip_future_value};
    pub use crate::fx::convert;
    pub use crate::growth::{
        compound_amount, future_value, future_value_with_contributions, inflation_adjusted_value,
        purchasing_power_loss,
    };
    pub use crate::lending::debt_to_income_pct;
    pub use crate::portfolio::rebalance_adjustments;
    pub use crate::property::{net_rental_income, rental_yield_pct};
    pub use crate::returns::{annualized_return_pct, dividend_yield_pct, roi_pct};
    pub use crate::tax::{capital_gain, capital_gains_tax};
    pub use crate::trading::{break_even_price, position_size, profit_loss};
}
