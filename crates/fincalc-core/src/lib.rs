//! # FinCalc Core
//!
//! Core types, error taxonomy, and rounding policy for the FinCalc
//! calculation engine.
//!
//! This crate provides the foundational building blocks used throughout
//! FinCalc:
//!
//! - **Values**: The dynamic `Value` type for raw inputs and shaped results
//! - **Errors**: The four-kind error taxonomy shared by every evaluator
//! - **Rounding**: The documented money-rounding and unit-truncation policy
//!
//! ## Design Philosophy
//!
//! - **Explicit Over Implicit**: Every failure is a typed error, never a panic
//! - **One Call, One Lifetime**: Nothing in this crate holds state across calls
//!
//! ## Example
//!
//! ```rust
//! use fincalc_core::prelude::*;
//!
//! let mut inputs = InputSet::new();
//! inputs.insert("principal".to_string(), Value::from(10_000.0));
//! inputs.insert("rate".to_string(), Value::from(5.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::match_same_arms)]

pub mod error;
pub mod rounding;
pub mod value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{EngineError, EngineResult, ErrorKind};
    pub use crate::rounding::{round_money, truncate_units};
    pub use crate::value::{InputSet, Report, Value};
}

// Re-export commonly used types at crate root
pub use error::{EngineError, EngineResult, ErrorKind};
pub use value::{InputSet, Report, Value};
