//! # FinCalc Engine
//!
//! Evaluator registry, input validation, and dispatch facade for the
//! FinCalc calculation engine.
//!
//! This crate wires the pieces together:
//!
//! - **Schemas**: Per-evaluator field specifications with coercion,
//!   defaults, and domain rules
//! - **Evaluators**: The registry of named financial calculations
//! - **Shaper**: Echoed inputs merged with rounded outputs
//! - **Facade**: `Engine::evaluate(id, inputs)`, returning one result
//!   per call and never panicking
//! - **Rate Provider**: The external collaborator seam for live
//!   exchange rates
//!
//! ## Example
//!
//! ```rust
//! use fincalc_engine::prelude::*;
//!
//! let mut inputs = InputSet::new();
//! inputs.insert("loan_amount".into(), Value::from(500_000.0));
//! inputs.insert("interest_rate".into(), Value::from(7.5));
//! inputs.insert("loan_tenure".into(), Value::from(10_i64));
//!
//! let engine = Engine::new();
//! let report = engine.evaluate("loan_emi", &inputs).into_result().unwrap();
//! assert_eq!(report["monthly_emi"], Value::Number(5935.09));
//! ```

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
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_pass_by_value)]

pub mod engine;
pub mod evaluators;
pub mod provider;
pub mod schema;
pub mod shaper;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{Engine, Evaluation};
    pub use crate::evaluators::{evaluator_ids, Computed, Evaluator};
    pub use crate::provider::{ProviderError, RateProvider, StaticRates};
    pub use crate::schema::{Domain, FieldKind, FieldSpec, InputSchema, NormalizedInputs};
    pub use fincalc_core::prelude::*;
}

// Re-export commonly used types at crate root
pub use engine::{Engine, Evaluation};
pub use fincalc_core::{EngineError, EngineResult, ErrorKind, InputSet, Report, Value};
pub use provider::{ProviderError, RateProvider, StaticRates};
