//! Error types for the FinCalc engine.
//!
//! Every failure an evaluation can produce falls into one of four kinds:
//! input coercion (`NotANumber`), domain rules (`OutOfDomain`), dispatch
//! (`UnknownEvaluator`), and arithmetic or collaborator faults
//! (`Computation`). All four are recoverable at the call boundary; none
//! is ever allowed to escape as a panic.

use serde::Serialize;
use thiserror::Error;

/// A specialized Result type for FinCalc operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// The main error type for FinCalc evaluations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// An input field could not be coerced to a number.
    #[error("invalid input: field `{field}` is not a number ({detail})")]
    NotANumber {
        /// Name of the offending field.
        field: String,
        /// What was actually supplied.
        detail: String,
    },

    /// An input field violated an evaluator's domain rule.
    #[error("out of domain: field `{field}` {rule}")]
    OutOfDomain {
        /// Name of the offending field.
        field: String,
        /// The violated rule, e.g. "must be positive".
        rule: String,
    },

    /// No evaluator is registered under the requested id.
    #[error("unknown evaluator: `{id}`")]
    UnknownEvaluator {
        /// The id that failed to resolve.
        id: String,
    },

    /// A formula produced a non-finite result, or an external
    /// collaborator failed mid-computation.
    #[error("computation failed: {reason}")]
    Computation {
        /// Description of the fault.
        reason: String,
    },
}

impl EngineError {
    /// Creates a not-a-number error for a named field.
    #[must_use]
    pub fn not_a_number(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::NotANumber {
            field: field.into(),
            detail: detail.into(),
        }
    }

    /// Creates an out-of-domain error for a named field.
    #[must_use]
    pub fn out_of_domain(field: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::OutOfDomain {
            field: field.into(),
            rule: rule.into(),
        }
    }

    /// Creates an unknown-evaluator error.
    #[must_use]
    pub fn unknown_evaluator(id: impl Into<String>) -> Self {
        Self::UnknownEvaluator { id: id.into() }
    }

    /// Creates a computation error.
    #[must_use]
    pub fn computation(reason: impl Into<String>) -> Self {
        Self::Computation {
            reason: reason.into(),
        }
    }

    /// The coarse kind of this error, for programmatic handling.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotANumber { .. } => ErrorKind::NotANumber,
            Self::OutOfDomain { .. } => ErrorKind::OutOfDomain,
            Self::UnknownEvaluator { .. } => ErrorKind::UnknownEvaluator,
            Self::Computation { .. } => ErrorKind::ComputationError,
        }
    }
}

/// Coarse error classification exposed alongside the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input coercion failure.
    NotANumber,
    /// Domain rule violation.
    OutOfDomain,
    /// Dispatch failure.
    UnknownEvaluator,
    /// Arithmetic or collaborator fault.
    ComputationError,
}

impl ErrorKind {
    /// The wire name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotANumber => "not_a_number",
            Self::OutOfDomain => "out_of_domain",
            Self::UnknownEvaluator => "unknown_evaluator",
            Self::ComputationError => "computation_error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_field() {
        let err = EngineError::out_of_domain("initial_investment", "must be positive");
        assert!(err.to_string().contains("initial_investment"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            EngineError::not_a_number("rate", "got \"abc\"").kind(),
            ErrorKind::NotANumber
        );
        assert_eq!(
            EngineError::unknown_evaluator("stock_beta").kind(),
            ErrorKind::UnknownEvaluator
        );
        assert_eq!(
            EngineError::computation("non-finite result").kind(),
            ErrorKind::ComputationError
        );
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(ErrorKind::NotANumber.as_str(), "not_a_number");
        assert_eq!(ErrorKind::OutOfDomain.as_str(), "out_of_domain");
        assert_eq!(ErrorKind::UnknownEvaluator.as_str(), "unknown_evaluator");
        assert_eq!(ErrorKind::ComputationError.as_str(), "computation_error");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::OutOfDomain).unwrap();
        assert_eq!(json, "\"out_of_domain\"");
    }
}
