//! The engine facade.
//!
//! One synchronous, stateless entry point: look the evaluator up,
//! validate, compute, shape. Every failure comes back as a classified
//! [`Evaluation::Failure`]; nothing panics across this boundary.

use std::borrow::Cow;

use log::{debug, warn};
use serde::ser::{Serialize, SerializeMap, Serializer};

use fincalc_core::{EngineError, EngineResult, InputSet, Report, Value};

use crate::evaluators::{lookup, Computed, Outputs};
use crate::provider::RateProvider;
use crate::shaper::shape;

/// The calculation engine.
///
/// Holds no mutable state; a single instance can serve any number of
/// independent calls. An optional rate provider backs live currency
/// conversion.
#[derive(Default)]
pub struct Engine {
    provider: Option<Box<dyn RateProvider + Send + Sync>>,
}

impl Engine {
    /// An engine without an external rate source.
    pub fn new() -> Self {
        Self { provider: None }
    }

    /// An engine that resolves currency pairs through `provider`.
    pub fn with_rate_provider(provider: impl RateProvider + Send + Sync + 'static) -> Self {
        Self {
            provider: Some(Box::new(provider)),
        }
    }

    /// Evaluates `evaluator_id` against `inputs`.
    ///
    /// Always returns a well-formed result record: either the shaped
    /// success report or a classified failure.
    pub fn evaluate(&self, evaluator_id: &str, inputs: &InputSet) -> Evaluation {
        match self.try_evaluate(evaluator_id, inputs) {
            Ok(report) => Evaluation::Success(report),
            Err(error) => {
                warn!(
                    "evaluator `{}` failed ({}): {}",
                    evaluator_id,
                    error.kind(),
                    error
                );
                Evaluation::Failure(error)
            }
        }
    }

    fn try_evaluate(&self, evaluator_id: &str, inputs: &InputSet) -> EngineResult<Report> {
        let evaluator =
            lookup(evaluator_id).ok_or_else(|| EngineError::unknown_evaluator(evaluator_id))?;
        debug!("dispatching evaluator `{}`", evaluator_id);

        let raw = self.resolve_collaborators(evaluator_id, inputs)?;
        let normalized = evaluator.schema.validate(&raw)?;
        let outputs = (evaluator.compute)(&normalized)?;
        ensure_finite(evaluator_id, &outputs)?;

        Ok(shape(normalized.into_echo(), outputs))
    }

    /// Fills in inputs owned by external collaborators.
    ///
    /// Currency conversion with a named pair and no explicit rate asks
    /// the configured provider; any provider failure is classified as a
    /// computation error.
    fn resolve_collaborators<'a>(
        &self,
        evaluator_id: &str,
        inputs: &'a InputSet,
    ) -> EngineResult<Cow<'a, InputSet>> {
        if evaluator_id != "currency_conversion" || inputs.contains_key("exchange_rate") {
            return Ok(Cow::Borrowed(inputs));
        }
        let (Some(base), Some(target)) = (
            inputs.get("base_currency").and_then(Value::as_text),
            inputs.get("target_currency").and_then(Value::as_text),
        ) else {
            return Ok(Cow::Borrowed(inputs));
        };

        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| EngineError::computation("no rate provider configured"))?;
        let rate = provider
            .rate(base, target)
            .map_err(|e| EngineError::computation(e.to_string()))?;
        debug!("resolved {}/{} at {}", base, target, rate);

        let mut resolved = inputs.clone();
        resolved.insert("exchange_rate".to_string(), Value::Number(rate));
        Ok(Cow::Owned(resolved))
    }
}

/// Rejects non-finite formula results before they reach the shaper.
///
/// Float arithmetic in the formula library is total, so overflow and
/// indeterminate forms surface as infinities and NaNs here.
fn ensure_finite(evaluator_id: &str, outputs: &Outputs) -> EngineResult<()> {
    let finite = |x: f64| x.is_finite();
    let ok = outputs.iter().all(|(_, computed)| match computed {
        Computed::Money(x) | Computed::Units(x) => finite(*x),
        Computed::Breakdown(entries) => entries.values().copied().all(finite),
    });
    if ok {
        Ok(())
    } else {
        Err(EngineError::computation(format!(
            "evaluator `{}` produced a non-finite result",
            evaluator_id
        )))
    }
}

// ============================================================================
// Evaluation Result
// ============================================================================

/// The outcome of one evaluation: exactly a report or an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// Shaped outputs with echoed inputs.
    Success(Report),
    /// Classified failure.
    Failure(EngineError),
}

impl Evaluation {
    /// Converts into a standard `Result`.
    pub fn into_result(self) -> EngineResult<Report> {
        match self {
            Self::Success(report) => Ok(report),
            Self::Failure(error) => Err(error),
        }
    }

    /// The report, if this is a success.
    pub fn report(&self) -> Option<&Report> {
        match self {
            Self::Success(report) => Some(report),
            Self::Failure(_) => None,
        }
    }

    /// The error, if this is a failure.
    pub fn error(&self) -> Option<&EngineError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// True for [`Evaluation::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl Serialize for Evaluation {
    /// Success serializes as the flat report mapping; failure as
    /// `{"error": message, "error_kind": kind}`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(report) => report.serialize(serializer),
            Self::Failure(error) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("error", &error.to_string())?;
                map.serialize_entry("error_kind", &error.kind())?;
                map.end()
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
