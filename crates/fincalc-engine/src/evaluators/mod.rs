//! The evaluator registry.
//!
//! Each evaluator pairs an input schema with a pure compute function;
//! the registry maps evaluator ids to their definitions. Registration
//! is grouped by formula family.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use fincalc_core::EngineResult;

use crate::schema::{InputSchema, NormalizedInputs};

mod annuity;
mod fx;
mod growth;
mod lending;
mod portfolio;
mod property;
mod returns;
mod tax;
mod trading;

/// A raw computed output, tagged with its shaping rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Computed {
    /// Money or percentage amount; rounded to 2 decimal places.
    Money(f64),
    /// Dimensionless count; truncated to a whole number.
    Units(f64),
    /// Named breakdown; each entry rounded to 2 decimal places.
    Breakdown(BTreeMap<String, f64>),
}

/// Raw outputs of one compute call, in output order.
pub type Outputs = Vec<(&'static str, Computed)>;

/// Pure formula glue: validated inputs in, raw outputs out.
pub type ComputeFn = fn(&NormalizedInputs) -> EngineResult<Outputs>;

/// One named financial calculation exposed by the engine.
pub struct Evaluator {
    /// Dispatch id, e.g. `"loan_emi"`.
    pub id: &'static str,
    /// Input field declarations.
    pub schema: InputSchema,
    /// The formula invocation.
    pub compute: ComputeFn,
}

static REGISTRY: Lazy<BTreeMap<&'static str, Evaluator>> = Lazy::new(|| {
    let mut registry = BTreeMap::new();
    let families = [
        growth::evaluators(),
        annuity::evaluators(),
        returns::evaluators(),
        lending::evaluators(),
        trading::evaluators(),
        tax::evaluators(),
        property::evaluators(),
        portfolio::evaluators(),
        fx::evaluators(),
    ];
    for evaluator in families.into_iter().flatten() {
        registry.insert(evaluator.id, evaluator);
    }
    registry
});

/// Looks up an evaluator by id.
pub fn lookup(id: &str) -> Option<&'static Evaluator> {
    REGISTRY.get(id)
}

/// All registered evaluator ids, sorted.
pub fn evaluator_ids() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}
