//! Portfolio rebalancing evaluator.

use fincalc_core::EngineResult;
use fincalc_formulas::portfolio;

use crate::schema::{FieldSpec, InputSchema};

use super::{Computed, Evaluator, NormalizedInputs, Outputs};

pub(super) fn evaluators() -> Vec<Evaluator> {
    vec![Evaluator {
        id: "portfolio_rebalancing",
        schema: InputSchema::new(vec![
            FieldSpec::allocation("current_allocations"),
            FieldSpec::allocation("target_allocations"),
        ]),
        compute: rebalance,
    }]
}

fn rebalance(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let adjustments = portfolio::rebalance_adjustments(
        inputs.allocation("current_allocations")?,
        inputs.allocation("target_allocations")?,
    );
    Ok(vec![(
        "rebalance_adjustments",
        Computed::Breakdown(adjustments),
    )])
}
