//! Household lending ratios.

use fincalc_core::EngineResult;
use fincalc_formulas::lending;

use crate::schema::{FieldSpec, InputSchema};

use super::{Computed, Evaluator, NormalizedInputs, Outputs};

pub(super) fn evaluators() -> Vec<Evaluator> {
    vec![Evaluator {
        id: "debt_to_income_ratio",
        schema: InputSchema::new(vec![
            FieldSpec::float("monthly_debt_payments"),
            FieldSpec::float("monthly_income").positive(),
        ]),
        compute: debt_to_income,
    }]
}

fn debt_to_income(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let ratio = lending::debt_to_income_pct(
        inputs.float("monthly_debt_payments")?,
        inputs.float("monthly_income")?,
    );
    Ok(vec![("dti_ratio", Computed::Money(ratio))])
}
