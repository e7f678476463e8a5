//! Real-estate investment evaluator.

use fincalc_core::EngineResult;
use fincalc_formulas::property;

use crate::schema::{FieldSpec, InputSchema};

use super::{Computed, Evaluator, NormalizedInputs, Outputs};

pub(super) fn evaluators() -> Vec<Evaluator> {
    vec![Evaluator {
        id: "real_estate_investment",
        schema: InputSchema::new(vec![
            FieldSpec::float("property_value").positive(),
            FieldSpec::float("annual_rental_income"),
            FieldSpec::float("annual_expenses"),
        ]),
        compute: real_estate,
    }]
}

fn real_estate(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let value = inputs.float("property_value")?;
    let income = inputs.float("annual_rental_income")?;
    let expenses = inputs.float("annual_expenses")?;

    Ok(vec![
        (
            "annual_net_income",
            Computed::Money(property::net_rental_income(income, expenses)),
        ),
        (
            "roi",
            Computed::Money(property::rental_yield_pct(value, income, expenses)),
        ),
    ])
}
