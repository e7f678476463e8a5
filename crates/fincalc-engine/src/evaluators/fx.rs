//! Currency conversion evaluator.
//!
//! When the caller supplies `base_currency` and `target_currency`
//! without an explicit `exchange_rate`, the engine facade resolves the
//! rate through its configured provider before validation runs; by the
//! time this evaluator computes, the rate is an ordinary input.

use fincalc_core::EngineResult;
use fincalc_formulas::fx;

use crate::schema::{FieldSpec, InputSchema, DEFAULT_EXCHANGE_RATE};

use super::{Computed, Evaluator, NormalizedInputs, Outputs};

pub(super) fn evaluators() -> Vec<Evaluator> {
    vec![Evaluator {
        id: "currency_conversion",
        schema: InputSchema::new(vec![
            FieldSpec::float("amount"),
            FieldSpec::float("exchange_rate").default_value(DEFAULT_EXCHANGE_RATE),
            FieldSpec::text("base_currency"),
            FieldSpec::text("target_currency"),
        ]),
        compute: convert,
    }]
}

fn convert(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let converted = fx::convert(inputs.float("amount")?, inputs.float("exchange_rate")?);
    Ok(vec![("converted_amount", Computed::Money(converted))])
}
