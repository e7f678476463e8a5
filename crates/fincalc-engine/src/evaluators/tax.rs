//! Capital gains tax evaluator.

use fincalc_core::EngineResult;
use fincalc_formulas::tax;

use crate::schema::{
    FieldSpec, InputSchema, DEFAULT_TAX_RATE_LONG_PCT, DEFAULT_TAX_RATE_SHORT_PCT,
};

use super::{Computed, Evaluator, NormalizedInputs, Outputs};

pub(super) fn evaluators() -> Vec<Evaluator> {
    vec![Evaluator {
        id: "capital_gains_tax",
        schema: InputSchema::new(vec![
            FieldSpec::float("purchase_price"),
            FieldSpec::float("sale_price"),
            FieldSpec::int("quantity"),
            FieldSpec::int("holding_period"),
            // The rates are consumed but not echoed.
            FieldSpec::float("tax_rate_short")
                .percentage()
                .default_value(DEFAULT_TAX_RATE_SHORT_PCT)
                .no_echo(),
            FieldSpec::float("tax_rate_long")
                .percentage()
                .default_value(DEFAULT_TAX_RATE_LONG_PCT)
                .no_echo(),
        ]),
        compute: capital_gains,
    }]
}

fn capital_gains(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let gain = tax::capital_gain(
        inputs.float("purchase_price")?,
        inputs.float("sale_price")?,
        inputs.int("quantity")? as f64,
    );
    let due = tax::capital_gains_tax(
        gain,
        inputs.int("holding_period")?,
        inputs.float("tax_rate_short")?,
        inputs.float("tax_rate_long")?,
    );
    Ok(vec![
        ("capital_gain", Computed::Money(gain)),
        ("tax_due", Computed::Money(due)),
    ])
}
