//! Trade evaluators: break-even, profit/loss, and position sizing.

use fincalc_core::EngineResult;
use fincalc_formulas::trading;

use crate::schema::{FieldSpec, InputSchema};

use super::{Computed, Evaluator, NormalizedInputs, Outputs};

pub(super) fn evaluators() -> Vec<Evaluator> {
    vec![
        Evaluator {
            id: "break_even",
            schema: InputSchema::new(vec![
                FieldSpec::float("entry_price"),
                FieldSpec::int("quantity"),
                FieldSpec::float("fees"),
            ]),
            compute: break_even,
        },
        Evaluator {
            id: "profit_loss",
            schema: InputSchema::new(vec![
                FieldSpec::float("entry_price"),
                FieldSpec::float("exit_price"),
                FieldSpec::int("quantity"),
            ]),
            compute: profit_loss,
        },
        Evaluator {
            id: "position_size",
            schema: InputSchema::new(vec![
                FieldSpec::float("account_size").positive(),
                FieldSpec::float("risk_percentage").percentage(),
                FieldSpec::float("entry_price"),
                FieldSpec::float("stop_loss_price"),
            ]),
            compute: position_size,
        },
    ]
}

fn break_even(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let price = trading::break_even_price(
        inputs.float("entry_price")?,
        inputs.int("quantity")? as f64,
        inputs.float("fees")?,
    );
    Ok(vec![("break_even_price", Computed::Money(price))])
}

fn profit_loss(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let pnl = trading::profit_loss(
        inputs.float("entry_price")?,
        inputs.float("exit_price")?,
        inputs.int("quantity")? as f64,
    );
    Ok(vec![("profit_loss", Computed::Money(pnl))])
}

fn position_size(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let (dollar_risk, units) = trading::position_size(
        inputs.float("account_size")?,
        inputs.float("risk_percentage")?,
        inputs.float("entry_price")?,
        inputs.float("stop_loss_price")?,
    );
    Ok(vec![
        ("dollar_risk", Computed::Money(dollar_risk)),
        ("position_size", Computed::Units(units)),
    ])
}
