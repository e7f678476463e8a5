//! Return metric evaluators: ROI, annualized and expected returns,
//! dividend yield.

use fincalc_core::EngineResult;
use fincalc_formulas::returns;

use crate::schema::{FieldSpec, InputSchema};

use super::{Computed, Evaluator, NormalizedInputs, Outputs};

pub(super) fn evaluators() -> Vec<Evaluator> {
    vec![
        Evaluator {
            id: "roi",
            schema: InputSchema::new(vec![
                FieldSpec::float("initial_investment").positive(),
                FieldSpec::float("final_value"),
            ]),
            compute: roi,
        },
        Evaluator {
            id: "annualized_return",
            schema: InputSchema::new(vec![
                FieldSpec::float("initial_investment").positive(),
                FieldSpec::float("final_value"),
                FieldSpec::int("years").positive(),
            ]),
            compute: annualized_return,
        },
        // Same geometric-mean formula as annualized_return, under the
        // field names its callers use.
        Evaluator {
            id: "expected_rate_of_return",
            schema: InputSchema::new(vec![
                FieldSpec::float("initial_investment").positive(),
                FieldSpec::float("future_value").positive(),
                FieldSpec::int("years").positive(),
            ]),
            compute: expected_rate_of_return,
        },
        Evaluator {
            id: "dividend_yield",
            schema: InputSchema::new(vec![
                FieldSpec::float("annual_dividend"),
                FieldSpec::float("stock_price"),
            ]),
            compute: dividend_yield,
        },
    ]
}

fn roi(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let pct = returns::roi_pct(
        inputs.float("initial_investment")?,
        inputs.float("final_value")?,
    );
    Ok(vec![("roi", Computed::Money(pct))])
}

fn annualized_return(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let pct = returns::annualized_return_pct(
        inputs.float("initial_investment")?,
        inputs.float("final_value")?,
        inputs.int("years")? as f64,
    );
    Ok(vec![("annualized_return", Computed::Money(pct))])
}

fn expected_rate_of_return(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let pct = returns::annualized_return_pct(
        inputs.float("initial_investment")?,
        inputs.float("future_value")?,
        inputs.int("years")? as f64,
    );
    Ok(vec![("rate_of_return", Computed::Money(pct))])
}

fn dividend_yield(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let pct = returns::dividend_yield_pct(
        inputs.float("annual_dividend")?,
        inputs.float("stock_price")?,
    );
    Ok(vec![("dividend_yield", Computed::Money(pct))])
}
