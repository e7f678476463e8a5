//! Compound growth evaluators: compound interest, future value, fixed
//! deposits, inflation impact, and contribution plans.

use fincalc_core::EngineResult;
use fincalc_formulas::growth;

use crate::schema::{FieldSpec, InputSchema, DEFAULT_COMPOUNDS_PER_YEAR};

use super::{Computed, Evaluator, NormalizedInputs, Outputs};

pub(super) fn evaluators() -> Vec<Evaluator> {
    vec![
        Evaluator {
            id: "compound_interest",
            schema: InputSchema::new(vec![
                FieldSpec::float("principal").positive(),
                FieldSpec::float("rate").percentage(),
                FieldSpec::int("years"),
                FieldSpec::int("compounds_per_year")
                    .positive()
                    .default_value(DEFAULT_COMPOUNDS_PER_YEAR),
            ]),
            compute: compound_interest,
        },
        Evaluator {
            id: "future_value",
            schema: InputSchema::new(vec![
                FieldSpec::float("initial_investment").positive(),
                FieldSpec::float("rate_of_return").percentage(),
                FieldSpec::int("years"),
            ]),
            compute: future_value,
        },
        Evaluator {
            id: "fixed_deposit_interest",
            schema: InputSchema::new(vec![
                FieldSpec::float("principal").positive(),
                FieldSpec::float("rate_of_interest").percentage(),
                FieldSpec::int("years").positive(),
                FieldSpec::int("compounds_per_year")
                    .positive()
                    .default_value(DEFAULT_COMPOUNDS_PER_YEAR),
            ]),
            compute: fixed_deposit,
        },
        Evaluator {
            id: "inflation_impact",
            schema: InputSchema::new(vec![
                FieldSpec::float("current_amount"),
                FieldSpec::float("inflation_rate").percentage(),
                FieldSpec::int("years"),
            ]),
            compute: inflation_impact,
        },
        Evaluator {
            id: "investment_return",
            schema: InputSchema::new(vec![
                FieldSpec::float("initial_investment").positive(),
                FieldSpec::float("annual_contribution"),
                FieldSpec::float("rate_of_return").percentage(),
                FieldSpec::int("years"),
            ]),
            compute: investment_return,
        },
    ]
}

fn compound_interest(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let fv = growth::compound_amount(
        inputs.float("principal")?,
        inputs.float("rate")?,
        inputs.int("years")? as f64,
        inputs.int("compounds_per_year")? as f64,
    );
    Ok(vec![("future_value", Computed::Money(fv))])
}

fn future_value(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let fv = growth::future_value(
        inputs.float("initial_investment")?,
        inputs.float("rate_of_return")?,
        inputs.int("years")? as f64,
    );
    Ok(vec![("future_value", Computed::Money(fv))])
}

fn fixed_deposit(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let maturity = growth::compound_amount(
        inputs.float("principal")?,
        inputs.float("rate_of_interest")?,
        inputs.int("years")? as f64,
        inputs.int("compounds_per_year")? as f64,
    );
    Ok(vec![("maturity_value", Computed::Money(maturity))])
}

fn inflation_impact(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let amount = inputs.float("current_amount")?;
    let rate = inputs.float("inflation_rate")?;
    let years = inputs.int("years")? as f64;

    let adjusted = growth::inflation_adjusted_value(amount, rate, years);
    let loss = growth::purchasing_power_loss(amount, rate, years);
    Ok(vec![
        ("future_value_adjusted", Computed::Money(adjusted)),
        ("purchasing_power_loss", Computed::Money(loss)),
    ])
}

fn investment_return(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let years = u32::try_from(inputs.int("years")?).unwrap_or(0);
    let fv = growth::future_value_with_contributions(
        inputs.float("initial_investment")?,
        inputs.float("annual_contribution")?,
        inputs.float("rate_of_return")?,
        years,
    );
    Ok(vec![("future_value", Computed::Money(fv))])
}
