//! Annuity evaluators: loan amortization (EMI) and systematic
//! investment plans (SIP).

use fincalc_core::EngineResult;
use fincalc_formulas::annuity;

use crate::schema::{FieldSpec, InputSchema};

use super::{Computed, Evaluator, NormalizedInputs, Outputs};

pub(super) fn evaluators() -> Vec<Evaluator> {
    vec![
        Evaluator {
            id: "loan_emi",
            schema: InputSchema::new(vec![
                FieldSpec::float("loan_amount").positive(),
                FieldSpec::float("interest_rate").percentage(),
                FieldSpec::int("loan_tenure").positive().no_echo(),
            ]),
            compute: loan_emi,
        },
        Evaluator {
            id: "sip",
            schema: InputSchema::new(vec![
                FieldSpec::float("monthly_investment"),
                FieldSpec::float("rate_of_return").percentage(),
                FieldSpec::int("years"),
            ]),
            compute: sip,
        },
    ]
}

fn loan_emi(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let tenure_years = inputs.int("loan_tenure")?;
    let months = u32::try_from(tenure_years).unwrap_or(0).saturating_mul(12);
    let emi = annuity::loan_emi(
        inputs.float("loan_amount")?,
        inputs.float("interest_rate")?,
        months,
    );
    // The tenure echoes under its display name, in years.
    Ok(vec![
        ("loan_tenure_years", Computed::Units(tenure_years as f64)),
        ("monthly_emi", Computed::Money(emi)),
    ])
}

fn sip(inputs: &NormalizedInputs) -> EngineResult<Outputs> {
    let months = u32::try_from(inputs.int("years")?).unwrap_or(0).saturating_mul(12);
    let fv = annuity::sip_future_value(
        inputs.float("monthly_investment")?,
        inputs.float("rate_of_return")?,
        months,
    );
    Ok(vec![("future_value", Computed::Money(fv))])
}
