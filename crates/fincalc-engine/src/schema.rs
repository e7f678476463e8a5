//! Per-evaluator input schemas: coercion, defaults, and domain rules.
//!
//! Every evaluator declares its fields once; validation walks the schema,
//! coerces each raw value to its numeric type, applies the field's domain
//! rule, divides percentage fields by 100, and records the echo that the
//! result shaper will hand back to the caller.

use std::collections::BTreeMap;

use fincalc_core::{EngineError, EngineResult, InputSet, Report, Value};

// ============================================================================
// Documented Defaults
// ============================================================================

/// Compounding periods per year when none is supplied.
pub const DEFAULT_COMPOUNDS_PER_YEAR: f64 = 1.0;
/// Short-term capital gains tax rate, in percent.
pub const DEFAULT_TAX_RATE_SHORT_PCT: f64 = 15.0;
/// Long-term capital gains tax rate, in percent.
pub const DEFAULT_TAX_RATE_LONG_PCT: f64 = 10.0;
/// Exchange rate when neither a rate nor a currency pair is supplied.
pub const DEFAULT_EXCHANGE_RATE: f64 = 1.0;

// ============================================================================
// Field Specification
// ============================================================================

/// The numeric type a field is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Floating-point amount or rate.
    Float,
    /// Whole-number count (years, shares, units).
    Int,
    /// Mapping of asset name to amount or percentage.
    Allocation,
    /// Pass-through text (currency codes); echoed, never computed on.
    Text,
}

/// Domain rule applied after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Strictly greater than zero.
    Positive,
    /// Greater than or equal to zero.
    NonNegative,
}

impl Domain {
    /// Checks a coerced value, naming the field and rule on violation.
    fn check(self, field: &str, value: f64) -> EngineResult<()> {
        match self {
            Self::Positive if value > 0.0 => Ok(()),
            Self::NonNegative if value >= 0.0 => Ok(()),
            Self::Positive => Err(EngineError::out_of_domain(field, "must be positive")),
            Self::NonNegative => Err(EngineError::out_of_domain(field, "must be non-negative")),
        }
    }
}

/// Declaration of a single evaluator input field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Parameter name in the raw input mapping.
    pub name: &'static str,
    /// Coercion target.
    pub kind: FieldKind,
    /// Domain rule.
    pub domain: Domain,
    /// Value assumed when the field is missing (scalar kinds only).
    pub default: f64,
    /// Percentage-denominated: divided by 100 after the domain check.
    /// The echo keeps the original, un-divided value.
    pub percentage: bool,
    /// Whether the field is echoed back in the result.
    pub echo: bool,
}

impl FieldSpec {
    /// A float field, non-negative by default.
    pub fn float(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Float,
            domain: Domain::NonNegative,
            default: 0.0,
            percentage: false,
            echo: true,
        }
    }

    /// An integer field, non-negative by default.
    pub fn int(name: &'static str) -> Self {
        Self {
            kind: FieldKind::Int,
            ..Self::float(name)
        }
    }

    /// An allocation mapping field; must be present and non-empty.
    pub fn allocation(name: &'static str) -> Self {
        Self {
            kind: FieldKind::Allocation,
            ..Self::float(name)
        }
    }

    /// An optional pass-through text field.
    pub fn text(name: &'static str) -> Self {
        Self {
            kind: FieldKind::Text,
            ..Self::float(name)
        }
    }

    /// Requires the value to be strictly positive.
    pub fn positive(mut self) -> Self {
        self.domain = Domain::Positive;
        self
    }

    /// Marks the field percentage-denominated.
    pub fn percentage(mut self) -> Self {
        self.percentage = true;
        self
    }

    /// Overrides the missing-field default.
    pub fn default_value(mut self, value: f64) -> Self {
        self.default = value;
        self
    }

    /// Consumes the field without echoing it back.
    pub fn no_echo(mut self) -> Self {
        self.echo = false;
        self
    }
}

// ============================================================================
// Schema and Validation
// ============================================================================

/// The declared input fields of one evaluator.
#[derive(Debug, Clone)]
pub struct InputSchema {
    fields: Vec<FieldSpec>,
}

impl InputSchema {
    /// Builds a schema from field declarations.
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Validates raw inputs against this schema.
    ///
    /// Coercion failures are `NotANumber`, rule violations `OutOfDomain`;
    /// both name the offending field. Validation short-circuits on the
    /// first failure, before any formula runs.
    pub fn validate(&self, raw: &InputSet) -> EngineResult<NormalizedInputs> {
        let mut normalized = NormalizedInputs::default();

        for field in &self.fields {
            match field.kind {
                FieldKind::Float => {
                    let value = match raw.get(field.name) {
                        Some(v) => coerce_float(field.name, v)?,
                        None => field.default,
                    };
                    field.domain.check(field.name, value)?;
                    let stored = if field.percentage { value / 100.0 } else { value };
                    normalized.floats.insert(field.name, stored);
                    if field.echo {
                        normalized.echo.insert(field.name.to_string(), Value::Number(value));
                    }
                }
                FieldKind::Int => {
                    let value = match raw.get(field.name) {
                        Some(v) => coerce_int(field.name, v)?,
                        None => field.default as i64,
                    };
                    field.domain.check(field.name, value as f64)?;
                    normalized.ints.insert(field.name, value);
                    if field.echo {
                        normalized.echo.insert(field.name.to_string(), Value::Integer(value));
                    }
                }
                FieldKind::Allocation => {
                    let map = coerce_allocation(field.name, raw.get(field.name))?;
                    for (key, amount) in &map {
                        field
                            .domain
                            .check(&format!("{}[{}]", field.name, key), *amount)?;
                    }
                    if field.echo {
                        normalized
                            .echo
                            .insert(field.name.to_string(), Value::Map(map.clone()));
                    }
                    normalized.maps.insert(field.name, map);
                }
                FieldKind::Text => {
                    // Optional: absent text fields leave no trace.
                    if let Some(v) = raw.get(field.name) {
                        let text = v.as_text().ok_or_else(|| {
                            EngineError::not_a_number(field.name, "expected a text value")
                        })?;
                        if field.echo {
                            normalized
                                .echo
                                .insert(field.name.to_string(), Value::Text(text.to_string()));
                        }
                    }
                }
            }
        }

        Ok(normalized)
    }
}

fn coerce_float(field: &str, value: &Value) -> EngineResult<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Integer(i) => Ok(*i as f64),
        Value::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| EngineError::not_a_number(field, format!("got \"{}\"", s))),
        Value::Map(_) => Err(EngineError::not_a_number(field, "got a mapping")),
    }
}

fn coerce_int(field: &str, value: &Value) -> EngineResult<i64> {
    match value {
        Value::Integer(i) => Ok(*i),
        // Fractional years/quantities truncate toward zero.
        Value::Number(n) => Ok(n.trunc() as i64),
        Value::Text(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                return Ok(i);
            }
            trimmed
                .parse::<f64>()
                .map(|n| n.trunc() as i64)
                .map_err(|_| EngineError::not_a_number(field, format!("got \"{}\"", s)))
        }
        Value::Map(_) => Err(EngineError::not_a_number(field, "got a mapping")),
    }
}

fn coerce_allocation(field: &str, value: Option<&Value>) -> EngineResult<BTreeMap<String, f64>> {
    let map = match value {
        Some(Value::Map(m)) => m.clone(),
        Some(_) => {
            return Err(EngineError::not_a_number(
                field,
                "expected a mapping of asset to amount",
            ))
        }
        None => BTreeMap::new(),
    };
    if map.is_empty() {
        return Err(EngineError::out_of_domain(
            field,
            "must be a non-empty allocation mapping",
        ));
    }
    Ok(map)
}

// ============================================================================
// Normalized Inputs
// ============================================================================

/// Typed, domain-checked inputs for a single evaluation.
///
/// Owned by one call and discarded with it. Percentage fields hold the
/// decimal form here; the echo record keeps the caller's original value.
#[derive(Debug, Clone, Default)]
pub struct NormalizedInputs {
    floats: BTreeMap<&'static str, f64>,
    ints: BTreeMap<&'static str, i64>,
    maps: BTreeMap<&'static str, BTreeMap<String, f64>>,
    echo: Report,
}

impl NormalizedInputs {
    /// A validated float field.
    pub fn float(&self, name: &str) -> EngineResult<f64> {
        self.floats
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::computation(format!("missing normalized field `{}`", name)))
    }

    /// A validated integer field.
    pub fn int(&self, name: &str) -> EngineResult<i64> {
        self.ints
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::computation(format!("missing normalized field `{}`", name)))
    }

    /// A validated allocation mapping.
    pub fn allocation(&self, name: &str) -> EngineResult<&BTreeMap<String, f64>> {
        self.maps
            .get(name)
            .ok_or_else(|| EngineError::computation(format!("missing normalized field `{}`", name)))
    }

    /// The echo record for the result shaper.
    pub fn into_echo(self) -> Report {
        self.echo
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fincalc_core::ErrorKind;

    fn schema() -> InputSchema {
        InputSchema::new(vec![
            FieldSpec::float("principal").positive(),
            FieldSpec::float("rate").percentage(),
            FieldSpec::int("years"),
            FieldSpec::int("compounds_per_year")
                .positive()
                .default_value(DEFAULT_COMPOUNDS_PER_YEAR),
        ])
    }

    fn inputs(pairs: &[(&str, Value)]) -> InputSet {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_validate_happy_path() {
        let raw = inputs(&[
            ("principal", Value::Number(10_000.0)),
            ("rate", Value::Number(5.0)),
            ("years", Value::Integer(10)),
        ]);
        let normalized = schema().validate(&raw).unwrap();

        assert_eq!(normalized.float("principal").unwrap(), 10_000.0);
        // Percentage fields are stored divided by 100
        assert_eq!(normalized.float("rate").unwrap(), 0.05);
        assert_eq!(normalized.int("years").unwrap(), 10);
        // Missing field takes its documented default
        assert_eq!(normalized.int("compounds_per_year").unwrap(), 1);
    }

    #[test]
    fn test_echo_keeps_undivided_percentage() {
        let raw = inputs(&[
            ("principal", Value::Number(10_000.0)),
            ("rate", Value::Number(7.5)),
            ("years", Value::Integer(1)),
        ]);
        let echo = schema().validate(&raw).unwrap().into_echo();
        assert_eq!(echo["rate"], Value::Number(7.5));
    }

    #[test]
    fn test_text_coercion() {
        let raw = inputs(&[
            ("principal", Value::from("10000")),
            ("rate", Value::from(" 5.5 ")),
            ("years", Value::from("10")),
        ]);
        let normalized = schema().validate(&raw).unwrap();
        assert_eq!(normalized.float("principal").unwrap(), 10_000.0);
        assert_eq!(normalized.float("rate").unwrap(), 0.055);
        assert_eq!(normalized.int("years").unwrap(), 10);
    }

    #[test]
    fn test_unparseable_text_names_field() {
        let raw = inputs(&[
            ("principal", Value::from("lots")),
            ("rate", Value::Number(5.0)),
        ]);
        let err = schema().validate(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotANumber);
        assert!(err.to_string().contains("principal"));
    }

    #[test]
    fn test_domain_violation_names_field_and_rule() {
        let raw = inputs(&[("principal", Value::Number(-1.0))]);
        let err = schema().validate(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfDomain);
        assert!(err.to_string().contains("principal"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_missing_required_positive_field_fails() {
        // principal defaults to 0, which the Positive rule rejects
        let raw = inputs(&[("rate", Value::Number(5.0))]);
        let err = schema().validate(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfDomain);
        assert!(err.to_string().contains("principal"));
    }

    #[test]
    fn test_fractional_int_truncates() {
        let raw = inputs(&[
            ("principal", Value::Number(100.0)),
            ("years", Value::Number(3.9)),
        ]);
        let normalized = schema().validate(&raw).unwrap();
        assert_eq!(normalized.int("years").unwrap(), 3);
    }

    #[test]
    fn test_no_echo_field_is_consumed_silently() {
        let schema = InputSchema::new(vec![FieldSpec::float("tax_rate_short")
            .percentage()
            .default_value(DEFAULT_TAX_RATE_SHORT_PCT)
            .no_echo()]);
        let normalized = schema.validate(&InputSet::new()).unwrap();
        assert_eq!(normalized.float("tax_rate_short").unwrap(), 0.15);
        assert!(normalized.into_echo().is_empty());
    }

    #[test]
    fn test_allocation_must_be_non_empty() {
        let schema = InputSchema::new(vec![FieldSpec::allocation("current_allocations")]);

        let err = schema.validate(&InputSet::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfDomain);

        let raw = inputs(&[("current_allocations", Value::Map(BTreeMap::new()))]);
        let err = schema.validate(&raw).unwrap_err();
        assert!(err.to_string().contains("current_allocations"));
    }

    #[test]
    fn test_allocation_entry_domain_names_asset() {
        let schema = InputSchema::new(vec![FieldSpec::allocation("current_allocations")]);
        let mut m = BTreeMap::new();
        m.insert("Stocks".to_string(), -5.0);
        let raw = inputs(&[("current_allocations", Value::Map(m))]);

        let err = schema.validate(&raw).unwrap_err();
        assert!(err.to_string().contains("current_allocations[Stocks]"));
    }

    #[test]
    fn test_nan_input_is_rejected_by_domain() {
        let raw = inputs(&[("principal", Value::Number(f64::NAN))]);
        let err = schema().validate(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfDomain);
    }
}
