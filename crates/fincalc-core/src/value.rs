//! Dynamic value model for evaluator inputs and results.
//!
//! Callers hand the engine a mapping of parameter name to raw value; the
//! engine hands back a mapping of output name to shaped value. Both sides
//! use the same tagged [`Value`] type so a result can echo inputs verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A raw input or shaped output value.
///
/// The untagged serde representation round-trips the natural JSON shapes:
/// `42`, `7.5`, `"USD"`, `{"Stocks": 7000.0, "Bonds": 3000.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A whole-number quantity (years, share counts, unit counts).
    Integer(i64),
    /// A floating-point amount or rate.
    Number(f64),
    /// A textual value (currency codes).
    Text(String),
    /// A named breakdown, e.g. asset name to allocation amount.
    Map(BTreeMap<String, f64>),
}

impl Value {
    /// Returns the value as `f64` if it is numeric.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Number(n) => Some(*n),
            Self::Text(_) | Self::Map(_) => None,
        }
    }

    /// Returns the value as text if it is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a breakdown mapping if it is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, f64>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<BTreeMap<String, f64>> for Value {
    fn from(m: BTreeMap<String, f64>) -> Self {
        Self::Map(m)
    }
}

/// Raw inputs for one evaluation, keyed by parameter name.
///
/// Immutable once handed to the engine; the engine never mutates or
/// retains it past the call.
pub type InputSet = BTreeMap<String, Value>;

/// A shaped success record: echoed inputs merged with rounded outputs.
pub type Report = BTreeMap<String, Value>;
