//! External rate provider seam.
//!
//! The engine core never fetches anything itself; live exchange rates
//! come from a collaborator behind this trait. Any provider failure is
//! reported to callers as a computation error, never as a crash.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors an external rate source can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The source has no rate for the requested pair.
    #[error("no rate available for {base}/{target}")]
    UnknownPair {
        /// Base currency code.
        base: String,
        /// Target currency code.
        target: String,
    },

    /// The source itself failed.
    #[error("rate source unavailable: {reason}")]
    Unavailable {
        /// Description of the failure.
        reason: String,
    },
}

impl ProviderError {
    /// Creates an unknown-pair error.
    #[must_use]
    pub fn unknown_pair(base: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnknownPair {
            base: base.into(),
            target: target.into(),
        }
    }

    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// A synchronous source of exchange rates.
pub trait RateProvider {
    /// The rate converting one unit of `base` into `target`.
    fn rate(&self, base: &str, target: &str) -> Result<f64, ProviderError>;

    /// Converts an amount from `base` to `target`.
    fn convert(&self, base: &str, target: &str, amount: f64) -> Result<f64, ProviderError> {
        Ok(amount * self.rate(base, target)?)
    }
}

/// A table-backed rate provider.
///
/// Same-currency pairs convert at 1; a stored pair also answers the
/// inverse direction.
#[derive(Debug, Clone, Default)]
pub struct StaticRates {
    rates: BTreeMap<(String, String), f64>,
}

impl StaticRates {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rate for a currency pair.
    #[must_use]
    pub fn with_rate(mut self, base: &str, target: &str, rate: f64) -> Self {
        self.rates.insert((base.to_string(), target.to_string()), rate);
        self
    }
}

impl RateProvider for StaticRates {
    fn rate(&self, base: &str, target: &str) -> Result<f64, ProviderError> {
        if base == target {
            return Ok(1.0);
        }
        if let Some(rate) = self.rates.get(&(base.to_string(), target.to_string())) {
            return Ok(*rate);
        }
        if let Some(rate) = self.rates.get(&(target.to_string(), base.to_string())) {
            if *rate != 0.0 {
                return Ok(1.0 / rate);
            }
        }
        Err(ProviderError::unknown_pair(base, target))
    }
}
