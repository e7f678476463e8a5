//! Output rounding policy.
//!
//! Every money-denominated output is rounded to exactly two decimal
//! places, ties away from zero. Dimensionless counts (position sizes)
//! are truncated toward zero instead. The tie-break is a documented
//! choice: half-even would disagree on values like `x.xx5`.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a money amount to 2 decimal places, ties away from zero.
///
/// Inputs outside `Decimal`'s representable range pass through
/// unchanged. Non-finite values never reach here; the engine rejects
/// them before shaping.
#[must_use]
pub fn round_money(x: f64) -> f64 {
    let Some(d) = Decimal::from_f64(x) else {
        return x;
    };
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(x)
}

/// Truncates a unit count toward zero.
#[must_use]
pub fn truncate_units(x: f64) -> i64 {
    x.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_money_basic() {
        assert_relative_eq!(round_money(5939.6156), 5939.62);
        assert_relative_eq!(round_money(16436.194), 16436.19);
        assert_relative_eq!(round_money(50.0), 50.0);
    }

    #[test]
    fn test_round_money_ties_away_from_zero() {
        assert_relative_eq!(round_money(2.675), 2.68);
        assert_relative_eq!(round_money(-2.675), -2.68);
        assert_relative_eq!(round_money(0.125), 0.13);
    }

    #[test]
    fn test_round_money_negative() {
        assert_relative_eq!(round_money(-1000.004), -1000.0);
        assert_relative_eq!(round_money(-999.995), -1000.0);
    }

    #[test]
    fn test_truncate_units() {
        assert_eq!(truncate_units(66.666), 66);
        assert_eq!(truncate_units(0.9), 0);
        assert_eq!(truncate_units(-3.7), -3);
    }
}
