//! Capital gains taxation.

/// Realized capital gain across a position.
pub fn capital_gain(purchase_price: f64, sale_price: f64, quantity: f64) -> f64 {
    (sale_price - purchase_price) * quantity
}

/// Tax due on a realized gain under two-tier rates.
///
/// Holding periods longer than one year attract the long-term rate;
/// a single threshold, no pro-rated blending. Losses owe nothing: the
/// tax is clamped to zero whenever the gain is non-positive.
///
/// # Arguments
///
/// * `gain` - Realized capital gain (may be negative)
/// * `holding_period_years` - Whole years the position was held
/// * `short_term_rate` - Rate as decimal for holdings of a year or less
/// * `long_term_rate` - Rate as decimal for longer holdings
pub fn capital_gains_tax(
    gain: f64,
    holding_period_years: i64,
    short_term_rate: f64,
    long_term_rate: f64,
) -> f64 {
    let rate = if holding_period_years > 1 {
        long_term_rate
    } else {
        short_term_rate
    };
    if gain > 0.0 {
        gain * rate
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_capital_gain() {
        assert_relative_eq!(capital_gain(100.0, 150.0, 50.0), 2_500.0);
        assert_relative_eq!(capital_gain(150.0, 100.0, 50.0), -2_500.0);
    }

    #[test]
    fn test_long_term_rate_above_one_year() {
        // 2-year holding takes the 10% long-term rate
        assert_relative_eq!(capital_gains_tax(2_500.0, 2, 0.15, 0.10), 250.0);
    }

    #[test]
    fn test_short_term_rate_at_or_below_one_year() {
        // Exactly one year is still short-term
        assert_relative_eq!(capital_gains_tax(2_500.0, 1, 0.15, 0.10), 375.0);
        assert_relative_eq!(capital_gains_tax(2_500.0, 0, 0.15, 0.10), 375.0);
    }

    #[test]
    fn test_losses_owe_no_tax() {
        assert_relative_eq!(capital_gains_tax(-2_500.0, 1, 0.15, 0.10), 0.0);
        assert_relative_eq!(capital_gains_tax(-2_500.0, 5, 0.99, 0.99), 0.0);
        assert_relative_eq!(capital_gains_tax(0.0, 1, 0.15, 0.10), 0.0);
    }
}
