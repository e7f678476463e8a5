//! Currency conversion.

/// Converts an amount at the given exchange rate.
pub fn convert(amount: f64, exchange_rate: f64) -> f64 {
    amount * exchange_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convert() {
        assert_relative_eq!(convert(100.0, 74.85), 7_485.0);
        assert_relative_eq!(convert(100.0, 1.0), 100.0);
        assert_relative_eq!(convert(0.0, 74.85), 0.0);
    }
}
