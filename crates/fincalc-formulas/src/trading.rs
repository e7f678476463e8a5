//! Trade-level formulas: break-even, profit/loss, position sizing.

/// Break-even price for a position after transaction fees.
///
/// # Formula
///
/// ```text
/// BE = (entry × quantity + fees) / quantity
/// ```
///
/// A zero quantity has no break-even; the result is 0, not an error.
pub fn break_even_price(entry_price: f64, quantity: f64, fees: f64) -> f64 {
    if quantity > 0.0 {
        (entry_price * quantity + fees) / quantity
    } else {
        0.0
    }
}

/// Profit or loss of a round trip at the given quantity.
pub fn profit_loss(entry_price: f64, exit_price: f64, quantity: f64) -> f64 {
    (exit_price - entry_price) * quantity
}

/// Position size from account risk and stop distance.
///
/// # Formula
///
/// ```text
/// risk_per_unit = |entry − stop|
/// dollar_risk   = account × risk_fraction
/// units         = dollar_risk / risk_per_unit
/// ```
///
/// Returns `(dollar_risk, units)`. A stop at the entry price means no
/// measurable risk per unit; the unit count is 0 and no fault is raised.
/// The caller truncates `units` to a whole number of units.
pub fn position_size(
    account_size: f64,
    risk_fraction: f64,
    entry_price: f64,
    stop_loss_price: f64,
) -> (f64, f64) {
    let risk_per_unit = (entry_price - stop_loss_price).abs();
    let dollar_risk = account_size * risk_fraction;
    let units = if risk_per_unit > 0.0 {
        dollar_risk / risk_per_unit
    } else {
        0.0
    };
    (dollar_risk, units)
}
