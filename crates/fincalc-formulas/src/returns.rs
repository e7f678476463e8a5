//! Return and yield metrics.

/// Simple return on investment, as a percentage.
///
/// # Formula
///
/// ```text
/// ROI = (final − initial) / initial × 100
/// ```
pub fn roi_pct(initial: f64, final_value: f64) -> f64 {
    (final_value - initial) / initial * 100.0
}

/// Geometric annualized return over a holding period, as a percentage.
///
/// # Formula
///
/// ```text
/// R = ((final / initial)^(1/years) − 1) × 100
/// ```
///
/// Callers must guarantee `years > 0` and `initial > 0`; both are
/// domain-validated upstream.
pub fn annualized_return_pct(initial: f64, final_value: f64, years: f64) -> f64 {
    ((final_value / initial).powf(1.0 / years) - 1.0) * 100.0
}

/// Dividend yield of a stock, as a percentage.
///
/// A zero stock price yields 0 rather than an error.
pub fn dividend_yield_pct(annual_dividend: f64, stock_price: f64) -> f64 {
    if stock_price > 0.0 {
        annual_dividend / stock_price * 100.0
    } else {
        0.0
    }
}
