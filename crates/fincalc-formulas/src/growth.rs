//! Compound growth and inflation formulas.

// ============================================================================
// Compound Growth
// ============================================================================

/// Calculate the future value of a principal under periodic compounding.
///
/// # Formula
///
/// ```text
/// FV = P × (1 + r/n)^(n·t)
/// ```
///
/// # Arguments
///
/// * `principal` - Initial amount invested
/// * `annual_rate` - Annual rate as decimal (e.g., 0.05 for 5%)
/// * `years` - Investment horizon in years
/// * `compounds_per_year` - Compounding frequency (1=annual, 4=quarterly, 12=monthly)
///
/// # Example
///
/// ```rust
/// use fincalc_formulas::growth::compound_amount;
///
/// let fv = compound_amount(10_000.0, 0.05, 10.0, 4.0);
/// assert!((fv - 16_436.19).abs() < 0.01);
/// ```
pub fn compound_amount(principal: f64, annual_rate: f64, years: f64, compounds_per_year: f64) -> f64 {
    principal * (1.0 + annual_rate / compounds_per_year).powf(compounds_per_year * years)
}

/// Future value of a single investment under annual compounding.
///
/// Equivalent to [`compound_amount`] with one compounding period per year.
pub fn future_value(initial: f64, annual_rate: f64, years: f64) -> f64 {
    initial * (1.0 + annual_rate).powf(years)
}

/// Future value of an investment with end-of-year contributions.
///
/// # Formula
///
/// ```text
/// FV = P·(1+r)^t + Σ_{k=1}^{t} C·(1+r)^(t-k)
/// ```
///
/// The sum is evaluated explicitly rather than via the annuity closed
/// form: each contribution lands at the end of its year, so the final
/// year's contribution earns no growth.
pub fn future_value_with_contributions(
    initial: f64,
    annual_contribution: f64,
    annual_rate: f64,
    years: u32,
) -> f64 {
    let mut fv = future_value(initial, annual_rate, f64::from(years));
    for year in 1..=years {
        fv += annual_contribution * (1.0 + annual_rate).powf(f64::from(years - year));
    }
    fv
}

// ============================================================================
// Inflation
// ============================================================================

/// Present-day amount deflated by expected inflation.
///
/// # Formula
///
/// ```text
/// FV_adjusted = A / (1 + r)^t
/// ```
pub fn inflation_adjusted_value(amount: f64, inflation_rate: f64, years: f64) -> f64 {
    amount / (1.0 + inflation_rate).powf(years)
}

/// Purchasing power lost to inflation over the horizon.
pub fn purchasing_power_loss(amount: f64, inflation_rate: f64, years: f64) -> f64 {
    amount - inflation_adjusted_value(amount, inflation_rate, years)
}

// ============================================================================
// Tests
// ============================================================================
