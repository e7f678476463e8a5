//! Loan amortization and annuity-due formulas.

// ============================================================================
// Loan Amortization (EMI)
// ============================================================================

/// Calculate the equated monthly installment for a fully amortizing loan.
///
/// # Formula
///
/// ```text
/// EMI = P·i·(1+i)^m / ((1+i)^m − 1)
/// ```
///
/// where `i` is the monthly rate and `m` the tenure in months. At a zero
/// rate the expression is a 0/0 form; the installment degenerates to
/// straight-line principal repayment `P/m`.
///
/// # Arguments
///
/// * `principal` - Loan amount
/// * `annual_rate` - Annual interest rate as decimal (e.g., 0.075 for 7.5%)
/// * `months` - Tenure in months, must be non-zero
///
/// # Example
///
/// ```rust
/// use fincalc_formulas::annuity::loan_emi;
///
/// let emi = loan_emi(500_000.0, 0.075, 120);
/// assert!((emi - 5_935.09).abs() < 0.01);
/// ```
pub fn loan_emi(principal: f64, annual_rate: f64, months: u32) -> f64 {
    let i = annual_rate / 12.0;
    let m = f64::from(months);
    if i == 0.0 {
        return principal / m;
    }
    let growth = (1.0 + i).powf(m);
    principal * i * growth / (growth - 1.0)
}

// ============================================================================
// Annuity-Due Future Value (SIP)
// ============================================================================

/// Calculate the future value of a systematic investment plan.
///
/// Contributions are an annuity-due: each installment is invested at the
/// start of its month, hence the trailing `(1+i)` factor.
///
/// # Formula
///
/// ```text
/// FV = C × ((1+i)^m − 1) / i × (1+i)
/// ```
///
/// Zero-rate streams accumulate without growth: `FV = C·m`.
///
/// # Arguments
///
/// * `contribution` - Amount invested each month
/// * `annual_rate` - Expected annual return as decimal
/// * `months` - Number of monthly installments
pub fn sip_future_value(contribution: f64, annual_rate: f64, months: u32) -> f64 {
    let i = annual_rate / 12.0;
    let m = f64::from(months);
    if i == 0.0 {
        return contribution * m;
    }
    contribution * (((1.0 + i).powf(m) - 1.0) / i) * (1.0 + i)
}

// ============================================================================
// Tests
// ============================================================================
