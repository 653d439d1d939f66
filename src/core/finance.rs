/// Equated monthly instalment for a fixed-rate loan.
///
/// A zero rate degenerates to straight-line repayment. `tenure_months`
/// must be at least 1; it is not checked here.
pub fn calculate_emi(principal: f64, annual_rate: f64, tenure_months: u32) -> f64 {
    let monthly_rate = annual_rate / 1200.0;
    let n = tenure_months as f64;
    if monthly_rate == 0.0 {
        return principal / n;
    }

    let growth = (1.0 + monthly_rate).powf(n);
    principal * monthly_rate * growth / (growth - 1.0)
}

pub fn calculate_monthly_interest(balance: f64, annual_rate: f64) -> f64 {
    balance * annual_rate / 1200.0
}

pub fn apply_monthly_return(amount: f64, annual_return: f64) -> f64 {
    amount * (1.0 + annual_return / 1200.0)
}

/// Post-tax loan rate. Home loans credit half the slab rate against
/// interest as a flat proxy for the Section 24(b) deduction; the annual
/// deduction cap is not modelled.
pub fn calculate_effective_rate(rate: f64, tax_slab: f64, is_home_loan: bool) -> f64 {
    if !is_home_loan || tax_slab == 0.0 {
        return rate;
    }
    rate * (1.0 - 0.5 * tax_slab / 100.0)
}
