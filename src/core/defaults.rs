use super::types::{
    BaseConfig, Bucket, ExtraEmiSource, LoanType, MoneyTransfer, ScenarioConfig, TransferTarget,
};

/// ₹50L home loan at 8.5 % over 20 years, five-year forecast.
pub fn default_base_config() -> BaseConfig {
    BaseConfig {
        loan_principal: 5_000_000.0,
        loan_interest_rate: 8.5,
        loan_tenure_months: 240,
        current_emi: 0.0,
        loan_type: LoanType::Home,
        current_cash: 500_000.0,
        current_equity: 1_000_000.0,
        current_debt: 300_000.0,
        equity_sip: 10_000.0,
        debt_sip: 5_000.0,
        cash_sip: 5_000.0,
        monthly_income: 150_000.0,
        monthly_expenses: 70_000.0,
        equity_return: 12.0,
        debt_return: 7.0,
        cash_return: 4.0,
        inflation_rate: 6.0,
        tax_slab: 30.0,
        enable_inflation: false,
        forecast_months: 60,
        enable_switch_after_loan: true,
    }
}

pub fn default_scenarios() -> Vec<ScenarioConfig> {
    vec![
        ScenarioConfig {
            id: "status-quo".to_string(),
            name: "Status Quo".to_string(),
            extra_emi_payment: 0.0,
            extra_emi_source: ExtraEmiSource::Income,
            transfers: Vec::new(),
            reinvest_equity_percent: 60.0,
            reinvest_debt_percent: 30.0,
            reinvest_cash_percent: 10.0,
        },
        ScenarioConfig {
            id: "optimized".to_string(),
            name: "Optimized".to_string(),
            extra_emi_payment: 10_000.0,
            extra_emi_source: ExtraEmiSource::Cash,
            transfers: vec![MoneyTransfer {
                id: "1".to_string(),
                from: Bucket::Cash,
                to: TransferTarget::Loan,
                amount: 200_000.0,
            }],
            reinvest_equity_percent: 70.0,
            reinvest_debt_percent: 20.0,
            reinvest_cash_percent: 10.0,
        },
    ]
}
