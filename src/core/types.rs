use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    Home,
    Personal,
    Car,
    Other,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Cash,
    Equity,
    Debt,
}

impl Bucket {
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Cash => "cash",
            Bucket::Equity => "equity",
            Bucket::Debt => "debt",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferTarget {
    Cash,
    Equity,
    Debt,
    Loan,
}

impl TransferTarget {
    pub fn bucket(self) -> Option<Bucket> {
        match self {
            TransferTarget::Cash => Some(Bucket::Cash),
            TransferTarget::Equity => Some(Bucket::Equity),
            TransferTarget::Debt => Some(Bucket::Debt),
            TransferTarget::Loan => None,
        }
    }
}

/// Where the extra loan payment is drawn from each month.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraEmiSource {
    #[serde(alias = "none")]
    Income,
    Cash,
    Equity,
    Debt,
}

impl ExtraEmiSource {
    pub fn bucket(self) -> Option<Bucket> {
        match self {
            ExtraEmiSource::Income => None,
            ExtraEmiSource::Cash => Some(Bucket::Cash),
            ExtraEmiSource::Equity => Some(Bucket::Equity),
            ExtraEmiSource::Debt => Some(Bucket::Debt),
        }
    }
}

/// Scenario-invariant borrower parameters. Rates are annual percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseConfig {
    pub loan_principal: f64,
    pub loan_interest_rate: f64,
    pub loan_tenure_months: u32,
    /// Lender-quoted EMI; zero means derive it from principal, rate and tenure.
    #[serde(default)]
    pub current_emi: f64,
    pub loan_type: LoanType,

    pub current_cash: f64,
    pub current_equity: f64,
    pub current_debt: f64,

    pub equity_sip: f64,
    pub debt_sip: f64,
    pub cash_sip: f64,

    pub monthly_income: f64,
    pub monthly_expenses: f64,

    pub equity_return: f64,
    pub debt_return: f64,
    pub cash_return: f64,

    pub inflation_rate: f64,
    pub tax_slab: f64,
    pub enable_inflation: bool,

    pub forecast_months: u32,
    pub enable_switch_after_loan: bool,
}

impl BaseConfig {
    pub fn total_sip(&self) -> f64 {
        self.equity_sip + self.debt_sip + self.cash_sip
    }

    pub fn is_home_loan(&self) -> bool {
        self.loan_type == LoanType::Home
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyTransfer {
    #[serde(default)]
    pub id: String,
    pub from: Bucket,
    pub to: TransferTarget,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    pub id: String,
    pub name: String,

    pub extra_emi_payment: f64,
    pub extra_emi_source: ExtraEmiSource,

    #[serde(default)]
    pub transfers: Vec<MoneyTransfer>,

    pub reinvest_equity_percent: f64,
    pub reinvest_debt_percent: f64,
    pub reinvest_cash_percent: f64,
}

impl ScenarioConfig {
    pub fn reinvest_total_percent(&self) -> f64 {
        self.reinvest_equity_percent + self.reinvest_debt_percent + self.reinvest_cash_percent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySnapshot {
    pub month: u32,

    pub loan_balance: f64,
    pub emi_paid: f64,
    pub interest_paid: f64,
    pub principal_paid: f64,

    pub equity_balance: f64,
    pub debt_balance: f64,
    pub cash_balance: f64,

    pub monthly_surplus: f64,
    pub monthly_expenses: f64,

    pub total_assets: f64,
    pub net_worth: f64,

    pub loan_closed: bool,
    pub switch_activated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub scenario_id: String,
    pub scenario_name: String,
    pub monthly_snapshots: Vec<MonthlySnapshot>,
    pub final_net_worth: f64,
    pub total_interest_paid: f64,
    /// Month the loan reached zero, or 0 when it stays open over the horizon.
    pub loan_closure_month: u32,
    pub switch_month: Option<u32>,
    pub total_equity: f64,
    pub total_debt: f64,
    pub total_cash: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    Liquidity,
    OpportunityCost,
    TaxShield,
    CashFlow,
    Info,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    pub scenario_id: String,
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub scenarios: Vec<ScenarioResult>,
    pub warnings: Vec<Warning>,
}
