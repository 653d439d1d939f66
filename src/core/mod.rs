mod compare;
mod defaults;
mod engine;
mod finance;
mod format;
mod transfers;
mod types;
mod warnings;

pub use compare::{ScenarioComparison, compare_scenarios, net_worth_crossover_month, wealth_gap};
pub use defaults::{default_base_config, default_scenarios};
pub use engine::{MAX_SIMULATION_MONTHS, run_multi_scenario_simulation, run_scenario};
pub use finance::{
    apply_monthly_return, calculate_effective_rate, calculate_emi, calculate_monthly_interest,
};
pub use format::{format_compact_currency, format_indian_number};
pub use transfers::{Balances, apply_transfers};
pub use types::{
    BaseConfig, Bucket, ExtraEmiSource, LoanType, MoneyTransfer, MonthlySnapshot, ScenarioConfig,
    ScenarioResult, Severity, SimulationResult, TransferTarget, Warning, WarningKind,
};
pub use warnings::generate_warnings;
