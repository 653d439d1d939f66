use tracing::{debug, info};

use super::finance::{
    apply_monthly_return, calculate_effective_rate, calculate_emi, calculate_monthly_interest,
};
use super::transfers::{Balances, apply_transfers};
use super::types::{
    BaseConfig, ExtraEmiSource, MonthlySnapshot, ScenarioConfig, ScenarioResult,
    SimulationResult,
};
use super::warnings::generate_warnings;

pub const MAX_SIMULATION_MONTHS: u32 = 600;

/// Loan lifecycle of one scenario. Only `Open` moves, and only once.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum LoanState {
    Open,
    ClosedNoSwitch,
    ClosedSwitched,
}

impl LoanState {
    fn closed(enable_switch: bool) -> Self {
        if enable_switch {
            LoanState::ClosedSwitched
        } else {
            LoanState::ClosedNoSwitch
        }
    }

    fn is_open(self) -> bool {
        self == LoanState::Open
    }
}

/// Per-run constants derived once from the configs.
#[derive(Debug)]
struct ScenarioPlan<'a> {
    base: &'a BaseConfig,
    scenario: &'a ScenarioConfig,
    effective_rate: f64,
    base_emi: f64,
}

#[derive(Debug, Clone, Copy)]
struct ScenarioState {
    balances: Balances,
    monthly_expenses: f64,
    loan: LoanState,
    total_interest_paid: f64,
    loan_closure_month: u32,
    switch_month: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default)]
struct LoanPayment {
    emi: f64,
    interest: f64,
    principal: f64,
}

/// Base EMI at `annual_rate`, unless the borrower supplied a lender EMI.
pub(crate) fn base_emi(base: &BaseConfig, annual_rate: f64) -> f64 {
    if base.current_emi > 0.0 {
        base.current_emi
    } else {
        calculate_emi(base.loan_principal, annual_rate, base.loan_tenure_months)
    }
}

fn horizon_months(base: &BaseConfig) -> u32 {
    if base.forecast_months == 0 {
        MAX_SIMULATION_MONTHS
    } else {
        base.forecast_months
    }
}

pub fn run_multi_scenario_simulation(
    base: &BaseConfig,
    scenarios: &[ScenarioConfig],
) -> SimulationResult {
    let mut results = Vec::with_capacity(scenarios.len());
    let mut warnings = Vec::new();

    for scenario in scenarios {
        results.push(run_scenario(base, scenario));
        warnings.extend(generate_warnings(base, scenario));
    }

    info!(
        scenarios = results.len(),
        warnings = warnings.len(),
        "multi-scenario simulation complete"
    );

    SimulationResult {
        scenarios: results,
        warnings,
    }
}

/// Simulates one scenario over `forecast_months` (0 means
/// [`MAX_SIMULATION_MONTHS`]). Longer horizons are not rejected here; the
/// request layer enforces the ceiling.
pub fn run_scenario(base: &BaseConfig, scenario: &ScenarioConfig) -> ScenarioResult {
    let effective_rate =
        calculate_effective_rate(base.loan_interest_rate, base.tax_slab, base.is_home_loan());
    let plan = ScenarioPlan {
        base,
        scenario,
        effective_rate,
        base_emi: base_emi(base, effective_rate),
    };

    let opening = Balances {
        cash: base.current_cash,
        equity: base.current_equity,
        debt: base.current_debt,
        loan: base.loan_principal,
    };
    let mut state = ScenarioState {
        balances: apply_transfers(opening, &scenario.transfers),
        monthly_expenses: base.monthly_expenses,
        loan: LoanState::Open,
        total_interest_paid: 0.0,
        loan_closure_month: 0,
        switch_month: None,
    };

    let months = horizon_months(base);
    let mut snapshots = Vec::with_capacity(months.min(MAX_SIMULATION_MONTHS) as usize);
    for month in 1..=months {
        let (next, snapshot) = step_month(&plan, state, month);
        state = next;
        snapshots.push(snapshot);
    }

    debug!(
        scenario = %scenario.id,
        months,
        closure_month = state.loan_closure_month,
        interest_paid = state.total_interest_paid,
        "scenario simulated"
    );

    let last = snapshots.last();
    ScenarioResult {
        scenario_id: scenario.id.clone(),
        scenario_name: scenario.name.clone(),
        final_net_worth: last.map_or(0.0, |s| s.net_worth),
        total_interest_paid: state.total_interest_paid,
        loan_closure_month: state.loan_closure_month,
        switch_month: state.switch_month,
        total_equity: last.map_or(0.0, |s| s.equity_balance),
        total_debt: last.map_or(0.0, |s| s.debt_balance),
        total_cash: last.map_or(0.0, |s| s.cash_balance),
        monthly_snapshots: snapshots,
    }
}

fn step_month(
    plan: &ScenarioPlan<'_>,
    mut state: ScenarioState,
    month: u32,
) -> (ScenarioState, MonthlySnapshot) {
    let base = plan.base;
    let scenario = plan.scenario;

    if base.enable_inflation && month > 1 {
        state.monthly_expenses *= 1.0 + base.inflation_rate / 1200.0;
    }
    let monthly_surplus = base.monthly_income - state.monthly_expenses;

    let balances = &mut state.balances;
    balances.equity = apply_monthly_return(balances.equity, base.equity_return);
    balances.debt = apply_monthly_return(balances.debt, base.debt_return);
    balances.cash = apply_monthly_return(balances.cash, base.cash_return);

    balances.equity += base.equity_sip;
    balances.debt += base.debt_sip;
    balances.cash += base.cash_sip;

    let actual_extra_emi = withdraw_extra_emi(plan, &mut state);
    let payment = pay_loan(plan, &mut state, actual_extra_emi, month);

    let balances = &mut state.balances;
    match state.loan {
        LoanState::Open => {
            let mut net_surplus = monthly_surplus - plan.base_emi;
            if scenario.extra_emi_source == ExtraEmiSource::Income {
                net_surplus -= actual_extra_emi;
            }
            balances.cash += net_surplus;
        }
        LoanState::ClosedSwitched => {
            let freed_emi = if scenario.extra_emi_source == ExtraEmiSource::Income {
                plan.base_emi + scenario.extra_emi_payment
            } else {
                plan.base_emi
            };
            balances.equity += freed_emi * scenario.reinvest_equity_percent / 100.0;
            balances.debt += freed_emi * scenario.reinvest_debt_percent / 100.0;
            balances.cash += freed_emi * scenario.reinvest_cash_percent / 100.0;
            balances.cash += monthly_surplus;
        }
        LoanState::ClosedNoSwitch => {
            balances.cash += monthly_surplus;
        }
    }

    let total_assets = state.balances.total_assets();
    let snapshot = MonthlySnapshot {
        month,
        loan_balance: state.balances.loan,
        emi_paid: payment.emi,
        interest_paid: payment.interest,
        principal_paid: payment.principal,
        equity_balance: state.balances.equity,
        debt_balance: state.balances.debt,
        cash_balance: state.balances.cash,
        monthly_surplus,
        monthly_expenses: state.monthly_expenses,
        total_assets,
        net_worth: total_assets - state.balances.loan,
        loan_closed: !state.loan.is_open(),
        switch_activated: state.loan == LoanState::ClosedSwitched,
    };

    (state, snapshot)
}

/// Extra payment actually available this month. Bucket-funded extras are
/// truncated to what the bucket holds; income-funded extras are not.
fn withdraw_extra_emi(plan: &ScenarioPlan<'_>, state: &mut ScenarioState) -> f64 {
    let requested = plan.scenario.extra_emi_payment;
    if !state.loan.is_open() || requested <= 0.0 {
        return 0.0;
    }

    let Some(bucket) = plan.scenario.extra_emi_source.bucket() else {
        return requested;
    };
    let available = state.balances.bucket(bucket).max(0.0);
    let actual = requested.min(available);
    if actual > 0.0 {
        *state.balances.bucket_mut(bucket) -= actual;
    }
    actual
}

fn pay_loan(
    plan: &ScenarioPlan<'_>,
    state: &mut ScenarioState,
    actual_extra_emi: f64,
    month: u32,
) -> LoanPayment {
    if !state.loan.is_open() {
        return LoanPayment::default();
    }

    let balance = state.balances.loan;
    if balance <= 0.0 {
        // Prepaid in full by the month-zero transfers.
        state.balances.loan = 0.0;
        close_loan(plan, state, month);
        return LoanPayment::default();
    }

    let interest = calculate_monthly_interest(balance, plan.effective_rate);
    let mut emi = (plan.base_emi + actual_extra_emi).min(balance + interest);
    let mut principal = emi - interest;

    if balance - principal <= 0.0 {
        principal = balance;
        emi = principal + interest;
        state.balances.loan = 0.0;
        close_loan(plan, state, month);
    } else {
        state.balances.loan -= principal;
    }
    state.total_interest_paid += interest;

    LoanPayment {
        emi,
        interest,
        principal,
    }
}

fn close_loan(plan: &ScenarioPlan<'_>, state: &mut ScenarioState, month: u32) {
    state.loan = LoanState::closed(plan.base.enable_switch_after_loan);
    state.loan_closure_month = month;
    // Recorded whether or not the Switch is enabled; only allocation depends on it.
    state.switch_month = Some(month);
}
