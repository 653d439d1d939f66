use super::engine::base_emi;
use super::format::{format_compact_currency, format_indian_number};
use super::transfers::{Balances, apply_transfers, is_prepayment};
use super::types::{
    BaseConfig, Bucket, ScenarioConfig, Severity, Warning, WarningKind,
};

const EMERGENCY_FUND_MONTHS: f64 = 6.0;
const MIN_EXTRA_EMI_RUNWAY_MONTHS: i64 = 12;
const SPLIT_TOLERANCE_PERCENT: f64 = 0.01;

/// Configuration-level advisories for one scenario, in check order.
///
/// Works from the month-zero balances only and never looks at a
/// simulated trajectory.
pub fn generate_warnings(base: &BaseConfig, scenario: &ScenarioConfig) -> Vec<Warning> {
    let post_transfer = apply_transfers(
        Balances {
            cash: base.current_cash,
            equity: base.current_equity,
            debt: base.current_debt,
            loan: base.loan_principal,
        },
        &scenario.transfers,
    );

    let mut warnings = Vec::new();
    let mut push = |kind, severity, title: &str, message: String| {
        warnings.push(Warning {
            scenario_id: scenario.id.clone(),
            kind,
            severity,
            title: title.to_string(),
            message: format!("[{}] {message}", scenario.name),
        });
    };

    let emergency_fund = base.monthly_expenses * EMERGENCY_FUND_MONTHS;
    if post_transfer.cash < emergency_fund {
        push(
            WarningKind::Liquidity,
            Severity::High,
            "Liquidity Crunch",
            format!(
                "Post-transfer cash ({}) is below recommended emergency fund of {} (6× monthly expenses).",
                format_compact_currency(post_transfer.cash),
                format_compact_currency(emergency_fund),
            ),
        );
    }

    let extra_source = scenario.extra_emi_source.bucket();
    if let Some(bucket) = extra_source.filter(|_| scenario.extra_emi_payment > 0.0) {
        let source_balance = post_transfer.bucket(bucket);
        let runway_months = (source_balance / scenario.extra_emi_payment).floor() as i64;
        if runway_months < MIN_EXTRA_EMI_RUNWAY_MONTHS {
            push(
                WarningKind::CashFlow,
                Severity::High,
                "Insufficient Extra EMI Source",
                format!(
                    "{} balance ({}) can only sustain extra EMI of ₹{} for {runway_months} months.",
                    bucket.label(),
                    format_compact_currency(source_balance),
                    format_indian_number(scenario.extra_emi_payment),
                ),
            );
        }
    }

    if base.equity_return > base.loan_interest_rate {
        for _ in scenario
            .transfers
            .iter()
            .filter(|t| t.from == Bucket::Equity && is_prepayment(t))
        {
            push(
                WarningKind::OpportunityCost,
                Severity::Medium,
                "Opportunity Cost Alert",
                format!(
                    "Liquidating equity ({}% CAGR) to prepay loan ({}% p.a.) may result in opportunity loss.",
                    base.equity_return, base.loan_interest_rate,
                ),
            );
        }
    }

    if base.is_home_loan() && base.tax_slab > 0.0 && scenario.transfers.iter().any(is_prepayment) {
        push(
            WarningKind::TaxShield,
            Severity::Low,
            "Tax Shield Loss",
            format!(
                "Prepaying home loan may reduce Section 24(b) interest deduction benefits (up to ₹2L/year). Current tax slab: {}%.",
                base.tax_slab,
            ),
        );
    }

    // Nominal rate and pre-transfer principal; scenario extras are ignored.
    let nominal_emi = base_emi(base, base.loan_interest_rate);
    let total_outflow = nominal_emi + base.total_sip();
    let gross_surplus = base.monthly_income - base.monthly_expenses;
    let shortfall = gross_surplus - total_outflow;
    if shortfall < 0.0 {
        push(
            WarningKind::CashFlow,
            Severity::High,
            "Monthly Cash Flow Deficit",
            format!(
                "Monthly outflows (₹{}) exceed surplus (₹{}) by ₹{}.",
                format_indian_number(total_outflow),
                format_indian_number(gross_surplus),
                format_indian_number(shortfall.abs()),
            ),
        );
    }

    if base.enable_switch_after_loan {
        let total = scenario.reinvest_total_percent();
        if (total - 100.0).abs() > SPLIT_TOLERANCE_PERCENT {
            push(
                WarningKind::Info,
                Severity::High,
                "Invalid Reinvestment Split",
                format!("Reinvestment percentages must sum to 100%. Current: {total:.1}%"),
            );
        }
    }

    warnings
}
