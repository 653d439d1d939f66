use serde::Serialize;

use super::types::{ScenarioResult, SimulationResult};

/// Cross-scenario headline figures for comparison tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub best_net_worth_index: Option<usize>,
    pub least_interest_index: Option<usize>,
    /// Only scenarios whose loan closed within the horizon compete here.
    pub earliest_closure_index: Option<usize>,
    pub net_worth_spread: f64,
    pub interest_spread: f64,
    pub closure_spread_months: u32,
}

pub fn compare_scenarios(result: &SimulationResult) -> ScenarioComparison {
    let scenarios = &result.scenarios;

    let best_net_worth_index = index_by(scenarios, |a, b| {
        a.final_net_worth.total_cmp(&b.final_net_worth)
    });
    let least_interest_index = index_by(scenarios, |a, b| {
        b.total_interest_paid.total_cmp(&a.total_interest_paid)
    });
    let earliest_closure_index = scenarios
        .iter()
        .enumerate()
        .filter(|(_, s)| s.loan_closure_month > 0)
        .min_by_key(|(_, s)| s.loan_closure_month)
        .map(|(idx, _)| idx);

    let closures = scenarios
        .iter()
        .map(|s| s.loan_closure_month)
        .filter(|m| *m > 0);
    let closure_spread_months = match (closures.clone().max(), closures.min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    };

    ScenarioComparison {
        best_net_worth_index,
        least_interest_index,
        earliest_closure_index,
        net_worth_spread: spread(scenarios.iter().map(|s| s.final_net_worth)),
        interest_spread: spread(scenarios.iter().map(|s| s.total_interest_paid)),
        closure_spread_months,
    }
}

/// Month-by-month total-asset difference `a - b` over the shared horizon.
/// The loan balance is not netted off.
pub fn wealth_gap(a: &ScenarioResult, b: &ScenarioResult) -> Vec<f64> {
    a.monthly_snapshots
        .iter()
        .zip(&b.monthly_snapshots)
        .map(|(x, y)| x.total_assets - y.total_assets)
        .collect()
}

/// First month whose net worth turns positive.
pub fn net_worth_crossover_month(result: &ScenarioResult) -> Option<u32> {
    result
        .monthly_snapshots
        .iter()
        .find(|s| s.net_worth > 0.0)
        .map(|s| s.month)
}

fn index_by<F>(scenarios: &[ScenarioResult], mut cmp: F) -> Option<usize>
where
    F: FnMut(&ScenarioResult, &ScenarioResult) -> std::cmp::Ordering,
{
    scenarios
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| cmp(*a, *b))
        .map(|(idx, _)| idx)
}

fn spread(values: impl Iterator<Item = f64>) -> f64 {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min.is_finite() && max.is_finite() {
        max - min
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::{default_base_config, default_scenarios};
    use crate::core::engine::run_multi_scenario_simulation;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn default_profile_comparison_picks_winners() {
        let mut base = default_base_config();
        base.forecast_months = 300;
        let result = run_multi_scenario_simulation(&base, &default_scenarios());
        let cmp = compare_scenarios(&result);

        let status_quo = &result.scenarios[0];
        let optimized = &result.scenarios[1];
        assert!(optimized.total_interest_paid < status_quo.total_interest_paid);
        assert_eq!(cmp.least_interest_index, Some(1));
        assert_eq!(cmp.earliest_closure_index, Some(1));
        assert!(optimized.loan_closure_month < status_quo.loan_closure_month);
        assert_eq!(
            cmp.closure_spread_months,
            status_quo.loan_closure_month - optimized.loan_closure_month
        );
        assert_approx(
            cmp.interest_spread,
            status_quo.total_interest_paid - optimized.total_interest_paid,
        );
        assert_approx(
            cmp.net_worth_spread,
            (status_quo.final_net_worth - optimized.final_net_worth).abs(),
        );
    }

    #[test]
    fn open_loans_do_not_win_earliest_closure() {
        let result = run_multi_scenario_simulation(&default_base_config(), &default_scenarios());
        let cmp = compare_scenarios(&result);
        assert!(result.scenarios.iter().all(|s| s.loan_closure_month == 0));
        assert_eq!(cmp.earliest_closure_index, None);
        assert_eq!(cmp.closure_spread_months, 0);
    }

    #[test]
    fn empty_result_has_no_winners() {
        let cmp = compare_scenarios(&SimulationResult {
            scenarios: Vec::new(),
            warnings: Vec::new(),
        });
        assert_eq!(cmp.best_net_worth_index, None);
        assert_eq!(cmp.least_interest_index, None);
        assert_eq!(cmp.net_worth_spread, 0.0);
    }

    #[test]
    fn wealth_gap_and_crossover_follow_snapshots() {
        let result = run_multi_scenario_simulation(&default_base_config(), &default_scenarios());
        let (a, b) = (&result.scenarios[1], &result.scenarios[0]);
        let gap = wealth_gap(a, b);
        assert_eq!(gap.len(), 60);
        assert_approx(
            gap[59],
            a.monthly_snapshots[59].total_assets - b.monthly_snapshots[59].total_assets,
        );

        // Net worth starts negative under a 50L loan and turns positive later.
        let month = net_worth_crossover_month(b).expect("crosses within five years");
        let idx = month as usize - 1;
        assert!(idx > 0);
        assert!(b.monthly_snapshots[idx].net_worth > 0.0);
        assert!(b.monthly_snapshots[idx - 1].net_worth <= 0.0);
        assert!(b.monthly_snapshots[0].net_worth < 0.0);
    }

    #[test]
    fn wealth_gap_counts_assets_spent_on_prepayment() {
        let result = run_multi_scenario_simulation(&default_base_config(), &default_scenarios());
        let (optimized, status_quo) = (&result.scenarios[1], &result.scenarios[0]);
        let gap = wealth_gap(optimized, status_quo);

        // ₹2L cash went to the loan and ₹10K cash funded the first extra EMI,
        // plus a month of 4 % cash return forgone on the ₹2L.
        let first_o = &optimized.monthly_snapshots[0];
        let first_s = &status_quo.monthly_snapshots[0];
        assert_approx(gap[0], first_o.total_assets - first_s.total_assets);
        assert!((gap[0] + 210_666.67).abs() < 0.01, "gap was {}", gap[0]);

        // Net worth barely moves because the loan shrank by the same cash.
        let net_worth_gap = first_o.net_worth - first_s.net_worth;
        assert!(net_worth_gap > 0.0);
        assert!((gap[0] - net_worth_gap).abs() > 200_000.0);
    }
}
