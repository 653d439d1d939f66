use axum::{
    Router,
    extract::{Json, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::core::{
    BaseConfig, MAX_SIMULATION_MONTHS, ScenarioComparison, ScenarioConfig, SimulationResult,
    compare_scenarios, default_base_config, default_scenarios, run_multi_scenario_simulation,
};

#[derive(Parser, Debug)]
#[command(
    name = "loanswitch",
    about = "Month-by-month loan prepayment vs. investment scenario simulator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API over HTTP
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Simulate a saved {baseConfig, scenarios} document and print the result
    Simulate {
        #[arg(
            long,
            help = "Path to a saved configuration; the built-in default profile is used when omitted"
        )]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Print the default {baseConfig, scenarios} document
    Defaults,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid JSON payload: {0}")]
    InvalidJson(String),
    #[error("Failed to read {path}: {source}")]
    ConfigFile {
        path: String,
        source: std::io::Error,
    },
    #[error("{0} must be a finite number")]
    NonFinite(String),
    #[error("baseConfig.loanTenureMonths must be >= 1")]
    InvalidTenure,
    #[error("baseConfig.forecastMonths must be <= 600, got {0}")]
    HorizonTooLong(u32),
    #[error("at least one scenario is required")]
    NoScenarios,
    #[error("duplicate scenario id: {0}")]
    DuplicateScenarioId(String),
    #[error("Failed to render JSON: {0}")]
    Render(String),
}

/// The persisted document shape: one base profile plus its scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub base_config: BaseConfig,
    pub scenarios: Vec<ScenarioConfig>,
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            base_config: default_base_config(),
            scenarios: default_scenarios(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SimulatePayload {
    base_config: Option<BaseConfig>,
    scenarios: Option<Vec<ScenarioConfig>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponse {
    #[serde(flatten)]
    pub result: SimulationResult,
    pub comparison: ScenarioComparison,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn request_from_json(json: &str) -> Result<SimulationRequest, RequestError> {
    let payload = serde_json::from_str::<SimulatePayload>(json)
        .map_err(|e| RequestError::InvalidJson(e.to_string()))?;
    request_from_payload(payload)
}

pub fn request_from_file(path: &Path) -> Result<SimulationRequest, RequestError> {
    let raw = std::fs::read_to_string(path).map_err(|source| RequestError::ConfigFile {
        path: path.display().to_string(),
        source,
    })?;
    request_from_json(&raw)
}

fn request_from_payload(payload: SimulatePayload) -> Result<SimulationRequest, RequestError> {
    let request = SimulationRequest {
        base_config: payload.base_config.unwrap_or_else(default_base_config),
        scenarios: payload.scenarios.unwrap_or_else(default_scenarios),
    };
    validate_request(&request)?;
    Ok(request)
}

/// Structural checks only. Implausible but well-formed numbers are left to
/// the engine, which reports them as warnings.
pub fn validate_request(request: &SimulationRequest) -> Result<(), RequestError> {
    let base = &request.base_config;
    for (name, value) in [
        ("loanPrincipal", base.loan_principal),
        ("loanInterestRate", base.loan_interest_rate),
        ("currentEmi", base.current_emi),
        ("currentCash", base.current_cash),
        ("currentEquity", base.current_equity),
        ("currentDebt", base.current_debt),
        ("equitySip", base.equity_sip),
        ("debtSip", base.debt_sip),
        ("cashSip", base.cash_sip),
        ("monthlyIncome", base.monthly_income),
        ("monthlyExpenses", base.monthly_expenses),
        ("equityReturn", base.equity_return),
        ("debtReturn", base.debt_return),
        ("cashReturn", base.cash_return),
        ("inflationRate", base.inflation_rate),
        ("taxSlab", base.tax_slab),
    ] {
        if !value.is_finite() {
            return Err(RequestError::NonFinite(format!("baseConfig.{name}")));
        }
    }

    if base.loan_tenure_months == 0 {
        return Err(RequestError::InvalidTenure);
    }

    if base.forecast_months > MAX_SIMULATION_MONTHS {
        return Err(RequestError::HorizonTooLong(base.forecast_months));
    }

    if request.scenarios.is_empty() {
        return Err(RequestError::NoScenarios);
    }

    let mut seen = HashSet::new();
    for scenario in &request.scenarios {
        if !seen.insert(scenario.id.as_str()) {
            return Err(RequestError::DuplicateScenarioId(scenario.id.clone()));
        }

        for (name, value) in [
            ("extraEmiPayment", scenario.extra_emi_payment),
            ("reinvestEquityPercent", scenario.reinvest_equity_percent),
            ("reinvestDebtPercent", scenario.reinvest_debt_percent),
            ("reinvestCashPercent", scenario.reinvest_cash_percent),
        ] {
            if !value.is_finite() {
                return Err(RequestError::NonFinite(format!(
                    "scenario {}: {name}",
                    scenario.id
                )));
            }
        }
        if let Some(transfer) = scenario.transfers.iter().find(|t| !t.amount.is_finite()) {
            return Err(RequestError::NonFinite(format!(
                "scenario {}: transfer {} amount",
                scenario.id, transfer.id
            )));
        }
    }

    Ok(())
}

pub fn simulate(request: &SimulationRequest) -> SimulateResponse {
    let result = run_multi_scenario_simulation(&request.base_config, &request.scenarios);
    let comparison = compare_scenarios(&result);
    SimulateResponse { result, comparison }
}

/// Runs the saved document at `config`, or the default profile, and
/// prints the response as JSON.
pub fn run_simulate_command(config: Option<&Path>, pretty: bool) -> Result<(), RequestError> {
    let request = match config {
        Some(path) => request_from_file(path)?,
        None => SimulationRequest::default(),
    };
    let response = simulate(&request);
    println!("{}", to_json(&response, pretty)?);
    Ok(())
}

pub fn print_defaults() -> Result<(), RequestError> {
    println!("{}", to_json(&SimulationRequest::default(), true)?);
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, RequestError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| RequestError::Render(e.to_string()))
}

pub fn create_router() -> Router {
    Router::new()
        .route("/api/defaults", get(defaults_handler))
        .route("/api/simulate", post(simulate_handler))
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("loanswitch HTTP API listening on http://{addr}");

    axum::serve(listener, create_router()).await
}

async fn defaults_handler() -> Response {
    json_response(StatusCode::OK, SimulationRequest::default())
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn simulate_handler(payload: Result<Json<SimulatePayload>, JsonRejection>) -> Response {
    let request = match payload {
        Ok(Json(payload)) => request_from_payload(payload),
        Err(rejection) => Err(RequestError::InvalidJson(rejection.body_text())),
    };

    match request {
        Ok(request) => json_response(StatusCode::OK, simulate(&request)),
        Err(err) => {
            warn!(error = %err, "rejected simulation request");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
