use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use lendscope::config::AppConfig;
use lendscope::error::AppError;
use lendscope::telemetry;
use lendscope::workflows::underwriting::{
    applications_from_path, underwriting_router, ApplicationPreview, Assessment, LoanApplication,
    LoanPurpose, LoanType, ResidenceType, ScorecardPredictor, UnderwritingService,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Lendscope",
    about = "Score consumer loan applications for default risk from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a single application and print the result bundles
    Assess(AssessArgs),
    /// Assess every application in a CSV export
    Batch(BatchArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// Applicant age in years (18-100)
    #[arg(long)]
    age: u8,
    /// Annual income
    #[arg(long)]
    income: f64,
    /// Residence status: Owned, Rented, or Mortgage
    #[arg(long, value_parser = parse_residence)]
    residence_type: ResidenceType,
    /// Requested loan amount
    #[arg(long)]
    loan_amount: f64,
    /// Repayment period in months
    #[arg(long)]
    loan_tenure_months: u32,
    /// Loan purpose: Education, Home, Auto, or Personal
    #[arg(long, value_parser = parse_purpose)]
    loan_purpose: LoanPurpose,
    /// Loan type: Unsecured or Secured
    #[arg(long, value_parser = parse_loan_type)]
    loan_type: LoanType,
    /// Currently active loan accounts (1-4)
    #[arg(long, default_value_t = 1)]
    num_open_accounts: u8,
    /// Average days past due per delinquency
    #[arg(long, default_value_t = 0.0)]
    avg_dpd_per_delinquency: f64,
    /// Percentage of payments that were late (0-100)
    #[arg(long, default_value_t = 0)]
    delinquency_ratio: u8,
    /// Percentage of available credit in use (0-100)
    #[arg(long, default_value_t = 0)]
    credit_utilization_ratio: u8,
    /// Skip the model call and print derived metrics and risk flags only
    #[arg(long)]
    preview: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV file with one application per row, headers matching the field names
    #[arg(long)]
    csv: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Batch(args) => run_batch(args),
    }
}

fn parse_residence(raw: &str) -> Result<ResidenceType, String> {
    ResidenceType::from_label(raw)
        .ok_or_else(|| format!("expected Owned, Rented, or Mortgage (got '{raw}')"))
}

fn parse_purpose(raw: &str) -> Result<LoanPurpose, String> {
    LoanPurpose::from_label(raw)
        .ok_or_else(|| format!("expected Education, Home, Auto, or Personal (got '{raw}')"))
}

fn parse_loan_type(raw: &str) -> Result<LoanType, String> {
    LoanType::from_label(raw).ok_or_else(|| format!("expected Unsecured or Secured (got '{raw}')"))
}

fn scoring_service() -> Arc<UnderwritingService<ScorecardPredictor>> {
    Arc::new(UnderwritingService::new(Arc::new(
        ScorecardPredictor::default(),
    )))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(underwriting_router(scoring_service()))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan risk scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let preview_only = args.preview;
    let application = application_from_args(&args);
    let service = scoring_service();

    if preview_only {
        let preview = service.preview(&application)?;
        render_preview(&preview);
    } else {
        let assessment = service.assess(&application)?;
        render_preview(&ApplicationPreview {
            metrics: assessment.metrics,
            risk: assessment.risk.clone(),
        });
        render_assessment(&assessment);
    }

    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let applications = applications_from_path(&args.csv)?;
    let service = scoring_service();

    println!("Assessing {} application(s)", applications.len());
    for (index, application) in applications.iter().enumerate() {
        let assessment = service.assess(application)?;
        println!(
            "#{}: probability {}, score {} ({}), {}",
            index + 1,
            format_percent(assessment.prediction.probability),
            assessment.prediction.credit_score,
            assessment.prediction.rating.label(),
            assessment.risk.level().label(),
        );
    }

    Ok(())
}

fn application_from_args(args: &AssessArgs) -> LoanApplication {
    LoanApplication {
        age: args.age,
        income: args.income,
        residence_type: args.residence_type,
        loan_amount: args.loan_amount,
        loan_tenure_months: args.loan_tenure_months,
        loan_purpose: args.loan_purpose,
        loan_type: args.loan_type,
        num_open_accounts: args.num_open_accounts,
        avg_dpd_per_delinquency: args.avg_dpd_per_delinquency,
        delinquency_ratio: args.delinquency_ratio,
        credit_utilization_ratio: args.credit_utilization_ratio,
    }
}

fn render_preview(preview: &ApplicationPreview) {
    println!("Calculated metrics");
    println!(
        "- Loan to income ratio: {:.2}",
        preview.metrics.loan_to_income_ratio
    );
    match &preview.metrics.emi {
        Some(projection) => {
            println!(
                "- Monthly EMI: {:.0} (EMI to income {})",
                projection.monthly_emi,
                format_percent(projection.emi_to_income_ratio)
            );
        }
        None => println!("- Monthly EMI: not applicable"),
    }

    let summary = preview.risk.summary();
    println!(
        "\nRisk indicators: {}/3 ({})",
        summary.score, summary.level_label
    );
    for factor in summary.factors {
        println!("- {factor}");
    }
}

fn render_assessment(assessment: &Assessment) {
    println!("\nCredit assessment");
    println!(
        "- Default probability: {}",
        format_percent(assessment.prediction.probability)
    );
    println!(
        "- Credit score: {} (rating {})",
        assessment.prediction.credit_score,
        assessment.prediction.rating.label()
    );

    println!("\nRecommendations");
    for recommendation in &assessment.recommendations {
        println!("- {}", recommendation.message());
    }
}

fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
