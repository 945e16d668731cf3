use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use inquiry_desk::config::AppConfig;
use inquiry_desk::content::{content_router, SiteContent};
use inquiry_desk::error::AppError;
use inquiry_desk::inquiries::{inquiry_router, InquiryService, MemoryInquiryStore, NoopAnalytics};
use inquiry_desk::preferences::{theme_router, MemoryPreferenceStore, UiPreferences};
use inquiry_desk::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Consulting Site Backend",
    about = "Run the inquiry pipeline and content API for the consulting landing page",
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
    /// Inspect the static site content dataset
    Content {
        #[command(subcommand)]
        command: ContentCommand,
    },
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

#[derive(Subcommand, Debug)]
enum ContentCommand {
    /// Print a summary of the seed dataset
    Show(ContentShowArgs),
}

#[derive(Args, Debug, Default)]
struct ContentShowArgs {
    /// Include the full experience and skill listings in the output
    #[arg(long)]
    full: bool,
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
        Command::Content {
            command: ContentCommand::Show(args),
        } => {
            run_content_show(args);
            Ok(())
        }
    }
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

    let content = Arc::new(SiteContent::standard());
    let preferences = Arc::new(UiPreferences::init(Arc::new(
        MemoryPreferenceStore::default(),
    )));
    let service = Arc::new(InquiryService::new(
        Arc::new(MemoryInquiryStore::default()),
        Arc::new(NoopAnalytics),
        config.inquiries.clone(),
    ));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(inquiry_router(service))
        .merge(content_router(content))
        .merge(theme_router(preferences))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "inquiry desk ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_content_show(args: ContentShowArgs) {
    let content = SiteContent::standard();
    let summary = content.summary();

    println!("Site content dataset");
    println!("{} — {}", content.profile.name, content.profile.title);
    println!("\"{}\"", content.profile.tagline);

    println!(
        "\n{} experience entries, {} projects, {} skills, {} testimonials, {} offerings",
        summary.experience_entries,
        summary.projects,
        summary.technical_skills,
        summary.testimonials,
        summary.offerings
    );

    println!("\nService offerings");
    for offering in &content.offerings {
        let highlight = if offering.popular { " (highlighted)" } else { "" };
        println!(
            "- [{}] {} | {} | {}{}",
            offering.tag, offering.title, offering.price, offering.engagement, highlight
        );
    }

    if args.full {
        println!("\nExperience");
        for entry in &content.experience {
            println!("- {} at {} ({})", entry.role, entry.company, entry.duration);
            for responsibility in &entry.responsibilities {
                println!("    * {responsibility}");
            }
        }

        println!("\nTechnical skills");
        for skill in &content.technical_skills {
            println!("- {}: {}%", skill.name, skill.level);
        }

        println!("\nProjects");
        for project in &content.projects {
            println!("- {} [{}]", project.title, project.stack.join(", "));
        }
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn content_show_runs_over_the_standard_seed() {
        // Smoke check: rendering the dataset must not panic with or without
        // the full listings.
        run_content_show(ContentShowArgs { full: false });
        run_content_show(ContentShowArgs { full: true });
    }
}
