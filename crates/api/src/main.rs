use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reachdeck_core::deck;
use reachdeck_core::domain::analysis::AnalysisResult;
use reachdeck_core::slidegen::{error::SlidegenApiError, GeneratedDeck, SlidegenClient};
use reachdeck_core::stats::{self, simulated::SimulatedStatsProvider, StatsProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = reachdeck_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let slidegen: Option<Arc<SlidegenClient>> = match SlidegenClient::from_settings(&settings) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "slide-gen client unavailable; POST /reports/slidegen will answer 503"
            );
            None
        }
    };

    let state = AppState {
        provider: Arc::new(SimulatedStatsProvider),
        slidegen,
    };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/analyses", post(create_analysis))
        .route("/reports", post(create_report))
        .route("/reports/slidegen", post(create_slidegen_report))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Clone)]
struct AppState {
    provider: Arc<dyn StatsProvider>,
    slidegen: Option<Arc<SlidegenClient>>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    youtube_channel: Option<String>,

    #[serde(default)]
    tiktok_username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReportRequest {
    #[serde(default)]
    youtube_channel: Option<String>,

    #[serde(default)]
    tiktok_username: Option<String>,

    #[serde(default)]
    creator_name: Option<String>,

    /// Render exactly this analysis instead of collecting fresh stats.
    #[serde(default)]
    analysis: Option<AnalysisResult>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

fn has_handle(handle: Option<&str>) -> bool {
    handle.is_some_and(|h| !reachdeck_core::domain::handle::normalize_handle(h).is_empty())
}

async fn create_analysis(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    if !has_handle(req.youtube_channel.as_deref()) && !has_handle(req.tiktok_username.as_deref()) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "provide at least one of youtube_channel or tiktok_username",
        ));
    }

    let analysis = stats::analyze(
        state.provider.as_ref(),
        req.youtube_channel.as_deref(),
        req.tiktok_username.as_deref(),
    )
    .await;

    Ok(Json(analysis))
}

async fn create_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let analysis = resolve_analysis(&state, &req).await?;
    let creator = creator_label(&req);

    let bytes = deck::render_report(&analysis, creator.as_deref(), Utc::now()).map_err(|err| {
        sentry_anyhow::capture_anyhow(&anyhow::Error::new(err.clone()));
        tracing::error!(error = %err, "deck rendering failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    })?;

    let filename = deck::suggested_filename(creator.as_deref());
    let headers = [
        (header::CONTENT_TYPE, deck::PPTX_MIME.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, bytes))
}

async fn create_slidegen_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<GeneratedDeck>, ApiError> {
    let Some(client) = state.slidegen.clone() else {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "slide-gen API is not configured",
        ));
    };

    let analysis = resolve_analysis(&state, &req).await?;
    let creator = creator_label(&req);
    let prompt = reachdeck_core::slidegen::prompt::build_prompt(&analysis, creator.as_deref());

    match client.generate(&prompt).await {
        Ok(generated) => Ok(Json(generated)),
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            let message = match err.downcast_ref::<SlidegenApiError>() {
                Some(diag) => diag.to_string(),
                None => format!("{err:#}"),
            };
            tracing::error!(error = %message, "slide-gen call failed");
            Err(api_error(StatusCode::BAD_GATEWAY, message))
        }
    }
}

async fn resolve_analysis(
    state: &AppState,
    req: &ReportRequest,
) -> Result<AnalysisResult, ApiError> {
    if let Some(analysis) = &req.analysis {
        return Ok(analysis.clone());
    }

    if !has_handle(req.youtube_channel.as_deref()) && !has_handle(req.tiktok_username.as_deref()) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "provide at least one of youtube_channel or tiktok_username, or a prepared analysis",
        ));
    }

    Ok(stats::analyze(
        state.provider.as_ref(),
        req.youtube_channel.as_deref(),
        req.tiktok_username.as_deref(),
    )
    .await)
}

/// Label used for the deck title and the download filename: explicit creator
/// name first, then whichever handle was supplied.
fn creator_label(req: &ReportRequest) -> Option<String> {
    [
        req.creator_name.as_deref(),
        req.youtube_channel.as_deref(),
        req.tiktok_username.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|s| !s.is_empty())
    .map(str::to_string)
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &reachdeck_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
