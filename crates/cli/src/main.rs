use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reachdeck_core::config::Settings;
use reachdeck_core::deck;
use reachdeck_core::domain::analysis::AnalysisResult;
use reachdeck_core::domain::handle::normalize_handle;
use reachdeck_core::slidegen::{self, error::SlidegenApiError, SlidegenClient};
use reachdeck_core::stats::{self, simulated::SimulatedStatsProvider};

#[derive(Debug, Parser)]
#[command(name = "reachdeck_cli")]
struct Args {
    /// YouTube channel handle. A leading "@" is stripped.
    #[arg(long)]
    youtube: Option<String>,

    /// TikTok username. A leading "@" is stripped.
    #[arg(long)]
    tiktok: Option<String>,

    /// Creator name used for the deck title and the output filename.
    /// Defaults to whichever handle was supplied.
    #[arg(long)]
    creator_name: Option<String>,

    /// Output path for the rendered deck. Defaults to a name derived from
    /// the creator label.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also submit the analysis to the external slide-generation API.
    #[arg(long)]
    slidegen: bool,

    /// Do everything except writing the deck file.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    anyhow::ensure!(
        has_handle(args.youtube.as_deref()) || has_handle(args.tiktok.as_deref()),
        "provide at least one of --youtube or --tiktok"
    );

    let analysis = stats::analyze(
        &SimulatedStatsProvider,
        args.youtube.as_deref(),
        args.tiktok.as_deref(),
    )
    .await;

    let creator = args
        .creator_name
        .clone()
        .or_else(|| args.youtube.clone())
        .or_else(|| args.tiktok.clone());

    let bytes = deck::render_report(&analysis, creator.as_deref(), chrono::Utc::now())?;

    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(deck::suggested_filename(creator.as_deref())));

    if args.dry_run {
        tracing::info!(
            dry_run = true,
            suggestions = analysis.suggestions.len(),
            deck_bytes = bytes.len(),
            out_path = %out_path.display(),
            "dry run: skipping deck write"
        );
    } else {
        std::fs::write(&out_path, &bytes)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::info!(
            out_path = %out_path.display(),
            deck_bytes = bytes.len(),
            suggestions = analysis.suggestions.len(),
            "wrote report deck"
        );
    }

    if args.slidegen {
        run_slidegen(&settings, &analysis, creator.as_deref()).await;
    }

    Ok(())
}

/// Best-effort external path: failures are reported but never discard the
/// locally rendered deck.
async fn run_slidegen(settings: &Settings, analysis: &AnalysisResult, creator: Option<&str>) {
    let client = match SlidegenClient::from_settings(settings) {
        Ok(client) => client,
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %format!("{err:#}"), "slide-gen client unavailable");
            return;
        }
    };

    let prompt = slidegen::prompt::build_prompt(analysis, creator);

    match client.generate(&prompt).await {
        Ok(generated) => tracing::info!(
            embed = generated.embed.as_deref().unwrap_or("-"),
            download = generated.download.as_deref().unwrap_or("-"),
            id = generated.id.as_deref().unwrap_or("-"),
            "slide-gen deck ready"
        ),
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            let message = match err.downcast_ref::<SlidegenApiError>() {
                Some(diag) => diag.to_string(),
                None => format!("{err:#}"),
            };
            tracing::error!(error = %message, "slide-gen call failed; local deck unaffected");
        }
    }
}

fn has_handle(handle: Option<&str>) -> bool {
    handle.is_some_and(|h| !normalize_handle(h).is_empty())
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
