//! People's Saturday School site (pss-site) - Main entry point
//!
//! Loads the two JSON collections once, then serves the server-rendered
//! pages. A failed load is not fatal: the site starts with empty
//! collections and every page renders its empty state.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use pss_common::SiteData;
use pss_site::{build_router, AppState};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for pss-site
#[derive(Parser, Debug)]
#[command(name = "pss-site")]
#[command(about = "People's Saturday School event/speaker site")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5750", env = "PSS_PORT")]
    port: u16,

    /// Directory containing events.json and speakers.json
    #[arg(short, long, env = "PSS_DATA_DIR")]
    data_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pss_site=info,pss_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting PSS Site (pss-site) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let data_dir = pss_common::config::resolve_data_dir(args.data_dir.as_deref());
    info!("Data directory: {}", data_dir.display());

    // All-or-nothing load; must settle before any page handler runs
    let site = SiteData::load(&data_dir).await;

    let state = AppState::new(site);
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("pss-site listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
