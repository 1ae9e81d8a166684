//! Memoir web server.
//!
//! Loads the roster and compiled documents, then serves the browsing UI.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use memoir_web::config::AppConfig;
use memoir_web::routes;
use memoir_web::state::AppState;

/// Memoir — testimonial browsing service
#[derive(Parser, Debug)]
#[command(name = "memoir-web")]
#[command(about = "Browse testimonials from the roster and compiled datasets", long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "MEMOIR_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address override
    #[arg(short, long, env = "MEMOIR_LISTEN")]
    listen: Option<String>,

    /// Roster document override
    #[arg(long, env = "MEMOIR_ROSTER")]
    roster: Option<PathBuf>,

    /// Compiled document override
    #[arg(long, env = "MEMOIR_COMPILED")]
    compiled: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(listen) = args.listen {
        config.listen = listen;
    }
    if let Some(roster) = args.roster {
        config.roster_path = roster;
    }
    if let Some(compiled) = args.compiled {
        config.compiled_path = compiled;
    }

    // Fatal if either document is missing or malformed.
    let state = AppState::from_config(config.clone()).context("loading datasets")?;

    let listener = tokio::net::TcpListener::bind(&config.listen)
        .await
        .with_context(|| format!("binding {}", config.listen))?;
    tracing::info!("memoir-web listening on {}", config.listen);

    axum::serve(listener, routes::router(state)).await?;
    Ok(())
}
