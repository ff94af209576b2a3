mod api;
mod config;
mod dto;
mod state;

use crate::{config::Config, state::AppState};
use carming::prelude::*;
use std::{path::PathBuf, sync::Arc};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "carming.toml";

#[tokio::main]
async fn main() {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid configuration in {}: {err}", config_path.display());
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.telemetry.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting server...");
    let members = match &config.members_path {
        Some(path) => {
            match MemberRepository::new().load_source(&MemberSource::from_csv(path.clone())) {
                Ok(members) => {
                    info!("Serving lookups for {} members", members.len());
                    members
                }
                Err(err) => {
                    error!("Failed to load members from {}: {err}", path.display());
                    std::process::exit(1);
                }
            }
        }
        None => {
            warn!("No members_path configured, every member lookup will miss");
            MemberRepository::new()
        }
    };

    let tracker = Arc::new(ManualTracker::new(config.order.origin()));
    let planner = StraightLinePlanner::new(config.order.path_step_m.into());
    let orders = LocalOrderService::new(Box::new(planner), tracker.clone())
        .with_config(config.order.service_config());
    let state = Arc::new(AppState::new(orders, members, tracker));

    let app = api::router(state);
    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {address}: {err}");
            std::process::exit(1);
        }
    };
    info!("Listening on {address}");
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
