use crate::config::SiteConfig;
use crate::listings::ListingClient;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod domain;
mod errors;
mod listings;
mod profile;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load config (RUST_LOG wins over the configured level)
    let cfg = match SiteConfig::discover() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("info");
            tracing::error!(error = %e, "configuration failed");
            std::process::exit(1);
        }
    };
    init_tracing(&cfg.log_level);

    if let Err(e) = run(cfg) {
        tracing::error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}

fn run(cfg: SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let max_workers = cfg.max_workers;

    // 2️⃣ Build the listing client and mount the projects coordinator
    let client = ListingClient::new(
        &cfg.listing.endpoint,
        &cfg.listing.user_agent,
        cfg.listing.timeout(),
    )?;
    let state = Arc::new(AppState::new(cfg, Arc::new(client)));
    state.projects.mount();

    // 3️⃣ Start the server
    tracing::info!(%addr, owner = state.projects.owner(), "starting server");

    Server::bind(&addr)
        .max_workers(max_workers)
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => responses::error_to_response(err),
        })?;

    Ok(())
}

fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
