use crate::catalog::{CatalogStore, HttpCatalogClient};
use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    let config = AppConfig::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Build the catalog client
    let client = match HttpCatalogClient::from_config(&config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "catalog client initialization failed");
            std::process::exit(1);
        }
    };
    info!(url = %client.catalog_url(), "loading catalog");

    // 2️⃣ First load. A failure leaves the catalog empty and the page shows "No bikes found."
    let catalog = CatalogStore::new(config.refresh_interval());
    if catalog.refresh(&client).is_err() {
        warn!("starting with an empty catalog");
    }

    let state = AppState::new(catalog, Arc::new(client), config.region.clone());

    // 3️⃣ Start the server
    info!(addr = %config.bind, workers = config.max_workers, "starting server");
    let server = Server::bind(&config.bind).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
