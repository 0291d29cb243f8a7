mod cli;
mod handler;

pub use cli::App;

use crate::facts::{timeout_from_secs, FactFetcher};
use crate::prelude::{eprintln, *};
use axum::{routing::any, Router};
use std::sync::Arc;

pub const CLASSIFY_PATH: &str = "/api/classify-number";

/// Shared, read-only state handed to every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub facts: FactFetcher,
}

/// Build the router serving the classify endpoint.
///
/// `OPTIONS` answers the CORS preflight, every other method classifies.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            CLASSIFY_PATH,
            any(handler::classify_number).options(handler::preflight),
        )
        .with_state(Arc::new(state))
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let facts = FactFetcher::new(&global.fact_url, timeout_from_secs(global.fact_timeout))?;
    let addr = format!("{}:{}", app.host, app.port);

    if global.verbose {
        eprintln!("Fun facts from: {}", global.fact_url);
        match timeout_from_secs(global.fact_timeout) {
            Some(timeout) => eprintln!("Fun fact timeout: {timeout:?}"),
            None => eprintln!("Fun fact timeout: none"),
        }
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {addr}: {e}"))?;

    log::info!("listening on http://{addr}{CLASSIFY_PATH}");
    if global.verbose {
        eprintln!("Classify endpoint: http://{addr}{CLASSIFY_PATH}");
    }

    axum::serve(listener, router(AppState { facts }))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}
