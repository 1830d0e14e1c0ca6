//! Storefront JSON API Server

use std::process;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};
use tracing::{error, info};

use storefront_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod auth;
mod carts;
mod config;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Storefront JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");

        process::exit(1);
    });

    if let Err(init_error) = observability::init_subscriber(&config) {
        eprintln!("Failed to initialize logging: {init_error}");

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_database_url(&config.database.database_url).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(router::app_router());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;
}
