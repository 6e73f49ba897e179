//! HTTP server for the DW documentation server.
//!
//! Serves a folder of markdown documentation as browsable HTML:
//! - `GET /` renders `overview.md` from the documentation root
//! - `GET /{path}` renders any nested `.md` page under the root
//! - `GET /static/*` serves assets from the working directory
//!
//! All state is established before the listener binds: the
//! documentation root comes from a validated [`Config`] and the
//! navigation index is read once at startup. Request handling is
//! stateless over that immutable shared state, so concurrent requests
//! need no coordination.
//!
//! # Quick Start
//!
//! ```ignore
//! use dw_config::Config;
//! use dw_server::run_server;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::new("docs", "127.0.0.1", 8000).unwrap();
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod loader;
mod middleware;
mod navigation;
mod resolve;
mod state;
mod static_files;
mod template;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use dw_config::Config;

use state::AppState;

/// Run the server until shutdown.
///
/// Loads the navigation index, builds the router, binds the listener
/// and serves requests until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the bind address is invalid or the listener
/// fails to bind.
pub async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let module_tree = navigation::load_module_tree(&config.docs_root);
    if let Some(tree) = &module_tree {
        let modules = tree.as_object().map_or(0, serde_json::Map::len);
        tracing::info!(modules, "Loaded module tree");
    }

    let state = Arc::new(AppState {
        docs_root: config.docs_root.clone(),
        module_tree,
    });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, docs_root = %config.docs_root.display(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
