//! Static file serving.
//!
//! Assets are served under `/static` from the process working
//! directory. This is deliberately unrelated to the documentation
//! root: the traversal guard protects pages, while `ServeDir` applies
//! its own path sanitization for assets.

use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create router for static file serving.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().nest_service("/static", ServeDir::new("."))
}
