//! Page endpoints.
//!
//! `GET /` renders the overview document, `GET /{path}` renders any
//! nested markdown page. Both compose a fresh [`Page`] per request
//! from the loaded content, derived title and the startup navigation
//! index.

use std::path::Path as FsPath;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;

use crate::error::ServerError;
use crate::state::AppState;
use crate::template::{self, Page};
use crate::{loader, resolve};

/// Handle `GET /` (overview page).
pub(crate) async fn get_overview(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let overview = state.docs_root.join("overview.md");
    if !overview.is_file() {
        return Err(ServerError::NotFound(
            "overview.md not found in the documentation folder".to_owned(),
        ));
    }

    render_page(&state, &overview, "overview.md").await
}

/// Handle `GET /{path}` (module page).
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let file_path = resolve::resolve_page_path(&state.docs_root, &path)?;
    render_page(&state, &file_path, &path).await
}

/// Load, render and compose a page response.
async fn render_page(
    state: &AppState,
    file_path: &FsPath,
    requested: &str,
) -> Result<Html<String>, ServerError> {
    tracing::debug!(path = %requested, "Rendering page");

    let content = loader::load_text(file_path).await?;
    let html_body = dw_renderer::render_markdown(&content);
    let file_stem = file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    let title = dw_renderer::derive_title(&content, &file_stem);

    let page = Page {
        title,
        html_body,
        navigation: state.module_tree.as_ref(),
        current_page: requested,
    };
    Ok(Html(template::render(&page)))
}
