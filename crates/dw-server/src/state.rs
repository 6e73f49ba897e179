//! Application state.
//!
//! Shared immutable state for all request handlers, established once
//! before the server accepts traffic.

use std::path::PathBuf;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Canonicalized documentation root. Every resolved page path must
    /// lie within this directory.
    pub(crate) docs_root: PathBuf,
    /// Navigation index loaded once at startup from
    /// `module_tree.json`. `None` when the file is absent or
    /// malformed.
    pub(crate) module_tree: Option<serde_json::Value>,
}
