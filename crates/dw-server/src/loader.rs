//! Content loading.
//!
//! Reads page content from disk. There is no caching: every call
//! re-reads the file, which is acceptable for a read-only,
//! low-traffic documentation server and keeps served content always
//! current.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::ServerError;

/// Read the full text content of a file.
///
/// Goes through `tokio::fs` so file I/O never blocks the runtime.
pub(crate) async fn load_text(path: &Path) -> Result<String, ServerError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => {
                ServerError::NotFound(format!("File {} not found", path.display()))
            }
            _ => ServerError::Io {
                path: path.display().to_string(),
                source,
            },
        })
}
