//! Configuration for the DW documentation server.
//!
//! The [`Config`] value is constructed once at process start, validated,
//! and then shared immutably with the server. There is no global state
//! and no lazy initialization: a server cannot start without a valid
//! documentation root.

use std::path::{Path, PathBuf};

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The documentation folder does not exist.
    #[error("Documentation folder '{0}' does not exist")]
    FolderNotFound(PathBuf),

    /// The documentation path exists but is not a directory.
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    /// The documentation folder could not be canonicalized.
    #[error("Failed to resolve documentation folder '{path}': {source}")]
    Resolve {
        /// The folder that failed to resolve.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Immutable server configuration.
///
/// Built once at startup from CLI arguments (or the `DOCS_FOLDER`
/// environment variable) and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonicalized documentation root. All page requests resolve
    /// relative to this directory.
    pub docs_root: PathBuf,
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Config {
    /// Create a validated configuration.
    ///
    /// The documentation folder must exist and be a directory; the
    /// returned `docs_root` is canonicalized so the traversal guard can
    /// compare resolved paths against it directly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FolderNotFound`] or
    /// [`ConfigError::NotADirectory`] when validation fails, and
    /// [`ConfigError::Resolve`] when canonicalization fails.
    pub fn new(
        docs_folder: impl AsRef<Path>,
        host: impl Into<String>,
        port: u16,
    ) -> Result<Self, ConfigError> {
        let docs_folder = docs_folder.as_ref();

        if !docs_folder.exists() {
            return Err(ConfigError::FolderNotFound(docs_folder.to_path_buf()));
        }
        if !docs_folder.is_dir() {
            return Err(ConfigError::NotADirectory(docs_folder.to_path_buf()));
        }

        let docs_root = docs_folder
            .canonicalize()
            .map_err(|source| ConfigError::Resolve {
                path: docs_folder.to_path_buf(),
                source,
            })?;

        Ok(Self {
            docs_root,
            host: host.into(),
            port,
        })
    }

    /// Check whether the root document is present.
    ///
    /// A missing `overview.md` is worth a startup warning but is not
    /// fatal: the server still serves every other page.
    #[must_use]
    pub fn has_overview(&self) -> bool {
        self.docs_root.join("overview.md").is_file()
    }
}
