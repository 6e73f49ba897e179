//! Page path resolution and traversal guard.
//!
//! Resolving a requested path against the documentation root is the
//! one security-critical operation in this server: no response may
//! ever expose content outside the root. The guard works in two
//! layers:
//!
//! 1. A lexical check over the requested path's components rejects
//!    absolute paths and any `..` sequence that climbs above the root,
//!    before the filesystem is consulted at all.
//! 2. The joined path is canonicalized (resolving symlinks) and the
//!    result must still be a descendant of the canonicalized root,
//!    verified with component-wise [`Path::starts_with`] rather than a
//!    raw string-prefix comparison.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::error::ServerError;

/// Resolve a requested page path against the documentation root.
///
/// Only `.md` paths are served; anything else fails with
/// [`ServerError::UnsupportedType`]. A path that escapes the root
/// fails with [`ServerError::Forbidden`], a path that stays inside but
/// names no existing file with [`ServerError::NotFound`].
///
/// `docs_root` must already be canonicalized (guaranteed by
/// `dw_config::Config`).
pub(crate) fn resolve_page_path(
    docs_root: &Path,
    requested: &str,
) -> Result<PathBuf, ServerError> {
    if !requested.ends_with(".md") {
        return Err(ServerError::UnsupportedType);
    }

    check_stays_under_root(Path::new(requested))?;

    let canonical = match docs_root.join(requested).canonicalize() {
        Ok(path) => path,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(ServerError::NotFound(format!(
                "File {requested} not found"
            )));
        }
        Err(_) => return Err(ServerError::Forbidden),
    };

    // Symlinks inside the tree may still point anywhere.
    if !canonical.starts_with(docs_root) {
        return Err(ServerError::Forbidden);
    }

    Ok(canonical)
}

/// Lexical traversal check: the relative path must never climb above
/// its starting directory and must not be absolute.
fn check_stays_under_root(requested: &Path) -> Result<(), ServerError> {
    let mut depth: i32 = 0;
    for component in requested.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return Err(ServerError::Forbidden);
                }
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => {
                return Err(ServerError::Forbidden);
            }
        }
    }
    Ok(())
}
