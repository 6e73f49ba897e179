//! Navigation index.
//!
//! The module tree is a nested JSON mapping of module name to
//! children, read once from `{docs_root}/module_tree.json` before the
//! server starts. Navigation is a convenience, not a correctness
//! requirement: an absent or malformed file degrades to an empty
//! sidebar and is never surfaced to clients.

use std::fmt::Write;
use std::path::Path;

use serde_json::{Map, Value};

use crate::template::escape_html;

/// Load the module tree from `module_tree.json`.
///
/// Returns `None` (with a logged warning) when the file is missing,
/// unreadable, or not valid JSON. Startup always continues.
pub(crate) fn load_module_tree(docs_root: &Path) -> Option<Value> {
    let tree_file = docs_root.join("module_tree.json");
    if !tree_file.exists() {
        tracing::warn!(
            docs_root = %docs_root.display(),
            "module_tree.json not found, navigation disabled"
        );
        return None;
    }

    let text = match std::fs::read_to_string(&tree_file) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to read module_tree.json, navigation disabled");
            return None;
        }
    };

    match serde_json::from_str(&text) {
        Ok(tree) => Some(tree),
        Err(err) => {
            tracing::warn!(error = %err, "Malformed module_tree.json, navigation disabled");
            None
        }
    }
}

/// Render the module tree as a nested navigation list.
///
/// Each module name `m` under prefix `p` links to `/{p}{m}.md`; the
/// entry matching the current page is marked `active`. Non-mapping
/// values are leaves.
pub(crate) fn render_navigation(tree: Option<&Value>, current_page: &str) -> String {
    let Some(map) = tree.and_then(Value::as_object) else {
        return String::new();
    };
    if map.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    render_level(map, "", current_page, &mut out);
    out
}

fn render_level(map: &Map<String, Value>, prefix: &str, current_page: &str, out: &mut String) {
    out.push_str(r#"<ul class="nav-tree">"#);
    for (name, child) in map {
        let target = format!("{prefix}{name}.md");
        let active = if target == current_page {
            r#" class="active""#
        } else {
            ""
        };
        write!(
            out,
            r#"<li><a href="/{}"{active}>{}</a>"#,
            escape_html(&target),
            escape_html(name)
        )
        .unwrap();

        if let Some(children) = child.as_object()
            && !children.is_empty()
        {
            render_level(children, &format!("{prefix}{name}/"), current_page, out);
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_file_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();

        assert!(load_module_tree(dir.path()).is_none());
    }

    #[test]
    fn test_malformed_json_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("module_tree.json"), "{not json!").unwrap();

        assert!(load_module_tree(dir.path()).is_none());
    }

    #[test]
    fn test_loads_valid_tree() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("module_tree.json"),
            r#"{"core": {}, "api": {"client": {}}}"#,
        )
        .unwrap();

        let tree = load_module_tree(dir.path()).unwrap();

        assert!(tree.get("core").is_some());
        assert!(tree["api"].get("client").is_some());
    }

    #[test]
    fn test_render_absent_tree_is_empty() {
        assert_eq!(render_navigation(None, "overview.md"), "");
    }

    #[test]
    fn test_render_empty_tree_is_empty() {
        let tree = json!({});
        assert_eq!(render_navigation(Some(&tree), "overview.md"), "");
    }

    #[test]
    fn test_render_flat_tree() {
        let tree = json!({"core": {}, "utils": {}});

        let html = render_navigation(Some(&tree), "overview.md");

        assert!(html.contains(r#"<a href="/core.md">core</a>"#));
        assert!(html.contains(r#"<a href="/utils.md">utils</a>"#));
    }

    #[test]
    fn test_render_nested_tree_accumulates_path() {
        let tree = json!({"api": {"client": {}}});

        let html = render_navigation(Some(&tree), "overview.md");

        assert!(html.contains(r#"<a href="/api.md">api</a>"#));
        assert!(html.contains(r#"<a href="/api/client.md">client</a>"#));
    }

    #[test]
    fn test_render_marks_current_page_active() {
        let tree = json!({"core": {}});

        let html = render_navigation(Some(&tree), "core.md");

        assert!(html.contains(r#"<a href="/core.md" class="active">core</a>"#));
    }

    #[test]
    fn test_module_names_are_escaped() {
        let tree = json!({"<script>": {}});

        let html = render_navigation(Some(&tree), "overview.md");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
