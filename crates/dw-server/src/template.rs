//! Page template.
//!
//! Composes the per-request [`Page`] value into a complete HTML
//! document: title, sidebar navigation, rendered content and the
//! client-side mermaid bootstrap. The shell is assembled from static
//! segments so page content can never collide with a substitution
//! marker.

use serde_json::Value;

use crate::navigation;

/// An ephemeral, per-request page. Constructed fresh for each request
/// and never cached.
pub(crate) struct Page<'a> {
    /// Derived page title.
    pub(crate) title: String,
    /// Rendered HTML fragment for the page body.
    pub(crate) html_body: String,
    /// Navigation index, when one was loaded at startup.
    pub(crate) navigation: Option<&'a Value>,
    /// Requested path identifying this page (e.g. `overview.md`).
    pub(crate) current_page: &'a str,
}

const HEAD: &str = "<!DOCTYPE html>\n\
    <html lang=\"en\">\n\
    <head>\n\
    <meta charset=\"utf-8\">\n\
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
    <title>";

const STYLE_AND_NAV_OPEN: &str = "</title>\n\
    <style>\n\
    body { margin: 0; display: flex; font-family: system-ui, sans-serif; color: #1f2328; }\n\
    nav.sidebar { width: 260px; min-height: 100vh; padding: 1rem; background: #f6f8fa; border-right: 1px solid #d1d9e0; }\n\
    nav.sidebar ul.nav-tree { list-style: none; padding-left: 1rem; margin: 0.25rem 0; }\n\
    nav.sidebar a { text-decoration: none; color: #1f2328; }\n\
    nav.sidebar a.active { font-weight: 600; color: #0969da; }\n\
    main.content { flex: 1; max-width: 56rem; padding: 2rem 3rem; }\n\
    main.content pre { background: #f6f8fa; padding: 1rem; overflow-x: auto; }\n\
    main.content code { font-family: ui-monospace, monospace; }\n\
    </style>\n\
    </head>\n\
    <body>\n\
    <nav class=\"sidebar\">";

const CONTENT_OPEN: &str = "</nav>\n<main class=\"content\">\n";

const TAIL: &str = "\n</main>\n\
    <script type=\"module\">\n\
    import mermaid from \"https://cdn.jsdelivr.net/npm/mermaid@11/dist/mermaid.esm.min.mjs\";\n\
    mermaid.initialize({ startOnLoad: true });\n\
    </script>\n\
    </body>\n\
    </html>\n";

/// Render a page into a complete HTML document.
pub(crate) fn render(page: &Page<'_>) -> String {
    let nav = navigation::render_navigation(page.navigation, page.current_page);

    let mut out = String::with_capacity(
        HEAD.len()
            + STYLE_AND_NAV_OPEN.len()
            + CONTENT_OPEN.len()
            + TAIL.len()
            + page.title.len()
            + nav.len()
            + page.html_body.len(),
    );
    out.push_str(HEAD);
    out.push_str(&escape_html(&page.title));
    out.push_str(STYLE_AND_NAV_OPEN);
    out.push_str(&nav);
    out.push_str(CONTENT_OPEN);
    out.push_str(&page.html_body);
    out.push_str(TAIL);
    out
}

/// Escape text for inclusion in HTML element or attribute content.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn test_renders_complete_document() {
        let page = Page {
            title: "My Title".to_owned(),
            html_body: "<p>Body text</p>".to_owned(),
            navigation: None,
            current_page: "overview.md",
        };

        let html = render(&page);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My Title</title>"));
        assert!(html.contains("<p>Body text</p>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_title_is_escaped() {
        let page = Page {
            title: "<script>".to_owned(),
            html_body: String::new(),
            navigation: None,
            current_page: "x.md",
        };

        let html = render(&page);

        assert!(html.contains("<title>&lt;script&gt;</title>"));
    }

    #[test]
    fn test_navigation_included_when_present() {
        let tree = json!({"core": {}});
        let page = Page {
            title: "Core".to_owned(),
            html_body: String::new(),
            navigation: Some(&tree),
            current_page: "core.md",
        };

        let html = render(&page);

        assert!(html.contains(r#"<a href="/core.md" class="active">core</a>"#));
    }

    #[test]
    fn test_mermaid_bootstrap_present() {
        let page = Page {
            title: "T".to_owned(),
            html_body: r#"<div class="mermaid">A --> B</div>"#.to_owned(),
            navigation: None,
            current_page: "t.md",
        };

        let html = render(&page);

        assert!(html.contains("mermaid.initialize"));
        assert!(html.contains(r#"<div class="mermaid">A --> B</div>"#));
    }
}
