//! Mermaid diagram block rewriting.
//!
//! pulldown-cmark renders a fenced `mermaid` block as an
//! entity-escaped `<pre><code class="language-mermaid">` element. The
//! mermaid client library instead expects a `<div class="mermaid">`
//! containing the literal diagram source, so this pass swaps the
//! wrapper and decodes the escaped entities.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static MERMAID_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<pre><code class="language-mermaid">(.*?)</code></pre>"#)
        .expect("mermaid block regex is valid")
});

/// Replace every mermaid code block with a diagram container.
///
/// Only `language-mermaid` blocks are touched; the transform is a
/// no-op on output it has already rewritten.
pub(crate) fn rewrite_diagram_blocks(html: &str) -> String {
    MERMAID_BLOCK_RE
        .replace_all(html, |caps: &Captures<'_>| {
            format!(r#"<div class="mermaid">{}</div>"#, unescape_entities(&caps[1]))
        })
        .into_owned()
}

/// Decode the HTML entities pulldown-cmark produces inside code blocks.
///
/// `&amp;` must be decoded last so that doubly-escaped sequences like
/// `&amp;lt;` round-trip correctly.
fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_rewrites_mermaid_block() {
        let html = r#"<pre><code class="language-mermaid">graph TD;
  A --&gt; B;
</code></pre>"#;

        let result = rewrite_diagram_blocks(html);

        assert_eq!(
            result,
            "<div class=\"mermaid\">graph TD;\n  A --> B;\n</div>"
        );
    }

    #[test]
    fn test_decodes_all_escaped_entities() {
        let html = concat!(
            r#"<pre><code class="language-mermaid">"#,
            "A[&quot;x &lt; y &amp;&amp; y &gt; z&quot;] --&gt; B[&#39;done&#39;]",
            "</code></pre>"
        );

        let result = rewrite_diagram_blocks(html);

        assert_eq!(
            result,
            r#"<div class="mermaid">A["x < y && y > z"] --> B['done']</div>"#
        );
    }

    #[test]
    fn test_multiple_blocks_rewritten_independently() {
        let html = concat!(
            r#"<pre><code class="language-mermaid">A --&gt; B</code></pre>"#,
            "<p>between</p>",
            r#"<pre><code class="language-mermaid">C --&gt; D</code></pre>"#
        );

        let result = rewrite_diagram_blocks(html);

        assert!(result.contains(r#"<div class="mermaid">A --> B</div>"#));
        assert!(result.contains(r#"<div class="mermaid">C --> D</div>"#));
        assert!(result.contains("<p>between</p>"));
        assert!(!result.contains("<pre>"));
    }

    #[test]
    fn test_other_languages_untouched() {
        let html = r#"<pre><code class="language-python">print(1 &gt; 0)</code></pre>"#;

        let result = rewrite_diagram_blocks(html);

        assert_eq!(result, html);
    }

    #[test]
    fn test_plain_code_block_untouched() {
        let html = "<pre><code>not a diagram</code></pre>";

        assert_eq!(rewrite_diagram_blocks(html), html);
    }

    #[test]
    fn test_idempotent_on_rewritten_output() {
        let html = r#"<pre><code class="language-mermaid">A --&gt; B</code></pre>"#;

        let once = rewrite_diagram_blocks(html);
        let twice = rewrite_diagram_blocks(&once);

        assert_eq!(once, twice);
    }
}
