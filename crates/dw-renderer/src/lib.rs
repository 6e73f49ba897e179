//! Markdown rendering for the DW documentation server.
//!
//! Converts raw markdown text to an HTML fragment in two passes:
//!
//! 1. A standard markdown-to-HTML conversion via pulldown-cmark with
//!    GFM extensions (tables, strikethrough, task lists).
//! 2. A post-pass that rewrites fenced `mermaid` code blocks into
//!    `<div class="mermaid">` containers holding the raw diagram
//!    source, for client-side rendering by the mermaid library.
//!
//! The post-pass exists because a generic markdown renderer does not
//! know about the diagram convention. It is a narrow text transform
//! kept behind this crate's API so callers never see the mechanism.
//!
//! Title derivation ([`derive_title`]) also lives here: it is a pure
//! function of page content and filename, used by the router to label
//! composed pages.

mod diagrams;
mod title;

use pulldown_cmark::{Options, Parser, html};

pub use title::derive_title;

/// Convert markdown text to an HTML fragment.
///
/// The output is deterministic: rendering the same input twice yields
/// byte-identical HTML.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(markdown, options);

    let mut output = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut output, parser);

    diagrams::rewrite_diagram_blocks(&output)
}
