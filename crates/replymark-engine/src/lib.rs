//! Rendering engine for the restricted markup dialect used in assistant
//! replies: headings, emphasis, inline code, list items, blockquotes,
//! horizontal rules, blank-line spacers, and pipe-delimited tables.
//!
//! The engine is pure and stateless: one complete input string in, one
//! block tree (or HTML string) out. There is no incremental mode; callers
//! that accumulate streamed text re-render the full text each time.

pub mod html;
pub mod models;
pub mod parsing;

pub use html::write_html;
pub use models::{Block, Table};
pub use parsing::inline::{RenderOptions, render_inline};
pub use parsing::segment;

/// Render a complete text block to HTML with default options.
///
/// By default no HTML escaping is applied to the input text, so markup
/// characters in the input pass through into the output verbatim. Only use
/// this with trusted or user-reviewed input, or enable
/// [`RenderOptions::escape_html`] via [`render_markdown_with`].
pub fn render_markdown(text: &str) -> String {
    render_markdown_with(text, &RenderOptions::default())
}

/// Render a complete text block to HTML with explicit options.
pub fn render_markdown_with(text: &str, opts: &RenderOptions) -> String {
    html::write_html(&parsing::segment(text, opts))
}
