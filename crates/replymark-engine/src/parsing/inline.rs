//! Inline rendering: bold, italic, and inline code.
//!
//! Three textual substitutions applied to the raw line in a fixed order,
//! each a global replace with a non-greedy match between delimiter pairs:
//!
//! 1. `**x**` becomes `<strong>x</strong>`
//! 2. `*x*` becomes `<em>x</em>`
//! 3. `` `x` `` becomes `<code class="md-code">x</code>`
//!
//! Bold runs first so its `**` pairs are consumed before the italic pass;
//! the inserted tags contain no `*`, so bold content is never re-matched as
//! italic. Substituted markup is matched literally by later passes, never
//! re-parsed, which is also why an italic pair may legally bracket an
//! already-substituted bold span. There is no nesting beyond what falls out
//! of that ordering.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Per-call rendering knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Entity-encode the raw text before any substitution. Off by default,
    /// matching the historical behavior of trusting the input; callers that
    /// embed the output in a document without their own sanitization should
    /// turn this on. Encoding touches only `&`, `<`, and `>`, none of which
    /// are marker characters, so classification and substitution are
    /// unaffected.
    pub escape_html: bool,
}

/// Apply the inline substitutions to one line (or table cell) of raw text.
///
/// Total function: text without markers comes back unchanged.
pub fn render_inline(raw: &str, opts: &RenderOptions) -> String {
    let text: Cow<'_, str> = if opts.escape_html {
        html_escape::encode_text(raw)
    } else {
        Cow::Borrowed(raw)
    };
    let text = bold_re().replace_all(&text, "<strong>$1</strong>");
    let text = italic_re().replace_all(&text, "<em>$1</em>");
    let text = code_re().replace_all(&text, r#"<code class="md-code">$1</code>"#);
    text.into_owned()
}

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("invalid bold regex"))
}

fn italic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("invalid italic regex"))
}

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`(.+?)`").expect("invalid code regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(raw: &str) -> String {
        render_inline(raw, &RenderOptions::default())
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(render("no markers here"), "no markers here");
    }

    #[test]
    fn bold_italic_and_code_apply_independently() {
        assert_eq!(
            render("**bold** and *italic* and `code`"),
            r#"<strong>bold</strong> and <em>italic</em> and <code class="md-code">code</code>"#
        );
    }

    #[test]
    fn bold_content_is_not_rematched_as_italic() {
        assert_eq!(render("**a**"), "<strong>a</strong>");
    }

    #[test]
    fn multiple_bold_spans_per_line() {
        assert_eq!(
            render("**a** x **b**"),
            "<strong>a</strong> x <strong>b</strong>"
        );
    }

    #[test]
    fn italic_match_is_non_greedy() {
        assert_eq!(render("*a* and *b*"), "<em>a</em> and <em>b</em>");
    }

    #[test]
    fn italic_may_bracket_a_substituted_bold_span() {
        // The bold pass consumes the inner `**` pair, leaving the outer
        // single stars free for the italic pass.
        assert_eq!(
            render("*x **y** z*"),
            "<em>x <strong>y</strong> z</em>"
        );
    }

    #[test]
    fn unmatched_markers_pass_through() {
        assert_eq!(render("a * b"), "a * b");
        assert_eq!(render("`open"), "`open");
    }

    #[test]
    fn escape_encodes_text_before_substitution() {
        let opts = RenderOptions { escape_html: true };
        assert_eq!(
            render_inline("**<b>**", &opts),
            "<strong>&lt;b&gt;</strong>"
        );
        assert_eq!(
            render_inline("a & b", &opts),
            "a &amp; b"
        );
    }

    #[test]
    fn default_leaves_markup_characters_alone() {
        assert_eq!(render("<script>x</script>"), "<script>x</script>");
    }
}
