//! Line-oriented block segmentation.
//!
//! The input is split into lines and scanned once, front to back. Most
//! constructs are decided by the current line alone, via an ordered rule
//! table evaluated top-to-bottom (first match wins). Tables are the one
//! multi-line construct: a pipe row only starts a table when the *next*
//! line is a separator row, so the scanner keeps an indexed cursor with one
//! line of look-ahead rather than consuming an opaque stream.
//!
//! Rule order matters and is fixed. The table check runs before everything
//! else because a table header row is, on its own, an ordinary line that
//! would otherwise fall through to a paragraph.

pub mod inline;

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{Block, Table};
use inline::{RenderOptions, render_inline};

type LineRule = fn(&str, &RenderOptions) -> Option<Block>;

/// Single-line classification rules, in precedence order. Paragraph is the
/// fallback in [`classify_line`] rather than a rule of its own; table
/// detection needs look-ahead and lives in [`segment`].
const LINE_RULES: &[LineRule] = &[
    heading,
    ordered_item,
    unordered_item,
    blockquote,
    horizontal_rule,
    spacer,
];

/// Segment a complete text block into an ordered sequence of blocks.
///
/// Empty input yields an empty sequence. A trailing newline yields a final
/// empty line, which becomes a [`Block::Spacer`].
pub fn segment(text: &str, opts: &RenderOptions) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let next = lines.get(i + 1).copied().unwrap_or("");
        if is_table_row(lines[i]) && is_separator_row(next) {
            let (table, consumed) = consume_table(&lines[i..], opts);
            blocks.push(Block::Table(table));
            i += consumed;
        } else {
            blocks.push(classify_line(lines[i], opts));
            i += 1;
        }
    }

    blocks
}

/// Classify one line against the rule table. Total: anything no rule claims
/// is a paragraph, including pipe rows that failed the separator check.
fn classify_line(line: &str, opts: &RenderOptions) -> Block {
    for rule in LINE_RULES {
        if let Some(block) = rule(line, opts) {
            return block;
        }
    }
    Block::Paragraph {
        text: render_inline(line, opts),
    }
}

/// A row shaped like `|...|`. Start-anchored search, not a full match: the
/// pattern only requires a leading pipe, at least one character, and one
/// more pipe somewhere after it.
fn is_table_row(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\|.+\|").expect("invalid table row regex"))
        .is_match(line)
}

/// A separator row: a leading pipe, then only `-`, `|`, spaces, or `:`,
/// then a pipe. Confirms the preceding row is a header rather than a
/// coincidental pipe-containing paragraph.
fn is_separator_row(line: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\|[-| :]+\|").expect("invalid separator regex"))
        .is_match(line)
}

/// Consume a table starting at `lines[0]` (the header; `lines[1]` is the
/// already-validated separator). Body rows are taken greedily while they
/// keep the `|...|` shape, whatever their cell count. Returns the table and
/// the number of lines consumed.
fn consume_table(lines: &[&str], opts: &RenderOptions) -> (Table, usize) {
    let header = split_cells(lines[0], opts);
    let mut rows = Vec::new();
    let mut consumed = 2;

    while consumed < lines.len() && is_table_row(lines[consumed]) {
        rows.push(split_cells(lines[consumed], opts));
        consumed += 1;
    }

    (Table { header, rows }, consumed)
}

/// Split a `|...|` row into trimmed, inline-rendered cells. The fields
/// outside the outer pipes (empty for a well-formed row) are dropped.
fn split_cells(line: &str, opts: &RenderOptions) -> Vec<String> {
    let fields: Vec<&str> = line.split('|').collect();
    fields[1..fields.len() - 1]
        .iter()
        .map(|cell| render_inline(cell.trim(), opts))
        .collect()
}

fn heading(line: &str, opts: &RenderOptions) -> Option<Block> {
    // Mutually exclusive by marker count: the char after the hashes differs,
    // so check order among the three is immaterial.
    for (marker, level) in [("## ", 3u8), ("### ", 4), ("#### ", 5)] {
        if let Some(rest) = line.strip_prefix(marker) {
            if rest.is_empty() {
                // Bare marker, no content: not a heading.
                return None;
            }
            return Some(Block::Heading {
                level,
                text: render_inline(rest, opts),
            });
        }
    }
    None
}

fn ordered_item(line: &str, opts: &RenderOptions) -> Option<Block> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = RE
        .get_or_init(|| Regex::new(r"^(\d+)\. (.+)$").expect("invalid ordered item regex"))
        .captures(line)?;
    Some(Block::OrderedItem {
        ordinal: caps[1].to_string(),
        text: render_inline(&caps[2], opts),
    })
}

fn unordered_item(line: &str, opts: &RenderOptions) -> Option<Block> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = RE
        .get_or_init(|| Regex::new(r"^[-•*] (.+)$").expect("invalid unordered item regex"))
        .captures(line)?;
    Some(Block::UnorderedItem {
        text: render_inline(&caps[1], opts),
    })
}

fn blockquote(line: &str, opts: &RenderOptions) -> Option<Block> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let caps = RE
        .get_or_init(|| Regex::new(r"^> (.+)$").expect("invalid blockquote regex"))
        .captures(line)?;
    Some(Block::Blockquote {
        text: render_inline(&caps[1], opts),
    })
}

fn horizontal_rule(line: &str, _opts: &RenderOptions) -> Option<Block> {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^---+$").expect("invalid rule regex"))
        .is_match(line.trim())
        .then_some(Block::HorizontalRule)
}

fn spacer(line: &str, _opts: &RenderOptions) -> Option<Block> {
    line.trim().is_empty().then_some(Block::Spacer)
}
