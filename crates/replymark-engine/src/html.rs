//! Serializes a block sequence to HTML with the fixed `md-*` class
//! vocabulary. The structural shape is the contract here; the class names
//! exist for downstream styling and carry no meaning inside the engine.
//!
//! List items are emitted bare, with no enclosing `<ol>`/`<ul>` container.
//! Grouping consecutive items is a presentation concern left to callers.

use crate::models::{Block, Table};

/// Render blocks to a single HTML string, concatenated with no separators.
pub fn write_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        write_block(&mut out, block);
    }
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Table(table) => write_table(out, table),
        Block::Heading { level, text } => {
            out.push_str(&format!(
                r#"<h{level} class="md-h{level}">{text}</h{level}>"#
            ));
        }
        Block::OrderedItem { ordinal, text } => {
            out.push_str(&format!(
                r#"<li class="md-li-ol"><span class="md-ol-num">{ordinal}</span><span>{text}</span></li>"#
            ));
        }
        Block::UnorderedItem { text } => {
            out.push_str(&format!(r#"<li class="md-li-ul">{text}</li>"#));
        }
        Block::Blockquote { text } => {
            out.push_str(&format!(r#"<blockquote class="md-quote">{text}</blockquote>"#));
        }
        Block::HorizontalRule => out.push_str(r#"<hr class="md-hr" />"#),
        Block::Spacer => out.push_str(r#"<div class="md-spacer"></div>"#),
        Block::Paragraph { text } => {
            out.push_str(&format!(r#"<p class="md-p">{text}</p>"#));
        }
    }
}

fn write_table(out: &mut String, table: &Table) {
    out.push_str(r#"<div class="md-table-wrap"><table class="md-table"><thead><tr>"#);
    for cell in &table.header {
        out.push_str(&format!("<th>{cell}</th>"));
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{cell}</td>"));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table></div>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels_carry_matching_classes() {
        let html = write_html(&[Block::Heading {
            level: 4,
            text: "t".into(),
        }]);
        assert_eq!(html, r#"<h4 class="md-h4">t</h4>"#);
    }

    #[test]
    fn ordered_item_splits_ordinal_and_text() {
        let html = write_html(&[Block::OrderedItem {
            ordinal: "7".into(),
            text: "go".into(),
        }]);
        assert_eq!(
            html,
            r#"<li class="md-li-ol"><span class="md-ol-num">7</span><span>go</span></li>"#
        );
    }

    #[test]
    fn empty_bodied_table_keeps_its_tbody() {
        let html = write_html(&[Block::Table(Table {
            header: vec!["a".into()],
            rows: vec![],
        })]);
        assert_eq!(
            html,
            r#"<div class="md-table-wrap"><table class="md-table"><thead><tr><th>a</th></tr></thead><tbody></tbody></table></div>"#
        );
    }

    #[test]
    fn ragged_rows_render_their_own_cell_count() {
        let html = write_html(&[Block::Table(Table {
            header: vec!["a".into(), "b".into()],
            rows: vec![vec!["1".into(), "2".into(), "3".into()]],
        })]);
        assert!(html.contains("<td>1</td><td>2</td><td>3</td>"));
    }

    #[test]
    fn blocks_concatenate_without_separators() {
        let html = write_html(&[Block::HorizontalRule, Block::Spacer]);
        assert_eq!(html, r#"<hr class="md-hr" /><div class="md-spacer"></div>"#);
    }
}
