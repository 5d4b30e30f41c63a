use serde::{Deserialize, Serialize};

/// One structural unit of rendered output.
///
/// Each block corresponds to exactly one input line, except [`Block::Table`]
/// which absorbs its separator line and any run of body rows that follow.
/// All `text` fields and table cells carry inline-rendered markup, not raw
/// input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Table(Table),
    /// Heading mapped from marker depth: `##` is level 3, `###` is 4,
    /// `####` is 5.
    Heading { level: u8, text: String },
    /// Ordered list item. The ordinal is the literal digit run from the
    /// input, kept as display text and never renumbered.
    OrderedItem { ordinal: String, text: String },
    UnorderedItem { text: String },
    Blockquote { text: String },
    HorizontalRule,
    /// A blank input line. Consecutive spacers are emitted individually,
    /// never collapsed.
    Spacer,
    Paragraph { text: String },
}

/// A pipe-delimited table: one header row plus zero or more body rows.
///
/// Rows keep their own cell count; nothing pads or truncates them to the
/// header width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
