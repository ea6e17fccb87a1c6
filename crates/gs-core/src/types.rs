use serde::{Deserialize, Serialize};

/// Character category assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Control,
    Invisible,
    SpaceVariant,
    DashVariant,
    QuoteVariant,
    EllipsisVariant,
    Emoji,
    EmojiModifier,
}

impl Category {
    /// Emoji and emoji modifiers are never removed or reported.
    pub fn is_emoji(&self) -> bool {
        matches!(self, Self::Emoji | Self::EmojiModifier)
    }
}

/// Canonical `U+XXXX` rendering of a scalar value (minimum four hex digits).
pub fn hex_code(scalar: u32) -> String {
    format!("U+{scalar:04X}")
}

/// One flagged character found by inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub character: char,
    pub scalar: u32,
    pub hex: String,
    /// Zero-based index in the sequence of Unicode scalar values,
    /// not a byte or UTF-16 offset.
    pub position: usize,
    pub category: Category,
    pub name: String,
}

/// Per-name aggregate: occurrence count plus one representative hex code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub name: String,
    pub count: usize,
    pub hex: String,
}

/// Aggregate inspection result. Issues keep input order; the summary keeps
/// first-appearance order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub total: usize,
    pub issues: Vec<Issue>,
    pub summary: Vec<SummaryEntry>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.total == 0
    }
}
