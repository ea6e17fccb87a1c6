//! The transformer: builds a cleaned string in one left-to-right pass.

use std::sync::LazyLock;

use gs_core::{Category, ScrubConfig};
use regex::Regex;

use crate::classify::{classify, contains_emoji};

// Collapse regexes, one per (preserve_line_breaks, preserve_tabs) pair.
// All four are restricted to ASCII whitespace so that disabled categories
// (Unicode space variants, controls) stay byte-for-byte untouched.
static RE_HORIZONTAL_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]{2,}").unwrap());
static RE_HORIZONTAL_ALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static RE_ALL_BUT_TABS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \n\r]+").unwrap());
static RE_ALL_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t\n\r]+").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PassCounts {
    /// Scalar values examined.
    pub scanned: usize,
    /// Scalar values dropped (controls, invisibles, keyboard filtering).
    pub removed: usize,
    /// Scalar values substituted with an ASCII equivalent.
    pub substituted: usize,
}

/// Clean `text` under `config`. Total and deterministic; idempotent for a
/// fixed configuration.
pub fn scrub(text: &str, config: &ScrubConfig) -> String {
    scrub_counted(text, config).0
}

pub(crate) fn scrub_counted(text: &str, config: &ScrubConfig) -> (String, PassCounts) {
    let emoji_context = contains_emoji(text);
    let mut out = String::with_capacity(text.len());
    let mut counts = PassCounts::default();

    for c in text.chars() {
        counts.scanned += 1;
        let verdict = classify(c, emoji_context);
        match verdict {
            Some(v) if v.category.is_emoji() => out.push(c),
            Some(v) if enabled(v.category, config) => {
                if v.replacement.is_empty() {
                    counts.removed += 1;
                } else {
                    counts.substituted += 1;
                    out.push_str(v.replacement);
                }
            }
            // Disabled category or ordinary content: keep verbatim, subject
            // only to the keyboard filter.
            _ => {
                if config.keyboard_only && !keyboard_permitted(c, config) {
                    counts.removed += 1;
                } else {
                    out.push(c);
                }
            }
        }
    }

    let out = if config.collapse_whitespace {
        let re = match (config.preserve_line_breaks, config.preserve_tabs) {
            (true, true) => &RE_HORIZONTAL_RUNS,
            (true, false) => &RE_HORIZONTAL_ALL,
            (false, true) => &RE_ALL_BUT_TABS,
            (false, false) => &RE_ALL_WHITESPACE,
        };
        re.replace_all(&out, " ").into_owned()
    } else {
        out
    };

    let out = if config.trim {
        out.trim().to_string()
    } else {
        out
    };

    (out, counts)
}

pub(crate) fn enabled(category: Category, config: &ScrubConfig) -> bool {
    match category {
        Category::Control => config.strip_control,
        Category::Invisible => config.strip_invisible,
        Category::SpaceVariant => config.normalize_spaces,
        Category::DashVariant => config.normalize_dashes,
        Category::QuoteVariant => config.normalize_quotes,
        Category::EllipsisVariant => config.normalize_ellipses,
        Category::Emoji | Category::EmojiModifier => false,
    }
}

/// Keyboard mode keeps printable ASCII plus whatever whitespace the
/// preservation flags allow. Emoji never reach this filter.
fn keyboard_permitted(c: char, config: &ScrubConfig) -> bool {
    let cp = c as u32;
    (0x20..=0x7E).contains(&cp)
        || (c == '\t' && config.preserve_tabs)
        || ((c == '\n' || c == '\r') && config.preserve_line_breaks)
}
