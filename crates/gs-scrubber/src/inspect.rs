//! The reporter: same pass and gating as the transformer, but it only
//! records. The input is never mutated.

use gs_core::{hex_code, Issue, Report, ScrubConfig, SummaryEntry};

use crate::classify::{classify, contains_emoji};
use crate::scrub::enabled;

/// Report every character that `scrub` would remove or substitute under the
/// same configuration. Emoji and emoji modifiers are never recorded.
pub fn inspect(text: &str, config: &ScrubConfig) -> Report {
    let emoji_context = contains_emoji(text);
    let mut issues = Vec::new();

    for (position, c) in text.chars().enumerate() {
        let Some(verdict) = classify(c, emoji_context) else {
            continue;
        };
        if verdict.category.is_emoji() || !enabled(verdict.category, config) {
            continue;
        }
        let scalar = c as u32;
        issues.push(Issue {
            character: c,
            scalar,
            hex: hex_code(scalar),
            position,
            category: verdict.category,
            name: verdict.name.into_owned(),
        });
    }

    let summary = summarize(&issues);
    Report {
        total: issues.len(),
        issues,
        summary,
    }
}

/// Group issues by display name in first-appearance order. The tables are
/// tiny, so a linear scan beats a map here.
fn summarize(issues: &[Issue]) -> Vec<SummaryEntry> {
    let mut summary: Vec<SummaryEntry> = Vec::new();
    for issue in issues {
        match summary.iter_mut().find(|e| e.name == issue.name) {
            Some(entry) => entry.count += 1,
            None => summary.push(SummaryEntry {
                name: issue.name.clone(),
                count: 1,
                hex: issue.hex.clone(),
            }),
        }
    }
    summary
}
