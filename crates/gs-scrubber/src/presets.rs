//! Named preset registry — fixed, read-only, resolved at call time.

use gs_core::{Result, ScrubConfig, ScrubError};

pub const PRESET_NAMES: &[&str] = &["standard", "strict", "lenient", "llm"];

/// The documented defaults: artifacts removed, typography normalized except
/// quotes, presentation untouched.
pub fn standard() -> ScrubConfig {
    ScrubConfig::default()
}

/// Everything on: quote normalization, keyboard-only filtering, whitespace
/// collapsing, trimming.
pub fn strict() -> ScrubConfig {
    ScrubConfig {
        normalize_quotes: true,
        keyboard_only: true,
        collapse_whitespace: true,
        trim: true,
        ..ScrubConfig::default()
    }
}

/// Artifact removal only; typography is left alone.
pub fn lenient() -> ScrubConfig {
    ScrubConfig {
        normalize_spaces: false,
        normalize_dashes: false,
        normalize_ellipses: false,
        ..ScrubConfig::default()
    }
}

/// Tuned for cleaning LLM output: full typography normalization plus
/// collapsing and trimming, but international content is kept.
pub fn llm() -> ScrubConfig {
    ScrubConfig {
        normalize_quotes: true,
        collapse_whitespace: true,
        trim: true,
        ..ScrubConfig::default()
    }
}

/// Resolve a preset by name. An unknown name is a caller error and the
/// message lists every valid name.
pub fn preset(name: &str) -> Result<ScrubConfig> {
    match name {
        "standard" => Ok(standard()),
        "strict" => Ok(strict()),
        "lenient" => Ok(lenient()),
        "llm" => Ok(llm()),
        _ => Err(ScrubError::InvalidPreset {
            name: name.to_string(),
            valid: PRESET_NAMES.join(", "),
        }),
    }
}

pub fn preset_names() -> &'static [&'static str] {
    PRESET_NAMES
}
