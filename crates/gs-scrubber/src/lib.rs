//! GlyphScrub — Unicode artifact classification and removal engine.
//!
//! Given a string, decides codepoint by codepoint whether a character is an
//! artifact to remove (controls, zero-width characters), a typographic
//! variant to normalize (spaces, dashes, quotes, ellipses), or content to
//! preserve. Emoji sequences, including their joiners and skin tone
//! modifiers, survive every configuration.
//!
//! Modules:
//! - `tables` — static codepoint tables
//! - `classify` — per-scalar classification + whole-string emoji pre-scan
//! - `scrub` — cleaning pass (remove/substitute)
//! - `inspect` — reporting pass (record only)
//! - `presets` — named configuration registry
//! - `pipeline` — the `Scrubber` front end

pub mod classify;
pub mod inspect;
pub mod pipeline;
pub mod presets;
pub mod scrub;
pub mod tables;

pub use classify::{classify, contains_emoji, Classification};
pub use gs_core::{hex_code, Category, Issue, Report, Result, ScrubConfig, ScrubError, SummaryEntry};
pub use pipeline::{ScrubOutcome, Scrubber};
pub use presets::{preset, preset_names};

/// Clean `text` with an explicit configuration.
pub fn clean(text: &str, config: &ScrubConfig) -> String {
    scrub::scrub(text, config)
}

/// Clean `text` with a named preset. Fails before any scanning if the
/// preset name is unknown.
pub fn clean_preset(text: &str, name: &str) -> Result<String> {
    let config = presets::preset(name)?;
    Ok(scrub::scrub(text, &config))
}

/// Report every flagged character in `text` without mutating it.
pub fn inspect(text: &str, config: &ScrubConfig) -> Report {
    inspect::inspect(text, config)
}
