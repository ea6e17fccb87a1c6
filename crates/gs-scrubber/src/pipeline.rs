//! Scrub pipeline — one configuration applied to many strings.

use gs_core::{Report, Result, ScrubConfig};
use serde::Serialize;
use tracing::debug;

use crate::{inspect, presets, scrub};

/// Outcome of a cleaning pass with per-pass statistics. Counts refer to the
/// classification pass; the collapse and trim steps are not broken out.
#[derive(Debug, Clone, Serialize)]
pub struct ScrubOutcome {
    pub output: String,
    /// Scalar values examined.
    pub scanned: usize,
    /// Scalar values dropped.
    pub removed: usize,
    /// Scalar values replaced with an ASCII equivalent.
    pub substituted: usize,
}

impl ScrubOutcome {
    /// Fraction of scanned scalar values that survived untouched.
    pub fn untouched_ratio(&self) -> f64 {
        if self.scanned == 0 {
            return 1.0;
        }
        (self.scanned - self.removed - self.substituted) as f64 / self.scanned as f64
    }
}

/// The main scrubber.
pub struct Scrubber {
    pub config: ScrubConfig,
}

impl Scrubber {
    pub fn new(config: ScrubConfig) -> Self {
        Self { config }
    }

    pub fn standard() -> Self {
        Self::new(presets::standard())
    }

    pub fn strict() -> Self {
        Self::new(presets::strict())
    }

    pub fn lenient() -> Self {
        Self::new(presets::lenient())
    }

    /// Build a scrubber from a named preset.
    pub fn with_preset(name: &str) -> Result<Self> {
        Ok(Self::new(presets::preset(name)?))
    }

    /// Clean `text`, returning only the output string.
    pub fn clean(&self, text: &str) -> String {
        self.clean_with_stats(text).output
    }

    /// Clean `text` and report what the pass did.
    pub fn clean_with_stats(&self, text: &str) -> ScrubOutcome {
        let (output, counts) = scrub::scrub_counted(text, &self.config);
        debug!(
            scanned = counts.scanned,
            removed = counts.removed,
            substituted = counts.substituted,
            "clean pass complete"
        );
        ScrubOutcome {
            output,
            scanned: counts.scanned,
            removed: counts.removed,
            substituted: counts.substituted,
        }
    }

    /// Report every flagged character without touching the text.
    pub fn inspect(&self, text: &str) -> Report {
        let report = inspect::inspect(text, &self.config);
        debug!(total = report.total, "inspect pass complete");
        report
    }
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::standard()
    }
}
