use serde::{Deserialize, Serialize};

/// Engine toggles. Every field has a documented default, so a config value
/// is never partially defined at a use site.
///
/// Category toggles gate both removal (`clean`) and detection (`inspect`):
/// a disabled category is passed through verbatim and produces no issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    /// Drop C0/C1 control characters. Tab, LF and CR are not treated as
    /// controls; they are governed by the preservation flags below.
    pub strip_control: bool,
    /// Drop zero-width and formatting characters. A zero-width joiner in a
    /// string that contains emoji is part of the emoji sequence and exempt.
    pub strip_invisible: bool,
    /// Replace Unicode space variants with a single ASCII space.
    pub normalize_spaces: bool,
    /// Replace dash variants with an ASCII hyphen; the soft hyphen is
    /// removed outright.
    pub normalize_dashes: bool,
    /// Replace curly and angled quotes with ASCII `'` and `"`. Opt-in.
    pub normalize_quotes: bool,
    /// Replace the horizontal ellipsis with three ASCII periods.
    pub normalize_ellipses: bool,
    /// Keep only printable ASCII, permitted whitespace, and emoji.
    pub keyboard_only: bool,
    /// Keep line breaks during whitespace collapsing and keyboard filtering.
    pub preserve_line_breaks: bool,
    /// Keep tabs during whitespace collapsing and keyboard filtering.
    pub preserve_tabs: bool,
    /// Collapse ASCII whitespace runs into a single space. Which characters
    /// join a run depends on the two preservation flags.
    pub collapse_whitespace: bool,
    /// Trim leading and trailing whitespace from the final result.
    pub trim: bool,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            strip_control: true,
            strip_invisible: true,
            normalize_spaces: true,
            normalize_dashes: true,
            normalize_quotes: false,
            normalize_ellipses: true,
            keyboard_only: false,
            preserve_line_breaks: true,
            preserve_tabs: true,
            collapse_whitespace: false,
            trim: false,
        }
    }
}
