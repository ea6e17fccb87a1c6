//! Per-scalar classification. First match wins; emoji outranks everything.

use std::borrow::Cow;

use gs_core::{hex_code, Category};

use crate::tables::{self, CodepointRule};

/// Classifier verdict for a single scalar value. `None` from [`classify`]
/// means ordinary content that is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub name: Cow<'static, str>,
    /// ASCII substitution applied when the category is enabled. Empty means
    /// removal; the emoji categories never consult it.
    pub replacement: &'static str,
}

impl Classification {
    fn fixed(category: Category, name: &'static str) -> Self {
        Self {
            category,
            name: Cow::Borrowed(name),
            replacement: "",
        }
    }

    fn from_rule(category: Category, rule: &'static CodepointRule) -> Self {
        let name = if rule.name.is_empty() {
            Cow::Owned(hex_code(rule.cp))
        } else {
            Cow::Borrowed(rule.name)
        };
        Self {
            category,
            name,
            replacement: rule.replacement,
        }
    }
}

/// Membership in the documented emoji blocks (emoticons, pictographs,
/// transport, supplemental symbols, extended pictographs, regional
/// indicators, miscellaneous symbols, dingbats). Joiners and variation
/// selectors are deliberately excluded; they only ride along with emoji.
pub fn is_emoji_scalar(cp: u32) -> bool {
    matches!(cp,
        0x1F300..=0x1F5FF
            | 0x1F600..=0x1F64F
            | 0x1F680..=0x1F6FF
            | 0x1F900..=0x1F9FF
            | 0x1FA00..=0x1FAFF
            | 0x1F1E6..=0x1F1FF
            | 0x2600..=0x26FF
            | 0x2700..=0x27BF
            | 0x2B50
            | 0x2B55
    )
}

/// Fitzpatrick skin tone modifiers.
pub fn is_skin_tone_modifier(cp: u32) -> bool {
    matches!(cp, 0x1F3FB..=0x1F3FF)
}

/// Variation selectors (VS1–VS16); VS16 selects emoji presentation.
pub fn is_variation_selector(cp: u32) -> bool {
    matches!(cp, 0xFE00..=0xFE0F)
}

/// C0/C1 control ranges, minus tab, LF and CR which are ordinary whitespace.
pub fn is_control(cp: u32) -> bool {
    (cp <= 0x1F && !matches!(cp, 0x09 | 0x0A | 0x0D)) || cp == 0x7F || (0x80..=0x9F).contains(&cp)
}

const ZERO_WIDTH_JOINER: u32 = 0x200D;

/// Whole-string emoji presence. Computed once per call and passed into
/// [`classify`] as a fixed parameter; it decides whether a zero-width joiner
/// is an artifact or part of an emoji sequence.
pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| is_emoji_scalar(c as u32))
}

/// Classify one scalar value. `emoji_context` is the whole-string emoji
/// presence flag from [`contains_emoji`].
pub fn classify(c: char, emoji_context: bool) -> Option<Classification> {
    let cp = c as u32;

    // Emoji first: these are never eligible for removal. Skin tones sit
    // inside the pictograph block, so the modifier checks come before the
    // block ranges.
    if is_skin_tone_modifier(cp) {
        return Some(Classification::fixed(
            Category::EmojiModifier,
            "EMOJI SKIN TONE MODIFIER",
        ));
    }
    if is_variation_selector(cp) {
        return Some(Classification::fixed(
            Category::EmojiModifier,
            "VARIATION SELECTOR",
        ));
    }
    if is_emoji_scalar(cp) {
        return Some(Classification::fixed(Category::Emoji, "EMOJI"));
    }
    if cp == ZERO_WIDTH_JOINER && emoji_context {
        return Some(Classification::fixed(Category::Emoji, "ZERO WIDTH JOINER"));
    }

    if is_control(cp) {
        let name = match tables::named_control(cp) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("CONTROL_{cp:02X}")),
        };
        return Some(Classification {
            category: Category::Control,
            name,
            replacement: "",
        });
    }

    if let Some(rule) = tables::lookup(tables::INVISIBLES, cp) {
        return Some(Classification::from_rule(Category::Invisible, rule));
    }
    if let Some(rule) = tables::lookup(tables::SPACE_VARIANTS, cp) {
        return Some(Classification::from_rule(Category::SpaceVariant, rule));
    }
    if let Some(rule) = tables::lookup(tables::DASH_VARIANTS, cp) {
        return Some(Classification::from_rule(Category::DashVariant, rule));
    }
    if let Some(rule) = tables::lookup(tables::QUOTE_VARIANTS, cp) {
        return Some(Classification::from_rule(Category::QuoteVariant, rule));
    }
    if let Some(rule) = tables::lookup(tables::ELLIPSIS_VARIANTS, cp) {
        return Some(Classification::from_rule(Category::EllipsisVariant, rule));
    }

    None
}
