//! Static codepoint tables. Compile-time initialized, read-only, safe for
//! unlimited concurrent readers.

/// One rule: scalar value, display name, ASCII replacement.
///
/// An empty replacement means the character is removed outright when its
/// category is enabled.
#[derive(Debug, Clone, Copy)]
pub struct CodepointRule {
    pub cp: u32,
    pub name: &'static str,
    pub replacement: &'static str,
}

const fn rule(cp: u32, name: &'static str, replacement: &'static str) -> CodepointRule {
    CodepointRule { cp, name, replacement }
}

/// Zero-width and formatting characters.
pub const INVISIBLES: &[CodepointRule] = &[
    rule(0x180E, "MONGOLIAN VOWEL SEPARATOR", ""),
    rule(0x200B, "ZERO WIDTH SPACE", ""),
    rule(0x200C, "ZERO WIDTH NON-JOINER", ""),
    rule(0x200D, "ZERO WIDTH JOINER", ""),
    rule(0x200E, "LEFT-TO-RIGHT MARK", ""),
    rule(0x200F, "RIGHT-TO-LEFT MARK", ""),
    rule(0x202A, "LEFT-TO-RIGHT EMBEDDING", ""),
    rule(0x202B, "RIGHT-TO-LEFT EMBEDDING", ""),
    rule(0x202C, "POP DIRECTIONAL FORMATTING", ""),
    rule(0x202D, "LEFT-TO-RIGHT OVERRIDE", ""),
    rule(0x202E, "RIGHT-TO-LEFT OVERRIDE", ""),
    rule(0x2060, "WORD JOINER", ""),
    rule(0x2061, "FUNCTION APPLICATION", ""),
    rule(0x2062, "INVISIBLE TIMES", ""),
    rule(0x2063, "INVISIBLE SEPARATOR", ""),
    rule(0x2064, "INVISIBLE PLUS", ""),
    rule(0x2066, "LEFT-TO-RIGHT ISOLATE", ""),
    rule(0x2067, "RIGHT-TO-LEFT ISOLATE", ""),
    rule(0x2068, "FIRST STRONG ISOLATE", ""),
    rule(0x2069, "POP DIRECTIONAL ISOLATE", ""),
    rule(0xFEFF, "ZERO WIDTH NO-BREAK SPACE", ""),
    rule(0xFFFC, "OBJECT REPLACEMENT CHARACTER", ""),
    rule(0xFFFD, "REPLACEMENT CHARACTER", ""),
];

/// Unicode space variants, all replaced by a plain ASCII space.
pub const SPACE_VARIANTS: &[CodepointRule] = &[
    rule(0x00A0, "NO-BREAK SPACE", " "),
    rule(0x1680, "OGHAM SPACE MARK", " "),
    rule(0x2000, "EN QUAD", " "),
    rule(0x2001, "EM QUAD", " "),
    rule(0x2002, "EN SPACE", " "),
    rule(0x2003, "EM SPACE", " "),
    rule(0x2004, "THREE-PER-EM SPACE", " "),
    rule(0x2005, "FOUR-PER-EM SPACE", " "),
    rule(0x2006, "SIX-PER-EM SPACE", " "),
    rule(0x2007, "FIGURE SPACE", " "),
    rule(0x2008, "PUNCTUATION SPACE", " "),
    rule(0x2009, "THIN SPACE", " "),
    rule(0x200A, "HAIR SPACE", " "),
    rule(0x2028, "LINE SEPARATOR", " "),
    rule(0x2029, "PARAGRAPH SEPARATOR", " "),
    rule(0x202F, "NARROW NO-BREAK SPACE", " "),
    rule(0x205F, "MEDIUM MATHEMATICAL SPACE", " "),
    rule(0x3000, "IDEOGRAPHIC SPACE", " "),
];

/// Dash variants. The soft hyphen is a removal, not a substitution.
pub const DASH_VARIANTS: &[CodepointRule] = &[
    rule(0x00AD, "SOFT HYPHEN", ""),
    rule(0x2010, "HYPHEN", "-"),
    rule(0x2011, "NON-BREAKING HYPHEN", "-"),
    rule(0x2012, "FIGURE DASH", "-"),
    rule(0x2013, "EN DASH", "-"),
    rule(0x2014, "EM DASH", "-"),
    rule(0x2015, "HORIZONTAL BAR", "-"),
    rule(0x2212, "MINUS SIGN", "-"),
    rule(0xFE58, "SMALL EM DASH", "-"),
    rule(0xFE63, "SMALL HYPHEN-MINUS", "-"),
    rule(0xFF0D, "FULLWIDTH HYPHEN-MINUS", "-"),
];

/// Curly and angled quote variants.
pub const QUOTE_VARIANTS: &[CodepointRule] = &[
    rule(0x2018, "LEFT SINGLE QUOTATION MARK", "'"),
    rule(0x2019, "RIGHT SINGLE QUOTATION MARK", "'"),
    rule(0x201A, "SINGLE LOW-9 QUOTATION MARK", "'"),
    rule(0x201B, "SINGLE HIGH-REVERSED-9 QUOTATION MARK", "'"),
    rule(0x2039, "SINGLE LEFT-POINTING ANGLE QUOTATION MARK", "'"),
    rule(0x203A, "SINGLE RIGHT-POINTING ANGLE QUOTATION MARK", "'"),
    rule(0x00AB, "LEFT-POINTING DOUBLE ANGLE QUOTATION MARK", "\""),
    rule(0x00BB, "RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK", "\""),
    rule(0x201C, "LEFT DOUBLE QUOTATION MARK", "\""),
    rule(0x201D, "RIGHT DOUBLE QUOTATION MARK", "\""),
    rule(0x201E, "DOUBLE LOW-9 QUOTATION MARK", "\""),
    rule(0x201F, "DOUBLE HIGH-REVERSED-9 QUOTATION MARK", "\""),
];

pub const ELLIPSIS_VARIANTS: &[CodepointRule] = &[
    rule(0x2026, "HORIZONTAL ELLIPSIS", "..."),
];

/// C0/C1 controls with conventional names. Anything else in the control
/// ranges gets a generated `CONTROL_<hex>` name.
pub const NAMED_CONTROLS: &[(u32, &str)] = &[
    (0x00, "NULL"),
    (0x08, "BACKSPACE"),
    (0x0B, "VERTICAL TAB"),
    (0x0C, "FORM FEED"),
    (0x7F, "DELETE"),
];

/// Linear scan; the tables are small enough that anything fancier loses.
pub fn lookup(table: &'static [CodepointRule], cp: u32) -> Option<&'static CodepointRule> {
    table.iter().find(|r| r.cp == cp)
}

pub fn named_control(cp: u32) -> Option<&'static str> {
    NAMED_CONTROLS
        .iter()
        .find(|(code, _)| *code == cp)
        .map(|(_, name)| *name)
}
