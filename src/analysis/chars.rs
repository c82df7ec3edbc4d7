//! Character classification tables.
//!
//! Two lookups drive the analysis report: invisible/directional code points
//! that are worth flagging, and glyphs that word processors use as list
//! bullets.

/// Invisible or direction-control code points and their display names.
pub const SPECIAL_CHARS: &[(char, &str)] = &[
    ('\u{200B}', "ZERO WIDTH SPACE"),
    ('\u{200C}', "ZERO WIDTH NON-JOINER"),
    ('\u{200D}', "ZERO WIDTH JOINER"),
    ('\u{FEFF}', "BOM / ZERO WIDTH NO-BREAK"),
    ('\u{202A}', "LTR EMBED"),
    ('\u{202B}', "RTL EMBED"),
    ('\u{202C}', "POP DIRECTIONAL"),
];

/// Bullet glyphs and their list-level rank.
pub const BULLET_CHARS: &[(char, u8)] = &[('•', 0), ('·', 0), ('o', 1), ('§', 2), ('▪', 3)];

/// Classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClass {
    /// Display name when the character is special/invisible
    pub special: Option<&'static str>,
    /// Rank when the character is a bullet glyph
    pub bullet: Option<u8>,
}

impl CharClass {
    /// Whether the character is neither special nor a bullet.
    pub fn is_plain(&self) -> bool {
        self.special.is_none() && self.bullet.is_none()
    }
}

/// Display name of a special/invisible character.
pub fn special_char_name(c: char) -> Option<&'static str> {
    SPECIAL_CHARS
        .iter()
        .find(|(special, _)| *special == c)
        .map(|(_, name)| *name)
}

/// Rank of a bullet glyph.
pub fn bullet_rank(c: char) -> Option<u8> {
    BULLET_CHARS
        .iter()
        .find(|(bullet, _)| *bullet == c)
        .map(|(_, rank)| *rank)
}

/// Whether `c` is a recognized bullet glyph.
pub fn is_bullet(c: char) -> bool {
    bullet_rank(c).is_some()
}

/// Classify a character against both tables.
pub fn classify(c: char) -> CharClass {
    CharClass {
        special: special_char_name(c),
        bullet: bullet_rank(c),
    }
}

/// Format a code point as `U+XXXX` (uppercase, at least four hex digits).
pub fn code_point_label(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Whitespace as the browser's `String.prototype.trim` sees it.
///
/// Unicode `White_Space` plus U+FEFF, minus U+0085.
pub fn is_trim_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_special_char_has_a_name() {
        for (c, name) in SPECIAL_CHARS {
            assert_eq!(special_char_name(*c), Some(*name));
        }
    }

    #[test]
    fn ordinary_chars_are_not_special() {
        for c in ['a', ' ', '\t', '\u{00A0}', '•'] {
            assert_eq!(special_char_name(c), None, "{:?}", c);
        }
    }

    #[test]
    fn bullet_ranks_match_levels() {
        assert_eq!(bullet_rank('•'), Some(0));
        assert_eq!(bullet_rank('·'), Some(0));
        assert_eq!(bullet_rank('o'), Some(1));
        assert_eq!(bullet_rank('§'), Some(2));
        assert_eq!(bullet_rank('▪'), Some(3));
        assert_eq!(bullet_rank('-'), None);
        assert_eq!(bullet_rank('O'), None);
    }

    #[test]
    fn classify_combines_both_tables() {
        assert_eq!(
            classify('\u{200B}'),
            CharClass {
                special: Some("ZERO WIDTH SPACE"),
                bullet: None
            }
        );
        assert_eq!(classify('▪').bullet, Some(3));
        assert!(classify('x').is_plain());
    }

    #[test]
    fn code_point_label_pads_to_four_digits() {
        assert_eq!(code_point_label('a'), "U+0061");
        assert_eq!(code_point_label('\u{feff}'), "U+FEFF");
        assert_eq!(code_point_label('•'), "U+2022");
    }

    #[test]
    fn code_point_label_extends_past_four_digits() {
        assert_eq!(code_point_label('😀'), "U+1F600");
    }

    #[test]
    fn trim_whitespace_includes_bom() {
        assert!(is_trim_whitespace('\u{FEFF}'));
        assert!(is_trim_whitespace('\u{00A0}'));
        assert!(is_trim_whitespace('\r'));
        assert!(!is_trim_whitespace('\u{0085}'));
        assert!(!is_trim_whitespace('\u{200B}'));
    }
}
