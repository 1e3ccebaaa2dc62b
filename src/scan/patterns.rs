//! # Emoji Pattern Table
//!
//! Ordered list of emoji sequence shapes. At each position the patterns are
//! tried top to bottom and the first one that matches wins, so longer and
//! more specific shapes come first:
//!
//! | Priority | Pattern | Example |
//! |----------|---------|---------|
//! | 1 | tag sequence | 🏴󠁧󠁢󠁳󠁣󠁴󠁿 (Scotland) |
//! | 2 | ZWJ sequence | 👨‍👩‍👧‍👦, 👩🏽‍💻, ❤️‍🔥 |
//! | 3 | flag | 🇩🇪 |
//! | 4 | keycap | 1️⃣ |
//! | 5 | modifier sequence | 👍🏾 |
//! | 6 | presentation sequence | ❤️ |
//! | 7 | single emoji | 😀 |
//!
//! ZWJ sequences extend greedily, so a four-person family always wins over
//! the couple it starts with.

use super::tables::{
    BLACK_FLAG, CANCEL_TAG, KEYCAP, VS16, ZWJ, is_emoji_presentation, is_keycap_base,
    is_modifier_base, is_pictographic, is_regional_indicator, is_skin_tone, is_tag,
};

/// One entry of the pattern table.
pub struct Pattern {
    pub name: &'static str,
    /// Length in chars of the match at the start of the slice, if any.
    matcher: fn(&[char]) -> Option<usize>,
}

impl Pattern {
    pub fn matches(&self, chars: &[char]) -> Option<usize> {
        (self.matcher)(chars)
    }
}

/// The pattern table, highest priority first.
pub static PATTERNS: &[Pattern] = &[
    Pattern {
        name: "tag_sequence",
        matcher: tag_sequence,
    },
    Pattern {
        name: "zwj_sequence",
        matcher: zwj_sequence,
    },
    Pattern {
        name: "flag",
        matcher: flag,
    },
    Pattern {
        name: "keycap",
        matcher: keycap,
    },
    Pattern {
        name: "modifier_sequence",
        matcher: modifier_sequence,
    },
    Pattern {
        name: "presentation_sequence",
        matcher: presentation_sequence,
    },
    Pattern {
        name: "emoji",
        matcher: single,
    },
];

/// First pattern matching at the start of `chars`, with its length in chars.
pub fn match_at(chars: &[char]) -> Option<(usize, &'static Pattern)> {
    PATTERNS
        .iter()
        .find_map(|p| p.matches(chars).map(|len| (len, p)))
}

/// 🏴 followed by tag letters and a cancel tag.
fn tag_sequence(chars: &[char]) -> Option<usize> {
    if chars.first() != Some(&BLACK_FLAG) {
        return None;
    }
    let tags = chars[1..].iter().take_while(|&&c| is_tag(c)).count();
    if tags == 0 || chars.get(1 + tags) != Some(&CANCEL_TAG) {
        return None;
    }
    Some(tags + 2)
}

/// One ZWJ sequence element: pictograph, optional skin tone, optional VS16.
fn zwj_element(chars: &[char]) -> Option<usize> {
    let first = *chars.first()?;
    if !is_pictographic(first) {
        return None;
    }
    let mut len = 1;
    if is_modifier_base(first) && chars.get(len).is_some_and(|&c| is_skin_tone(c)) {
        len += 1;
    }
    if chars.get(len) == Some(&VS16) {
        len += 1;
    }
    Some(len)
}

/// Elements joined by U+200D. Needs at least one joiner.
fn zwj_sequence(chars: &[char]) -> Option<usize> {
    let mut len = zwj_element(chars)?;
    let mut joined = false;
    while chars.get(len) == Some(&ZWJ) {
        match zwj_element(&chars[len + 1..]) {
            Some(next) => {
                len += 1 + next;
                joined = true;
            }
            None => break,
        }
    }
    joined.then_some(len)
}

/// Pair of regional indicators.
fn flag(chars: &[char]) -> Option<usize> {
    match chars {
        [a, b, ..] if is_regional_indicator(*a) && is_regional_indicator(*b) => Some(2),
        _ => None,
    }
}

/// `[0-9#*]`, optional VS16, combining enclosing keycap.
fn keycap(chars: &[char]) -> Option<usize> {
    match chars {
        [base, VS16, KEYCAP, ..] if is_keycap_base(*base) => Some(3),
        [base, KEYCAP, ..] if is_keycap_base(*base) => Some(2),
        _ => None,
    }
}

fn modifier_sequence(chars: &[char]) -> Option<usize> {
    match chars {
        [base, tone, ..] if is_modifier_base(*base) && is_skin_tone(*tone) => Some(2),
        _ => None,
    }
}

/// Text-default pictograph forced to emoji with VS16.
fn presentation_sequence(chars: &[char]) -> Option<usize> {
    match chars {
        [base, VS16, ..] if is_pictographic(*base) => Some(2),
        _ => None,
    }
}

/// Default-emoji character; swallows a redundant VS16.
fn single(chars: &[char]) -> Option<usize> {
    let first = *chars.first()?;
    if !is_emoji_presentation(first) {
        return None;
    }
    Some(if chars.get(1) == Some(&VS16) { 2 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn matched(s: &str) -> Option<(usize, &'static str)> {
        match_at(&chars(s)).map(|(len, p)| (len, p.name))
    }

    #[test]
    fn test_single() {
        assert_eq!(matched("😀 hi"), Some((1, "emoji")));
        assert_eq!(matched("hi"), None);
    }

    #[test]
    fn test_text_default_needs_vs16() {
        assert_eq!(matched("\u{2764}"), None);
        assert_eq!(matched("\u{2764}\u{FE0F}"), Some((2, "presentation_sequence")));
    }

    #[test]
    fn test_keycap() {
        assert_eq!(matched("1\u{FE0F}\u{20E3}"), Some((3, "keycap")));
        assert_eq!(matched("#\u{20E3}"), Some((2, "keycap")));
        assert_eq!(matched("1\u{FE0F}"), None);
        assert_eq!(matched("12"), None);
    }

    #[test]
    fn test_flag_before_single_indicator() {
        assert_eq!(matched("🇩🇪"), Some((2, "flag")));
        assert_eq!(matched("🇩"), Some((1, "emoji")));
    }

    #[test]
    fn test_modifier_sequence() {
        assert_eq!(matched("👍🏾"), Some((2, "modifier_sequence")));
        // Skin tone after a non-base is two separate emoji
        assert_eq!(matched("🍎🏾"), Some((1, "emoji")));
    }

    #[test]
    fn test_family_beats_couple() {
        let family = "👨\u{200D}👩\u{200D}👧\u{200D}👦";
        assert_eq!(matched(family), Some((7, "zwj_sequence")));
    }

    #[test]
    fn test_zwj_with_tone_and_vs16() {
        // woman technologist, medium skin tone
        assert_eq!(matched("👩🏽\u{200D}💻"), Some((4, "zwj_sequence")));
        // heart on fire
        assert_eq!(
            matched("\u{2764}\u{FE0F}\u{200D}🔥"),
            Some((4, "zwj_sequence"))
        );
    }

    #[test]
    fn test_dangling_zwj_not_consumed() {
        assert_eq!(matched("👨\u{200D}a"), Some((1, "emoji")));
    }

    #[test]
    fn test_tag_sequence() {
        let scotland = "🏴\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}";
        assert_eq!(matched(scotland), Some((7, "tag_sequence")));
        // Black flag without cancel tag falls back to the plain flag
        assert_eq!(matched("🏴\u{E0067}"), Some((1, "emoji")));
    }
}
