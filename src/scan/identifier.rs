//! Canonical asset identifiers for matched emoji.
//!
//! An identifier is the hyphen-joined lowercase hex code points of the
//! match, which is also the asset file stem: `1f469-200d-1f4bb`.
//!
//! VS16 is dropped unless the match contains a ZWJ, because asset sets name
//! single emoji without it (`2764`) but keep it inside joined sequences
//! (`2764-fe0f-200d-1f525`).

use super::tables::{VS16, ZWJ};

/// Identifier for a matched emoji sequence.
pub fn identifier(matched: &str) -> String {
    let keep_vs16 = matched.contains(ZWJ);
    let units: Vec<u16> = matched
        .chars()
        .filter(|&c| keep_vs16 || c != VS16)
        .flat_map(|c| {
            let mut buf = [0u16; 2];
            c.encode_utf16(&mut buf).to_vec()
        })
        .collect();
    identifier_from_utf16(&units)
}

/// Identifier from raw UTF-16 code units.
///
/// Surrogate pairs are combined; an unpaired surrogate is emitted as its own
/// 16-bit value instead of being rejected.
pub fn identifier_from_utf16(units: &[u16]) -> String {
    let mut parts = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        let next = units.get(i + 1).copied();
        match next {
            Some(low) if is_high_surrogate(unit) && is_low_surrogate(low) => {
                let cp = 0x10000 + ((unit as u32 - 0xD800) << 10) + (low as u32 - 0xDC00);
                parts.push(format!("{:x}", cp));
                i += 2;
            }
            _ => {
                parts.push(format!("{:x}", unit));
                i += 1;
            }
        }
    }
    parts.join("-")
}

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_strips_vs16() {
        assert_eq!(identifier("\u{2764}\u{FE0F}"), "2764");
    }

    #[test]
    fn test_astral_plane() {
        assert_eq!(identifier("😀"), "1f600");
    }

    #[test]
    fn test_zwj_keeps_vs16() {
        assert_eq!(identifier("\u{2764}\u{FE0F}\u{200D}🔥"), "2764-fe0f-200d-1f525");
        assert_eq!(identifier("👨\u{200D}👩"), "1f468-200d-1f469");
    }

    #[test]
    fn test_keycap() {
        assert_eq!(identifier("1\u{FE0F}\u{20E3}"), "31-20e3");
    }

    #[test]
    fn test_flag() {
        assert_eq!(identifier("🇩🇪"), "1f1e9-1f1ea");
    }

    #[test]
    fn test_unpaired_surrogates_pass_through() {
        assert_eq!(identifier_from_utf16(&[0xD83D]), "d83d");
        assert_eq!(identifier_from_utf16(&[0xDE00, 0x41]), "de00-41");
        assert_eq!(identifier_from_utf16(&[0xD83D, 0xDE00]), "1f600");
        assert_eq!(identifier_from_utf16(&[]), "");
    }
}
