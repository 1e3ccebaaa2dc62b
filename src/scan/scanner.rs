//! # Emoji Text Scanner
//!
//! Walks text grapheme cluster by grapheme cluster, finds emoji with the
//! [pattern table](super::patterns), and replaces each one through a caller
//! supplied resolver.
//!
//! ## Example
//!
//! ```
//! use emoji_styles::scan::{ScanOptions, scan};
//!
//! let result = scan("hi \u{2764}\u{FE0F}", &ScanOptions::url(), |id| {
//!     Some(format!("/emoji/{}.svg", id))
//! });
//! assert_eq!(result.text, "hi /emoji/2764.svg");
//! assert_eq!(result.emoji_count, 1);
//! assert_eq!(result.plain_count, 3);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::identifier::identifier;
use super::patterns::match_at;

/// One emoji found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiMatch<'a> {
    /// Byte offset of the match in the scanned text
    pub start: usize,
    /// Matched text, including any selectors and joiners
    pub text: &'a str,
    /// Name of the pattern that matched
    pub pattern: &'static str,
}

impl EmojiMatch<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Asset identifier, e.g. `1f600`.
    pub fn identifier(&self) -> String {
        identifier(self.text)
    }
}

/// How matches are written into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Keep the original emoji text when the resolver returns `None`
    pub include_plain: bool,
    /// Wrap resolved references in an `<img>` tag
    pub as_markup: bool,
    /// Width and height of the `<img>` tag
    pub size: u32,
}

impl ScanOptions {
    /// Rich-text output with images of the given size.
    pub fn markup(size: u32) -> Self {
        Self {
            include_plain: true,
            as_markup: true,
            size,
        }
    }

    /// Bare asset references, unresolved emoji dropped.
    pub fn url() -> Self {
        Self {
            include_plain: false,
            as_markup: false,
            size: 0,
        }
    }
}

/// Output of a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Number of matched emoji, resolved or not
    pub emoji_count: usize,
    /// Characters left once every emoji is removed, counted in Unicode
    /// scalar values (`char`s), not UTF-16 code units
    pub plain_count: usize,
    /// Transformed text
    pub text: String,
}

impl ParseResult {
    /// Text made of emoji and nothing else.
    pub fn is_emoji_only(&self) -> bool {
        self.emoji_count > 0 && self.plain_count == 0
    }
}

/// All emoji in `text`, in order and non-overlapping.
pub fn find_matches(text: &str) -> Vec<EmojiMatch<'_>> {
    let mut matches = Vec::new();

    for (offset, cluster) in text.grapheme_indices(true) {
        let indices: Vec<(usize, char)> = cluster.char_indices().collect();
        let chars: Vec<char> = indices.iter().map(|&(_, c)| c).collect();

        let mut pos = 0;
        while pos < chars.len() {
            let Some((len, pattern)) = match_at(&chars[pos..]) else {
                pos += 1;
                continue;
            };
            let start = indices[pos].0;
            let end = indices.get(pos + len).map_or(cluster.len(), |&(i, _)| i);
            matches.push(EmojiMatch {
                start: offset + start,
                text: &cluster[start..end],
                pattern: pattern.name,
            });
            pos += len;
        }
    }

    matches
}

/// Does `text` contain at least one emoji?
pub fn contains_emoji(text: &str) -> bool {
    text.graphemes(true).any(|cluster| {
        let chars: Vec<char> = cluster.chars().collect();
        (0..chars.len()).any(|i| match_at(&chars[i..]).is_some())
    })
}

/// Minimal rich-text image reference.
pub fn image_markup(src: &str, size: u32) -> String {
    format!(
        r#"<img src="{}" width="{}" height="{}" align="middle" />"#,
        src, size, size
    )
}

/// Replace every emoji in `text` using `on_match`.
///
/// `on_match` receives the emoji's identifier and returns the asset
/// reference, or `None` when the emoji should stay text.
pub fn scan<F>(text: &str, options: &ScanOptions, mut on_match: F) -> ParseResult
where
    F: FnMut(&str) -> Option<String>,
{
    let matches = find_matches(text);
    if matches.is_empty() {
        return ParseResult {
            emoji_count: 0,
            plain_count: text.chars().count(),
            text: text.to_string(),
        };
    }

    let mut out = String::with_capacity(text.len());
    let mut plain_count = 0;
    let mut cursor = 0;

    for m in &matches {
        let between = &text[cursor..m.start];
        plain_count += between.chars().count();
        out.push_str(between);

        match on_match(&m.identifier()) {
            Some(reference) if options.as_markup => {
                out.push_str(&image_markup(&reference, options.size))
            }
            Some(reference) => out.push_str(&reference),
            None if options.include_plain => out.push_str(m.text),
            None => {}
        }
        cursor = m.end();
    }

    let tail = &text[cursor..];
    plain_count += tail.chars().count();
    out.push_str(tail);

    ParseResult {
        emoji_count: matches.len(),
        plain_count,
        text: out,
    }
}
