//! # Scan Module
//!
//! Emoji detection and substitution in arbitrary text.
//!
//! ## Architecture
//!
//! ```text
//! text → grapheme clusters → pattern table → EmojiMatch
//!                                              ↓
//!                                      identifier ("1f600")
//!                                              ↓
//!                               on_match → asset reference / None
//!                                              ↓
//!                              ParseResult { emoji_count, plain_count, text }
//! ```
//!
//! ## Modules
//!
//! - [`patterns`]: Priority-ordered emoji sequence shapes
//! - [`identifier`]: Code point identifiers used as asset file names
//! - [`scanner`]: Match finding and text replacement

pub mod identifier;
pub mod patterns;
pub mod scanner;
mod tables;

pub use identifier::{identifier, identifier_from_utf16};
pub use patterns::{PATTERNS, Pattern};
pub use scanner::{
    EmojiMatch, ParseResult, ScanOptions, contains_emoji, find_matches, image_markup, scan,
};
