//! # emoji-styles - Emoji Asset Resolution
//!
//! emoji-styles finds installed emoji image sets on disk and swaps emoji in
//! message text for references to those images. It provides:
//!
//! - **Style catalog**: Vector, raster and system-font emoji styles
//! - **Install probing**: Reference-asset checks with a result cache
//! - **Resolution selection**: Best raster size for a text size, never upscaled
//! - **Text scanning**: Emoji sequence matching and substitution
//!
//! ## Quick Start
//!
//! ```no_run
//! use emoji_styles::{AssetResolver, ResolverConfig, resolve::SizeRequest};
//!
//! let mut resolver = AssetResolver::new(ResolverConfig::new("/home/nemo/.local/share"));
//!
//! let result = resolver
//!     .resolve_key_to_markup("see you 👋", "openmoji", SizeRequest::new(28.0))
//!     .expect("openmoji is a built-in style");
//!
//! // Either `<img>` markup or, if OpenMoji is not installed, the text unchanged
//! println!("{}", result.text);
//! assert_eq!(result.emoji_count, 1);
//! ```
//!
//! ## Asset Layout
//!
//! ```text
//! <base_dir>/<sub_dir>/<style>/<version>/[<resolution>/]<codepoints>.<ext>
//!
//! ~/.local/share/emojis/twemoji/15.1.0/1f600.svg
//! ~/.local/share/emojis/noto/2.042/72/1f469-200d-1f4bb.png
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`style`] | Style records and catalog |
//! | [`install`] | Installation probing and status cache |
//! | [`resolve`] | Resolution choice and the [`AssetResolver`] |
//! | [`scan`] | Emoji matching and text replacement |
//! | [`error`] | Error types |

pub mod error;
pub mod install;
pub mod resolve;
pub mod scan;
pub mod style;

// Re-exports for convenience
pub use error::EmojiError;
pub use install::InstallationStatus;
pub use resolve::{AssetResolver, ResolverConfig};
pub use scan::ParseResult;
pub use style::{Style, StyleCatalog};
