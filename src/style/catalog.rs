//! # Emoji Style Catalog
//!
//! Static descriptions of the emoji rendering styles this library knows how
//! to locate on disk.
//!
//! ## Built-in Styles
//!
//! | Key | Kind | Extension | Newest version |
//! |-----|------|-----------|----------------|
//! | `system` | system font | - | - |
//! | `openmoji` | vector | svg | 15.0 |
//! | `twemoji` | vector | svg | 15.1.0 |
//! | `noto` | raster | png | 2.042 |
//! | `whatsapp` | raster | png | 2.23.2.72 |
//!
//! Version lists are ordered newest first. Index 0 is what "up to date"
//! is measured against, so the order must never be shuffled.
//!
//! ## Usage
//!
//! ```
//! use emoji_styles::style::StyleCatalog;
//!
//! let catalog = StyleCatalog::built_in();
//! let noto = catalog.lookup("noto").unwrap();
//! assert!(noto.is_raster());
//! assert_eq!(noto.extension(), Some("png"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EmojiError;

/// Key of the system font pseudo-style.
pub const SYSTEM_STYLE_KEY: &str = "system";

/// Versioned asset files shared by vector and raster styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSet {
    /// Installed version directories, newest first
    pub versions: Vec<String>,
    /// File extension of every asset, without the dot
    pub extension: String,
}

impl AssetSet {
    pub fn new(versions: &[&str], extension: &str) -> Self {
        Self {
            versions: versions.iter().map(|v| v.to_string()).collect(),
            extension: extension.to_string(),
        }
    }
}

/// How a style's emoji are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyleKind {
    /// Plain text in the platform's emoji font. Nothing to locate.
    SystemFont,
    /// One scalable file per emoji.
    Vector(AssetSet),
    /// One bitmap per emoji per supported resolution.
    Raster(AssetSet),
}

/// # Emoji Style
///
/// A named, versioned family of emoji assets.
///
/// On disk a style lives at `<base>/<sub>/<key>/<version>/` (vector) or
/// `<base>/<sub>/<key>/<version>/<resolution>/` (raster).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Human-readable name (e.g. "Noto Color Emoji")
    pub name: String,
    /// Directory name and lookup key (e.g. "noto")
    pub key: String,
    #[serde(flatten)]
    pub kind: StyleKind,
    /// Where the asset set comes from
    #[serde(default)]
    pub source_url: String,
    /// License of the artwork
    #[serde(default)]
    pub license: String,
}

impl Style {
    /// The system font pseudo-style. Always resolvable, never probed.
    pub fn system() -> Self {
        Self {
            name: "System".to_string(),
            key: SYSTEM_STYLE_KEY.to_string(),
            kind: StyleKind::SystemFont,
            source_url: String::new(),
            license: String::new(),
        }
    }

    pub fn vector(name: &str, key: &str, assets: AssetSet) -> Self {
        Self::with_kind(name, key, StyleKind::Vector(assets))
    }

    pub fn raster(name: &str, key: &str, assets: AssetSet) -> Self {
        Self::with_kind(name, key, StyleKind::Raster(assets))
    }

    fn with_kind(name: &str, key: &str, kind: StyleKind) -> Self {
        Self {
            name: name.to_string(),
            key: key.to_string(),
            kind,
            source_url: String::new(),
            license: String::new(),
        }
    }

    /// Attach source and license metadata.
    pub fn credited(mut self, source_url: &str, license: &str) -> Self {
        self.source_url = source_url.to_string();
        self.license = license.to_string();
        self
    }

    #[inline]
    pub fn is_system(&self) -> bool {
        matches!(self.kind, StyleKind::SystemFont)
    }

    #[inline]
    pub fn is_raster(&self) -> bool {
        matches!(self.kind, StyleKind::Raster(_))
    }

    /// Asset files, if this style has any.
    pub fn assets(&self) -> Option<&AssetSet> {
        match &self.kind {
            StyleKind::SystemFont => None,
            StyleKind::Vector(assets) | StyleKind::Raster(assets) => Some(assets),
        }
    }

    pub fn extension(&self) -> Option<&str> {
        self.assets().map(|a| a.extension.as_str())
    }

    /// Known versions, newest first. Empty for the system style.
    pub fn versions(&self) -> &[String] {
        self.assets().map(|a| a.versions.as_slice()).unwrap_or(&[])
    }

    /// Check that the record has everything its kind needs.
    pub fn validate(&self) -> Result<(), EmojiError> {
        let invalid = |reason: &str| EmojiError::InvalidStyle {
            key: self.key.clone(),
            reason: reason.to_string(),
        };

        let Some(assets) = self.assets() else {
            return Ok(());
        };
        if self.key.is_empty() {
            return Err(invalid("missing key"));
        }
        if assets.extension.is_empty() {
            return Err(invalid("missing file extension"));
        }
        if assets.versions.is_empty() {
            return Err(invalid("no versions listed"));
        }
        if assets.versions.iter().any(|v| v.is_empty()) {
            return Err(invalid("empty version name"));
        }
        Ok(())
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Read-only collection of known styles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleCatalog {
    styles: Vec<Style>,
}

impl StyleCatalog {
    /// Styles shipped with the library.
    pub fn built_in() -> Self {
        let styles = vec![
            Style::system(),
            Style::vector("OpenMoji", "openmoji", AssetSet::new(&["15.0", "14.0", "13.1"], "svg"))
                .credited("https://openmoji.org", "CC BY-SA 4.0"),
            Style::vector("Twemoji", "twemoji", AssetSet::new(&["15.1.0", "14.0.2"], "svg"))
                .credited("https://github.com/jdecked/twemoji", "CC BY 4.0"),
            Style::raster("Noto Color Emoji", "noto", AssetSet::new(&["2.042", "2.038"], "png"))
                .credited("https://github.com/googlefonts/noto-emoji", "Apache 2.0"),
            Style::raster("WhatsApp", "whatsapp", AssetSet::new(&["2.23.2.72"], "png"))
                .credited("https://emojipedia.org/whatsapp", "proprietary"),
        ];
        Self { styles }
    }

    /// Parse a catalog from JSON: `{"styles": [ ... ]}`.
    ///
    /// Every style is validated; the first malformed record fails the load.
    pub fn from_json(json: &str) -> Result<Self, EmojiError> {
        let catalog: StyleCatalog = serde_json::from_str(json)?;
        for style in &catalog.styles {
            style.validate()?;
        }
        Ok(catalog)
    }

    /// Add styles from another catalog, replacing built-ins with the same key.
    pub fn merge(&mut self, other: StyleCatalog) {
        for style in other.styles {
            match self.position(&style.key) {
                Some(idx) => self.styles[idx] = style,
                None => self.styles.push(style),
            }
        }
    }

    /// Find a style by key (case insensitive). An empty key means the system style.
    pub fn get(&self, key: &str) -> Option<&Style> {
        self.position(key).map(|idx| &self.styles[idx])
    }

    /// Like [`get`](Self::get), but reports unknown keys as an error.
    pub fn lookup(&self, key: &str) -> Result<&Style, EmojiError> {
        self.get(key)
            .ok_or_else(|| EmojiError::StyleNotFound(key.to_string()))
    }

    fn position(&self, key: &str) -> Option<usize> {
        let key = if key.is_empty() { SYSTEM_STYLE_KEY } else { key };
        self.styles
            .iter()
            .position(|s| s.key.eq_ignore_ascii_case(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.styles.iter()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.styles.iter().map(|s| s.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::built_in()
    }
}

// ============================================================================
// TESTS
// ============================================================================
