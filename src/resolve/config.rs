//! # Resolver Configuration
//!
//! Where emoji sets live and which raster resolutions they ship.
//!
//! ## Usage
//!
//! ```
//! use emoji_styles::resolve::ResolverConfig;
//!
//! let config = ResolverConfig::new("/home/user/.local/share")
//!     .with_raster_resolutions(&[72, 144, 72]);
//! assert_eq!(config.raster_resolutions, vec![144, 72]);
//! assert!(config.root().ends_with("emojis"));
//! ```

use std::path::{Path, PathBuf};

/// Subdirectory of the data directory holding all styles.
pub const DEFAULT_SUB_DIR: &str = "emojis";

/// Raster resolutions shipped by raster styles, largest first.
pub const DEFAULT_RASTER_RESOLUTIONS: &[u32] = &[144, 72];

/// Emoji glyphs look smaller than letters of the same height; scale them up
/// by this much unless asked not to.
pub const GROW_FACTOR: f32 = 1.15;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Per-user data directory
    pub base_dir: PathBuf,
    /// Directory under `base_dir` containing one folder per style
    pub sub_dir: String,
    /// Supported raster resolutions. [`with_raster_resolutions`](Self::with_raster_resolutions)
    /// keeps them descending; the resolver normalizes them again either way.
    pub raster_resolutions: Vec<u32>,
    pub grow_factor: f32,
}

impl ResolverConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            sub_dir: DEFAULT_SUB_DIR.to_string(),
            raster_resolutions: DEFAULT_RASTER_RESOLUTIONS.to_vec(),
            grow_factor: GROW_FACTOR,
        }
    }

    pub fn with_sub_dir(mut self, sub_dir: &str) -> Self {
        self.sub_dir = sub_dir.to_string();
        self
    }

    /// Set the raster resolutions. Sorted descending, duplicates removed.
    pub fn with_raster_resolutions(mut self, resolutions: &[u32]) -> Self {
        let mut resolutions = resolutions.to_vec();
        resolutions.sort_unstable_by(|a, b| b.cmp(a));
        resolutions.dedup();
        self.raster_resolutions = resolutions;
        self
    }

    pub fn with_grow_factor(mut self, grow_factor: f32) -> Self {
        self.grow_factor = grow_factor;
        self
    }

    /// `<base_dir>/<sub_dir>`
    pub fn root(&self) -> PathBuf {
        self.base_dir.join(&self.sub_dir)
    }

    /// Standard per-user data directory: `$XDG_DATA_HOME`, else
    /// `$HOME/.local/share`.
    pub fn data_dir_from_env() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os("XDG_DATA_HOME").filter(|d| !d.is_empty()) {
            return Some(PathBuf::from(dir));
        }
        std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(|home| Path::new(&home).join(".local").join("share"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::new("/data");
        assert_eq!(config.sub_dir, "emojis");
        assert_eq!(config.raster_resolutions, vec![144, 72]);
        assert_eq!(config.root(), PathBuf::from("/data/emojis"));
        assert!((config.grow_factor - 1.15).abs() < f32::EPSILON);
    }

    #[test]
    fn test_resolutions_normalized() {
        let config = ResolverConfig::new("/data").with_raster_resolutions(&[36, 144, 72, 144]);
        assert_eq!(config.raster_resolutions, vec![144, 72, 36]);
    }

    #[test]
    fn test_sub_dir() {
        let config = ResolverConfig::new("/data").with_sub_dir("sets");
        assert_eq!(config.root(), PathBuf::from("/data/sets"));
    }
}
