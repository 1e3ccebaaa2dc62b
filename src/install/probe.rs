//! # Style Probe
//!
//! Decides whether a style (at a given raster resolution) is installed by
//! looking for one reference asset: the heart, `2764.<ext>`, which exists in
//! every known emoji set.
//!
//! ## Directory Layout
//!
//! ```text
//! <base>/<sub>/<key>/<version>/2764.svg          vector
//! <base>/<sub>/<key>/<version>/<res>/2764.png    raster
//! ```
//!
//! Versions are tried newest first. The first one holding the heart wins,
//! and the result is "up to date" only if that was the newest version.

use std::cell::Cell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::style::{Style, StyleKind};

/// Codepoint of the asset used to detect an installed style.
pub const PROBE_ASSET: &str = "2764";

// ============================================================================
// FILESYSTEM SEAM
// ============================================================================

/// Synchronous existence check used by the probe.
pub trait AssetFs {
    /// Does a regular file exist at `path`?
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

impl<T: AssetFs + ?Sized> AssetFs for &T {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        (**self).exists(path)
    }
}

impl<T: AssetFs + ?Sized> AssetFs for Arc<T> {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        (**self).exists(path)
    }
}

/// The local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl AssetFs for LocalFs {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match std::fs::metadata(path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// In-memory file set that counts lookups.
///
/// Handy for embedders that ship assets inside a bundle and for exercising
/// the caches without touching the disk.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: HashSet<PathBuf>,
    lookups: Cell<usize>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>) {
        self.files.insert(path.into());
    }

    /// Number of existence checks answered so far.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl AssetFs for MemoryFs {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        self.lookups.set(self.lookups.get() + 1);
        Ok(self.files.contains(path))
    }
}

// ============================================================================
// PROBE
// ============================================================================

/// Outcome of probing one style/resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub found: bool,
    /// Directory holding the assets. Empty when not found.
    pub path: PathBuf,
    /// Found in the newest known version. Trivially true when not found.
    pub up_to_date: bool,
}

impl ProbeResult {
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: PathBuf::new(),
            up_to_date: true,
        }
    }

    fn found(path: PathBuf, up_to_date: bool) -> Self {
        Self {
            found: true,
            path,
            up_to_date,
        }
    }
}

/// Filesystem prober for emoji styles.
pub struct StyleProbe<F: AssetFs = LocalFs> {
    root: PathBuf,
    fs: F,
    reported_missing: bool,
}

impl StyleProbe<LocalFs> {
    /// Probe under `<base_dir>/<sub_dir>` on the local filesystem.
    pub fn local(base_dir: impl AsRef<Path>, sub_dir: &str) -> Self {
        Self::new(base_dir.as_ref().join(sub_dir), LocalFs)
    }
}

impl<F: AssetFs> StyleProbe<F> {
    /// Probe styles living directly under `root`.
    pub fn new(root: PathBuf, fs: F) -> Self {
        Self {
            root,
            fs,
            reported_missing: false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Locate the newest installed version of `style`.
    ///
    /// `resolution` selects the raster subdirectory and is ignored for vector
    /// styles. The system style is never found.
    pub fn probe(&mut self, style: &Style, resolution: Option<u32>) -> ProbeResult {
        let (assets, raster) = match &style.kind {
            StyleKind::SystemFont => return ProbeResult::not_found(),
            StyleKind::Vector(assets) => (assets, false),
            StyleKind::Raster(assets) => (assets, true),
        };

        let style_dir = self.root.join(&style.key);
        let probe_file = format!("{}.{}", PROBE_ASSET, assets.extension);

        for (idx, version) in assets.versions.iter().enumerate() {
            let mut candidate = style_dir.join(version);
            if let (true, Some(res)) = (raster, resolution) {
                candidate.push(res.to_string());
            }

            let reference = candidate.join(&probe_file);
            let exists = match self.fs.exists(&reference) {
                Ok(exists) => exists,
                Err(e) => {
                    log::debug!("probe: cannot check {}: {}", reference.display(), e);
                    false
                }
            };

            if exists {
                log::debug!(
                    "probe: found {} version {} at {}",
                    style.key,
                    version,
                    candidate.display()
                );
                return ProbeResult::found(candidate, idx == 0);
            }
        }

        if !self.reported_missing {
            self.reported_missing = true;
            log::warn!(
                "emoji style '{}' is not installed in {} (further misses are not reported)",
                style.key,
                style_dir.display()
            );
        }

        ProbeResult::not_found()
    }

    /// Allow the next miss to be reported again.
    pub fn reset_diagnostics(&mut self) {
        self.reported_missing = false;
    }

    /// Whether a miss has been reported since the last reset.
    pub fn has_reported_missing(&self) -> bool {
        self.reported_missing
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{AssetSet, Style};

    fn vector_style() -> Style {
        Style::vector("Test", "test", AssetSet::new(&["2.0", "1.0"], "svg"))
    }

    fn raster_style() -> Style {
        Style::raster("Pix", "pix", AssetSet::new(&["3", "2"], "png"))
    }

    #[test]
    fn test_system_style_never_found() {
        let fs = MemoryFs::new();
        let mut probe = StyleProbe::new(PathBuf::from("/emojis"), &fs);
        let result = probe.probe(&Style::system(), None);
        assert_eq!(result, ProbeResult::not_found());
        assert_eq!(fs.lookups(), 0);
        assert!(!probe.has_reported_missing());
    }

    #[test]
    fn test_newest_vector_version_is_up_to_date() {
        let mut fs = MemoryFs::new();
        fs.insert("/emojis/test/2.0/2764.svg");
        fs.insert("/emojis/test/1.0/2764.svg");
        let mut probe = StyleProbe::new(PathBuf::from("/emojis"), &fs);

        let result = probe.probe(&vector_style(), None);
        assert!(result.found);
        assert!(result.up_to_date);
        assert_eq!(result.path, PathBuf::from("/emojis/test/2.0"));
    }

    #[test]
    fn test_older_version_is_outdated() {
        let mut fs = MemoryFs::new();
        fs.insert("/emojis/test/1.0/2764.svg");
        let mut probe = StyleProbe::new(PathBuf::from("/emojis"), &fs);

        let result = probe.probe(&vector_style(), None);
        assert!(result.found);
        assert!(!result.up_to_date);
        assert_eq!(result.path, PathBuf::from("/emojis/test/1.0"));
        assert_eq!(fs.lookups(), 2);
    }

    #[test]
    fn test_vector_ignores_resolution() {
        let mut fs = MemoryFs::new();
        fs.insert("/emojis/test/2.0/2764.svg");
        let mut probe = StyleProbe::new(PathBuf::from("/emojis"), &fs);
        assert!(probe.probe(&vector_style(), Some(72)).found);
    }

    #[test]
    fn test_raster_uses_resolution_subdir() {
        let mut fs = MemoryFs::new();
        fs.insert("/emojis/pix/3/72/2764.png");
        let mut probe = StyleProbe::new(PathBuf::from("/emojis"), &fs);

        let found = probe.probe(&raster_style(), Some(72));
        assert_eq!(found.path, PathBuf::from("/emojis/pix/3/72"));
        assert!(found.up_to_date);

        let missing = probe.probe(&raster_style(), Some(144));
        assert_eq!(missing, ProbeResult::not_found());
    }

    #[test]
    fn test_missing_reported_once() {
        let fs = MemoryFs::new();
        let mut probe = StyleProbe::new(PathBuf::from("/emojis"), &fs);

        assert!(!probe.probe(&vector_style(), None).found);
        assert!(probe.has_reported_missing());
        assert!(!probe.probe(&raster_style(), Some(72)).found);
        assert!(probe.has_reported_missing());

        probe.reset_diagnostics();
        assert!(!probe.has_reported_missing());
    }

    #[test]
    fn test_local_fs_missing_file() {
        let fs = LocalFs;
        let path = Path::new("/definitely/not/here/2764.svg");
        assert!(!fs.exists(path).unwrap());
    }
}
