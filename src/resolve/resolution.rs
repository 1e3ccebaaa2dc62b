//! # Resolution Selection
//!
//! Turns a requested pixel size into the settings a text pass needs: whether
//! to fall back to the system font, which directory to serve assets from,
//! and the size to draw them at.
//!
//! ## Raster Rule
//!
//! With resolutions `[144, 72]`:
//!
//! ```text
//! requested   10   72   73  144  200
//! source      72   72  144  144  144
//! drawn at    10   72   73  144  144
//! ```
//!
//! The smallest resolution at or above the target wins. Targets above the
//! largest resolution are clamped to it, and the drawn size never exceeds
//! the source resolution.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::install::{AssetFs, InstallationStatusCache};
use crate::style::{Style, StyleKind};

/// Size request for one render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeRequest {
    /// Font pixel size of the surrounding text
    pub size: f32,
    /// Skip the grow factor
    pub no_grow: bool,
    /// Absolute raster size overriding `size`. Zero means unset.
    pub max_raster_size: u32,
}

impl SizeRequest {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            no_grow: false,
            max_raster_size: 0,
        }
    }

    pub fn no_grow(mut self) -> Self {
        self.no_grow = true;
        self
    }

    pub fn max_raster(mut self, size: u32) -> Self {
        self.max_raster_size = size;
        self
    }
}

/// Result of [`ResolutionSelector::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSettings {
    /// Leave emoji as text for the system font
    pub use_system: bool,
    /// Directory holding `<identifier>.<ext>` files. Empty with `use_system`.
    pub base_path: PathBuf,
    /// Pixel size to draw emoji at
    pub effective_size: u32,
}

#[derive(Debug, Clone)]
struct ResolutionEntry {
    source_resolution: u32,
    effective_size: u32,
}

/// Picks raster resolutions and memoizes the choice per style and size.
#[derive(Debug, Clone)]
pub struct ResolutionSelector {
    resolutions: Vec<u32>,
    grow_factor: f32,
    cache: HashMap<(String, u32), ResolutionEntry>,
}

impl ResolutionSelector {
    /// `resolutions` may come in any order; they are kept largest first
    /// with duplicates removed.
    pub fn new(mut resolutions: Vec<u32>, grow_factor: f32) -> Self {
        resolutions.sort_unstable_by(|a, b| b.cmp(a));
        resolutions.dedup();
        Self {
            resolutions,
            grow_factor,
            cache: HashMap::new(),
        }
    }

    pub fn resolutions(&self) -> &[u32] {
        &self.resolutions
    }

    /// Source resolution and drawn size for a target size.
    ///
    /// Returns `None` only when no resolutions are configured.
    pub fn select_source(&self, target: u32) -> Option<(u32, u32)> {
        let largest = *self.resolutions.first()?;
        let smallest = *self.resolutions.last()?;
        let effective = target.min(largest);

        let mut source = None;
        for &res in &self.resolutions {
            if res >= effective {
                source = Some(res);
            }
        }
        let source = source.unwrap_or(smallest);

        Some((source, effective.min(source)))
    }

    fn initial_size(&self, request: &SizeRequest) -> u32 {
        let size = if request.no_grow {
            request.size
        } else {
            request.size * self.grow_factor
        };
        // Negative and NaN sizes saturate to 0
        size.round() as u32
    }

    /// Settings for drawing emoji of `style` at `request`.
    pub fn resolve<F: AssetFs>(
        &mut self,
        status: &mut InstallationStatusCache<F>,
        style: &Style,
        request: &SizeRequest,
        no_cache: bool,
    ) -> ParseSettings {
        let mut effective_size = self.initial_size(request);
        let mut use_system = false;
        let mut base_path = PathBuf::new();

        match &style.kind {
            StyleKind::Raster(_) => {
                if request.max_raster_size > 0 {
                    effective_size = request.max_raster_size;
                }

                let key = (style.key.clone(), effective_size);
                let cached = if no_cache { None } else { self.cache.get(&key).cloned() };
                let entry = match cached {
                    Some(entry) => Some(entry),
                    None => self.select_source(effective_size).map(|(source, size)| {
                        log::debug!(
                            "resolution: {} at {}px served from {}px assets",
                            style.key,
                            size,
                            source
                        );
                        let entry = ResolutionEntry {
                            source_resolution: source,
                            effective_size: size,
                        };
                        self.cache.insert(key, entry.clone());
                        entry
                    }),
                };

                if let Some(entry) = entry {
                    // The path always comes from the status cache, which may
                    // have been refreshed since the entry was stored
                    let probed = status.get_or_probe(style, Some(entry.source_resolution), no_cache);
                    effective_size = entry.effective_size;
                    base_path = probed.path;
                }
            }
            StyleKind::SystemFont => use_system = true,
            StyleKind::Vector(_) => {
                base_path = status.get_or_probe(style, None, no_cache).path;
            }
        }

        if base_path.as_os_str().is_empty() {
            use_system = true;
        }

        ParseSettings {
            use_system,
            base_path,
            effective_size,
        }
    }

    /// Cached source resolution for a style at a (pre-clamp) size.
    pub fn cached_source(&self, style_key: &str, size: u32) -> Option<u32> {
        self.cache
            .get(&(style_key.to_string(), size))
            .map(|e| e.source_resolution)
    }

    pub fn flush(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
