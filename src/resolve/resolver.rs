//! # Asset Resolver
//!
//! Entry point for the UI layer: turns message text into rich text (or a
//! single asset reference) for a chosen emoji style.
//!
//! The resolver owns both caches. Build one per process (or per test) and
//! call [`flush_caches`](AssetResolver::flush_caches) whenever installed
//! emoji sets change.
//!
//! ## Example
//!
//! ```no_run
//! use emoji_styles::resolve::{AssetResolver, ResolverConfig, SizeRequest};
//!
//! let mut resolver = AssetResolver::new(ResolverConfig::new("/home/nemo/.local/share"));
//! let style = resolver.catalog().lookup("twemoji")?.clone();
//!
//! if let Some(result) = resolver.resolve_to_markup("hi 😀", &style, SizeRequest::new(32.0)) {
//!     println!("{} ({} emoji)", result.text, result.emoji_count);
//! }
//! # Ok::<(), emoji_styles::EmojiError>(())
//! ```

use crate::error::EmojiError;
use crate::install::{AssetFs, InstallationStatus, InstallationStatusCache, LocalFs, StyleProbe};
use crate::scan::{ParseResult, ScanOptions, scan};
use crate::style::{Style, StyleCatalog};

use super::config::ResolverConfig;
use super::resolution::{ParseSettings, ResolutionSelector, SizeRequest};

pub struct AssetResolver<F: AssetFs = LocalFs> {
    config: ResolverConfig,
    catalog: StyleCatalog,
    status: InstallationStatusCache<F>,
    selector: ResolutionSelector,
}

impl AssetResolver<LocalFs> {
    /// Resolver over the local filesystem with the built-in catalog.
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_fs(config, LocalFs)
    }
}

impl<F: AssetFs> AssetResolver<F> {
    pub fn with_fs(config: ResolverConfig, fs: F) -> Self {
        let probe = StyleProbe::new(config.root(), fs);
        let selector =
            ResolutionSelector::new(config.raster_resolutions.clone(), config.grow_factor);
        Self {
            catalog: StyleCatalog::built_in(),
            status: InstallationStatusCache::new(probe),
            selector,
            config,
        }
    }

    /// Replace the style catalog.
    pub fn with_catalog(mut self, catalog: StyleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn catalog(&self) -> &StyleCatalog {
        &self.catalog
    }

    /// Probe cache, mostly for inspection.
    pub fn status_cache(&self) -> &InstallationStatusCache<F> {
        &self.status
    }

    /// Forget every probe and resolution, and re-arm the missing-style warning.
    pub fn flush_caches(&mut self) {
        self.status.flush();
        self.selector.flush();
    }

    // ========================================================================
    // Installation status
    // ========================================================================

    pub fn installation_status(&mut self, style: &Style, no_cache: bool) -> InstallationStatus {
        // The selector holds the normalized (descending, deduplicated) list
        self.status
            .installation_status(style, self.selector.resolutions(), no_cache)
    }

    pub fn installation_status_by_key(
        &mut self,
        key: &str,
        no_cache: bool,
    ) -> Result<InstallationStatus, EmojiError> {
        let style = self.catalog.lookup(key)?.clone();
        Ok(self.installation_status(&style, no_cache))
    }

    /// Status of every catalog style, in catalog order.
    pub fn statuses(&mut self, no_cache: bool) -> Vec<(Style, InstallationStatus)> {
        let styles: Vec<Style> = self.catalog.iter().cloned().collect();
        styles
            .into_iter()
            .map(|style| {
                let status = self.installation_status(&style, no_cache);
                (style, status)
            })
            .collect()
    }

    // ========================================================================
    // Text resolution
    // ========================================================================

    /// Fallback decision, asset directory and drawn size for `style`.
    pub fn parse_settings(
        &mut self,
        style: &Style,
        request: &SizeRequest,
        no_cache: bool,
    ) -> ParseSettings {
        self.selector
            .resolve(&mut self.status, style, request, no_cache)
    }

    /// Rich text with `<img>` tags; unresolved emoji stay as text.
    pub fn try_resolve_to_markup(
        &mut self,
        text: &str,
        style: &Style,
        request: SizeRequest,
    ) -> Result<ParseResult, EmojiError> {
        self.resolve_with(text, style, request, true)
    }

    /// Asset references only; unresolved emoji are dropped.
    pub fn try_resolve_to_url(
        &mut self,
        text: &str,
        style: &Style,
        request: SizeRequest,
    ) -> Result<ParseResult, EmojiError> {
        self.resolve_with(text, style, request, false)
    }

    /// Like [`try_resolve_to_markup`](Self::try_resolve_to_markup); `None` for
    /// a malformed style.
    pub fn resolve_to_markup(
        &mut self,
        text: &str,
        style: &Style,
        request: SizeRequest,
    ) -> Option<ParseResult> {
        self.try_resolve_to_markup(text, style, request)
            .map_err(|e| log::debug!("resolve_to_markup: {}", e))
            .ok()
    }

    /// Like [`try_resolve_to_url`](Self::try_resolve_to_url); `None` for a
    /// malformed style.
    pub fn resolve_to_url(
        &mut self,
        text: &str,
        style: &Style,
        request: SizeRequest,
    ) -> Option<ParseResult> {
        self.try_resolve_to_url(text, style, request)
            .map_err(|e| log::debug!("resolve_to_url: {}", e))
            .ok()
    }

    /// Markup for a catalog style by key. `None` for unknown keys.
    pub fn resolve_key_to_markup(
        &mut self,
        text: &str,
        key: &str,
        request: SizeRequest,
    ) -> Option<ParseResult> {
        let style = self.catalog.get(key)?.clone();
        self.resolve_to_markup(text, &style, request)
    }

    /// Asset reference for a catalog style by key. `None` for unknown keys.
    pub fn resolve_key_to_url(
        &mut self,
        text: &str,
        key: &str,
        request: SizeRequest,
    ) -> Option<ParseResult> {
        let style = self.catalog.get(key)?.clone();
        self.resolve_to_url(text, &style, request)
    }

    fn resolve_with(
        &mut self,
        text: &str,
        style: &Style,
        request: SizeRequest,
        as_markup: bool,
    ) -> Result<ParseResult, EmojiError> {
        style.validate()?;

        let settings = self.parse_settings(style, &request, false);
        let options = if as_markup {
            ScanOptions::markup(settings.effective_size)
        } else {
            ScanOptions::url()
        };

        let base = settings.base_path.display().to_string();
        let extension = style.extension().unwrap_or_default();
        let use_system = settings.use_system;

        Ok(scan(text, &options, |id| {
            if use_system {
                None
            } else {
                Some(format!("{}/{}.{}", base, id, extension))
            }
        }))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::install::MemoryFs;
    use crate::style::AssetSet;

    fn resolver(fs: &MemoryFs) -> AssetResolver<&MemoryFs> {
        AssetResolver::with_fs(ResolverConfig::new("/data"), fs)
    }

    fn twemoji_fs() -> MemoryFs {
        let mut fs = MemoryFs::new();
        fs.insert("/data/emojis/twemoji/15.1.0/2764.svg");
        fs
    }

    #[test]
    fn test_markup_uses_base_path_and_effective_size() {
        let fs = twemoji_fs();
        let mut resolver = resolver(&fs);
        let style = resolver.catalog().lookup("twemoji").unwrap().clone();

        let result = resolver
            .resolve_to_markup("hi 😀", &style, SizeRequest::new(32.0).no_grow())
            .unwrap();
        assert_eq!(
            result.text,
            r#"hi <img src="/data/emojis/twemoji/15.1.0/1f600.svg" width="32" height="32" align="middle" />"#
        );
        assert_eq!(result.emoji_count, 1);
        assert_eq!(result.plain_count, 3);
    }

    #[test]
    fn test_url_mode() {
        let fs = twemoji_fs();
        let mut resolver = resolver(&fs);

        let result = resolver
            .resolve_key_to_url("\u{2764}\u{FE0F}", "twemoji", SizeRequest::new(20.0))
            .unwrap();
        assert_eq!(result.text, "/data/emojis/twemoji/15.1.0/2764.svg");
    }

    #[test]
    fn test_not_installed_keeps_text() {
        let fs = MemoryFs::new();
        let mut resolver = resolver(&fs);

        let text = "abc\u{2764}\u{FE0F}def";
        let result = resolver
            .resolve_key_to_markup(text, "openmoji", SizeRequest::new(20.0))
            .unwrap();
        assert_eq!(result.text, text);
        assert_eq!(result.emoji_count, 1);
        assert_eq!(result.plain_count, 6);

        let result = resolver
            .resolve_key_to_url(text, "openmoji", SizeRequest::new(20.0))
            .unwrap();
        assert_eq!(result.text, "abcdef");
    }

    #[test]
    fn test_invalid_style_returns_none() {
        let fs = twemoji_fs();
        let mut resolver = resolver(&fs);
        let broken = Style::vector("Broken", "broken", AssetSet::new(&["1"], ""));

        assert!(resolver
            .resolve_to_markup("😀", &broken, SizeRequest::new(20.0))
            .is_none());
        assert!(matches!(
            resolver.try_resolve_to_url("😀", &broken, SizeRequest::new(20.0)),
            Err(EmojiError::InvalidStyle { .. })
        ));
        assert_eq!(fs.lookups(), 0);
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let fs = twemoji_fs();
        let mut resolver = resolver(&fs);
        assert!(resolver
            .resolve_key_to_markup("😀", "nope", SizeRequest::new(20.0))
            .is_none());
        assert!(matches!(
            resolver.installation_status_by_key("nope", false),
            Err(EmojiError::StyleNotFound(_))
        ));
    }

    #[test]
    fn test_system_style_never_probes() {
        let fs = twemoji_fs();
        let mut resolver = resolver(&fs);

        let result = resolver
            .resolve_key_to_markup("😀", "system", SizeRequest::new(20.0))
            .unwrap();
        assert_eq!(result.text, "😀");
        assert_eq!(fs.lookups(), 0);
    }

    #[test]
    fn test_flush_caches_probes_again() {
        let fs = twemoji_fs();
        let mut resolver = resolver(&fs);

        resolver.resolve_key_to_url("😀", "twemoji", SizeRequest::new(20.0));
        resolver.resolve_key_to_url("😀", "twemoji", SizeRequest::new(20.0));
        assert_eq!(fs.lookups(), 1);

        resolver.flush_caches();
        resolver.resolve_key_to_url("😀", "twemoji", SizeRequest::new(20.0));
        assert_eq!(fs.lookups(), 2);
    }

    #[test]
    fn test_statuses() {
        let fs = twemoji_fs();
        let mut resolver = resolver(&fs);

        let statuses: Vec<(String, InstallationStatus)> = resolver
            .statuses(false)
            .into_iter()
            .map(|(style, status)| (style.key, status))
            .collect();
        assert_eq!(statuses[0], ("system".to_string(), InstallationStatus::FullyInstalled));
        assert_eq!(statuses[2], ("twemoji".to_string(), InstallationStatus::FullyInstalled));
        assert_eq!(statuses[3], ("noto".to_string(), InstallationStatus::NotInstalled));
    }

    #[test]
    fn test_unsorted_config_resolutions() {
        let mut fs = MemoryFs::new();
        fs.insert("/data/emojis/noto/2.042/72/2764.png");
        let mut config = ResolverConfig::new("/data");
        config.raster_resolutions = vec![72, 144];
        let mut resolver = AssetResolver::with_fs(config, &fs);
        let noto = resolver.catalog().lookup("noto").unwrap().clone();

        let settings = resolver.parse_settings(&noto, &SizeRequest::new(200.0), false);
        assert_eq!(settings.effective_size, 144);
        assert!(settings.use_system);

        let settings = resolver.parse_settings(&noto, &SizeRequest::new(50.0).no_grow(), false);
        assert_eq!(settings.base_path, std::path::PathBuf::from("/data/emojis/noto/2.042/72"));
        assert_eq!(
            resolver.installation_status(&noto, false),
            InstallationStatus::IncompleteOnly
        );
    }
}
