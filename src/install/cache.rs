//! # Installation Status Cache
//!
//! Memoizes [`StyleProbe`] results per `(style, resolution)` so repeated
//! queries from the UI don't touch the filesystem again. Entries live until
//! [`flush`](InstallationStatusCache::flush).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::probe::{AssetFs, LocalFs, ProbeResult, StyleProbe};
use crate::style::Style;

/// Aggregate install state of a style across its expected resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationStatus {
    NotInstalled,
    FullyInstalled,
    /// Some resolutions are missing, the rest are current
    IncompleteOnly,
    /// Everything is present but at least one resolution is an older version
    OutdatedOnly,
    OutdatedAndIncomplete,
}

impl InstallationStatus {
    /// Numeric code used by settings pages (-1 to 3).
    pub fn code(self) -> i8 {
        match self {
            Self::NotInstalled => -1,
            Self::FullyInstalled => 0,
            Self::IncompleteOnly => 1,
            Self::OutdatedOnly => 2,
            Self::OutdatedAndIncomplete => 3,
        }
    }

    /// Classify from the number of expected, missing and outdated entries.
    pub fn from_counts(expected: usize, missing: usize, outdated: bool) -> Self {
        if missing >= expected {
            Self::NotInstalled
        } else if missing > 0 && outdated {
            Self::OutdatedAndIncomplete
        } else if missing > 0 {
            Self::IncompleteOnly
        } else if outdated {
            Self::OutdatedOnly
        } else {
            Self::FullyInstalled
        }
    }

    pub fn is_usable(self) -> bool {
        self != Self::NotInstalled
    }
}

impl std::fmt::Display for InstallationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::NotInstalled => "not installed",
            Self::FullyInstalled => "installed",
            Self::IncompleteOnly => "incomplete",
            Self::OutdatedOnly => "outdated",
            Self::OutdatedAndIncomplete => "outdated, incomplete",
        };
        f.write_str(label)
    }
}

/// Probe results keyed by style key and resolution.
pub struct InstallationStatusCache<F: AssetFs = LocalFs> {
    probe: StyleProbe<F>,
    entries: HashMap<(String, Option<u32>), ProbeResult>,
}

impl<F: AssetFs> InstallationStatusCache<F> {
    pub fn new(probe: StyleProbe<F>) -> Self {
        Self {
            probe,
            entries: HashMap::new(),
        }
    }

    pub fn probe(&self) -> &StyleProbe<F> {
        &self.probe
    }

    /// Cached probe result, probing on a miss or when `no_cache` is set.
    pub fn get_or_probe(
        &mut self,
        style: &Style,
        resolution: Option<u32>,
        no_cache: bool,
    ) -> ProbeResult {
        let key = (style.key.clone(), resolution);
        if !no_cache {
            if let Some(hit) = self.entries.get(&key) {
                return hit.clone();
            }
        }

        let result = self.probe.probe(style, resolution);
        self.entries.insert(key, result.clone());
        result
    }

    /// Install state of `style`.
    ///
    /// Raster styles are checked at every entry of `raster_resolutions`;
    /// vector styles once without a resolution.
    pub fn installation_status(
        &mut self,
        style: &Style,
        raster_resolutions: &[u32],
        no_cache: bool,
    ) -> InstallationStatus {
        if style.is_system() {
            return InstallationStatus::FullyInstalled;
        }

        let resolutions: Vec<Option<u32>> = if style.is_raster() {
            raster_resolutions.iter().map(|&r| Some(r)).collect()
        } else {
            vec![None]
        };

        let mut missing = 0;
        let mut outdated = false;
        for &res in &resolutions {
            let result = self.get_or_probe(style, res, no_cache);
            if !result.found {
                missing += 1;
            } else if !result.up_to_date {
                outdated = true;
            }
        }

        InstallationStatus::from_counts(resolutions.len(), missing, outdated)
    }

    /// Drop every cached result and re-arm the missing-style diagnostic.
    pub fn flush(&mut self) {
        self.entries.clear();
        self.probe.reset_diagnostics();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
