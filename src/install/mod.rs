//! # Install Module
//!
//! Finds out which emoji styles are present on disk.
//!
//! ## Modules
//!
//! - [`probe`]: Reference-asset existence checks
//! - [`cache`]: Memoized probe results and aggregate install status

pub mod cache;
pub mod probe;

pub use cache::{InstallationStatus, InstallationStatusCache};
pub use probe::{AssetFs, LocalFs, MemoryFs, PROBE_ASSET, ProbeResult, StyleProbe};
