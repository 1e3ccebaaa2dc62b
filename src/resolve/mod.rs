//! # Resolve Module
//!
//! Combines installation probing, resolution selection and text scanning.
//!
//! ## Architecture
//!
//! ```text
//! text + style + size → AssetResolver
//!                          ↓
//!                  ResolutionSelector ──→ InstallationStatusCache ──→ StyleProbe
//!                          ↓
//!            { use_system, base_path, effective_size }
//!                          ↓
//!                    scan(text, on_match)
//!                          ↓
//!                     ParseResult
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Data directory and raster resolutions
//! - [`resolution`]: Raster resolution choice and fallback decision
//! - [`resolver`]: The [`AssetResolver`] entry points

pub mod config;
pub mod resolution;
pub mod resolver;

pub use config::{DEFAULT_RASTER_RESOLUTIONS, DEFAULT_SUB_DIR, GROW_FACTOR, ResolverConfig};
pub use resolution::{ParseSettings, ResolutionSelector, SizeRequest};
pub use resolver::AssetResolver;
