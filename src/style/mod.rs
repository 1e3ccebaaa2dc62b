//! # Style Module
//!
//! Descriptions of the emoji asset families the resolver can serve.
//!
//! ## Modules
//!
//! - [`catalog`]: Style records and the built-in catalog

pub mod catalog;

pub use catalog::{AssetSet, SYSTEM_STYLE_KEY, Style, StyleCatalog, StyleKind};
