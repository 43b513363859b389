//! # northlight-core
//!
//! Core types for the Northlight site. This crate has no web-framework
//! dependencies and provides the foundation for the other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`settings`] - Site settings with TOML overrides
//! - [`logging`] - Tracing-based logging setup

pub mod error;
pub mod logging;
pub mod settings;

// Re-export the most commonly used types at the crate root.
pub use error::{SiteError, SiteResult};
pub use settings::Settings;
