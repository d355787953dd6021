//! # voxlet-types
//!
//! Core type definitions for the voxlet embeddable voice widget.
//!
//! This crate is the foundation of the dependency graph -- all other
//! voxlet crates depend on it. It contains:
//!
//! - **[`error`]** -- [`EmbedError`] and [`DomError`] error types
//! - **[`theme`]** -- Theme preference, concrete color scheme, appearance mode
//! - **[`signal`]** -- The loader script signal read from the host page
//! - **[`settings`]** -- Build/deploy-time embed settings
//! - **[`remote`]** -- Remote app config and connection details payloads

pub mod error;
pub mod remote;
pub mod settings;
pub mod signal;
pub mod theme;

pub use error::{DomError, EmbedError, Result};
pub use remote::{ConnectionDetails, RemoteAppConfig};
pub use settings::{EmbedSettings, Palette};
pub use signal::LoaderSignal;
pub use theme::{AppearanceMode, ColorScheme, ThemePreference};
