//! Embed bootstrapper for the voxlet voice widget.
//!
//! Everything that happens between the loader `<script>` tag executing and
//! the widget UI receiving its mount point:
//!
//! - [`isolation`] -- builds the style-isolated subtree the widget lives in
//! - [`loader`] -- finds the loader script and its attributes
//! - [`theme`] / [`appearance`] -- resolve and apply theming
//! - [`origin`] -- decides which backend to talk to
//! - [`remote`] / [`connection`] -- backend reads
//! - [`mount`] -- the hand-off seam to the external UI
//! - [`bootstrap`] -- the one-shot sequence tying it together
//!
//! All page access goes through `voxlet-platform` traits, so the whole
//! sequence runs against [`voxlet_platform::memory::MemoryPage`] in tests.

pub mod appearance;
pub mod bootstrap;
pub mod connection;
pub mod isolation;
pub mod loader;
pub mod mount;
pub mod origin;
pub mod remote;
pub mod styles;
pub mod theme;

pub use bootstrap::{BootstrapOutcome, Bootstrapper};
pub use connection::ConnectionDetailsClient;
pub use mount::{EmbedContext, MountEntrypoint};
