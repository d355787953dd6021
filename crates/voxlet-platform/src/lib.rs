//! Host page abstraction layer for voxlet.
//!
//! Provides traits for every page-dependent operation the widget performs
//! (DOM construction, script discovery, system color-scheme queries, HTTP,
//! environment lookup) so the bootstrapper in `voxlet-core` is independent
//! of the browser and can be exercised headlessly.
//!
//! # Architecture
//!
//! The [`HostPage`] trait bundles the page capabilities via accessor methods.
//! Each capability has its own trait ([`dom::Dom`], [`scripts::ScriptSource`],
//! [`color_scheme::ColorSchemeSource`]). HTTP ([`http::HttpClient`]) and the
//! environment ([`env::Environment`]) are not tied to a page and are passed
//! separately.
//!
//! Two page implementations exist:
//!
//! - [`memory::MemoryPage`] -- a headless, in-memory page used by tests and
//!   the CLI. Always available.
//! - `browser::BrowserPage` -- the live document via [`web_sys`]
//!   (`browser` feature, `wasm32-unknown-unknown`).
//!
//! # Example
//!
//! ```rust
//! use voxlet_platform::HostPage;
//! use voxlet_platform::dom::Dom;
//! use voxlet_platform::memory::MemoryPage;
//! use voxlet_types::LoaderSignal;
//!
//! let page = MemoryPage::new()
//!     .with_script(LoaderSignal::with_src("https://cdn.example.com/embed-popup.js"));
//! let node = page.dom().create_element("div").unwrap();
//! page.dom().add_class(&node, "light").unwrap();
//! assert!(page.dom().has_class(&node, "light"));
//! assert_eq!(page.script_source().scripts().len(), 1);
//! ```

pub mod color_scheme;
pub mod dom;
pub mod env;
pub mod http;
pub mod memory;
pub mod scripts;
pub mod settings_loader;

#[cfg(feature = "browser")]
pub mod browser;

/// Bundle of all capabilities a host page offers the bootstrapper.
///
/// The DOM is an associated type because node handles are concrete per
/// implementation (arena ids in memory, JS handles in the browser). Script
/// discovery and color-scheme queries have no such handles and are returned
/// as trait objects.
pub trait HostPage {
    /// DOM implementation; cloned into long-lived listeners.
    type Dom: dom::Dom;

    /// DOM construction and mutation.
    fn dom(&self) -> &Self::Dom;

    /// Script element discovery and page origin.
    fn script_source(&self) -> &dyn scripts::ScriptSource;

    /// System color-scheme signal.
    fn color_scheme(&self) -> &dyn color_scheme::ColorSchemeSource;
}
