//! Browser/WASM page implementation.
//!
//! Provides [`BrowserPage`] which bundles [`web_sys`]-backed implementations
//! of the page capabilities:
//!
//! - [`BrowserDom`] -- the live document; isolated roots are open shadow roots.
//! - [`BrowserScripts`] -- `document.currentScript` and `<script>` elements.
//! - [`BrowserColorScheme`] -- `matchMedia("(prefers-color-scheme: dark)")`.
//! - [`BrowserHttpClient`] -- HTTP via the fetch API (not page-bound).

pub mod color_scheme;
pub mod dom;
pub mod http;
pub mod scripts;

pub use color_scheme::BrowserColorScheme;
pub use dom::BrowserDom;
pub use http::BrowserHttpClient;
pub use scripts::BrowserScripts;

use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use voxlet_types::{DomError, EmbedError};

use crate::HostPage;
use crate::color_scheme::ColorSchemeSource;
use crate::scripts::ScriptSource;

/// Page-global property holding the isolated root.
pub const SHADOW_ROOT_GLOBAL: &str = "__VOXLET_EMBED_SHADOW_ROOT";

/// Page-global property holding the portal target element.
pub const PORTAL_GLOBAL: &str = "__VOXLET_EMBED_PORTAL";

/// The live browser document.
#[derive(Debug, Clone)]
pub struct BrowserPage {
    dom: BrowserDom,
    scripts: BrowserScripts,
    color_scheme: BrowserColorScheme,
}

impl BrowserPage {
    /// Bind to the current window and document.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::DomUnavailable`] outside a window context
    /// (workers, non-browser hosts).
    pub fn new() -> Result<Self, EmbedError> {
        let window: Window = web_sys::window().ok_or(EmbedError::DomUnavailable)?;
        let document: Document = window.document().ok_or(EmbedError::DomUnavailable)?;
        Ok(Self {
            dom: BrowserDom::new(window.clone(), document.clone()),
            scripts: BrowserScripts::new(window.clone(), document),
            color_scheme: BrowserColorScheme::new(&window),
        })
    }
}

impl HostPage for BrowserPage {
    type Dom = BrowserDom;

    fn dom(&self) -> &BrowserDom {
        &self.dom
    }

    fn script_source(&self) -> &dyn ScriptSource {
        &self.scripts
    }

    fn color_scheme(&self) -> &dyn ColorSchemeSource {
        &self.color_scheme
    }
}

/// Convert a thrown [`JsValue`] into a [`DomError`].
pub fn js_error(value: JsValue) -> DomError {
    let msg = if let Some(s) = value.as_string() {
        s
    } else {
        format!("{:?}", value)
    };
    DomError::Js(msg)
}
