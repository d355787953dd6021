//! System color scheme via `matchMedia`.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, MediaQueryList, Window};

use crate::color_scheme::{ColorSchemeSource, SchemeListener};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone)]
pub struct BrowserColorScheme {
    query: Option<MediaQueryList>,
}

impl BrowserColorScheme {
    /// Evaluate the dark-scheme media query once. A window without
    /// `matchMedia` (or one that throws) yields a source that answers `None`.
    pub fn new(window: &Window) -> Self {
        let query = window.match_media(DARK_QUERY).ok().flatten();
        Self { query }
    }
}

impl ColorSchemeSource for BrowserColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.query.as_ref().map(MediaQueryList::matches)
    }

    fn supports_live_tracking(&self) -> bool {
        // Safari < 14 exposes only the deprecated addListener.
        self.query.as_ref().is_some_and(|q| {
            js_sys::Reflect::has(q.as_ref(), &JsValue::from_str("addEventListener"))
                .unwrap_or(false)
        })
    }

    fn on_change(&self, listener: SchemeListener) -> bool {
        if !self.supports_live_tracking() {
            return false;
        }
        let Some(query) = self.query.clone() else {
            return false;
        };

        let source = query.clone();
        let callback = Closure::<dyn Fn(Event)>::new(move |_event: Event| {
            listener(source.matches());
        });
        let registered = query
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .is_ok();
        // The listener lives for the rest of the page; there is no unsubscribe.
        callback.forget();
        registered
    }
}
