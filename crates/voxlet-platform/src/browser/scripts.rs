//! Script discovery over the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlScriptElement, Window};

use voxlet_types::LoaderSignal;

use crate::scripts::ScriptSource;

#[derive(Debug, Clone)]
pub struct BrowserScripts {
    window: Window,
    document: Document,
}

impl BrowserScripts {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

/// Snapshot a script element: its resolved `src` and every `data-*`
/// attribute.
fn snapshot(element: &Element) -> LoaderSignal {
    let mut signal = LoaderSignal::inline();
    if let Some(script) = element.dyn_ref::<HtmlScriptElement>() {
        let src = script.src();
        if !src.is_empty() {
            signal.src = Some(src);
        }
    }
    for name in element.get_attribute_names().iter().filter_map(|n| n.as_string()) {
        if name.starts_with("data-")
            && let Some(value) = element.get_attribute(&name)
        {
            signal.insert_attribute(&name, value);
        }
    }
    signal
}

impl ScriptSource for BrowserScripts {
    fn current_script(&self) -> Option<LoaderSignal> {
        // Null once the bundle runs asynchronously (wasm instantiation,
        // module scripts); that is expected and handled by the caller.
        self.document.current_script().map(|el| snapshot(&el))
    }

    fn scripts(&self) -> Vec<LoaderSignal> {
        let collection = self.document.get_elements_by_tag_name("script");
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(|el| snapshot(&el))
            .collect()
    }

    fn page_origin(&self) -> Option<String> {
        self.window.location().origin().ok()
    }
}
