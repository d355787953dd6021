//! [`Dom`] over the live document via [`web_sys`].
//!
//! Node handles are plain [`web_sys::Node`]s so elements and shadow roots
//! share one type; element-only operations downcast and report
//! [`DomError::NotAnElement`] otherwise.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node, ShadowRootInit, ShadowRootMode, Window};

use voxlet_types::DomError;

use super::{PORTAL_GLOBAL, SHADOW_ROOT_GLOBAL, js_error};
use crate::dom::Dom;

#[derive(Debug, Clone)]
pub struct BrowserDom {
    window: Window,
    document: Document,
}

impl BrowserDom {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

fn as_element(node: &Node) -> Result<&Element, DomError> {
    node.dyn_ref::<Element>()
        .ok_or_else(|| DomError::NotAnElement(node.node_name()))
}

fn as_html_element(node: &Node) -> Result<&HtmlElement, DomError> {
    node.dyn_ref::<HtmlElement>()
        .ok_or_else(|| DomError::NotAnElement(node.node_name()))
}

impl Dom for BrowserDom {
    type Node = Node;

    fn create_element(&self, tag: &str) -> Result<Node, DomError> {
        let element = self.document.create_element(tag).map_err(js_error)?;
        Ok(element.into())
    }

    fn body(&self) -> Option<Node> {
        self.document.body().map(Into::into)
    }

    fn append_child(&self, parent: &Node, child: &Node) -> Result<(), DomError> {
        parent.append_child(child).map(|_| ()).map_err(js_error)
    }

    fn attach_isolated_root(&self, host: &Node) -> Result<Node, DomError> {
        let init = ShadowRootInit::new(ShadowRootMode::Open);
        let root = as_element(host)?
            .attach_shadow(&init)
            .map_err(|e| DomError::AttachRefused(js_error(e).to_string()))?;
        Ok(root.into())
    }

    fn set_attribute(&self, node: &Node, name: &str, value: &str) -> Result<(), DomError> {
        as_element(node)?.set_attribute(name, value).map_err(js_error)
    }

    fn set_style(&self, node: &Node, property: &str, value: &str) -> Result<(), DomError> {
        as_html_element(node)?
            .style()
            .set_property(property, value)
            .map_err(js_error)
    }

    fn set_text(&self, node: &Node, text: &str) {
        node.set_text_content(Some(text));
    }

    fn add_class(&self, node: &Node, class: &str) -> Result<(), DomError> {
        as_element(node)?.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, node: &Node, class: &str) -> Result<(), DomError> {
        as_element(node)?
            .class_list()
            .remove_1(class)
            .map_err(js_error)
    }

    fn has_class(&self, node: &Node, class: &str) -> bool {
        as_element(node).is_ok_and(|el| el.class_list().contains(class))
    }

    fn publish_embed_root(&self, isolated_root: &Node, portal: &Node) {
        let target: &JsValue = self.window.as_ref();
        for (key, value) in [(SHADOW_ROOT_GLOBAL, isolated_root), (PORTAL_GLOBAL, portal)] {
            if let Err(e) = js_sys::Reflect::set(target, &JsValue::from_str(key), value.as_ref()) {
                tracing::warn!(key, error = %js_error(e), "could not publish embed registry entry");
            }
        }
    }
}
