//! DOM construction abstraction.
//!
//! The operations here are exactly what the isolation boundary, theme and
//! appearance code need: create elements, attach an isolated root, set
//! attributes/styles/text, and toggle classes. Node handles are cheap clones.

use std::fmt;

use voxlet_types::DomError;

/// Platform-agnostic DOM access.
///
/// Implementations must be cheap to clone: the system color-scheme listener
/// owns a clone of the DOM handle for the rest of the page's life.
pub trait Dom: Clone + 'static {
    /// Handle to a node (element or isolated root).
    type Node: Clone + fmt::Debug + 'static;

    /// Create a detached element with the given tag name.
    fn create_element(&self, tag: &str) -> Result<Self::Node, DomError>;

    /// The document body, if the page has one yet.
    fn body(&self) -> Option<Self::Node>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;

    /// Attach an open isolated (shadow) root to `host` and return it.
    fn attach_isolated_root(&self, host: &Self::Node) -> Result<Self::Node, DomError>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str)
    -> Result<(), DomError>;

    /// Set an inline style property (`position`, `z-index`, `color-scheme`...).
    fn set_style(&self, node: &Self::Node, property: &str, value: &str)
    -> Result<(), DomError>;

    /// Replace the node's text content.
    fn set_text(&self, node: &Self::Node, text: &str);

    fn add_class(&self, node: &Self::Node, class: &str) -> Result<(), DomError>;

    fn remove_class(&self, node: &Self::Node, class: &str) -> Result<(), DomError>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Publish the isolated root and portal target on the page-scoped
    /// registry. The last call wins.
    fn publish_embed_root(&self, isolated_root: &Self::Node, portal: &Self::Node);
}
