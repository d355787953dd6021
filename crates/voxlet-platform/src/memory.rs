//! Headless in-memory host page.
//!
//! [`MemoryPage`] implements every page capability against a small arena
//! DOM. It is what the bootstrapper's tests and the `voxlet` CLI run
//! against: scripts, page origin and the system color scheme are configured
//! up front, and [`MemoryPage::set_prefers_dark`] fires registered listeners
//! the way an OS theme switch would.
//!
//! The page is a cheap `Rc` handle; clones share state. It is single-threaded
//! by construction, like the browser it stands in for.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::rc::Rc;

use voxlet_types::{DomError, LoaderSignal};

use crate::HostPage;
use crate::color_scheme::{ColorSchemeSource, SchemeListener};
use crate::dom::Dom;
use crate::scripts::ScriptSource;

/// Arena index of a node in a [`MemoryPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Kind of node stored in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    /// An isolated (shadow) root attached to a host element.
    IsolatedRoot,
}

/// Snapshot of one node, returned by [`MemoryPage::node`].
#[derive(Debug, Clone)]
pub struct MemoryNode {
    pub kind: NodeKind,
    /// Lowercase tag name; `#isolated-root` for isolated roots.
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    /// Class list in insertion order, without duplicates.
    pub classes: Vec<String>,
    pub text: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub isolated_root: Option<NodeId>,
}

impl MemoryNode {
    fn new(kind: NodeKind, tag: &str) -> Self {
        Self {
            kind,
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            classes: Vec::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            isolated_root: None,
        }
    }
}

#[derive(Debug)]
struct PageState {
    nodes: Vec<MemoryNode>,
    body: Option<NodeId>,
    current_script: Option<LoaderSignal>,
    scripts: Vec<LoaderSignal>,
    page_origin: Option<String>,
    prefers_dark: Option<bool>,
    live_tracking: bool,
    registry: Option<(NodeId, NodeId)>,
    registry_writes: usize,
}

/// Headless host page backed by an arena DOM.
#[derive(Clone)]
pub struct MemoryPage {
    state: Rc<RefCell<PageState>>,
    listeners: Rc<RefCell<Vec<Rc<dyn Fn(bool)>>>>,
}

impl std::fmt::Debug for MemoryPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryPage")
            .field("nodes", &self.state.borrow().nodes.len())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl MemoryPage {
    /// A page with an empty `<body>`, no scripts, origin
    /// `https://host.example`, a light system scheme and live tracking
    /// available.
    pub fn new() -> Self {
        let nodes = vec![MemoryNode::new(NodeKind::Element, "body")];
        Self {
            state: Rc::new(RefCell::new(PageState {
                nodes,
                body: Some(NodeId(0)),
                current_script: None,
                scripts: Vec::new(),
                page_origin: Some("https://host.example".to_string()),
                prefers_dark: Some(false),
                live_tracking: true,
                registry: None,
                registry_writes: 0,
            })),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append a script element to the page.
    pub fn with_script(self, script: LoaderSignal) -> Self {
        self.state.borrow_mut().scripts.push(script);
        self
    }

    /// Append a script element and mark it as the currently executing one.
    pub fn with_current_script(self, script: LoaderSignal) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.scripts.push(script.clone());
            state.current_script = Some(script);
        }
        self
    }

    /// Set the page origin; `None` models a runtime without `location`.
    pub fn with_page_origin(self, origin: Option<&str>) -> Self {
        self.state.borrow_mut().page_origin = origin.map(str::to_string);
        self
    }

    /// Set the initial system scheme; `None` models a missing `matchMedia`.
    pub fn with_prefers_dark(self, dark: Option<bool>) -> Self {
        self.state.borrow_mut().prefers_dark = dark;
        self
    }

    /// Model a runtime whose media query cannot notify about changes.
    pub fn without_live_tracking(self) -> Self {
        self.state.borrow_mut().live_tracking = false;
        self
    }

    /// Model a document that has no `<body>` yet.
    pub fn without_body(self) -> Self {
        self.state.borrow_mut().body = None;
        self
    }

    /// Flip the system scheme and notify every registered listener.
    pub fn set_prefers_dark(&self, dark: bool) {
        self.state.borrow_mut().prefers_dark = Some(dark);
        // Listeners mutate the DOM, so they must run with no borrow held.
        let listeners: Vec<_> = self.listeners.borrow().iter().cloned().collect();
        for listener in listeners {
            listener(dark);
        }
    }

    /// Number of system scheme listeners registered so far.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Snapshot of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this page.
    pub fn node(&self, id: NodeId) -> MemoryNode {
        self.state.borrow().nodes[id.0].clone()
    }

    pub fn body_id(&self) -> Option<NodeId> {
        self.state.borrow().body
    }

    /// First element (in arena order) whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.state
            .borrow()
            .nodes
            .iter()
            .position(|n| n.attributes.get("id").is_some_and(|v| v == id))
            .map(NodeId)
    }

    /// Current registry entry: (isolated root, portal).
    pub fn registry(&self) -> Option<(NodeId, NodeId)> {
        self.state.borrow().registry
    }

    /// How many times the registry has been written.
    pub fn registry_writes(&self) -> usize {
        self.state.borrow().registry_writes
    }

    /// Indented outline of the subtree under `root`, isolated roots included.
    pub fn outline(&self, root: NodeId) -> String {
        let state = self.state.borrow();
        let mut out = String::new();
        outline_into(&state.nodes, root, 0, &mut out);
        out
    }

    fn with_node<R>(&self, id: NodeId, f: impl FnOnce(&mut MemoryNode) -> R) -> Result<R, DomError> {
        let mut state = self.state.borrow_mut();
        state
            .nodes
            .get_mut(id.0)
            .map(f)
            .ok_or_else(|| DomError::Js(format!("unknown node {}", id.0)))
    }

    fn with_element<R>(
        &self,
        id: NodeId,
        f: impl FnOnce(&mut MemoryNode) -> R,
    ) -> Result<R, DomError> {
        self.with_node(id, |node| {
            if node.kind == NodeKind::Element {
                Ok(f(node))
            } else {
                Err(DomError::NotAnElement(node.tag.clone()))
            }
        })?
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

fn outline_into(nodes: &[MemoryNode], id: NodeId, depth: usize, out: &mut String) {
    let node = &nodes[id.0];
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}<{}", node.tag);
    if let Some(node_id) = node.attributes.get("id") {
        let _ = write!(out, " id=\"{node_id}\"");
    }
    if !node.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", node.classes.join(" "));
    }
    if !node.text.is_empty() {
        let _ = write!(out, " text={}B", node.text.len());
    }
    out.push_str(">\n");
    if let Some(root) = node.isolated_root {
        outline_into(nodes, root, depth + 1, out);
    }
    for child in &node.children {
        outline_into(nodes, *child, depth + 1, out);
    }
}

impl Dom for MemoryPage {
    type Node = NodeId;

    fn create_element(&self, tag: &str) -> Result<NodeId, DomError> {
        let mut state = self.state.borrow_mut();
        state.nodes.push(MemoryNode::new(NodeKind::Element, tag));
        Ok(NodeId(state.nodes.len() - 1))
    }

    fn body(&self) -> Option<NodeId> {
        self.state.borrow().body
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), DomError> {
        if parent == child {
            return Err(DomError::Js("HierarchyRequestError: node appended to itself".into()));
        }
        let previous = self.with_node(*child, |node| node.parent.replace(*parent))?;
        if let Some(old_parent) = previous {
            self.with_node(old_parent, |node| node.children.retain(|c| c != child))?;
        }
        self.with_node(*parent, |node| node.children.push(*child))
    }

    fn attach_isolated_root(&self, host: &NodeId) -> Result<NodeId, DomError> {
        let already = self.with_element(*host, |node| node.isolated_root)?;
        if already.is_some() {
            return Err(DomError::AttachRefused(
                "host already has an isolated root".into(),
            ));
        }
        let root = {
            let mut state = self.state.borrow_mut();
            let mut node = MemoryNode::new(NodeKind::IsolatedRoot, "#isolated-root");
            node.parent = Some(*host);
            state.nodes.push(node);
            NodeId(state.nodes.len() - 1)
        };
        self.with_node(*host, |node| node.isolated_root = Some(root))?;
        Ok(root)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), DomError> {
        self.with_element(*node, |n| {
            n.attributes.insert(name.to_ascii_lowercase(), value.to_string());
        })
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) -> Result<(), DomError> {
        self.with_element(*node, |n| {
            n.style.insert(property.to_string(), value.to_string());
        })
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let _ = self.with_node(*node, |n| n.text = text.to_string());
    }

    fn add_class(&self, node: &NodeId, class: &str) -> Result<(), DomError> {
        self.with_element(*node, |n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        })
    }

    fn remove_class(&self, node: &NodeId, class: &str) -> Result<(), DomError> {
        self.with_element(*node, |n| n.classes.retain(|c| c != class))
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.with_node(*node, |n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn publish_embed_root(&self, isolated_root: &NodeId, portal: &NodeId) {
        let mut state = self.state.borrow_mut();
        state.registry = Some((*isolated_root, *portal));
        state.registry_writes += 1;
    }
}

impl ScriptSource for MemoryPage {
    fn current_script(&self) -> Option<LoaderSignal> {
        self.state.borrow().current_script.clone()
    }

    fn scripts(&self) -> Vec<LoaderSignal> {
        self.state.borrow().scripts.clone()
    }

    fn page_origin(&self) -> Option<String> {
        self.state.borrow().page_origin.clone()
    }
}

impl ColorSchemeSource for MemoryPage {
    fn prefers_dark(&self) -> Option<bool> {
        self.state.borrow().prefers_dark
    }

    fn supports_live_tracking(&self) -> bool {
        let state = self.state.borrow();
        state.live_tracking && state.prefers_dark.is_some()
    }

    fn on_change(&self, listener: SchemeListener) -> bool {
        if !self.supports_live_tracking() {
            return false;
        }
        self.listeners.borrow_mut().push(Rc::from(listener));
        true
    }
}

impl HostPage for MemoryPage {
    type Dom = MemoryPage;

    fn dom(&self) -> &MemoryPage {
        self
    }

    fn script_source(&self) -> &dyn ScriptSource {
        self
    }

    fn color_scheme(&self) -> &dyn ColorSchemeSource {
        self
    }
}
