//! The isolation boundary.
//!
//! Builds, once per bootstrap, the subtree the widget lives in:
//!
//! ```text
//! <body>
//!   <div id="voxlet-embed-wrapper">        host: fixed, full viewport, top z-index
//!     #isolated-root                       open shadow root
//!       <style data-voxlet="base">         full widget stylesheet
//!       <style data-voxlet="palette">      primary palette override
//!       <div data-voxlet="theme-root">     class is the only theme switch
//!         <div class="voxlet-mount">       mount point handed to the UI
//!       <div id="voxlet-embed-portal">     portal target for floating UI
//! ```
//!
//! The host node is appended to the live body and never removed.

use tracing::debug;
use voxlet_platform::dom::Dom;
use voxlet_types::settings::HOST_Z_INDEX;
use voxlet_types::{EmbedError, EmbedSettings, Result};

use crate::styles::{BASE_STYLESHEET, palette_override};

/// Attribute marking the nodes the bootstrapper owns.
pub const MARKER_ATTRIBUTE: &str = "data-voxlet";

/// Handles to every node of one isolation boundary.
#[derive(Debug, Clone)]
pub struct IsolationBoundary<N> {
    /// Element appended to the page body.
    pub host: N,
    /// Isolated root attached to `host`; style blocks live here.
    pub isolated_root: N,
    /// Container whose class list selects the theme.
    pub theme_root: N,
    /// Empty element handed to the UI mount entrypoint.
    pub mount_point: N,
    /// Plain element for menus and dropdowns to portal into.
    pub portal: N,
}

/// Append a `<style>` block to `parent`, tagged with `kind`.
pub fn inject_style<D: Dom>(dom: &D, parent: &D::Node, kind: &str, css: &str) -> Result<D::Node> {
    let style = dom.create_element("style")?;
    dom.set_attribute(&style, MARKER_ATTRIBUTE, kind)?;
    dom.set_text(&style, css);
    dom.append_child(parent, &style)?;
    Ok(style)
}

/// Build the isolation boundary and publish it on the page registry.
///
/// # Errors
///
/// [`EmbedError::DomUnavailable`] when the page has no body yet, or the
/// DOM error that stopped construction. Nothing is rolled back.
pub fn create_isolation_boundary<D: Dom>(
    dom: &D,
    settings: &EmbedSettings,
    stylesheet: &str,
) -> Result<IsolationBoundary<D::Node>> {
    let body = dom.body().ok_or(EmbedError::DomUnavailable)?;

    let host = dom.create_element("div")?;
    dom.set_attribute(&host, "id", &settings.host_element_id)?;
    for (property, value) in [
        ("position", "fixed"),
        ("inset", "0"),
        ("z-index", HOST_Z_INDEX),
        ("pointer-events", "auto"),
    ] {
        dom.set_style(&host, property, value)?;
    }
    dom.append_child(&body, &host)?;

    let isolated_root = dom.attach_isolated_root(&host)?;
    inject_style(dom, &isolated_root, "base", stylesheet)?;
    inject_style(dom, &isolated_root, "palette", &palette_override(&settings.palette))?;

    let theme_root = dom.create_element("div")?;
    dom.set_attribute(&theme_root, MARKER_ATTRIBUTE, "theme-root")?;
    dom.set_style(&theme_root, "color", "var(--foreground)")?;
    dom.set_style(&theme_root, "background-color", "transparent")?;
    dom.append_child(&isolated_root, &theme_root)?;

    let mount_point = dom.create_element("div")?;
    dom.add_class(&mount_point, "voxlet-mount")?;
    dom.append_child(&theme_root, &mount_point)?;

    let portal = dom.create_element("div")?;
    dom.set_attribute(&portal, "id", &settings.portal_element_id)?;
    dom.add_class(&portal, "voxlet-portal")?;
    dom.append_child(&isolated_root, &portal)?;

    dom.publish_embed_root(&isolated_root, &portal);
    debug!(host_id = %settings.host_element_id, "isolation boundary created");

    Ok(IsolationBoundary {
        host,
        isolated_root,
        theme_root,
        mount_point,
        portal,
    })
}

/// [`create_isolation_boundary`] with the bundled base stylesheet.
pub fn create_default_boundary<D: Dom>(
    dom: &D,
    settings: &EmbedSettings,
) -> Result<IsolationBoundary<D::Node>> {
    create_isolation_boundary(dom, settings, BASE_STYLESHEET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlet_platform::memory::{MemoryPage, NodeKind};

    #[test]
    fn host_covers_viewport_on_top() {
        let page = MemoryPage::new();
        let boundary = create_default_boundary(&page, &EmbedSettings::default()).unwrap();

        let host = page.node(boundary.host);
        assert_eq!(host.attributes["id"], "voxlet-embed-wrapper");
        assert_eq!(host.style["position"], "fixed");
        assert_eq!(host.style["inset"], "0");
        assert_eq!(host.style["z-index"], "2147483647");
        assert_eq!(host.style["pointer-events"], "auto");
        assert_eq!(host.parent, page.body_id());
        assert_eq!(host.isolated_root, Some(boundary.isolated_root));
    }

    #[test]
    fn isolated_root_holds_styles_theme_root_and_portal() {
        let page = MemoryPage::new();
        let boundary = create_default_boundary(&page, &EmbedSettings::default()).unwrap();

        let root = page.node(boundary.isolated_root);
        assert_eq!(root.kind, NodeKind::IsolatedRoot);
        let kinds: Vec<String> = root
            .children
            .iter()
            .map(|id| {
                let n = page.node(*id);
                n.attributes
                    .get(MARKER_ATTRIBUTE)
                    .cloned()
                    .unwrap_or_else(|| n.attributes["id"].clone())
            })
            .collect();
        assert_eq!(kinds, ["base", "palette", "theme-root", "voxlet-embed-portal"]);

        let base = page.node(root.children[0]);
        assert_eq!(base.tag, "style");
        assert_eq!(base.text, BASE_STYLESHEET);
        assert!(page.node(root.children[1]).text.contains("--primary: #facc15;"));
    }

    #[test]
    fn theme_root_does_not_inherit_host_colors() {
        let page = MemoryPage::new();
        let boundary = create_default_boundary(&page, &EmbedSettings::default()).unwrap();
        let theme_root = page.node(boundary.theme_root);
        assert_eq!(theme_root.style["color"], "var(--foreground)");
        assert_eq!(theme_root.style["background-color"], "transparent");
        assert_eq!(theme_root.children, vec![boundary.mount_point]);
        assert!(page.node(boundary.mount_point).children.is_empty());
    }

    #[test]
    fn registry_points_at_latest_boundary() {
        let page = MemoryPage::new();
        let settings = EmbedSettings::default();
        let first = create_default_boundary(&page, &settings).unwrap();
        assert_eq!(page.registry(), Some((first.isolated_root, first.portal)));

        let second = create_default_boundary(&page, &settings).unwrap();
        assert_eq!(page.registry(), Some((second.isolated_root, second.portal)));
        assert_eq!(page.registry_writes(), 2);
        assert_ne!(first.host, second.host);
    }

    #[test]
    fn missing_body_is_reported() {
        let page = MemoryPage::new().without_body();
        let err = create_default_boundary(&page, &EmbedSettings::default()).unwrap_err();
        assert!(matches!(err, EmbedError::DomUnavailable));
        assert_eq!(page.registry(), None);
    }

    #[test]
    fn custom_stylesheet_is_injected_verbatim() {
        let page = MemoryPage::new();
        let boundary =
            create_isolation_boundary(&page, &EmbedSettings::default(), ".x{}").unwrap();
        let first_style = page.node(boundary.isolated_root).children[0];
        assert_eq!(page.node(first_style).text, ".x{}");
    }
}
