//! Appearance mode resolution and application.

use tracing::debug;
use voxlet_platform::dom::Dom;
use voxlet_types::{AppearanceMode, LoaderSignal, Result, ThemePreference};

use crate::isolation::inject_style;
use crate::styles::pure_appearance_override;

/// Marker value of the appearance `<style>` block.
pub const APPEARANCE_STYLE_KIND: &str = "appearance";

/// `data-appearance="pure"` (any case) selects [`AppearanceMode::Pure`].
/// Everything else, including no loader at all, is the default.
pub fn resolve_appearance_mode(loader: Option<&LoaderSignal>) -> AppearanceMode {
    AppearanceMode::parse(loader.and_then(LoaderSignal::appearance_attribute))
}

/// Apply `mode` inside the isolated root.
///
/// The `pure` block only ever matches `.light`, so it is skipped when the
/// theme is pinned to dark. A `System` (or unspecified) theme keeps the
/// block even while the OS is dark, since the scheme can flip later.
/// Returns the injected style node, if any. The base stylesheet is never
/// touched.
pub fn apply_appearance_mode<D: Dom>(
    dom: &D,
    mode: AppearanceMode,
    theme: Option<ThemePreference>,
    isolated_root: &D::Node,
) -> Result<Option<D::Node>> {
    if mode != AppearanceMode::Pure || theme == Some(ThemePreference::Dark) {
        debug!(%mode, ?theme, "no appearance override");
        return Ok(None);
    }
    let style = inject_style(
        dom,
        isolated_root,
        APPEARANCE_STYLE_KIND,
        &pure_appearance_override(),
    )?;
    debug!(%mode, "appearance override injected");
    Ok(Some(style))
}
