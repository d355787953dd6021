//! Loader script discovery.
//!
//! The bundle learns its configuration (theme, appearance, origin) from the
//! `<script>` element that loaded it. Finding that element is a prioritized
//! search whose order is the [`LOADER_SEARCH_ORDER`] constant, so the
//! precedence is data rather than control flow.

use tracing::debug;
use voxlet_platform::scripts::ScriptSource;
use voxlet_types::LoaderSignal;

/// One step of the loader search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderStrategy {
    /// `document.currentScript`, if it looks like our loader (its source
    /// contains the bundle fragment, or it carries `data-theme`).
    CurrentScript,
    /// First script whose source contains the bundle fragment.
    BundleSource,
    /// First script carrying a `data-theme` attribute at all.
    ThemeAttribute,
}

/// Search order; the first strategy that yields a script wins.
pub const LOADER_SEARCH_ORDER: [LoaderStrategy; 3] = [
    LoaderStrategy::CurrentScript,
    LoaderStrategy::BundleSource,
    LoaderStrategy::ThemeAttribute,
];

impl LoaderStrategy {
    fn find(self, scripts: &dyn ScriptSource, fragment: &str) -> Option<LoaderSignal> {
        let looks_like_loader =
            |s: &LoaderSignal| s.src_contains(fragment) || s.has_theme_attribute();
        match self {
            Self::CurrentScript => scripts.current_script().filter(looks_like_loader),
            Self::BundleSource => scripts.scripts().into_iter().find(|s| s.src_contains(fragment)),
            Self::ThemeAttribute => scripts
                .scripts()
                .into_iter()
                .find(LoaderSignal::has_theme_attribute),
        }
    }
}

/// Locate the script element that loaded the bundle.
///
/// Returns `None` when no strategy matches, including on pages with no
/// scripts and when the current script is unavailable.
pub fn locate_loader_signal(scripts: &dyn ScriptSource, fragment: &str) -> Option<LoaderSignal> {
    LOADER_SEARCH_ORDER.iter().find_map(|strategy| {
        let found = strategy.find(scripts, fragment)?;
        debug!(?strategy, src = ?found.src, "loader script located");
        Some(found)
    })
}
