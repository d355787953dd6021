//! Theme preference resolution and application.
//!
//! Resolution is pure: the same loader signal always yields the same
//! preference. Application resets both theme classes first, so re-applying
//! is idempotent, and for [`ThemePreference::System`] keeps the theme root
//! in sync with the OS for the rest of the page's life.

use tracing::debug;
use url::Url;
use voxlet_platform::color_scheme::ColorSchemeSource;
use voxlet_platform::dom::Dom;
use voxlet_types::{ColorScheme, DomError, LoaderSignal, ThemePreference};

/// Query parameter consulted when the loader has no usable `data-theme`.
pub const THEME_QUERY_PARAM: &str = "theme";

/// Style property carrying the scheme hint for native controls.
const COLOR_SCHEME_PROPERTY: &str = "color-scheme";

/// Resolve the requested theme from the loader script.
///
/// Precedence: `data-theme` → `?theme=` on the script URL → `None` (the
/// caller treats that as [`ThemePreference::System`]). Values are matched
/// case-insensitively; unrecognized values fall through to the next step.
pub fn resolve_theme_preference(loader: Option<&LoaderSignal>) -> Option<ThemePreference> {
    let loader = loader?;
    loader
        .theme_attribute()
        .and_then(ThemePreference::parse)
        .or_else(|| query_theme(loader.src.as_deref()?))
}

fn query_theme(src: &str) -> Option<ThemePreference> {
    // Relative sources only matter for their query string; any base works.
    let base = Url::parse("http://localhost/").ok()?;
    let url = Url::options().base_url(Some(&base)).parse(src).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == THEME_QUERY_PARAM)
        .and_then(|(_, value)| ThemePreference::parse(&value))
}

/// What [`apply_theme_preference`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedTheme {
    /// Scheme applied right now.
    pub scheme: ColorScheme,
    /// Whether a system change listener was registered.
    pub tracking: bool,
}

/// Set exactly one theme class and the matching `color-scheme` hint.
pub fn set_color_scheme<D: Dom>(
    dom: &D,
    theme_root: &D::Node,
    scheme: ColorScheme,
) -> Result<(), DomError> {
    for class in ColorScheme::ALL {
        dom.remove_class(theme_root, class.class_name())?;
    }
    dom.add_class(theme_root, scheme.class_name())?;
    dom.set_style(theme_root, COLOR_SCHEME_PROPERTY, scheme.style_hint())
}

/// Apply `pref` to `theme_root`.
///
/// - `Dark` / `Light`: set once, no listener.
/// - `System`: set from the current system value (light when unknown) and,
///   if the runtime supports it, register a listener that re-applies on
///   every change. The listener is never removed.
pub fn apply_theme_preference<D: Dom>(
    dom: &D,
    color_scheme: &dyn ColorSchemeSource,
    pref: ThemePreference,
    theme_root: &D::Node,
) -> Result<AppliedTheme, DomError> {
    let scheme = match pref {
        ThemePreference::Dark => ColorScheme::Dark,
        ThemePreference::Light => ColorScheme::Light,
        ThemePreference::System => {
            ColorScheme::from_prefers_dark(color_scheme.prefers_dark().unwrap_or(false))
        }
    };
    set_color_scheme(dom, theme_root, scheme)?;

    let tracking = pref == ThemePreference::System
        && color_scheme.supports_live_tracking()
        && {
            let dom = dom.clone();
            let node = theme_root.clone();
            color_scheme.on_change(Box::new(move |dark| {
                let next = ColorScheme::from_prefers_dark(dark);
                if let Err(e) = set_color_scheme(&dom, &node, next) {
                    tracing::warn!(error = %e, "failed to follow system color scheme");
                }
            }))
        };

    debug!(%pref, %scheme, tracking, "theme applied");
    Ok(AppliedTheme { scheme, tracking })
}
