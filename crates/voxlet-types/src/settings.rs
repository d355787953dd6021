//! Embed settings.
//!
//! Build/deploy-time knobs for the widget. Every field has a default so an
//! empty JSON object (or no configuration at all) yields a working embed.
//! Fields accept both `snake_case` and `camelCase` names in JSON.

use serde::{Deserialize, Serialize};

/// Default bundle filename fragment used to recognize the loader script.
pub const DEFAULT_BUNDLE_FRAGMENT: &str = "embed-popup.js";

/// Origin used when neither the loader script nor the host page yields one.
pub const DEFAULT_FALLBACK_ORIGIN: &str = "https://widget.voxlet.dev";

/// Path of the remote app config, relative to the resolved origin.
pub const DEFAULT_APP_CONFIG_PATH: &str = "/api/app-config";

/// Path of the connection-details endpoint, relative to the resolved origin.
pub const DEFAULT_CONNECTION_DETAILS_PATH: &str = "/api/connection-details";

/// Maximum stacking order for the host element.
pub const HOST_Z_INDEX: &str = "2147483647";

/// Root settings for one embed build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedSettings {
    /// Substring of the loader script's source URL that identifies it.
    #[serde(default = "default_bundle_fragment", alias = "bundleFragment")]
    pub bundle_fragment: String,

    /// Last-resort origin for config and connection requests.
    #[serde(default = "default_fallback_origin", alias = "fallbackOrigin")]
    pub fallback_origin: String,

    /// Remote app config endpoint; relative paths resolve against the
    /// resolved origin, absolute `http(s)` URLs are used as-is.
    #[serde(default = "default_app_config_path", alias = "appConfigPath")]
    pub app_config_path: String,

    /// Connection-details endpoint, resolved the same way.
    #[serde(
        default = "default_connection_details_endpoint",
        alias = "connectionDetailsEndpoint"
    )]
    pub connection_details_endpoint: String,

    /// `id` of the host element appended to the page body.
    #[serde(default = "default_host_element_id", alias = "hostElementId")]
    pub host_element_id: String,

    /// `id` of the portal element inside the isolated root.
    #[serde(default = "default_portal_element_id", alias = "portalElementId")]
    pub portal_element_id: String,

    /// Name of the page-global function that mounts the UI.
    #[serde(default = "default_mount_global", alias = "mountGlobal")]
    pub mount_global: String,

    /// Primary palette overrides injected next to the base stylesheet.
    #[serde(default)]
    pub palette: Palette,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            bundle_fragment: default_bundle_fragment(),
            fallback_origin: default_fallback_origin(),
            app_config_path: default_app_config_path(),
            connection_details_endpoint: default_connection_details_endpoint(),
            host_element_id: default_host_element_id(),
            portal_element_id: default_portal_element_id(),
            mount_global: default_mount_global(),
            palette: Palette::default(),
        }
    }
}

fn default_bundle_fragment() -> String {
    DEFAULT_BUNDLE_FRAGMENT.into()
}
fn default_fallback_origin() -> String {
    DEFAULT_FALLBACK_ORIGIN.into()
}
fn default_app_config_path() -> String {
    DEFAULT_APP_CONFIG_PATH.into()
}
fn default_connection_details_endpoint() -> String {
    DEFAULT_CONNECTION_DETAILS_PATH.into()
}
fn default_host_element_id() -> String {
    "voxlet-embed-wrapper".into()
}
fn default_portal_element_id() -> String {
    "voxlet-embed-portal".into()
}
fn default_mount_global() -> String {
    "VoxletEmbed".into()
}

/// Primary color tokens re-skinned per embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_primary")]
    pub primary: String,

    #[serde(default = "default_primary_hover", alias = "primaryHover")]
    pub primary_hover: String,

    /// Accent background in the light scheme.
    #[serde(default = "default_accent_light", alias = "accentLight")]
    pub accent_light: String,

    /// Accent background in the dark scheme.
    #[serde(default = "default_accent_dark", alias = "accentDark")]
    pub accent_dark: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            primary_hover: default_primary_hover(),
            accent_light: default_accent_light(),
            accent_dark: default_accent_dark(),
        }
    }
}

fn default_primary() -> String {
    "#facc15".into()
}
fn default_primary_hover() -> String {
    "#eab308".into()
}
fn default_accent_light() -> String {
    "color-mix(in oklab, #facc15 20%, white 80%)".into()
}
fn default_accent_dark() -> String {
    "color-mix(in oklab, #facc15 25%, black 75%)".into()
}
