//! Embed settings discovery and loading.
//!
//! Settings are layered, later layers winning:
//! 1. Built-in defaults ([`EmbedSettings::default`]).
//! 2. `VOXLET_SETTINGS` -- a JSON object; keys may be camelCase or snake_case.
//! 3. Individual `VOXLET_*` variables (see [`OVERRIDES`]).
//!
//! Loading never fails. Malformed JSON and an unparsable fallback origin are
//! logged and ignored so the widget always gets a usable configuration.

use tracing::{debug, warn};
use url::Url;
use voxlet_types::EmbedSettings;
use voxlet_types::settings::DEFAULT_FALLBACK_ORIGIN;

use crate::env::Environment;

/// Variable holding a JSON settings object.
pub const SETTINGS_JSON_VAR: &str = "VOXLET_SETTINGS";

/// Single-field override variables, applied after the JSON blob.
pub const OVERRIDES: &[(&str, fn(&mut EmbedSettings, String))] = &[
    ("VOXLET_BUNDLE_FRAGMENT", |s, v| s.bundle_fragment = v),
    ("VOXLET_FALLBACK_ORIGIN", |s, v| s.fallback_origin = v),
    ("VOXLET_APP_CONFIG_PATH", |s, v| s.app_config_path = v),
    ("VOXLET_CONN_DETAILS_ENDPOINT", |s, v| {
        s.connection_details_endpoint = v
    }),
    ("VOXLET_MOUNT_GLOBAL", |s, v| s.mount_global = v),
];

/// Load settings from `env` using the layering described in the module docs.
pub fn load_settings(env: &dyn Environment) -> EmbedSettings {
    let mut settings = match env.get_var(SETTINGS_JSON_VAR) {
        Some(raw) => parse_settings_json(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring malformed {SETTINGS_JSON_VAR}");
            EmbedSettings::default()
        }),
        None => EmbedSettings::default(),
    };

    for (name, apply) in OVERRIDES {
        if let Some(value) = env.get_var(name).filter(|v| !v.is_empty()) {
            debug!(var = name, "applying settings override");
            apply(&mut settings, value);
        }
    }

    if !is_http_origin(&settings.fallback_origin) {
        warn!(
            origin = %settings.fallback_origin,
            "fallback origin is not an http(s) URL, using default"
        );
        settings.fallback_origin = DEFAULT_FALLBACK_ORIGIN.to_string();
    }

    settings
}

/// Parse a settings JSON object. Keys may be camelCase or snake_case.
pub fn parse_settings_json(raw: &str) -> Result<EmbedSettings, serde_json::Error> {
    serde_json::from_str(raw)
}

fn is_http_origin(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
}
