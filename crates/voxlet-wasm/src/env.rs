//! Build-time settings for the widget bundle.
//!
//! A browser has no process environment, so the `VOXLET_*` variables are
//! captured when the bundle is compiled and replayed through the regular
//! settings loader.

use voxlet_platform::env::MemoryEnvironment;
use voxlet_platform::settings_loader::{SETTINGS_JSON_VAR, load_settings};
use voxlet_types::EmbedSettings;

/// Environment holding every `VOXLET_*` variable set at compile time.
pub fn embedded_environment() -> MemoryEnvironment {
    MemoryEnvironment::new()
        .with_optional(SETTINGS_JSON_VAR, option_env!("VOXLET_SETTINGS"))
        .with_optional("VOXLET_BUNDLE_FRAGMENT", option_env!("VOXLET_BUNDLE_FRAGMENT"))
        .with_optional("VOXLET_FALLBACK_ORIGIN", option_env!("VOXLET_FALLBACK_ORIGIN"))
        .with_optional("VOXLET_APP_CONFIG_PATH", option_env!("VOXLET_APP_CONFIG_PATH"))
        .with_optional(
            "VOXLET_CONN_DETAILS_ENDPOINT",
            option_env!("VOXLET_CONN_DETAILS_ENDPOINT"),
        )
        .with_optional("VOXLET_MOUNT_GLOBAL", option_env!("VOXLET_MOUNT_GLOBAL"))
}

/// Settings baked into this bundle.
pub fn embedded_settings() -> EmbedSettings {
    load_settings(&embedded_environment())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlet_platform::settings_loader::OVERRIDES;

    #[test]
    fn every_override_is_captured() {
        // option_env! needs literals, so keep this list in step with the loader.
        let captured = [
            "VOXLET_BUNDLE_FRAGMENT",
            "VOXLET_FALLBACK_ORIGIN",
            "VOXLET_APP_CONFIG_PATH",
            "VOXLET_CONN_DETAILS_ENDPOINT",
            "VOXLET_MOUNT_GLOBAL",
        ];
        for (name, _) in OVERRIDES {
            assert!(captured.contains(name), "{name} is not captured at build time");
        }
    }

    #[test]
    fn embedded_settings_are_usable() {
        let settings = embedded_settings();
        assert!(settings.fallback_origin.starts_with("http"));
        assert!(!settings.mount_global.is_empty());
    }
}
