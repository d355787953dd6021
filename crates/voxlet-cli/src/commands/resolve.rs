//! `voxlet resolve` -- show how an embed would be configured.
//!
//! Runs every lookup of the bootstrap (loader, theme, appearance, origin,
//! endpoints) without touching the network.
//!
//! # Examples
//!
//! ```text
//! voxlet resolve --src "https://cdn.example.com/embed-popup.js?theme=dark"
//! voxlet resolve --attr data-appearance=pure --page-origin null --json
//! ```

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use serde_json::{Value, json};

use voxlet_core::appearance::resolve_appearance_mode;
use voxlet_core::loader::locate_loader_signal;
use voxlet_core::origin::{resolve_endpoint, resolve_origin};
use voxlet_core::theme::resolve_theme_preference;
use voxlet_platform::scripts::ScriptSource;
use voxlet_types::settings::{DEFAULT_APP_CONFIG_PATH, DEFAULT_CONNECTION_DETAILS_PATH};
use voxlet_types::{ColorScheme, EmbedSettings, ThemePreference};

use super::PageArgs;

/// Arguments for the `voxlet resolve` subcommand.
#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Print the resolution as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Resolve everything the bootstrap decides before its first request.
pub fn resolution(page: &dyn ScriptSource, dark: bool, settings: &EmbedSettings) -> Value {
    let loader = locate_loader_signal(page, &settings.bundle_fragment);
    let theme = resolve_theme_preference(loader.as_ref());
    let scheme = match theme.unwrap_or_default() {
        ThemePreference::Dark => ColorScheme::Dark,
        ThemePreference::Light => ColorScheme::Light,
        ThemePreference::System => ColorScheme::from_prefers_dark(dark),
    };
    let origin = resolve_origin(
        loader.as_ref(),
        page.page_origin().as_deref(),
        &settings.fallback_origin,
    );
    let endpoint = |path: &str, default: &str| {
        resolve_endpoint(path, &origin, &settings.fallback_origin, default)
    };

    json!({
        "loader": loader.as_ref().map(|l| l.src.clone().unwrap_or_else(|| "(inline)".into())),
        "theme": theme.map(ThemePreference::as_str),
        "scheme": scheme.class_name(),
        "appearance": resolve_appearance_mode(loader.as_ref()).as_str(),
        "origin": origin,
        "appConfigUrl": endpoint(&settings.app_config_path, DEFAULT_APP_CONFIG_PATH),
        "connectionDetailsUrl": endpoint(
            &settings.connection_details_endpoint,
            DEFAULT_CONNECTION_DETAILS_PATH,
        ),
    })
}

/// Run the resolve command.
pub fn run(args: ResolveArgs) -> anyhow::Result<()> {
    let settings = super::settings();
    let page = args.page.page();
    let resolved = resolution(&page, args.page.dark, &settings);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["SETTING", "VALUE"]);
    for (label, key) in [
        ("Loader script", "loader"),
        ("Theme preference", "theme"),
        ("Color scheme", "scheme"),
        ("Appearance", "appearance"),
        ("Origin", "origin"),
        ("App config URL", "appConfigUrl"),
        ("Connection details URL", "connectionDetailsUrl"),
    ] {
        let value = match &resolved[key] {
            Value::String(s) => s.clone(),
            Value::Null => "-".to_string(),
            other => other.to_string(),
        };
        table.add_row([label.to_string(), value]);
    }
    println!("{table}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlet_platform::memory::MemoryPage;
    use voxlet_types::LoaderSignal;

    #[test]
    fn explicit_theme_ignores_system() {
        let page = MemoryPage::new().with_current_script(LoaderSignal::with_src(
            "https://cdn.example.com/embed-popup.js?theme=light",
        ));
        let resolved = resolution(&page, true, &EmbedSettings::default());
        assert_eq!(resolved["theme"], "light");
        assert_eq!(resolved["scheme"], "light");
        assert_eq!(resolved["origin"], "https://cdn.example.com");
        assert_eq!(resolved["appConfigUrl"], "https://cdn.example.com/api/app-config");
    }

    #[test]
    fn no_loader_follows_system_and_page() {
        let resolved = resolution(&MemoryPage::new(), true, &EmbedSettings::default());
        assert_eq!(resolved["loader"], Value::Null);
        assert_eq!(resolved["theme"], Value::Null);
        assert_eq!(resolved["scheme"], "dark");
        assert_eq!(resolved["appearance"], "default");
        assert_eq!(
            resolved["connectionDetailsUrl"],
            "https://host.example/api/connection-details"
        );
    }

    #[test]
    fn inline_loader_is_labelled() {
        let page = MemoryPage::new()
            .with_current_script(LoaderSignal::inline().with_data("theme", "dark"));
        let resolved = resolution(&page, false, &EmbedSettings::default());
        assert_eq!(resolved["loader"], "(inline)");
        assert_eq!(resolved["scheme"], "dark");
    }
}
