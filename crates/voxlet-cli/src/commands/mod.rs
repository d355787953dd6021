//! CLI command implementations for `voxlet`.
//!
//! Each subcommand is implemented in its own module:
//!
//! - [`resolve`] -- Offline resolution of theme, appearance and endpoints.
//! - [`bootstrap`] -- Full bootstrap against a headless page and a live backend.
//! - [`connection`] -- Fetch connection details.
//!
//! All three describe the embedding page with the same [`PageArgs`].

pub mod bootstrap;
pub mod connection;
pub mod resolve;

use clap::Args;

use voxlet_platform::env::NativeEnvironment;
use voxlet_platform::memory::MemoryPage;
use voxlet_platform::settings_loader::load_settings;
use voxlet_types::{EmbedSettings, LoaderSignal};

/// Description of the embedding page and its loader script.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// `src` of the loader script. Omit for an inline script.
    #[arg(long)]
    pub src: Option<String>,

    /// Loader script attribute, e.g. `--attr data-theme=dark`. Repeatable.
    #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_attribute)]
    pub attrs: Vec<(String, String)>,

    /// Only list the loader among the page scripts (no `currentScript`).
    #[arg(long)]
    pub deferred: bool,

    /// Origin of the embedding page. Use `null` for an opaque origin.
    #[arg(long, default_value = "https://host.example")]
    pub page_origin: String,

    /// Pretend the OS prefers a dark color scheme.
    #[arg(long)]
    pub dark: bool,

    /// Pretend the page has no loader script at all.
    #[arg(long, conflicts_with_all = ["src", "attrs"])]
    pub no_loader: bool,
}

impl PageArgs {
    /// The loader script these arguments describe, if any.
    pub fn loader(&self) -> Option<LoaderSignal> {
        if self.no_loader {
            return None;
        }
        let mut signal = match &self.src {
            Some(src) => LoaderSignal::with_src(src.as_str()),
            None => LoaderSignal::inline(),
        };
        for (name, value) in &self.attrs {
            signal.insert_attribute(name, value.as_str());
        }
        Some(signal)
    }

    /// A headless page matching these arguments.
    pub fn page(&self) -> MemoryPage {
        let page = MemoryPage::new()
            .with_page_origin(Some(self.page_origin.as_str()))
            .with_prefers_dark(Some(self.dark));
        match self.loader() {
            Some(loader) if self.deferred => page.with_script(loader),
            Some(loader) => page.with_current_script(loader),
            None => page,
        }
    }
}

/// Settings from the process environment (`VOXLET_SETTINGS`, `VOXLET_*`).
pub fn settings() -> EmbedSettings {
    load_settings(&NativeEnvironment)
}

/// Parse `NAME=VALUE`. A bare `NAME` is an empty attribute.
fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw.split_once('=').unwrap_or((raw, ""));
    let name = name.trim().to_ascii_lowercase();
    if !name.starts_with("data-") || name.len() == "data-".len() {
        return Err(format!("expected a data-* attribute, got '{raw}'"));
    }
    Ok((name, value.to_string()))
}
