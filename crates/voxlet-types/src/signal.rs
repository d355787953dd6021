//! The loader signal: the script element that caused the bundle to run.
//!
//! A [`LoaderSignal`] is a read-only snapshot of a `<script>` element taken
//! from the host page. It carries the source URL and the element's dataset
//! (`data-*` attributes keyed the way `HTMLElement.dataset` keys them, so
//! `data-theme` is stored under `theme`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dataset key for the theme attribute (`data-theme`).
pub const THEME_KEY: &str = "theme";

/// Dataset key for the appearance attribute (`data-appearance`).
pub const APPEARANCE_KEY: &str = "appearance";

/// Snapshot of a script element on the host page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderSignal {
    /// Source URL as reported by the page. Absolute in browsers; may be
    /// relative or missing for inline scripts and synthetic pages.
    #[serde(default)]
    pub src: Option<String>,

    /// `data-*` attributes, keyed by dataset name.
    #[serde(default)]
    pub dataset: BTreeMap<String, String>,
}

impl LoaderSignal {
    /// A script with the given source and no data attributes.
    pub fn with_src(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            dataset: BTreeMap::new(),
        }
    }

    /// An inline script (no source).
    pub fn inline() -> Self {
        Self::default()
    }

    /// Builder-style dataset insertion.
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(key.into(), value.into());
        self
    }

    /// Record a raw attribute name such as `data-theme`. Attributes without
    /// the `data-` prefix are ignored. Dash-separated names are camel-cased
    /// (`data-widget-id` → `widgetId`).
    pub fn insert_attribute(&mut self, name: &str, value: impl Into<String>) {
        if let Some(key) = dataset_key(name) {
            self.dataset.insert(key, value.into());
        }
    }

    /// Look up a dataset entry.
    pub fn data(&self, key: &str) -> Option<&str> {
        self.dataset.get(key).map(String::as_str)
    }

    /// Raw `data-theme` value, if the attribute is present at all.
    pub fn theme_attribute(&self) -> Option<&str> {
        self.data(THEME_KEY)
    }

    /// Raw `data-appearance` value.
    pub fn appearance_attribute(&self) -> Option<&str> {
        self.data(APPEARANCE_KEY)
    }

    pub fn has_theme_attribute(&self) -> bool {
        self.dataset.contains_key(THEME_KEY)
    }

    /// Whether the source URL contains the bundle filename fragment.
    pub fn src_contains(&self, fragment: &str) -> bool {
        !fragment.is_empty() && self.src.as_deref().is_some_and(|src| src.contains(fragment))
    }
}

/// Convert a `data-foo-bar` attribute name into the `fooBar` dataset key.
fn dataset_key(attribute: &str) -> Option<String> {
    let rest = attribute
        .get(..5)
        .filter(|prefix| prefix.eq_ignore_ascii_case("data-"))
        .map(|_| &attribute[5..])?;
    if rest.is_empty() {
        return None;
    }

    let mut key = String::with_capacity(rest.len());
    let mut upper_next = false;
    for ch in rest.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            key.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            key.extend(ch.to_lowercase());
        }
    }
    Some(key)
}
