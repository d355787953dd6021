//! Theme and appearance vocabulary.
//!
//! [`ThemePreference`] is what the embedder asked for, [`ColorScheme`] is the
//! class actually applied to the theme root, and [`AppearanceMode`] is the
//! secondary chrome toggle that is independent of color scheme.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requested color-scheme intent. Unspecified means [`ThemePreference::System`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    /// Follow the operating system preference, live.
    #[default]
    System,
}

impl ThemePreference {
    /// Parse a preference, ignoring ASCII case.
    ///
    /// Anything other than `dark`, `light` or `system` yields `None`. The
    /// value is not trimmed: `" dark"` is not a preference.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("dark") {
            Some(Self::Dark)
        } else if raw.eq_ignore_ascii_case("light") {
            Some(Self::Light)
        } else if raw.eq_ignore_ascii_case("system") {
            Some(Self::System)
        } else {
            None
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete scheme applied to the theme root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Dark,
    Light,
}

impl ColorScheme {
    /// Both theme classes, in the order they are reset.
    pub const ALL: [ColorScheme; 2] = [ColorScheme::Dark, ColorScheme::Light];

    /// Map a "prefers dark" signal onto a scheme.
    pub fn from_prefers_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    /// CSS class name on the theme root.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Value for the `color-scheme` style property.
    pub fn style_hint(self) -> &'static str {
        self.class_name()
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Chrome style of the widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    #[default]
    Default,
    /// Flatter, higher-contrast surfaces in the light scheme.
    Pure,
}

impl AppearanceMode {
    /// Parse an appearance attribute. Only `pure` (any ASCII case) selects
    /// [`AppearanceMode::Pure`]; everything else, including absence, is
    /// [`AppearanceMode::Default`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("pure") => Self::Pure,
            _ => Self::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pure => "pure",
        }
    }
}

impl fmt::Display for AppearanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
