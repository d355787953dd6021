//! Style sheets injected into the isolated root.
//!
//! One shared base sheet ([`BASE_STYLESHEET`]) plus small generated blocks
//! that re-skin it per embed: the primary palette override and the `pure`
//! appearance override.

use std::fmt::Write as _;

use voxlet_types::Palette;

/// The widget's full base stylesheet.
pub const BASE_STYLESHEET: &str = include_str!("../assets/embed.css");

/// Surface and foreground tokens overridden by the `pure` appearance, scoped
/// to the light scheme.
pub const PURE_LIGHT_TOKENS: &[(&str, &str)] = &[
    ("--background", "#ffffff"),
    ("--foreground", "#0a0a0a"),
    ("--card", "#ffffff"),
    ("--card-foreground", "#0a0a0a"),
    ("--popover", "#ffffff"),
    ("--popover-foreground", "#0a0a0a"),
    ("--muted", "#f5f5f5"),
    ("--muted-foreground", "#525252"),
    ("--border", "#e5e5e5"),
    ("--input", "#e5e5e5"),
];

/// Palette override: light tokens on the host and `.light`, dark tokens on
/// `.dark`.
pub fn palette_override(palette: &Palette) -> String {
    let mut css = String::new();
    for (selector, accent) in [(":host, .light", &palette.accent_light), (".dark", &palette.accent_dark)] {
        let _ = writeln!(css, "{selector} {{");
        let _ = writeln!(css, "  --primary: {};", palette.primary);
        let _ = writeln!(css, "  --primary-hover: {};", palette.primary_hover);
        let _ = writeln!(css, "  --fgAccent: {};", palette.primary);
        let _ = writeln!(css, "  --bgAccentPrimary: {accent};");
        css.push_str("}\n");
    }
    css
}

/// `pure` appearance override. Only ever matches `.light`.
pub fn pure_appearance_override() -> String {
    let mut css = String::from(".light {\n");
    for (token, value) in PURE_LIGHT_TOKENS {
        let _ = writeln!(css, "  {token}: {value};");
    }
    css.push_str("}\n");
    css
}
