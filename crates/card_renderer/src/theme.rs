//! Card themes and their color palettes.

use std::fmt;

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;

/// Named color scheme for a stat card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Gradient,
    Transparent,
}

/// Colors used by one theme.
///
/// Values are inserted into the SVG as-is, so each is any valid SVG paint:
/// a hex color, an `rgba(...)` value, `none`, `currentColor` or a `url(#id)` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub border: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub value: &'static str,
}

impl Theme {
    /// Every theme, in display order.
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Dark, Theme::Gradient, Theme::Transparent];

    /// Resolves a theme name, falling back to [`Theme::Dark`] for anything unknown.
    ///
    /// Matching is exact: `"Light"` is not `"light"`.
    pub fn resolve(name: &str) -> Theme {
        match name {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            "gradient" => Theme::Gradient,
            "transparent" => Theme::Transparent,
            _ => Theme::Dark,
        }
    }

    /// The name this theme is selected by.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Gradient => "gradient",
            Theme::Transparent => "transparent",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#ffffff",
                border: "#e1e4e8",
                title: "#24292e",
                text: "#586069",
                value: "#24292e",
            },
            Theme::Dark => Palette {
                background: "#0d1117",
                border: "#30363d",
                title: "#c9d1d9",
                text: "#8b949e",
                value: "#c9d1d9",
            },
            Theme::Gradient => Palette {
                background: "url(#gradient)",
                border: "rgba(255, 255, 255, 0.2)",
                title: "#ffffff",
                text: "rgba(255, 255, 255, 0.8)",
                value: "#ffffff",
            },
            Theme::Transparent => Palette {
                background: "none",
                border: "rgba(255, 255, 255, 0.2)",
                title: "currentColor",
                text: "currentColor",
                value: "currentColor",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Palette for a theme name; unknown names get the dark palette.
pub fn palette_for(name: &str) -> Palette {
    Theme::resolve(name).palette()
}
