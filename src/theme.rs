//! Named document-wide color themes.
//!
//! Each theme is an explicit background/foreground pair applied to the page
//! body. Unknown keys coerce to [`Theme::Light`] so stale persisted values
//! (including raw color names from very old installs) can never crash the
//! widget.

use serde::Serialize;

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Plain white page, near-black text.
    #[default]
    Light,
    /// Dark gray page, off-white text.
    Dark,
    /// Warm paper tint for reduced glare.
    Sepia,
    /// Cool blue tint.
    Blue,
    /// Soft green tint.
    Green,
    /// Black page with yellow text for maximum contrast.
    HighContrast,
}

/// Explicit color pair for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl Theme {
    /// Parse a theme key from persisted or external input.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "sepia" => Some(Self::Sepia),
            "blue" => Some(Self::Blue),
            "green" => Some(Self::Green),
            "high-contrast" | "highcontrast" => Some(Self::HighContrast),
            _ => None,
        }
    }

    /// Stable key used in storage and in preset button datasets.
    #[must_use]
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Sepia => "sepia",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::HighContrast => "high-contrast",
        }
    }

    /// Get the color palette for this theme.
    #[must_use]
    pub fn palette(&self) -> ThemePalette {
        match self {
            Self::Light => ThemePalette {
                background: "#ffffff",
                foreground: "#1a1a1a",
            },
            Self::Dark => ThemePalette {
                background: "#1e1e1e",
                foreground: "#f1f1f1",
            },
            Self::Sepia => ThemePalette {
                background: "#f4ecd8",
                foreground: "#5b4636",
            },
            Self::Blue => ThemePalette {
                background: "#e3f2fd",
                foreground: "#0d3b66",
            },
            Self::Green => ThemePalette {
                background: "#e8f5e9",
                foreground: "#1b4332",
            },
            Self::HighContrast => ThemePalette {
                background: "#000000",
                foreground: "#ffff00",
            },
        }
    }

    /// List all available themes in panel order.
    #[must_use]
    pub fn available() -> &'static [Theme] {
        &[
            Self::Light,
            Self::Dark,
            Self::Sepia,
            Self::Blue,
            Self::Green,
            Self::HighContrast,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_parses_every_available_theme() {
        for theme in Theme::available() {
            assert_eq!(Theme::from_key(theme.as_key()), Some(*theme));
        }
    }

    #[test]
    fn from_key_is_case_insensitive() {
        assert_eq!(Theme::from_key("SEPIA"), Some(Theme::Sepia));
        assert_eq!(Theme::from_key("High-Contrast"), Some(Theme::HighContrast));
    }

    #[test]
    fn from_key_rejects_unknown_and_legacy_color_names() {
        // Raw color names were valid in the oldest storage schema; they are
        // coerced to the default, not migrated.
        for key in ["white", "black", "yellow", "", "neon", "ligth"] {
            assert_eq!(Theme::from_key(key), None);
        }
    }

    #[test]
    fn every_palette_has_distinct_background_and_foreground() {
        for theme in Theme::available() {
            let palette = theme.palette();
            assert_ne!(palette.background, palette.foreground);
            assert!(palette.background.starts_with('#'));
            assert!(palette.foreground.starts_with('#'));
        }
    }

    #[test]
    fn serializes_as_its_key() {
        for theme in Theme::available() {
            let json = serde_json::to_string(theme).expect("serialize theme");
            assert_eq!(json, format!("\"{}\"", theme.as_key()));
        }
    }
}
