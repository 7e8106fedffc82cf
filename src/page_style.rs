//! Page-wide style state computed from a settings record.
//!
//! All document style the widget ever writes is derived here, so the
//! DOM applicator stays a thin loop and the widget-subtree exclusion is
//! enforceable in a single place.

use crate::settings::Settings;

/// Declarations applied to emphasized hyperlinks outside the widget.
pub const LINK_EMPHASIS: &[(&str, &str)] =
    &[("font-weight", "bold"), ("text-decoration", "underline")];

/// The body declarations for one settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStyle {
    pub font_size: &'static str,
    pub font_weight: &'static str,
    pub background_color: &'static str,
    pub color: &'static str,
}

impl PageStyle {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let palette = settings.theme.palette();
        Self {
            font_size: settings.font_size.css_px(),
            font_weight: settings.font_weight.as_key(),
            background_color: palette.background,
            color: palette.foreground,
        }
    }

    /// Body property/value pairs in application order.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, &'static str); 4] {
        [
            ("font-size", self.font_size),
            ("font-weight", self.font_weight),
            ("background-color", self.background_color),
            ("color", self.color),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{FontSize, FontWeight};
    use crate::theme::Theme;

    #[test]
    fn default_settings_produce_documented_body_style() {
        let style = PageStyle::from_settings(&Settings::default());
        assert_eq!(style.font_size, "16px");
        assert_eq!(style.font_weight, "400");
        assert_eq!(style.background_color, "#ffffff");
        assert_eq!(style.color, "#1a1a1a");
    }

    #[test]
    fn declarations_cover_the_four_body_properties() {
        let style = PageStyle::from_settings(&Settings::default());
        let properties: Vec<&str> = style.declarations().iter().map(|(p, _)| *p).collect();
        assert_eq!(
            properties,
            ["font-size", "font-weight", "background-color", "color"]
        );
    }

    #[test]
    fn high_contrast_theme_flows_into_both_color_declarations() {
        let settings = Settings {
            theme: Theme::HighContrast,
            ..Settings::default()
        };
        let style = PageStyle::from_settings(&settings);
        assert_eq!(style.background_color, "#000000");
        assert_eq!(style.color, "#ffff00");
    }

    #[test]
    fn font_presets_map_to_css_values() {
        let settings = Settings {
            font_size: FontSize::Px20,
            font_weight: FontWeight::Bold,
            ..Settings::default()
        };
        let style = PageStyle::from_settings(&settings);
        assert_eq!(style.font_size, "20px");
        assert_eq!(style.font_weight, "600");
    }

    #[test]
    fn link_emphasis_is_bold_plus_underline() {
        assert_eq!(
            LINK_EMPHASIS,
            [("font-weight", "bold"), ("text-decoration", "underline")]
        );
    }
}
