//! Croatian user-facing strings, kept together as localization data.

use crate::settings::FontWeight;
use crate::theme::Theme;

/// Panel heading.
pub const PANEL_TITLE: &str = "Prilagodba pristupačnosti";

/// Accessible name of the floating toggle button.
pub const TOGGLE_LABEL: &str = "Pristupačnost";

/// Inline glyph shown on the toggle when its icon image fails to load.
pub const TOGGLE_FALLBACK_GLYPH: &str = "♿";

/// Font size group label.
pub const FONT_SIZE_LABEL: &str = "Veličina slova";

/// Font weight group label.
pub const FONT_WEIGHT_LABEL: &str = "Debljina slova";

/// Theme group label.
pub const THEME_LABEL: &str = "Tema";

/// Link emphasis control label.
pub const LINKS_LABEL: &str = "Naglašeni linkovi";

/// Reset button caption.
pub const RESET_LABEL: &str = "Vrati zadano";

/// Caption of the link-emphasis toggle button for the given state.
#[must_use]
pub fn links_state(enabled: bool) -> &'static str {
    if enabled {
        "Uključeno"
    } else {
        "Isključeno"
    }
}

/// Display name of a font weight preset.
#[must_use]
pub fn weight_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Light => "Tanka",
        FontWeight::Regular => "Normalna",
        FontWeight::Bold => "Podebljana",
    }
}

/// Display name of a theme preset.
#[must_use]
pub fn theme_name(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Svijetla",
        Theme::Dark => "Tamna",
        Theme::Sepia => "Sepija",
        Theme::Blue => "Plava",
        Theme::Green => "Zelena",
        Theme::HighContrast => "Visoki kontrast",
    }
}
