//! Widget stylesheet and the element ids/classes it styles.
//!
//! The `!important` declarations on the wrapper pin the widget's own
//! typography and colors, so the body-wide mutations the user picks never
//! alter the widget itself.

/// Root element appended to the document body.
pub const WRAPPER_ID: &str = "accessibility-wrapper";

/// Floating toggle button.
pub const TOGGLE_ID: &str = "accessibility-toggle";

/// The settings panel, hidden until toggled.
pub const PANEL_ID: &str = "accessibility-panel";

/// Link-emphasis on/off button.
pub const LINKS_BUTTON_ID: &str = "emphasize-links";

/// Reset-to-defaults button.
pub const RESET_BUTTON_ID: &str = "accessibility-reset";

/// Labeled control row inside the panel.
pub const CONTROL_CLASS: &str = "control";

/// One preset button inside a group.
pub const PRESET_CLASS: &str = "preset";

/// Marks the selected preset (and an enabled links button).
pub const ACTIVE_CLASS: &str = "active";

/// Toggle button icon image.
pub const LOGO_CLASS: &str = "logo";

/// Attribute carrying a preset button's settings value.
pub const VALUE_ATTR: &str = "data-value";

/// Attribute naming a preset group container.
pub const GROUP_ATTR: &str = "data-group";

/// The widget's stylesheet, injected once into the document head.
#[must_use]
pub fn stylesheet() -> &'static str {
    r#"
#accessibility-wrapper {
    position: fixed;
    bottom: 20px;
    right: 20px;
    z-index: 10000;
    font-family: Arial, sans-serif;
    font-size: 14px !important;
    font-weight: 400 !important;
    letter-spacing: normal !important;
    line-height: 1.4 !important;
    color: #212529 !important;
    background-color: transparent !important;
}
#accessibility-toggle {
    background-color: #fff;
    border: 1.5px solid black;
    border-radius: 80px;
    padding: 10px;
    cursor: pointer;
}
#accessibility-toggle .logo {
    height: 40px;
    display: block;
}
#accessibility-panel {
    background-color: #f8f9fa;
    border: 1px solid #dee2e6;
    border-radius: 5px;
    padding: 15px;
    width: 250px;
    position: absolute;
    bottom: 70px;
    right: 0;
    box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
}
#accessibility-panel h4 {
    margin: 0 0 15px;
}
#accessibility-panel .control {
    margin-bottom: 15px;
}
#accessibility-panel .control label {
    display: block;
    margin-bottom: 5px;
}
#accessibility-panel .preset {
    background-color: #e9ecef;
    border: 1px solid #ced4da;
    border-radius: 3px;
    padding: 5px 10px;
    margin: 0 5px 5px 0;
    cursor: pointer;
}
#accessibility-panel .preset.active {
    background-color: #28a745;
    border-color: #28a745;
    color: #fff;
}
#emphasize-links,
#accessibility-reset {
    background-color: #6c757d;
    color: #fff;
    border: none;
    border-radius: 3px;
    padding: 5px 10px;
    cursor: pointer;
}
#emphasize-links.active {
    background-color: #28a745;
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_styles_every_widget_id() {
        let css = stylesheet();
        for id in [WRAPPER_ID, TOGGLE_ID, PANEL_ID, LINKS_BUTTON_ID, RESET_BUTTON_ID] {
            assert!(css.contains(&format!("#{id}")), "missing #{id}");
        }
        for class in [CONTROL_CLASS, PRESET_CLASS, ACTIVE_CLASS, LOGO_CLASS] {
            assert!(css.contains(&format!(".{class}")), "missing .{class}");
        }
    }

    #[test]
    fn wrapper_exclusion_block_pins_typography_and_colors() {
        let css = stylesheet();
        for declaration in [
            "font-size: 14px !important",
            "font-weight: 400 !important",
            "letter-spacing: normal !important",
            "line-height: 1.4 !important",
            "color: #212529 !important",
            "background-color: transparent !important",
        ] {
            assert!(css.contains(declaration), "missing `{declaration}`");
        }
    }
}
