//! Pure descriptions of the panel's preset controls.
//!
//! The DOM layer renders these; keeping the descriptions pure makes the
//! "exactly one active button per group" rule testable without a browser.

use crate::labels;
use crate::settings::{FontSize, FontWeight, Settings};
use crate::theme::Theme;

/// Dataset key of the font size group.
pub const GROUP_FONT_SIZE: &str = "font-size";

/// Dataset key of the font weight group.
pub const GROUP_FONT_WEIGHT: &str = "font-weight";

/// Dataset key of the theme group.
pub const GROUP_THEME: &str = "theme";

/// One selectable value inside a preset group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetOption {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// One labeled group of mutually exclusive preset buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSpec {
    pub group: &'static str,
    pub label: &'static str,
    pub options: Vec<PresetOption>,
}

/// The three preset groups in panel order, with active flags matching the
/// given record.
#[must_use]
pub fn control_specs(settings: &Settings) -> Vec<ControlSpec> {
    vec![
        ControlSpec {
            group: GROUP_FONT_SIZE,
            label: labels::FONT_SIZE_LABEL,
            options: FontSize::available()
                .iter()
                .map(|size| PresetOption {
                    value: size.as_key(),
                    label: size.as_key(),
                    active: *size == settings.font_size,
                })
                .collect(),
        },
        ControlSpec {
            group: GROUP_FONT_WEIGHT,
            label: labels::FONT_WEIGHT_LABEL,
            options: FontWeight::available()
                .iter()
                .map(|weight| PresetOption {
                    value: weight.as_key(),
                    label: labels::weight_name(*weight),
                    active: *weight == settings.font_weight,
                })
                .collect(),
        },
        ControlSpec {
            group: GROUP_THEME,
            label: labels::THEME_LABEL,
            options: Theme::available()
                .iter()
                .map(|theme| PresetOption {
                    value: theme.as_key(),
                    label: labels::theme_name(*theme),
                    active: *theme == settings.theme,
                })
                .collect(),
        },
    ]
}

/// The value that should be marked active in the given group.
#[must_use]
pub fn active_value(settings: &Settings, group: &str) -> Option<&'static str> {
    match group {
        GROUP_FONT_SIZE => Some(settings.font_size.as_key()),
        GROUP_FONT_WEIGHT => Some(settings.font_weight.as_key()),
        GROUP_THEME => Some(settings.theme.as_key()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_records() -> impl Iterator<Item = Settings> {
        FontSize::available().iter().flat_map(|&font_size| {
            FontWeight::available().iter().flat_map(move |&font_weight| {
                Theme::available().iter().map(move |&theme| Settings {
                    font_size,
                    font_weight,
                    theme,
                    emphasize_links: false,
                })
            })
        })
    }

    #[test]
    fn exactly_one_option_is_active_per_group_for_every_record() {
        for settings in all_records() {
            for spec in control_specs(&settings) {
                let active: Vec<&PresetOption> =
                    spec.options.iter().filter(|option| option.active).collect();
                assert_eq!(active.len(), 1, "group {} in {settings:?}", spec.group);
                assert_eq!(
                    Some(active[0].value),
                    active_value(&settings, spec.group),
                    "group {}",
                    spec.group
                );
            }
        }
    }

    #[test]
    fn groups_appear_in_panel_order() {
        let groups: Vec<&str> = control_specs(&Settings::default())
            .iter()
            .map(|spec| spec.group)
            .collect();
        assert_eq!(groups, [GROUP_FONT_SIZE, GROUP_FONT_WEIGHT, GROUP_THEME]);
    }

    #[test]
    fn default_record_activates_the_documented_defaults() {
        let specs = control_specs(&Settings::default());
        let active: Vec<&str> = specs
            .iter()
            .flat_map(|spec| spec.options.iter())
            .filter(|option| option.active)
            .map(|option| option.value)
            .collect();
        assert_eq!(active, ["16", "400", "light"]);
    }

    #[test]
    fn active_value_ignores_unknown_groups() {
        assert_eq!(active_value(&Settings::default(), "letter-spacing"), None);
    }
}
