//! User preference record and its validating parser.
//!
//! Storage is untrusted input: the record is only ever constructed through
//! [`Settings::from_json`], which maps arbitrary payloads to a guaranteed
//! valid record. A field that is absent, wrong-typed, or outside its allowed
//! enumeration falls back to that field's default only; the rest of the
//! record is kept.

use serde::Serialize;
use serde_json::Value;

use crate::theme::Theme;

/// Allowed body font sizes, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FontSize {
    #[serde(rename = "14")]
    Px14,
    #[default]
    #[serde(rename = "16")]
    Px16,
    #[serde(rename = "18")]
    Px18,
    #[serde(rename = "20")]
    Px20,
}

impl FontSize {
    /// Parse a persisted font size key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "14" => Some(Self::Px14),
            "16" => Some(Self::Px16),
            "18" => Some(Self::Px18),
            "20" => Some(Self::Px20),
            _ => None,
        }
    }

    /// Stable key used in storage and in preset button datasets.
    #[must_use]
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Px14 => "14",
            Self::Px16 => "16",
            Self::Px18 => "18",
            Self::Px20 => "20",
        }
    }

    /// CSS length for the body `font-size` declaration.
    #[must_use]
    pub fn css_px(&self) -> &'static str {
        match self {
            Self::Px14 => "14px",
            Self::Px16 => "16px",
            Self::Px18 => "18px",
            Self::Px20 => "20px",
        }
    }

    /// All sizes in panel order.
    #[must_use]
    pub fn available() -> &'static [FontSize] {
        &[Self::Px14, Self::Px16, Self::Px18, Self::Px20]
    }
}

/// Allowed body font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FontWeight {
    #[serde(rename = "300")]
    Light,
    #[default]
    #[serde(rename = "400")]
    Regular,
    #[serde(rename = "600")]
    Bold,
}

impl FontWeight {
    /// Parse a persisted font weight key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "300" => Some(Self::Light),
            "400" => Some(Self::Regular),
            "600" => Some(Self::Bold),
            _ => None,
        }
    }

    /// Stable key; also the CSS `font-weight` value.
    #[must_use]
    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Light => "300",
            Self::Regular => "400",
            Self::Bold => "600",
        }
    }

    /// All weights in panel order.
    #[must_use]
    pub fn available() -> &'static [FontWeight] {
        &[Self::Light, Self::Regular, Self::Bold]
    }
}

/// The current user's accessibility preferences for this origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    pub theme: Theme,
    pub emphasize_links: bool,
}

impl Settings {
    /// Build a guaranteed-valid record from an untrusted JSON payload.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            tracing::debug!("stored settings are not valid JSON; using defaults");
            return Self::default();
        };
        Self::from_value(&value)
    }

    /// Per-field recovery: each invalid field falls back to its own default.
    fn from_value(value: &Value) -> Self {
        let key = |name: &str| value.get(name).and_then(Value::as_str);
        Self {
            font_size: key("fontSize")
                .and_then(FontSize::from_key)
                .unwrap_or_default(),
            font_weight: key("fontWeight")
                .and_then(FontWeight::from_key)
                .unwrap_or_default(),
            theme: key("theme").and_then(Theme::from_key).unwrap_or_default(),
            emphasize_links: value
                .get("emphasizeLinks")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        }
    }

    /// Serialize for storage. The record is plain data; serialization cannot
    /// realistically fail, and a failure degrades to an empty object that
    /// loads back as defaults.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.font_size, FontSize::Px16);
        assert_eq!(settings.font_weight, FontWeight::Regular);
        assert_eq!(settings.theme, Theme::Light);
        assert!(!settings.emphasize_links);
    }

    #[test]
    fn valid_payload_parses_every_field() {
        let settings = Settings::from_json(
            r#"{"fontSize":"20","fontWeight":"600","theme":"dark","emphasizeLinks":true}"#,
        );
        assert_eq!(
            settings,
            Settings {
                font_size: FontSize::Px20,
                font_weight: FontWeight::Bold,
                theme: Theme::Dark,
                emphasize_links: true,
            }
        );
    }

    #[test]
    fn round_trip_preserves_the_record() {
        for &font_size in FontSize::available() {
            for &font_weight in FontWeight::available() {
                for &theme in Theme::available() {
                    for emphasize_links in [false, true] {
                        let settings = Settings {
                            font_size,
                            font_weight,
                            theme,
                            emphasize_links,
                        };
                        assert_eq!(Settings::from_json(&settings.to_json()), settings);
                    }
                }
            }
        }
    }

    #[test]
    fn serialized_keys_match_the_storage_schema() {
        let json = Settings::default().to_json();
        for key in ["fontSize", "fontWeight", "theme", "emphasizeLinks"] {
            assert!(json.contains(&format!("\"{key}\"")), "missing {key} in {json}");
        }
    }

    #[rstest]
    #[case::not_json("][")]
    #[case::not_an_object("[1,2,3]")]
    #[case::scalar("42")]
    #[case::null("null")]
    #[case::empty_object("{}")]
    fn unusable_payload_yields_defaults(#[case] raw: &str) {
        assert_eq!(Settings::from_json(raw), Settings::default());
    }

    #[rstest]
    #[case::out_of_enum_size(r#"{"fontSize":"13"}"#)]
    #[case::numeric_instead_of_string(r#"{"fontSize":16}"#)]
    #[case::wrong_type(r#"{"fontSize":{"px":16}}"#)]
    fn invalid_font_size_falls_back_alone(#[case] raw: &str) {
        assert_eq!(Settings::from_json(raw).font_size, FontSize::Px16);
    }

    #[test]
    fn one_bad_field_does_not_reset_the_others() {
        let settings = Settings::from_json(
            r#"{"fontSize":"99","fontWeight":"600","theme":"sepia","emphasizeLinks":true}"#,
        );
        assert_eq!(settings.font_size, FontSize::Px16);
        assert_eq!(settings.font_weight, FontWeight::Bold);
        assert_eq!(settings.theme, Theme::Sepia);
        assert!(settings.emphasize_links);
    }

    #[test]
    fn legacy_background_color_schema_is_coerced_to_default_theme() {
        // The oldest storage schema stored raw color names.
        let settings = Settings::from_json(r#"{"theme":"yellow","emphasizeLinks":false}"#);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn non_bool_emphasize_links_falls_back_to_off() {
        let settings = Settings::from_json(r#"{"emphasizeLinks":"true"}"#);
        assert!(!settings.emphasize_links);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Arbitrary payloads never panic and always round-trip into the
            /// same valid record.
            #[test]
            fn arbitrary_payload_recovers_to_a_valid_record(raw in ".*") {
                let settings = Settings::from_json(&raw);
                prop_assert_eq!(Settings::from_json(&settings.to_json()), settings);
            }

            /// Arbitrary JSON objects recover per-field, never wholesale.
            #[test]
            fn arbitrary_object_fields_recover_independently(
                size in "[0-9]{1,3}",
                weight in "[a-z0-9]{0,4}",
            ) {
                let raw = format!(r#"{{"fontSize":"{size}","fontWeight":"{weight}"}}"#);
                let settings = Settings::from_json(&raw);
                let expected_size = FontSize::from_key(&size).unwrap_or_default();
                let expected_weight = FontWeight::from_key(&weight).unwrap_or_default();
                prop_assert_eq!(settings.font_size, expected_size);
                prop_assert_eq!(settings.font_weight, expected_weight);
            }
        }
    }
}
