//! Settings persistence over per-origin `localStorage`.
//!
//! Storage failures (disabled storage, quota, corrupt payloads) degrade to
//! defaults or a skipped write; they are logged and never surface to the
//! host page.

use web_sys::{Storage, Window};

use crate::settings::Settings;

/// The single storage key holding the serialized settings record.
pub(crate) const STORAGE_KEY: &str = "accessibilitySettings";

pub(crate) struct SettingsStore {
    storage: Option<Storage>,
}

impl SettingsStore {
    /// Storage may be unavailable entirely (disabled, sandboxed); the widget
    /// then runs with in-memory settings that do not persist.
    pub(crate) fn new(window: &Window) -> Self {
        let storage = window.local_storage().unwrap_or_else(|err| {
            tracing::warn!("local storage unavailable: {err:?}");
            None
        });
        if storage.is_none() {
            tracing::debug!("settings will not persist for this page");
        }
        Self { storage }
    }

    /// Read the saved record; anything unreadable recovers to defaults
    /// (per field, via the validating parser).
    pub(crate) fn load(&self) -> Settings {
        let Some(storage) = &self.storage else {
            return Settings::default();
        };
        match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => Settings::from_json(&raw),
            Ok(None) => Settings::default(),
            Err(err) => {
                tracing::warn!("failed to read stored settings: {err:?}");
                Settings::default()
            }
        }
    }

    /// Persist the record; a failed write (quota exceeded) is logged and
    /// dropped.
    pub(crate) fn save(&self, settings: &Settings) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.set_item(STORAGE_KEY, &settings.to_json()) {
            tracing::warn!("failed to persist settings: {err:?}");
        }
    }
}
