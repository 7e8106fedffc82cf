//! Mount-time failure taxonomy.
//!
//! None of these are ever thrown into the host page: the exported entry
//! point logs them and returns, leaving the page untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// The widget refuses to initialize inside a nested frame.
    #[error("refusing to mount inside a nested frame")]
    NestedFrame,
    #[error("no global window object")]
    NoWindow,
    #[error("document head or body not available")]
    NoDocument,
    /// The wrapper element already exists; mounting again would duplicate it.
    #[error("widget is already mounted")]
    AlreadyMounted,
    /// A DOM call failed; carries the stringified host error.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
