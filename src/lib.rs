#![forbid(unsafe_code)]

//! Floating accessibility overlay for web pages.
//!
//! Injects a toggle button and a settings panel into the hosting document,
//! lets the user pick font size, font weight, and color theme presets,
//! emphasize hyperlinks, and persists the choices in per-origin storage.
//! Page-wide style mutations always exclude the widget's own subtree.
//!
//! The crate compiles on every target so the pure logic (settings
//! validation, theme palettes, page style, panel state) can be unit-tested
//! natively; only the DOM-facing modules require wasm.

pub mod controls;
pub mod css;
pub mod labels;
pub mod page_style;
pub mod panel_state;
pub mod settings;
pub mod theme;

mod error;
pub use error::WidgetError;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod store;
#[cfg(target_arch = "wasm32")]
mod telemetry;

#[cfg(target_arch = "wasm32")]
pub use dom::mount;
