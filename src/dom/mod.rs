//! Widget assembly: mount guards, injection, startup apply, event wiring.

mod apply;
mod events;
mod panel;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::controls;
use crate::css;
use crate::error::WidgetError;
use crate::labels;
use crate::panel_state::PanelState;
use crate::settings::{FontSize, FontWeight, Settings};
use crate::store::SettingsStore;
use crate::telemetry;
use crate::theme::Theme;

/// Mount automatically when the wasm module loads, waiting for the document
/// to finish parsing if the module was loaded early.
#[wasm_bindgen(start)]
fn start() {
    telemetry::init_tracing();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        tracing::warn!("mount aborted: {}", WidgetError::NoDocument);
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(mount);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .is_ok()
        {
            on_ready.forget();
        }
    } else {
        mount();
    }
}

/// Inject the widget into the hosting document.
///
/// Never throws into the host page: every failure is logged and leaves the
/// page untouched. Calling again while mounted is a logged no-op.
#[wasm_bindgen]
pub fn mount() {
    telemetry::init_tracing();
    match try_mount() {
        Ok(()) => tracing::debug!("accessibility widget mounted"),
        Err(err @ WidgetError::AlreadyMounted) => tracing::debug!("mount skipped: {err}"),
        Err(err) => tracing::warn!("mount aborted: {err}"),
    }
}

fn try_mount() -> Result<(), WidgetError> {
    let window = web_sys::window().ok_or(WidgetError::NoWindow)?;
    if in_nested_frame(&window) {
        return Err(WidgetError::NestedFrame);
    }
    let document = window.document().ok_or(WidgetError::NoDocument)?;
    let body = document.body().ok_or(WidgetError::NoDocument)?;
    if document.get_element_by_id(css::WRAPPER_ID).is_some() {
        return Err(WidgetError::AlreadyMounted);
    }

    let store = SettingsStore::new(&window);
    let settings = store.load();

    let parts = panel::build_widget(&document, &settings)?;
    let style = panel::inject_stylesheet(&document)?;
    if let Err(err) = body.append_child(&parts.wrapper) {
        // No partial UI on failure.
        style.remove();
        return Err(err.into());
    }

    apply::apply(&document, &parts.wrapper, &settings);

    let widget = Rc::new(RefCell::new(Widget {
        document,
        wrapper: parts.wrapper.clone(),
        panel: parts.panel.clone(),
        links_button: parts.links_button.clone(),
        store,
        settings,
        panel_state: PanelState::default(),
    }));
    if let Err(err) = events::wire(&widget, &parts) {
        // No partial UI on failure.
        parts.wrapper.remove();
        style.remove();
        return Err(err);
    }
    Ok(())
}

/// The widget refuses to run inside nested frames. A cross-origin `top`
/// access failure counts as framed.
fn in_nested_frame(window: &Window) -> bool {
    match window.top() {
        Ok(Some(top)) => !js_sys::Object::is(window.as_ref(), top.as_ref()),
        Ok(None) | Err(_) => true,
    }
}

/// Live widget state shared by the event closures.
pub(crate) struct Widget {
    document: Document,
    wrapper: Element,
    panel: HtmlElement,
    links_button: HtmlElement,
    store: SettingsStore,
    settings: Settings,
    panel_state: PanelState,
}

pub(crate) type SharedWidget = Rc<RefCell<Widget>>;

impl Widget {
    /// Handler body for every preset button: update the record, apply,
    /// persist, re-sync the active marks.
    fn select_preset(&mut self, group: &str, value: &str) {
        let Some(next) = self.updated_record(group, value) else {
            tracing::debug!("ignoring unknown preset {group}={value}");
            return;
        };
        self.settings = next;
        self.apply_and_persist();
        self.sync_preset_groups();
    }

    /// The record with one field replaced, or `None` for an unknown group
    /// or out-of-enum value.
    fn updated_record(&self, group: &str, value: &str) -> Option<Settings> {
        let mut next = self.settings;
        match group {
            controls::GROUP_FONT_SIZE => next.font_size = FontSize::from_key(value)?,
            controls::GROUP_FONT_WEIGHT => next.font_weight = FontWeight::from_key(value)?,
            controls::GROUP_THEME => next.theme = Theme::from_key(value)?,
            _ => return None,
        }
        Some(next)
    }

    fn toggle_links(&mut self) {
        self.settings.emphasize_links = !self.settings.emphasize_links;
        self.apply_and_persist();
        self.sync_links_button();
    }

    /// Restore all fields to defaults, persist, and refresh the whole panel.
    fn reset(&mut self) {
        self.settings = Settings::default();
        self.apply_and_persist();
        self.sync_preset_groups();
        self.sync_links_button();
    }

    fn toggle_panel(&mut self) {
        self.set_panel_state(self.panel_state.toggled());
    }

    fn dismiss_panel(&mut self) {
        self.set_panel_state(self.panel_state.dismissed());
    }

    fn set_panel_state(&mut self, next: PanelState) {
        if next != self.panel_state {
            self.panel_state = next;
            self.panel.set_hidden(!next.is_visible());
        }
    }

    fn apply_and_persist(&self) {
        apply::apply(&self.document, &self.wrapper, &self.settings);
        self.store.save(&self.settings);
    }

    /// Re-mark the active classes so exactly one preset per group mirrors
    /// the current record.
    fn sync_preset_groups(&self) {
        let selector = format!("[{}] [{}]", css::GROUP_ATTR, css::VALUE_ATTR);
        let Ok(buttons) = self.panel.query_selector_all(&selector) else {
            return;
        };
        for index in 0..buttons.length() {
            let Some(button) = buttons
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let group = button
                .closest(&format!("[{}]", css::GROUP_ATTR))
                .ok()
                .flatten()
                .and_then(|element| element.get_attribute(css::GROUP_ATTR));
            let expected = group.and_then(|group| controls::active_value(&self.settings, &group));
            let is_active = match (button.get_attribute(css::VALUE_ATTR), expected) {
                (Some(value), Some(expected)) => value == expected,
                _ => false,
            };
            if let Err(err) = button.class_list().toggle_with_force(css::ACTIVE_CLASS, is_active) {
                tracing::warn!("failed to sync preset state: {err:?}");
            }
        }
    }

    fn sync_links_button(&self) {
        self.links_button
            .set_text_content(Some(labels::links_state(self.settings.emphasize_links)));
        if let Err(err) = self
            .links_button
            .class_list()
            .toggle_with_force(css::ACTIVE_CLASS, self.settings.emphasize_links)
        {
            tracing::warn!("failed to sync links button: {err:?}");
        }
    }
}
