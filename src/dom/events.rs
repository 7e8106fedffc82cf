//! Event wiring between the panel controls, the settings record, and the
//! page.
//!
//! Preset clicks are routed through one delegated listener on the panel;
//! the document-level listeners implement Escape and outside-click
//! dismissal. Closures are leaked on purpose: the widget lives for the
//! page lifetime.

use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Node};

use super::panel::WidgetParts;
use super::SharedWidget;
use crate::css;
use crate::error::WidgetError;

pub(super) fn wire(widget: &SharedWidget, parts: &WidgetParts) -> Result<(), WidgetError> {
    wire_toggle(widget, parts)?;
    wire_presets(widget, parts)?;
    wire_links_button(widget, parts)?;
    wire_reset(widget, parts)?;
    wire_dismissal(widget, parts)?;
    Ok(())
}

fn wire_toggle(widget: &SharedWidget, parts: &WidgetParts) -> Result<(), WidgetError> {
    let shared = Rc::clone(widget);
    let on_click = Closure::<dyn FnMut()>::new(move || {
        shared.borrow_mut().toggle_panel();
    });
    parts
        .toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// One delegated click listener for every preset button, present and
/// future: the button's group and value ride along in data attributes.
fn wire_presets(widget: &SharedWidget, parts: &WidgetParts) -> Result<(), WidgetError> {
    let shared = Rc::clone(widget);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(button)) = target.closest(&format!("[{}]", css::VALUE_ATTR)) else {
            return;
        };
        let Some(value) = button.get_attribute(css::VALUE_ATTR) else {
            return;
        };
        let Ok(Some(group_element)) = button.closest(&format!("[{}]", css::GROUP_ATTR)) else {
            return;
        };
        let Some(group) = group_element.get_attribute(css::GROUP_ATTR) else {
            return;
        };
        shared.borrow_mut().select_preset(&group, &value);
    });
    parts
        .panel
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn wire_links_button(widget: &SharedWidget, parts: &WidgetParts) -> Result<(), WidgetError> {
    let shared = Rc::clone(widget);
    let on_click = Closure::<dyn FnMut()>::new(move || {
        shared.borrow_mut().toggle_links();
    });
    parts
        .links_button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn wire_reset(widget: &SharedWidget, parts: &WidgetParts) -> Result<(), WidgetError> {
    let shared = Rc::clone(widget);
    let on_click = Closure::<dyn FnMut()>::new(move || {
        shared.borrow_mut().reset();
    });
    parts
        .reset_button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Escape and clicks outside the widget collapse a visible panel. The
/// wrapper-containment check keeps clicks on the toggle and inside the
/// panel from dismissing.
fn wire_dismissal(widget: &SharedWidget, parts: &WidgetParts) -> Result<(), WidgetError> {
    let document = widget.borrow().document.clone();

    let shared = Rc::clone(widget);
    let wrapper = parts.wrapper.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let inside = event
            .target()
            .and_then(|t| t.dyn_into::<Node>().ok())
            .is_some_and(|node| wrapper.contains(Some(&node)));
        if !inside {
            shared.borrow_mut().dismiss_panel();
        }
    });
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    let shared = Rc::clone(widget);
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() == "Escape" {
            shared.borrow_mut().dismiss_panel();
        }
    });
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();
    Ok(())
}
