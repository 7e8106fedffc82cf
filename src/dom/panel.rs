//! DOM construction for the toggle button and the settings panel.
//!
//! Renders the pure [`ControlSpec`] descriptions into elements; everything
//! is built detached and attached by the caller in one step.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::controls::{self, ControlSpec};
use crate::css;
use crate::error::WidgetError;
use crate::labels;
use crate::settings::Settings;

/// Toggle icon; an `error` listener swaps in an inline glyph if it fails
/// to load.
const ICON_URL: &str = "https://raw.githubusercontent.com/pristup/pristup/main/assets/logo.png";

/// Handles to the elements the event router needs after assembly.
pub(super) struct WidgetParts {
    pub(super) wrapper: Element,
    pub(super) toggle: HtmlElement,
    pub(super) panel: HtmlElement,
    pub(super) links_button: HtmlElement,
    pub(super) reset_button: HtmlElement,
}

/// Inject the widget stylesheet into the document head.
pub(super) fn inject_stylesheet(document: &Document) -> Result<Element, WidgetError> {
    let head = document.head().ok_or(WidgetError::NoDocument)?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(css::stylesheet()));
    head.append_child(&style)?;
    Ok(style)
}

/// Build the whole widget subtree, detached from the document.
pub(super) fn build_widget(
    document: &Document,
    settings: &Settings,
) -> Result<WidgetParts, WidgetError> {
    let wrapper = document.create_element("div")?;
    wrapper.set_id(css::WRAPPER_ID);

    let toggle = create_html(document, "button")?;
    toggle.set_id(css::TOGGLE_ID);
    toggle.set_attribute("type", "button")?;
    toggle.set_attribute("aria-label", labels::TOGGLE_LABEL)?;
    attach_icon(document, &toggle)?;

    let panel = create_html(document, "div")?;
    panel.set_id(css::PANEL_ID);
    panel.set_hidden(true);

    let title = document.create_element("h4")?;
    title.set_text_content(Some(labels::PANEL_TITLE));
    panel.append_child(&title)?;

    for spec in controls::control_specs(settings) {
        let control = create_control(document, &spec)?;
        panel.append_child(&control)?;
    }

    let (links_control, links_button) = build_links_control(document, settings)?;
    panel.append_child(&links_control)?;

    let (reset_control, reset_button) = build_reset_control(document)?;
    panel.append_child(&reset_control)?;

    wrapper.append_child(&toggle)?;
    wrapper.append_child(&panel)?;

    Ok(WidgetParts {
        wrapper,
        toggle,
        panel,
        links_button,
        reset_button,
    })
}

/// Build one labeled group of mutually exclusive preset buttons. Exactly one
/// option arrives active from the pure description.
fn create_control(document: &Document, spec: &ControlSpec) -> Result<Element, WidgetError> {
    let control = document.create_element("div")?;
    control.set_class_name(css::CONTROL_CLASS);

    let label = document.create_element("label")?;
    label.set_text_content(Some(&format!("{}:", spec.label)));
    control.append_child(&label)?;

    let group = document.create_element("div")?;
    group.set_attribute(css::GROUP_ATTR, spec.group)?;
    for option in &spec.options {
        let button = create_html(document, "button")?;
        button.set_attribute("type", "button")?;
        button.set_class_name(css::PRESET_CLASS);
        if option.active {
            button.class_list().add_1(css::ACTIVE_CLASS)?;
        }
        button.set_attribute(css::VALUE_ATTR, option.value)?;
        button.set_text_content(Some(option.label));
        group.append_child(&button)?;
    }
    control.append_child(&group)?;
    Ok(control)
}

fn build_links_control(
    document: &Document,
    settings: &Settings,
) -> Result<(Element, HtmlElement), WidgetError> {
    let control = document.create_element("div")?;
    control.set_class_name(css::CONTROL_CLASS);

    let label = document.create_element("label")?;
    label.set_text_content(Some(&format!("{}:", labels::LINKS_LABEL)));
    control.append_child(&label)?;

    let button = create_html(document, "button")?;
    button.set_id(css::LINKS_BUTTON_ID);
    button.set_attribute("type", "button")?;
    button.set_text_content(Some(labels::links_state(settings.emphasize_links)));
    if settings.emphasize_links {
        button.class_list().add_1(css::ACTIVE_CLASS)?;
    }
    control.append_child(&button)?;
    Ok((control, button))
}

fn build_reset_control(document: &Document) -> Result<(Element, HtmlElement), WidgetError> {
    let control = document.create_element("div")?;
    control.set_class_name(css::CONTROL_CLASS);

    let button = create_html(document, "button")?;
    button.set_id(css::RESET_BUTTON_ID);
    button.set_attribute("type", "button")?;
    button.set_text_content(Some(labels::RESET_LABEL));
    control.append_child(&button)?;
    Ok((control, button))
}

/// Icon image with an inline glyph fallback. Replacing the toggle's text
/// content drops the broken image in the same step.
fn attach_icon(document: &Document, toggle: &HtmlElement) -> Result<(), WidgetError> {
    let icon = document.create_element("img")?;
    icon.set_class_name(css::LOGO_CLASS);
    icon.set_attribute("alt", "")?;
    icon.set_attribute("src", ICON_URL)?;

    let fallback_target = toggle.clone();
    let on_error = Closure::<dyn FnMut()>::new(move || {
        tracing::debug!("toggle icon failed to load; using inline glyph");
        fallback_target.set_text_content(Some(labels::TOGGLE_FALLBACK_GLYPH));
    });
    icon.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
    on_error.forget();

    toggle.append_child(&icon)?;
    Ok(())
}

fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, WidgetError> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WidgetError::Dom(format!("`{tag}` did not produce an html element")))
}
