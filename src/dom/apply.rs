//! The single mutation point for document-wide styles.
//!
//! Every style write the widget performs goes through [`apply`]. The
//! invariant: the widget's own subtree is excluded from the target node set
//! of every mutation, so the user's page-wide choices never restyle the
//! widget. Individual failed property writes are logged and skipped.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use crate::page_style::{PageStyle, LINK_EMPHASIS};
use crate::settings::Settings;

/// Apply the record's visible effects: body typography and colors, then
/// link emphasis. Used at startup to restore saved settings, after every
/// control change, and on reset.
pub(super) fn apply(document: &Document, wrapper: &Element, settings: &Settings) {
    apply_body(document, settings);
    apply_link_emphasis(document, wrapper, settings.emphasize_links);
}

fn apply_body(document: &Document, settings: &Settings) {
    let Some(body) = document.body() else {
        return;
    };
    let style = body.style();
    for (property, value) in PageStyle::from_settings(settings).declarations() {
        if let Err(err) = style.set_property(property, value) {
            tracing::warn!("failed to set body {property}: {err:?}");
        }
    }
}

/// Bold+underline every hyperlink outside the widget subtree, or clear the
/// overrides. Links inside the wrapper are never touched.
fn apply_link_emphasis(document: &Document, wrapper: &Element, emphasize: bool) {
    let links = document.get_elements_by_tag_name("a");
    for index in 0..links.length() {
        let Some(link) = links.item(index) else {
            continue;
        };
        let node: &Node = link.as_ref();
        if wrapper.contains(Some(node)) {
            continue;
        }
        let Some(link) = link.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let style = link.style();
        for &(property, value) in LINK_EMPHASIS {
            let result = if emphasize {
                style.set_property(property, value)
            } else {
                style.remove_property(property).map(|_| ())
            };
            if let Err(err) = result {
                tracing::warn!("failed to update link {property}: {err:?}");
            }
        }
    }
}
