//! Event binding.
//!
//! Wires DOM listeners to the controller handlers. Each component binds
//! independently so a failing `addEventListener` only disables that
//! component. TOC links also match the same-page anchor selector; on desktop
//! the anchor handler leaves them to the TOC handler.

use crate::state::{self, App};
use lp_behavior::{Dispatch, Handles};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, Window};

/// Helper: route one DOM event type on `target` to a controller handler and
/// apply the returned [`Dispatch`] to the live event.
fn listen<T, F>(target: &T, event_type: &str, mut handler: F) -> Result<(), JsValue>
where
    T: AsRef<EventTarget>,
    F: FnMut(&mut App, &Event) -> Dispatch + 'static,
{
    let cb = Closure::wrap(Box::new(move |event: Event| {
        if let Some(dispatch) = state::with_app(|app| handler(app, &event)) {
            if dispatch.prevent_default {
                event.prevent_default();
            }
            if dispatch.stop_propagation {
                event.stop_propagation();
            }
        }
    }) as Box<dyn FnMut(Event)>);
    target
        .as_ref()
        .add_event_listener_with_callback(event_type, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Helper: same handler on every element of a list, with the element passed
/// through.
fn listen_each<F>(elements: &[Element], event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: Fn(&mut App, &Element) -> Dispatch + Clone + 'static,
{
    for el in elements {
        let el2 = el.clone();
        let handler = handler.clone();
        listen(el, event_type, move |app, _| handler(app, &el2))?;
    }
    Ok(())
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn bind_navigation(els: &Handles<Element>) -> Result<(), JsValue> {
    if let Some(toggle) = &els.nav_toggle {
        listen(toggle, "click", |app, _| app.on_nav_toggle_click())?;
    }
    listen_each(&els.nav_links, "click", |app, _| app.on_nav_link_click())
}

fn bind_accordion(els: &Handles<Element>) -> Result<(), JsValue> {
    let Some(button) = &els.accordion_button else {
        return Ok(());
    };
    listen(button, "click", |app, _| app.on_accordion_click())?;
    listen(button, "keydown", |app, event| {
        match event.dyn_ref::<KeyboardEvent>() {
            Some(key_event) => app.on_accordion_keydown(&key_event.key()),
            None => Dispatch::NONE,
        }
    })
}

fn bind_viewport(window: &Window) -> Result<(), JsValue> {
    listen(window, "scroll", |app, _| {
        app.on_scroll();
        Dispatch::NONE
    })?;
    listen(window, "resize", |app, _| {
        app.on_resize();
        Dispatch::NONE
    })
}

fn bind_toc(els: &Handles<Element>) -> Result<(), JsValue> {
    listen_each(&els.toc_links, "click", |app, link| app.on_toc_link_click(link))
}

fn bind_forms(els: &Handles<Element>) -> Result<(), JsValue> {
    listen_each(&els.form_buttons, "click", |app, _| app.on_form_button_click())
}

fn bind_modal(els: &Handles<Element>, document: &Document) -> Result<(), JsValue> {
    if let Some(close) = &els.modal_close {
        listen(close, "click", |app, _| app.on_modal_close_click())?;
    }
    if let Some(modal) = &els.modal {
        listen(modal, "click", |app, event| match event_element(event) {
            Some(target) => app.on_modal_click(&target),
            None => Dispatch::NONE,
        })?;
    }
    listen(document, "keydown", |app, event| match event.dyn_ref::<KeyboardEvent>() {
        Some(key_event) => app.on_document_keydown(&key_event.key()),
        None => Dispatch::NONE,
    })
}

fn bind_outside_click(document: &Document) -> Result<(), JsValue> {
    listen(document, "click", |app, event| match event_element(event) {
        Some(target) => app.on_document_click(&target),
        None => Dispatch::NONE,
    })
}

fn bind_anchors(els: &Handles<Element>) -> Result<(), JsValue> {
    listen_each(&els.anchors, "click", |app, anchor| app.on_anchor_click(anchor))
}

fn bind_mobile_toc(els: &Handles<Element>) -> Result<(), JsValue> {
    let (Some(toggle), Some(_)) = (&els.toc_toggle, &els.toc_list) else {
        return Ok(());
    };
    listen(toggle, "click", |app, _| app.on_toc_toggle_click())?;
    listen_each(&els.toc_list_links, "click", |app, _| app.on_toc_list_link_click())
}

/// Bind all UI event listeners. Call once after the controller is installed.
pub fn bind_events(els: &Handles<Element>, window: &Window, document: &Document) {
    let results = [
        ("navigation", bind_navigation(els)),
        ("accordion", bind_accordion(els)),
        ("viewport", bind_viewport(window)),
        ("toc", bind_toc(els)),
        ("forms", bind_forms(els)),
        ("modal", bind_modal(els, document)),
        ("outside-click", bind_outside_click(document)),
        ("anchors", bind_anchors(els)),
        ("mobile-toc", bind_mobile_toc(els)),
    ];
    for (component, result) in results {
        if let Err(err) = result {
            warn!(component, error = ?err, "failed to bind listeners");
        }
    }
}
