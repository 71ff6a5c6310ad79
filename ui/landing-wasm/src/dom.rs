//! Browser implementation of [`Page`].
//!
//! Thin wrappers over `web-sys`. DOM exceptions from marker and style
//! writes are ignored; lookups that throw (e.g. an href that is not a valid
//! selector) resolve to `None`.

use lp_behavior::Page;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window};

// ── Helpers ──

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

fn collect(nodes: NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

fn as_html(el: &Element) -> Option<&HtmlElement> {
    el.dyn_ref::<HtmlElement>()
}

// ── Page ──

#[derive(Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new() -> Result<Self, JsValue> {
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for DomPage {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok()?
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        self.document
            .query_selector_all(selector)
            .map(collect)
            .unwrap_or_default()
    }

    fn query_within(&self, parent: &Element, selector: &str) -> Option<Element> {
        parent.query_selector(selector).ok()?
    }

    fn query_all_within(&self, parent: &Element, selector: &str) -> Vec<Element> {
        parent
            .query_selector_all(selector)
            .map(collect)
            .unwrap_or_default()
    }

    fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn closest(&self, el: &Element, selector: &str) -> Option<Element> {
        el.closest(selector).ok()?
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn add_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().add_1(class);
    }

    fn remove_class(&self, el: &Element, class: &str) {
        let _ = el.class_list().remove_1(class);
    }

    fn toggle_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().toggle(class).unwrap_or(false)
    }

    fn attribute(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attribute(&self, el: &Element, name: &str, value: &str) {
        let _ = el.set_attribute(name, value);
    }

    fn set_text(&self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn set_inner_html(&self, el: &Element, html: &str) {
        el.set_inner_html(html);
    }

    fn set_style(&self, el: &Element, property: &str, value: &str) {
        if let Some(html) = as_html(el) {
            let _ = html.style().set_property(property, value);
        }
    }

    fn clear_style(&self, el: &Element, property: &str) {
        if let Some(html) = as_html(el) {
            let _ = html.style().remove_property(property);
        }
    }

    fn offset_top(&self, el: &Element) -> f64 {
        as_html(el).map(|h| f64::from(h.offset_top())).unwrap_or(0.0)
    }

    fn offset_height(&self, el: &Element) -> f64 {
        as_html(el).map(|h| f64::from(h.offset_height())).unwrap_or(0.0)
    }

    fn bounding_top(&self, el: &Element) -> f64 {
        el.get_bounding_client_rect().top()
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) if y > 0.0 => y,
            _ => self
                .document
                .document_element()
                .map(|root| f64::from(root.scroll_top()))
                .unwrap_or(0.0),
        }
    }

    fn scroll_to_smooth(&self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn location_hash(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn open_in_new_context(&self, url: &str) {
        let _ = self.window.open_with_url_and_target(url, "_blank");
    }

    fn current_year(&self) -> i32 {
        js_sys::Date::new_0().get_full_year() as i32
    }
}
