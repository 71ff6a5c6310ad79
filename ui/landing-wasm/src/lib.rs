//! Landing page WASM frontend.
//!
//! Resolves configuration, builds the behavior controller over the live
//! document, binds listeners and exposes `openModal` to page markup.

pub mod config;
pub mod dom;
pub mod events;
pub mod state;
pub mod timers;

use lp_behavior::Landing;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let document = dom::document()?;
    let ready_state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))?
        .as_string()
        .unwrap_or_default();
    if ready_state != "loading" {
        return init();
    }

    let cb = Closure::once(move || {
        if let Err(err) = init() {
            warn!(error = ?err, "landing init failed");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let page = dom::DomPage::new()?;
    let window = page.window().clone();
    let document = page.document().clone();

    let config = config::load(&window, &document);
    let mut app = Landing::new(page, timers::TimerScheduler::default(), config);
    let failed = app.init();
    let els = app.handles().clone();
    state::install(app);

    events::bind_events(&els, &window, &document);
    install_global_open_modal(&window)?;

    info!(failed_steps = failed.len(), "landing page ready");
    Ok(())
}

/// Open the info modal with a title and an HTML body.
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(title: &str, content: &str) {
    state::with_app(|app| app.open_modal(title, content));
}

/// Inline markup calls `openModal(...)` as a plain global.
fn install_global_open_modal(window: &web_sys::Window) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(|title: JsValue, content: JsValue| {
        let title = title.as_string().unwrap_or_default();
        let content = content.as_string().unwrap_or_default();
        open_modal(&title, &content);
    }) as Box<dyn FnMut(JsValue, JsValue)>);
    js_sys::Reflect::set(window, &JsValue::from_str("openModal"), cb.as_ref())?;
    cb.forget();
    Ok(())
}
