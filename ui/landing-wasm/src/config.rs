//! Page configuration discovery.
//!
//! Priority: inline `<script type="application/json" id="landing-config">`
//! → global `window.landingConfig` object → built-in defaults.

use lp_config::PageConfig;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};
use tracing::{info, warn};

pub const CONFIG_SCRIPT_ID: &str = "landing-config";
pub const CONFIG_GLOBAL: &str = "landingConfig";

pub fn load(window: &Window, document: &Document) -> PageConfig {
    if let Some(script) = document.get_element_by_id(CONFIG_SCRIPT_ID) {
        let raw = script.text_content().unwrap_or_default();
        match PageConfig::from_json(&raw) {
            Ok(config) => {
                info!(source = CONFIG_SCRIPT_ID, "loaded landing config");
                return config;
            }
            Err(err) => warn!(error = %err, "ignoring inline landing config"),
        }
    }

    if let Ok(value) = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) {
        if !value.is_undefined() && !value.is_null() {
            match serde_wasm_bindgen::from_value::<PageConfig>(value) {
                Ok(config) => match config.validate() {
                    Ok(()) => {
                        info!(source = CONFIG_GLOBAL, "loaded landing config");
                        return config;
                    }
                    Err(err) => warn!(error = %err, "ignoring window.landingConfig"),
                },
                Err(err) => warn!(error = %err, "ignoring window.landingConfig"),
            }
        }
    }

    PageConfig::default()
}
