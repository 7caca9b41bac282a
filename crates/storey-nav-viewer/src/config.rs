//! Viewer configuration
//!
//! The hosting page injects a `window.STOREY_NAV_CONFIG` global (a JSON
//! string or plain object) carrying the session credentials. URL query
//! parameters override individual fields, which makes switching scenes
//! possible without editing the page.

use crate::console;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the window global carrying the configuration
pub const CONFIG_GLOBAL: &str = "STOREY_NAV_CONFIG";

/// Everything needed to join a streaming session
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ViewerConfig {
    /// Public user token for the session
    pub user_token: String,
    /// Scene to join
    pub scene_uuid: String,
    /// Canvas element the session renders into
    #[serde(default = "default_canvas_id")]
    pub canvas_id: String,
}

fn default_canvas_id() -> String {
    "display-canvas".to_string()
}

impl ViewerConfig {
    /// Load from the window global, then apply URL query overrides
    /// (`?scene=`, `?token=`, `?canvas=`)
    ///
    /// Returns `None` (with a console error) when the global is absent or
    /// malformed; the viewer must not start without credentials.
    pub fn load() -> Option<Self> {
        let window = web_sys::window()?;

        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
        if raw.is_null() || raw.is_undefined() {
            console::log_error(&format!("window.{CONFIG_GLOBAL} is not set"));
            return None;
        }
        let json = match raw.as_string() {
            Some(json) => json,
            None => String::from(js_sys::JSON::stringify(&raw).ok()?),
        };
        let mut config: ViewerConfig = match serde_json::from_str(&json) {
            Ok(config) => config,
            Err(error) => {
                console::log_error(&format!("window.{CONFIG_GLOBAL} is malformed: {error}"));
                return None;
            }
        };

        if let Ok(search) = window.location().search() {
            if let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) {
                if let Some(scene) = params.get("scene") {
                    config.scene_uuid = scene;
                }
                if let Some(token) = params.get("token") {
                    config.user_token = token;
                }
                if let Some(canvas) = params.get("canvas") {
                    config.canvas_id = canvas;
                }
            }
        }

        Some(config)
    }
}
