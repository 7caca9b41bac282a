//! Bridge to the hosted rendering SDK
//!
//! The hosting page wraps the vendor SDK in a small set of `engine*` globals
//! (the names below must match the page shim). This module binds them with
//! wasm-bindgen and implements the `storey-nav-model` engine traits on top,
//! so the rest of the navigator never touches JavaScript directly.
//!
//! Structured payloads cross the boundary as JSON strings; entity handles
//! stay opaque `JsValue`s owned by the SDK.

use crate::config::ViewerConfig;
use crate::console;
use storey_nav_model::{
    Aabb, CameraControl, Euid, RayHit, Result, Rtid, SceneEntity, SceneError, SceneGraph,
    ScreenPicker,
};
use wasm_bindgen::prelude::*;

// JavaScript FFI functions provided by the page shim
#[wasm_bindgen]
extern "C" {
    /// Join the streaming session and bind it to a canvas
    #[wasm_bindgen(js_name = engineStartSession, catch)]
    async fn engine_start_session(
        user_token: &str,
        scene_uuid: &str,
        canvas_id: &str,
    ) -> std::result::Result<(), JsValue>;

    /// Entities whose display name matches, as an array of entity objects
    #[wasm_bindgen(js_name = engineFindEntitiesByName, catch)]
    async fn engine_find_entities_by_name(name: &str) -> std::result::Result<JsValue, JsValue>;

    /// Entity with the given persistent id, or null
    #[wasm_bindgen(js_name = engineFindEntityByEuid, catch)]
    async fn engine_find_entity_by_euid(euid: &str) -> std::result::Result<JsValue, JsValue>;

    /// Children of an entity, as an array of entity objects
    #[wasm_bindgen(js_name = engineEntityChildren, catch)]
    async fn engine_entity_children(entity: &JsValue) -> std::result::Result<JsValue, JsValue>;

    /// Parent of an entity, or null at the scene root
    #[wasm_bindgen(js_name = engineEntityParent, catch)]
    async fn engine_entity_parent(entity: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = engineEntityRtid)]
    fn engine_entity_rtid(entity: &JsValue) -> f64;

    #[wasm_bindgen(js_name = engineEntityEuid)]
    fn engine_entity_euid(entity: &JsValue) -> String;

    #[wasm_bindgen(js_name = engineEntityName)]
    fn engine_entity_name(entity: &JsValue) -> String;

    /// Local AABB as a JSON string `{"min":[..],"max":[..]}`, or null
    #[wasm_bindgen(js_name = engineEntityLocalAabb)]
    fn engine_entity_local_aabb(entity: &JsValue) -> Option<String>;

    /// Global transform as 16 column-major floats
    #[wasm_bindgen(js_name = engineEntityGlobalMatrix)]
    fn engine_entity_global_matrix(entity: &JsValue) -> Vec<f64>;

    #[wasm_bindgen(js_name = engineSetEntityVisibility)]
    fn engine_set_entity_visibility(entity: &JsValue, visible: bool);

    /// Global position of the active viewport's camera, as `[x, y, z]`
    #[wasm_bindgen(js_name = engineCameraPosition, catch)]
    async fn engine_camera_position() -> std::result::Result<JsValue, JsValue>;

    /// Start an animated transition on the active viewport
    #[wasm_bindgen(js_name = engineTravel)]
    fn engine_travel(destination: &[f64], orientation: &[f64], speed: f64);

    #[wasm_bindgen(js_name = engineSetOrbitPoint)]
    fn engine_set_orbit_point(point: &[f64]);

    /// Ray cast through screen coordinates: `{position, entity}` or null
    #[wasm_bindgen(js_name = engineCastScreenRay, catch)]
    async fn engine_cast_screen_ray(x: f64, y: f64) -> std::result::Result<JsValue, JsValue>;
}

fn js_error(context: &str, value: JsValue) -> SceneError {
    SceneError::engine(format!("{context}: {value:?}"))
}

fn point_from_js(value: &JsValue) -> Result<[f64; 3]> {
    let array = js_sys::Array::from(value);
    if array.length() < 3 {
        return Err(SceneError::engine("expected a 3-component array"));
    }
    let mut point = [0.0; 3];
    for (axis, slot) in point.iter_mut().enumerate() {
        *slot = array
            .get(axis as u32)
            .as_f64()
            .ok_or_else(|| SceneError::engine("non-numeric component in point"))?;
    }
    Ok(point)
}

/// Entity handle backed by an SDK entity object
#[derive(Clone)]
pub struct WebEntity(JsValue);

impl SceneEntity for WebEntity {
    fn rtid(&self) -> Rtid {
        Rtid(engine_entity_rtid(&self.0) as u64)
    }

    fn euid(&self) -> Euid {
        Euid(engine_entity_euid(&self.0))
    }

    fn name(&self) -> String {
        engine_entity_name(&self.0)
    }

    fn local_aabb(&self) -> Option<Aabb> {
        let json = engine_entity_local_aabb(&self.0)?;
        match serde_json::from_str(&json) {
            Ok(aabb) => Some(aabb),
            Err(error) => {
                console::log_warn(&format!("malformed aabb payload: {error}"));
                None
            }
        }
    }

    fn global_matrix(&self) -> [f64; 16] {
        let values = engine_entity_global_matrix(&self.0);
        let mut matrix = [0.0; 16];
        for (slot, value) in matrix.iter_mut().zip(values) {
            *slot = value;
        }
        matrix
    }

    fn set_visibility(&self, visible: bool) {
        engine_set_entity_visibility(&self.0, visible);
    }

    async fn children(&self) -> Result<Vec<Self>> {
        let value = engine_entity_children(&self.0)
            .await
            .map_err(|error| js_error("getChildren", error))?;
        Ok(js_sys::Array::from(&value).iter().map(WebEntity).collect())
    }

    async fn parent(&self) -> Result<Option<Self>> {
        let value = engine_entity_parent(&self.0)
            .await
            .map_err(|error| js_error("getParent", error))?;
        if value.is_null() || value.is_undefined() {
            Ok(None)
        } else {
            Ok(Some(WebEntity(value)))
        }
    }
}

/// Engine facade over the page shim
///
/// The session itself lives on the JavaScript side; this is a zero-sized
/// capability handle that exists only after [`WebEngine::connect`] succeeds.
#[derive(Clone, Copy)]
pub struct WebEngine;

impl WebEngine {
    /// Start the streaming session bound to the configured canvas
    pub async fn connect(config: &ViewerConfig) -> Result<Self> {
        engine_start_session(&config.user_token, &config.scene_uuid, &config.canvas_id)
            .await
            .map_err(|error| js_error("session start", error))?;
        console::log("session started");
        Ok(WebEngine)
    }
}

impl SceneGraph for WebEngine {
    type Entity = WebEntity;

    async fn find_entities_by_name(&self, name: &str) -> Result<Vec<WebEntity>> {
        let value = engine_find_entities_by_name(name)
            .await
            .map_err(|error| js_error("findEntitiesByName", error))?;
        Ok(js_sys::Array::from(&value).iter().map(WebEntity).collect())
    }

    async fn find_entity_by_euid(&self, euid: &Euid) -> Result<Option<WebEntity>> {
        let value = engine_find_entity_by_euid(euid.as_str())
            .await
            .map_err(|error| js_error("findEntityByEUID", error))?;
        if value.is_null() || value.is_undefined() {
            Ok(None)
        } else {
            Ok(Some(WebEntity(value)))
        }
    }
}

impl CameraControl for WebEngine {
    async fn camera_position(&self) -> Result<[f64; 3]> {
        let value = engine_camera_position()
            .await
            .map_err(|error| js_error("camera pose", error))?;
        point_from_js(&value)
    }

    fn travel(&self, destination: [f64; 3], orientation: [f64; 4], speed: f64) {
        engine_travel(&destination, &orientation, speed);
    }

    fn set_orbit_point(&self, point: [f64; 3]) {
        engine_set_orbit_point(&point);
    }
}

impl ScreenPicker for WebEngine {
    type Entity = WebEntity;

    async fn cast_screen_ray(&self, x: f64, y: f64) -> Result<Option<RayHit<WebEntity>>> {
        let value = engine_cast_screen_ray(x, y)
            .await
            .map_err(|error| js_error("castScreenSpaceRay", error))?;
        if value.is_null() || value.is_undefined() {
            return Ok(None);
        }
        let entity = js_sys::Reflect::get(&value, &JsValue::from_str("entity"))
            .map_err(|error| js_error("ray hit entity", error))?;
        if entity.is_null() || entity.is_undefined() {
            return Ok(None);
        }
        let position = js_sys::Reflect::get(&value, &JsValue::from_str("position"))
            .map_err(|error| js_error("ray hit position", error))?;
        Ok(Some(RayHit {
            position: point_from_js(&position)?,
            entity: WebEntity(entity),
        }))
    }
}
