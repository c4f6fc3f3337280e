use bevy::prelude::*;
use constants::page::{
    BACK_CANVAS_SELECTOR, FRONT_CANVAS_SELECTOR, SIZE_REFERENCE_SELECTOR, TITLE_SELECTOR,
};
use serde::Deserialize;

use super::PageError;

/// Runtime switches and DOM bindings for the scene.
///
/// Every field is optional in the JSON form; missing fields keep their default.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Spawn the scroll-reactive landmark (requires a title element).
    pub landmark: bool,
    pub front_canvas: String,
    pub back_canvas: String,
    pub size_reference: String,
    pub title: String,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            landmark: true,
            front_canvas: FRONT_CANVAS_SELECTOR.to_string(),
            back_canvas: BACK_CANVAS_SELECTOR.to_string(),
            size_reference: SIZE_REFERENCE_SELECTOR.to_string(),
            title: TITLE_SELECTOR.to_string(),
        }
    }
}

impl SceneSettings {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        serde_json::from_str(json).map_err(|e| PageError::InvalidSettings(e.to_string()))
    }
}

/// Read settings from the `data-scene-settings` attribute on `<body>`.
///
/// Runs before the app (and its log plugin) exists, so problems go straight
/// to the browser console and the defaults are used.
#[cfg(target_arch = "wasm32")]
pub fn load_scene_settings() -> SceneSettings {
    use constants::page::SETTINGS_ATTRIBUTE;
    use wasm_bindgen::JsValue;

    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .and_then(|body| body.get_attribute(SETTINGS_ATTRIBUTE));

    let Some(raw) = raw else {
        return SceneSettings::default();
    };

    match SceneSettings::from_json(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!("{e}; using defaults")));
            SceneSettings::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_scene_settings() -> SceneSettings {
    SceneSettings::default()
}
