use bevy::prelude::*;
use bevy::window::PresentMode;

use crate::page::settings::SceneSettings;

/// Primary window: receives the back layer.
pub fn create_window_config(settings: &SceneSettings) -> Window {
    layer_window(&settings.back_canvas, "Scroll scene (back layer)")
}

/// Second window: receives the front layer.
pub fn create_front_window(settings: &SceneSettings) -> Window {
    layer_window(&settings.front_canvas, "Scroll scene (front layer)")
}

#[cfg(target_arch = "wasm32")]
fn layer_window(canvas: &str, _title: &str) -> Window {
    // Canvas size follows the sizing element, set on resize.
    Window {
        canvas: Some(canvas.to_string()),
        fit_canvas_to_parent: false,
        prevent_default_event_handling: false,
        transparent: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn layer_window(_canvas: &str, title: &str) -> Window {
    Window {
        title: title.to_string(),
        transparent: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
