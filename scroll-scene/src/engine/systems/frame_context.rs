use bevy::prelude::*;
use constants::placement::{CAMERA_FOV_Y_DEGREES, PX_TO_M};

use crate::engine::camera::layer_camera::camera_distance;
use crate::page::PageSignals;

/// Everything a frame reads from the page, captured once before any update.
///
/// Pixel fields are CSS pixels; the `*_world` accessors convert to world units.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameContext {
    pub viewport: Vec2,
    pub scroll_offset: f32,
    pub document_height: f32,
    pub title_height: f32,
    /// Seconds since startup.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
}

impl FrameContext {
    pub fn capture(signals: PageSignals, elapsed: f32, delta: f32) -> Self {
        Self {
            viewport: signals.viewport,
            scroll_offset: signals.scroll_offset,
            document_height: signals.document_height,
            title_height: signals.title_height,
            elapsed,
            delta,
        }
    }

    pub fn viewport_world(&self) -> Vec2 {
        self.viewport * PX_TO_M
    }

    pub fn scroll_world(&self) -> f32 {
        self.scroll_offset * PX_TO_M
    }

    pub fn document_height_world(&self) -> f32 {
        self.document_height * PX_TO_M
    }

    /// Camera distance at which the viewport height fills the view at z = 0.
    pub fn camera_distance(&self) -> f32 {
        camera_distance(self.viewport_world().y, CAMERA_FOV_Y_DEGREES).unwrap_or(0.0)
    }

    /// Whether the page is still scrolled within the title.
    pub fn in_title_region(&self) -> bool {
        self.scroll_offset <= self.title_height
    }
}

#[cfg(target_arch = "wasm32")]
pub fn sample_frame_context(
    page: NonSend<crate::page::dom::DomPage>,
    time: Res<Time>,
    mut frame: ResMut<FrameContext>,
) {
    *frame = FrameContext::capture(page.read(), time.elapsed_secs(), time.delta_secs());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn sample_frame_context(
    page: Res<crate::page::native::NativePage>,
    windows: Query<&Window, With<bevy::window::PrimaryWindow>>,
    time: Res<Time>,
    mut frame: ResMut<FrameContext>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport = Vec2::new(window.width(), window.height());
    *frame = FrameContext::capture(page.read(viewport), time.elapsed_secs(), time.delta_secs());
}
