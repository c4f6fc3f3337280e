use bevy::prelude::*;

use super::frame_context::FrameContext;
use crate::engine::camera::layer_camera::LayerCamera;
use crate::engine::camera::layered_projection::layered_mut;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResizeState {
    #[default]
    Idle,
    Resizing,
}

/// Remembers the last sampled viewport so changes can be detected.
#[derive(Resource, Debug, Default)]
pub struct ResizeTracker {
    previous: Option<Vec2>,
    state: ResizeState,
}

impl ResizeTracker {
    /// Record this frame's viewport; enters `Resizing` when it changed.
    pub fn observe(&mut self, viewport: Vec2) -> ResizeState {
        if self.previous != Some(viewport) {
            self.previous = Some(viewport);
            self.state = ResizeState::Resizing;
        }
        self.state
    }

    pub fn finish(&mut self) {
        self.state = ResizeState::Idle;
    }

    #[cfg(test)]
    pub fn state(&self) -> ResizeState {
        self.state
    }
}

/// Resize both surfaces and both cameras when the viewport changed.
pub fn apply_viewport_resize(
    frame: Res<FrameContext>,
    mut tracker: ResMut<ResizeTracker>,
    mut windows: Query<&mut Window>,
    mut cameras: Query<&mut Projection, With<LayerCamera>>,
) {
    if tracker.observe(frame.viewport) == ResizeState::Idle {
        return;
    }

    let size = frame.viewport;
    info!("Viewport resized to {}x{}", size.x, size.y);

    // A collapsed sizing element leaves the surfaces at their last size.
    if size.x > 0.0 && size.y > 0.0 {
        for mut window in &mut windows {
            if window.width() != size.x || window.height() != size.y {
                window.resolution.set(size.x, size.y);
            }
        }

        for mut projection in &mut cameras {
            if let Some(layered) = layered_mut(&mut projection) {
                layered.set_aspect_ratio(size.x / size.y);
            }
        }
    }

    tracker.finish();
}
