use bevy::math::Vec3A;
use bevy::prelude::*;
use bevy::render::camera::{CameraProjection, SubCameraView};

/// Perspective projection whose far plane really clips.
///
/// Bevy's own perspective is infinite reverse-Z and only uses `far` for
/// culling, so a mesh crossing the far plane would be drawn whole. This one
/// builds a finite reverse-Z matrix: depth 1 at `near`, 0 at `far`, and
/// anything past `far` falls outside the depth range.
#[derive(Debug, Clone)]
pub struct LayeredPerspective {
    pub perspective: PerspectiveProjection,
}

impl LayeredPerspective {
    pub fn new(fov: f32, near: f32, far: f32) -> Self {
        Self {
            perspective: PerspectiveProjection {
                fov,
                near,
                far,
                ..default()
            },
        }
    }

    pub fn set_far(&mut self, far: f32) {
        self.perspective.far = far;
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.perspective.aspect_ratio = aspect_ratio;
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.perspective.aspect_ratio
    }
}

impl CameraProjection for LayeredPerspective {
    fn get_clip_from_view(&self) -> Mat4 {
        let p = &self.perspective;
        // Near and far swapped for reverse depth.
        Mat4::perspective_rh(p.fov, p.aspect_ratio, p.far, p.near)
    }

    fn get_clip_from_view_for_sub(&self, sub_view: &SubCameraView) -> Mat4 {
        self.perspective.get_clip_from_view_for_sub(sub_view)
    }

    fn update(&mut self, width: f32, height: f32) {
        self.perspective.update(width, height);
    }

    fn far(&self) -> f32 {
        self.perspective.far
    }

    fn get_frustum_corners(&self, z_near: f32, z_far: f32) -> [Vec3A; 8] {
        self.perspective.get_frustum_corners(z_near, z_far)
    }
}

/// The layered perspective inside `projection`, if it holds one.
pub fn layered_mut(projection: &mut Projection) -> Option<&mut LayeredPerspective> {
    match projection {
        Projection::Custom(custom) => custom.get_mut::<LayeredPerspective>(),
        _ => None,
    }
}

pub fn layered(projection: &Projection) -> Option<&LayeredPerspective> {
    match projection {
        Projection::Custom(custom) => custom.get::<LayeredPerspective>(),
        _ => None,
    }
}
