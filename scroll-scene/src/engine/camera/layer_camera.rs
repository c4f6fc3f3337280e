use bevy::prelude::*;
use bevy::render::camera::RenderTarget;
use bevy::window::WindowRef;
use constants::placement::{
    BACK_LAYER_FAR_EXTENSION, CAMERA_FOV_Y_DEGREES, CAMERA_NEAR, MIN_CLIP_DEPTH,
};

use super::layered_projection::{LayeredPerspective, layered_mut};
use crate::engine::systems::frame_context::FrameContext;

/// Distance at which a perspective camera's vertical extent at z = 0 equals
/// `target_height`.
///
/// Returns `None` unless `fov_y_degrees` lies strictly inside (0, 180).
pub fn camera_distance(target_height: f32, fov_y_degrees: f32) -> Option<f32> {
    if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
        return None;
    }
    let half_fov = fov_y_degrees.to_radians() * 0.5;
    Some(target_height * 0.5 / half_fov.tan())
}

/// Which composited layer a camera renders.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerCamera {
    /// Drawn over the page text; only objects in front of the origin plane.
    Front,
    /// Drawn under the page text; the whole scene.
    Back,
}

impl LayerCamera {
    pub fn far_plane(self, camera_distance: f32) -> f32 {
        let far = match self {
            LayerCamera::Front => camera_distance,
            LayerCamera::Back => camera_distance + BACK_LAYER_FAR_EXTENSION,
        };
        far.max(CAMERA_NEAR + MIN_CLIP_DEPTH)
    }

    fn order(self) -> isize {
        match self {
            LayerCamera::Back => 0,
            LayerCamera::Front => 1,
        }
    }

    fn target(self, front_window: Entity) -> RenderTarget {
        match self {
            LayerCamera::Back => RenderTarget::Window(WindowRef::Primary),
            LayerCamera::Front => RenderTarget::Window(WindowRef::Entity(front_window)),
        }
    }
}

/// Spawn the back camera on the primary window and the front camera on `front_window`.
pub fn spawn_layer_cameras(commands: &mut Commands, front_window: Entity) {
    for layer in [LayerCamera::Back, LayerCamera::Front] {
        commands.spawn((
            Camera3d::default(),
            Camera {
                order: layer.order(),
                target: layer.target(front_window),
                clear_color: ClearColorConfig::Custom(Color::NONE),
                ..default()
            },
            Projection::custom(LayeredPerspective::new(
                CAMERA_FOV_Y_DEGREES.to_radians(),
                CAMERA_NEAR,
                layer.far_plane(0.0),
            )),
            Transform::from_xyz(0.0, 0.0, 5.0),
            layer,
        ));
    }
}

/// Move both cameras to the scroll position and split their far planes.
pub fn stage_layer_cameras(
    frame: Res<FrameContext>,
    mut cameras: Query<(&LayerCamera, &mut Transform, &mut Projection)>,
) {
    let distance = frame.camera_distance();
    let eye = Vec3::new(0.0, -frame.scroll_world(), distance);

    for (layer, mut transform, mut projection) in &mut cameras {
        transform.translation = eye;
        if let Some(layered) = layered_mut(&mut projection) {
            layered.set_far(layer.far_plane(distance));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::layered_projection::layered;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::render::camera::CameraProjection;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn camera_distance_for_45_degrees() {
        let z = camera_distance(6.0, 45.0).unwrap();
        assert!((z - 7.2426).abs() < EPSILON);
    }

    #[test]
    fn camera_distance_rejects_degenerate_fov() {
        assert_eq!(camera_distance(6.0, 0.0), None);
        assert_eq!(camera_distance(6.0, 180.0), None);
        assert_eq!(camera_distance(6.0, -10.0), None);
        assert_eq!(camera_distance(6.0, f32::NAN), None);
    }

    #[test]
    fn camera_distance_round_trips_to_height() {
        for fov in [1.0_f32, 20.0, 45.0, 90.0, 135.0, 179.0] {
            for height in [0.5_f32, 3.0, 6.0, 25.0] {
                let z = camera_distance(height, fov).unwrap();
                let back = z * 2.0 * (fov.to_radians() * 0.5).tan();
                assert!(
                    (back - height).abs() < 1e-3 * height,
                    "fov {fov} height {height} gave {back}"
                );
            }
        }
    }

    #[test]
    fn camera_distance_grows_with_height() {
        let fov = 45.0;
        let heights = [1.0_f32, 2.0, 4.0, 8.0, 16.0];
        let distances: Vec<f32> = heights
            .iter()
            .map(|h| camera_distance(*h, fov).unwrap())
            .collect();
        assert!(distances.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn camera_distance_shrinks_with_fov() {
        let fovs = [10.0_f32, 30.0, 60.0, 90.0, 120.0, 170.0];
        let distances: Vec<f32> = fovs
            .iter()
            .map(|fov| camera_distance(6.0, *fov).unwrap())
            .collect();
        assert!(distances.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn far_planes_split_front_and_back() {
        assert_eq!(LayerCamera::Front.far_plane(7.0), 7.0);
        assert_eq!(
            LayerCamera::Back.far_plane(7.0),
            7.0 + BACK_LAYER_FAR_EXTENSION
        );
    }

    #[test]
    fn far_plane_never_reaches_near_plane() {
        assert!(LayerCamera::Front.far_plane(0.0) > CAMERA_NEAR);
        assert!(LayerCamera::Front.far_plane(0.05) > CAMERA_NEAR);
    }

    #[test]
    fn staging_places_both_cameras_identically() {
        let mut world = World::new();
        world.insert_resource(FrameContext {
            viewport: Vec2::new(800.0, 600.0),
            scroll_offset: 450.0,
            ..default()
        });
        let front = world
            .spawn((
                LayerCamera::Front,
                Transform::default(),
                Projection::custom(LayeredPerspective::new(1.0, CAMERA_NEAR, 1.0)),
            ))
            .id();
        let back = world
            .spawn((
                LayerCamera::Back,
                Transform::default(),
                Projection::custom(LayeredPerspective::new(1.0, CAMERA_NEAR, 1.0)),
            ))
            .id();

        world.run_system_once(stage_layer_cameras).unwrap();

        let expected_z = camera_distance(6.0, CAMERA_FOV_Y_DEGREES).unwrap();
        for camera in [front, back] {
            let translation = world.get::<Transform>(camera).unwrap().translation;
            assert!((translation.y + 4.5).abs() < EPSILON);
            assert!((translation.z - expected_z).abs() < EPSILON);
        }

        let far = |entity| layered(world.get::<Projection>(entity).unwrap()).unwrap().far();
        assert!((far(front) - expected_z).abs() < EPSILON);
        assert!((far(back) - (expected_z + BACK_LAYER_FAR_EXTENSION)).abs() < 1e-2);
    }

    #[test]
    fn front_layer_clips_what_the_back_layer_keeps() {
        let distance = camera_distance(6.0, CAMERA_FOV_Y_DEGREES).unwrap();
        let layer_projection = |layer: LayerCamera| {
            let mut projection =
                LayeredPerspective::new(CAMERA_FOV_Y_DEGREES.to_radians(), CAMERA_NEAR, 1.0);
            projection.set_aspect_ratio(800.0 / 600.0);
            projection.set_far(layer.far_plane(distance));
            projection
        };
        // A point 10 units behind the origin plane, seen from the camera.
        let point = Vec4::new(0.0, 0.0, -(distance + 10.0), 1.0);
        let depth = |projection: &LayeredPerspective| {
            let clip = projection.get_clip_from_view() * point;
            clip.z / clip.w
        };

        let front = depth(&layer_projection(LayerCamera::Front));
        let back = depth(&layer_projection(LayerCamera::Back));
        assert!(front < 0.0, "front layer kept depth {front}");
        assert!((0.0..=1.0).contains(&back), "back layer dropped depth {back}");
    }
}
