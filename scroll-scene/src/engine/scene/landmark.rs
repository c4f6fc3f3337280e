use bevy::prelude::*;
use constants::motion::{LANDMARK_ROLL_RATE, LANDMARK_TRANSITION_DURATION};
use constants::placement::{
    LANDMARK_FOLLOW_FRACTION, LANDMARK_HEIGHT, LANDMARK_RADIUS, LANDMARK_RESTING_POSITION,
    PX_TO_M,
};
use constants::render_settings::LANDMARK_COLOUR;

use crate::engine::systems::frame_context::FrameContext;

#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    /// 0 at the resting pose, 1 at the followed pose. Always within [0, 1].
    pub ratio: f32,
    pub roll: f32,
}

/// Relax `ratio` toward 0 inside the title region and toward 1 outside it.
pub fn step_ratio(ratio: f32, in_title_region: bool, delta: f32) -> f32 {
    let step = delta / LANDMARK_TRANSITION_DURATION;
    if in_title_region {
        (ratio - step).max(0.0)
    } else {
        (ratio + step).min(1.0)
    }
}

/// Pose anchored to the top left of the current viewport.
pub fn followed_position(frame: &FrameContext) -> Vec3 {
    Vec3::new(
        frame.viewport.x * LANDMARK_FOLLOW_FRACTION * PX_TO_M,
        -(frame.scroll_offset + frame.viewport.y * LANDMARK_FOLLOW_FRACTION) * PX_TO_M,
        0.0,
    )
}

pub fn spawn_landmark(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cone {
            radius: LANDMARK_RADIUS,
            height: LANDMARK_HEIGHT,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: LANDMARK_COLOUR,
            ..default()
        })),
        Transform::from_translation(LANDMARK_RESTING_POSITION),
        Landmark::default(),
    ));
}

pub fn advance_landmark(frame: Res<FrameContext>, mut landmarks: Query<&mut Landmark>) {
    for mut landmark in &mut landmarks {
        landmark.ratio = step_ratio(landmark.ratio, frame.in_title_region(), frame.delta);
        landmark.roll += frame.delta * LANDMARK_ROLL_RATE;
    }
}

/// Place the landmark from the ratio as it stands after this frame's update.
pub fn stage_landmark(
    frame: Res<FrameContext>,
    mut landmarks: Query<(&Landmark, &mut Transform)>,
) {
    let followed = followed_position(&frame);
    for (landmark, mut transform) in &mut landmarks {
        transform.translation = LANDMARK_RESTING_POSITION.lerp(followed, landmark.ratio);
        transform.rotation = Quat::from_rotation_x(landmark.roll);
    }
}
