use bevy::prelude::*;
use constants::motion::{ORNAMENT_DRIFT_SPEED, ORNAMENT_PITCH_RATE, ORNAMENT_YAW_RATE};
use constants::placement::{ORNAMENT_MAJOR_RADIUS, ORNAMENT_MINOR_RADIUS, ORNAMENT_OFFSETS_Y};
use constants::render_settings::ORNAMENT_COLOUR;

use crate::engine::systems::frame_context::FrameContext;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ornament {
    /// Position in `ORNAMENT_OFFSETS_Y`.
    pub index: usize,
    pub pitch: f32,
    pub yaw: f32,
}

impl Ornament {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

/// Move `x` left by one frame of drift, wrapping to the right edge once it
/// passes the left edge of a viewport `width` world units wide.
pub fn drift_x(x: f32, delta: f32, width: f32) -> f32 {
    let half_width = width * 0.5;
    let moved = x - delta * ORNAMENT_DRIFT_SPEED;
    if moved < -half_width { half_width } else { moved }
}

pub fn spawn_ornaments(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> usize {
    let mesh = meshes.add(Torus {
        minor_radius: ORNAMENT_MINOR_RADIUS,
        major_radius: ORNAMENT_MAJOR_RADIUS,
    });
    let material = materials.add(StandardMaterial {
        base_color: ORNAMENT_COLOUR,
        ..default()
    });

    for (index, y) in ORNAMENT_OFFSETS_Y.iter().enumerate() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_xyz(0.0, *y, 0.0),
            Ornament::new(index),
        ));
    }

    ORNAMENT_OFFSETS_Y.len()
}

pub fn advance_ornaments(
    frame: Res<FrameContext>,
    mut ornaments: Query<(&mut Ornament, &mut Transform)>,
) {
    let delta = frame.delta;
    let width = frame.viewport_world().x;

    for (mut ornament, mut transform) in &mut ornaments {
        ornament.pitch += delta * ORNAMENT_PITCH_RATE;
        ornament.yaw += delta * ORNAMENT_YAW_RATE;
        transform.rotation = ornament.rotation();
        transform.translation.x = drift_x(transform.translation.x, delta, width);
    }
}
