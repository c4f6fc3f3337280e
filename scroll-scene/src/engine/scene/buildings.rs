use bevy::prelude::*;
use constants::placement::{
    BUILDING_HEIGHT_MIN, BUILDING_IX_RANGE, BUILDING_IZ_RANGE, BUILDING_SPAN, GROUND_SIZE,
};
use constants::render_settings::{BUILDING_COLOUR, GROUND_COLOUR};

use crate::engine::systems::frame_context::FrameContext;

/// Anchor plane for the building grid.
#[derive(Component, Debug)]
pub struct Ground;

/// Grid coordinates of a building, fixed at spawn.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub ix: i32,
    pub iz: i32,
}

impl GridCoord {
    pub fn local_position(&self) -> Vec3 {
        Vec3::new(
            self.ix as f32 * BUILDING_SPAN,
            0.0,
            self.iz as f32 * BUILDING_SPAN,
        )
    }
}

/// Vertical scale of the building at (`ix`, `iz`), in `[1, height_max]`.
///
/// The `ix` wave carries a zero time factor, so every column keeps its phase
/// while rows ripple with `time`.
pub fn building_height(ix: i32, iz: i32, height_max: f32, time: f32) -> f32 {
    let column = (ix as f32 + time * 0.0).sin() * 0.5 + 0.5;
    let row = (iz as f32 + time).cos() * 0.5 + 0.5;
    column * row * (height_max - BUILDING_HEIGHT_MIN) + BUILDING_HEIGHT_MIN
}

/// Every grid coordinate, row by row.
pub fn grid_coords() -> impl Iterator<Item = GridCoord> {
    BUILDING_IZ_RANGE.flat_map(|iz| BUILDING_IX_RANGE.map(move |ix| GridCoord { ix, iz }))
}

/// Spawn the ground plane with one child building per grid coordinate.
///
/// The cube mesh is shifted up by half its height so scaling grows it from
/// the ground instead of through its centre.
pub fn spawn_ground_with_buildings(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> usize {
    let ground_mesh = meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE));
    let ground_material = materials.add(StandardMaterial {
        base_color: GROUND_COLOUR,
        ..default()
    });

    let building_mesh =
        meshes.add(Mesh::from(Cuboid::new(1.0, 1.0, 1.0)).translated_by(Vec3::Y * 0.5));
    let building_material = materials.add(StandardMaterial {
        base_color: BUILDING_COLOUR,
        ..default()
    });

    let mut count = 0;
    commands
        .spawn((
            Mesh3d(ground_mesh),
            MeshMaterial3d(ground_material),
            Transform::IDENTITY,
            Ground,
        ))
        .with_children(|ground| {
            for coord in grid_coords() {
                ground.spawn((
                    Mesh3d(building_mesh.clone()),
                    MeshMaterial3d(building_material.clone()),
                    Transform::from_translation(coord.local_position()),
                    coord,
                ));
                count += 1;
            }
        });

    count
}

pub fn advance_buildings(
    frame: Res<FrameContext>,
    mut buildings: Query<(&GridCoord, &mut Transform)>,
) {
    // Short documents would otherwise invert the height range.
    let height_max = frame.document_height_world().max(BUILDING_HEIGHT_MIN);

    for (coord, mut transform) in &mut buildings {
        transform.scale.y = building_height(coord.ix, coord.iz, height_max, frame.elapsed);
    }
}

/// Keep the ground anchored to the bottom of the page for this frame's camera distance.
pub fn stage_ground(frame: Res<FrameContext>, mut ground: Query<&mut Transform, With<Ground>>) {
    let y = -(frame.document_height_world() - frame.camera_distance() * 0.5);
    for mut transform in &mut ground {
        transform.translation.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::collections::HashSet;
    use std::f32::consts::TAU;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn origin_building_at_time_zero() {
        assert!((building_height(0, 0, 10.0, 0.0) - 5.5).abs() < EPSILON);
    }

    #[test]
    fn height_stays_in_range() {
        for height_max in [1.0_f32, 2.5, 10.0, 64.0] {
            for ix in -7..=7 {
                for iz in -12..=3 {
                    for step in 0..40 {
                        let t = step as f32 * 0.37 - 5.0;
                        let h = building_height(ix, iz, height_max, t);
                        assert!(h >= BUILDING_HEIGHT_MIN - EPSILON, "{h} below min");
                        assert!(h <= height_max + EPSILON, "{h} above {height_max}");
                    }
                }
            }
        }
    }

    #[test]
    fn height_is_periodic_in_time() {
        for (ix, iz) in [(0, 0), (3, -4), (-5, 1)] {
            let a = building_height(ix, iz, 12.0, 1.3);
            let b = building_height(ix, iz, 12.0, 1.3 + TAU);
            assert!((a - b).abs() < 1e-3);
        }
    }

    #[test]
    fn row_and_time_shift_cancel() {
        // The row wave depends on iz + time only.
        let a = building_height(2, 0, 12.0, 1.0);
        let b = building_height(2, 1, 12.0, 0.0);
        assert!((a - b).abs() < EPSILON);
    }

    // The column wave has a zero time factor: each column keeps a fixed phase.
    // Flagged here in case the freeze is ever meant to animate.
    #[test]
    fn column_wave_is_frozen_in_time() {
        let iz = 0;
        for ix in -5..=5 {
            // At time = 2π·k - iz the row term is at its peak, so the result
            // isolates the column term.
            let first = building_height(ix, iz, 10.0, 0.0);
            let later = building_height(ix, iz, 10.0, TAU * 3.0);
            assert!((first - later).abs() < 1e-3);
            let column = (ix as f32).sin() * 0.5 + 0.5;
            assert!((first - (column * 9.0 + 1.0)).abs() < EPSILON);
        }
    }

    #[test]
    fn grid_coordinates_are_unique() {
        let coords: Vec<GridCoord> = grid_coords().collect();
        let unique: HashSet<GridCoord> = coords.iter().copied().collect();
        assert_eq!(coords.len(), 11 * 12);
        assert_eq!(unique.len(), coords.len());
    }

    #[test]
    fn buildings_are_spaced_by_span() {
        let coord = GridCoord { ix: -5, iz: 1 };
        assert_eq!(coord.local_position(), Vec3::new(-10.0, 0.0, 2.0));
    }

    #[test]
    fn advance_scales_buildings_from_document_height() {
        let mut world = World::new();
        world.insert_resource(FrameContext {
            viewport: Vec2::new(800.0, 600.0),
            document_height: 1000.0,
            elapsed: 0.0,
            ..default()
        });
        let building = world
            .spawn((GridCoord { ix: 0, iz: 0 }, Transform::default()))
            .id();

        world.run_system_once(advance_buildings).unwrap();

        let scale = world.get::<Transform>(building).unwrap().scale;
        assert!((scale.y - 5.5).abs() < EPSILON);
        assert_eq!(scale.x, 1.0);
    }

    #[test]
    fn ground_tracks_document_and_camera() {
        let mut world = World::new();
        let frame = FrameContext {
            viewport: Vec2::new(800.0, 600.0),
            document_height: 3000.0,
            ..default()
        };
        world.insert_resource(frame);
        let ground = world.spawn((Ground, Transform::default())).id();

        world.run_system_once(stage_ground).unwrap();

        let y = world.get::<Transform>(ground).unwrap().translation.y;
        assert!((y - -(30.0 - frame.camera_distance() * 0.5)).abs() < EPSILON);
    }
}
