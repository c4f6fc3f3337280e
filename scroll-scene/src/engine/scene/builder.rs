use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, AMBIENT_COLOUR, POINT_LIGHT_INTENSITY, POINT_LIGHT_POSITION,
    POINT_LIGHT_RANGE,
};

use super::buildings::spawn_ground_with_buildings;
use super::landmark::spawn_landmark;
use super::ornaments::spawn_ornaments;
use crate::engine::camera::layer_camera::spawn_layer_cameras;
use crate::engine::core::window_config::create_front_window;
use crate::page::settings::SceneSettings;

/// Startup system building the whole scene exactly once.
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
) {
    let front_window = commands.spawn(create_front_window(&settings)).id();
    spawn_layer_cameras(&mut commands, front_window);
    spawn_lighting(&mut commands);
    build_scene(&mut commands, &mut meshes, &mut materials, &settings);
}

pub fn build_scene(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &SceneSettings,
) {
    let ornaments = spawn_ornaments(commands, meshes, materials);
    let buildings = spawn_ground_with_buildings(commands, meshes, materials);
    if settings.landmark {
        spawn_landmark(commands, meshes, materials);
    }

    info!(
        "Scene built: {} ornaments, {} buildings, landmark {}",
        ornaments,
        buildings,
        if settings.landmark { "enabled" } else { "disabled" }
    );
}

fn spawn_lighting(commands: &mut Commands) {
    commands.insert_resource(AmbientLight {
        color: AMBIENT_COLOUR,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        PointLight {
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(POINT_LIGHT_POSITION),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::buildings::{GridCoord, Ground};
    use crate::engine::scene::landmark::Landmark;
    use crate::engine::scene::ornaments::Ornament;
    use bevy::ecs::system::RunSystemOnce;
    use constants::placement::ORNAMENT_OFFSETS_Y;

    fn built_world(settings: SceneSettings) -> World {
        let mut world = World::new();
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world
            .run_system_once(
                move |mut commands: Commands,
                      mut meshes: ResMut<Assets<Mesh>>,
                      mut materials: ResMut<Assets<StandardMaterial>>| {
                    build_scene(&mut commands, &mut meshes, &mut materials, &settings);
                },
            )
            .unwrap();
        world
    }

    #[test]
    fn builds_ornaments_at_their_offsets() {
        let mut world = built_world(SceneSettings::default());
        let mut offsets: Vec<(usize, f32)> = world
            .query::<(&Ornament, &Transform)>()
            .iter(&world)
            .map(|(ornament, transform)| (ornament.index, transform.translation.y))
            .collect();
        offsets.sort_by_key(|(index, _)| *index);

        assert_eq!(offsets.len(), ORNAMENT_OFFSETS_Y.len());
        for (index, y) in offsets {
            assert_eq!(y, ORNAMENT_OFFSETS_Y[index]);
        }
    }

    #[test]
    fn buildings_hang_off_the_ground() {
        let mut world = built_world(SceneSettings::default());
        let ground = world
            .query_filtered::<Entity, With<Ground>>()
            .single(&world)
            .unwrap();

        let parents: Vec<Entity> = world
            .query_filtered::<&ChildOf, With<GridCoord>>()
            .iter(&world)
            .map(|child_of| child_of.parent())
            .collect();

        assert_eq!(parents.len(), 132);
        assert!(parents.iter().all(|parent| *parent == ground));
    }

    #[test]
    fn landmark_follows_settings() {
        let mut with = built_world(SceneSettings::default());
        assert_eq!(with.query::<&Landmark>().iter(&with).count(), 1);
        assert_eq!(with.query::<&Landmark>().single(&with).unwrap().ratio, 0.0);

        let mut without = built_world(SceneSettings {
            landmark: false,
            ..default()
        });
        assert_eq!(without.query::<&Landmark>().iter(&without).count(), 0);
    }
}
