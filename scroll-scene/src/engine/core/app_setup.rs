use bevy::log::LogPlugin;
use bevy::prelude::*;

use crate::engine::camera::layer_camera::stage_layer_cameras;
use crate::engine::core::app_state::{FrameSet, SceneState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::scene::buildings::{advance_buildings, stage_ground};
use crate::engine::scene::builder::setup;
use crate::engine::scene::landmark::{advance_landmark, stage_landmark};
use crate::engine::scene::ornaments::advance_ornaments;
use crate::engine::systems::frame_context::{FrameContext, sample_frame_context};
use crate::engine::systems::resize::{ResizeTracker, apply_viewport_resize};
use crate::page::settings::SceneSettings;

#[cfg(target_arch = "wasm32")]
use crate::page::dom::install_dom_page;

#[cfg(not(target_arch = "wasm32"))]
use crate::page::native::{NativePage, scroll_native_page};

const LOG_FILTER: &str = "wgpu=error,naga=warn,scroll_scene=info";

pub fn create_app(settings: SceneSettings) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins(&settings))
        .init_state::<SceneState>()
        .init_resource::<FrameContext>()
        .init_resource::<ResizeTracker>()
        .insert_resource(settings);

    // One frame: sample, resize, advance, then stage both render passes.
    app.configure_sets(
        Update,
        (
            FrameSet::Sample,
            FrameSet::Resize,
            FrameSet::Advance,
            FrameSet::Stage,
        )
            .chain()
            .run_if(in_state(SceneState::Running)),
    );

    #[cfg(target_arch = "wasm32")]
    {
        app.add_systems(
            Startup,
            (install_dom_page, setup, transition_to_running).chain(),
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.init_resource::<NativePage>()
            .add_systems(Startup, (setup, transition_to_running).chain())
            .add_systems(Update, scroll_native_page.before(FrameSet::Sample));
    }

    app.add_systems(
        Update,
        (
            sample_frame_context.in_set(FrameSet::Sample),
            apply_viewport_resize.in_set(FrameSet::Resize),
            (advance_ornaments, advance_buildings, advance_landmark).in_set(FrameSet::Advance),
            (stage_layer_cameras, stage_ground, stage_landmark).in_set(FrameSet::Stage),
        ),
    );

    app
}

fn create_default_plugins(settings: &SceneSettings) -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config(settings)),
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.to_string(),
        ..default()
    };

    DefaultPlugins.set(window_config).set(log_config)
}
