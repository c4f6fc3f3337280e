use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum SceneState {
    #[default]
    Building,
    Running,
}

/// Ordered phases of a single frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Capture page signals into `FrameContext`.
    Sample,
    /// Resize surfaces and cameras when the viewport changed.
    Resize,
    /// Advance ornaments, buildings and the landmark.
    Advance,
    /// Place cameras, ground and landmark for the two render passes.
    Stage,
}

// Last Startup system; per-frame sets are gated on Running.
pub fn transition_to_running(mut next_state: ResMut<NextState<SceneState>>) {
    info!("→ Scene built, transitioning to Running state");
    next_state.set(SceneState::Running);
}
