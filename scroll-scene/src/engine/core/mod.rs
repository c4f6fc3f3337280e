//! Core application setup and state management.
//!
//! Handles the application lifecycle, window configuration, the build/run
//! state transition and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Registers the scene builder, the frame sets and their ordering.
pub mod app_setup;

/// Scene state machine: building once, then running every frame.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds the back layer to the primary window and the front layer to a second one.
pub mod window_config;
