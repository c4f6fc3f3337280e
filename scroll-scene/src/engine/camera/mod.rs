//! Layered camera rig for compositing the scene around DOM content.
//!
//! Two cameras share one transform each frame and differ only in their far
//! plane: the front camera clips at its own distance from the origin, the
//! back camera sees the whole scene.

/// Camera distance math, layer cameras and their per-frame staging.
pub mod layer_camera;

/// Finite reverse-Z perspective so each layer's far plane clips fragments.
pub mod layered_projection;
