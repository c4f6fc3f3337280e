//! Frame driver systems.
//!
//! Sampling of page signals at the top of each frame and viewport change
//! handling for both output surfaces.

/// Per-frame snapshot of page signals and time.
pub mod frame_context;

/// Viewport change detection and surface/camera reconfiguration.
pub mod resize;
