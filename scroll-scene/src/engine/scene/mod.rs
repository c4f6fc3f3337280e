//! Scene content and its per-frame motion.
//!
//! Every entity is spawned once by the builder; afterwards only transforms
//! and the typed per-object state change.

/// One-shot construction of lights and scene objects.
pub mod builder;

/// Ground plane and the procedurally heighted building grid parented to it.
pub mod buildings;

/// Scroll-reactive landmark that moves between a resting and a followed pose.
pub mod landmark;

/// Rotating ornaments drifting across the viewport.
pub mod ornaments;
