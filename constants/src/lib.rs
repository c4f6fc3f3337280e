//! Fixed parameters shared by the scroll scene.
//!
//! Everything here is plain data: placement of the scene objects, motion
//! rates, colours and light placement, and the default page bindings.

/// World-space placement of cameras, ornaments, ground and buildings.
pub mod placement;

/// Angular and linear rates used by the per-frame updater.
pub mod motion;

/// Colours and light placement.
pub mod render_settings;

/// Default DOM bindings and native development-view stand-ins.
pub mod page;
