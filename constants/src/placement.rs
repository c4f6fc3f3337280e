use bevy::math::Vec3;
use std::ops::RangeInclusive;

/// Page pixels to world units (metres).
pub const PX_TO_M: f32 = 1.0 / 100.0;

/// Vertical field of view shared by both layer cameras, in degrees.
pub const CAMERA_FOV_Y_DEGREES: f32 = 45.0;

pub const CAMERA_NEAR: f32 = 0.1;

/// Distance the back layer reaches past the front layer's far plane.
pub const BACK_LAYER_FAR_EXTENSION: f32 = 1000.0;

/// Smallest allowed gap between near and far planes.
pub const MIN_CLIP_DEPTH: f32 = 0.01;

/// Vertical offsets of the ornaments, one ornament per entry.
pub const ORNAMENT_OFFSETS_Y: [f32; 5] = [0.0, -5.0, -10.0, -15.0, -20.0];

pub const ORNAMENT_MAJOR_RADIUS: f32 = 0.5;
pub const ORNAMENT_MINOR_RADIUS: f32 = 0.2;

/// Edge length of the square ground plane.
pub const GROUND_SIZE: f32 = 20.0;

/// World distance between neighbouring grid coordinates.
pub const BUILDING_SPAN: f32 = 2.0;
pub const BUILDING_IX_RANGE: RangeInclusive<i32> = -5..=5;
pub const BUILDING_IZ_RANGE: RangeInclusive<i32> = -10..=1;
pub const BUILDING_HEIGHT_MIN: f32 = 1.0;

pub const LANDMARK_RADIUS: f32 = 1.0;
pub const LANDMARK_HEIGHT: f32 = 2.0;

/// Where the landmark sits while the title is on screen.
pub const LANDMARK_RESTING_POSITION: Vec3 = Vec3::new(0.0, 0.0, -10.0);

/// Fraction of the viewport the followed landmark is inset from the top left.
pub const LANDMARK_FOLLOW_FRACTION: f32 = 0.3;
