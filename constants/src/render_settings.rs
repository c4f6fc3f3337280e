use bevy::color::Color;
use bevy::math::Vec3;

pub const ORNAMENT_COLOUR: Color = Color::srgb(0.0, 1.0, 0.0);
pub const GROUND_COLOUR: Color = Color::WHITE;
pub const BUILDING_COLOUR: Color = Color::WHITE;
pub const LANDMARK_COLOUR: Color = Color::srgb(1.0, 1.0, 0.0);

pub const AMBIENT_COLOUR: Color = Color::srgb(0.25, 0.25, 0.25);
pub const AMBIENT_BRIGHTNESS: f32 = 200.0;

pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const POINT_LIGHT_RANGE: f32 = 100.0;
pub const POINT_LIGHT_INTENSITY: f32 = 1_000_000.0;
