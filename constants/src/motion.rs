/// Ornament rotation about X, radians per second.
pub const ORNAMENT_PITCH_RATE: f32 = 0.3;

/// Ornament rotation about Y, radians per second.
pub const ORNAMENT_YAW_RATE: f32 = 1.0;

/// Leftward ornament drift, world units per second.
pub const ORNAMENT_DRIFT_SPEED: f32 = 3.0;

pub const LANDMARK_ROLL_RATE: f32 = 1.0;

/// Seconds the landmark takes to move fully between its two poses.
pub const LANDMARK_TRANSITION_DURATION: f32 = 0.5;
