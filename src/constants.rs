use bevy::math::Vec2;

// The lander animation is not physically realistic: there is no mass that
// decreases with fuel and no rotational inertia, as in the original arcade
// game. Rotation is applied as a direct heading change and thrust as a
// fixed acceleration.

/// Rotation rate while a rotation key is held (radians/second).
pub const ROTATION_SPEED: f32 = 2.0;
/// Acceleration applied along the thrust direction (m/s^2).
pub const THRUST_ACCEL: f32 = 20.0;
/// Gravity on the moon (m/s^2).
pub const GRAVITY: Vec2 = Vec2::new(0.0, -1.6);
/// Lander width in world units. The real LM is about 6.7 m wide.
pub const LANDER_WIDTH: f32 = 10.0;

// Fuel costs are a flat amount per control invocation, not a rate integrated
// over dt. Frame-rate-dependent drain is part of the gameplay balance.
pub const ROTATIONAL_FUEL_CONSUMPTION: f32 = 20.0;
pub const THRUST_FUEL_CONSUMPTION: f32 = 100.0;

/// Distance to the nearest terrain point below which the camera zooms in.
pub const ZOOM_RADIUS: f32 = 50.0;
/// Distance to the nearest terrain point below which landing/crash is evaluated.
pub const LANDING_DISTANCE: f32 = 5.0;
/// Blank space kept below the terrain in the wide view (viewing coordinates).
pub const BOTTOM_SPACE: f32 = 0.1;
/// Horizontal screen-wrap margin (half the lander width) so the lander leaves
/// the screen fully before reappearing on the other side.
pub const WRAP_MARGIN: f32 = 10.0;

/// Width-to-height ratio of the game window.
pub const SCREEN_ASPECT: f32 = 1280.0 / 720.0;
