use bevy::math::Vec2;

use crate::constants::{
    GRAVITY, ROTATIONAL_FUEL_CONSUMPTION, ROTATION_SPEED, THRUST_ACCEL, THRUST_FUEL_CONSUMPTION,
    WRAP_MARGIN,
};

/// Kinematic state of the player-controlled vehicle.
///
/// All control methods are safe no-ops once the fuel is exhausted, and fuel
/// never goes negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Lander {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading angle in radians; 0 is the reference heading.
    pub orientation: f32,
    /// Always 0 in this model: rotation is applied as a direct heading
    /// change per control tick, so the integrated term in `update_pose`
    /// is a no-op kept for fidelity with the original update rule.
    pub angular_velocity: f32,
    pub fuel: f32,

    initial_position: Vec2,
    initial_velocity: Vec2,
    initial_fuel: f32,
}

impl Lander {
    pub fn new(position: Vec2, velocity: Vec2, fuel: f32) -> Self {
        Self {
            position,
            velocity,
            orientation: 0.0,
            angular_velocity: 0.0,
            fuel,
            initial_position: position,
            initial_velocity: velocity,
            initial_fuel: fuel,
        }
    }

    pub fn centre_position(&self) -> Vec2 {
        self.position
    }

    pub fn rotate_cw(&mut self, dt: f32) {
        if self.fuel > 0.0 {
            self.orientation -= ROTATION_SPEED * dt;
            self.consume_fuel(ROTATIONAL_FUEL_CONSUMPTION);
        }
    }

    pub fn rotate_ccw(&mut self, dt: f32) {
        if self.fuel > 0.0 {
            self.orientation += ROTATION_SPEED * dt;
            self.consume_fuel(ROTATIONAL_FUEL_CONSUMPTION);
        }
    }

    /// Accelerates opposite the nose direction.
    pub fn add_thrust(&mut self, dt: f32) {
        if self.fuel > 0.0 {
            let angle = self.orientation + std::f32::consts::PI;
            let thrust_direction = Vec2::new(angle.cos(), angle.sin());
            self.velocity += THRUST_ACCEL * dt * thrust_direction;
            self.consume_fuel(THRUST_FUEL_CONSUMPTION);
        }
    }

    /// First-order Euler step, then horizontal screen wrap. The wrap margin
    /// keeps the lander fully off-screen before it reappears on the far
    /// side. Bounds come from the session so the lander carries no world
    /// reference of its own.
    pub fn update_pose(&mut self, dt: f32, min_x: f32, max_x: f32) {
        self.position += dt * self.velocity;
        self.orientation += dt * self.angular_velocity;
        self.velocity += dt * GRAVITY;

        if self.position.x > max_x + WRAP_MARGIN {
            self.position.x = min_x - WRAP_MARGIN;
        } else if self.position.x < min_x - WRAP_MARGIN {
            self.position.x = max_x + WRAP_MARGIN;
        }
    }

    /// Terminal state after landing or crashing: motion stops, the heading
    /// stays where it was.
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
        self.angular_velocity = 0.0;
    }

    pub fn reset(&mut self) {
        self.position = self.initial_position;
        self.velocity = self.initial_velocity;
        self.orientation = 0.0;
        self.angular_velocity = 0.0;
        self.fuel = self.initial_fuel;
    }

    fn consume_fuel(&mut self, amount: f32) {
        self.fuel = (self.fuel - amount).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn lander_with_fuel(fuel: f32) -> Lander {
        Lander::new(Vec2::new(500.0, 300.0), Vec2::new(15.0, 0.0), fuel)
    }

    #[test]
    fn controls_are_no_ops_without_fuel() {
        let mut lander = lander_with_fuel(0.0);
        let before = lander.clone();

        lander.rotate_cw(DT);
        lander.rotate_ccw(DT);
        lander.add_thrust(DT);

        assert_eq!(lander, before);
    }

    #[test]
    fn fuel_never_goes_negative() {
        let mut lander = lander_with_fuel(1.0);
        lander.add_thrust(DT);
        assert_eq!(lander.fuel, 0.0);

        let mut lander = lander_with_fuel(5.0);
        lander.rotate_cw(DT);
        assert_eq!(lander.fuel, 0.0);
    }

    #[test]
    fn rotation_scales_with_dt_but_fuel_cost_is_flat() {
        let mut slow = lander_with_fuel(1000.0);
        let mut fast = lander_with_fuel(1000.0);
        slow.rotate_ccw(0.1);
        fast.rotate_ccw(0.2);

        assert!((slow.orientation - ROTATION_SPEED * 0.1).abs() < 1e-6);
        assert!((fast.orientation - ROTATION_SPEED * 0.2).abs() < 1e-6);
        // Same cost per invocation regardless of dt.
        assert_eq!(slow.fuel, fast.fuel);
    }

    #[test]
    fn thrust_pushes_opposite_the_nose() {
        let mut lander = lander_with_fuel(1000.0);
        lander.velocity = Vec2::ZERO;
        lander.add_thrust(1.0);
        // orientation 0 means the thrust vector points along -x.
        assert!((lander.velocity.x + THRUST_ACCEL).abs() < 1e-4);
        assert!(lander.velocity.y.abs() < 1e-4);
    }

    #[test]
    fn update_pose_with_zero_dt_changes_nothing() {
        let mut lander = lander_with_fuel(100.0);
        let before = lander.clone();
        lander.update_pose(0.0, 0.0, 1000.0);
        assert_eq!(lander, before);
    }

    #[test]
    fn update_pose_integrates_gravity() {
        let mut lander = lander_with_fuel(100.0);
        lander.velocity = Vec2::ZERO;
        lander.update_pose(1.0, 0.0, 1000.0);
        assert_eq!(lander.velocity, GRAVITY);
    }

    #[test]
    fn wraps_past_the_right_edge() {
        let mut lander = lander_with_fuel(100.0);
        lander.position.x = 1011.0;
        lander.velocity = Vec2::ZERO;
        lander.update_pose(0.0, 0.0, 1000.0);
        assert_eq!(lander.position.x, -10.0);
    }

    #[test]
    fn wraps_past_the_left_edge() {
        let mut lander = lander_with_fuel(100.0);
        lander.position.x = -11.0;
        lander.velocity = Vec2::ZERO;
        lander.update_pose(0.0, 0.0, 1000.0);
        assert_eq!(lander.position.x, 1010.0);
    }

    #[test]
    fn stop_preserves_orientation() {
        let mut lander = lander_with_fuel(100.0);
        lander.rotate_ccw(0.5);
        let heading = lander.orientation;
        lander.stop();
        assert_eq!(lander.velocity, Vec2::ZERO);
        assert_eq!(lander.angular_velocity, 0.0);
        assert_eq!(lander.orientation, heading);
    }

    #[test]
    fn reset_restores_construction_state() {
        let mut lander = lander_with_fuel(100.0);
        let fresh = lander.clone();
        lander.add_thrust(DT);
        lander.rotate_cw(DT);
        lander.update_pose(2.0, 0.0, 1000.0);
        lander.reset();
        assert_eq!(lander, fresh);
    }
}
