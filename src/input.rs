use bevy::prelude::*;

use crate::simulation::GameWorld;

/// Pressed-state of the lander controls, polled once per frame. The arrow
/// keys match the original cabinet layout: right rotates clockwise, left
/// counter-clockwise, down fires the main thruster. The up arrow is
/// reserved and currently unbound.
#[derive(Debug, Clone, Copy, Default, Resource)]
pub struct ControlState {
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub thrust: bool,
}

/// Session-level toggles outside the simulation proper.
#[derive(Debug, Default, Resource)]
pub struct DebugOptions {
    pub paused: bool,
    /// Draw a line from the lander to the nearest terrain point.
    pub show_closest_point: bool,
}

pub fn read_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut controls: ResMut<ControlState>,
    mut debug: ResMut<DebugOptions>,
    mut world: ResMut<GameWorld>,
) {
    controls.rotate_cw = keys.pressed(KeyCode::ArrowRight);
    controls.rotate_ccw = keys.pressed(KeyCode::ArrowLeft);
    controls.thrust = keys.pressed(KeyCode::ArrowDown);

    if keys.just_pressed(KeyCode::KeyP) {
        debug.paused = !debug.paused;
    }
    if keys.just_pressed(KeyCode::KeyC) {
        debug.show_closest_point = !debug.show_closest_point;
    }
    if keys.just_pressed(KeyCode::KeyR) {
        world.reset_lander();
    }
}
