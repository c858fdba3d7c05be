use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod config;
mod constants;
mod input;
mod simulation;
mod terrain;
mod ui;
mod visualization;

use config::GameConfig;
use input::{read_input, ControlState, DebugOptions};
use simulation::GameWorld;
use ui::hud_system;
use visualization::{
    draw_debug, spawn_visualization, update_camera, update_lander_transform,
};

fn main() {
    let world = GameWorld::from_config(&GameConfig::load());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Lunar Lander".into(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .insert_resource(world)
        .insert_resource(ControlState::default())
        .insert_resource(DebugOptions::default())
        .add_systems(Startup, spawn_visualization)
        .add_systems(
            Update,
            (
                read_input,
                simulation_step,
                update_lander_transform,
                update_camera,
                draw_debug,
                hud_system,
            )
                .chain(),
        )
        .run();
}

fn simulation_step(
    time: Res<Time>,
    controls: Res<ControlState>,
    debug: Res<DebugOptions>,
    mut world: ResMut<GameWorld>,
) {
    if !debug.paused {
        world.update_state(&controls, time.delta_secs());
    }
}
