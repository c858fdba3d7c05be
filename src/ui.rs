use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::input::DebugOptions;
use crate::simulation::{GameWorld, SCORE_HARD, SCORE_PERFECT};

const HUD_COLOR: egui::Color32 = egui::Color32::WHITE;

fn hud_text(ui: &mut egui::Ui, size: f32, text: String) {
    ui.label(
        egui::RichText::new(text)
            .monospace()
            .size(size)
            .color(HUD_COLOR),
    );
}

/// Arrow glyphs matching the original HUD: direction of travel next to the
/// absolute speed value.
fn horizontal_arrow(vx: f32) -> &'static str {
    if vx > 0.0 {
        "->"
    } else {
        "<-"
    }
}

fn vertical_arrow(vy: f32) -> &'static str {
    if vy > 0.0 {
        "^"
    } else {
        "v"
    }
}

fn outcome_message(score: i32) -> &'static str {
    match score {
        SCORE_PERFECT => "SUCCESSFUL LANDING",
        // The 250-point tier is unreachable with the current score table
        // but its message is kept for parity with the original HUD.
        250 => "YOU HAD A ROUGH LANDING\nTHE DAMAGE APPEARS TO BE REPAIRABLE",
        SCORE_HARD => "YOU LANDED HARD\nYOU ARE HOPELESSLY MAROONED",
        _ => "CATASTROPHIC CRASH",
    }
}

pub fn hud_system(
    mut contexts: EguiContexts,
    world: Res<GameWorld>,
    debug: Res<DebugOptions>,
) {
    let ctx = contexts.ctx_mut();

    egui::Area::new(egui::Id::new("hud-title"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 20.0])
        .show(ctx, |ui| {
            hud_text(ui, 28.0, "LUNAR LANDER".to_string());
            if debug.paused {
                hud_text(ui, 18.0, "PAUSED".to_string());
            }
        });

    // Score, time, and fuel on the left.
    egui::Area::new(egui::Id::new("hud-left"))
        .anchor(egui::Align2::LEFT_TOP, [40.0, 60.0])
        .show(ctx, |ui| {
            hud_text(ui, 16.0, format!("SCORE {}", world.score));
            hud_text(ui, 16.0, format!("TIME {:.1}", world.elapsed_seconds));
            hud_text(ui, 16.0, format!("FUEL {:.1}", world.lander.fuel));
        });

    // Altitude and speeds on the right.
    egui::Area::new(egui::Id::new("hud-right"))
        .anchor(egui::Align2::RIGHT_TOP, [-40.0, 60.0])
        .show(ctx, |ui| {
            let velocity = world.lander.velocity;
            hud_text(ui, 16.0, format!("ALTITUDE {:.1} m", world.altitude()));
            hud_text(
                ui,
                16.0,
                format!(
                    "HORIZONTAL SPEED {:.1} {}",
                    velocity.x.abs(),
                    horizontal_arrow(velocity.x)
                ),
            );
            hud_text(
                ui,
                16.0,
                format!(
                    "VERTICAL SPEED {:.1} {}",
                    velocity.y.abs(),
                    vertical_arrow(velocity.y)
                ),
            );
        });

    if world.landed() {
        egui::Area::new(egui::Id::new("hud-outcome"))
            .anchor(egui::Align2::CENTER_CENTER, [0.0, -60.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    hud_text(ui, 24.0, outcome_message(world.score).to_string());
                    hud_text(
                        ui,
                        16.0,
                        format!(
                            "LANDING HORIZONTAL SPEED: {:.1} {}",
                            world.landing_horizontal_speed.abs(),
                            horizontal_arrow(world.landing_horizontal_speed)
                        ),
                    );
                    hud_text(
                        ui,
                        16.0,
                        format!(
                            "LANDING VERTICAL SPEED: {:.1} {}",
                            world.landing_vertical_speed.abs(),
                            vertical_arrow(world.landing_vertical_speed)
                        ),
                    );
                    hud_text(ui, 14.0, "PRESS R TO PLAY AGAIN".to_string());
                });
            });
    }
}
