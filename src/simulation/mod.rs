use bevy::log::info;
use bevy::math::Vec2;
use bevy::prelude::Resource;

mod lander;

pub use lander::Lander;

use crate::config::GameConfig;
use crate::constants::{BOTTOM_SPACE, LANDING_DISTANCE, SCREEN_ASPECT, ZOOM_RADIUS};
use crate::input::ControlState;
use crate::terrain::Terrain;

/// Landing outcome tiers. Score stays 0 for a catastrophic crash.
pub const SCORE_PERFECT: i32 = 1000;
pub const SCORE_HARD: i32 = 100;

/// One game session: the world owns the lander and the terrain and drives
/// them each frame until a landing or crash resolves the session.
#[derive(Debug, Clone, Resource)]
pub struct GameWorld {
    pub lander: Lander,
    pub terrain: Terrain,
    pub score: i32,
    pub elapsed_seconds: f32,
    pub time_running: bool,
    /// Recomputed every frame from terrain proximity; no hysteresis.
    pub zoom_view: bool,
    /// Velocity snapshot taken on the frame the landing/crash is detected.
    pub landing_horizontal_speed: f32,
    pub landing_vertical_speed: f32,
}

/// Camera selection for the frame: a centre and visible half-width in world
/// units, derived from the zoom flag, terrain bounds, and lander position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub center: Vec2,
    pub half_width: f32,
}

impl GameWorld {
    pub fn new(lander: Lander, terrain: Terrain) -> Self {
        Self {
            lander,
            terrain,
            score: 0,
            elapsed_seconds: 0.0,
            time_running: true,
            zoom_view: false,
            landing_horizontal_speed: 0.0,
            landing_vertical_speed: 0.0,
        }
    }

    /// Fresh session with a generated terrain strip, the lander spawned
    /// high over the middle of it with the configured drift and fuel.
    pub fn from_config(config: &GameConfig) -> Self {
        let terrain = Terrain::generate(config);
        let max_x = terrain.max_x();
        let max_y = world_max_y(terrain.min_x(), max_x);
        let (vx, vy) = config.initial_velocity;
        let lander = Lander::new(
            Vec2::new(0.5 * max_x, 0.9 * max_y),
            Vec2::new(vx, vy),
            config.initial_fuel,
        );
        Self::new(lander, terrain)
    }

    // World extremes (world coordinates).

    pub fn min_x(&self) -> f32 {
        0.0
    }

    pub fn max_x(&self) -> f32 {
        self.terrain.max_x()
    }

    pub fn min_y(&self) -> f32 {
        0.0
    }

    pub fn max_y(&self) -> f32 {
        world_max_y(self.terrain.min_x(), self.terrain.max_x())
    }

    /// Advances the session by one frame.
    ///
    /// Controls are only applied while the lander is still moving; once it
    /// has stopped on the terrain the session is resolved and this becomes
    /// a no-op apart from the (frozen) clock and zoom recomputation.
    pub fn update_state(&mut self, controls: &ControlState, dt: f32) {
        if self.time_running {
            self.elapsed_seconds += dt;
        }

        // A stopped lander has landed; its thrusters stay disabled.
        if !(self.lander.velocity.x == 0.0 && self.lander.velocity.y == 0.0) {
            if controls.rotate_cw {
                self.lander.rotate_cw(dt);
            }
            if controls.rotate_ccw {
                self.lander.rotate_ccw(dt);
            }
            if controls.thrust {
                self.lander.add_thrust(dt);
            }
        }

        let (min_x, max_x) = (self.min_x(), self.max_x());
        self.lander.update_pose(dt, min_x, max_x);

        let centre = self.lander.centre_position();
        let closest = self.terrain.find_closest_point(centre);
        let closest_distance = centre.distance(closest);

        self.zoom_view = closest_distance < ZOOM_RADIUS;

        if closest_distance < LANDING_DISTANCE {
            // Velocity zeroes once stopped, so a nonzero horizontal speed
            // marks the first frame of contact. The snapshot and score are
            // taken exactly once.
            if self.lander.velocity.x != 0.0 {
                self.landing_horizontal_speed = self.lander.velocity.x;
                self.landing_vertical_speed = self.lander.velocity.y;
                self.score = classify_landing(
                    self.landing_horizontal_speed,
                    self.landing_vertical_speed,
                );
                info!(
                    "touchdown: vx={:.1} vy={:.1} score={}",
                    self.landing_horizontal_speed, self.landing_vertical_speed, self.score
                );
            }

            self.lander.stop();
            self.time_running = false;
        }
    }

    /// Wide view while the lander is far from the ground, zoomed view
    /// centred on the lander when it is close.
    pub fn view_transform(&self) -> ViewTransform {
        if self.zoom_view {
            ViewTransform {
                center: self.lander.centre_position(),
                half_width: ZOOM_RADIUS,
            }
        } else {
            // Maps the full terrain width onto the viewport, with the
            // terrain bottom BOTTOM_SPACE above the viewport bottom. The
            // camera keeps the window aspect, so the visible half-height is
            // half_width / SCREEN_ASPECT and the vertical placement has to
            // be derived from that, not from the half-width.
            let half_width = (self.terrain.max_x() - self.terrain.min_x()) / 2.0;
            let half_height = half_width / SCREEN_ASPECT;
            ViewTransform {
                center: Vec2::new(
                    (self.terrain.min_x() + self.terrain.max_x()) / 2.0,
                    self.terrain.min_y() + (1.0 - BOTTOM_SPACE) * half_height,
                ),
                half_width,
            }
        }
    }

    /// Height of the lander centre above the surface, clamped at 0 for the
    /// HUD readout.
    pub fn altitude(&self) -> f32 {
        let centre = self.lander.centre_position();
        (centre.y - self.terrain.find_height_at_x(centre.x)).max(0.0)
    }

    pub fn closest_terrain_point(&self) -> Vec2 {
        self.terrain.find_closest_point(self.lander.centre_position())
    }

    /// True once the session has resolved into a landing or crash.
    pub fn landed(&self) -> bool {
        self.lander.velocity.x == 0.0 && self.lander.velocity.y.abs() < 0.1
    }

    pub fn reset_lander(&mut self) {
        info!("session reset");
        self.lander.reset();
        self.score = 0;
        self.time_running = true;
        self.elapsed_seconds = 0.0;
    }
}

fn world_max_y(terrain_min_x: f32, terrain_max_x: f32) -> f32 {
    (terrain_max_x - terrain_min_x) / SCREEN_ASPECT * (2.0 - BOTTOM_SPACE) / 2.0
}

/// Scores a touchdown from the velocity at first contact. Evaluated in
/// order, first match wins. The second tier duplicates the 1000-point
/// score of the first; that matches the original game's literal behaviour
/// and is kept as-is rather than guessing an intended lower value.
pub fn classify_landing(vx: f32, vy: f32) -> i32 {
    if vy.abs() < 1.0 && vx.abs() < 0.5 {
        SCORE_PERFECT
    } else if vy.abs() < 4.0 && vx.abs() < 2.0 {
        SCORE_PERFECT
    } else if vy.abs() < 10.0 && vx.abs() < 10.0 {
        SCORE_HARD
    } else {
        0
    }
}
