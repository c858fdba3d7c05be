use bevy::prelude::*;
use serde::Deserialize;

/// Tuning parameters loaded from `assets/config.ron` at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct GameConfig {
    /// Horizontal extent of the terrain strip (world units).
    pub terrain_width: f32,
    /// Vertical displacement range used by the midpoint-displacement
    /// generator, halved at each subdivision level.
    pub terrain_roughness: f32,
    /// Number of midpoint subdivisions applied to the initial strip.
    pub terrain_detail: u32,
    /// Fixed RNG seed for the terrain; None means a fresh strip each run.
    pub terrain_seed: Option<u64>,
    pub initial_fuel: f32,
    /// Initial drift. Keep this nonzero: controls are disabled once the
    /// lander has stopped, and a lander spawned at rest counts as stopped.
    pub initial_velocity: (f32, f32),
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            terrain_width: 1000.0,
            terrain_roughness: 120.0,
            terrain_detail: 7,
            terrain_seed: None,
            initial_fuel: 10000.0,
            initial_velocity: (15.0, 0.0),
        }
    }
}

impl GameConfig {
    pub fn load() -> Self {
        match ron::de::from_str::<GameConfig>(include_str!("../assets/config.ron")) {
            Ok(config) => config,
            Err(err) => {
                warn!("failed to parse assets/config.ron ({err}), using defaults");
                GameConfig::default()
            }
        }
    }
}
