//! Data-driven game tuning
//!
//! Every gameplay parameter that is a plain number lives here so demo
//! front ends can retune the game from a JSON file without recompiling.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game parameters. Defaults mirror [`crate::consts`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena dimensions in pixels
    pub arena_width: f32,
    pub arena_height: f32,

    /// Entity bounding-box sizes (squares)
    pub player_size: f32,
    pub pursuer_size: f32,
    pub pickup_size: f32,

    /// Per-tick displacement
    pub player_speed: f32,
    pub pursuer_speed: f32,

    /// Spawn and expiry timing (whole seconds)
    pub pursuer_spawn_secs: u32,
    pub pickup_spawn_secs: u32,
    pub pickup_ttl_secs: u32,

    /// Padding that keeps pickup spawns away from arena edges
    pub pickup_margin: f32,

    /// Lives at session start
    pub starting_lives: u32,
    /// Pursuer hit points at spawn
    pub pursuer_health: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_size: PLAYER_SIZE,
            pursuer_size: PURSUER_SIZE,
            pickup_size: PICKUP_SIZE,
            player_speed: PLAYER_SPEED,
            pursuer_speed: PURSUER_SPEED,
            pursuer_spawn_secs: PURSUER_SPAWN_SECS,
            pickup_spawn_secs: PICKUP_SPAWN_SECS,
            pickup_ttl_secs: PICKUP_TTL_SECS,
            pickup_margin: PICKUP_MARGIN,
            starting_lives: STARTING_LIVES,
            pursuer_health: PURSUER_HEALTH,
        }
    }
}

impl GameConfig {
    /// Pursuer spawn interval in simulation ticks
    pub fn pursuer_spawn_ticks(&self) -> u32 {
        secs_to_ticks(self.pursuer_spawn_secs)
    }

    /// Pickup spawn interval in simulation ticks
    pub fn pickup_spawn_ticks(&self) -> u32 {
        secs_to_ticks(self.pickup_spawn_secs)
    }

    /// Pickup expiry countdown in simulation ticks
    pub fn pickup_ttl_ticks(&self) -> u32 {
        secs_to_ticks(self.pickup_ttl_secs)
    }

    /// Check that the parameters describe a playable arena.
    pub fn validate(&self) -> Result<(), String> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err("arena dimensions must be positive".into());
        }
        if self.player_size <= 0.0 || self.pursuer_size <= 0.0 || self.pickup_size <= 0.0 {
            return Err("entity sizes must be positive".into());
        }
        if self.player_size > self.arena_width || self.player_size > self.arena_height {
            return Err("player does not fit in the arena".into());
        }
        if self.player_speed <= 0.0 || self.pursuer_speed <= 0.0 {
            return Err("speeds must be positive".into());
        }
        if self.pursuer_spawn_secs == 0 || self.pickup_spawn_secs == 0 || self.pickup_ttl_secs == 0
        {
            return Err("spawn and expiry intervals must be at least one second".into());
        }
        if self.pickup_margin * 2.0 + self.pickup_size >= self.arena_width.min(self.arena_height) {
            return Err("pickup margin leaves no interior to spawn in".into());
        }
        if self.starting_lives == 0 {
            return Err("starting lives must be at least 1".into());
        }
        if self.pursuer_health <= 0 {
            return Err("pursuer health must be at least 1".into());
        }
        Ok(())
    }

    /// Load a config from a JSON file, falling back to defaults when the
    /// file is missing, malformed, or fails validation.
    pub fn load_or_default(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("config {}: {err}; using defaults", path.display());
                return Self::default();
            }
        };

        let config: Self = match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config {}: {err}; using defaults", path.display());
                return Self::default();
            }
        };

        match config.validate() {
            Ok(()) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("config {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
