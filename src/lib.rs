//! Horde Dodge - a top-down survival arena mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, combat)
//! - `session`: Game session lifecycle (start/tick/attack, renderer dispatch)
//! - `render`: Renderer seam - the core calls out, never reads back
//! - `config`: Data-driven game tuning

pub mod config;
pub mod render;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use render::{LogRenderer, NullRenderer, Renderer};
pub use session::Session;
pub use sim::{GamePhase, GameState, TickInput, WeaponKind};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Ticks per wall-clock second
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Entity bounding-box sizes (squares, top-left anchored)
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PURSUER_SIZE: f32 = 30.0;
    pub const PICKUP_SIZE: f32 = 25.0;

    /// Per-tick displacement
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PURSUER_SPEED: f32 = 1.0;

    /// Spawn and expiry timing (seconds)
    pub const PURSUER_SPAWN_SECS: u32 = 10;
    pub const PICKUP_SPAWN_SECS: u32 = 10;
    pub const PICKUP_TTL_SECS: u32 = 15;

    /// Padding that keeps pickups away from arena edges
    pub const PICKUP_MARGIN: f32 = 50.0;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 3;
    /// Hits to kill a pursuer with a damage-1 weapon
    pub const PURSUER_HEALTH: i32 = 2;

    /// Attack visual cue duration (0.5 s)
    pub const ATTACK_CUE_TICKS: u32 = 30;

    /// Convert a whole-second interval to simulation ticks
    #[inline]
    pub const fn secs_to_ticks(secs: u32) -> u32 {
        secs * TICKS_PER_SECOND
    }
}
