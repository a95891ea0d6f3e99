//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Identity-based entity removal
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::boxes_overlap;
pub use events::{EntityKind, GameEvent};
pub use state::{EntityId, GamePhase, GameState, Pickup, Player, Pursuer, WeaponKind};
pub use tick::{TickInput, attack, start, tick};
