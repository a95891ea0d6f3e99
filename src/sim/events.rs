//! Events emitted by the simulation
//!
//! The sim never talks to a renderer directly; each tick returns the events
//! it produced and the session forwards them across the renderer seam.

use glam::Vec2;

use super::state::{EntityId, WeaponKind};

/// What an entity is, for renderers choosing glyphs or sprites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Pursuer,
    Pickup(WeaponKind),
}

/// One observable state change.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    EntityCreated {
        id: EntityId,
        kind: EntityKind,
        pos: Vec2,
        size: f32,
    },
    EntityMoved {
        id: EntityId,
        pos: Vec2,
    },
    EntityRemoved {
        id: EntityId,
    },
    LivesChanged {
        lives: u32,
    },
    WeaponChanged {
        weapon: Option<WeaponKind>,
    },
    TimeChanged {
        secs: u64,
    },
    /// Transient attack cue; presentation only, no gameplay effect.
    AttackTriggered,
    GameEnded {
        final_secs: u64,
    },
    /// Clear all visual state before a (re)start.
    GameReset,
}
