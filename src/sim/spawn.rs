//! Pursuer and pickup spawning
//!
//! Pursuers appear on a uniformly chosen arena edge, offset outward so they
//! start fully outside the visible arena. Pickups appear uniformly in the
//! interior, padded away from the edges, with their expiry countdown armed
//! at spawn time.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::events::{EntityKind, GameEvent};
use super::state::{GameState, Pickup, Pursuer, WeaponKind};
use crate::config::GameConfig;

/// Spawn one pursuer on a random arena edge.
pub fn spawn_pursuer(state: &mut GameState, config: &GameConfig) {
    let pos = pursuer_spawn_pos(&mut state.rng, config);
    let id = state.next_entity_id();
    state.pursuers.push(Pursuer {
        id,
        pos,
        health: config.pursuer_health,
    });
    state.push_event(GameEvent::EntityCreated {
        id,
        kind: EntityKind::Pursuer,
        pos,
        size: config.pursuer_size,
    });
    log::debug!("pursuer {id} spawned at ({:.0}, {:.0})", pos.x, pos.y);
}

/// Spawn one pickup of a uniformly chosen weapon kind.
pub fn spawn_pickup(state: &mut GameState, config: &GameConfig) {
    let kind = WeaponKind::ALL[state.rng.random_range(0..WeaponKind::ALL.len())];
    let pos = pickup_spawn_pos(&mut state.rng, config);
    let id = state.next_entity_id();
    state.pickups.push(Pickup {
        id,
        pos,
        kind,
        ttl_ticks: config.pickup_ttl_ticks(),
    });
    state.push_event(GameEvent::EntityCreated {
        id,
        kind: EntityKind::Pickup(kind),
        pos,
        size: config.pickup_size,
    });
    log::debug!("pickup {id} ({}) spawned at ({:.0}, {:.0})", kind.name(), pos.x, pos.y);
}

/// Uniform position on one of the four edges, one body-size outside the
/// arena on the perpendicular axis.
fn pursuer_spawn_pos(rng: &mut Pcg32, config: &GameConfig) -> Vec2 {
    let size = config.pursuer_size;
    match rng.random_range(0..4u8) {
        // top
        0 => Vec2::new(rng.random_range(0.0..config.arena_width - size), -size),
        // right
        1 => Vec2::new(
            config.arena_width,
            rng.random_range(0.0..config.arena_height - size),
        ),
        // bottom
        2 => Vec2::new(
            rng.random_range(0.0..config.arena_width - size),
            config.arena_height,
        ),
        // left
        _ => Vec2::new(-size, rng.random_range(0.0..config.arena_height - size)),
    }
}

/// Uniform interior position, padded on all sides.
fn pickup_spawn_pos(rng: &mut Pcg32, config: &GameConfig) -> Vec2 {
    let margin = config.pickup_margin;
    Vec2::new(
        margin + rng.random_range(0.0..config.arena_width - config.pickup_size - margin * 2.0),
        margin + rng.random_range(0.0..config.arena_height - config.pickup_size - margin * 2.0),
    )
}
