//! Fixed timestep simulation tick
//!
//! One `tick()` call is one frame boundary: it advances movement, resolves
//! collisions, and steps every periodic activity (clock, spawners, pickup
//! expiry, attack cue). Nothing else mutates the state, so the whole frame
//! is atomic and no locking is ever needed.

use glam::Vec2;

use super::collision::boxes_overlap;
use super::events::{EntityKind, GameEvent};
use super::spawn::{spawn_pickup, spawn_pursuer};
use super::state::{EntityId, GamePhase, GameState};
use crate::config::GameConfig;
use crate::consts::{ATTACK_CUE_TICKS, TICKS_PER_SECOND};

/// How close a pursuer must get before the idle-mode autopilot flees
const FLEE_RADIUS: f32 = 150.0;

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held movement keys; both axes apply independently, so diagonal
    /// movement runs at full per-axis speed (not normalized).
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// One-shot attack trigger
    pub attack: bool,
    /// Demo mode: the sim synthesizes its own input
    pub idle_mode: bool,
}

/// Start (or restart) a session.
///
/// Valid from Idle or Ended; a no-op while Running. Resets all session
/// state, emits the reset/creation events, and performs the immediate
/// first pursuer spawn.
pub fn start(state: &mut GameState, config: &GameConfig) -> Vec<GameEvent> {
    if state.phase == GamePhase::Running {
        return Vec::new();
    }

    state.reset(config);
    state.phase = GamePhase::Running;

    state.push_event(GameEvent::GameReset);
    state.push_event(GameEvent::EntityCreated {
        id: state.player.id,
        kind: EntityKind::Player,
        pos: state.player.pos,
        size: config.player_size,
    });
    state.push_event(GameEvent::LivesChanged {
        lives: state.player.lives,
    });
    state.push_event(GameEvent::WeaponChanged { weapon: None });
    state.push_event(GameEvent::TimeChanged { secs: 0 });

    spawn_pursuer(state, config);
    log::info!("session started (seed {})", state.seed);

    state.take_events()
}

/// Advance the session by one frame.
///
/// Fixed order: player movement, pursuer movement, pursuer contacts,
/// pickup contacts, then the periodic counters. A no-op unless Running.
pub fn tick(state: &mut GameState, input: &TickInput, config: &GameConfig) -> Vec<GameEvent> {
    if state.phase != GamePhase::Running {
        return state.take_events();
    }

    let input = if input.idle_mode {
        auto_input(state, config)
    } else {
        *input
    };

    // The discrete attack trigger arrives with the frame's input and is
    // applied before movement.
    if input.attack {
        attack_in_place(state, config);
    }

    state.time_ticks += 1;

    move_player(state, &input, config);
    move_pursuers(state, config);

    resolve_pursuer_contacts(state, config);
    if state.phase == GamePhase::Running {
        resolve_pickup_contacts(state, config);
        advance_clock(state);
        advance_spawners(state, config);
        expire_pickups(state);
        if state.attack_cue_ticks > 0 {
            state.attack_cue_ticks -= 1;
        }
    }

    state.take_events()
}

/// Area attack with the equipped weapon.
///
/// No-op without a weapon, with a decoy equipped, or outside Running.
/// Every pursuer within `range + player_size` takes the weapon's damage;
/// pursuers at zero health are destroyed in the same pass.
pub fn attack(state: &mut GameState, config: &GameConfig) -> Vec<GameEvent> {
    attack_in_place(state, config);
    state.take_events()
}

fn attack_in_place(state: &mut GameState, config: &GameConfig) {
    if state.phase != GamePhase::Running {
        return;
    }
    let Some(kind) = state.player.weapon else {
        return;
    };
    let damage = kind.damage();
    if damage == 0 {
        return; // decoys swing at nothing
    }

    state.attack_cue_ticks = ATTACK_CUE_TICKS;
    state.push_event(GameEvent::AttackTriggered);

    let origin = state.player.pos;
    let reach = kind.range() + config.player_size;
    let mut destroyed: Vec<EntityId> = Vec::new();
    for pursuer in &mut state.pursuers {
        if pursuer.pos.distance(origin) <= reach {
            pursuer.health -= damage;
            if pursuer.health <= 0 {
                destroyed.push(pursuer.id);
            }
        }
    }
    for id in destroyed {
        state.remove_pursuer(id);
        state.push_event(GameEvent::EntityRemoved { id });
        log::debug!("pursuer {id} destroyed by {}", kind.name());
    }
}

/// Apply held movement keys, one fixed step per axis, clamped to bounds.
fn move_player(state: &mut GameState, input: &TickInput, config: &GameConfig) {
    let before = state.player.pos;
    let mut pos = before;

    if input.left {
        pos.x -= config.player_speed;
    }
    if input.right {
        pos.x += config.player_speed;
    }
    if input.up {
        pos.y -= config.player_speed;
    }
    if input.down {
        pos.y += config.player_speed;
    }

    pos.x = pos.x.clamp(0.0, config.arena_width - config.player_size);
    pos.y = pos.y.clamp(0.0, config.arena_height - config.player_size);

    if pos != before {
        state.player.pos = pos;
        state.push_event(GameEvent::EntityMoved {
            id: state.player.id,
            pos,
        });
    }
}

/// Direct pursuit: every pursuer steps along the normalized vector toward
/// the player. A pursuer exactly on the player does not move (no NaN).
fn move_pursuers(state: &mut GameState, config: &GameConfig) {
    let target = state.player.pos;
    let mut moved: Vec<(EntityId, Vec2)> = Vec::new();

    for pursuer in &mut state.pursuers {
        let delta = target - pursuer.pos;
        let dist = delta.length();
        if dist > 0.0 {
            pursuer.pos += delta / dist * config.pursuer_speed;
            moved.push((pursuer.id, pursuer.pos));
        }
    }

    for (id, pos) in moved {
        state.push_event(GameEvent::EntityMoved { id, pos });
    }
}

/// Pass 1: every frame-start pursuer overlapping the player costs one life
/// and is destroyed. The session ends the moment lives reach zero.
fn resolve_pursuer_contacts(state: &mut GameState, config: &GameConfig) {
    let hits: Vec<EntityId> = state
        .pursuers
        .iter()
        .filter(|p| boxes_overlap(state.player.pos, config.player_size, p.pos, config.pursuer_size))
        .map(|p| p.id)
        .collect();

    for id in hits {
        state.remove_pursuer(id);
        state.push_event(GameEvent::EntityRemoved { id });

        if state.player.lives > 0 {
            state.player.lives -= 1;
            let lives = state.player.lives;
            state.push_event(GameEvent::LivesChanged { lives });
            if lives == 0 {
                end_session(state);
            }
        }
    }
}

/// Pass 2: every frame-start pickup overlapping the player is consumed;
/// the last one processed ends up equipped (no stacking).
fn resolve_pickup_contacts(state: &mut GameState, config: &GameConfig) {
    let taken: Vec<EntityId> = state
        .pickups
        .iter()
        .filter(|t| boxes_overlap(state.player.pos, config.player_size, t.pos, config.pickup_size))
        .map(|t| t.id)
        .collect();

    for id in taken {
        let Some(kind) = state.pickups.iter().find(|t| t.id == id).map(|t| t.kind) else {
            continue;
        };
        state.remove_pickup(id);
        state.player.weapon = Some(kind);
        state.push_event(GameEvent::EntityRemoved { id });
        state.push_event(GameEvent::WeaponChanged { weapon: Some(kind) });
        log::debug!("picked up {}", kind.name());
    }
}

/// 1 Hz clock; elapsed seconds feed the HUD only.
fn advance_clock(state: &mut GameState) {
    state.clock_ticks += 1;
    if state.clock_ticks >= TICKS_PER_SECOND {
        state.clock_ticks = 0;
        state.elapsed_secs += 1;
        state.push_event(GameEvent::TimeChanged {
            secs: state.elapsed_secs,
        });
    }
}

/// Independent periodic spawners, rearmed after each spawn.
fn advance_spawners(state: &mut GameState, config: &GameConfig) {
    state.pursuer_spawn_ticks -= 1;
    if state.pursuer_spawn_ticks == 0 {
        spawn_pursuer(state, config);
        state.pursuer_spawn_ticks = config.pursuer_spawn_ticks();
    }

    state.pickup_spawn_ticks -= 1;
    if state.pickup_spawn_ticks == 0 {
        spawn_pickup(state, config);
        state.pickup_spawn_ticks = config.pickup_spawn_ticks();
    }
}

/// Count down every pickup's expiry; removal is by id, so a pickup consumed
/// earlier in the session can never be double-removed here.
fn expire_pickups(state: &mut GameState) {
    let mut expired: Vec<EntityId> = Vec::new();
    for pickup in &mut state.pickups {
        pickup.ttl_ticks = pickup.ttl_ticks.saturating_sub(1);
        if pickup.ttl_ticks == 0 {
            expired.push(pickup.id);
        }
    }
    for id in expired {
        if state.remove_pickup(id) {
            state.push_event(GameEvent::EntityRemoved { id });
            log::debug!("pickup {id} expired");
        }
    }
}

fn end_session(state: &mut GameState) {
    state.phase = GamePhase::Ended;
    state.push_event(GameEvent::GameEnded {
        final_secs: state.elapsed_secs,
    });
    log::info!("game over after {}s", state.elapsed_secs);
}

/// Demo autopilot: flee the nearest pursuer, drift toward the nearest
/// pickup when safe, attack whenever a usable weapon can reach something.
fn auto_input(state: &GameState, config: &GameConfig) -> TickInput {
    let mut input = TickInput::default();
    let player = state.player.pos;

    if let Some(kind) = state.player.weapon {
        if !kind.is_decoy() {
            let reach = kind.range() + config.player_size;
            if state
                .pursuers
                .iter()
                .any(|p| p.pos.distance(player) <= reach)
            {
                input.attack = true;
            }
        }
    }

    let nearest = state.pursuers.iter().min_by(|a, b| {
        a.pos
            .distance_squared(player)
            .partial_cmp(&b.pos.distance_squared(player))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(threat) = nearest {
        if threat.pos.distance(player) < FLEE_RADIUS {
            let away = player - threat.pos;
            if away.x >= 0.0 {
                input.right = true;
            } else {
                input.left = true;
            }
            if away.y >= 0.0 {
                input.down = true;
            } else {
                input.up = true;
            }
            return input;
        }
    }

    // Nothing close: go shopping.
    if let Some(pickup) = state.pickups.iter().min_by(|a, b| {
        a.pos
            .distance_squared(player)
            .partial_cmp(&b.pos.distance_squared(player))
            .unwrap_or(std::cmp::Ordering::Equal)
    }) {
        let toward = pickup.pos - player;
        if toward.x.abs() > config.player_speed {
            if toward.x > 0.0 {
                input.right = true;
            } else {
                input.left = true;
            }
        }
        if toward.y.abs() > config.player_speed {
            if toward.y > 0.0 {
                input.down = true;
            } else {
                input.up = true;
            }
        }
    }

    input
}
