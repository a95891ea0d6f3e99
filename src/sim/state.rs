//! Game state and core simulation types
//!
//! All session state lives here. The simulation is pure and deterministic:
//! fixed timestep, seeded RNG, identity-based entity removal, no rendering
//! or platform dependencies.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::events::GameEvent;
use crate::config::GameConfig;

/// Monotonic per-state entity identifier. Removal is always by id, never
/// by index, so deferred actions cannot hit the wrong entity.
pub type EntityId = u32;

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first start
    Idle,
    /// Active gameplay
    Running,
    /// Lives depleted; a restart re-enters Running via a full reset
    Ended,
}

/// Weapon catalog entry. Damage and range are fixed per kind; TeddyBear
/// and Pillow are decoys that occupy the slot without any combat value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    Bat,
    Knife,
    Pan,
    TeddyBear,
    Pillow,
    Axe,
    Wrench,
}

impl WeaponKind {
    /// Every catalog entry, for uniform random pickup selection.
    pub const ALL: [WeaponKind; 7] = [
        WeaponKind::Bat,
        WeaponKind::Knife,
        WeaponKind::Pan,
        WeaponKind::TeddyBear,
        WeaponKind::Pillow,
        WeaponKind::Axe,
        WeaponKind::Wrench,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WeaponKind::Bat => "Bat",
            WeaponKind::Knife => "Knife",
            WeaponKind::Pan => "Pan",
            WeaponKind::TeddyBear => "Teddy Bear",
            WeaponKind::Pillow => "Pillow",
            WeaponKind::Axe => "Axe",
            WeaponKind::Wrench => "Wrench",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            WeaponKind::Bat => "🏏",
            WeaponKind::Knife => "🔪",
            WeaponKind::Pan => "🍳",
            WeaponKind::TeddyBear => "🧸",
            WeaponKind::Pillow => "🛏️",
            WeaponKind::Axe => "🪓",
            WeaponKind::Wrench => "🔧",
        }
    }

    pub fn damage(&self) -> i32 {
        match self {
            WeaponKind::Bat => 1,
            WeaponKind::Knife => 2,
            WeaponKind::Pan => 1,
            WeaponKind::TeddyBear => 0,
            WeaponKind::Pillow => 0,
            WeaponKind::Axe => 3,
            WeaponKind::Wrench => 1,
        }
    }

    pub fn range(&self) -> f32 {
        match self {
            WeaponKind::Bat => 50.0,
            WeaponKind::Knife => 30.0,
            WeaponKind::Pan => 40.0,
            WeaponKind::TeddyBear => 0.0,
            WeaponKind::Pillow => 0.0,
            WeaponKind::Axe => 40.0,
            WeaponKind::Wrench => 35.0,
        }
    }

    /// Decoys take the equipped slot but cannot attack.
    pub fn is_decoy(&self) -> bool {
        self.damage() == 0
    }
}

/// The player avatar. Created once per session at arena center; never
/// destroyed mid-session.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: EntityId,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub lives: u32,
    pub weapon: Option<WeaponKind>,
}

/// A hostile entity moving directly toward the player each tick.
#[derive(Debug, Clone)]
pub struct Pursuer {
    pub id: EntityId,
    pub pos: Vec2,
    pub health: i32,
}

/// A timed weapon pickup. The expiry countdown lives on the entity, so
/// consuming the pickup cancels expiry by construction.
#[derive(Debug, Clone)]
pub struct Pickup {
    pub id: EntityId,
    pub pos: Vec2,
    pub kind: WeaponKind,
    /// Ticks until the pickup despawns unconsumed
    pub ttl_ticks: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Deterministic RNG for spawn positions and pickup kinds
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub pursuers: Vec<Pursuer>,
    pub pickups: Vec<Pickup>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Elapsed whole seconds (presentation only, feeds the HUD)
    pub elapsed_secs: u64,
    /// Ticks accumulated toward the next whole second
    pub clock_ticks: u32,
    /// Countdown to the next pursuer spawn
    pub pursuer_spawn_ticks: u32,
    /// Countdown to the next pickup spawn
    pub pickup_spawn_ticks: u32,
    /// Remaining ticks of the transient attack cue (0 = inactive)
    pub attack_cue_ticks: u32,
    next_id: EntityId,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state in the Idle phase.
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            player: Player {
                id: 0,
                pos: Vec2::ZERO,
                lives: config.starting_lives,
                weapon: None,
            },
            pursuers: Vec::new(),
            pickups: Vec::new(),
            time_ticks: 0,
            elapsed_secs: 0,
            clock_ticks: 0,
            pursuer_spawn_ticks: config.pursuer_spawn_ticks(),
            pickup_spawn_ticks: config.pickup_spawn_ticks(),
            attack_cue_ticks: 0,
            next_id: 1,
            events: Vec::new(),
        };
        state.player.id = state.next_entity_id();
        state.player.pos = arena_center(config);
        state
    }

    /// Full session reset: lives, weapon, entity sets, clocks, counters.
    /// The RNG stream keeps running so consecutive sessions differ.
    pub fn reset(&mut self, config: &GameConfig) {
        self.pursuers.clear();
        self.pickups.clear();
        self.time_ticks = 0;
        self.elapsed_secs = 0;
        self.clock_ticks = 0;
        self.pursuer_spawn_ticks = config.pursuer_spawn_ticks();
        self.pickup_spawn_ticks = config.pickup_spawn_ticks();
        self.attack_cue_ticks = 0;
        self.events.clear();
        self.player = Player {
            id: self.next_entity_id(),
            pos: arena_center(config),
            lives: config.starting_lives,
            weapon: None,
        };
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Remove a pursuer by id. Returns false if it was already gone.
    pub fn remove_pursuer(&mut self, id: EntityId) -> bool {
        let before = self.pursuers.len();
        self.pursuers.retain(|p| p.id != id);
        self.pursuers.len() != before
    }

    /// Remove a pickup by id. Returns false if it was already gone, so a
    /// late expiry for a consumed pickup is a plain no-op.
    pub fn remove_pickup(&mut self, id: EntityId) -> bool {
        let before = self.pickups.len();
        self.pickups.retain(|p| p.id != id);
        self.pickups.len() != before
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Top-left position that centers the player box in the arena
fn arena_center(config: &GameConfig) -> Vec2 {
    Vec2::new(
        (config.arena_width - config.player_size) / 2.0,
        (config.arena_height - config.player_size) / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weapon_catalog_matches_design() {
        assert_eq!(WeaponKind::ALL.len(), 7);
        assert_eq!(WeaponKind::Axe.damage(), 3);
        assert_eq!(WeaponKind::Axe.range(), 40.0);
        assert_eq!(WeaponKind::Bat.range(), 50.0);
        assert_eq!(WeaponKind::Knife.damage(), 2);
        assert!(WeaponKind::TeddyBear.is_decoy());
        assert!(WeaponKind::Pillow.is_decoy());
        assert!(!WeaponKind::Wrench.is_decoy());
    }

    #[test]
    fn new_state_starts_idle_at_center() {
        let config = GameConfig::default();
        let state = GameState::new(7, &config);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.player.pos, Vec2::new(285.0, 285.0));
        assert_eq!(state.player.lives, config.starting_lives);
        assert!(state.player.weapon.is_none());
        assert!(state.pursuers.is_empty());
    }

    #[test]
    fn entity_ids_are_monotonic() {
        let config = GameConfig::default();
        let mut state = GameState::new(7, &config);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn remove_pickup_twice_is_noop() {
        let config = GameConfig::default();
        let mut state = GameState::new(7, &config);
        let id = state.next_entity_id();
        state.pickups.push(Pickup {
            id,
            pos: Vec2::new(100.0, 100.0),
            kind: WeaponKind::Bat,
            ttl_ticks: 900,
        });
        assert!(state.remove_pickup(id));
        assert!(!state.remove_pickup(id));
        assert!(state.pickups.is_empty());
    }

    #[test]
    fn reset_clears_session_but_keeps_rng_stream() {
        let config = GameConfig::default();
        let mut state = GameState::new(7, &config);
        state.player.lives = 0;
        state.player.weapon = Some(WeaponKind::Knife);
        state.elapsed_secs = 42;
        let old_player_id = state.player.id;

        state.reset(&config);
        assert_eq!(state.player.lives, config.starting_lives);
        assert!(state.player.weapon.is_none());
        assert_eq!(state.elapsed_secs, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.pursuers.is_empty() && state.pickups.is_empty());
        assert_ne!(state.player.id, old_player_id);
    }
}
