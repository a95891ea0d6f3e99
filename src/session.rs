//! Game session lifecycle
//!
//! `Session` owns the game state, its tuning, and the injected renderer.
//! Callers drive it with `tick()` once per frame at the fixed timestep;
//! every event the simulation produces is forwarded across the renderer
//! seam in order.

use crate::config::GameConfig;
use crate::render::Renderer;
use crate::sim::{self, GameEvent, GamePhase, GameState, TickInput};

/// One complete play-through from start to end-of-lives, restartable.
pub struct Session<R: Renderer> {
    state: GameState,
    config: GameConfig,
    renderer: R,
}

impl<R: Renderer> Session<R> {
    pub fn new(config: GameConfig, seed: u64, renderer: R) -> Self {
        let state = GameState::new(seed, &config);
        Self {
            state,
            config,
            renderer,
        }
    }

    /// Start or restart the session. A no-op while already Running.
    pub fn start(&mut self) {
        let events = sim::start(&mut self.state, &self.config);
        self.dispatch(events);
    }

    /// Advance one frame. A no-op unless Running.
    pub fn tick(&mut self, input: &TickInput) {
        let events = sim::tick(&mut self.state, input, &self.config);
        self.dispatch(events);
    }

    /// Attack with the equipped weapon (discrete trigger, between frames).
    pub fn attack(&mut self) {
        let events = sim::attack(&mut self.state, &self.config);
        self.dispatch(events);
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::EntityCreated {
                    id,
                    kind,
                    pos,
                    size,
                } => self.renderer.entity_created(id, kind, pos, size),
                GameEvent::EntityMoved { id, pos } => self.renderer.entity_moved(id, pos),
                GameEvent::EntityRemoved { id } => self.renderer.entity_removed(id),
                GameEvent::LivesChanged { lives } => self.renderer.lives_changed(lives),
                GameEvent::WeaponChanged { weapon } => self.renderer.weapon_changed(weapon),
                GameEvent::TimeChanged { secs } => self.renderer.time_changed(secs),
                GameEvent::AttackTriggered => self.renderer.attack_triggered(),
                GameEvent::GameEnded { final_secs } => self.renderer.game_ended(final_secs),
                GameEvent::GameReset => self.renderer.game_reset(),
            }
        }
    }
}
