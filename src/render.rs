//! Renderer seam
//!
//! The core only ever calls out through this trait; it never reads anything
//! back. Every method defaults to a no-op so renderers implement only what
//! they draw.

use glam::Vec2;

use crate::sim::{EntityId, EntityKind, WeaponKind};

/// Consumer of simulation state changes (visual surface + HUD).
#[allow(unused_variables)]
pub trait Renderer {
    fn entity_created(&mut self, id: EntityId, kind: EntityKind, pos: Vec2, size: f32) {}
    fn entity_moved(&mut self, id: EntityId, pos: Vec2) {}
    fn entity_removed(&mut self, id: EntityId) {}
    fn lives_changed(&mut self, lives: u32) {}
    fn weapon_changed(&mut self, weapon: Option<WeaponKind>) {}
    fn time_changed(&mut self, secs: u64) {}
    fn attack_triggered(&mut self) {}
    fn game_ended(&mut self, final_secs: u64) {}
    fn game_reset(&mut self) {}
}

/// Renders nothing. Used by tests and headless callers.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}

/// Writes HUD changes to the log. Per-frame movement goes to `trace` so a
/// default filter shows only the interesting transitions.
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn entity_created(&mut self, id: EntityId, kind: EntityKind, pos: Vec2, size: f32) {
        log::debug!("+ {kind:?} #{id} at ({:.0}, {:.0}) size {size}", pos.x, pos.y);
    }

    fn entity_moved(&mut self, id: EntityId, pos: Vec2) {
        log::trace!("~ #{id} -> ({:.1}, {:.1})", pos.x, pos.y);
    }

    fn entity_removed(&mut self, id: EntityId) {
        log::debug!("- #{id}");
    }

    fn lives_changed(&mut self, lives: u32) {
        log::info!("lives: {}", "♥".repeat(lives as usize));
    }

    fn weapon_changed(&mut self, weapon: Option<WeaponKind>) {
        match weapon {
            Some(kind) if kind.is_decoy() => {
                log::info!("equipped: {} {} (useless)", kind.glyph(), kind.name());
            }
            Some(kind) => {
                log::info!(
                    "equipped: {} {} (damage {}, range {}px)",
                    kind.glyph(),
                    kind.name(),
                    kind.damage(),
                    kind.range()
                );
            }
            None => log::info!("no weapon equipped"),
        }
    }

    fn time_changed(&mut self, secs: u64) {
        log::debug!("t = {secs}s");
    }

    fn attack_triggered(&mut self) {
        log::debug!("swing!");
    }

    fn game_ended(&mut self, final_secs: u64) {
        log::info!("game over - survived {final_secs}s");
    }

    fn game_reset(&mut self) {
        log::info!("new game");
    }
}
