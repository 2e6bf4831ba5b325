//! Destructible, health-bearing entities.

use holdfast_logic::combat::{self, CombatError};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, GameObject};

/// A unit on the field: an [`Entity`] plus health and a cached alive flag.
///
/// The flag is recomputed on every damage application. `Alive → Dead` fires
/// at most once and is terminal; nothing in this model heals or resurrects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    entity: Entity,
    health: f32,
    alive: bool,
}

impl Unit {
    pub fn new(id: u32, name: impl Into<String>, x: i32, y: i32, health: f32) -> Self {
        Self {
            entity: Entity::new(id, name, x, y),
            health,
            alive: health > 0.0,
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Subtract `amount` from health; flips the alive flag when health
    /// reaches the death threshold. Negative amounts are rejected.
    ///
    /// Damage to an already-dead unit still subtracts health — the no-op
    /// guard for corpses lives in [`Attacker::attack`], not here.
    ///
    /// [`Attacker::attack`]: crate::capability::Attacker::attack
    pub fn receive_damage(&mut self, amount: f32) -> Result<(), CombatError> {
        self.health = combat::apply_damage(self.health, amount)?;
        if self.alive && combat::is_dead(self.health) {
            self.alive = false;
            log::info!("{} has fallen", self.entity.name());
        }
        Ok(())
    }

    pub(crate) fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl GameObject for Unit {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}
