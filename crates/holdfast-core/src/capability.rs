//! Capability traits — behaviors an actor opts into independently of
//! whether it is a unit or a building.

use holdfast_logic::combat::CombatError;

use crate::entity::GameObject;
use crate::unit::Unit;

/// Result of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackOutcome {
    /// The strike landed.
    Hit {
        health_after: f32,
        /// Whether this strike brought the target down.
        felled: bool,
    },
    /// Target was already dead — guaranteed no-op, no state change.
    TargetAlreadyDead,
}

/// Can deal damage to a [`Unit`].
pub trait Attacker: GameObject {
    /// Damage dealt per strike.
    fn attack_damage(&self) -> f32;

    /// Strike `target`. A dead target is left untouched.
    fn attack(&self, target: &mut Unit) -> Result<AttackOutcome, CombatError> {
        if !target.is_alive() {
            return Ok(AttackOutcome::TargetAlreadyDead);
        }
        target.receive_damage(self.attack_damage())?;
        log::debug!("{} attacks {}", self.name(), target.name());
        Ok(AttackOutcome::Hit {
            health_after: target.health(),
            felled: !target.is_alive(),
        })
    }
}

/// Can relocate on the field.
pub trait Movable: GameObject {
    /// Overwrite the position with `(x, y)`. No bounds checking, no
    /// collision detection — always succeeds.
    fn move_to(&mut self, x: i32, y: i32);
}
