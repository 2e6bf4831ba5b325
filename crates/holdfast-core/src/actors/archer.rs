//! Archer — a unit that shoots and repositions.

use holdfast_logic::combat::CombatError;
use holdfast_logic::constants::attack_damage;
use serde::{Deserialize, Serialize};

use crate::capability::{Attacker, Movable};
use crate::entity::{Entity, GameObject};
use crate::unit::Unit;

/// A ranged foot soldier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Archer {
    unit: Unit,
}

impl Archer {
    pub fn new(id: u32, name: impl Into<String>, x: i32, y: i32, health: f32) -> Self {
        Self {
            unit: Unit::new(id, name, x, y, health),
        }
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Mutable access to the underlying unit, for use as an attack target.
    pub fn unit_mut(&mut self) -> &mut Unit {
        &mut self.unit
    }

    pub fn health(&self) -> f32 {
        self.unit.health()
    }

    pub fn is_alive(&self) -> bool {
        self.unit.is_alive()
    }

    pub fn receive_damage(&mut self, amount: f32) -> Result<(), CombatError> {
        self.unit.receive_damage(amount)
    }
}

impl GameObject for Archer {
    fn entity(&self) -> &Entity {
        self.unit.entity()
    }
}

impl Attacker for Archer {
    fn attack_damage(&self) -> f32 {
        attack_damage::ARCHER
    }
}

impl Movable for Archer {
    fn move_to(&mut self, x: i32, y: i32) {
        self.unit.entity_mut().relocate(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::AttackOutcome;

    #[test]
    fn test_archer_deals_ten_damage() {
        let archer = Archer::new(1, "Alden", 0, 0, 100.0);
        let mut target = Unit::new(2, "Dummy", 1, 1, 100.0);
        let outcome = archer.attack(&mut target).unwrap();
        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                health_after: 90.0,
                felled: false
            }
        );
    }

    #[test]
    fn test_archer_moves_exactly() {
        let mut archer = Archer::new(1, "Alden", 0, 0, 100.0);
        archer.move_to(7, 10);
        assert_eq!(archer.position().x, 7);
        assert_eq!(archer.position().y, 10);
    }

    #[test]
    fn test_archer_can_be_targeted() {
        let a = Archer::new(1, "Alden", 0, 0, 100.0);
        let mut b = Archer::new(2, "Berrin", 1, 0, 100.0);
        a.attack(b.unit_mut()).unwrap();
        assert_eq!(b.health(), 90.0);
    }
}
