//! Fort — a building with siege engines on its walls. It cannot move.

use holdfast_logic::constants::attack_damage;
use serde::{Deserialize, Serialize};

use crate::building::Building;
use crate::capability::Attacker;
use crate::entity::{Entity, GameObject};

/// A fortified emplacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fort {
    building: Building,
}

impl Fort {
    pub fn new(id: u32, name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            building: Building::new(id, name, x, y),
        }
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn is_built(&self) -> bool {
        self.building.is_built()
    }

    pub fn build(&mut self) {
        self.building.build();
    }
}

impl GameObject for Fort {
    fn entity(&self) -> &Entity {
        self.building.entity()
    }
}

impl Attacker for Fort {
    fn attack_damage(&self) -> f32 {
        attack_damage::FORT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::AttackOutcome;
    use crate::unit::Unit;

    #[test]
    fn test_fort_deals_twenty_damage() {
        let fort = Fort::new(2, "Fort Greywatch", 5, 5);
        let mut target = Unit::new(1, "Sentry", 0, 0, 100.0);
        let outcome = fort.attack(&mut target).unwrap();
        assert_eq!(
            outcome,
            AttackOutcome::Hit {
                health_after: 80.0,
                felled: false
            }
        );
    }

    #[test]
    fn test_fort_attacks_regardless_of_built_state() {
        // Nothing gates attacking on construction in this model.
        let fort = Fort::new(2, "Fort Greywatch", 5, 5);
        assert!(!fort.is_built());
        let mut target = Unit::new(1, "Sentry", 0, 0, 100.0);
        fort.attack(&mut target).unwrap();
        assert_eq!(target.health(), 80.0);
    }

    #[test]
    fn test_fort_build() {
        let mut fort = Fort::new(2, "Fort Greywatch", 5, 5);
        fort.build();
        fort.build();
        assert!(fort.is_built());
    }
}
