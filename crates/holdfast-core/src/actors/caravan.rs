//! Caravan — a building on wheels. It relocates but cannot attack.

use serde::{Deserialize, Serialize};

use crate::building::Building;
use crate::capability::Movable;
use crate::entity::{Entity, GameObject};

/// A mobile structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Caravan {
    building: Building,
}

impl Caravan {
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

impl GameObject for Caravan {
    fn entity(&self) -> &Entity {
        self.building.entity()
    }
}

impl Movable for Caravan {
    fn move_to(&mut self, x: i32, y: i32) {
        self.building.entity_mut().relocate(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caravan_moves_exactly() {
        let mut caravan = Caravan::new(3, "Tinker's Caravan", 0, 0);
        caravan.move_to(7, 10);
        assert_eq!(caravan.position().x, 7);
        assert_eq!(caravan.position().y, 10);
    }

    #[test]
    fn test_moving_does_not_build() {
        let mut caravan = Caravan::new(3, "Tinker's Caravan", 0, 0);
        caravan.move_to(7, 10);
        assert!(!caravan.is_built());
    }
}
