//! Constructible, immobile-by-default entities.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, GameObject};

/// A building: an [`Entity`] plus a one-way constructed flag.
///
/// `Unbuilt → Built` fires at most once; there is no unbuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    entity: Entity,
    built: bool,
}

impl Building {
    pub fn new(id: u32, name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            entity: Entity::new(id, name, x, y),
            built: false,
        }
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Mark construction complete. Idempotent — a second call changes
    /// nothing and logs nothing.
    pub fn build(&mut self) {
        if !self.built {
            self.built = true;
            log::info!("{} construction complete", self.entity.name());
        }
    }

    pub(crate) fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl GameObject for Building {
    fn entity(&self) -> &Entity {
        &self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unbuilt() {
        let b = Building::new(1, "Granary", 4, 4);
        assert!(!b.is_built());
    }

    #[test]
    fn test_build_sets_flag() {
        let mut b = Building::new(1, "Granary", 4, 4);
        b.build();
        assert!(b.is_built());
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut b = Building::new(1, "Granary", 4, 4);
        b.build();
        b.build();
        assert!(b.is_built());
    }
}
