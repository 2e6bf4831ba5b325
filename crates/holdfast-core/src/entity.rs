//! Base identity and position record shared by every object on the field.

use holdfast_logic::grid::GridPos;
use serde::{Deserialize, Serialize};

/// Identity and position for a game object.
///
/// `id` and `name` are fixed at construction. Position changes only through
/// a [`Movable`](crate::capability::Movable) implementation — there is no
/// public setter.
///
/// Construction never fails: duplicate ids and out-of-field coordinates are
/// accepted as-is. Id uniqueness is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    id: u32,
    name: String,
    position: GridPos,
}

impl Entity {
    pub fn new(id: u32, name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            id,
            name: name.into(),
            position: GridPos::new(x, y),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> GridPos {
        self.position
    }

    /// Overwrite the position. Capability-gated: only `Movable` impls in
    /// this crate reach it.
    pub(crate) fn relocate(&mut self, x: i32, y: i32) {
        self.position = GridPos::new(x, y);
    }
}

/// Read access to the base record, with accessor shorthands.
pub trait GameObject {
    fn entity(&self) -> &Entity;

    fn id(&self) -> u32 {
        self.entity().id()
    }

    fn name(&self) -> &str {
        self.entity().name()
    }

    fn position(&self) -> GridPos {
        self.entity().position()
    }
}
