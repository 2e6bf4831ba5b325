//! Holdfast Core - Skirmish Entity Model
//!
//! A small battlefield object model: entities with identity and position,
//! destructible units, constructible buildings, and independently
//! attachable capabilities for attacking and moving.
//!
//! # Architecture
//!
//! Three layers, composed rather than inherited:
//! - **Base records**: [`entity::Entity`] carries identity and position;
//!   [`unit::Unit`] and [`building::Building`] embed it and add health and
//!   construction state respectively.
//! - **Capabilities**: [`capability::Attacker`] and [`capability::Movable`]
//!   are traits an actor opts into independently of its base record.
//! - **Actors**: [`actors::Archer`], [`actors::Fort`], and
//!   [`actors::Caravan`] pick a base and a capability set.
//!
//! # Example
//!
//! ```rust
//! use holdfast_core::prelude::*;
//!
//! let mut archer = Archer::new(1, "Alden Swiftarrow", 0, 0, 100.0);
//! let fort = Fort::new(2, "Fort Greywatch", 5, 5);
//!
//! archer.move_to(7, 10);
//! fort.attack(archer.unit_mut()).unwrap();
//! assert_eq!(archer.health(), 80.0);
//! ```

pub mod actors;
pub mod building;
pub mod capability;
pub mod entity;
pub mod generation;
pub mod unit;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::actors::{Archer, Caravan, Fort};
    pub use crate::building::Building;
    pub use crate::capability::{AttackOutcome, Attacker, Movable};
    pub use crate::entity::{Entity, GameObject};
    pub use crate::unit::Unit;
}
