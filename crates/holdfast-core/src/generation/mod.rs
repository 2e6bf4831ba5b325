//! Generation - procedural mustering of a demo skirmish.

mod names;
mod skirmish;

pub use names::*;
pub use skirmish::*;
