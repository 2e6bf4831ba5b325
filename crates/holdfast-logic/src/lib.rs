//! Pure skirmish rules for Holdfast.
//!
//! This crate contains the battlefield rules that are independent of any
//! engine or runtime. Functions take plain data and return results, making
//! them unit-testable and portable to whatever orchestrator ends up
//! sequencing game ticks.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`combat`] | Damage arithmetic, death threshold, damage validation |
//! | [`constants`] | Attack damage per actor, manifest kind ids, field size |
//! | [`grid`] | Integer field coordinates and distance helpers |

pub mod combat;
pub mod constants;
pub mod grid;
