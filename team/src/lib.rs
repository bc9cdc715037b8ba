//! Team specification formats and roster storage for zorua.
//!
//! A [`TeamSpec`] is the external interface for describing a team:
//! name, typing, the standardized four stats `(max_hp, atk, def, speed)`
//! and four `(name, type, power)` moves per member. Specs validate
//! against the legal stat range and convert into fully-known
//! [`zorua_battle::Team`] values. [`Roster`] stores specs (and evaluator
//! weight sets, or any serde document) as named JSON files.

pub mod roster;
pub mod spec;

pub use roster::{Roster, RosterError};
pub use spec::{MoveSpec, PokemonSpec, TeamSpec, TeamError};
