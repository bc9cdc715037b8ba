//! Battle domain types and the turn-resolution engine.
//!
//! This crate is the foundation of the zorua workspace:
//!
//! ```text
//! zorua-battle (types + turn engine) ← THIS CRATE
//!        │
//!        ├─> zorua-knowledge (belief views + inference)
//!        ├─> zorua-strategy  (game-theoretic decisions)
//!        ├─> zorua-team      (team specs + rosters)
//!        └─> zorua-arena     (match loop)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - Pokemon types with effectiveness chart
//! - [`Move`], [`Pokemon`], [`Team`] - entity model with partial-knowledge
//!   semantics (`None` fields mean "not yet observed")
//! - [`BattleState`] - the canonical two-team state (arena + on-field index)
//! - [`Action`] - the wire action encoding, with legality checks
//! - [`resolve_turn`] - the turn engine
//! - [`damage`] - the damage formula
//!
//! All randomness (damage rolls, speed ties) flows through a caller-supplied
//! [`rand::Rng`], with per-turn forced overrides in [`TurnContext`] for
//! reproducible play and tests.

pub mod action;
pub mod damage;
pub mod error;
pub mod state;
pub mod turn;
pub mod types;

pub use action::{Action, legal_actions, validate_action};
pub use damage::{ROLL_MAX, ROLL_MIN, STAB, damage};
pub use error::BattleError;
pub use state::BattleState;
pub use turn::{TurnContext, TurnOutcome, resolve_turn};
pub use types::{MOVE_SLOTS, Move, POWER_MIN, Pokemon, STAT_MAX, STAT_MIDPOINT, STAT_MIN, Side, Team, Type};
