//! The zorua match loop.
//!
//! Owns the only mutable copy of the canonical battle state and drives
//! everything else: agents choose on their [`zorua_knowledge::BeliefView`]s,
//! choices pass the legality gate, the turn engine resolves, and
//! observations fan out. See [`run_match`].
//!
//! Baseline agents live in [`agent`]: [`Gambit`] (the game-theoretic
//! bot), [`Chaos`] (uniform random) and [`Scripted`] (fixed sequence).

pub mod agent;
pub mod runner;

pub use agent::{Agent, Chaos, Gambit, Scripted};
pub use runner::{MatchConfig, MatchOutcome, TurnRecord, run_match};
