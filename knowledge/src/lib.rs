//! Belief-state modeling for zorua.
//!
//! Each player holds a [`BeliefView`]: a [`zorua_battle::BattleState`]-shaped
//! value whose opponent side is only as known as direct observation and
//! statistical inference permit. This crate owns:
//!
//! - [`BeliefView`] and its per-turn [`BeliefView::observe`] propagation
//! - the reverse calculators in [`inference`] that bound hidden opponent
//!   stats from damage and turn-order evidence
//! - [`completed`], which fills a view's remaining unknowns with
//!   conservative defaults so the decision engine can treat it as a full
//!   position

pub mod completion;
pub mod inference;
pub mod view;

pub use completion::completed;
pub use inference::{estimate_attack, estimate_defense, estimate_speed};
pub use view::BeliefView;
