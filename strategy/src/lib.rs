//! Game-theoretic action selection for zorua.
//!
//! A decision is a five-stage pipeline over a completed belief view:
//!
//! 1. [`build_matrix`] - one-turn lookahead payoffs for every legal
//!    action pair, with unseen own moves masked in the opponent's column
//! 2. [`eliminate_dominated`] - iterated strict dominance pruning
//! 3. [`solve_equilibria`] - all Nash equilibria by support enumeration
//!    (with a pure-pair fallback for degenerate games)
//! 4. [`select_equilibrium`] - Pareto filter, balance preference, random
//!    tie-break
//! 5. sampling the selected mixed strategy
//!
//! [`Decider`] runs the pipeline end to end; [`Evaluator`] is the
//! pluggable scoring function every payoff goes through.

pub mod decider;
pub mod dominance;
pub mod equilibrium;
pub mod eval;
pub mod matrix;

pub use decider::{Decider, DecisionConfig};
pub use dominance::eliminate_dominated;
pub use equilibrium::{Equilibrium, pure_fallback, select_equilibrium, solve_equilibria};
pub use eval::{EvalWeights, Evaluator, WeightedEvaluator};
pub use matrix::{PayoffMatrix, build_matrix};
