//! The top-level decision pipeline:
//! build matrix → prune dominated → solve equilibria → select → sample.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use zorua_battle::{Action, BattleState, Side, TurnContext, legal_actions, resolve_turn};
use zorua_knowledge::{BeliefView, completed};

use crate::dominance::eliminate_dominated;
use crate::equilibrium::{Equilibrium, pure_fallback, select_equilibrium, solve_equilibria};
use crate::eval::Evaluator;
use crate::matrix::build_matrix;

/// Knobs of the decision pipeline
#[derive(Debug, Clone, Copy)]
pub struct DecisionConfig {
    /// Fixed damage roll used for every lookahead simulation, so matrix
    /// cells differ by choice, not by luck
    pub sim_roll: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self { sim_roll: 0.95 }
    }
}

/// The game-theoretic decision engine. Holds its own seeded RNG for
/// equilibrium tie-breaks and action sampling; never touches the
/// canonical state, only clones of the belief view's completion.
pub struct Decider<E: Evaluator> {
    pub evaluator: E,
    pub config: DecisionConfig,
    rng: ChaCha8Rng,
}

impl<E: Evaluator> Decider<E> {
    pub fn new(evaluator: E) -> Self {
        Self::with_seed(evaluator, 42)
    }

    pub fn with_seed(evaluator: E, seed: u64) -> Self {
        Self {
            evaluator,
            config: DecisionConfig::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Choose an action for the view's owner, or `None` when the owner
    /// must wait for the opponent's faint replacement.
    pub fn decide(&mut self, view: &BeliefView) -> Option<Action> {
        let own_fainted = !view.own_on_field().is_alive();
        let foe_fainted = !view.foe_on_field().is_alive();

        if foe_fainted && !own_fainted {
            trace!(owner = %view.owner, "opponent must replace first; waiting");
            return None;
        }

        let full = completed(view);
        if own_fainted {
            self.replacement_switch(view, &full)
        } else {
            self.simultaneous_choice(view, &full)
        }
    }

    /// The regular simultaneous-move decision
    fn simultaneous_choice(&mut self, view: &BeliefView, full: &BattleState) -> Option<Action> {
        let mut matrix = build_matrix(view, full, &self.evaluator, self.config.sim_roll, &mut self.rng);
        let built = (matrix.rows(), matrix.cols());
        eliminate_dominated(&mut matrix);
        debug!(
            owner = %view.owner,
            built = ?built,
            pruned = ?(matrix.rows(), matrix.cols()),
            "payoff matrix ready"
        );

        let mut candidates = solve_equilibria(&matrix);
        if candidates.is_empty() {
            // Degenerate game: fall back to every remaining pure pair
            debug!(owner = %view.owner, "no equilibrium found, using pure fallback");
            candidates = pure_fallback(&matrix);
        }
        let selected = select_equilibrium(candidates, &mut self.rng)?;
        let action = self.sample_action(&matrix.own_actions, &selected);
        debug!(owner = %view.owner, action = %action, payoffs = ?selected.payoffs, "decided");
        Some(action)
    }

    /// Faint replacement: no simultaneous choice to model. Simulate each
    /// candidate switch, analyze the resulting position for information
    /// only, and take the switch with the best own equilibrium payoff.
    fn replacement_switch(&mut self, view: &BeliefView, full: &BattleState) -> Option<Action> {
        let owner = view.owner;
        let mut best: Option<(Action, f64)> = None;

        for switch in legal_actions(full, owner) {
            let mut post = full.clone();
            let mut pair: [Option<&Action>; 2] = [None, None];
            pair[owner.index()] = Some(&switch);
            resolve_turn(
                &mut post,
                pair,
                &TurnContext {
                    roll: Some(self.config.sim_roll),
                    first_on_tie: Some(Side::P1),
                },
                &mut self.rng,
            );

            let value = self.position_value(view, &post);
            trace!(owner = %owner, switch = %switch, value, "replacement candidate");
            if best.as_ref().is_none_or(|(_, v)| value > *v) {
                best = Some((switch, value));
            }
        }

        best.map(|(action, value)| {
            debug!(owner = %owner, action = %action, value, "replacement switch");
            action
        })
    }

    /// Expected own payoff of the selected equilibrium in a position
    fn position_value(&mut self, view: &BeliefView, state: &BattleState) -> f64 {
        let mut matrix = build_matrix(view, state, &self.evaluator, self.config.sim_roll, &mut self.rng);
        eliminate_dominated(&mut matrix);
        let mut candidates = solve_equilibria(&matrix);
        if candidates.is_empty() {
            candidates = pure_fallback(&matrix);
        }
        match select_equilibrium(candidates, &mut self.rng) {
            Some(eq) => eq.payoffs.0,
            None => self.evaluator.evaluate(&state.perspective(view.owner)),
        }
    }

    /// Draw from the selected mixed strategy: `r = 1 - uniform(0,1)` is
    /// guaranteed nonzero, take the first action whose cumulative mass
    /// reaches it.
    fn sample_action(&mut self, actions: &[Action], eq: &Equilibrium) -> Action {
        let r = 1.0 - self.rng.r#gen::<f64>();
        let mut cumulative = 0.0;
        for (action, &p) in actions.iter().zip(&eq.own) {
            cumulative += p;
            if cumulative >= r {
                return action.clone();
            }
        }
        // Guard against mass lost to rounding
        actions
            .last()
            .cloned()
            .expect("sampled from an empty action set")
    }
}
