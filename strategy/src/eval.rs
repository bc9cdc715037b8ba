//! Position evaluation

use serde::{Deserialize, Serialize};
use zorua_battle::{BattleState, Team, Type};

/// A state evaluator: a pure, deterministic score of the first team's
/// prospects in a position. Positive is good for the first team; callers
/// flip the state to score the other side.
///
/// The decision engine is parametrized entirely through this trait, so a
/// trained model's inference call plugs in the same way the built-in
/// heuristic does.
pub trait Evaluator {
    fn evaluate(&self, state: &BattleState) -> f64;
}

impl<F: Fn(&BattleState) -> f64> Evaluator for F {
    fn evaluate(&self, state: &BattleState) -> f64 {
        self(state)
    }
}

/// Heuristic weights for [`WeightedEvaluator`]. One parametrized
/// component instead of per-variant weight tuples; serde round-trippable
/// so tuned weight sets can live in a roster.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EvalWeights {
    /// Weight of the total-HP-fraction differential
    pub hp: f64,
    /// Weight of the alive-member differential
    pub alive: f64,
    /// Weight of the on-field type-matchup differential
    pub matchup: f64,
    /// Terminal bonus for a decided position
    pub win: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            hp: 1.0,
            alive: 0.5,
            matchup: 0.25,
            win: 10.0,
        }
    }
}

/// The built-in heuristic evaluator
#[derive(Clone, Debug, Default)]
pub struct WeightedEvaluator {
    pub weights: EvalWeights,
}

impl WeightedEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }
}

impl Evaluator for WeightedEvaluator {
    fn evaluate(&self, state: &BattleState) -> f64 {
        let w = &self.weights;
        let [us, them] = &state.teams;

        match (us.is_wiped(), them.is_wiped()) {
            (false, true) => return w.win,
            (true, false) => return -w.win,
            (true, true) => return 0.0,
            (false, false) => {}
        }

        let hp = hp_fraction(us) - hp_fraction(them);
        let alive = (us.alive_count() as f64 - them.alive_count() as f64)
            / us.len().max(1) as f64;

        let ours = state.teams[0].members[state.active[0]]
            .typing
            .unwrap_or(Type::Normal);
        let theirs = state.teams[1].members[state.active[1]]
            .typing
            .unwrap_or(Type::Normal);
        let matchup = ours.effectiveness(theirs) - theirs.effectiveness(ours);

        w.hp * hp + w.alive * alive + w.matchup * matchup
    }
}

fn hp_fraction(team: &Team) -> f64 {
    let current: u32 = team.members.iter().map(|p| p.current_hp).sum();
    let max: u32 = team
        .members
        .iter()
        .map(|p| p.max_hp.unwrap_or(p.current_hp.max(1)))
        .sum();
    current as f64 / max.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use zorua_battle::{Move, Pokemon};

    fn member(name: &str, typing: Type, hp: u32) -> Pokemon {
        let mut p = Pokemon::new(
            name,
            typing,
            100,
            100,
            100,
            100,
            std::array::from_fn(|_| Move::filler()),
        );
        p.current_hp = hp;
        p
    }

    fn state(hp_a: u32, hp_b: u32) -> BattleState {
        BattleState::new(
            Team::new(vec![member("a1", Type::Water, hp_a), member("a2", Type::Normal, 100)]),
            Team::new(vec![member("b1", Type::Fire, hp_b), member("b2", Type::Normal, 100)]),
        )
    }

    #[test]
    fn test_symmetric_position_scores_by_matchup_only() {
        let eval = WeightedEvaluator::default();
        let s = state(100, 100);
        // Water on the field against Fire: matchup differential 1.5
        let expected = 0.25 * (2.0 - 0.5);
        assert!((eval.evaluate(&s) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_hp_advantage_scores_positive() {
        let eval = WeightedEvaluator::default();
        assert!(eval.evaluate(&state(100, 40)) > eval.evaluate(&state(100, 100)));
    }

    #[test]
    fn test_terminal_positions() {
        let eval = WeightedEvaluator::default();
        let mut won = state(100, 0);
        won.teams[1].members[1].current_hp = 0;
        assert_eq!(eval.evaluate(&won), 10.0);
        assert_eq!(eval.evaluate(&won.flipped()), -10.0);
    }

    #[test]
    fn test_flip_antisymmetry_of_hp_term() {
        let eval = WeightedEvaluator::new(EvalWeights {
            hp: 1.0,
            alive: 0.5,
            matchup: 0.0,
            win: 10.0,
        });
        let s = state(80, 30);
        assert!((eval.evaluate(&s) + eval.evaluate(&s.flipped())).abs() < 1e-9);
    }

    #[test]
    fn test_closure_is_an_evaluator() {
        let eval = |s: &BattleState| s.teams[0].alive_count() as f64;
        assert_eq!(Evaluator::evaluate(&eval, &state(100, 100)), 2.0);
    }

    #[test]
    fn test_weights_serde_roundtrip() {
        let w = EvalWeights::default();
        let json = serde_json::to_string(&w).unwrap();
        let back: EvalWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
