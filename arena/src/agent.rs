//! Agents: anything that turns a belief view into an action

use std::collections::VecDeque;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use zorua_battle::{Action, legal_actions};
use zorua_knowledge::BeliefView;
use zorua_strategy::{Decider, Evaluator, WeightedEvaluator};

/// A player. `None` means "wait" and is only valid while the opponent
/// replaces a fainted Pokemon.
pub trait Agent {
    fn choose(&mut self, view: &BeliefView) -> Option<Action>;
}

/// The game-theoretic bot: wraps a [`Decider`]
pub struct Gambit<E: Evaluator> {
    decider: Decider<E>,
}

impl Gambit<WeightedEvaluator> {
    /// Default heuristic gambit with the given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            decider: Decider::with_seed(WeightedEvaluator::default(), seed),
        }
    }
}

impl<E: Evaluator> Gambit<E> {
    pub fn new(decider: Decider<E>) -> Self {
        Self { decider }
    }
}

impl<E: Evaluator> Agent for Gambit<E> {
    fn choose(&mut self, view: &BeliefView) -> Option<Action> {
        self.decider.decide(view)
    }
}

/// Uniformly random legal play; the baseline opponent
pub struct Chaos {
    rng: ChaCha8Rng,
}

impl Chaos {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for Chaos {
    fn choose(&mut self, view: &BeliefView) -> Option<Action> {
        let legal = legal_actions(&view.state, view.owner);
        legal.choose(&mut self.rng).cloned()
    }
}

/// Plays back a fixed sequence of choices; a test aid
pub struct Scripted {
    queue: VecDeque<Option<Action>>,
}

impl Scripted {
    pub fn new(choices: impl IntoIterator<Item = Option<Action>>) -> Self {
        Self {
            queue: choices.into_iter().collect(),
        }
    }

    /// Parse a script of encoded actions; `"-"` means wait
    pub fn parse(script: &[&str]) -> Self {
        Self::new(script.iter().map(|s| match *s {
            "-" => None,
            other => Some(Action::parse(other)),
        }))
    }
}

impl Agent for Scripted {
    fn choose(&mut self, _view: &BeliefView) -> Option<Action> {
        self.queue.pop_front().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zorua_battle::{BattleState, Move, Pokemon, Side, Team, Type};

    fn member(name: &str) -> Pokemon {
        Pokemon::new(
            name,
            Type::Normal,
            100,
            100,
            100,
            100,
            [
                Move::new("Tackle", Type::Normal, 40),
                Move::new("Slash", Type::Normal, 70),
                Move::unknown(),
                Move::unknown(),
            ],
        )
    }

    fn view() -> BeliefView {
        let truth = BattleState::new(
            Team::new(vec![member("a1"), member("a2")]),
            Team::new(vec![member("b1"), member("b2")]),
        );
        BeliefView::open(Side::P1, &truth)
    }

    #[test]
    fn test_chaos_plays_legal_moves() {
        let v = view();
        let mut bot = Chaos::seeded(3);
        let legal = legal_actions(&v.state, Side::P1);
        for _ in 0..20 {
            let action = bot.choose(&v).expect("choices available");
            assert!(legal.contains(&action));
        }
    }

    #[test]
    fn test_chaos_is_reproducible() {
        let v = view();
        let run = |seed| {
            let mut bot = Chaos::seeded(seed);
            (0..10).map(|_| bot.choose(&v)).collect::<Vec<_>>()
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn test_scripted_plays_in_order_then_waits() {
        let v = view();
        let mut bot = Scripted::parse(&["Tackle", "switch a2", "-"]);
        assert_eq!(bot.choose(&v), Some(Action::Move("Tackle".into())));
        assert_eq!(bot.choose(&v), Some(Action::Switch("a2".into())));
        assert_eq!(bot.choose(&v), None);
        assert_eq!(bot.choose(&v), None);
    }

    #[test]
    fn test_gambit_decides() {
        let v = view();
        let mut bot = Gambit::seeded(1);
        assert!(bot.choose(&v).is_some());
    }
}
