//! The match loop: the single owner of the canonical state

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use zorua_battle::{
    BattleError, BattleState, Side, Team, TurnContext, resolve_turn, validate_action,
};
use zorua_knowledge::BeliefView;

use crate::agent::Agent;

#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    /// Hard stop to keep degenerate stall matches finite
    pub max_turns: u32,

    /// Seed of the match RNG (damage rolls, speed ties)
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 500,
            seed: 42,
        }
    }
}

/// One resolved turn, as recorded in the transcript
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub turn: u32,
    pub actions: [Option<String>; 2],
    /// On-field HP after the turn resolved
    pub hp: [u32; 2],
    pub fainted: [bool; 2],
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fmt_action = |a: &Option<String>| a.clone().unwrap_or_else(|| "(wait)".into());
        write!(
            f,
            "turn {:>3}: p1 {} | p2 {} | hp {}/{}",
            self.turn,
            fmt_action(&self.actions[0]),
            fmt_action(&self.actions[1]),
            self.hp[0],
            self.hp[1],
        )
    }
}

#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub winner: Option<Side>,
    pub turns: u32,
    pub transcript: Vec<TurnRecord>,
}

/// Run a full match between two agents.
///
/// Owns the canonical [`BattleState`] and the two belief views. Every
/// turn: both agents choose on their own views, the choices pass the
/// legality gate, the engine resolves, and the outcome fans out to both
/// views. Ends when a team is wiped or the turn cap is hit.
pub fn run_match(
    team1: Team,
    team2: Team,
    agent1: &mut dyn Agent,
    agent2: &mut dyn Agent,
    config: MatchConfig,
) -> Result<MatchOutcome, BattleError> {
    let mut truth = BattleState::new(team1, team2);
    let mut views = [
        BeliefView::open(Side::P1, &truth),
        BeliefView::open(Side::P2, &truth),
    ];
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut transcript = Vec::new();
    let mut turn = 0;

    while !truth.is_terminal() && turn < config.max_turns {
        turn += 1;
        let choice1 = agent1.choose(&views[0]);
        let choice2 = agent2.choose(&views[1]);
        validate_action(&truth, Side::P1, choice1.as_ref())?;
        validate_action(&truth, Side::P2, choice2.as_ref())?;

        let outcome = resolve_turn(
            &mut truth,
            [choice1.as_ref(), choice2.as_ref()],
            &TurnContext::default(),
            &mut rng,
        );
        views[0].observe(&truth, choice1.as_ref(), choice2.as_ref(), &outcome);
        views[1].observe(&truth, choice2.as_ref(), choice1.as_ref(), &outcome);

        let record = TurnRecord {
            turn,
            actions: [
                choice1.map(|a| a.to_string()),
                choice2.map(|a| a.to_string()),
            ],
            hp: [
                truth.on_field(Side::P1).current_hp,
                truth.on_field(Side::P2).current_hp,
            ],
            fainted: outcome.fainted,
        };
        info!(
            turn,
            p1 = record.actions[0].as_deref().unwrap_or("(wait)"),
            p2 = record.actions[1].as_deref().unwrap_or("(wait)"),
            hp1 = record.hp[0],
            hp2 = record.hp[1],
            "turn resolved"
        );
        transcript.push(record);
    }

    if turn >= config.max_turns && !truth.is_terminal() {
        warn!(turns = turn, "match hit the turn cap without a winner");
    }

    Ok(MatchOutcome {
        winner: truth.winner(),
        turns: turn,
        transcript,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use zorua_battle::{Move, Pokemon, Type};

    use crate::agent::Scripted;

    fn member(name: &str, typing: Type, speed: u32) -> Pokemon {
        Pokemon::new(
            name,
            typing,
            100,
            120,
            80,
            speed,
            [
                Move::new("Tackle", Type::Normal, 40),
                Move::new("Blast", typing, 90),
                Move::unknown(),
                Move::unknown(),
            ],
        )
    }

    fn teams() -> (Team, Team) {
        (
            Team::new(vec![member("a1", Type::Fire, 110)]),
            Team::new(vec![member("b1", Type::Grass, 90)]),
        )
    }

    #[test]
    fn test_scripted_match_runs_to_a_winner() {
        // Fire STAB into Grass ends this in two hits at most
        let (t1, t2) = teams();
        let mut a1 = Scripted::parse(&["Blast", "Blast", "Blast"]);
        let mut a2 = Scripted::parse(&["Tackle", "Tackle", "Tackle"]);
        let outcome = run_match(t1, t2, &mut a1, &mut a2, MatchConfig::default()).unwrap();

        assert_eq!(outcome.winner, Some(Side::P1));
        assert!(outcome.turns <= 3);
        assert_eq!(outcome.transcript.len(), outcome.turns as usize);
    }

    #[test]
    fn test_match_is_reproducible_for_fixed_seed() {
        let run = || {
            let (t1, t2) = teams();
            let mut a1 = Scripted::parse(&["Tackle", "Tackle", "Tackle", "Tackle"]);
            let mut a2 = Scripted::parse(&["Tackle", "Tackle", "Tackle", "Tackle"]);
            let outcome =
                run_match(t1, t2, &mut a1, &mut a2, MatchConfig { max_turns: 4, seed: 7 })
                    .unwrap();
            outcome
                .transcript
                .iter()
                .map(|r| r.hp)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_illegal_choice_is_rejected_at_the_boundary() {
        let (t1, t2) = teams();
        let mut a1 = Scripted::parse(&["Hyper Beam"]);
        let mut a2 = Scripted::parse(&["Tackle"]);
        let err = run_match(t1, t2, &mut a1, &mut a2, MatchConfig::default()).unwrap_err();
        assert!(matches!(err, BattleError::InvalidAction { side: Side::P1, .. }));
    }

    #[test]
    fn test_turn_cap_ends_stall() {
        // Ghost vs Normal with Normal moves: nobody can ever deal damage
        let t1 = Team::new(vec![member("a1", Type::Ghost, 100)]);
        let mut t2 = Team::new(vec![member("b1", Type::Ghost, 100)]);
        t2.members[0].moves[1] = Move::new("Blast", Type::Normal, 90);
        let mut spooky1 = Scripted::new(std::iter::repeat_n(
            Some(zorua_battle::Action::Move("Tackle".into())),
            30,
        ));
        let mut spooky2 = Scripted::new(std::iter::repeat_n(
            Some(zorua_battle::Action::Move("Tackle".into())),
            30,
        ));
        let outcome = run_match(
            t1,
            t2,
            &mut spooky1,
            &mut spooky2,
            MatchConfig { max_turns: 20, seed: 1 },
        )
        .unwrap();
        assert_eq!(outcome.winner, None);
        assert_eq!(outcome.turns, 20);
    }
}
