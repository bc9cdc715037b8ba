//! End-to-end match: specs -> teams -> belief views -> decisions -> winner

use zorua_arena::{Chaos, Gambit, MatchConfig, Scripted, run_match};
use zorua_battle::{Side, Type};
use zorua_team::{MoveSpec, PokemonSpec, TeamSpec};

fn mv(name: &str, typing: Type, power: u32) -> MoveSpec {
    MoveSpec {
        name: name.into(),
        typing,
        power,
    }
}

fn duo(team_name: &str, lead_type: Type, lead_move: &str) -> TeamSpec {
    TeamSpec {
        name: team_name.into(),
        members: vec![
            PokemonSpec {
                name: format!("{}-lead", team_name),
                typing: lead_type,
                max_hp: 120,
                atk: 105,
                def: 95,
                speed: 100,
                moves: [
                    mv(lead_move, lead_type, 90),
                    mv("Tackle", Type::Normal, 40),
                    mv("Slash", Type::Normal, 70),
                    mv("Headbutt", Type::Normal, 70),
                ],
            },
            PokemonSpec {
                name: format!("{}-anchor", team_name),
                typing: Type::Normal,
                max_hp: 140,
                atk: 95,
                def: 110,
                speed: 80,
                moves: [
                    mv("Body Slam", Type::Normal, 85),
                    mv("Tackle", Type::Normal, 40),
                    mv("Slash", Type::Normal, 70),
                    mv("Headbutt", Type::Normal, 70),
                ],
            },
        ],
    }
}

#[test]
fn deterministic_gambit_match_completes() {
    let run = || {
        let team1 = duo("ember", Type::Fire, "Flamethrower").to_team().unwrap();
        let team2 = duo("leaf", Type::Grass, "Razor Leaf").to_team().unwrap();
        let mut p1 = Gambit::seeded(21);
        let mut p2 = Gambit::seeded(22);
        run_match(
            team1,
            team2,
            &mut p1,
            &mut p2,
            MatchConfig {
                max_turns: 300,
                seed: 9,
            },
        )
        .unwrap()
    };

    let first = run();
    let second = run();

    // The match ends properly and identically across reruns
    assert!(first.turns > 0);
    assert_eq!(first.winner, second.winner);
    assert_eq!(first.turns, second.turns);
    let hp = |o: &zorua_arena::MatchOutcome| {
        o.transcript.iter().map(|r| r.hp).collect::<Vec<_>>()
    };
    assert_eq!(hp(&first), hp(&second));
}

#[test]
fn gambit_vs_chaos_reaches_a_decision() {
    // Gambit holds the Fire team against a Grass-heavy opponent; the
    // damage floor guarantees the match cannot stall out.
    let team1 = duo("ember", Type::Fire, "Flamethrower").to_team().unwrap();
    let team2 = duo("leaf", Type::Grass, "Razor Leaf").to_team().unwrap();
    let mut bot = Gambit::seeded(5);
    let mut baseline = Chaos::seeded(6);
    let outcome = run_match(
        team1,
        team2,
        &mut bot,
        &mut baseline,
        MatchConfig {
            max_turns: 300,
            seed: 3,
        },
    )
    .unwrap();

    assert!(outcome.winner.is_some());
}

#[test]
fn faint_replacement_protocol_plays_out() {
    // STAB Flamethrower into a Grass lead is a guaranteed one-shot at
    // any roll, so the faint and replacement turns land on a fixed
    // schedule: lead down turn 1, replacement turn 2 (P1 waits),
    // anchor down turn 4.
    let mut team1 = duo("ember", Type::Fire, "Flamethrower").to_team().unwrap();
    let team2 = duo("leaf", Type::Grass, "Razor Leaf").to_team().unwrap();
    // Outspeed the opposing lead so the turn-1 order never hinges on a tie
    team1.members[0].speed = Some(110);

    let mut p1 = Scripted::parse(&["Flamethrower", "-", "Flamethrower", "Flamethrower"]);
    let mut p2 = Scripted::parse(&["Tackle", "switch leaf-anchor", "Body Slam", "Body Slam"]);
    let outcome = run_match(
        team1,
        team2,
        &mut p1,
        &mut p2,
        MatchConfig {
            max_turns: 50,
            seed: 12,
        },
    )
    .unwrap();

    assert_eq!(outcome.winner, Some(Side::P1));
    assert_eq!(outcome.turns, 4);
    // The replacement turn exchanged no damage
    let replacement = &outcome.transcript[1];
    assert_eq!(replacement.actions[0], None);
    assert_eq!(
        replacement.actions[1].as_deref(),
        Some("switch leaf-anchor")
    );
    assert_eq!(replacement.fainted, [false, false]);
}
