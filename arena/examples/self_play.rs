//! Self-play demo: two Gambit agents on mirrored starter teams.
//!
//! Run with `RUST_LOG=debug` to watch the decision pipeline work.

use anyhow::Result;
use zorua_arena::{Gambit, MatchConfig, run_match};
use zorua_battle::Type;
use zorua_team::{MoveSpec, PokemonSpec, TeamSpec};

fn mv(name: &str, typing: Type, power: u32) -> MoveSpec {
    MoveSpec {
        name: name.into(),
        typing,
        power,
    }
}

fn starters(team_name: &str) -> TeamSpec {
    TeamSpec {
        name: team_name.into(),
        members: vec![
            PokemonSpec {
                name: "Charmeleon".into(),
                typing: Type::Fire,
                max_hp: 116,
                atk: 112,
                def: 93,
                speed: 130,
                moves: [
                    mv("Ember", Type::Fire, 40),
                    mv("Slash", Type::Normal, 70),
                    mv("Dragon Breath", Type::Dragon, 60),
                    mv("Fire Fang", Type::Fire, 65),
                ],
            },
            PokemonSpec {
                name: "Wartortle".into(),
                typing: Type::Water,
                max_hp: 119,
                atk: 103,
                def: 120,
                speed: 98,
                moves: [
                    mv("Water Gun", Type::Water, 40),
                    mv("Bite", Type::Dark, 60),
                    mv("Surf", Type::Water, 90),
                    mv("Tackle", Type::Normal, 40),
                ],
            },
            PokemonSpec {
                name: "Ivysaur".into(),
                typing: Type::Grass,
                max_hp: 120,
                atk: 102,
                def: 104,
                speed: 100,
                moves: [
                    mv("Vine Whip", Type::Grass, 45),
                    mv("Razor Leaf", Type::Grass, 55),
                    mv("Sludge Bomb", Type::Poison, 90),
                    mv("Tackle", Type::Normal, 40),
                ],
            },
        ],
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let team1 = starters("red").to_team()?;
    let team2 = starters("blue").to_team()?;

    let mut red = Gambit::seeded(1);
    let mut blue = Gambit::seeded(2);
    let outcome = run_match(
        team1,
        team2,
        &mut red,
        &mut blue,
        MatchConfig {
            max_turns: 200,
            seed: 42,
        },
    )?;

    for record in &outcome.transcript {
        println!("{}", record);
    }
    match outcome.winner {
        Some(side) => println!("winner: {} after {} turns", side, outcome.turns),
        None => println!("no winner after {} turns", outcome.turns),
    }
    Ok(())
}
