//! Benchmark the Gambit bot against random play over many matches.

use anyhow::Result;
use zorua_arena::{Chaos, Gambit, MatchConfig, run_match};
use zorua_battle::{Side, Type};
use zorua_team::{MoveSpec, PokemonSpec, TeamSpec};

const MATCHES: u64 = 50;

fn mv(name: &str, typing: Type, power: u32) -> MoveSpec {
    MoveSpec {
        name: name.into(),
        typing,
        power,
    }
}

fn lineup(team_name: &str) -> TeamSpec {
    TeamSpec {
        name: team_name.into(),
        members: vec![
            PokemonSpec {
                name: "Arcanine".into(),
                typing: Type::Fire,
                max_hp: 125,
                atk: 110,
                def: 90,
                speed: 95,
                moves: [
                    mv("Flamethrower", Type::Fire, 90),
                    mv("Crunch", Type::Dark, 80),
                    mv("Extreme Speed", Type::Normal, 80),
                    mv("Fire Fang", Type::Fire, 65),
                ],
            },
            PokemonSpec {
                name: "Lapras".into(),
                typing: Type::Water,
                max_hp: 160,
                atk: 85,
                def: 95,
                speed: 60,
                moves: [
                    mv("Surf", Type::Water, 90),
                    mv("Ice Beam", Type::Ice, 90),
                    mv("Body Slam", Type::Normal, 85),
                    mv("Water Gun", Type::Water, 40),
                ],
            },
            PokemonSpec {
                name: "Exeggutor".into(),
                typing: Type::Grass,
                max_hp: 130,
                atk: 105,
                def: 85,
                speed: 55,
                moves: [
                    mv("Razor Leaf", Type::Grass, 55),
                    mv("Psychic", Type::Psychic, 90),
                    mv("Giga Drain", Type::Grass, 75),
                    mv("Stomp", Type::Normal, 65),
                ],
            },
        ],
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut wins = 0u32;
    let mut draws = 0u32;
    let mut total_turns = 0u32;

    for i in 0..MATCHES {
        let team1 = lineup("gambit").to_team()?;
        let team2 = lineup("chaos").to_team()?;
        let mut bot = Gambit::seeded(1000 + i);
        let mut baseline = Chaos::seeded(2000 + i);
        let outcome = run_match(
            team1,
            team2,
            &mut bot,
            &mut baseline,
            MatchConfig {
                max_turns: 300,
                seed: i,
            },
        )?;
        total_turns += outcome.turns;
        match outcome.winner {
            Some(Side::P1) => wins += 1,
            Some(Side::P2) => {}
            None => draws += 1,
        }
    }

    println!(
        "gambit vs chaos: {}/{} wins, {} draws, {:.1} turns/match",
        wins,
        MATCHES,
        draws,
        total_turns as f64 / MATCHES as f64
    );
    Ok(())
}
