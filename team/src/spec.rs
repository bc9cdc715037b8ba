//! Team specification types and conversion into battle teams

use serde::{Deserialize, Serialize};
use thiserror::Error;

use zorua_battle::{MOVE_SLOTS, Move, Pokemon, STAT_MAX, STAT_MIN, Team, Type};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("team has no members")]
    Empty,

    #[error("duplicate member name: {0}")]
    DuplicateName(String),

    #[error("{member}: stat {stat} = {value} outside {STAT_MIN}..={STAT_MAX}")]
    StatOutOfRange {
        member: String,
        stat: &'static str,
        value: u32,
    },

    #[error("{member}: move {mv} has zero power")]
    ZeroPowerMove { member: String, mv: String },
}

/// One move in a team specification: `(name, type, power)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSpec {
    pub name: String,
    pub typing: Type,
    pub power: u32,
}

/// One team member. Stats are the standardized four:
/// `(max_hp, atk, def, speed)`; legacy six-field stat blocks are
/// rejected outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PokemonSpec {
    pub name: String,
    pub typing: Type,
    pub max_hp: u32,
    pub atk: u32,
    pub def: u32,
    pub speed: u32,
    pub moves: [MoveSpec; MOVE_SLOTS],
}

/// A named, ordered team specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSpec {
    pub name: String,
    pub members: Vec<PokemonSpec>,
}

impl TeamSpec {
    /// Check the spec: nonempty, unique names, stats in the legal
    /// range, no zero-power moves.
    pub fn validate(&self) -> Result<(), TeamError> {
        if self.members.is_empty() {
            return Err(TeamError::Empty);
        }
        for (i, member) in self.members.iter().enumerate() {
            if self.members[..i].iter().any(|m| m.name == member.name) {
                return Err(TeamError::DuplicateName(member.name.clone()));
            }
            for (stat, value) in [
                ("max_hp", member.max_hp),
                ("atk", member.atk),
                ("def", member.def),
                ("speed", member.speed),
            ] {
                if !(STAT_MIN..=STAT_MAX).contains(&value) {
                    return Err(TeamError::StatOutOfRange {
                        member: member.name.clone(),
                        stat,
                        value,
                    });
                }
            }
            for mv in &member.moves {
                if mv.power == 0 {
                    return Err(TeamError::ZeroPowerMove {
                        member: member.name.clone(),
                        mv: mv.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Build the fully-known battle team this spec describes
    pub fn to_team(&self) -> Result<Team, TeamError> {
        self.validate()?;
        let members = self
            .members
            .iter()
            .map(|m| {
                let moves = std::array::from_fn(|i| {
                    let mv = &m.moves[i];
                    Move::new(&mv.name, mv.typing, mv.power)
                });
                Pokemon::new(&m.name, m.typing, m.max_hp, m.atk, m.def, m.speed, moves)
            })
            .collect();
        Ok(Team::new(members))
    }
}
