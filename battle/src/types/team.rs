//! Team container

use super::pokemon::Pokemon;

/// One player's team: a fixed-length, ordered party.
///
/// Members are addressed by index everywhere; the active member is an
/// index held by [`crate::state::BattleState`], never a second live
/// reference into the party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub members: Vec<Pokemon>,
}

impl Team {
    pub fn new(members: Vec<Pokemon>) -> Self {
        Self { members }
    }

    /// Team of `len` never-seen slots (opponent side of a fresh belief view)
    pub fn unrevealed(len: usize) -> Self {
        Self {
            members: (0..len).map(|_| Pokemon::unrevealed()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|p| p.is_alive()).count()
    }

    /// Terminal condition: every member has fainted
    pub fn is_wiped(&self) -> bool {
        self.alive_count() == 0
    }

    /// Find a member by name
    pub fn find(&self, name: &str) -> Option<usize> {
        self.members
            .iter()
            .position(|p| p.name.as_deref() == Some(name))
    }

    /// Living members other than `active`, as (index, member) pairs
    pub fn bench(&self, active: usize) -> impl Iterator<Item = (usize, &Pokemon)> {
        self.members
            .iter()
            .enumerate()
            .filter(move |(i, p)| *i != active && p.is_alive())
    }
}
