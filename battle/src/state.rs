//! Canonical battle state

use crate::types::{Pokemon, Side, Team};

/// The full two-team state of a battle: both parties plus the on-field
/// index for each. There is one authoritative copy per match, owned by
/// the match loop; decision code works on clones.
///
/// The on-field member is referenced purely by index into the party,
/// never by a second alias, so mutation cannot diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleState {
    pub teams: [Team; 2],
    pub active: [usize; 2],
}

impl BattleState {
    pub fn new(team1: Team, team2: Team) -> Self {
        Self {
            teams: [team1, team2],
            active: [0, 0],
        }
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub fn team_mut(&mut self, side: Side) -> &mut Team {
        &mut self.teams[side.index()]
    }

    /// The on-field Pokemon for a side (may be fainted, pending replacement)
    pub fn on_field(&self, side: Side) -> &Pokemon {
        &self.teams[side.index()].members[self.active[side.index()]]
    }

    pub fn on_field_mut(&mut self, side: Side) -> &mut Pokemon {
        &mut self.teams[side.index()].members[self.active[side.index()]]
    }

    /// Whether the match is over (some team entirely fainted)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || (self.teams[0].is_wiped() && self.teams[1].is_wiped())
    }

    /// The winning side, if the match has been decided
    pub fn winner(&self) -> Option<Side> {
        match (self.teams[0].is_wiped(), self.teams[1].is_wiped()) {
            (false, true) => Some(Side::P1),
            (true, false) => Some(Side::P2),
            _ => None,
        }
    }

    /// The same position with the two sides swapped, so that a single
    /// "score the first team" evaluator serves both perspectives.
    pub fn flipped(&self) -> BattleState {
        let [t1, t2] = self.teams.clone();
        BattleState {
            teams: [t2, t1],
            active: [self.active[1], self.active[0]],
        }
    }

    /// The position as seen from `side`: that side's team first
    pub fn perspective(&self, side: Side) -> BattleState {
        match side {
            Side::P1 => self.clone(),
            Side::P2 => self.flipped(),
        }
    }
}
