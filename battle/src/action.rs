//! Action encoding, legality and the boundary gate

use crate::error::BattleError;
use crate::state::BattleState;
use crate::types::Side;

/// A declared action for one turn. "No action" (the side that must wait
/// for the opponent's replacement) is spelled `Option<Action> = None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Use the named move of the on-field Pokemon
    Move(String),

    /// Swap the on-field Pokemon for the named teammate
    Switch(String),
}

impl Action {
    /// Parse the wire encoding: `"switch <name>"` is a switch, anything
    /// else is a move name. Cannot fail; legality is checked separately.
    pub fn parse(s: &str) -> Self {
        match s.strip_prefix("switch ") {
            Some(name) => Action::Switch(name.to_string()),
            None => Action::Move(s.to_string()),
        }
    }

    pub fn is_switch(&self) -> bool {
        matches!(self, Action::Switch(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(name) => write!(f, "{}", name),
            Action::Switch(name) => write!(f, "switch {}", name),
        }
    }
}

/// Enumerate the legal actions for `side`.
///
/// - Both on-field Pokemon alive: the active's known moves plus a switch
///   to every other living teammate.
/// - Own on-field fainted: switches only.
/// - Opponent's on-field fainted (own alive): empty; the only legal
///   choice is to wait (`None`).
pub fn legal_actions(state: &BattleState, side: Side) -> Vec<Action> {
    let team = state.team(side);
    let active = state.active[side.index()];
    let own_alive = team.members[active].is_alive();
    let foe_alive = state.on_field(side.opponent()).is_alive();

    let mut actions = Vec::new();
    if own_alive && !foe_alive {
        return actions;
    }
    if own_alive {
        for name in team.members[active].known_move_names() {
            actions.push(Action::Move(name.to_string()));
        }
    }
    for (_, teammate) in team.bench(active) {
        actions.push(Action::Switch(teammate.name().to_string()));
    }
    actions
}

/// The boundary gate: reject an illegal declaration before the turn
/// engine ever sees it.
pub fn validate_action(
    state: &BattleState,
    side: Side,
    action: Option<&Action>,
) -> Result<(), BattleError> {
    let legal = legal_actions(state, side);
    match action {
        None if legal.is_empty() => Ok(()),
        None => Err(BattleError::ActionRequired { side }),
        Some(_) if legal.is_empty() => Err(BattleError::WaitRequired { side }),
        Some(a) if legal.contains(a) => Ok(()),
        Some(a) => Err(BattleError::InvalidAction {
            side,
            action: a.to_string(),
        }),
    }
}
