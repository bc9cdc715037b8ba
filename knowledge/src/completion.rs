//! Estimation completion: fill a belief view's unknowns with
//! conservative defaults so it can be analyzed as a full position.

use zorua_battle::{BattleState, Move, Pokemon, STAT_MIDPOINT, Type};

use crate::view::BeliefView;

/// Produce a fully-populated position from a partial view.
///
/// The owner's side is carried over as ground truth; every opponent-side
/// unknown is replaced by a neutral default: `Normal` typing, midpoint
/// stats, full HP for never-seen slots, and a guaranteed minimal
/// moveset (one STAB option plus one neutral filler). The result is a
/// fresh value for decision analysis only and is never written back
/// into the view.
pub fn completed(view: &BeliefView) -> BattleState {
    let mut state = view.state.clone();
    let foe = view.owner.opponent();
    for (idx, member) in state.team_mut(foe).members.iter_mut().enumerate() {
        complete_member(member, idx);
    }
    state
}

fn complete_member(p: &mut Pokemon, idx: usize) {
    let fresh = p.is_unrevealed();
    if fresh {
        // Needs a name so switches to it can be enumerated in lookahead
        p.name = Some(format!("unknown-{}", idx + 1));
    }

    let typing = *p.typing.get_or_insert(Type::Normal);
    p.atk.get_or_insert(STAT_MIDPOINT);
    p.def.get_or_insert(STAT_MIDPOINT);
    p.speed.get_or_insert(STAT_MIDPOINT);
    let max_hp = *p
        .max_hp
        .get_or_insert(STAT_MIDPOINT.max(p.current_hp));
    if fresh {
        // Never seen on the field, so never damaged
        p.current_hp = max_hp;
    }

    // Guarantee a STAB option in the first free slot
    let has_stab = p
        .moves
        .iter()
        .any(|m| m.is_known() && m.typing == Some(typing));
    if !has_stab {
        let stab = Move::stab_filler(typing);
        if p.find_move(stab.name()).is_none() {
            if let Some(slot) = p.moves.iter().position(|m| !m.is_known()) {
                p.moves[slot] = stab;
            }
        }
    }

    // One neutral filler if a slot is still free; further unknown slots
    // stay unknown and contribute no actions
    let filler = Move::filler();
    if p.find_move(filler.name()).is_none() {
        if let Some(slot) = p.moves.iter().position(|m| !m.is_known()) {
            p.moves[slot] = filler;
        }
    }
}
