//! Payoff-matrix construction

use rand::Rng;
use zorua_battle::{
    Action, BattleState, Move, Side, TurnContext, legal_actions, resolve_turn,
};
use zorua_knowledge::BeliefView;

use crate::eval::Evaluator;

/// A normal-form payoff matrix over both sides' legal actions, built
/// fresh per decision. `cells[i][j]` holds `(own payoff, foe payoff)`
/// for own action `i` against foe action `j`.
#[derive(Debug, Clone)]
pub struct PayoffMatrix {
    pub own_actions: Vec<Action>,
    pub foe_actions: Vec<Action>,
    pub cells: Vec<Vec<(f64, f64)>>,
}

impl PayoffMatrix {
    pub fn rows(&self) -> usize {
        self.own_actions.len()
    }

    pub fn cols(&self) -> usize {
        self.foe_actions.len()
    }
}

/// Build the payoff matrix for the view's owner in a completed position.
///
/// Every cell is a one-turn simulation with a fixed damage roll and tie
/// order, scored twice: the own payoff on the true completed position,
/// the foe payoff on a masked copy in which every own move the opponent
/// has not yet seen is replaced by the neutral filler. The masking is
/// the model of information asymmetry: the opponent cannot price in
/// moves it does not know exist.
pub fn build_matrix<R: Rng>(
    view: &BeliefView,
    full: &BattleState,
    evaluator: &dyn Evaluator,
    sim_roll: f64,
    rng: &mut R,
) -> PayoffMatrix {
    let owner = view.owner;
    let foe = owner.opponent();
    let own_actions = legal_actions(full, owner);
    let foe_actions = legal_actions(full, foe);

    let masked = masked_state(view, full);
    let ctx = TurnContext {
        roll: Some(sim_roll),
        first_on_tie: Some(Side::P1),
    };

    let mut cells = Vec::with_capacity(own_actions.len());
    for own_action in &own_actions {
        let mut row = Vec::with_capacity(foe_actions.len());
        for foe_action in &foe_actions {
            let mut pair: [Option<&Action>; 2] = [None, None];
            pair[owner.index()] = Some(own_action);
            pair[foe.index()] = Some(foe_action);

            let mut sim = full.clone();
            resolve_turn(&mut sim, pair, &ctx, rng);
            let own_payoff = evaluator.evaluate(&sim.perspective(owner));

            let masked_own = mask_action(view, full, own_action);
            pair[owner.index()] = Some(&masked_own);
            let mut sim = masked.clone();
            resolve_turn(&mut sim, pair, &ctx, rng);
            let foe_payoff = evaluator.evaluate(&sim.perspective(foe));

            row.push((own_payoff, foe_payoff));
        }
        cells.push(row);
    }

    PayoffMatrix {
        own_actions,
        foe_actions,
        cells,
    }
}

/// The position as the opponent can perceive it: the owner's unshown
/// moves degraded to the neutral filler.
fn masked_state(view: &BeliefView, full: &BattleState) -> BattleState {
    let mut masked = full.clone();
    let own = view.owner.index();
    for (i, member) in masked.teams[own].members.iter_mut().enumerate() {
        for (slot, mv) in member.moves.iter_mut().enumerate() {
            if mv.is_known() && !view.shown[i][slot] {
                *mv = Move::filler();
            }
        }
    }
    masked
}

/// Map an own action onto the masked position: a move the opponent has
/// not seen becomes the filler move.
fn mask_action(view: &BeliefView, full: &BattleState, action: &Action) -> Action {
    let Action::Move(name) = action else {
        return action.clone();
    };
    let idx = full.active[view.owner.index()];
    let member = &full.teams[view.owner.index()].members[idx];
    let slot = member
        .moves
        .iter()
        .position(|m| m.name.as_deref() == Some(name));
    match slot {
        Some(s) if !view.shown[idx][s] => Action::Move(Move::filler().name().to_string()),
        _ => action.clone(),
    }
}
