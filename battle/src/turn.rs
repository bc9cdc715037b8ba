//! Turn resolution

use rand::Rng;

use crate::action::Action;
use crate::damage::{ROLL_MAX, ROLL_MIN, damage};
use crate::state::BattleState;
use crate::types::Side;

/// Per-turn overrides for the engine's two sources of randomness.
/// `None` fields are drawn from the caller's RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnContext {
    /// Forced damage roll (`0.85..=1.0`), applied to every hit this turn
    pub roll: Option<f64>,

    /// Forced winner of a speed tie
    pub first_on_tie: Option<Side>,
}

impl TurnContext {
    /// Fixed roll, ties to P1: fully deterministic resolution
    pub fn forced(roll: f64) -> Self {
        Self {
            roll: Some(roll),
            first_on_tie: Some(Side::P1),
        }
    }
}

/// What actually happened during one resolved turn, indexed by side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Whether the side's declared action executed (an attack declared by
    /// a Pokemon that fainted first does not)
    pub acted: [bool; 2],

    /// Whether the side's on-field Pokemon dropped to 0 HP this turn
    pub fainted: [bool; 2],

    /// Whether the side resolved first; both false when the turn had no
    /// ordering (single-action replacement turns)
    pub moved_first: [bool; 2],
}

/// Resolve one simultaneous turn in place.
///
/// - Both switch: both on-field indices update, no damage.
/// - Switch vs. attack: the switch resolves first and the incoming
///   Pokemon immediately takes the declared move's damage.
/// - Both attack: the faster side acts first (ties per `ctx`/`rng`); the
///   second attacker only acts if still alive.
/// - Exactly one action (post-faint replacement): it must be a switch;
///   no damage is exchanged.
///
/// Callers are expected to have run [`crate::action::validate_action`]
/// on both declarations.
///
/// # Panics
///
/// Panics if an action names a move or teammate the acting side does not
/// have, or if a lone action is not a switch. These are programming
/// errors upstream of the engine, not game conditions.
pub fn resolve_turn<R: Rng>(
    state: &mut BattleState,
    actions: [Option<&Action>; 2],
    ctx: &TurnContext,
    rng: &mut R,
) -> TurnOutcome {
    let mut outcome = TurnOutcome::default();

    match actions {
        [None, None] => outcome,
        [Some(a), None] => {
            apply_switch(state, Side::P1, lone_switch_name(a));
            outcome.acted[0] = true;
            outcome
        }
        [None, Some(a)] => {
            apply_switch(state, Side::P2, lone_switch_name(a));
            outcome.acted[1] = true;
            outcome
        }
        [Some(a1), Some(a2)] => {
            let order = turn_order(state, ctx, rng);
            outcome.moved_first[order[0].index()] = true;

            match (a1, a2) {
                (Action::Switch(n1), Action::Switch(n2)) => {
                    apply_switch(state, Side::P1, n1);
                    apply_switch(state, Side::P2, n2);
                    outcome.acted = [true, true];
                }
                (Action::Switch(name), Action::Move(mv)) => {
                    apply_switch(state, Side::P1, name);
                    strike(state, Side::P2, mv, ctx, rng, &mut outcome);
                    outcome.acted = [true, true];
                    outcome.moved_first = [true, false];
                }
                (Action::Move(mv), Action::Switch(name)) => {
                    apply_switch(state, Side::P2, name);
                    strike(state, Side::P1, mv, ctx, rng, &mut outcome);
                    outcome.acted = [true, true];
                    outcome.moved_first = [false, true];
                }
                (Action::Move(m1), Action::Move(m2)) => {
                    let moves = [m1, m2];
                    let (first, second) = (order[0], order[1]);
                    strike(state, first, moves[first.index()], ctx, rng, &mut outcome);
                    outcome.acted[first.index()] = true;

                    // Second attacker only acts if it survived the hit
                    if state.on_field(second).is_alive() {
                        strike(state, second, moves[second.index()], ctx, rng, &mut outcome);
                        outcome.acted[second.index()] = true;
                    }
                }
            }
            outcome
        }
    }
}

/// Speed order for this turn, ties broken per `ctx` then `rng`
fn turn_order<R: Rng>(state: &BattleState, ctx: &TurnContext, rng: &mut R) -> [Side; 2] {
    let s1 = state.on_field(Side::P1).speed.unwrap_or(0);
    let s2 = state.on_field(Side::P2).speed.unwrap_or(0);
    let first = if s1 > s2 {
        Side::P1
    } else if s2 > s1 {
        Side::P2
    } else {
        ctx.first_on_tie.unwrap_or_else(|| {
            if rng.gen_bool(0.5) { Side::P1 } else { Side::P2 }
        })
    };
    [first, first.opponent()]
}

fn lone_switch_name(action: &Action) -> &str {
    match action {
        Action::Switch(name) => name,
        Action::Move(name) => {
            panic!("lone action must be a replacement switch, got move {:?}", name)
        }
    }
}

fn apply_switch(state: &mut BattleState, side: Side, name: &str) {
    let team = state.team(side);
    let Some(idx) = team.find(name) else {
        panic!("{}: no teammate named {:?}", side, name);
    };
    state.active[side.index()] = idx;
}

fn strike<R: Rng>(
    state: &mut BattleState,
    attacker_side: Side,
    move_name: &str,
    ctx: &TurnContext,
    rng: &mut R,
    outcome: &mut TurnOutcome,
) {
    let attacker = state.on_field(attacker_side);
    let Some(mv) = attacker.find_move(move_name).cloned() else {
        panic!(
            "{}: {} has no move named {:?}",
            attacker_side,
            attacker.name(),
            move_name
        );
    };
    let attacker = attacker.clone();
    let roll = ctx
        .roll
        .unwrap_or_else(|| rng.gen_range(ROLL_MIN..=ROLL_MAX));

    let defender_side = attacker_side.opponent();
    let defender = state.on_field_mut(defender_side);
    let dealt = damage(&mv, &attacker, defender, roll);
    defender.take_damage(dealt);
    if !defender.is_alive() {
        outcome.fainted[defender_side.index()] = true;
    }
}
