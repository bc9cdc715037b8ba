//! Per-player belief views and observation propagation

use zorua_battle::{
    Action, BattleState, MOVE_SLOTS, Pokemon, Side, Team, TurnOutcome,
};

use crate::inference::{estimate_attack, estimate_defense, estimate_speed};

/// One player's partial knowledge of the match.
///
/// Structurally a [`BattleState`]; the owner's side always mirrors the
/// canonical state exactly, while opponent-side entries start unrevealed
/// and are filled in by observation and inference. The view never holds
/// information its owner could not have legitimately observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeliefView {
    pub owner: Side,
    pub state: BattleState,

    /// Per member of the owner's own team, which move slots the opponent
    /// has seen used. Drives payoff masking: the opponent can only
    /// reason about moves it has seen.
    pub shown: Vec<[bool; MOVE_SLOTS]>,
}

impl BeliefView {
    /// Fresh view at match start: own side fully known, opponent side
    /// unrevealed except the lead's identity and HP.
    pub fn open(owner: Side, truth: &BattleState) -> Self {
        let own = truth.team(owner).clone();
        let foe_truth = truth.team(owner.opponent());
        let mut foe = Team::unrevealed(foe_truth.len());
        reveal_identity(
            &mut foe.members[truth.active[owner.opponent().index()]],
            &foe_truth.members[truth.active[owner.opponent().index()]],
        );

        let shown = vec![[false; MOVE_SLOTS]; own.len()];
        let teams = match owner {
            Side::P1 => [own, foe],
            Side::P2 => [foe, own],
        };

        Self {
            owner,
            state: BattleState {
                teams,
                active: truth.active,
            },
            shown,
        }
    }

    /// The owner's on-field Pokemon as believed (always ground truth)
    pub fn own_on_field(&self) -> &Pokemon {
        self.state.on_field(self.owner)
    }

    /// The opponent's on-field Pokemon as believed
    pub fn foe_on_field(&self) -> &Pokemon {
        self.state.on_field(self.owner.opponent())
    }

    /// Propagate one resolved turn into this view.
    ///
    /// Copies everything the owner can see from the canonical state
    /// (own side exactly, opponent identities and HP), records a newly
    /// used opponent move, and tightens stat estimates through the
    /// reverse calculators where the evidence is unambiguous.
    pub fn observe(
        &mut self,
        truth: &BattleState,
        own_action: Option<&Action>,
        foe_action: Option<&Action>,
        outcome: &TurnOutcome,
    ) {
        let own = self.owner;
        let foe = own.opponent();

        // Pre-turn actives, read off the stale view; a both-switch turn's
        // ordering belongs to the outgoing pair, not the incoming one.
        let own_pre_idx = self.state.active[own.index()];
        let foe_pre_idx = self.state.active[foe.index()];

        // HP before the turn, read off the stale view; needed to
        // attribute damage once the view is synced.
        let own_target_idx = truth.active[own.index()];
        let own_hp_before = self.state.teams[own.index()].members[own_target_idx].current_hp;
        let foe_target_idx = truth.active[foe.index()];
        let foe_target_before = &self.state.teams[foe.index()].members[foe_target_idx];
        // A foe first seen this turn entered the field undamaged
        let foe_hp_before = if foe_target_before.is_unrevealed() {
            truth.teams[foe.index()].members[foe_target_idx].max_hp
        } else {
            Some(foe_target_before.current_hp)
        };

        // On-field identities are public after every turn
        self.state.active = truth.active;
        let foe_active = &mut self.state.teams[foe.index()].members[foe_target_idx];
        if foe_active.is_unrevealed() {
            reveal_identity(foe_active, &truth.teams[foe.index()].members[foe_target_idx]);
        }

        // A move the opponent actually used becomes known
        let foe_attacked = matches!(foe_action, Some(Action::Move(_))) && outcome.acted[foe.index()];
        if let (Some(Action::Move(name)), true) = (foe_action, foe_attacked) {
            let true_attacker = &truth.teams[foe.index()].members[truth.active[foe.index()]];
            let observed = true_attacker
                .find_move(name)
                .unwrap_or_else(|| panic!("observed foe move {:?} not in canonical state", name))
                .clone();
            self.state.teams[foe.index()].members[truth.active[foe.index()]]
                .record_move(&observed);
        }

        // The owner's own used move is now shown to the opponent
        let own_attacked = matches!(own_action, Some(Action::Move(_))) && outcome.acted[own.index()];
        if let (Some(Action::Move(name)), true) = (own_action, own_attacked) {
            let attacker_idx = truth.active[own.index()];
            if let Some(slot) = self.state.teams[own.index()].members[attacker_idx]
                .moves
                .iter()
                .position(|m| m.name.as_deref() == Some(name))
            {
                self.shown[attacker_idx][slot] = true;
            }
        }

        // Tighten the foe's attack estimate from the hit we just took,
        // unless our Pokemon fainted (the loss signal is truncated).
        if foe_attacked && !outcome.fainted[own.index()] {
            if let Some(Action::Move(name)) = foe_action {
                let attacker = truth.teams[foe.index()].members[truth.active[foe.index()]].clone();
                let mv = attacker.find_move(name).cloned();
                let target = self.state.teams[own.index()].members[own_target_idx].clone();
                let hp_after = truth.teams[own.index()].members[own_target_idx].current_hp;
                let hp_loss = own_hp_before.saturating_sub(hp_after);
                if let Some(mv) = mv {
                    // Borrow our belief about the attacker, not the truth
                    let believed = &self.state.teams[foe.index()].members[truth.active[foe.index()]];
                    if let Some((low, _)) = estimate_attack(&mv, believed, &target, hp_loss) {
                        let believed =
                            &mut self.state.teams[foe.index()].members[truth.active[foe.index()]];
                        believed.atk = Some(believed.atk.unwrap_or(0).max(low));
                    }
                }
            }
        }

        // Tighten the struck foe's defense estimate from our own hit
        if own_attacked && !outcome.fainted[foe.index()] {
            if let (Some(Action::Move(name)), Some(before)) = (own_action, foe_hp_before) {
                let attacker = truth.teams[own.index()].members[truth.active[own.index()]].clone();
                let mv = attacker.find_move(name).cloned();
                let hp_after = truth.teams[foe.index()].members[foe_target_idx].current_hp;
                let hp_loss = before.saturating_sub(hp_after);
                if let Some(mv) = mv {
                    let believed = &self.state.teams[foe.index()].members[foe_target_idx];
                    if let Some((low, _)) = estimate_defense(&mv, &attacker, believed, hp_loss) {
                        let believed = &mut self.state.teams[foe.index()].members[foe_target_idx];
                        believed.def = Some(believed.def.unwrap_or(0).max(low));
                    }
                }
            }
        }

        // Turn order bounds the speed of whichever foe was on the field
        // when the order was decided
        let ordered = outcome.moved_first.iter().any(|&b| b);
        if ordered {
            let foe_first = outcome.moved_first[foe.index()];
            let own_speed = truth.teams[own.index()].members[own_pre_idx]
                .speed
                .unwrap_or(0);
            if let Some(bound) = estimate_speed(foe_first, own_action, foe_action, own_speed) {
                let believed = &mut self.state.teams[foe.index()].members[foe_pre_idx];
                believed.speed = Some(believed.speed.unwrap_or(0).max(bound));
            }
        }

        // Sync everything the owner sees directly: the whole own side,
        // and the foe's on-field HP.
        self.state.teams[own.index()] = truth.teams[own.index()].clone();
        self.state.teams[foe.index()].members[foe_target_idx].current_hp =
            truth.teams[foe.index()].members[foe_target_idx].current_hp;
    }
}

/// First sight: identity, typing and HP become public; stats and moves
/// stay hidden.
fn reveal_identity(belief: &mut Pokemon, truth: &Pokemon) {
    belief.name = truth.name.clone();
    belief.typing = truth.typing;
    belief.max_hp = truth.max_hp;
    belief.current_hp = truth.current_hp;
}
