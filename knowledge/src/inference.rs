//! Reverse calculators: bound hidden opponent stats from observed
//! damage and turn order.
//!
//! Each calculator returns `None` for the no-information case (immunity,
//! a degenerate inversion, mismatched priority classes). Callers skip
//! the belief update; this is a legitimate signal, not an error.

use zorua_battle::{Action, Move, Pokemon, ROLL_MAX, ROLL_MIN, STAB, STAT_MAX, STAT_MIN};

/// Fixed base-term constants of the forward damage formula
const LEVEL_TERM: f64 = 42.0;
const BASE_DIVISOR: f64 = 50.0;

fn clamp_stat(value: f64) -> u32 {
    (value.max(STAT_MIN as f64).min(STAT_MAX as f64)) as u32
}

/// Bound the attacker's unknown atk stat from an observed HP loss.
///
/// Inverts the damage formula at the two extreme rolls: roll 1.0 yields
/// the lower bound, roll 0.85 the upper. The two floors of the forward
/// formula are absorbed by widening each bound one step. Returns `None`
/// when the move cannot carry information about atk: immunity (damage is
/// invariant to atk) or an HP loss too small to invert.
pub fn estimate_attack(
    mv: &Move,
    attacker: &Pokemon,
    target: &Pokemon,
    hp_loss: u32,
) -> Option<(u32, u32)> {
    let power = mv.power? as f64;
    let move_type = mv.typing?;
    let def = target.def? as f64;
    let effectiveness = move_type.effectiveness(target.typing?);
    if effectiveness == 0.0 || power == 0.0 {
        return None;
    }
    let stab = if attacker.typing? == move_type { STAB } else { 1.0 };

    // base = floor(42*power*atk/def / 50) + 2, then scaled by roll*stab*eff
    let base_low = hp_loss as f64 / (ROLL_MAX * stab * effectiveness);
    let base_high = (hp_loss + 1) as f64 / (ROLL_MIN * stab * effectiveness);
    if base_low - 2.0 <= 0.0 {
        return None;
    }

    let low = ((base_low - 2.0) * BASE_DIVISOR * def / (LEVEL_TERM * power)).floor();
    let high = ((base_high - 1.0) * BASE_DIVISOR * def / (LEVEL_TERM * power)).ceil();
    Some((clamp_stat(low), clamp_stat(high)))
}

/// Bound the target's unknown def stat from an observed HP loss.
///
/// The symmetric inversion: def scales damage down, so the extreme rolls
/// swap roles (roll 0.85 yields the lower def bound, roll 1.0 the upper).
pub fn estimate_defense(
    mv: &Move,
    attacker: &Pokemon,
    target: &Pokemon,
    hp_loss: u32,
) -> Option<(u32, u32)> {
    let power = mv.power? as f64;
    let move_type = mv.typing?;
    let atk = attacker.atk? as f64;
    let effectiveness = move_type.effectiveness(target.typing?);
    if effectiveness == 0.0 || power == 0.0 {
        return None;
    }
    let stab = if attacker.typing? == move_type { STAB } else { 1.0 };

    let base_low = hp_loss as f64 / (ROLL_MAX * stab * effectiveness);
    let base_high = (hp_loss + 1) as f64 / (ROLL_MIN * stab * effectiveness);
    if base_low - 2.0 <= 0.0 {
        return None;
    }

    let low = (LEVEL_TERM * power * atk / (BASE_DIVISOR * (base_high - 1.0))).floor();
    let high = (LEVEL_TERM * power * atk / (BASE_DIVISOR * (base_low - 2.0))).ceil();
    Some((clamp_stat(low), clamp_stat(high)))
}

/// Bound the opponent's unknown speed from observed turn order.
///
/// Only meaningful when both declared actions were in the same priority
/// class (both switches or both attacks); ordering across classes says
/// nothing about speed. The bound is one-sided: the opponent acting
/// first puts it at least one point above ours, acting second at most
/// one point below.
pub fn estimate_speed(
    foe_acted_first: bool,
    own_action: Option<&Action>,
    foe_action: Option<&Action>,
    own_speed: u32,
) -> Option<u32> {
    let (own, foe) = (own_action?, foe_action?);
    if own.is_switch() != foe.is_switch() {
        return None;
    }
    let bound = if foe_acted_first {
        own_speed + 1
    } else {
        own_speed.saturating_sub(1).max(STAT_MIN)
    };
    Some(bound.min(STAT_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use zorua_battle::{Type, damage};

    fn fighter(typing: Type, atk: u32, def: u32) -> Pokemon {
        Pokemon::new(
            "fighter",
            typing,
            200,
            atk,
            def,
            100,
            std::array::from_fn(|_| Move::unknown()),
        )
    }

    #[test]
    fn test_attack_round_trip_brackets_truth() {
        let mv = Move::new("Surf", Type::Water, 90);
        let target = fighter(Type::Fire, 80, 95);
        for true_atk in [40, 100, 180, 255] {
            let attacker = fighter(Type::Water, true_atk, 100);
            for roll in [0.85, 0.9, 0.95, 1.0] {
                let loss = damage(&mv, &attacker, &target, roll);
                let (low, high) =
                    estimate_attack(&mv, &attacker, &target, loss).expect("informative hit");
                assert!(
                    low <= true_atk && true_atk <= high,
                    "atk {} outside [{}, {}] at roll {}",
                    true_atk,
                    low,
                    high,
                    roll
                );
            }
        }
    }

    #[test]
    fn test_defense_round_trip_brackets_truth() {
        let mv = Move::new("Slash", Type::Normal, 70);
        let attacker = fighter(Type::Normal, 120, 100);
        for true_def in [50, 100, 200] {
            let target = fighter(Type::Grass, 80, true_def);
            for roll in [0.85, 0.92, 1.0] {
                let loss = damage(&mv, &attacker, &target, roll);
                let (low, high) =
                    estimate_defense(&mv, &attacker, &target, loss).expect("informative hit");
                assert!(
                    low <= true_def && true_def <= high,
                    "def {} outside [{}, {}] at roll {}",
                    true_def,
                    low,
                    high,
                    roll
                );
            }
        }
    }

    #[test]
    fn test_immunity_carries_no_information() {
        let mv = Move::new("Slam", Type::Normal, 80);
        let attacker = fighter(Type::Normal, 150, 100);
        let ghost = fighter(Type::Ghost, 80, 80);
        assert_eq!(estimate_attack(&mv, &attacker, &ghost, 0), None);
        assert_eq!(estimate_defense(&mv, &attacker, &ghost, 0), None);
    }

    #[test]
    fn test_tiny_loss_degenerates() {
        // A clamped-to-1 chip hit cannot be inverted
        let mv = Move::new("Flick", Type::Normal, 40);
        let attacker = fighter(Type::Normal, 10, 100);
        let target = fighter(Type::Normal, 80, 255);
        assert_eq!(estimate_attack(&mv, &attacker, &target, 1), None);
    }

    #[test]
    fn test_bounds_clamped_to_stat_range() {
        let mv = Move::new("Blast", Type::Fire, 120);
        let attacker = fighter(Type::Fire, 255, 100);
        let target = fighter(Type::Grass, 80, 40);
        let loss = damage(&mv, &attacker, &target, 1.0);
        let (_, high) = estimate_attack(&mv, &attacker, &target, loss).unwrap();
        assert!(high <= STAT_MAX);
    }

    #[test]
    fn test_speed_same_class_only() {
        let atk1 = Action::Move("Tackle".into());
        let atk2 = Action::Move("Ember".into());
        let sw = Action::Switch("b2".into());

        assert_eq!(estimate_speed(true, Some(&atk1), Some(&atk2), 100), Some(101));
        assert_eq!(estimate_speed(false, Some(&atk1), Some(&atk2), 100), Some(99));
        assert_eq!(estimate_speed(true, Some(&sw), Some(&atk2), 100), None);
        assert_eq!(estimate_speed(true, None, Some(&atk2), 100), None);
        assert_eq!(
            estimate_speed(true, Some(&sw), Some(&Action::Switch("a2".into())), 100),
            Some(101)
        );
    }
}
