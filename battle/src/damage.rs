//! The damage formula and its forward constants

use crate::types::{Move, Pokemon};

/// Random damage roll range
pub const ROLL_MIN: f64 = 0.85;
pub const ROLL_MAX: f64 = 1.0;

/// STAB multiplier when the move's type matches its user's
pub const STAB: f64 = 1.5;

/// Level-derived base term: `2 * 100 / 5 + 2` at the fixed level 100
const LEVEL_TERM: u64 = 42;

/// Compute damage for `attacker` hitting `defender` with `mv` at the
/// given roll (`0.85..=1.0`).
///
/// `floor(floor(42 * power * atk / def) / 50) + 2`, scaled by the roll,
/// STAB and type effectiveness, floored, and clamped to at least 1
/// whenever effectiveness and power are both nonzero. Immunity gives
/// exactly 0.
///
/// # Panics
///
/// Panics if the move's type or power, the attacker's atk, the
/// defender's def, or either typing is unknown. Callers simulate on
/// completed states, where every field is populated.
pub fn damage(mv: &Move, attacker: &Pokemon, defender: &Pokemon, roll: f64) -> u32 {
    let power = mv.power.expect("damage: move power unknown") as u64;
    let move_type = mv.typing.expect("damage: move type unknown");
    let atk = attacker.atk.expect("damage: attacker atk unknown") as u64;
    let def = defender.def.expect("damage: defender def unknown").max(1) as u64;
    let attacker_type = attacker.typing.expect("damage: attacker type unknown");
    let defender_type = defender.typing.expect("damage: defender type unknown");

    let effectiveness = move_type.effectiveness(defender_type);
    if effectiveness == 0.0 || power == 0 {
        return 0;
    }

    let base = (LEVEL_TERM * power * atk / def) / 50 + 2;
    let stab = if attacker_type == move_type { STAB } else { 1.0 };
    let dealt = (base as f64 * roll * stab * effectiveness).floor() as u32;
    dealt.max(1)
}
