//! The attack-damage formula, effectiveness lookup, and rounding policy.

use crate::creature::Creature;
use crate::moves::{Move, MoveClass, MoveId};
use crate::stats::Stat;
use crate::types::{effectiveness_multiplier, type_effectiveness};
use crate::types::Type;

/// Base magnitude of Hyperkinetic Strike's Speed-scaled secondary component.
/// The in-game value; an external reference claims it should be 64 and use
/// ceiling rounding, but the observed behavior is kept until product says
/// otherwise.
const SECONDARY_STRIKE_BASE: f64 = 59.0;

/// Type effectiveness of an attack type into a creature. A nullified target
/// flattens everything to 1.0; otherwise both defending types multiply (an
/// absent second type contributes 1.0).
pub fn effectiveness(attack_type: Type, target: &Creature) -> f64 {
    if target.nullified() {
        return 1.0;
    }
    effectiveness_multiplier(type_effectiveness(attack_type, target.types.0, target.types.1))
}

/// Compute the damage `attacker` deals to `target` with `attack`, given the
/// folded hook modifier.
///
/// Status-class moves always deal 0. The burn penalty reaches this formula
/// through the attacker's live Atk/SpA. Magnitudes strictly between 0 and 1
/// round away from zero: damage never silently vanishes unless a true
/// immunity zeroed it. The general case rounds to nearest; Hyperkinetic
/// Strike alone truncates toward zero, a preserved quirk.
pub fn calc_damage(attacker: &Creature, attack: &Move, target: &Creature, modifiers: f64) -> i32 {
    let mut damage = f64::from(attack.power);
    match attack.class {
        MoveClass::Status => return 0,
        MoveClass::Physical => {
            damage *= attacker.live_stat(Stat::Atk) as f64 / target.live_stat(Stat::Def) as f64;
        }
        MoveClass::Special => {
            damage *= attacker.live_stat(Stat::SpA) as f64 / target.live_stat(Stat::SpD) as f64;
        }
    }

    damage *= f64::from(attacker.level);
    damage /= 200.0;
    damage += 7.0;
    damage *= effectiveness(attack.kind, target);
    damage *= modifiers;

    if attack.id == MoveId::HyperkineticStrike {
        // Additive Speed-scaled component; deliberately outside the modifier
        // product above, matching the live game.
        damage += (f64::from(attacker.level) / 200.0)
            * (attacker.live_stat(Stat::Spe) as f64 / target.live_stat(Stat::SpD) as f64)
            * SECONDARY_STRIKE_BASE;
    }

    if attack.kind == attacker.types.0 || Some(attack.kind) == attacker.types.1 {
        damage *= 1.5; // STAB
    }

    if damage != 0.0 && damage.abs() < 1.0 {
        return if damage < 0.0 { -1 } else { 1 };
    }
    if attack.id == MoveId::HyperkineticStrike {
        damage.trunc() as i32
    } else {
        damage.round() as i32
    }
}

/// Hits needed to knock the target out, from full HP.
pub fn n_hko(attacker: &Creature, attack: &Move, target: &Creature) -> u32 {
    let damage = calc_damage(attacker, attack, target, 1.0);
    if damage <= 0 {
        return u32::MAX;
    }
    target.max_hp() / damage as u32 + 1
}
