//! Type definitions and the type-effectiveness chart.
//!
//! Effectiveness is stored on a 4-scale (2 = 0.5x, 4 = 1x, 8 = 2x) so chart
//! entries and dual-type products stay exact integers; callers convert to a
//! float multiplier at the damage formula boundary.

use serde::Serialize;

/// Number of elemental types.
pub const TYPE_COUNT: usize = 12;

/// Elemental type of a creature or move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Type {
    Neutral = 0,
    Fire = 1,
    Water = 2,
    Nature = 3,
    Electric = 4,
    Earth = 5,
    Mental = 6,
    Wind = 7,
    Digital = 8,
    Melee = 9,
    Crystal = 10,
    Toxic = 11,
}

static TYPES_BY_NAME: phf::Map<&'static str, Type> = phf::phf_map! {
    "neutral" => Type::Neutral,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "nature" => Type::Nature,
    "electric" => Type::Electric,
    "earth" => Type::Earth,
    "mental" => Type::Mental,
    "wind" => Type::Wind,
    "digital" => Type::Digital,
    "melee" => Type::Melee,
    "crystal" => Type::Crystal,
    "toxic" => Type::Toxic,
};

impl Type {
    pub const COUNT: usize = TYPE_COUNT;

    pub fn from_name(name: &str) -> Option<Type> {
        TYPES_BY_NAME.get(name.to_lowercase().as_str()).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::Neutral => "Neutral",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Nature => "Nature",
            Type::Electric => "Electric",
            Type::Earth => "Earth",
            Type::Mental => "Mental",
            Type::Wind => "Wind",
            Type::Digital => "Digital",
            Type::Melee => "Melee",
            Type::Crystal => "Crystal",
            Type::Toxic => "Toxic",
        }
    }
}

/// Effectiveness of one attacking type into one defending type, 4-scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeEffectiveness {
    Resisted = 2,
    Normal = 4,
    Effective = 8,
}

use TypeEffectiveness::{Effective as E, Normal as N, Resisted as R};

/// `TYPE_CHART[attacking][defending]`, both indexed by `Type as usize`.
pub static TYPE_CHART: [[TypeEffectiveness; TYPE_COUNT]; TYPE_COUNT] = [
    // Neutral attacking
    [N, N, N, N, N, N, R, N, N, N, N, N],
    // Fire attacking
    [N, R, R, E, N, R, N, N, N, N, E, N],
    // Water attacking
    [N, E, R, R, N, E, N, N, E, N, N, R],
    // Nature attacking
    [N, R, E, R, N, E, N, N, N, N, N, R],
    // Electric attacking
    [N, N, E, R, R, R, E, E, E, N, R, N],
    // Earth attacking
    [N, E, R, R, E, N, N, R, N, N, E, N],
    // Mental attacking
    [E, N, N, N, N, N, N, N, N, E, R, N],
    // Wind attacking
    [N, N, N, N, R, N, N, R, N, N, N, E],
    // Digital attacking
    [N, N, N, N, N, N, E, N, E, E, N, N],
    // Melee attacking
    [N, N, N, N, N, E, R, N, N, R, E, N],
    // Crystal attacking
    [N, R, N, N, E, R, E, N, N, N, N, N],
    // Toxic attacking
    [N, N, E, E, N, R, N, N, R, N, R, R],
];

/// Combined effectiveness against one or two defending types, 4-scale
/// (1 = 0.25x .. 16 = 4x). An absent second type contributes 1x.
pub fn type_effectiveness(attack: Type, def1: Type, def2: Option<Type>) -> u8 {
    let e1 = TYPE_CHART[attack as usize][def1 as usize] as u16;
    let e2 = match def2 {
        Some(t) => TYPE_CHART[attack as usize][t as usize] as u16,
        None => 4,
    };
    (e1 * e2 / 4) as u8
}

/// 4-scale effectiveness as the damage-formula multiplier.
#[inline]
pub fn effectiveness_multiplier(eff: u8) -> f64 {
    f64::from(eff) / 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_lookup() {
        assert_eq!(Type::from_name("fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("Fire"), Some(Type::Fire));
        assert_eq!(Type::from_name("invalid"), None);
    }

    #[test]
    fn test_single_type_effectiveness() {
        // Fire into Nature = 2x
        assert_eq!(type_effectiveness(Type::Fire, Type::Nature, None), 8);
        // Electric into Crystal = 0.5x
        assert_eq!(type_effectiveness(Type::Electric, Type::Crystal, None), 2);
        // Neutral into Mental = 0.5x
        assert_eq!(type_effectiveness(Type::Neutral, Type::Mental, None), 2);
        // Toxic into Toxic = 0.5x
        assert_eq!(type_effectiveness(Type::Toxic, Type::Toxic, None), 2);
    }

    #[test]
    fn test_dual_type_effectiveness() {
        // Fire into Nature/Crystal = 4x
        assert_eq!(
            type_effectiveness(Type::Fire, Type::Nature, Some(Type::Crystal)),
            16
        );
        // Fire into Crystal/Melee = 2x
        assert_eq!(
            type_effectiveness(Type::Fire, Type::Crystal, Some(Type::Melee)),
            8
        );
        // Electric into Crystal/Melee = 0.5x
        assert_eq!(
            type_effectiveness(Type::Electric, Type::Crystal, Some(Type::Melee)),
            2
        );
    }

    #[test]
    fn test_multiplier_conversion() {
        assert_eq!(effectiveness_multiplier(16), 4.0);
        assert_eq!(effectiveness_multiplier(8), 2.0);
        assert_eq!(effectiveness_multiplier(4), 1.0);
        assert_eq!(effectiveness_multiplier(2), 0.5);
        assert_eq!(effectiveness_multiplier(1), 0.25);
    }

    #[test]
    fn test_chart_is_total() {
        // Every pair has an entry strictly between immune and 4x; the game
        // has no outright type immunities.
        for atk in 0..TYPE_COUNT {
            for def in 0..TYPE_COUNT {
                let e = TYPE_CHART[atk][def] as u8;
                assert!(e == 2 || e == 4 || e == 8);
            }
        }
    }
}
