//! Embedded move data and lookup.
//!
//! A move is an immutable static record; resolution works on transient
//! copies so synergy variants and gear type-overrides never touch the table.

use crate::effect::{EffectEntry, EffectKey};
use crate::stats::Stat;
use crate::status::StatusId;
use crate::types::Type;
use serde::Serialize;

/// Damage class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MoveClass {
    Physical,
    Special,
    Status,
}

/// Which field positions a move reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TargetPattern {
    /// The user itself.
    SelfTarget,
    /// Any single creature, own side included.
    Single,
    /// A single creature other than the user.
    Other,
    /// Chains over the adjacency ring, up to 3 slots.
    Clockwise,
    /// The user's team, or just the ally.
    TeamOrAlly,
    /// The user's whole team.
    WholeTeam,
    /// Every creature on the field.
    All,
}

/// Synergy linkage between a base move and its unlocked variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Synergy {
    None,
    /// Upgrades to `variant` while the user's ally carries `partner`.
    Base { partner: Type, variant: MoveId },
    /// Falls back to `base` when the required ally type is absent.
    Variant { base: MoveId },
}

#[derive(Clone, Copy)]
pub struct Move {
    pub id: MoveId,
    pub name: &'static str,
    pub kind: Type,
    pub class: MoveClass,
    pub power: u16,
    pub stamina: u16,
    /// Recharge turns gating reuse, separate from stamina cost.
    pub hold: u8,
    /// Declared priority, 0 (bottom) through 5 (top).
    pub priority: u8,
    pub target: TargetPattern,
    /// Effects applied to each resolved target.
    pub effects: &'static [EffectEntry],
    /// Effects applied to the user.
    pub self_effects: &'static [EffectEntry],
    pub synergy: Synergy,
}

impl Move {
    pub fn is_synergy_variant(&self) -> bool {
        matches!(self.synergy, Synergy::Variant { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum MoveId {
    CrystalBite = 0,
    BetaBurst = 1,
    EarthWave = 2,
    TurboChoreography = 3,
    StoneWall = 4,
    Stare = 5,
    HighPressureWater = 6,
    HighPressureWaterFire = 7,
    HyperkineticStrike = 8,
    ChainLightning = 9,
    HeatUp = 10,
    HaitoUchi = 11,
    SharpStabs = 12,
    Revitalize = 13,
    WindBlade = 14,
    Blizzard = 15,
    ToxicPlume = 16,
    Misogi = 17,
    AwfulSong = 18,
    Relax = 19,
    Strangle = 20,
    HookKick = 21,
    Confiscate = 22,
    WakeUp = 23,
    Tornado = 24,
    Block = 25,
}

static MOVES: [Move; 26] = [
    Move {
        id: MoveId::CrystalBite,
        name: "Crystal Bite",
        kind: Type::Crystal,
        class: MoveClass::Physical,
        power: 130,
        stamina: 26,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::BetaBurst,
        name: "Beta Burst",
        kind: Type::Mental,
        class: MoveClass::Special,
        power: 100,
        stamina: 23,
        hold: 0,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::EarthWave,
        name: "Earth Wave",
        kind: Type::Earth,
        class: MoveClass::Physical,
        power: 90,
        stamina: 20,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::TurboChoreography,
        name: "Turbo Choreography",
        kind: Type::Wind,
        class: MoveClass::Status,
        power: 0,
        stamina: 15,
        hold: 2,
        priority: 1,
        target: TargetPattern::WholeTeam,
        effects: &[(EffectKey::Stat(Stat::Spe), 1)],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::StoneWall,
        name: "Stone Wall",
        kind: Type::Earth,
        class: MoveClass::Status,
        power: 0,
        stamina: 18,
        hold: 1,
        priority: 1,
        target: TargetPattern::Single,
        effects: &[(EffectKey::Stat(Stat::Def), 2)],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::Stare,
        name: "Stare",
        kind: Type::Mental,
        class: MoveClass::Status,
        power: 0,
        stamina: 6,
        hold: 0,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[(EffectKey::Stat(Stat::SpA), -1)],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::HighPressureWater,
        name: "High-pressure Water",
        kind: Type::Water,
        class: MoveClass::Special,
        power: 50,
        stamina: 15,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::Base {
            partner: Type::Fire,
            variant: MoveId::HighPressureWaterFire,
        },
    },
    Move {
        id: MoveId::HighPressureWaterFire,
        name: "High-pressure Water +Fire",
        kind: Type::Water,
        class: MoveClass::Special,
        power: 50,
        stamina: 15,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[(EffectKey::Status(StatusId::Burned), 3)],
        self_effects: &[],
        synergy: Synergy::Variant {
            base: MoveId::HighPressureWater,
        },
    },
    Move {
        id: MoveId::HyperkineticStrike,
        name: "Hyperkinetic Strike",
        kind: Type::Electric,
        class: MoveClass::Special,
        power: 50,
        stamina: 23,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::ChainLightning,
        name: "Chain Lightning",
        kind: Type::Electric,
        class: MoveClass::Special,
        power: 60,
        stamina: 18,
        hold: 1,
        priority: 2,
        target: TargetPattern::Clockwise,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::HeatUp,
        name: "Heat Up",
        kind: Type::Fire,
        class: MoveClass::Physical,
        power: 50,
        stamina: 15,
        hold: 0,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::HaitoUchi,
        name: "Haito Uchi",
        kind: Type::Melee,
        class: MoveClass::Physical,
        power: 45,
        stamina: 6,
        hold: 0,
        priority: 4,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::SharpStabs,
        name: "Sharp Stabs",
        kind: Type::Crystal,
        class: MoveClass::Physical,
        power: 100,
        stamina: 18,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::Revitalize,
        name: "Revitalize",
        kind: Type::Water,
        class: MoveClass::Status,
        power: 0,
        stamina: 12,
        hold: 1,
        priority: 2,
        target: TargetPattern::TeamOrAlly,
        effects: &[(EffectKey::Status(StatusId::Regenerated), 2)],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::WindBlade,
        name: "Wind Blade",
        kind: Type::Wind,
        class: MoveClass::Physical,
        power: 100,
        stamina: 21,
        hold: 1,
        priority: 3,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::Blizzard,
        name: "Blizzard",
        kind: Type::Wind,
        class: MoveClass::Special,
        power: 90,
        stamina: 28,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[(EffectKey::Status(StatusId::Cold), 2)],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::ToxicPlume,
        name: "Toxic Plume",
        kind: Type::Toxic,
        class: MoveClass::Special,
        power: 65,
        stamina: 22,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[(EffectKey::Status(StatusId::Poisoned), 2)],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::Misogi,
        name: "Misogi",
        kind: Type::Water,
        class: MoveClass::Status,
        power: 0,
        stamina: 12,
        hold: 1,
        priority: 2,
        target: TargetPattern::TeamOrAlly,
        effects: &[
            (EffectKey::Status(StatusId::Poisoned), -1),
            (EffectKey::Status(StatusId::Burned), -1),
            (EffectKey::Status(StatusId::Doomed), -1),
        ],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::AwfulSong,
        name: "Awful Song",
        kind: Type::Neutral,
        class: MoveClass::Status,
        power: 0,
        stamina: 16,
        hold: 2,
        priority: 1,
        target: TargetPattern::Other,
        effects: &[(EffectKey::Status(StatusId::Seized), 3)],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::Relax,
        name: "Relax",
        kind: Type::Neutral,
        class: MoveClass::Status,
        power: 0,
        stamina: 0,
        hold: 2,
        priority: 0,
        target: TargetPattern::SelfTarget,
        effects: &[],
        self_effects: &[(EffectKey::Status(StatusId::Asleep), 2)],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::Strangle,
        name: "Strangle",
        kind: Type::Neutral,
        class: MoveClass::Physical,
        power: 60,
        stamina: 22,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[(EffectKey::Overexert, 1)],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::HookKick,
        name: "Hook Kick",
        kind: Type::Melee,
        class: MoveClass::Physical,
        power: 60,
        stamina: 10,
        hold: 0,
        priority: 3,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::Confiscate,
        name: "Confiscate",
        kind: Type::Digital,
        class: MoveClass::Status,
        power: 0,
        stamina: 14,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[(EffectKey::RemoveGear, 1)],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::WakeUp,
        name: "Wake Up",
        kind: Type::Electric,
        class: MoveClass::Status,
        power: 0,
        stamina: 8,
        hold: 0,
        priority: 2,
        target: TargetPattern::TeamOrAlly,
        effects: &[(EffectKey::Status(StatusId::Asleep), -1)],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::Tornado,
        name: "Tornado",
        kind: Type::Wind,
        class: MoveClass::Special,
        power: 80,
        stamina: 25,
        hold: 1,
        priority: 2,
        target: TargetPattern::Other,
        effects: &[],
        self_effects: &[],
        synergy: Synergy::None,
    },
    Move {
        id: MoveId::Block,
        name: "Block",
        kind: Type::Melee,
        class: MoveClass::Status,
        power: 0,
        stamina: 12,
        hold: 1,
        priority: 5,
        target: TargetPattern::SelfTarget,
        effects: &[],
        self_effects: &[(EffectKey::Stat(Stat::Def), 2)],
        synergy: Synergy::None,
    },
];

static MOVES_BY_NAME: phf::Map<&'static str, MoveId> = phf::phf_map! {
    "crystalbite" => MoveId::CrystalBite,
    "betaburst" => MoveId::BetaBurst,
    "earthwave" => MoveId::EarthWave,
    "turbochoreography" => MoveId::TurboChoreography,
    "stonewall" => MoveId::StoneWall,
    "stare" => MoveId::Stare,
    "highpressurewater" => MoveId::HighPressureWater,
    "highpressurewater+fire" => MoveId::HighPressureWaterFire,
    "hyperkineticstrike" => MoveId::HyperkineticStrike,
    "chainlightning" => MoveId::ChainLightning,
    "heatup" => MoveId::HeatUp,
    "haitouchi" => MoveId::HaitoUchi,
    "sharpstabs" => MoveId::SharpStabs,
    "revitalize" => MoveId::Revitalize,
    "windblade" => MoveId::WindBlade,
    "blizzard" => MoveId::Blizzard,
    "toxicplume" => MoveId::ToxicPlume,
    "misogi" => MoveId::Misogi,
    "awfulsong" => MoveId::AwfulSong,
    "relax" => MoveId::Relax,
    "strangle" => MoveId::Strangle,
    "hookkick" => MoveId::HookKick,
    "confiscate" => MoveId::Confiscate,
    "wakeup" => MoveId::WakeUp,
    "tornado" => MoveId::Tornado,
    "block" => MoveId::Block,
};

impl MoveId {
    pub const COUNT: usize = 26;

    pub fn from_name(name: &str) -> Option<MoveId> {
        MOVES_BY_NAME.get(name_key(name).as_str()).copied()
    }

    #[inline]
    pub fn data(self) -> &'static Move {
        &MOVES[self as usize]
    }
}

/// Normalized lookup key: lowercased, spaces/hyphens/apostrophes stripped,
/// `+` kept so synergy variants stay distinct.
pub(crate) fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '+')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_lookup() {
        let bite = MoveId::from_name("Crystal Bite").expect("Crystal Bite should exist");
        let data = bite.data();
        assert_eq!(data.power, 130);
        assert_eq!(data.kind, Type::Crystal);
        assert_eq!(data.class, MoveClass::Physical);
        assert_eq!(MoveId::from_name("High-pressure Water"), Some(MoveId::HighPressureWater));
        assert_eq!(MoveId::from_name("Falcon Punch"), None);
    }

    #[test]
    fn test_table_ids_match_indices() {
        for (i, mv) in MOVES.iter().enumerate() {
            assert_eq!(mv.id as usize, i, "{} out of place", mv.name);
        }
    }

    #[test]
    fn test_synergy_links_are_mutual() {
        let base = MoveId::HighPressureWater.data();
        let Synergy::Base { partner, variant } = base.synergy else {
            panic!("High-pressure Water should have a synergy variant");
        };
        assert_eq!(partner, Type::Fire);
        let variant = variant.data();
        assert!(variant.is_synergy_variant());
        assert_eq!(variant.synergy, Synergy::Variant { base: MoveId::HighPressureWater });
        // The variant keeps the base chassis and adds the burn rider.
        assert_eq!(variant.power, base.power);
        assert!(!variant.effects.is_empty());
    }

    #[test]
    fn test_status_moves_have_no_power() {
        for mv in &MOVES {
            if mv.class == MoveClass::Status {
                assert_eq!(mv.power, 0, "{} is Status-class with power", mv.name);
            }
        }
    }
}
