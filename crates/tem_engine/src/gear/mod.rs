//! Gear identifiers and behavior lookup.
//!
//! Gear is equippable and knockable-off; its hooks are suppressed while the
//! holder is seized. Like traits, behavior lives in a static registry of
//! hook tables.

mod implementations;
mod registry;

pub use registry::GEAR_REGISTRY;

use crate::hooks::HookTable;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum GearId {
    #[default]
    None = 0,
    AloeVera,
    BatonPass,
    Chamomile,
    Coat,
    DoubleScreen,
    Drill,
    EnergyDrink,
    FireChip,
    FirstAidKit,
    Grease,
    HackedMicrochip,
    Handcuffs,
    HandFan,
    IceCube,
    IronCoating,
    LightningRod,
    Matcha,
    Pansunscreen,
    Pillow,
    ReactiveVial,
    ResistanceBadge,
    RockShield,
    SenseiRobe,
    ShuinesHorn,
    Slingshot,
    Snare,
    Sweatband,
    Talisman,
    Taser,
    TinfoilHat,
    TucmaMask,
    Turban,
    Umbrella,
    WarDrum,
}

static GEAR_BY_NAME: phf::Map<&'static str, GearId> = phf::phf_map! {
    "aloevera" => GearId::AloeVera,
    "batonpass" => GearId::BatonPass,
    "chamomile" => GearId::Chamomile,
    "coat" => GearId::Coat,
    "doublescreen" => GearId::DoubleScreen,
    "drill" => GearId::Drill,
    "energydrink" => GearId::EnergyDrink,
    "firechip" => GearId::FireChip,
    "firstaidkit" => GearId::FirstAidKit,
    "grease" => GearId::Grease,
    "hackedmicrochip" => GearId::HackedMicrochip,
    "handcuffs" => GearId::Handcuffs,
    "handfan" => GearId::HandFan,
    "icecube" => GearId::IceCube,
    "ironcoating" => GearId::IronCoating,
    "lightningrod" => GearId::LightningRod,
    "matcha" => GearId::Matcha,
    "pansunscreen" => GearId::Pansunscreen,
    "pillow" => GearId::Pillow,
    "reactivevial" => GearId::ReactiveVial,
    "resistancebadge" => GearId::ResistanceBadge,
    "rockshield" => GearId::RockShield,
    "senseirobe" => GearId::SenseiRobe,
    "shuineshorn" => GearId::ShuinesHorn,
    "slingshot" => GearId::Slingshot,
    "snare" => GearId::Snare,
    "sweatband" => GearId::Sweatband,
    "talisman" => GearId::Talisman,
    "taser" => GearId::Taser,
    "tinfoilhat" => GearId::TinfoilHat,
    "tucmamask" => GearId::TucmaMask,
    "turban" => GearId::Turban,
    "umbrella" => GearId::Umbrella,
    "wardrum" => GearId::WarDrum,
};

impl GearId {
    pub const COUNT: usize = 35;

    pub fn from_name(name: &str) -> Option<GearId> {
        let key = crate::moves::name_key(name);
        if key.is_empty() {
            return Some(GearId::None);
        }
        GEAR_BY_NAME.get(key.as_str()).copied()
    }

    /// Lookup with the degraded-behavior fallback: an unknown gear name is
    /// logged and battles proceed bare-handed.
    pub fn from_name_or_default(name: &str) -> GearId {
        GearId::from_name(name).unwrap_or_else(|| {
            tracing::warn!(gear_name = name, "unknown gear, using no-op");
            GearId::None
        })
    }

    /// The gear's lifecycle hooks; no-op table when it defines none.
    #[inline]
    pub fn hooks(self) -> &'static HookTable {
        match &GEAR_REGISTRY[self as usize] {
            Some(table) => table,
            None => &HookTable::NONE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GearId::None => "",
            GearId::AloeVera => "Aloe Vera",
            GearId::BatonPass => "Baton Pass",
            GearId::Chamomile => "Chamomile",
            GearId::Coat => "Coat",
            GearId::DoubleScreen => "Double Screen",
            GearId::Drill => "Drill",
            GearId::EnergyDrink => "Energy Drink",
            GearId::FireChip => "Fire Chip",
            GearId::FirstAidKit => "First Aid Kit",
            GearId::Grease => "Grease",
            GearId::HackedMicrochip => "Hacked Microchip",
            GearId::Handcuffs => "Handcuffs",
            GearId::HandFan => "Hand Fan",
            GearId::IceCube => "Ice Cube",
            GearId::IronCoating => "Iron Coating",
            GearId::LightningRod => "Lightning Rod",
            GearId::Matcha => "Matcha",
            GearId::Pansunscreen => "Pansunscreen",
            GearId::Pillow => "Pillow",
            GearId::ReactiveVial => "Reactive Vial",
            GearId::ResistanceBadge => "Resistance Badge",
            GearId::RockShield => "Rock Shield",
            GearId::SenseiRobe => "Sensei Robe",
            GearId::ShuinesHorn => "Shuine's Horn",
            GearId::Slingshot => "Slingshot",
            GearId::Snare => "Snare",
            GearId::Sweatband => "Sweatband",
            GearId::Talisman => "Talisman",
            GearId::Taser => "Taser",
            GearId::TinfoilHat => "Tinfoil Hat",
            GearId::TucmaMask => "Tucma Mask",
            GearId::Turban => "Turban",
            GearId::Umbrella => "Umbrella",
            GearId::WarDrum => "War Drum",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gear_lookup_normalizes() {
        assert_eq!(GearId::from_name("Ice Cube"), Some(GearId::IceCube));
        assert_eq!(GearId::from_name("Shuine's Horn"), Some(GearId::ShuinesHorn));
        assert_eq!(GearId::from_name(""), Some(GearId::None));
        assert_eq!(GearId::from_name("Rusty Spoon"), None);
    }

    #[test]
    fn test_unknown_gear_degrades_to_noop() {
        assert_eq!(GearId::from_name_or_default("Rusty Spoon"), GearId::None);
    }

    #[test]
    fn test_names_round_trip() {
        for (_, id) in GEAR_BY_NAME.entries() {
            assert_eq!(GearId::from_name(id.name()), Some(*id));
        }
    }

    #[test]
    fn test_shuines_horn_has_no_hooks() {
        // Its behavior lives in move resolution, not the registry.
        assert!(GEAR_REGISTRY[GearId::ShuinesHorn as usize].is_none());
    }
}
