//! Trait identifiers and behavior lookup.
//!
//! A trait is an innate, permanent ability selected at roster-build time.
//! Behavior lives in a process-wide immutable registry of hook tables; a
//! trait with no entry (or `TraitId::None`) is a no-op at every lifecycle
//! point.

mod implementations;
mod registry;

pub use registry::TRAIT_REGISTRY;

use crate::hooks::HookTable;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum TraitId {
    #[default]
    None = 0,
    Aerobic,
    AirSpecialist,
    Amphibian,
    Apothecary,
    Avenger,
    Benefactor,
    Botanist,
    Brawny,
    Burglar,
    Caffeinated,
    Callosity,
    Channeler,
    ColdNatured,
    Demoralize,
    Determined,
    ElectricSynthesize,
    EnergyReserves,
    Escapist,
    FaintedCurse,
    FastCharge,
    FeverRush,
    FlawedCrystal,
    Friendship,
    Furor,
    Guardian,
    HeatDischarge,
    Hover,
    Immunity,
    Individualist,
    MentalAlliance,
    Mirroring,
    Mithridatism,
    Mucous,
    Neutrality,
    Parrier,
    Patient,
    PowerNap,
    Prideful,
    Protector,
    Provident,
    PuppetMaster,
    PunchingBag,
    Pyromaniac,
    Receptive,
    Rejuvenate,
    Resiliant,
    Resistant,
    Rested,
    SelfEsteem,
    SharedPain,
    SkullHelmet,
    Spoilsport,
    SynergyMaster,
    TacticalStrike,
    TeamElusive,
    ThickSkin,
    Tireless,
    ToxicAffinity,
    ToxicSkin,
    Trance,
    Trauma,
    Unnoticed,
    Vigorous,
    WarmBlooded,
    WaterCustodian,
    Zen,
}

static TRAITS_BY_NAME: phf::Map<&'static str, TraitId> = phf::phf_map! {
    "aerobic" => TraitId::Aerobic,
    "airspecialist" => TraitId::AirSpecialist,
    "amphibian" => TraitId::Amphibian,
    "apothecary" => TraitId::Apothecary,
    "avenger" => TraitId::Avenger,
    "benefactor" => TraitId::Benefactor,
    "botanist" => TraitId::Botanist,
    "brawny" => TraitId::Brawny,
    "burglar" => TraitId::Burglar,
    "caffeinated" => TraitId::Caffeinated,
    "callosity" => TraitId::Callosity,
    "channeler" => TraitId::Channeler,
    "coldnatured" => TraitId::ColdNatured,
    "demoralize" => TraitId::Demoralize,
    "determined" => TraitId::Determined,
    "electricsynthesize" => TraitId::ElectricSynthesize,
    "energyreserves" => TraitId::EnergyReserves,
    "escapist" => TraitId::Escapist,
    "faintedcurse" => TraitId::FaintedCurse,
    "fastcharge" => TraitId::FastCharge,
    "feverrush" => TraitId::FeverRush,
    "flawedcrystal" => TraitId::FlawedCrystal,
    "friendship" => TraitId::Friendship,
    "furor" => TraitId::Furor,
    "guardian" => TraitId::Guardian,
    "heatdischarge" => TraitId::HeatDischarge,
    "hover" => TraitId::Hover,
    "immunity" => TraitId::Immunity,
    "individualist" => TraitId::Individualist,
    "mentalalliance" => TraitId::MentalAlliance,
    "mirroring" => TraitId::Mirroring,
    "mithridatism" => TraitId::Mithridatism,
    "mucous" => TraitId::Mucous,
    "neutrality" => TraitId::Neutrality,
    "parrier" => TraitId::Parrier,
    "patient" => TraitId::Patient,
    "powernap" => TraitId::PowerNap,
    "prideful" => TraitId::Prideful,
    "protector" => TraitId::Protector,
    "provident" => TraitId::Provident,
    "puppetmaster" => TraitId::PuppetMaster,
    "punchingbag" => TraitId::PunchingBag,
    "pyromaniac" => TraitId::Pyromaniac,
    "receptive" => TraitId::Receptive,
    "rejuvenate" => TraitId::Rejuvenate,
    "resiliant" => TraitId::Resiliant,
    "resistant" => TraitId::Resistant,
    "rested" => TraitId::Rested,
    "selfesteem" => TraitId::SelfEsteem,
    "sharedpain" => TraitId::SharedPain,
    "skullhelmet" => TraitId::SkullHelmet,
    "spoilsport" => TraitId::Spoilsport,
    "synergymaster" => TraitId::SynergyMaster,
    "tacticalstrike" => TraitId::TacticalStrike,
    "teamelusive" => TraitId::TeamElusive,
    "thickskin" => TraitId::ThickSkin,
    "tireless" => TraitId::Tireless,
    "toxicaffinity" => TraitId::ToxicAffinity,
    "toxicskin" => TraitId::ToxicSkin,
    "trance" => TraitId::Trance,
    "trauma" => TraitId::Trauma,
    "unnoticed" => TraitId::Unnoticed,
    "vigorous" => TraitId::Vigorous,
    "warmblooded" => TraitId::WarmBlooded,
    "watercustodian" => TraitId::WaterCustodian,
    "zen" => TraitId::Zen,
};

impl TraitId {
    pub const COUNT: usize = 67;

    pub fn from_name(name: &str) -> Option<TraitId> {
        let key = crate::moves::name_key(name);
        if key.is_empty() {
            return Some(TraitId::None);
        }
        TRAITS_BY_NAME.get(key.as_str()).copied()
    }

    /// Lookup with the degraded-behavior fallback: an unknown trait name is
    /// logged and battles proceed with the no-op trait.
    pub fn from_name_or_default(name: &str) -> TraitId {
        TraitId::from_name(name).unwrap_or_else(|| {
            tracing::warn!(trait_name = name, "unknown trait, using no-op");
            TraitId::None
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            TraitId::None => "",
            TraitId::Aerobic => "Aerobic",
            TraitId::AirSpecialist => "Air Specialist",
            TraitId::Amphibian => "Amphibian",
            TraitId::Apothecary => "Apothecary",
            TraitId::Avenger => "Avenger",
            TraitId::Benefactor => "Benefactor",
            TraitId::Botanist => "Botanist",
            TraitId::Brawny => "Brawny",
            TraitId::Burglar => "Burglar",
            TraitId::Caffeinated => "Caffeinated",
            TraitId::Callosity => "Callosity",
            TraitId::Channeler => "Channeler",
            TraitId::ColdNatured => "Cold-Natured",
            TraitId::Demoralize => "Demoralize",
            TraitId::Determined => "Determined",
            TraitId::ElectricSynthesize => "Electric Synthesize",
            TraitId::EnergyReserves => "Energy Reserves",
            TraitId::Escapist => "Escapist",
            TraitId::FaintedCurse => "Fainted Curse",
            TraitId::FastCharge => "Fast Charge",
            TraitId::FeverRush => "Fever Rush",
            TraitId::FlawedCrystal => "Flawed Crystal",
            TraitId::Friendship => "Friendship",
            TraitId::Furor => "Furor",
            TraitId::Guardian => "Guardian",
            TraitId::HeatDischarge => "Heat Discharge",
            TraitId::Hover => "Hover",
            TraitId::Immunity => "Immunity",
            TraitId::Individualist => "Individualist",
            TraitId::MentalAlliance => "Mental Alliance",
            TraitId::Mirroring => "Mirroring",
            TraitId::Mithridatism => "Mithridatism",
            TraitId::Mucous => "Mucous",
            TraitId::Neutrality => "Neutrality",
            TraitId::Parrier => "Parrier",
            TraitId::Patient => "Patient",
            TraitId::PowerNap => "Power Nap",
            TraitId::Prideful => "Prideful",
            TraitId::Protector => "Protector",
            TraitId::Provident => "Provident",
            TraitId::PuppetMaster => "Puppet Master",
            TraitId::PunchingBag => "Punching Bag",
            TraitId::Pyromaniac => "Pyromaniac",
            TraitId::Receptive => "Receptive",
            TraitId::Rejuvenate => "Rejuvenate",
            TraitId::Resiliant => "Resiliant",
            TraitId::Resistant => "Resistant",
            TraitId::Rested => "Rested",
            TraitId::SelfEsteem => "Self-Esteem",
            TraitId::SharedPain => "Shared Pain",
            TraitId::SkullHelmet => "Skull Helmet",
            TraitId::Spoilsport => "Spoilsport",
            TraitId::SynergyMaster => "Synergy Master",
            TraitId::TacticalStrike => "Tactical Strike",
            TraitId::TeamElusive => "Team Elusive",
            TraitId::ThickSkin => "Thick Skin",
            TraitId::Tireless => "Tireless",
            TraitId::ToxicAffinity => "Toxic Affinity",
            TraitId::ToxicSkin => "Toxic Skin",
            TraitId::Trance => "Trance",
            TraitId::Trauma => "Trauma",
            TraitId::Unnoticed => "Unnoticed",
            TraitId::Vigorous => "Vigorous",
            TraitId::WarmBlooded => "Warm-Blooded",
            TraitId::WaterCustodian => "Water Custodian",
            TraitId::Zen => "Zen",
        }
    }

    /// The trait's lifecycle hooks; no-op table when it defines none.
    #[inline]
    pub fn hooks(self) -> &'static HookTable {
        match &TRAIT_REGISTRY[self as usize] {
            Some(table) => table,
            None => &HookTable::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_lookup_normalizes() {
        assert_eq!(TraitId::from_name("Fainted Curse"), Some(TraitId::FaintedCurse));
        assert_eq!(TraitId::from_name("cold-natured"), Some(TraitId::ColdNatured));
        assert_eq!(TraitId::from_name(""), Some(TraitId::None));
        assert_eq!(TraitId::from_name("Soul Eater"), None);
    }

    #[test]
    fn test_unknown_trait_degrades_to_noop() {
        assert_eq!(TraitId::from_name_or_default("Soul Eater"), TraitId::None);
    }

    #[test]
    fn test_noop_trait_has_empty_hooks() {
        let hooks = TraitId::None.hooks();
        assert!(hooks.on_attack.is_none());
        assert!(hooks.on_status.is_none());
        assert!(hooks.on_turn_end.is_none());
    }

    #[test]
    fn test_stamina_special_cases_have_no_hook_entries() {
        // Determined, Resiliant and Tireless act inside the stat/stamina
        // paths, not through the registry.
        for id in [TraitId::Determined, TraitId::Resiliant, TraitId::Tireless] {
            assert!(TRAIT_REGISTRY[id as usize].is_none());
        }
    }
}
