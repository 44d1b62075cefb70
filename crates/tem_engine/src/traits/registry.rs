//! Static trait behavior registry, indexed by `TraitId`.
//!
//! Built once at compile time; shared read-only by every battle. Traits
//! without an entry are no-ops (including Determined, Resiliant and
//! Tireless, which are special-cased inside the stat and stamina paths).

use super::implementations::{defense, offense, presence, reaction, status_guard};
use super::TraitId;
use crate::hooks::HookTable;

pub static TRAIT_REGISTRY: [Option<HookTable>; TraitId::COUNT] = {
    let mut registry: [Option<HookTable>; TraitId::COUNT] = [None; TraitId::COUNT];

    // =========================================================================
    // Offensive multipliers
    // =========================================================================
    registry[TraitId::AirSpecialist as usize] = Some(HookTable {
        on_attack: Some(offense::air_specialist),
        ..HookTable::NONE
    });
    registry[TraitId::Botanist as usize] = Some(HookTable {
        on_attack: Some(offense::botanist),
        ..HookTable::NONE
    });
    registry[TraitId::Pyromaniac as usize] = Some(HookTable {
        on_attack: Some(offense::pyromaniac),
        ..HookTable::NONE
    });
    registry[TraitId::ToxicAffinity as usize] = Some(HookTable {
        on_attack: Some(offense::toxic_affinity),
        ..HookTable::NONE
    });
    registry[TraitId::Brawny as usize] = Some(HookTable {
        on_attack: Some(offense::brawny),
        ..HookTable::NONE
    });
    registry[TraitId::Channeler as usize] = Some(HookTable {
        on_attack: Some(offense::channeler),
        ..HookTable::NONE
    });
    registry[TraitId::Furor as usize] = Some(HookTable {
        on_attack: Some(offense::furor),
        ..HookTable::NONE
    });
    registry[TraitId::Spoilsport as usize] = Some(HookTable {
        on_attack: Some(offense::spoilsport),
        ..HookTable::NONE
    });
    registry[TraitId::TacticalStrike as usize] = Some(HookTable {
        on_attack: Some(offense::tactical_strike),
        ..HookTable::NONE
    });
    registry[TraitId::MentalAlliance as usize] = Some(HookTable {
        on_attack: Some(offense::mental_alliance),
        ..HookTable::NONE
    });
    registry[TraitId::SynergyMaster as usize] = Some(HookTable {
        on_attack: Some(offense::synergy_master),
        on_ally_attack: Some(offense::synergy_master_ally),
        ..HookTable::NONE
    });
    registry[TraitId::Rested as usize] = Some(HookTable {
        on_attack: Some(offense::rested),
        on_turn_end: Some(offense::rested_turn_end),
        ..HookTable::NONE
    });
    registry[TraitId::Vigorous as usize] = Some(HookTable {
        on_attack: Some(offense::vigorous),
        on_turn_end: Some(presence::disarm_turn_end),
        ..HookTable::NONE
    });
    registry[TraitId::Aerobic as usize] = Some(HookTable {
        on_attack: Some(offense::aerobic),
        on_turn_end: Some(presence::disarm_turn_end),
        ..HookTable::NONE
    });
    registry[TraitId::Patient as usize] = Some(HookTable {
        on_attack: Some(offense::patient),
        on_turn_end: Some(presence::disarm_turn_end),
        ..HookTable::NONE
    });
    registry[TraitId::Rejuvenate as usize] = Some(HookTable {
        on_attack: Some(offense::rejuvenate),
        ..HookTable::NONE
    });
    registry[TraitId::Apothecary as usize] = Some(HookTable {
        on_attack: Some(offense::apothecary),
        ..HookTable::NONE
    });
    registry[TraitId::Burglar as usize] = Some(HookTable {
        on_attack: Some(offense::burglar),
        ..HookTable::NONE
    });
    registry[TraitId::Individualist as usize] = Some(HookTable {
        on_attack: Some(offense::individualist),
        ..HookTable::NONE
    });

    // =========================================================================
    // Defensive multipliers and hit riders
    // =========================================================================
    registry[TraitId::Amphibian as usize] = Some(HookTable {
        on_hit: Some(defense::amphibian),
        ..HookTable::NONE
    });
    registry[TraitId::Callosity as usize] = Some(HookTable {
        on_hit: Some(defense::callosity),
        ..HookTable::NONE
    });
    registry[TraitId::ElectricSynthesize as usize] = Some(HookTable {
        on_hit: Some(defense::electric_synthesize),
        ..HookTable::NONE
    });
    registry[TraitId::FlawedCrystal as usize] = Some(HookTable {
        on_hit: Some(defense::flawed_crystal),
        ..HookTable::NONE
    });
    registry[TraitId::Hover as usize] = Some(HookTable {
        on_hit: Some(defense::hover),
        ..HookTable::NONE
    });
    registry[TraitId::Immunity as usize] = Some(HookTable {
        on_hit: Some(defense::immunity),
        ..HookTable::NONE
    });
    registry[TraitId::Parrier as usize] = Some(HookTable {
        on_hit: Some(defense::parrier),
        ..HookTable::NONE
    });
    registry[TraitId::PunchingBag as usize] = Some(HookTable {
        on_hit: Some(defense::punching_bag),
        ..HookTable::NONE
    });
    registry[TraitId::SkullHelmet as usize] = Some(HookTable {
        on_hit: Some(defense::skull_helmet),
        ..HookTable::NONE
    });
    registry[TraitId::ThickSkin as usize] = Some(HookTable {
        on_hit: Some(defense::thick_skin),
        ..HookTable::NONE
    });
    registry[TraitId::Provident as usize] = Some(HookTable {
        on_hit: Some(defense::provident),
        ..HookTable::NONE
    });
    registry[TraitId::Trauma as usize] = Some(HookTable {
        on_hit: Some(defense::trauma),
        ..HookTable::NONE
    });
    registry[TraitId::ToxicSkin as usize] = Some(HookTable {
        on_hit: Some(defense::toxic_skin),
        ..HookTable::NONE
    });
    registry[TraitId::Friendship as usize] = Some(HookTable {
        on_hit: Some(defense::friendship),
        ..HookTable::NONE
    });
    registry[TraitId::TeamElusive as usize] = Some(HookTable {
        on_hit: Some(defense::team_elusive),
        ..HookTable::NONE
    });
    registry[TraitId::PuppetMaster as usize] = Some(HookTable {
        on_hit: Some(defense::puppet_master),
        ..HookTable::NONE
    });
    registry[TraitId::SharedPain as usize] = Some(HookTable {
        on_hit: Some(defense::shared_pain),
        on_turn_start: Some(defense::shared_pain_turn_start),
        ..HookTable::NONE
    });
    registry[TraitId::WaterCustodian as usize] = Some(HookTable {
        on_ally_hit: Some(defense::water_custodian_ally_hit),
        ..HookTable::NONE
    });
    registry[TraitId::Mucous as usize] = Some(HookTable {
        on_hit: Some(defense::mucous),
        on_status: Some(status_guard::mucous),
        ..HookTable::NONE
    });

    // =========================================================================
    // Status gates
    // =========================================================================
    registry[TraitId::Caffeinated as usize] = Some(HookTable {
        on_status: Some(status_guard::caffeinated),
        ..HookTable::NONE
    });
    registry[TraitId::ColdNatured as usize] = Some(HookTable {
        on_status: Some(status_guard::cold_natured),
        ..HookTable::NONE
    });
    registry[TraitId::Escapist as usize] = Some(HookTable {
        on_switch_in: Some(status_guard::escapist_switch_in),
        on_status: Some(status_guard::escapist),
        on_ally_status: Some(status_guard::escapist_ally),
        ..HookTable::NONE
    });
    registry[TraitId::FeverRush as usize] = Some(HookTable {
        on_status: Some(status_guard::fever_rush),
        ..HookTable::NONE
    });
    registry[TraitId::Guardian as usize] = Some(HookTable {
        on_ally_status: Some(status_guard::guardian_ally),
        ..HookTable::NONE
    });
    registry[TraitId::Mithridatism as usize] = Some(HookTable {
        on_status: Some(status_guard::mithridatism),
        ..HookTable::NONE
    });
    registry[TraitId::Neutrality as usize] = Some(HookTable {
        on_status: Some(status_guard::neutrality),
        ..HookTable::NONE
    });
    registry[TraitId::Receptive as usize] = Some(HookTable {
        on_status: Some(status_guard::receptive),
        ..HookTable::NONE
    });
    registry[TraitId::Resistant as usize] = Some(HookTable {
        on_status: Some(status_guard::resistant),
        ..HookTable::NONE
    });
    registry[TraitId::WarmBlooded as usize] = Some(HookTable {
        on_status: Some(status_guard::warm_blooded),
        ..HookTable::NONE
    });
    registry[TraitId::Zen as usize] = Some(HookTable {
        on_status: Some(status_guard::zen),
        ..HookTable::NONE
    });

    // =========================================================================
    // Damage reactions
    // =========================================================================
    registry[TraitId::FaintedCurse as usize] = Some(HookTable {
        on_take_damage: Some(reaction::fainted_curse),
        ..HookTable::NONE
    });
    registry[TraitId::HeatDischarge as usize] = Some(HookTable {
        on_take_damage: Some(reaction::heat_discharge),
        ..HookTable::NONE
    });
    registry[TraitId::Mirroring as usize] = Some(HookTable {
        on_take_damage: Some(reaction::mirroring),
        ..HookTable::NONE
    });
    registry[TraitId::Trance as usize] = Some(HookTable {
        on_take_damage: Some(reaction::trance),
        ..HookTable::NONE
    });
    registry[TraitId::Avenger as usize] = Some(HookTable {
        on_ally_damage: Some(reaction::avenger),
        ..HookTable::NONE
    });
    registry[TraitId::Benefactor as usize] = Some(HookTable {
        on_ally_damage: Some(reaction::benefactor),
        ..HookTable::NONE
    });
    registry[TraitId::Prideful as usize] = Some(HookTable {
        after_attack: Some(reaction::prideful),
        ..HookTable::NONE
    });
    registry[TraitId::SelfEsteem as usize] = Some(HookTable {
        after_attack: Some(reaction::self_esteem),
        ..HookTable::NONE
    });

    // =========================================================================
    // Switch-in and turn-boundary presence
    // =========================================================================
    registry[TraitId::Demoralize as usize] = Some(HookTable {
        on_switch_in: Some(presence::demoralize),
        ..HookTable::NONE
    });
    registry[TraitId::Protector as usize] = Some(HookTable {
        on_switch_in: Some(presence::protector),
        ..HookTable::NONE
    });
    registry[TraitId::FastCharge as usize] = Some(HookTable {
        on_ally_switch_in: Some(presence::fast_charge),
        ..HookTable::NONE
    });
    registry[TraitId::PowerNap as usize] = Some(HookTable {
        on_turn_start: Some(presence::power_nap),
        ..HookTable::NONE
    });
    registry[TraitId::EnergyReserves as usize] = Some(HookTable {
        on_turn_end: Some(presence::energy_reserves),
        ..HookTable::NONE
    });
    registry[TraitId::Unnoticed as usize] = Some(HookTable {
        on_turn_start: Some(presence::unnoticed_reset),
        on_switch_in: Some(presence::unnoticed_switch_in),
        on_hit: Some(presence::unnoticed_hit),
        on_turn_end: Some(presence::unnoticed_turn_end),
        ..HookTable::NONE
    });

    registry
};
