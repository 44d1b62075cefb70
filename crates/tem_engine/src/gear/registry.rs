//! Static gear behavior registry, indexed by `GearId`.
//!
//! Shuine's Horn has no entry: its type override happens during move
//! resolution instead of through a lifecycle hook.

use super::implementations::{defense, offense, upkeep};
use super::GearId;
use crate::hooks::HookTable;

pub static GEAR_REGISTRY: [Option<HookTable>; GearId::COUNT] = {
    let mut registry: [Option<HookTable>; GearId::COUNT] = [None; GearId::COUNT];

    // =========================================================================
    // Offense boosters
    // =========================================================================
    registry[GearId::FireChip as usize] = Some(HookTable {
        on_attack: Some(offense::fire_chip),
        ..HookTable::NONE
    });
    registry[GearId::HandFan as usize] = Some(HookTable {
        on_attack: Some(offense::hand_fan),
        ..HookTable::NONE
    });
    registry[GearId::IronCoating as usize] = Some(HookTable {
        on_attack: Some(offense::iron_coating),
        ..HookTable::NONE
    });
    registry[GearId::ResistanceBadge as usize] = Some(HookTable {
        on_attack: Some(offense::resistance_badge),
        ..HookTable::NONE
    });
    registry[GearId::SenseiRobe as usize] = Some(HookTable {
        on_attack: Some(offense::sensei_robe),
        ..HookTable::NONE
    });
    registry[GearId::AloeVera as usize] = Some(HookTable {
        on_attack: Some(offense::aloe_vera),
        ..HookTable::NONE
    });
    registry[GearId::WarDrum as usize] = Some(HookTable {
        on_attack: Some(offense::war_drum),
        on_ally_attack: Some(offense::war_drum_ally),
        ..HookTable::NONE
    });
    registry[GearId::Taser as usize] = Some(HookTable {
        on_attack: Some(offense::taser),
        ..HookTable::NONE
    });
    registry[GearId::Drill as usize] = Some(HookTable {
        on_attack: Some(offense::drill),
        ..HookTable::NONE
    });
    registry[GearId::Slingshot as usize] = Some(HookTable {
        on_attack: Some(offense::slingshot),
        ..HookTable::NONE
    });

    // =========================================================================
    // Defense screens and hit riders
    // =========================================================================
    registry[GearId::LightningRod as usize] = Some(HookTable {
        on_hit: Some(defense::lightning_rod),
        ..HookTable::NONE
    });
    registry[GearId::Umbrella as usize] = Some(HookTable {
        on_hit: Some(defense::umbrella),
        ..HookTable::NONE
    });
    registry[GearId::IceCube as usize] = Some(HookTable {
        on_hit: Some(defense::ice_cube),
        ..HookTable::NONE
    });
    registry[GearId::RockShield as usize] = Some(HookTable {
        on_hit: Some(defense::rock_shield),
        ..HookTable::NONE
    });
    registry[GearId::TucmaMask as usize] = Some(HookTable {
        on_hit: Some(defense::tucma_mask),
        ..HookTable::NONE
    });
    registry[GearId::Coat as usize] = Some(HookTable {
        on_hit: Some(defense::coat),
        ..HookTable::NONE
    });
    registry[GearId::Turban as usize] = Some(HookTable {
        on_hit: Some(defense::turban),
        ..HookTable::NONE
    });
    registry[GearId::TinfoilHat as usize] = Some(HookTable {
        on_hit: Some(defense::tinfoil_hat),
        ..HookTable::NONE
    });
    registry[GearId::DoubleScreen as usize] = Some(HookTable {
        on_hit: Some(defense::double_screen),
        ..HookTable::NONE
    });
    registry[GearId::Snare as usize] = Some(HookTable {
        on_hit: Some(defense::snare),
        ..HookTable::NONE
    });
    registry[GearId::HackedMicrochip as usize] = Some(HookTable {
        after_hit: Some(defense::hacked_microchip),
        ..HookTable::NONE
    });
    registry[GearId::FirstAidKit as usize] = Some(HookTable {
        after_hit: Some(defense::first_aid_kit),
        ..HookTable::NONE
    });
    registry[GearId::ReactiveVial as usize] = Some(HookTable {
        after_hit: Some(defense::reactive_vial),
        ..HookTable::NONE
    });
    registry[GearId::Handcuffs as usize] = Some(HookTable {
        after_attack: Some(defense::handcuffs),
        ..HookTable::NONE
    });

    // =========================================================================
    // Status guards, turn boundaries, switch-ins
    // =========================================================================
    registry[GearId::Pansunscreen as usize] = Some(HookTable {
        on_status: Some(upkeep::pansunscreen),
        ..HookTable::NONE
    });
    registry[GearId::Talisman as usize] = Some(HookTable {
        on_status: Some(upkeep::talisman),
        ..HookTable::NONE
    });
    registry[GearId::EnergyDrink as usize] = Some(HookTable {
        on_status: Some(upkeep::energy_drink),
        ..HookTable::NONE
    });
    registry[GearId::Grease as usize] = Some(HookTable {
        on_status: Some(upkeep::grease),
        ..HookTable::NONE
    });
    registry[GearId::Pillow as usize] = Some(HookTable {
        on_turn_start: Some(upkeep::pillow),
        ..HookTable::NONE
    });
    registry[GearId::Sweatband as usize] = Some(HookTable {
        on_turn_start: Some(upkeep::sweatband),
        ..HookTable::NONE
    });
    registry[GearId::Chamomile as usize] = Some(HookTable {
        on_switch_in: Some(upkeep::chamomile),
        ..HookTable::NONE
    });
    registry[GearId::BatonPass as usize] = Some(HookTable {
        on_switch_in: Some(upkeep::baton_pass),
        ..HookTable::NONE
    });
    registry[GearId::Matcha as usize] = Some(HookTable {
        on_rest: Some(upkeep::matcha),
        ..HookTable::NONE
    });

    registry
};
