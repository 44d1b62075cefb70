//! tem_engine - deterministic creature-battle resolution core
//!
//! Given two rosters of stat-bearing creatures, their traits and gear, and a
//! set of chosen actions, [`Battle::resolve_turn`] computes the next battle
//! state in place: damage, status transitions, stat stages, fainting and the
//! win condition. Resolution is fully synchronous and deterministic; no dice
//! are rolled anywhere inside it.

/// Type definitions and the effectiveness chart
pub mod types;

/// Stat identifiers, stat formula, stage scaling
pub mod stats;

/// Status conditions and tick effects
pub mod status;

/// Error taxonomy
pub mod error;

/// Composable effect bundles
pub mod effect;

/// Lifecycle hook types shared by traits and gear
pub mod hooks;

/// Species data and lookup
pub mod species;

/// Move data and lookup
pub mod moves;

/// The battling entity
pub mod creature;

/// Trait identifiers and behavior registry
pub mod traits;

/// Gear identifiers and behavior registry
pub mod gear;

/// Damage formula and effectiveness
pub mod damage;

/// Action ordering and the speed arrow
pub mod schedule;

/// Full-turn resolution
pub mod battle;

/// Set-text import/export
pub mod team;

// Re-export commonly used types
pub use battle::Battle;
pub use creature::{Creature, CreatureConfig, MoveSlot, TraitMemory};
pub use damage::{calc_damage, effectiveness, n_hko};
pub use effect::{Effect, EffectKey};
pub use error::EngineError;
pub use gear::GearId;
pub use hooks::{HookOutcome, HookTable};
pub use moves::{Move, MoveClass, MoveId, TargetPattern};
pub use schedule::{Action, Choice};
pub use species::{Species, SpeciesId};
pub use stats::Stat;
pub use status::{StatusId, StatusInstance, StatusSet};
pub use team::{export, from_importable, gen_creatures};
pub use traits::TraitId;
pub use types::Type;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_lookup() {
        assert_eq!(Type::from_name("crystal"), Some(Type::Crystal));
        assert_eq!(Type::from_name("Crystal"), Some(Type::Crystal));
        assert_eq!(Type::from_name("shadow"), None);
    }

    #[test]
    fn test_species_lookup() {
        let gyalis = SpeciesId::from_name("gyalis").expect("gyalis should exist");
        let data = gyalis.data();
        assert_eq!(data.base_stats[Stat::Hp as usize], 86);
        assert_eq!(data.types.0, Type::Crystal);
        assert_eq!(data.types.1, Some(Type::Melee));
    }

    #[test]
    fn test_move_lookup() {
        let burst = MoveId::from_name("beta burst").expect("beta burst should exist");
        assert_eq!(burst.data().stamina, 23);
        assert_eq!(burst.data().class, MoveClass::Special);
    }

    #[test]
    fn test_registry_lookup() {
        assert!(TraitId::from_name("resistant").is_some());
        assert!(GearId::from_name("hand fan").is_some());
        assert!(TraitId::Resistant.hooks().on_status.is_some());
        assert!(GearId::HandFan.hooks().on_attack.is_some());
    }
}
