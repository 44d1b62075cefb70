//! The composable modifier bundle produced by hooks and move data.
//!
//! An [`Effect`] carries four delta maps (attacker / target / ally /
//! opposing team) plus a scalar damage multiplier. Application distributes
//! each map onto the corresponding participant; multipliers from every hook
//! in a resolution multiply together into a single modifier for the damage
//! formula.

use crate::error::EngineError;
use crate::stats::Stat;
use crate::status::StatusId;

/// One delta-map entry: what to change, and by how much.
///
/// Magnitude is interpreted by key kind: boost delta for stat keys, direct
/// HP/Sta delta for those two, duration (>=1 apply, <1 remove) for status
/// keys, new scratch value for the trait-memory keys.
pub type EffectEntry = (EffectKey, i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectKey {
    /// Boost for Spe/Atk/Def/SpA/SpD; direct current-value delta for HP/Sta.
    Stat(Stat),
    /// Apply (magnitude >= 1, as duration) or remove (magnitude < 1).
    Status(StatusId),
    /// Knock the holder's gear off.
    RemoveGear,
    /// Reset every boost stage to zero.
    ClearBoosts,
    /// Force the overexertion counter to 2 (used all stamina this turn).
    Overexert,
    /// Arm (magnitude > 0) or clear the flag-family trait memory.
    Arm,
    /// Set the counter-family trait memory (magnitude <= 0 clears).
    Tally,
}

impl EffectKey {
    /// Resolve a data-file key name. Unknown names are a contract violation,
    /// never silently ignored.
    pub fn from_name(name: &str) -> Result<EffectKey, EngineError> {
        if let Some(stat) = Stat::from_name(name) {
            return Ok(EffectKey::Stat(stat));
        }
        if let Some(status) = StatusId::from_name(name) {
            return Ok(EffectKey::Status(status));
        }
        match name {
            "remove gear" => Ok(EffectKey::RemoveGear),
            "clear boosts" => Ok(EffectKey::ClearBoosts),
            "overexerted" => Ok(EffectKey::Overexert),
            "trait counter" => Ok(EffectKey::Tally),
            _ => Err(EngineError::UnknownEffectKey(name.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Effect {
    pub attacker: Vec<EffectEntry>,
    pub target: Vec<EffectEntry>,
    pub ally: Vec<EffectEntry>,
    pub opposing_team: Vec<EffectEntry>,
    pub damage: f64,
}

impl Default for Effect {
    fn default() -> Self {
        Effect::none()
    }
}

impl Effect {
    /// The neutral effect: empty maps, 1x multiplier. Default return of
    /// every hook.
    pub const fn none() -> Effect {
        Effect {
            attacker: Vec::new(),
            target: Vec::new(),
            ally: Vec::new(),
            opposing_team: Vec::new(),
            damage: 1.0,
        }
    }

    /// A bare damage multiplier.
    pub const fn damage(mult: f64) -> Effect {
        Effect {
            attacker: Vec::new(),
            target: Vec::new(),
            ally: Vec::new(),
            opposing_team: Vec::new(),
            damage: mult,
        }
    }

    pub fn on_target(entries: Vec<EffectEntry>) -> Effect {
        Effect {
            target: entries,
            ..Effect::none()
        }
    }

    pub fn on_attacker(entries: Vec<EffectEntry>) -> Effect {
        Effect {
            attacker: entries,
            ..Effect::none()
        }
    }

    pub fn on_ally(entries: Vec<EffectEntry>) -> Effect {
        Effect {
            ally: entries,
            ..Effect::none()
        }
    }

    pub fn is_none(&self) -> bool {
        self.attacker.is_empty()
            && self.target.is_empty()
            && self.ally.is_empty()
            && self.opposing_team.is_empty()
            && self.damage == 1.0
    }

    /// Build from static move-data descriptor slices.
    pub fn from_specs(self_spec: &[EffectEntry], target_spec: &[EffectEntry]) -> Effect {
        Effect {
            attacker: self_spec.to_vec(),
            target: target_spec.to_vec(),
            ..Effect::none()
        }
    }
}

/// Verdict of an `on_status` hook effect on an incoming status application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusGate {
    /// Nothing in the effect touched the incoming status.
    Pass,
    /// The application is cancelled outright.
    Veto,
    /// The application proceeds with a replaced duration.
    Adjust(u8),
}

impl Effect {
    /// Gate an incoming status application against this effect's target map.
    ///
    /// Only entries keyed by the *incoming* status gate; a removal entry for
    /// some other status is an ordinary side effect, not a veto.
    pub fn status_gate(&self, incoming: StatusId, turns: u8) -> StatusGate {
        for (key, mag) in &self.target {
            if *key == EffectKey::Status(incoming) {
                return if *mag < 1 {
                    StatusGate::Veto
                } else if *mag as u8 != turns {
                    StatusGate::Adjust(*mag as u8)
                } else {
                    StatusGate::Pass
                };
            }
        }
        StatusGate::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parsing() {
        assert_eq!(EffectKey::from_name("Atk"), Ok(EffectKey::Stat(Stat::Atk)));
        assert_eq!(
            EffectKey::from_name("poisoned"),
            Ok(EffectKey::Status(StatusId::Poisoned))
        );
        assert_eq!(EffectKey::from_name("remove gear"), Ok(EffectKey::RemoveGear));
        assert_eq!(EffectKey::from_name("clear boosts"), Ok(EffectKey::ClearBoosts));
        assert_eq!(EffectKey::from_name("overexerted"), Ok(EffectKey::Overexert));
        assert_eq!(EffectKey::from_name("trait counter"), Ok(EffectKey::Tally));
    }

    #[test]
    fn test_unknown_key_is_hard_error() {
        assert_eq!(
            EffectKey::from_name("strangle"),
            Err(EngineError::UnknownEffectKey("strangle".to_string()))
        );
    }

    #[test]
    fn test_neutral_effect() {
        let e = Effect::none();
        assert!(e.is_none());
        assert_eq!(e.damage, 1.0);
        assert!(!Effect::damage(1.15).is_none());
    }

    #[test]
    fn test_status_gate() {
        // Removal entry for the incoming status vetoes.
        let veto = Effect::on_target(vec![(EffectKey::Status(StatusId::Cold), -1)]);
        assert_eq!(veto.status_gate(StatusId::Cold, 3), StatusGate::Veto);
        // ...but does not gate an unrelated incoming status.
        assert_eq!(veto.status_gate(StatusId::Burned, 3), StatusGate::Pass);
        // A different duration adjusts.
        let shorten = Effect::on_target(vec![(EffectKey::Status(StatusId::Asleep), 2)]);
        assert_eq!(shorten.status_gate(StatusId::Asleep, 3), StatusGate::Adjust(2));
        assert_eq!(shorten.status_gate(StatusId::Asleep, 2), StatusGate::Pass);
    }
}
