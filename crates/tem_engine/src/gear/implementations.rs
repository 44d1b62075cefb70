//! Gear hook implementations.

use crate::creature::Creature;
use crate::damage::effectiveness;
use crate::effect::{Effect, EffectKey};
use crate::hooks::HookOutcome;
use crate::moves::{Move, MoveClass, TargetPattern};
use crate::stats::Stat;
use crate::status::StatusId;
use crate::types::Type;

// ============================================================================
// Offense boosters (on_attack)
// ============================================================================

pub mod offense {
    use super::*;

    pub fn fire_chip(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Fire {
            return HookOutcome::Continue(Effect::damage(1.1));
        }
        HookOutcome::none()
    }

    pub fn hand_fan(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Wind {
            return HookOutcome::Continue(Effect::damage(1.1));
        }
        HookOutcome::none()
    }

    pub fn iron_coating(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Earth {
            return HookOutcome::Continue(Effect::damage(1.1));
        }
        HookOutcome::none()
    }

    pub fn resistance_badge(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Neutral {
            return HookOutcome::Continue(Effect::damage(1.15));
        }
        HookOutcome::none()
    }

    pub fn sensei_robe(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Melee && attack.class == MoveClass::Special {
            return HookOutcome::Continue(Effect::damage(1.25));
        }
        HookOutcome::none()
    }

    pub fn aloe_vera(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        target: &Creature,
        _attack: &Move,
    ) -> HookOutcome {
        if target.has_type(Type::Toxic) {
            return HookOutcome::Continue(Effect::damage(1.15));
        }
        HookOutcome::none()
    }

    pub fn war_drum(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.class == MoveClass::Physical {
            return HookOutcome::Continue(Effect::damage(1.08));
        }
        HookOutcome::none()
    }

    pub fn war_drum_ally(
        _attacker: &Creature,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.class == MoveClass::Physical {
            return HookOutcome::Continue(Effect::damage(1.08));
        }
        HookOutcome::none()
    }

    pub fn taser(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Electric && attack.class == MoveClass::Special {
            return HookOutcome::Continue(Effect::on_target(vec![(
                EffectKey::Status(StatusId::Burned),
                1,
            )]));
        }
        HookOutcome::none()
    }

    pub fn drill(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        target: &Creature,
        _attack: &Move,
    ) -> HookOutcome {
        if target.evading() {
            return HookOutcome::Continue(Effect::on_target(vec![(
                EffectKey::Status(StatusId::Evading),
                -1,
            )]));
        }
        HookOutcome::none()
    }

    pub fn slingshot(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if effectiveness(attack.kind, target) == 0.25 {
            return HookOutcome::Continue(Effect::on_attacker(vec![
                (EffectKey::Stat(Stat::Def), 1),
                (EffectKey::Stat(Stat::SpD), 1),
                (EffectKey::Stat(Stat::Spe), 1),
            ]));
        }
        HookOutcome::none()
    }
}

// ============================================================================
// Defense reducers and hit riders (on_hit / after_hit)
// ============================================================================

pub mod defense {
    use super::*;

    macro_rules! type_screen {
        ($name:ident, $kind:expr, $mult:expr) => {
            pub fn $name(
                _attacker: &Creature,
                _target: &Creature,
                _ally: Option<&Creature>,
                attack: &Move,
            ) -> HookOutcome {
                if attack.kind == $kind {
                    return HookOutcome::Continue(Effect::damage($mult));
                }
                HookOutcome::none()
            }
        };
    }

    type_screen!(lightning_rod, Type::Electric, 0.8);
    type_screen!(umbrella, Type::Water, 0.8);
    type_screen!(ice_cube, Type::Fire, 0.8);
    type_screen!(rock_shield, Type::Crystal, 0.8);
    type_screen!(tucma_mask, Type::Toxic, 0.8);
    type_screen!(coat, Type::Wind, 0.8);
    type_screen!(turban, Type::Earth, 0.8);
    type_screen!(tinfoil_hat, Type::Digital, 0.7);

    pub fn double_screen(
        attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        _attack: &Move,
    ) -> HookOutcome {
        if attacker.types.1.is_some() {
            return HookOutcome::Continue(Effect::damage(0.9));
        }
        HookOutcome::none()
    }

    pub fn snare(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        _attack: &Move,
    ) -> HookOutcome {
        HookOutcome::Continue(Effect {
            attacker: vec![(EffectKey::RemoveGear, 1)],
            target: vec![(EffectKey::RemoveGear, 1)],
            ..Effect::none()
        })
    }

    pub fn hacked_microchip(_attacker: &Creature, _target: &Creature, attack: &Move) -> Effect {
        if matches!(
            attack.target,
            TargetPattern::SelfTarget | TargetPattern::TeamOrAlly | TargetPattern::WholeTeam
        ) || attack.class == MoveClass::Status
        {
            return Effect::none();
        }
        Effect::on_target(vec![(EffectKey::Status(StatusId::Evading), 2)])
    }

    pub fn first_aid_kit(_attacker: &Creature, target: &Creature, _attack: &Move) -> Effect {
        if (target.current_hp as f64) < target.max_hp() as f64 * 0.25 {
            let heal = (target.max_hp() as f64 * 0.15) as i32;
            return Effect::on_target(vec![
                (EffectKey::Stat(Stat::Hp), heal),
                (EffectKey::RemoveGear, 1),
            ]);
        }
        Effect::none()
    }

    pub fn reactive_vial(_attacker: &Creature, target: &Creature, attack: &Move) -> Effect {
        if effectiveness(attack.kind, target) >= 1.0 {
            let heal = (target.max_hp() as f64 * 0.15) as i32;
            return Effect::on_target(vec![
                (EffectKey::Stat(Stat::Hp), heal),
                (EffectKey::Status(StatusId::Nullified), 1),
                (EffectKey::RemoveGear, 1),
            ]);
        }
        Effect::none()
    }

    pub fn handcuffs(_attacker: &Creature, target: &Creature, _attack: &Move) -> Effect {
        if target.exhausted() {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Trapped), 3)]);
        }
        Effect::none()
    }
}

// ============================================================================
// Status guards, turn boundaries, switch-ins
// ============================================================================

pub mod upkeep {
    use super::*;

    pub fn pansunscreen(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        if status == StatusId::Burned {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Burned), -1)]);
        }
        Effect::none()
    }

    pub fn talisman(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        if status == StatusId::Doomed {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Doomed), -1)]);
        }
        Effect::none()
    }

    pub fn energy_drink(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        if status == StatusId::Asleep {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Asleep), -1)]);
        }
        Effect::none()
    }

    pub fn grease(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        if status == StatusId::Trapped {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Trapped), -1)]);
        }
        Effect::none()
    }

    pub fn pillow(target: &Creature) -> Effect {
        if target.asleep() {
            let heal = (target.max_hp() / 10) as i32;
            return Effect::on_target(vec![(EffectKey::Stat(Stat::Hp), heal)]);
        }
        Effect::none()
    }

    pub fn sweatband(target: &Creature) -> Effect {
        let restore = (target.max_sta() as f64 * 0.15) as i32;
        Effect::on_target(vec![(EffectKey::Stat(Stat::Sta), restore)])
    }

    pub fn chamomile(_target: &Creature, _ally: Option<&Creature>) -> Effect {
        Effect::on_target(vec![
            (EffectKey::ClearBoosts, 1),
            (EffectKey::Status(StatusId::Immune), 4),
        ])
    }

    pub fn baton_pass(target: &Creature, _ally: Option<&Creature>) -> Effect {
        let heal = (target.max_hp() / 10) as i32;
        Effect::on_target(vec![(EffectKey::Stat(Stat::Hp), heal)])
    }

    pub fn matcha(target: &Creature) -> Effect {
        let restore = (target.max_sta() as f64 * 0.4) as i32;
        Effect::on_target(vec![
            (EffectKey::Status(StatusId::Cold), -1),
            (EffectKey::Stat(Stat::Sta), restore),
        ])
    }
}
