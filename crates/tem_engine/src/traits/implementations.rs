//! Trait hook implementations.
//!
//! Each function is pure: it inspects the participants and returns an
//! [`Effect`] (or a terminal [`HookOutcome`]); all mutation happens in the
//! effect-application layer.

use crate::creature::Creature;
use crate::effect::{Effect, EffectKey};
use crate::hooks::HookOutcome;
use crate::moves::{Move, MoveClass, TargetPattern};
use crate::stats::Stat;
use crate::status::StatusId;
use crate::types::Type;

fn spread(pattern: TargetPattern) -> bool {
    matches!(
        pattern,
        TargetPattern::TeamOrAlly | TargetPattern::WholeTeam | TargetPattern::All
    )
}

// ============================================================================
// Offensive multipliers and attack riders (on_attack)
// ============================================================================

pub mod offense {
    use super::*;

    pub fn air_specialist(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Wind {
            return HookOutcome::Continue(Effect::damage(1.15));
        }
        HookOutcome::none()
    }

    pub fn botanist(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Nature {
            return HookOutcome::Continue(Effect::damage(1.15));
        }
        HookOutcome::none()
    }

    pub fn pyromaniac(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Fire {
            return HookOutcome::Continue(Effect::damage(1.15));
        }
        HookOutcome::none()
    }

    pub fn toxic_affinity(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Toxic {
            return HookOutcome::Continue(Effect::damage(1.5));
        }
        HookOutcome::none()
    }

    pub fn brawny(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.class == MoveClass::Physical {
            return HookOutcome::Continue(Effect::damage(1.2));
        }
        HookOutcome::none()
    }

    pub fn channeler(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.class == MoveClass::Special {
            return HookOutcome::Continue(Effect::damage(1.25));
        }
        HookOutcome::none()
    }

    pub fn furor(
        attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        _attack: &Move,
    ) -> HookOutcome {
        if (attacker.current_hp as f64) < attacker.max_hp() as f64 * 0.33 {
            return HookOutcome::Continue(Effect::damage(1.33));
        }
        HookOutcome::none()
    }

    pub fn spoilsport(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if spread(attack.target) {
            return HookOutcome::Continue(Effect::damage(1.25));
        }
        HookOutcome::none()
    }

    pub fn tactical_strike(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.hold > 0 {
            return HookOutcome::Continue(Effect::damage(1.15));
        }
        HookOutcome::none()
    }

    pub fn mental_alliance(
        _attacker: &Creature,
        ally: Option<&Creature>,
        _target: &Creature,
        _attack: &Move,
    ) -> HookOutcome {
        if ally.is_some_and(|a| a.has_type(Type::Mental)) {
            return HookOutcome::Continue(Effect::damage(1.15));
        }
        HookOutcome::none()
    }

    pub fn synergy_master(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.is_synergy_variant() {
            return HookOutcome::Continue(Effect::damage(1.25));
        }
        HookOutcome::none()
    }

    pub fn synergy_master_ally(
        _attacker: &Creature,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.is_synergy_variant() {
            return HookOutcome::Continue(Effect::damage(1.25));
        }
        HookOutcome::none()
    }

    pub fn rested(
        attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        _attack: &Move,
    ) -> HookOutcome {
        if attacker.trait_memory.turns() <= 2 {
            return HookOutcome::Continue(Effect::damage(1.3));
        }
        HookOutcome::none()
    }

    pub fn rested_turn_end(target: &Creature) -> Effect {
        let turns = target.trait_memory.turns();
        if turns <= 2 {
            return Effect::on_target(vec![(EffectKey::Tally, i32::from(turns) + 1)]);
        }
        Effect::none()
    }

    pub fn vigorous(
        attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        _attack: &Move,
    ) -> HookOutcome {
        // Armed by the stamina path when the holder overdraws; checking the
        // overexertion counter instead would let a forced overexertion
        // (Strangle) raise attack power.
        if attacker.trait_memory.is_armed() {
            return HookOutcome::Continue(Effect {
                attacker: vec![(EffectKey::Arm, 0)],
                damage: 1.5,
                ..Effect::none()
            });
        }
        HookOutcome::none()
    }

    pub fn aerobic(
        attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        // The armed flag keeps multi-target moves from stacking the boost.
        if attack.kind == Type::Wind && !attacker.trait_memory.is_armed() {
            return HookOutcome::Continue(Effect::on_attacker(vec![
                (EffectKey::Stat(Stat::Spe), 1),
                (EffectKey::Stat(Stat::SpD), -1),
                (EffectKey::Arm, 1),
            ]));
        }
        HookOutcome::none()
    }

    pub fn patient(
        attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.hold > 0 && !attacker.trait_memory.is_armed() {
            return HookOutcome::Continue(Effect::on_attacker(vec![
                (EffectKey::Stat(Stat::Sta), attacker.max_sta() as i32 / 10),
                (EffectKey::Arm, 1),
            ]));
        }
        HookOutcome::none()
    }

    pub fn rejuvenate(
        attacker: &Creature,
        _ally: Option<&Creature>,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.class != MoveClass::Physical {
            return HookOutcome::none();
        }
        let heal = (attacker.max_hp() as f64 * 0.15) as i32;
        HookOutcome::Continue(Effect::on_attacker(vec![(EffectKey::Stat(Stat::Hp), heal)]))
    }

    pub fn apothecary(
        attacker: &Creature,
        ally: Option<&Creature>,
        target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.class != MoveClass::Special {
            return HookOutcome::none();
        }
        if ally.is_some_and(|a| std::ptr::eq(a, target)) {
            return HookOutcome::Continue(Effect::on_target(vec![(
                EffectKey::Status(StatusId::Regenerated),
                1,
            )]));
        }
        HookOutcome::Continue(Effect::on_target(vec![(
            EffectKey::Status(StatusId::Poisoned),
            1,
        )]))
    }

    pub fn burglar(
        _attacker: &Creature,
        _ally: Option<&Creature>,
        target: &Creature,
        _attack: &Move,
    ) -> HookOutcome {
        if target.asleep() || target.exhausted() {
            return HookOutcome::Continue(Effect::on_target(vec![(EffectKey::RemoveGear, 1)]));
        }
        HookOutcome::none()
    }

    pub fn individualist(
        _attacker: &Creature,
        ally: Option<&Creature>,
        target: &Creature,
        _attack: &Move,
    ) -> HookOutcome {
        if ally.is_some_and(|a| std::ptr::eq(a, target)) {
            return HookOutcome::Unaffected;
        }
        HookOutcome::none()
    }
}

// ============================================================================
// Defensive multipliers and hit riders (on_hit)
// ============================================================================

pub mod defense {
    use super::*;

    pub fn amphibian(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Water {
            return HookOutcome::Continue(Effect::on_target(vec![(
                EffectKey::Stat(Stat::Spe),
                1,
            )]));
        }
        HookOutcome::none()
    }

    pub fn callosity(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.class == MoveClass::Physical {
            return HookOutcome::Continue(Effect::on_target(vec![(
                EffectKey::Stat(Stat::Def),
                1,
            )]));
        }
        HookOutcome::none()
    }

    pub fn electric_synthesize(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Electric {
            // Flips the hit into healing.
            return HookOutcome::Continue(Effect::damage(-1.0));
        }
        HookOutcome::none()
    }

    pub fn flawed_crystal(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if matches!(attack.kind, Type::Mental | Type::Toxic | Type::Electric) {
            return HookOutcome::Continue(Effect::damage(1.5));
        }
        HookOutcome::none()
    }

    pub fn hover(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Earth {
            return HookOutcome::Continue(Effect::damage(0.5));
        }
        HookOutcome::none()
    }

    pub fn immunity(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Toxic {
            return HookOutcome::Continue(Effect::damage(0.0));
        }
        HookOutcome::none()
    }

    pub fn mucous(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Electric {
            return HookOutcome::Continue(Effect::damage(0.7));
        }
        HookOutcome::none()
    }

    pub fn parrier(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.class == MoveClass::Physical {
            return HookOutcome::Continue(Effect::damage(0.7));
        }
        HookOutcome::none()
    }

    pub fn punching_bag(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Melee {
            return HookOutcome::Continue(Effect::damage(0.7));
        }
        HookOutcome::none()
    }

    pub fn skull_helmet(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if matches!(attack.kind, Type::Melee | Type::Mental) {
            return HookOutcome::Continue(Effect::damage(0.75));
        }
        HookOutcome::none()
    }

    pub fn thick_skin(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Wind {
            return HookOutcome::Continue(Effect::damage(0.5));
        }
        HookOutcome::none()
    }

    pub fn provident(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.class == MoveClass::Physical
            && matches!(attack.kind, Type::Fire | Type::Earth | Type::Melee)
        {
            return HookOutcome::Continue(Effect::on_target(vec![(
                EffectKey::Stat(Stat::SpD),
                1,
            )]));
        }
        HookOutcome::none()
    }

    pub fn trauma(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        match attack.class {
            MoveClass::Physical => HookOutcome::Continue(Effect::on_target(vec![(
                EffectKey::Stat(Stat::Def),
                -1,
            )])),
            MoveClass::Special => HookOutcome::Continue(Effect::on_target(vec![(
                EffectKey::Stat(Stat::SpD),
                -1,
            )])),
            MoveClass::Status => HookOutcome::none(),
        }
    }

    pub fn toxic_skin(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if attack.class == MoveClass::Physical {
            return HookOutcome::Continue(Effect::on_attacker(vec![(
                EffectKey::Status(StatusId::Poisoned),
                2,
            )]));
        }
        HookOutcome::none()
    }

    pub fn friendship(
        attacker: &Creature,
        _target: &Creature,
        ally: Option<&Creature>,
        _attack: &Move,
    ) -> HookOutcome {
        if ally.is_some_and(|a| std::ptr::eq(a, attacker)) {
            return HookOutcome::Unaffected;
        }
        HookOutcome::none()
    }

    pub fn team_elusive(
        _attacker: &Creature,
        _target: &Creature,
        _ally: Option<&Creature>,
        attack: &Move,
    ) -> HookOutcome {
        if spread(attack.target) {
            return HookOutcome::Unaffected;
        }
        HookOutcome::none()
    }

    pub fn puppet_master(
        _attacker: &Creature,
        target: &Creature,
        ally: Option<&Creature>,
        _attack: &Move,
    ) -> HookOutcome {
        if (target.current_hp as f64) < target.max_hp() as f64 * 0.4 && ally.is_some() {
            return HookOutcome::RedirectToAlly;
        }
        HookOutcome::none()
    }

    pub fn shared_pain(
        _attacker: &Creature,
        target: &Creature,
        ally: Option<&Creature>,
        _attack: &Move,
    ) -> HookOutcome {
        if target.trait_memory.is_armed() && ally.is_some() {
            return HookOutcome::RedirectToAlly;
        }
        HookOutcome::Continue(Effect::on_target(vec![(EffectKey::Arm, 1)]))
    }

    pub fn shared_pain_turn_start(_target: &Creature) -> Effect {
        Effect::on_target(vec![(EffectKey::Arm, 0)])
    }

    pub fn water_custodian_ally_hit(
        _attacker: &Creature,
        _target: &Creature,
        attack: &Move,
    ) -> HookOutcome {
        if attack.kind == Type::Water {
            return HookOutcome::RedirectToAlly;
        }
        HookOutcome::none()
    }
}

// ============================================================================
// Status gates and riders (on_status / on_ally_status)
// ============================================================================

pub mod status_guard {
    use super::*;

    pub fn caffeinated(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        if status == StatusId::Asleep {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Asleep), -1)]);
        }
        Effect::none()
    }

    pub fn cold_natured(_target: &Creature, status: StatusId, turns: u8) -> Effect {
        if status == StatusId::Cold {
            return Effect::on_target(vec![
                (EffectKey::Status(StatusId::Cold), -1),
                (EffectKey::Status(StatusId::Frozen), i32::from(turns)),
            ]);
        }
        Effect::none()
    }

    pub fn escapist(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        if status == StatusId::Trapped {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Trapped), -1)]);
        }
        Effect::none()
    }

    pub fn escapist_ally(
        _target: &Creature,
        _ally: &Creature,
        status: StatusId,
        _turns: u8,
    ) -> Effect {
        if status == StatusId::Trapped {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Trapped), -1)]);
        }
        Effect::none()
    }

    pub fn escapist_switch_in(_target: &Creature, ally: Option<&Creature>) -> Effect {
        if ally.is_some_and(|a| a.trapped()) {
            return Effect::on_ally(vec![(EffectKey::Status(StatusId::Trapped), -1)]);
        }
        Effect::none()
    }

    pub fn fever_rush(_target: &Creature, _status: StatusId, _turns: u8) -> Effect {
        Effect::on_target(vec![(EffectKey::Stat(Stat::Atk), 1)])
    }

    pub fn mithridatism(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        if status == StatusId::Poisoned {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Poisoned), -1)]);
        }
        Effect::none()
    }

    pub fn mucous(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        if matches!(status, StatusId::Cold | StatusId::Burned) {
            return Effect::on_target(vec![(EffectKey::Status(status), -1)]);
        }
        Effect::none()
    }

    pub fn neutrality(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        Effect::on_target(vec![(EffectKey::Status(status), -1)])
    }

    pub fn receptive(_target: &Creature, status: StatusId, turns: u8) -> Effect {
        if matches!(
            status,
            StatusId::Vigorized
                | StatusId::Immune
                | StatusId::Regenerated
                | StatusId::Evading
                | StatusId::Alerted
        ) {
            return Effect::on_target(vec![(EffectKey::Status(status), i32::from(turns) + 1)]);
        }
        Effect::none()
    }

    pub fn resistant(_target: &Creature, status: StatusId, turns: u8) -> Effect {
        if matches!(
            status,
            StatusId::Cold
                | StatusId::Asleep
                | StatusId::Trapped
                | StatusId::Poisoned
                | StatusId::Burned
                | StatusId::Exhausted
        ) {
            let shortened = if turns > 1 { i32::from(turns) - 1 } else { -1 };
            return Effect::on_target(vec![(EffectKey::Status(status), shortened)]);
        }
        Effect::none()
    }

    pub fn warm_blooded(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        if status == StatusId::Cold {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Cold), -1)]);
        }
        Effect::none()
    }

    pub fn zen(_target: &Creature, status: StatusId, _turns: u8) -> Effect {
        if status == StatusId::Asleep {
            return Effect::on_target(vec![
                (EffectKey::Stat(Stat::Def), 1),
                (EffectKey::Stat(Stat::SpD), 1),
            ]);
        }
        Effect::none()
    }

    pub fn guardian_ally(
        _target: &Creature,
        _ally: &Creature,
        status: StatusId,
        _turns: u8,
    ) -> Effect {
        // Also stops Frozen reaching a cold-natured ally.
        if matches!(
            status,
            StatusId::Cold
                | StatusId::Frozen
                | StatusId::Burned
                | StatusId::Poisoned
                | StatusId::Doomed
        ) {
            return Effect::on_target(vec![(EffectKey::Status(status), -1)]);
        }
        Effect::none()
    }
}

// ============================================================================
// Damage reactions (on_take_damage / on_ally_damage / after_attack)
// ============================================================================

pub mod reaction {
    use super::*;

    pub fn fainted_curse(
        attacker: &Creature,
        target: &Creature,
        _attack: &Move,
        damage: i32,
    ) -> Effect {
        if damage <= target.current_hp as i32 {
            return Effect::none();
        }
        let burst = (attacker.max_hp() as f64 * 0.3) as i32;
        Effect::on_attacker(vec![(EffectKey::Stat(Stat::Hp), -burst)])
    }

    pub fn heat_discharge(
        _attacker: &Creature,
        target: &Creature,
        _attack: &Move,
        damage: i32,
    ) -> Effect {
        if damage > target.current_hp as i32 {
            return Effect::on_attacker(vec![(EffectKey::Status(StatusId::Burned), 3)]);
        }
        Effect::none()
    }

    pub fn mirroring(
        _attacker: &Creature,
        _target: &Creature,
        attack: &Move,
        damage: i32,
    ) -> Effect {
        if attack.class == MoveClass::Special {
            return Effect::on_attacker(vec![(EffectKey::Stat(Stat::Hp), -(damage / 4))]);
        }
        Effect::none()
    }

    pub fn trance(_attacker: &Creature, target: &Creature, _attack: &Move, damage: i32) -> Effect {
        let remaining = target.current_hp as i64 - i64::from(damage);
        if remaining <= 0 || remaining > (target.max_hp() as f64 * 0.3) as i64 {
            return Effect::none();
        }
        Effect::on_target(vec![
            (EffectKey::Status(StatusId::Asleep), 2),
            (EffectKey::Status(StatusId::Regenerated), 2),
            (EffectKey::Stat(Stat::SpA), 2),
            (EffectKey::Stat(Stat::SpD), 2),
        ])
    }

    pub fn avenger(
        _attacker: &Creature,
        target: &Creature,
        _ally: &Creature,
        _attack: &Move,
        damage: i32,
    ) -> Effect {
        if damage > target.current_hp as i32 {
            return Effect::on_ally(vec![
                (EffectKey::Stat(Stat::Spe), 1),
                (EffectKey::Stat(Stat::SpA), 1),
            ]);
        }
        Effect::none()
    }

    pub fn benefactor(
        _attacker: &Creature,
        _target: &Creature,
        ally: &Creature,
        _attack: &Move,
        _damage: i32,
    ) -> Effect {
        let heal = (ally.max_hp() / 10) as i32;
        Effect::on_ally(vec![(EffectKey::Stat(Stat::Hp), heal)])
    }

    pub fn prideful(_attacker: &Creature, target: &Creature, _attack: &Move) -> Effect {
        if target.current_hp == 0 {
            return Effect::on_attacker(vec![
                (EffectKey::Stat(Stat::Atk), 1),
                (EffectKey::Stat(Stat::SpA), 1),
                (EffectKey::Stat(Stat::Spe), 1),
            ]);
        }
        Effect::none()
    }

    pub fn self_esteem(_attacker: &Creature, target: &Creature, _attack: &Move) -> Effect {
        if target.current_hp == 0 {
            return Effect::on_attacker(vec![
                (EffectKey::Status(StatusId::Cold), -1),
                (EffectKey::Status(StatusId::Trapped), -1),
                (EffectKey::Status(StatusId::Seized), -1),
                (EffectKey::Status(StatusId::Poisoned), -1),
                (EffectKey::Status(StatusId::Burned), -1),
                (EffectKey::Status(StatusId::Doomed), -1),
                (EffectKey::Status(StatusId::Exiled), -1),
                (EffectKey::Status(StatusId::Exhausted), -1),
            ]);
        }
        Effect::none()
    }
}

// ============================================================================
// Switch-in and turn-boundary effects
// ============================================================================

pub mod presence {
    use super::*;

    pub fn demoralize(_target: &Creature, _ally: Option<&Creature>) -> Effect {
        Effect {
            opposing_team: vec![(EffectKey::Stat(Stat::Spe), -1)],
            ..Effect::none()
        }
    }

    pub fn protector(_target: &Creature, _ally: Option<&Creature>) -> Effect {
        Effect::on_ally(vec![
            (EffectKey::Stat(Stat::Def), 1),
            (EffectKey::Stat(Stat::SpD), 1),
        ])
    }

    pub fn fast_charge(_target: &Creature, ally: &Creature) -> Effect {
        if ally.has_type(Type::Digital) {
            return Effect::on_ally(vec![(EffectKey::Stat(Stat::Spe), 2)]);
        }
        Effect::none()
    }

    pub fn power_nap(target: &Creature) -> Effect {
        if target.asleep() {
            let heal = (target.max_hp() as f64 * 0.15) as i32;
            return Effect::on_target(vec![(EffectKey::Stat(Stat::Hp), heal)]);
        }
        Effect::none()
    }

    pub fn energy_reserves(target: &Creature) -> Effect {
        if target.current_hp < target.max_hp() / 4 {
            return Effect::on_target(vec![(EffectKey::Status(StatusId::Vigorized), 2)]);
        }
        Effect::none()
    }

    pub fn disarm_turn_end(target: &Creature) -> Effect {
        if target.trait_memory.is_armed() {
            return Effect::on_target(vec![(EffectKey::Arm, 0)]);
        }
        Effect::none()
    }

    pub fn unnoticed_reset(_target: &Creature) -> Effect {
        Effect::on_target(vec![(EffectKey::Arm, 0)])
    }

    pub fn unnoticed_switch_in(target: &Creature, _ally: Option<&Creature>) -> Effect {
        unnoticed_reset(target)
    }

    pub fn unnoticed_hit(
        _attacker: &Creature,
        target: &Creature,
        _ally: Option<&Creature>,
        _attack: &Move,
    ) -> HookOutcome {
        if target.trait_memory.is_armed() {
            return HookOutcome::none();
        }
        HookOutcome::Continue(Effect::on_target(vec![(EffectKey::Arm, 1)]))
    }

    pub fn unnoticed_turn_end(target: &Creature) -> Effect {
        if target.trait_memory.is_armed() {
            return Effect::none();
        }
        Effect::on_target(vec![(EffectKey::Stat(Stat::Spe), 1)])
    }
}
