//! Full-turn resolution: start-of-turn hooks, scheduled actions, the hit
//! cascade, end-of-turn upkeep, fainting and win detection.

use crate::creature::Creature;
use crate::damage::calc_damage;
use crate::effect::Effect;
use crate::error::EngineError;
use crate::hooks::HookOutcome;
use crate::moves::{Move, MoveClass, MoveId, TargetPattern};
use crate::schedule::{self, Action, Choice, Pending};
use crate::stats::Stat;
use serde::Serialize;

/// Field positions per side.
pub const FIELD_SLOTS: usize = 2;

/// Adjacency ring for clockwise targeting, relative to the current slot:
/// `(crosses_to_other_side, field_slot)`, scanned from the current slot's
/// offset. Unconfirmed against the live game, hence a constant and not an
/// assumption baked into the loop.
pub const CLOCKWISE_RING: [(bool, usize); 5] =
    [(false, 1), (true, 0), (true, 1), (false, 0), (false, 1)];

/// Damage attenuation for the second and third clockwise targets.
pub const CLOCKWISE_FALLOFF: [f64; 2] = [0.7, 0.6];

/// Where an effect's four delta maps land, as `(side, roster index)` refs.
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectTargets {
    pub attacker: Option<(usize, usize)>,
    pub target: Option<(usize, usize)>,
    pub ally: Option<(usize, usize)>,
    pub opposing_side: Option<usize>,
}

/// Result of walking the hook call sites for one target.
enum Cascade {
    Unaffected,
    Redirect { ally_member: usize },
    Effects(Vec<Effect>),
}

#[derive(Clone, Debug, Serialize)]
pub struct Battle {
    pub teams: [Vec<Creature>; 2],
    /// Field position -> roster index; `None` when the slot is empty.
    pub active: [[Option<usize>; FIELD_SLOTS]; 2],
    /// Which side currently wins scheduling ties.
    pub speed_arrow: usize,
    pub winner: Option<usize>,
}

impl Battle {
    /// Build a battle from two rosters; the first (up to) two members of
    /// each side take the field, linked as allies.
    pub fn new(teams: [Vec<Creature>; 2]) -> Battle {
        let mut battle = Battle {
            teams,
            active: [[None; FIELD_SLOTS]; 2],
            speed_arrow: 0,
            winner: None,
        };
        for side in 0..2 {
            for slot in 0..FIELD_SLOTS {
                if slot < battle.teams[side].len() {
                    battle.active[side][slot] = Some(slot);
                }
            }
            if let [Some(a), Some(b)] = battle.active[side] {
                battle.teams[side][a].ally = Some(b);
                battle.teams[side][b].ally = Some(a);
            }
        }
        battle
    }

    /// The creature occupying a field position, if any.
    pub fn active_creature(&self, side: usize, slot: usize) -> Option<&Creature> {
        let member = self.active.get(side)?.get(slot).copied().flatten()?;
        self.teams[side].get(member)
    }

    /// Backfill a fainted (empty) field slot with a healthy bench member.
    /// Replacement selection belongs to the caller; the engine never picks.
    pub fn replace_fainted(&mut self, side: usize, slot: usize, member: usize) -> bool {
        if side > 1 || slot >= FIELD_SLOTS || self.active[side][slot].is_some() {
            return false;
        }
        if member >= self.teams[side].len()
            || self.teams[side][member].fainted
            || self.active[side].contains(&Some(member))
        {
            return false;
        }
        self.active[side][slot] = Some(member);
        self.relink_allies(side);
        true
    }

    // ------------------------------------------------------------------
    // Turn resolution
    // ------------------------------------------------------------------

    /// Resolve one full turn from both sides' choices (indexed by field
    /// slot), mutating the battle in place and setting `winner` when
    /// terminal. Choices are assumed pre-validated; unsupported action
    /// kinds surface as errors rather than silently resolving.
    pub fn resolve_turn(
        &mut self,
        side0: &[Choice],
        side1: &[Choice],
    ) -> Result<(), EngineError> {
        if self.winner.is_some() {
            return Ok(());
        }

        // Start-of-turn hooks, fastest first.
        for (side, member) in self.active_by_speed() {
            if self.teams[side][member].fainted {
                continue;
            }
            let (creature, ally) = self.creature_with_ally_mut(side, member);
            creature.start_turn(ally);
            self.sweep_fainted();
            if self.check_win() {
                return Ok(());
            }
        }

        // Action phase.
        let choices = [side0, side1];
        for (side, slot) in self.action_order(choices) {
            let Some(choice) = choices[side].get(slot) else {
                continue;
            };
            if self.active[side][slot].is_none() {
                continue;
            }
            match &choice.action {
                Action::Run => return Err(EngineError::UnsupportedAction("run")),
                Action::UseItem => return Err(EngineError::UnsupportedAction("item")),
                Action::Rest => return Err(EngineError::UnsupportedAction("rest")),
                Action::Switch { bench } => self.process_switch(side, slot, *bench),
                Action::Attack { move_id, targets } => {
                    self.process_attack(side, slot, *move_id, targets)?;
                }
            }
            self.sweep_fainted();
            if self.check_win() {
                return Ok(());
            }
        }

        // End-of-turn upkeep, fastest first.
        for (side, member) in self.active_by_speed() {
            if self.teams[side][member].fainted {
                continue;
            }
            let (creature, ally) = self.creature_with_ally_mut(side, member);
            creature.end_turn(ally);
            self.sweep_fainted();
            if self.check_win() {
                return Ok(());
            }
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    /// Active creatures, fastest first; ties break arrow-holder first, then
    /// left field slot, same as the scheduler.
    fn active_by_speed(&self) -> Vec<(usize, usize)> {
        let mut entries: Vec<(u32, bool, usize, usize, usize)> = Vec::new();
        for side in 0..2 {
            for slot in 0..FIELD_SLOTS {
                if let Some(member) = self.active[side][slot] {
                    let speed = self.teams[side][member].live_stat(Stat::Spe);
                    entries.push((speed, side == self.speed_arrow, slot, side, member));
                }
            }
        }
        entries.sort_by(|a, b| {
            b.0.cmp(&a.0)
                .then_with(|| b.1.cmp(&a.1))
                .then_with(|| a.2.cmp(&b.2))
        });
        entries.into_iter().map(|(_, _, _, side, member)| (side, member)).collect()
    }

    fn action_order(&mut self, choices: [&[Choice]; 2]) -> Vec<(usize, usize)> {
        let mut pending = Vec::new();
        for (side, side_choices) in choices.iter().enumerate() {
            for (slot, choice) in side_choices.iter().enumerate() {
                let Some(member) = self.active[side].get(slot).copied().flatten() else {
                    continue;
                };
                let actor = &self.teams[side][member];
                let attack_priority = match &choice.action {
                    Action::Attack { move_id, .. } => {
                        let ally = actor.ally.map(|a| &self.teams[side][a]);
                        Some(actor.resolve_move(ally, *move_id).priority)
                    }
                    _ => None,
                };
                pending.push(Pending {
                    side,
                    slot,
                    key: schedule::priority_key(choice, actor, attack_priority),
                });
            }
        }
        schedule::order_actions(pending, &mut self.speed_arrow)
    }

    // ------------------------------------------------------------------
    // Switching
    // ------------------------------------------------------------------

    fn process_switch(&mut self, side: usize, slot: usize, bench: usize) {
        let Some(outgoing) = self.active[side][slot] else {
            return;
        };
        if self.teams[side][outgoing].trapped() {
            return;
        }
        if bench >= self.teams[side].len()
            || self.teams[side][bench].fainted
            || self.active[side].contains(&Some(bench))
        {
            return;
        }

        self.teams[side][outgoing].ally = None;
        self.active[side][slot] = Some(bench);
        self.relink_allies(side);
        let ally_member = self.teams[side][bench].ally;

        // Switch-in hooks on the incoming creature.
        let incoming_ref = &self.teams[side][bench];
        let ally_ref = ally_member.map(|a| &self.teams[side][a]);
        let mut effects = Vec::new();
        if let Some(hook) = incoming_ref.trait_id.hooks().on_switch_in {
            effects.push(hook(incoming_ref, ally_ref));
        }
        if !incoming_ref.seized() {
            if let Some(hook) = incoming_ref.gear.hooks().on_switch_in {
                effects.push(hook(incoming_ref, ally_ref));
            }
        }
        let ctx = EffectTargets {
            attacker: None,
            target: Some((side, bench)),
            ally: ally_member.map(|a| (side, a)),
            opposing_side: Some(1 - side),
        };
        for eff in &effects {
            self.apply_effect(eff, &ctx);
        }

        // The standing ally reacts to the arrival.
        if let Some(ally_member) = ally_member {
            let holder = &self.teams[side][ally_member];
            let incoming_ref = &self.teams[side][bench];
            let mut effects = Vec::new();
            if let Some(hook) = holder.trait_id.hooks().on_ally_switch_in {
                effects.push(hook(holder, incoming_ref));
            }
            if !holder.seized() {
                if let Some(hook) = holder.gear.hooks().on_ally_switch_in {
                    effects.push(hook(holder, incoming_ref));
                }
            }
            let ctx = EffectTargets {
                attacker: None,
                target: Some((side, ally_member)),
                ally: Some((side, bench)),
                opposing_side: Some(1 - side),
            };
            for eff in &effects {
                self.apply_effect(eff, &ctx);
            }
        }
    }

    // ------------------------------------------------------------------
    // Attacking
    // ------------------------------------------------------------------

    fn process_attack(
        &mut self,
        side: usize,
        slot: usize,
        move_id: MoveId,
        chosen: &[(usize, usize)],
    ) -> Result<(), EngineError> {
        let Some(att_member) = self.active[side][slot] else {
            return Ok(());
        };
        if self.teams[side][att_member].fainted
            || self.teams[side][att_member].overexerted >= 1
        {
            return Ok(());
        }

        let attack = {
            let attacker = &self.teams[side][att_member];
            let ally = attacker.ally.map(|a| &self.teams[side][a]);
            attacker.resolve_move(ally, move_id)
        };

        let field_targets = self.fix_targeting(side, slot, &attack, chosen);
        if field_targets.is_empty() {
            return Ok(());
        }

        // Paid before anything lands, so overdraw effects (Vigorous) see
        // this attack.
        {
            let (attacker, _) = self.creature_with_ally_mut(side, att_member);
            attacker.use_stamina(u32::from(attack.stamina));
        }

        let mut targets: Vec<(usize, usize)> = field_targets
            .iter()
            .filter_map(|&(s, fs)| self.active[s][fs].map(|m| (s, m)))
            .collect();

        let mut clockwise_mod = 1.0;
        let mut falloff = CLOCKWISE_FALLOFF.iter().copied();
        let mut hit: Vec<(usize, usize)> = Vec::new();
        let mut index = 0;
        while index < targets.len() {
            let (tside, tmember) = targets[index];
            index += 1;
            if self.teams[tside][tmember].fainted {
                continue;
            }

            match self.run_hit_cascade(side, att_member, tside, tmember, &attack) {
                Cascade::Unaffected => continue,
                Cascade::Redirect { ally_member } => {
                    if !targets.contains(&(tside, ally_member)) {
                        targets.push((tside, ally_member));
                    }
                    continue;
                }
                Cascade::Effects(effects) => {
                    let ctx = EffectTargets {
                        attacker: Some((side, att_member)),
                        target: Some((tside, tmember)),
                        ally: self.teams[tside][tmember].ally.map(|a| (tside, a)),
                        opposing_side: Some(1 - side),
                    };
                    let mut modifier = 1.0;
                    for eff in &effects {
                        modifier *= self.apply_effect(eff, &ctx);
                    }

                    if attack.class != MoveClass::Status {
                        let damage = {
                            let attacker = &self.teams[side][att_member];
                            let target = &self.teams[tside][tmember];
                            calc_damage(attacker, &attack, target, modifier * clockwise_mod)
                        };
                        let reactions =
                            self.run_damage_hooks(side, att_member, tside, tmember, &attack, damage);
                        for eff in &reactions {
                            self.apply_effect(eff, &ctx);
                        }
                        self.teams[tside][tmember].take_damage(damage);

                        if attack.target == TargetPattern::Clockwise {
                            if damage <= 0 {
                                // A negated link breaks the chain.
                                hit.push((tside, tmember));
                                break;
                            }
                            if let Some(next) = falloff.next() {
                                clockwise_mod = next;
                            }
                        }
                    }
                    hit.push((tside, tmember));
                }
            }
        }

        // Post-attack hooks for every landed target, then faint cleanup.
        for &(tside, tmember) in &hit {
            let ctx = EffectTargets {
                attacker: Some((side, att_member)),
                target: Some((tside, tmember)),
                ally: self.teams[tside][tmember].ally.map(|a| (tside, a)),
                opposing_side: Some(1 - side),
            };
            let effects = self.run_after_hooks(side, att_member, tside, tmember, &attack);
            for eff in &effects {
                self.apply_effect(eff, &ctx);
            }
        }

        self.teams[side][att_member].note_move_used(move_id);
        Ok(())
    }

    /// Re-target around fainted slots and expand targeting patterns into
    /// concrete field positions.
    fn fix_targeting(
        &self,
        side: usize,
        slot: usize,
        attack: &Move,
        chosen: &[(usize, usize)],
    ) -> Vec<(usize, usize)> {
        match attack.target {
            TargetPattern::SelfTarget => return vec![(side, slot)],
            TargetPattern::WholeTeam => {
                return (0..FIELD_SLOTS)
                    .filter(|&s| self.active[side][s].is_some())
                    .map(|s| (side, s))
                    .collect();
            }
            TargetPattern::All => {
                let mut all = Vec::new();
                for s in 0..2 {
                    for fs in 0..FIELD_SLOTS {
                        if self.active[s][fs].is_some() {
                            all.push((s, fs));
                        }
                    }
                }
                return all;
            }
            _ => {}
        }

        let mut resolved: Vec<(usize, usize)> = Vec::new();
        for &(ts, tslot) in chosen {
            if ts > 1 || tslot >= FIELD_SLOTS {
                continue;
            }
            if self.active[ts][tslot].is_some() {
                if !resolved.contains(&(ts, tslot)) {
                    resolved.push((ts, tslot));
                }
            } else if matches!(
                attack.target,
                TargetPattern::Single | TargetPattern::Clockwise | TargetPattern::Other
            ) && ts != side
                && self.active[ts][1 - tslot].is_some()
            {
                // Single-target attacks reroute to the surviving opposing
                // slot; attacks aimed at an empty friendly slot just fail.
                let rerouted = (ts, 1 - tslot);
                if !resolved.contains(&rerouted) {
                    resolved.push(rerouted);
                }
            }
        }

        if attack.target == TargetPattern::Clockwise {
            if let Some(&first) = resolved.first() {
                let mut chain = vec![first];
                let mut cursor = first;
                for _ in 0..2 {
                    match self.next_clockwise(cursor) {
                        Some(next) => {
                            chain.push(next);
                            cursor = next;
                        }
                        None => break,
                    }
                }
                return chain;
            }
            return Vec::new();
        }

        resolved
    }

    fn next_clockwise(&self, from: (usize, usize)) -> Option<(usize, usize)> {
        let (side, slot) = from;
        for &(crosses, fs) in &CLOCKWISE_RING[slot..] {
            let s = if crosses { 1 - side } else { side };
            if self.active[s][fs].is_some() {
                return Some((s, fs));
            }
        }
        None
    }

    /// Walk the ordered hook call sites for one target: defender gear,
    /// defender trait, defending ally's gear/trait, attacker gear, attacker
    /// trait, ally-attack hooks, then the move's own declared effect.
    fn run_hit_cascade(
        &self,
        aside: usize,
        amember: usize,
        tside: usize,
        tmember: usize,
        attack: &Move,
    ) -> Cascade {
        let attacker = &self.teams[aside][amember];
        let attacker_ally = attacker.ally.map(|a| &self.teams[aside][a]);
        let target = &self.teams[tside][tmember];
        let target_ally = target.ally.map(|a| &self.teams[tside][a]);

        let mut effects = Vec::new();

        // Defender's own gear and trait.
        let mut defender_hooks = Vec::new();
        if !target.seized() {
            defender_hooks.push(target.gear.hooks().on_hit);
        }
        defender_hooks.push(target.trait_id.hooks().on_hit);
        for hook in defender_hooks.into_iter().flatten() {
            match hook(attacker, target, target_ally, attack) {
                HookOutcome::Continue(eff) => {
                    if !eff.is_none() {
                        effects.push(eff);
                    }
                }
                HookOutcome::Unaffected => return Cascade::Unaffected,
                HookOutcome::RedirectToAlly => {
                    if let Some(ally_member) = target.ally {
                        return Cascade::Redirect { ally_member };
                    }
                }
            }
        }

        // Defending ally's gear and trait.
        if let Some(ally_ref) = target_ally {
            let mut ally_hooks = Vec::new();
            if !ally_ref.seized() {
                ally_hooks.push(ally_ref.gear.hooks().on_ally_hit);
            }
            ally_hooks.push(ally_ref.trait_id.hooks().on_ally_hit);
            for hook in ally_hooks.into_iter().flatten() {
                match hook(attacker, target, attack) {
                    HookOutcome::Continue(eff) => {
                        if !eff.is_none() {
                            effects.push(eff);
                        }
                    }
                    HookOutcome::Unaffected => return Cascade::Unaffected,
                    HookOutcome::RedirectToAlly => {
                        if let Some(ally_member) = target.ally {
                            return Cascade::Redirect { ally_member };
                        }
                    }
                }
            }
        }

        // Attacker's gear and trait.
        let mut attacker_hooks = Vec::new();
        if !attacker.seized() {
            attacker_hooks.push(attacker.gear.hooks().on_attack);
        }
        attacker_hooks.push(attacker.trait_id.hooks().on_attack);
        for hook in attacker_hooks.into_iter().flatten() {
            match hook(attacker, attacker_ally, target, attack) {
                HookOutcome::Continue(eff) => {
                    if !eff.is_none() {
                        effects.push(eff);
                    }
                }
                HookOutcome::Unaffected => return Cascade::Unaffected,
                HookOutcome::RedirectToAlly => {
                    if let Some(ally_member) = target.ally {
                        return Cascade::Redirect { ally_member };
                    }
                }
            }
        }

        // The attacker's ally chimes in on the attack itself.
        if let Some(ally_ref) = attacker_ally {
            let mut support_hooks = Vec::new();
            if !ally_ref.seized() {
                support_hooks.push(ally_ref.gear.hooks().on_ally_attack);
            }
            support_hooks.push(ally_ref.trait_id.hooks().on_ally_attack);
            for hook in support_hooks.into_iter().flatten() {
                if let HookOutcome::Continue(eff) = hook(attacker, target, attack) {
                    if !eff.is_none() {
                        effects.push(eff);
                    }
                }
            }
        }

        // The move's own declared effect maps close the walk.
        effects.push(Effect::from_specs(attack.self_effects, attack.effects));

        Cascade::Effects(effects)
    }

    fn run_damage_hooks(
        &self,
        aside: usize,
        amember: usize,
        tside: usize,
        tmember: usize,
        attack: &Move,
        damage: i32,
    ) -> Vec<Effect> {
        let attacker = &self.teams[aside][amember];
        let target = &self.teams[tside][tmember];
        let target_ally = target.ally.map(|a| &self.teams[tside][a]);

        let mut effects = Vec::new();
        if !target.seized() {
            if let Some(hook) = target.gear.hooks().on_take_damage {
                effects.push(hook(attacker, target, attack, damage));
            }
        }
        if let Some(hook) = target.trait_id.hooks().on_take_damage {
            effects.push(hook(attacker, target, attack, damage));
        }
        if let Some(ally_ref) = target_ally {
            if !ally_ref.seized() {
                if let Some(hook) = ally_ref.gear.hooks().on_ally_damage {
                    effects.push(hook(attacker, target, ally_ref, attack, damage));
                }
            }
            if let Some(hook) = ally_ref.trait_id.hooks().on_ally_damage {
                effects.push(hook(attacker, target, ally_ref, attack, damage));
            }
        }
        effects.retain(|e| !e.is_none());
        effects
    }

    fn run_after_hooks(
        &self,
        aside: usize,
        amember: usize,
        tside: usize,
        tmember: usize,
        attack: &Move,
    ) -> Vec<Effect> {
        let attacker = &self.teams[aside][amember];
        let target = &self.teams[tside][tmember];

        let mut effects = Vec::new();
        if let Some(hook) = attacker.trait_id.hooks().after_attack {
            effects.push(hook(attacker, target, attack));
        }
        if !attacker.seized() {
            if let Some(hook) = attacker.gear.hooks().after_attack {
                effects.push(hook(attacker, target, attack));
            }
        }
        if !target.seized() {
            if let Some(hook) = target.gear.hooks().after_hit {
                effects.push(hook(attacker, target, attack));
            }
        }
        if let Some(hook) = target.trait_id.hooks().after_hit {
            effects.push(hook(attacker, target, attack));
        }
        effects.retain(|e| !e.is_none());
        effects
    }

    // ------------------------------------------------------------------
    // Effect application
    // ------------------------------------------------------------------

    /// Distribute an effect's delta maps onto the given participants.
    /// Returns the effect's damage multiplier for the caller's fold.
    pub fn apply_effect(&mut self, eff: &Effect, ctx: &EffectTargets) -> f64 {
        if let Some((s, m)) = ctx.attacker {
            for &(key, mag) in &eff.attacker {
                self.apply_entry_at(s, m, key, mag);
            }
        }
        if let Some((s, m)) = ctx.target {
            for &(key, mag) in &eff.target {
                self.apply_entry_at(s, m, key, mag);
            }
        }
        if let Some((s, m)) = ctx.ally {
            for &(key, mag) in &eff.ally {
                self.apply_entry_at(s, m, key, mag);
            }
        }
        if !eff.opposing_team.is_empty() {
            if let Some(os) = ctx.opposing_side {
                for fs in 0..FIELD_SLOTS {
                    if let Some(m) = self.active[os][fs] {
                        for &(key, mag) in &eff.opposing_team {
                            self.apply_entry_at(os, m, key, mag);
                        }
                    }
                }
            }
        }
        eff.damage
    }

    fn apply_entry_at(
        &mut self,
        side: usize,
        member: usize,
        key: crate::effect::EffectKey,
        mag: i32,
    ) {
        let (creature, ally) = self.creature_with_ally_mut(side, member);
        creature.apply_entry(ally, key, mag);
    }

    /// Engine-level status application with the full veto protocol (ally
    /// trait included).
    pub fn apply_status_at(
        &mut self,
        side: usize,
        member: usize,
        status: crate::status::StatusId,
        turns: u8,
    ) -> bool {
        let (creature, ally) = self.creature_with_ally_mut(side, member);
        creature.apply_status(ally, status, turns)
    }

    // ------------------------------------------------------------------
    // Bookkeeping
    // ------------------------------------------------------------------

    fn creature_with_ally_mut(
        &mut self,
        side: usize,
        member: usize,
    ) -> (&mut Creature, Option<&mut Creature>) {
        let team = &mut self.teams[side];
        match team[member].ally {
            Some(ally) if ally != member && ally < team.len() => {
                let (a, b) = if member < ally {
                    let (left, right) = team.split_at_mut(ally);
                    (&mut left[member], &mut right[0])
                } else {
                    let (left, right) = team.split_at_mut(member);
                    (&mut right[0], &mut left[ally])
                };
                (a, Some(b))
            }
            _ => (&mut team[member], None),
        }
    }

    /// Reconnect ally links to mirror the active map.
    fn relink_allies(&mut self, side: usize) {
        let (a, b) = (self.active[side][0], self.active[side][1]);
        if let (Some(a), Some(b)) = (a, b) {
            self.teams[side][a].ally = Some(b);
            self.teams[side][b].ally = Some(a);
        } else {
            for member in [a, b].into_iter().flatten() {
                self.teams[side][member].ally = None;
            }
        }
    }

    /// Clear fainted creatures out of the active map and unlink allies.
    fn sweep_fainted(&mut self) {
        for side in 0..2 {
            for slot in 0..FIELD_SLOTS {
                if let Some(member) = self.active[side][slot] {
                    if self.teams[side][member].fainted {
                        self.active[side][slot] = None;
                        if let Some(ally) = self.teams[side][member].ally {
                            self.teams[side][ally].ally = None;
                        }
                        self.teams[side][member].ally = None;
                    }
                }
            }
        }
    }

    /// A side with no standing creatures loses; winner is set once.
    fn check_win(&mut self) -> bool {
        if self.winner.is_some() {
            return true;
        }
        for side in 0..2 {
            if self.teams[side].iter().all(|c| c.fainted) {
                self.winner = Some(1 - side);
                return true;
            }
        }
        false
    }
}
