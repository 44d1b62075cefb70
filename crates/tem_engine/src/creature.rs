//! The battling entity: constructed once per team build from static data,
//! mutated in place for the whole battle.

use crate::effect::{Effect, EffectKey};
use crate::gear::GearId;
use crate::moves::{Move, MoveId, Synergy};
use crate::species::SpeciesId;
use crate::stats::{self, Stat, ALL_STATS, MAX_STAGE, MIN_STAGE, STAT_COUNT};
use crate::status::{self, StatusId, StatusInstance, StatusSet, MAX_STATUSES};
use crate::traits::TraitId;
use crate::types::Type;
use serde::Serialize;

/// Level assumed when a set does not specify one.
pub const DEFAULT_LEVEL: u8 = 58;

/// Default single value (1-50 range).
pub const DEFAULT_SV: u16 = 50;

/// Trait scratch state. The meaning is trait-specific, but the two families
/// are kept apart so a counter trait can never misread a flag trait's state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum TraitMemory {
    #[default]
    Idle,
    /// One-shot flag family (Aerobic, Unnoticed, Vigorous, SharedPain).
    Armed,
    /// Turn-counter family (Rested).
    Turns(u8),
}

impl TraitMemory {
    #[inline]
    pub fn is_armed(self) -> bool {
        matches!(self, TraitMemory::Armed)
    }

    /// Counter value; the flag states read as zero.
    #[inline]
    pub fn turns(self) -> u8 {
        match self {
            TraitMemory::Turns(n) => n,
            _ => 0,
        }
    }
}

/// One learned move with its hold (recharge) counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoveSlot {
    pub id: MoveId,
    /// Counts up each turn toward the move's hold requirement; reset to -1
    /// on use so the same turn's end tick brings it back to 0.
    pub hold: i8,
}

/// Blueprint for building a [`Creature`], teacher-style builder.
#[derive(Clone, Debug)]
pub struct CreatureConfig {
    pub species: SpeciesId,
    pub level: u8,
    pub svs: [u16; STAT_COUNT],
    pub tvs: [u16; STAT_COUNT],
    pub trait_id: TraitId,
    pub gear: GearId,
    pub moves: Vec<MoveId>,
}

impl CreatureConfig {
    pub fn new(species: SpeciesId) -> Self {
        Self {
            species,
            level: DEFAULT_LEVEL,
            svs: [DEFAULT_SV; STAT_COUNT],
            tvs: [0; STAT_COUNT],
            trait_id: TraitId::None,
            gear: GearId::None,
            moves: Vec::new(),
        }
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level.max(1);
        self
    }

    pub fn sv(mut self, stat: Stat, value: u16) -> Self {
        self.svs[stat as usize] = value.clamp(1, 50);
        self
    }

    pub fn tv(mut self, stat: Stat, value: u16) -> Self {
        self.tvs[stat as usize] = value.min(500);
        self
    }

    pub fn trait_id(mut self, trait_id: TraitId) -> Self {
        self.trait_id = trait_id;
        self
    }

    /// Trait by display name; unknown names degrade to the no-op trait.
    pub fn trait_named(mut self, name: &str) -> Self {
        self.trait_id = TraitId::from_name_or_default(name);
        self
    }

    pub fn gear(mut self, gear: GearId) -> Self {
        self.gear = gear;
        self
    }

    /// Gear by display name; unknown names degrade to the no-op gear.
    pub fn gear_named(mut self, name: &str) -> Self {
        self.gear = GearId::from_name_or_default(name);
        self
    }

    pub fn moves(mut self, moves: &[MoveId]) -> Self {
        self.moves = moves.to_vec();
        self
    }

    pub fn build(&self) -> Creature {
        let data = self.species.data();
        let mut maxima = [0u32; STAT_COUNT];
        for stat in ALL_STATS {
            maxima[stat as usize] = stats::compute_stat(
                stat,
                u32::from(data.base_stats[stat as usize]),
                u32::from(self.svs[stat as usize]),
                u32::from(self.tvs[stat as usize]),
                u32::from(self.level),
            );
        }
        Creature {
            species: self.species,
            level: self.level,
            svs: self.svs,
            tvs: self.tvs,
            stats: maxima,
            current_hp: maxima[Stat::Hp as usize],
            current_sta: maxima[Stat::Sta as usize],
            types: data.types,
            trait_id: self.trait_id,
            gear: self.gear,
            moves: self
                .moves
                .iter()
                .map(|&id| MoveSlot { id, hold: 0 })
                .collect(),
            boosts: [0; STAT_COUNT],
            statuses: Vec::new(),
            resting: false,
            overexerted: 0,
            fainted: false,
            trait_memory: TraitMemory::Idle,
            ally: None,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Creature {
    pub species: SpeciesId,
    pub level: u8,
    pub svs: [u16; STAT_COUNT],
    pub tvs: [u16; STAT_COUNT],
    /// Computed stat maxima, indexed by `Stat as usize`.
    pub stats: [u32; STAT_COUNT],
    pub current_hp: u32,
    pub current_sta: u32,
    pub types: (Type, Option<Type>),
    pub trait_id: TraitId,
    pub gear: GearId,
    pub moves: Vec<MoveSlot>,
    /// Stage boosts for the five boostable stats; HP/Sta entries stay zero.
    pub boosts: [i8; STAT_COUNT],
    pub statuses: Vec<StatusInstance>,
    pub resting: bool,
    /// 0 = normal, 1 = cannot act this turn, 2 = used excess stamina this turn.
    pub overexerted: u8,
    pub fainted: bool,
    pub trait_memory: TraitMemory,
    /// Roster index of the ally on the same side, for 2v2 formats.
    pub ally: Option<usize>,
}

impl PartialEq for Creature {
    /// Set identity: species, move set (unordered), trait, gear, level,
    /// effort inputs, boosts. Battle-transient state does not participate.
    fn eq(&self, other: &Self) -> bool {
        let mut mine: Vec<MoveId> = self.moves.iter().map(|m| m.id).collect();
        let mut theirs: Vec<MoveId> = other.moves.iter().map(|m| m.id).collect();
        mine.sort_by_key(|m| *m as u16);
        theirs.sort_by_key(|m| *m as u16);
        self.species == other.species
            && mine == theirs
            && self.trait_id == other.trait_id
            && self.svs == other.svs
            && self.tvs == other.tvs
            && self.gear == other.gear
            && self.level == other.level
            && self.boosts == other.boosts
    }
}

impl Creature {
    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.stats[Stat::Hp as usize]
    }

    #[inline]
    pub fn max_sta(&self) -> u32 {
        self.stats[Stat::Sta as usize]
    }

    pub fn has_type(&self, t: Type) -> bool {
        self.types.0 == t || self.types.1 == Some(t)
    }

    /// Live value of a stat: HP/Sta are their current counters; the rest
    /// derive from the maximum, stage boosts, and the burn penalty.
    pub fn live_stat(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.current_hp,
            Stat::Sta => self.current_sta,
            _ => {
                let staged = stats::apply_stage(self.stats[stat as usize], self.boosts[stat as usize]);
                if matches!(stat, Stat::Atk | Stat::SpA) && self.burned() {
                    stats::apply_burn(staged)
                } else {
                    staged
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Boosts
    // ------------------------------------------------------------------

    /// Shift a boost stage. Clamping is silent: pushing past the cap is a
    /// legal no-op, not an error. Determined vetoes the negative direction.
    pub fn apply_boost(&mut self, stat: Stat, delta: i8) {
        if !stat.is_boostable() {
            return;
        }
        if self.trait_id == TraitId::Determined && delta < 0 {
            return;
        }
        let slot = &mut self.boosts[stat as usize];
        *slot = (*slot).saturating_add(delta).clamp(MIN_STAGE, MAX_STAGE);
    }

    pub fn clear_boosts(&mut self) {
        self.boosts = [0; STAT_COUNT];
    }

    // ------------------------------------------------------------------
    // Statuses
    // ------------------------------------------------------------------

    pub fn status_set(&self) -> StatusSet {
        self.statuses
            .iter()
            .fold(StatusSet::empty(), |acc, s| acc | s.id.flag())
    }

    pub fn has_status(&self, id: StatusId) -> bool {
        self.statuses.iter().any(|s| s.id == id)
    }

    pub fn cold(&self) -> bool {
        self.has_status(StatusId::Cold)
    }
    pub fn frozen(&self) -> bool {
        self.has_status(StatusId::Frozen)
    }
    pub fn asleep(&self) -> bool {
        self.has_status(StatusId::Asleep)
    }
    pub fn trapped(&self) -> bool {
        self.has_status(StatusId::Trapped)
    }
    pub fn seized(&self) -> bool {
        self.has_status(StatusId::Seized)
    }
    pub fn poisoned(&self) -> bool {
        self.has_status(StatusId::Poisoned)
    }
    pub fn burned(&self) -> bool {
        self.has_status(StatusId::Burned)
    }
    pub fn exhausted(&self) -> bool {
        self.has_status(StatusId::Exhausted)
    }
    pub fn vigorized(&self) -> bool {
        self.has_status(StatusId::Vigorized)
    }
    pub fn nullified(&self) -> bool {
        self.has_status(StatusId::Nullified)
    }
    pub fn evading(&self) -> bool {
        self.has_status(StatusId::Evading)
    }
    pub fn alerted(&self) -> bool {
        self.has_status(StatusId::Alerted)
    }

    /// Drop a status if held. Returns whether anything was removed.
    pub fn remove_status(&mut self, id: StatusId) -> bool {
        let before = self.statuses.len();
        self.statuses.retain(|s| s.id != id);
        self.statuses.len() != before
    }

    /// Run one status application through the full automaton: veto hooks
    /// (gear, trait, then ally trait), identity interactions, the capacity
    /// cap, and finally the commit. Returns whether the status was stored.
    pub fn apply_status(
        &mut self,
        mut ally: Option<&mut Creature>,
        status: StatusId,
        turns: u8,
    ) -> bool {
        let mut turns = turns;

        if !self.seized() {
            if let Some(hook) = self.gear.hooks().on_status {
                let eff = hook(self, status, turns);
                if self.gate_status_effect(&mut ally, &eff, status, &mut turns) {
                    return false;
                }
            }
        }
        if let Some(hook) = self.trait_id.hooks().on_status {
            let eff = hook(self, status, turns);
            if self.gate_status_effect(&mut ally, &eff, status, &mut turns) {
                return false;
            }
        }
        if let Some(ally_ref) = ally.as_deref_mut() {
            if let Some(hook) = ally_ref.trait_id.hooks().on_ally_status {
                let eff = hook(ally_ref, self, status, turns);
                let mut vetoed = false;
                // The target map binds to the hook's holder (the ally); its
                // entry for the incoming status still gates the application
                // happening over here.
                for (key, mag) in &eff.target {
                    if *key == EffectKey::Status(status) {
                        if *mag < 1 {
                            vetoed = true;
                        } else if *mag as u8 != turns {
                            turns = *mag as u8;
                        }
                    } else {
                        ally_ref.apply_entry(None, *key, *mag);
                    }
                }
                for (key, mag) in &eff.ally {
                    self.apply_entry(Some(&mut *ally_ref), *key, *mag);
                }
                if vetoed {
                    return false;
                }
            }
        }

        // Interaction stage, by status identity.
        if self.has_status(status) {
            if status != StatusId::Cold {
                return false;
            }
            // Re-applied cold upgrades to frozen, carrying the clock over.
            if let Some(pos) = self.statuses.iter().position(|s| s.id == StatusId::Cold) {
                self.statuses[pos].id = StatusId::Frozen;
            }
            return true;
        }
        match status {
            StatusId::Cold => {
                if self.frozen() {
                    return false;
                }
                self.remove_status(StatusId::Burned);
            }
            StatusId::Burned => {
                if self.has_type(Type::Fire) {
                    return false;
                }
                self.remove_status(StatusId::Cold);
                self.remove_status(StatusId::Frozen);
            }
            StatusId::Asleep => {
                if self.has_type(Type::Mental) || self.alerted() {
                    return false;
                }
            }
            StatusId::Poisoned => {
                if self.has_type(Type::Toxic) {
                    return false;
                }
            }
            StatusId::Exhausted => {
                if self.vigorized() {
                    self.remove_status(StatusId::Vigorized);
                    return false;
                }
            }
            StatusId::Vigorized => {
                if self.exhausted() {
                    self.remove_status(StatusId::Exhausted);
                    return false;
                }
            }
            _ => {}
        }

        // Capacity stage: evict the youngest of two held conditions.
        if self.statuses.len() == MAX_STATUSES {
            if let Some(pos) = self
                .statuses
                .iter()
                .enumerate()
                .min_by_key(|(_, s)| s.existed)
                .map(|(i, _)| i)
            {
                self.statuses.remove(pos);
            }
        }

        self.statuses.push(StatusInstance::new(status, turns));
        true
    }

    /// Apply one veto-stage hook effect: entries keyed by the incoming
    /// status gate it; everything else lands as an ordinary side effect.
    fn gate_status_effect(
        &mut self,
        ally: &mut Option<&mut Creature>,
        eff: &Effect,
        incoming: StatusId,
        turns: &mut u8,
    ) -> bool {
        let mut vetoed = false;
        for (key, mag) in &eff.target {
            if *key == EffectKey::Status(incoming) {
                if *mag < 1 {
                    vetoed = true;
                } else if *mag as u8 != *turns {
                    *turns = *mag as u8;
                }
            } else {
                self.apply_entry(ally.as_deref_mut(), *key, *mag);
            }
        }
        vetoed
    }

    // ------------------------------------------------------------------
    // Effect entries
    // ------------------------------------------------------------------

    /// Land a single effect entry on this creature. The ally reference is
    /// only consulted when the entry cascades into a status application.
    pub fn apply_entry(&mut self, ally: Option<&mut Creature>, key: EffectKey, mag: i32) {
        match key {
            EffectKey::Stat(Stat::Hp) => self.take_damage(-mag),
            EffectKey::Stat(Stat::Sta) => {
                let next = i64::from(self.current_sta) + i64::from(mag);
                self.current_sta = next.clamp(0, i64::from(self.max_sta())) as u32;
            }
            EffectKey::Stat(stat) => {
                self.apply_boost(stat, mag.clamp(-10, 10) as i8);
            }
            EffectKey::Status(status) => {
                if mag < 1 {
                    let removed = self.remove_status(status);
                    if removed && status == StatusId::Asleep {
                        // Waking by removal leaves the sleeper alert.
                        self.apply_status(ally, StatusId::Alerted, 2);
                    }
                } else {
                    self.apply_status(ally, status, mag.min(i32::from(u8::MAX)) as u8);
                }
            }
            EffectKey::RemoveGear => self.gear = GearId::None,
            EffectKey::ClearBoosts => self.clear_boosts(),
            EffectKey::Overexert => self.overexerted = 2,
            EffectKey::Arm => {
                self.trait_memory = if mag > 0 {
                    TraitMemory::Armed
                } else {
                    TraitMemory::Idle
                };
            }
            EffectKey::Tally => {
                self.trait_memory = if mag <= 0 {
                    TraitMemory::Idle
                } else {
                    TraitMemory::Turns(mag.min(i32::from(u8::MAX)) as u8)
                };
            }
        }
    }

    /// Apply a self-scoped hook effect (turn start/end, rest): target map
    /// onto this creature, ally map onto the ally.
    pub fn apply_self_effect(&mut self, ally: &mut Option<&mut Creature>, eff: &Effect) {
        for (key, mag) in &eff.target {
            self.apply_entry(ally.as_deref_mut(), *key, *mag);
        }
        if let Some(ally_ref) = ally.as_deref_mut() {
            for (key, mag) in &eff.ally {
                ally_ref.apply_entry(None, *key, *mag);
            }
        }
    }

    // ------------------------------------------------------------------
    // Damage and stamina
    // ------------------------------------------------------------------

    /// Take damage, or heal on a negative magnitude. Clamps to [0, max] and
    /// marks the faint at zero.
    pub fn take_damage(&mut self, damage: i32) {
        if self.fainted || damage == 0 {
            return;
        }
        let next = i64::from(self.current_hp) - i64::from(damage);
        if next <= 0 {
            self.current_hp = 0;
            self.fainted = true;
        } else {
            self.current_hp = (next as u32).min(self.max_hp());
        }
    }

    /// Pay a move's stamina cost. Vigorized halves it, exhausted raises it
    /// by half (both floored). Overdrawing converts the shortfall to HP
    /// damage, empties stamina, and overexerts for the next turn.
    pub fn use_stamina(&mut self, cost: u32) {
        let mut cost = cost;
        if self.vigorized() {
            cost /= 2;
        }
        if self.exhausted() {
            cost = (cost as f64 * 1.5).floor() as u32;
        }

        if self.current_sta > cost {
            self.current_sta -= cost;
            return;
        }

        let mut damage = (cost - self.current_sta) as i32;
        if self.trait_id == TraitId::Resiliant {
            damage = damage.min(self.current_hp as i32 - 1).max(0);
        }
        self.take_damage(damage);
        self.current_sta = 0;

        if self.trait_id != TraitId::Tireless {
            self.overexerted = 2;
            if self.trait_id == TraitId::Vigorous {
                self.trait_memory = TraitMemory::Armed;
            }
        }
    }

    // ------------------------------------------------------------------
    // Turn boundaries
    // ------------------------------------------------------------------

    /// Start-of-turn gear and trait hooks.
    pub fn start_turn(&mut self, mut ally: Option<&mut Creature>) {
        if !self.seized() {
            if let Some(hook) = self.gear.hooks().on_turn_start {
                let eff = hook(self);
                self.apply_self_effect(&mut ally, &eff);
            }
        }
        if let Some(hook) = self.trait_id.hooks().on_turn_start {
            let eff = hook(self);
            self.apply_self_effect(&mut ally, &eff);
        }
    }

    /// End-of-turn bookkeeping: status ticks, hooks, overexertion decay,
    /// stamina regeneration, hold counters.
    pub fn end_turn(&mut self, mut ally: Option<&mut Creature>) {
        let held = self.statuses.clone();
        let mut kept = Vec::with_capacity(held.len());
        let mut woke = false;
        for inst in held {
            if let Some(amount) = status::tick_damage(inst.id, self.max_hp(), inst.remaining) {
                self.take_damage(amount);
            }
            if inst.remaining > 1 {
                kept.push(StatusInstance {
                    id: inst.id,
                    remaining: inst.remaining - 1,
                    existed: inst.existed + 1,
                });
            } else if inst.id == StatusId::Asleep {
                woke = true;
            }
        }
        self.statuses = kept;
        if woke {
            // Natural wake-up leaves a short alert window.
            self.apply_status(ally.as_deref_mut(), StatusId::Alerted, 1);
        }

        if !self.seized() {
            if let Some(hook) = self.gear.hooks().on_turn_end {
                let eff = hook(self);
                self.apply_self_effect(&mut ally, &eff);
            }
        }
        if let Some(hook) = self.trait_id.hooks().on_turn_end {
            let eff = hook(self);
            self.apply_self_effect(&mut ally, &eff);
        }

        if self.overexerted > 0 {
            self.overexerted -= 1;
        }

        let max_sta = self.max_sta();
        let denom = if self.resting { 5 } else { 20 };
        let regen = 1 + max_sta.div_ceil(denom);
        self.current_sta = (self.current_sta + regen).min(max_sta);
        self.resting = false;

        for slot in &mut self.moves {
            slot.hold = (slot.hold + 1).min(slot.id.data().hold as i8);
        }
    }

    // ------------------------------------------------------------------
    // Move resolution
    // ------------------------------------------------------------------

    /// Resolve a move to the record resolution actually uses: synergy
    /// variants swap in (or fall back) based on the ally's types, and
    /// Shuine's Horn rewrites toxic moves to water. Returns a transient
    /// patched copy; the static table is never touched.
    pub fn resolve_move(&self, ally: Option<&Creature>, id: MoveId) -> Move {
        let mut attack = *id.data();
        match attack.synergy {
            Synergy::Base { partner, variant } => {
                if ally.is_some_and(|a| a.has_type(partner)) {
                    attack = *variant.data();
                }
            }
            Synergy::Variant { base } => {
                let partner = match base.data().synergy {
                    Synergy::Base { partner, .. } => Some(partner),
                    _ => None,
                };
                let unlocked = matches!((partner, ally), (Some(p), Some(a)) if a.has_type(p));
                if !unlocked {
                    attack = *base.data();
                }
            }
            Synergy::None => {}
        }
        if attack.kind == Type::Toxic && self.gear == GearId::ShuinesHorn && !self.seized() {
            attack.kind = Type::Water;
        }
        attack
    }

    /// Mark a move as just used; its hold counter restarts from the bottom.
    pub fn note_move_used(&mut self, id: MoveId) {
        if let Some(slot) = self.moves.iter_mut().find(|m| m.id == id) {
            slot.hold = -1;
        }
    }
}
