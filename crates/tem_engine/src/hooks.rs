//! Lifecycle hook types shared by traits and gear.
//!
//! Trait and gear behavior is expressed as pure functions from (lifecycle
//! event, participants) to an [`Effect`], looked up in static registries and
//! invoked at fixed points in resolution. Hooks on the hit path may instead
//! terminate resolution for their target with an explicit outcome variant;
//! there is no exception-style control flow anywhere in the engine.

use crate::creature::Creature;
use crate::effect::Effect;
use crate::moves::Move;
use crate::status::StatusId;

/// Outcome of an attack-path hook.
#[derive(Clone, Debug, PartialEq)]
pub enum HookOutcome {
    /// Normal case: contribute an effect (possibly the neutral one).
    Continue(Effect),
    /// The attack is wholly negated for this target only.
    Unaffected,
    /// This target is swapped for its ally. At most one redirect may occur
    /// per target; later attempts are ignored by the resolution loop.
    RedirectToAlly,
}

impl HookOutcome {
    pub fn none() -> HookOutcome {
        HookOutcome::Continue(Effect::none())
    }
}

/// Fired when the holder switches in. `ally` is the holder's fieldmate.
pub type OnSwitchIn = fn(target: &Creature, ally: Option<&Creature>) -> Effect;

/// Fired on the holder when its ally switches in; `ally` is the incoming
/// creature.
pub type OnAllySwitchIn = fn(target: &Creature, ally: &Creature) -> Effect;

/// Fired on every active holder at the start of a turn.
pub type OnTurnStart = fn(target: &Creature) -> Effect;

/// Fired when the holder attacks, once per resolved target. `ally` is the
/// attacker's fieldmate (identity comparisons use it, e.g. ally-scoped
/// behavior differs from enemy-scoped).
pub type OnAttack = fn(
    attacker: &Creature,
    ally: Option<&Creature>,
    target: &Creature,
    attack: &Move,
) -> HookOutcome;

/// Fired on the holder when its ally attacks.
pub type OnAllyAttack = fn(attacker: &Creature, target: &Creature, attack: &Move) -> HookOutcome;

/// Fired on the holder when it is about to be hit. `ally` is the holder's
/// fieldmate (redirect checks need it).
pub type OnHit = fn(
    attacker: &Creature,
    target: &Creature,
    ally: Option<&Creature>,
    attack: &Move,
) -> HookOutcome;

/// Fired on the holder when its ally is about to be hit.
pub type OnAllyHit = fn(attacker: &Creature, target: &Creature, attack: &Move) -> HookOutcome;

/// Fired on the holder after damage against it is computed, before it lands.
pub type OnTakeDamage =
    fn(attacker: &Creature, target: &Creature, attack: &Move, damage: i32) -> Effect;

/// Fired on the holder after damage against its ally is computed.
pub type OnAllyDamage =
    fn(attacker: &Creature, target: &Creature, ally: &Creature, attack: &Move, damage: i32)
        -> Effect;

/// Fired on the holder when a status is about to be applied to it. The
/// returned effect's entries for the incoming status gate the application
/// (see [`crate::effect::StatusGate`]).
pub type OnStatus = fn(target: &Creature, status: StatusId, turns: u8) -> Effect;

/// Fired on the holder when a status is about to be applied to its ally.
pub type OnAllyStatus =
    fn(target: &Creature, ally: &Creature, status: StatusId, turns: u8) -> Effect;

/// Fired on the holder when it takes the rest action.
pub type OnRest = fn(target: &Creature) -> Effect;

/// Fired on the attacker's side after its attack has fully resolved, once
/// per target.
pub type AfterAttack = fn(attacker: &Creature, target: &Creature, attack: &Move) -> Effect;

/// Fired on the defender's side after a damaging hit has landed on it.
pub type AfterHit = fn(attacker: &Creature, target: &Creature, attack: &Move) -> Effect;

/// Fired on every active holder at the end of a turn.
pub type OnTurnEnd = fn(target: &Creature) -> Effect;

/// Hook table for one trait or one piece of gear. Absent hooks default to
/// the neutral effect.
#[derive(Clone, Copy, Default)]
pub struct HookTable {
    pub on_switch_in: Option<OnSwitchIn>,
    pub on_ally_switch_in: Option<OnAllySwitchIn>,
    pub on_turn_start: Option<OnTurnStart>,
    pub on_attack: Option<OnAttack>,
    pub on_ally_attack: Option<OnAllyAttack>,
    pub on_hit: Option<OnHit>,
    pub on_ally_hit: Option<OnAllyHit>,
    pub on_take_damage: Option<OnTakeDamage>,
    pub on_ally_damage: Option<OnAllyDamage>,
    pub on_status: Option<OnStatus>,
    pub on_ally_status: Option<OnAllyStatus>,
    pub on_rest: Option<OnRest>,
    pub after_attack: Option<AfterAttack>,
    pub after_hit: Option<AfterHit>,
    pub on_turn_end: Option<OnTurnEnd>,
}

impl HookTable {
    /// Empty table (no-op behavior).
    pub const NONE: Self = Self {
        on_switch_in: None,
        on_ally_switch_in: None,
        on_turn_start: None,
        on_attack: None,
        on_ally_attack: None,
        on_hit: None,
        on_ally_hit: None,
        on_take_damage: None,
        on_ally_damage: None,
        on_status: None,
        on_ally_status: None,
        on_rest: None,
        after_attack: None,
        after_hit: None,
        on_turn_end: None,
    };
}
