//! Status conditions and their per-turn effects.
//!
//! The application/interaction rules themselves live on
//! [`crate::creature::Creature::apply_status`]; this module defines the
//! identifiers, the set mask used by hook conditions, the per-status
//! instance data, and the end-of-turn tick amounts.

use serde::Serialize;

/// Number of status conditions.
pub const STATUS_COUNT: usize = 16;

/// At most this many statuses may be held concurrently.
pub const MAX_STATUSES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum StatusId {
    Cold = 0,
    Frozen = 1,
    Asleep = 2,
    Trapped = 3,
    Doomed = 4,
    Seized = 5,
    Poisoned = 6,
    Burned = 7,
    Exhausted = 8,
    Vigorized = 9,
    Immune = 10,
    Regenerated = 11,
    Nullified = 12,
    Evading = 13,
    Alerted = 14,
    Exiled = 15,
}

static STATUSES_BY_NAME: phf::Map<&'static str, StatusId> = phf::phf_map! {
    "cold" => StatusId::Cold,
    "frozen" => StatusId::Frozen,
    "asleep" => StatusId::Asleep,
    "trapped" => StatusId::Trapped,
    "doomed" => StatusId::Doomed,
    "seized" => StatusId::Seized,
    "poisoned" => StatusId::Poisoned,
    "burned" => StatusId::Burned,
    "exhausted" => StatusId::Exhausted,
    "vigorized" => StatusId::Vigorized,
    "immune" => StatusId::Immune,
    "regenerated" => StatusId::Regenerated,
    "nullified" => StatusId::Nullified,
    "evading" => StatusId::Evading,
    "alerted" => StatusId::Alerted,
    "exiled" => StatusId::Exiled,
};

impl StatusId {
    pub const COUNT: usize = STATUS_COUNT;

    pub fn from_name(name: &str) -> Option<StatusId> {
        STATUSES_BY_NAME.get(name.to_lowercase().as_str()).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            StatusId::Cold => "cold",
            StatusId::Frozen => "frozen",
            StatusId::Asleep => "asleep",
            StatusId::Trapped => "trapped",
            StatusId::Doomed => "doomed",
            StatusId::Seized => "seized",
            StatusId::Poisoned => "poisoned",
            StatusId::Burned => "burned",
            StatusId::Exhausted => "exhausted",
            StatusId::Vigorized => "vigorized",
            StatusId::Immune => "immune",
            StatusId::Regenerated => "regenerated",
            StatusId::Nullified => "nullified",
            StatusId::Evading => "evading",
            StatusId::Alerted => "alerted",
            StatusId::Exiled => "exiled",
        }
    }

    #[inline]
    pub fn flag(self) -> StatusSet {
        StatusSet::from_bits_truncate(1 << (self as u16))
    }
}

bitflags::bitflags! {
    /// Set of status conditions, for membership queries in hook
    /// implementations and the interaction rules.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct StatusSet: u16 {
        const COLD        = 1 << 0;
        const FROZEN      = 1 << 1;
        const ASLEEP      = 1 << 2;
        const TRAPPED     = 1 << 3;
        const DOOMED      = 1 << 4;
        const SEIZED      = 1 << 5;
        const POISONED    = 1 << 6;
        const BURNED      = 1 << 7;
        const EXHAUSTED   = 1 << 8;
        const VIGORIZED   = 1 << 9;
        const IMMUNE      = 1 << 10;
        const REGENERATED = 1 << 11;
        const NULLIFIED   = 1 << 12;
        const EVADING     = 1 << 13;
        const ALERTED     = 1 << 14;
        const EXILED      = 1 << 15;
    }
}

/// One held status condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusInstance {
    pub id: StatusId,
    /// Turns left before the condition drops.
    pub remaining: u8,
    /// Turns this condition has already been held; eviction tie-break.
    pub existed: u8,
}

impl StatusInstance {
    pub fn new(id: StatusId, remaining: u8) -> Self {
        Self {
            id,
            remaining,
            existed: 0,
        }
    }
}

/// End-of-turn damage dealt by a held status. Positive damages, negative
/// heals, `None` for statuses with no tick effect.
///
/// Regenerated is computed with a positive sign here, exactly as the source
/// handles it through the damage path; whether it should heal instead is an
/// open product question, so the literal sign is preserved.
pub fn tick_damage(status: StatusId, max_hp: u32, remaining: u8) -> Option<i32> {
    match status {
        StatusId::Poisoned => Some(div_ceil(max_hp, 8) as i32),
        StatusId::Burned => Some(div_ceil(max_hp, 16) as i32),
        StatusId::Regenerated => Some((max_hp / 10) as i32),
        StatusId::Doomed if remaining == 1 => Some(max_hp as i32),
        _ => None,
    }
}

#[inline]
fn div_ceil(n: u32, d: u32) -> u32 {
    (n + d - 1) / d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lookup() {
        assert_eq!(StatusId::from_name("cold"), Some(StatusId::Cold));
        assert_eq!(StatusId::from_name("Vigorized"), Some(StatusId::Vigorized));
        assert_eq!(StatusId::from_name("unknown"), None);
    }

    #[test]
    fn test_flags_are_distinct() {
        let mut seen = StatusSet::empty();
        for i in 0..STATUS_COUNT as u16 {
            let flag = StatusSet::from_bits_truncate(1 << i);
            assert!(!seen.intersects(flag));
            seen |= flag;
        }
        assert_eq!(seen, StatusSet::all());
    }

    #[test]
    fn test_tick_amounts() {
        // poisoned: ceil(222 / 8) = 28
        assert_eq!(tick_damage(StatusId::Poisoned, 222, 3), Some(28));
        // burned: ceil(222 / 16) = 14
        assert_eq!(tick_damage(StatusId::Burned, 222, 3), Some(14));
        // regenerated: floor(222 / 10) = 22, sign preserved from source
        assert_eq!(tick_damage(StatusId::Regenerated, 222, 3), Some(22));
        // doomed only detonates on its final turn
        assert_eq!(tick_damage(StatusId::Doomed, 222, 2), None);
        assert_eq!(tick_damage(StatusId::Doomed, 222, 1), Some(222));
        assert_eq!(tick_damage(StatusId::Cold, 222, 3), None);
    }
}
