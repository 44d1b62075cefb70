//! Stat identifiers, the stat-computation formula, and stage scaling.

use serde::Serialize;

/// Number of stats.
pub const STAT_COUNT: usize = 7;

/// A creature stat. HP and Sta are tracked as current-value counters and are
/// never stage-scaled; the other five are derived on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Stat {
    Hp = 0,
    Sta = 1,
    Spe = 2,
    Atk = 3,
    Def = 4,
    SpA = 5,
    SpD = 6,
}

pub const ALL_STATS: [Stat; STAT_COUNT] = [
    Stat::Hp,
    Stat::Sta,
    Stat::Spe,
    Stat::Atk,
    Stat::Def,
    Stat::SpA,
    Stat::SpD,
];

/// Stats that accept stage boosts.
pub const BOOSTABLE_STATS: [Stat; 5] = [Stat::Spe, Stat::Atk, Stat::Def, Stat::SpA, Stat::SpD];

impl Stat {
    pub fn from_name(name: &str) -> Option<Stat> {
        match name {
            "HP" | "hp" => Some(Stat::Hp),
            "Sta" | "sta" => Some(Stat::Sta),
            "Spe" | "spe" => Some(Stat::Spe),
            "Atk" | "atk" => Some(Stat::Atk),
            "Def" | "def" => Some(Stat::Def),
            "SpA" | "spa" => Some(Stat::SpA),
            "SpD" | "spd" => Some(Stat::SpD),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Sta => "Sta",
            Stat::Spe => "Spe",
            Stat::Atk => "Atk",
            Stat::Def => "Def",
            Stat::SpA => "SpA",
            Stat::SpD => "SpD",
        }
    }

    pub fn is_boostable(self) -> bool {
        !matches!(self, Stat::Hp | Stat::Sta)
    }
}

/// Per-stat formula constants `(c1, c2, c3)`, indexed by `Stat as usize`.
pub const STAT_CONSTS: [(u32, u32, u32); STAT_COUNT] = [
    (80, 20_000, 15),  // HP
    (200, 25_000, 20), // Sta
    (100, 25_000, 10), // Spe
    (100, 25_000, 10), // Atk
    (100, 25_000, 10), // Def
    (100, 25_000, 10), // SpA
    (100, 25_000, 10), // SpD
];

/// Lowest/highest stage a boost total may reach.
pub const MIN_STAGE: i8 = -5;
pub const MAX_STAGE: i8 = 5;

/// Compute a stat maximum from base stat, single values (1-50), training
/// values (0-500), and level.
///
/// The accumulate-then-floor-divide order is load-bearing: totals are
/// balance-sensitive and verified to the unit against reference sets.
pub fn compute_stat(stat: Stat, base: u32, sv: u32, tv: u32, level: u32) -> u32 {
    let (c1, c2, c3) = STAT_CONSTS[stat as usize];
    let val1 = ((1.5 * base as f64 + sv as f64 + tv as f64 / 5.0) * level as f64
        / c1 as f64)
        .floor();
    let val2 = (sv * base * level) / c2;
    let konst = c3 + if stat == Stat::Hp { level } else { 0 };
    (val1 as u32) + val2 + konst
}

/// Scale a stat maximum by a boost stage.
///
/// Positive stage `n` scales by `(2+n)/2`; negative by `2/(2-n)`. Both floor
/// and clamp to a minimum of 1.
pub fn apply_stage(stat: u32, stage: i8) -> u32 {
    let stage = stage.clamp(MIN_STAGE, MAX_STAGE) as i64;
    let scaled = if stage > 0 {
        stat as i64 * (2 + stage) / 2
    } else if stage < 0 {
        2 * stat as i64 / (2 - stage)
    } else {
        stat as i64
    };
    scaled.max(1) as u32
}

/// Burn scaling applied to live Atk/SpA, after stage scaling.
pub fn apply_burn(stat: u32) -> u32 {
    ((stat as f64 * 0.7).floor() as u32).max(1)
}
