//! Action ordering: priority tiers, speed tie-breaks, and the speed arrow.

use crate::creature::Creature;
use crate::moves::MoveId;
use crate::stats::Stat;
use std::collections::BTreeMap;

/// One chosen action for a field slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Use a move against explicit field positions `(side, slot)`.
    Attack {
        move_id: MoveId,
        targets: Vec<(usize, usize)>,
    },
    /// Bring in the bench creature at this roster index.
    Switch { bench: usize },
    Rest,
    Run,
    UseItem,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub action: Action,
}

impl Choice {
    pub fn attack(move_id: MoveId, targets: &[(usize, usize)]) -> Choice {
        Choice {
            action: Action::Attack {
                move_id,
                targets: targets.to_vec(),
            },
        }
    }

    pub fn switch(bench: usize) -> Choice {
        Choice {
            action: Action::Switch { bench },
        }
    }
}

/// Scheduling key: coarse tier, then a speed tie-break held in quarter units
/// so the mid-tier attack scalings (0.5 / 1.0 / 1.5 / 1.75 × Speed) stay
/// exactly comparable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriorityKey {
    pub tier: i8,
    pub quarter_speed: u32,
}

/// Key for one action. `attack_priority` is the resolved move's declared
/// priority and only read for attacks.
pub fn priority_key(choice: &Choice, actor: &Creature, attack_priority: Option<u8>) -> PriorityKey {
    let speed = actor.live_stat(Stat::Spe);
    let flat = |tier: i8| PriorityKey {
        tier,
        quarter_speed: speed * 4,
    };
    match &choice.action {
        Action::Run => flat(4),
        Action::UseItem => flat(3),
        Action::Switch { .. } => flat(1),
        Action::Rest => flat(-2),
        Action::Attack { .. } => match attack_priority.unwrap_or(0) {
            5 => flat(2),
            0 => flat(-1),
            declared => PriorityKey {
                tier: 0,
                quarter_speed: speed
                    * match declared {
                        1 => 2, // 0.5x
                        2 => 4, // 1.0x
                        3 => 6, // 1.5x
                        _ => 7, // 1.75x
                    },
            },
        },
    }
}

/// A keyed, not-yet-ordered action.
#[derive(Clone, Copy, Debug)]
pub struct Pending {
    pub side: usize,
    pub slot: usize,
    pub key: PriorityKey,
}

/// Flatten pending actions into execution order, highest key first.
///
/// Within one key group the arrow holder's actions run first (left slot
/// before right); if the group spans both sides the arrow flips for future
/// ties.
pub fn order_actions(pending: Vec<Pending>, speed_arrow: &mut usize) -> Vec<(usize, usize)> {
    let mut groups: BTreeMap<PriorityKey, Vec<(usize, usize)>> = BTreeMap::new();
    for p in pending {
        groups.entry(p.key).or_default().push((p.side, p.slot));
    }

    let mut ordered = Vec::new();
    for (_, members) in groups.into_iter().rev() {
        let holder = *speed_arrow;
        let mut first: Vec<_> = members.iter().filter(|(s, _)| *s == holder).copied().collect();
        let mut second: Vec<_> = members.iter().filter(|(s, _)| *s != holder).copied().collect();
        first.sort();
        second.sort();
        if !first.is_empty() && !second.is_empty() {
            *speed_arrow = 1 - holder;
        }
        ordered.extend(first);
        ordered.extend(second);
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::CreatureConfig;
    use crate::species::SpeciesId;

    fn actor(speed_tv: u16) -> crate::creature::Creature {
        CreatureConfig::new(SpeciesId::Gyalis)
            .level(48)
            .tv(Stat::Spe, speed_tv)
            .build()
    }

    #[test]
    fn test_tier_ordering() {
        let tem = actor(0);
        let run = priority_key(&Choice { action: Action::Run }, &tem, None);
        let item = priority_key(&Choice { action: Action::UseItem }, &tem, None);
        let switch = priority_key(&Choice::switch(1), &tem, None);
        let rest = priority_key(&Choice { action: Action::Rest }, &tem, None);
        let top_attack = priority_key(&Choice::attack(MoveId::Block, &[]), &tem, Some(5));
        let mid_attack = priority_key(&Choice::attack(MoveId::CrystalBite, &[]), &tem, Some(2));
        let bottom_attack = priority_key(&Choice::attack(MoveId::Relax, &[]), &tem, Some(0));

        assert!(run > item);
        assert!(item > top_attack);
        assert!(top_attack > switch);
        assert!(switch > mid_attack);
        assert!(mid_attack > bottom_attack);
        assert!(bottom_attack > rest);
    }

    #[test]
    fn test_mid_tier_speed_scaling() {
        let tem = actor(0);
        let spe = tem.live_stat(Stat::Spe);
        let low = priority_key(&Choice::attack(MoveId::StoneWall, &[]), &tem, Some(1));
        let normal = priority_key(&Choice::attack(MoveId::CrystalBite, &[]), &tem, Some(2));
        let high = priority_key(&Choice::attack(MoveId::WindBlade, &[]), &tem, Some(3));
        let higher = priority_key(&Choice::attack(MoveId::HaitoUchi, &[]), &tem, Some(4));
        assert_eq!(low.quarter_speed, spe * 2);
        assert_eq!(normal.quarter_speed, spe * 4);
        assert_eq!(high.quarter_speed, spe * 6);
        assert_eq!(higher.quarter_speed, spe * 7);
        assert!(low < normal && normal < high && high < higher);
        // A priority-3 move on a slower creature beats a priority-2 move on
        // a faster one when the scaled speeds cross.
        let fast = actor(500);
        let fast_normal = priority_key(&Choice::attack(MoveId::CrystalBite, &[]), &fast, Some(2));
        assert!(fast.live_stat(Stat::Spe) > tem.live_stat(Stat::Spe));
        assert!(high > fast_normal);
    }

    #[test]
    fn test_arrow_breaks_ties_and_flips() {
        let key = PriorityKey {
            tier: 0,
            quarter_speed: 400,
        };
        let pending = vec![
            Pending { side: 0, slot: 1, key },
            Pending { side: 1, slot: 0, key },
            Pending { side: 0, slot: 0, key },
        ];
        let mut arrow = 1;
        let ordered = order_actions(pending, &mut arrow);
        // Holder (side 1) first, then side 0 left-to-right; arrow flips.
        assert_eq!(ordered, vec![(1, 0), (0, 0), (0, 1)]);
        assert_eq!(arrow, 0);
    }

    #[test]
    fn test_arrow_keeps_when_group_is_one_sided() {
        let key = PriorityKey {
            tier: 1,
            quarter_speed: 100,
        };
        let pending = vec![
            Pending { side: 0, slot: 0, key },
            Pending { side: 0, slot: 1, key },
        ];
        let mut arrow = 1;
        let ordered = order_actions(pending, &mut arrow);
        assert_eq!(ordered, vec![(0, 0), (0, 1)]);
        assert_eq!(arrow, 1);
    }

    #[test]
    fn test_groups_run_highest_first() {
        let fast = PriorityKey { tier: 0, quarter_speed: 800 };
        let slow = PriorityKey { tier: 0, quarter_speed: 200 };
        let switch = PriorityKey { tier: 1, quarter_speed: 200 };
        let pending = vec![
            Pending { side: 0, slot: 0, key: slow },
            Pending { side: 1, slot: 0, key: fast },
            Pending { side: 1, slot: 1, key: switch },
        ];
        let mut arrow = 0;
        let ordered = order_actions(pending, &mut arrow);
        assert_eq!(ordered, vec![(1, 1), (1, 0), (0, 0)]);
    }
}
