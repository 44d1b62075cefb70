//! Full-turn behavior tests: scheduling, switching, the hit cascade,
//! end-of-turn upkeep, fainting and win detection.

use tem_engine::battle::Battle;
use tem_engine::creature::{Creature, CreatureConfig};
use tem_engine::gear::GearId;
use tem_engine::moves::MoveId;
use tem_engine::schedule::{Action, Choice};
use tem_engine::species::SpeciesId;
use tem_engine::stats::Stat;
use tem_engine::status::{StatusId, StatusInstance};
use tem_engine::traits::TraitId;
use tem_engine::EngineError;

fn gyalis() -> Creature {
    CreatureConfig::new(SpeciesId::Gyalis)
        .level(48)
        .sv(Stat::SpA, 1)
        .tv(Stat::Hp, 350)
        .tv(Stat::Sta, 4)
        .tv(Stat::Spe, 146)
        .tv(Stat::Atk, 498)
        .tv(Stat::Def, 1)
        .tv(Stat::SpD, 1)
        .trait_id(TraitId::None)
        .moves(&[
            MoveId::HeatUp,
            MoveId::CrystalBite,
            MoveId::HaitoUchi,
            MoveId::SharpStabs,
        ])
        .build()
}

fn kinu() -> Creature {
    CreatureConfig::new(SpeciesId::Kinu)
        .level(48)
        .tv(Stat::Hp, 500)
        .tv(Stat::Def, 455)
        .tv(Stat::SpA, 45)
        .trait_id(TraitId::None)
        .moves(&[
            MoveId::BetaBurst,
            MoveId::Revitalize,
            MoveId::StoneWall,
            MoveId::TurboChoreography,
        ])
        .build()
}

fn pigepic() -> Creature {
    CreatureConfig::new(SpeciesId::Pigepic)
        .level(48)
        .trait_id(TraitId::None)
        .moves(&[MoveId::Tornado, MoveId::HookKick])
        .build()
}

fn volarend() -> Creature {
    CreatureConfig::new(SpeciesId::Volarend)
        .level(48)
        .tv(Stat::Hp, 408)
        .tv(Stat::Sta, 90)
        .tv(Stat::Spe, 500)
        .tv(Stat::Def, 1)
        .tv(Stat::SpA, 1)
        .trait_id(TraitId::None)
        .moves(&[
            MoveId::WindBlade,
            MoveId::HyperkineticStrike,
            MoveId::Blizzard,
            MoveId::ChainLightning,
        ])
        .build()
}

#[test]
fn test_singles_exchange() {
    let mut battle = Battle::new([vec![gyalis()], vec![kinu()]]);
    let kinu_hp = battle.teams[1][0].current_hp;
    let gyalis_hp = battle.teams[0][0].current_hp;

    battle
        .resolve_turn(
            &[Choice::attack(MoveId::CrystalBite, &[(1, 0)])],
            &[Choice::attack(MoveId::BetaBurst, &[(0, 0)])],
        )
        .expect("turn should resolve");

    // Both hits landed at their reference magnitudes.
    assert_eq!(battle.teams[1][0].current_hp, kinu_hp - 149);
    assert_eq!(battle.teams[0][0].current_hp, gyalis_hp - 51);
    assert!(battle.winner.is_none());

    // Stamina was paid and partially regenerated at end of turn.
    let gyalis = &battle.teams[0][0];
    assert_eq!(gyalis.current_sta, 52 - 26 + 4);
    // The used move's hold counter restarted this turn.
    let bite = gyalis
        .moves
        .iter()
        .find(|m| m.id == MoveId::CrystalBite)
        .unwrap();
    assert_eq!(bite.hold, 0);
}

#[test]
fn test_resolution_is_deterministic() {
    let build = || {
        Battle::new([
            vec![gyalis(), pigepic()],
            vec![kinu(), volarend()],
        ])
    };
    let side0 = [
        Choice::attack(MoveId::CrystalBite, &[(1, 0)]),
        Choice::attack(MoveId::Tornado, &[(1, 1)]),
    ];
    let side1 = [
        Choice::attack(MoveId::BetaBurst, &[(0, 0)]),
        Choice::attack(MoveId::Blizzard, &[(0, 1)]),
    ];

    let mut first = build();
    let mut second = build();
    first.resolve_turn(&side0, &side1).unwrap();
    second.resolve_turn(&side0, &side1).unwrap();

    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);

    // And across a second turn as well.
    first.resolve_turn(&side0, &side1).unwrap();
    second.resolve_turn(&side0, &side1).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_win_detection_ends_turn_early() {
    let mut battle = Battle::new([vec![gyalis()], vec![kinu()]]);
    battle.teams[1][0].current_hp = 10;

    battle
        .resolve_turn(
            &[Choice::attack(MoveId::CrystalBite, &[(1, 0)])],
            &[Choice::attack(MoveId::BetaBurst, &[(0, 0)])],
        )
        .unwrap();

    assert_eq!(battle.winner, Some(0));
    assert!(battle.teams[1][0].fainted);
    assert!(battle.active_creature(1, 0).is_none());
    // The loser never got to act.
    assert_eq!(battle.teams[0][0].current_hp, battle.teams[0][0].max_hp());

    // Further turns are no-ops once terminal.
    let before = serde_json::to_string(&battle).unwrap();
    battle
        .resolve_turn(&[Choice::attack(MoveId::CrystalBite, &[(1, 0)])], &[])
        .unwrap();
    assert_eq!(serde_json::to_string(&battle).unwrap(), before);
}

#[test]
fn test_unsupported_actions_error() {
    let mut battle = Battle::new([vec![gyalis()], vec![kinu()]]);
    let err = battle.resolve_turn(
        &[Choice { action: Action::Rest }],
        &[Choice::attack(MoveId::BetaBurst, &[(0, 0)])],
    );
    assert_eq!(err, Err(EngineError::UnsupportedAction("rest")));

    let err = battle.resolve_turn(&[Choice { action: Action::Run }], &[]);
    assert_eq!(err, Err(EngineError::UnsupportedAction("run")));
}

#[test]
fn test_switch_updates_field_and_fires_hooks() {
    let mut bench = pigepic();
    bench.trait_id = TraitId::Demoralize;
    let mut battle = Battle::new([vec![gyalis(), kinu(), bench], vec![kinu(), volarend()]]);

    let spe_before: Vec<i8> = (0..2)
        .map(|m| battle.teams[1][m].boosts[Stat::Spe as usize])
        .collect();

    battle
        .resolve_turn(
            &[
                Choice::switch(2),
                Choice::attack(MoveId::BetaBurst, &[(1, 0)]),
            ],
            &[
                Choice::attack(MoveId::StoneWall, &[(1, 0)]),
                Choice::attack(MoveId::WindBlade, &[(0, 1)]),
            ],
        )
        .unwrap();

    // The bench creature took the field and allies were relinked.
    assert_eq!(battle.active[0][0], Some(2));
    assert_eq!(battle.teams[0][2].ally, Some(1));
    assert_eq!(battle.teams[0][1].ally, Some(2));
    assert_eq!(battle.teams[0][0].ally, None);

    // Demoralize dropped every opposing speed stage on arrival.
    for (member, before) in spe_before.into_iter().enumerate() {
        assert_eq!(
            battle.teams[1][member].boosts[Stat::Spe as usize],
            before - 1
        );
    }
}

#[test]
fn test_trapped_creatures_cannot_switch() {
    let mut trapped = gyalis();
    trapped
        .statuses
        .push(StatusInstance::new(StatusId::Trapped, 3));
    let mut battle = Battle::new([vec![trapped, kinu()], vec![kinu()]]);

    battle
        .resolve_turn(&[Choice::switch(1)], &[Choice::attack(MoveId::BetaBurst, &[(0, 0)])])
        .unwrap();

    // Refused: the original creature is still on the field.
    assert_eq!(battle.active[0][0], Some(0));
}

#[test]
fn test_clockwise_chain_attenuates_and_wraps() {
    let attacker = volarend();
    let teams = [
        vec![attacker, pigepic()],
        vec![pigepic(), pigepic()],
    ];
    let mut battle = Battle::new(teams);
    let hp: Vec<u32> = (0..2).map(|m| battle.teams[1][m].current_hp).collect();
    let own_hp = battle.teams[0][0].current_hp;

    battle
        .resolve_turn(
            &[
                Choice::attack(MoveId::ChainLightning, &[(1, 0)]),
                Choice::attack(MoveId::HookKick, &[(1, 0)]),
            ],
            &[
                Choice::attack(MoveId::HookKick, &[(0, 1)]),
                Choice::attack(MoveId::HookKick, &[(0, 1)]),
            ],
        )
        .unwrap();

    let first_hit = hp[0] - battle.teams[1][0].current_hp;
    let second_hit = hp[1] - battle.teams[1][1].current_hp;
    assert!(first_hit > 0 && second_hit > 0);
    // Identical defenders, so the 0.7 falloff shows directly.
    assert!(second_hit < first_hit);
    // The third link wraps back to the attacker's own side.
    assert!(battle.teams[0][0].current_hp < own_hp);
}

#[test]
fn test_overexertion_blocks_next_action() {
    let mut tired = gyalis();
    tired.current_sta = 5;
    let mut battle = Battle::new([vec![tired], vec![kinu()]]);

    battle
        .resolve_turn(
            &[Choice::attack(MoveId::CrystalBite, &[(1, 0)])],
            &[Choice::attack(MoveId::StoneWall, &[(1, 0)])],
        )
        .unwrap();

    // The overdraw hurt the attacker and left it winded.
    assert_eq!(battle.teams[0][0].overexerted, 1);
    let kinu_hp_after_turn1 = battle.teams[1][0].current_hp;
    assert!(kinu_hp_after_turn1 < battle.teams[1][0].max_hp());

    battle
        .resolve_turn(
            &[Choice::attack(MoveId::CrystalBite, &[(1, 0)])],
            &[Choice::attack(MoveId::StoneWall, &[(1, 0)])],
        )
        .unwrap();

    // No action happened while winded.
    assert_eq!(battle.teams[1][0].current_hp, kinu_hp_after_turn1);
    assert_eq!(battle.teams[0][0].overexerted, 0);
}

#[test]
fn test_redirect_swaps_target_for_ally() {
    let mut decoy = kinu();
    decoy.trait_id = TraitId::PuppetMaster;
    decoy.current_hp = 40; // under the 40% threshold
    let mut battle = Battle::new([vec![gyalis(), pigepic()], vec![decoy, pigepic()]]);
    let decoy_hp = battle.teams[1][0].current_hp;
    let ally_hp = battle.teams[1][1].current_hp;

    battle
        .resolve_turn(
            &[
                Choice::attack(MoveId::CrystalBite, &[(1, 0)]),
                Choice::attack(MoveId::HookKick, &[(1, 1)]),
            ],
            &[
                Choice::attack(MoveId::StoneWall, &[(1, 0)]),
                Choice::attack(MoveId::HookKick, &[(0, 0)]),
            ],
        )
        .unwrap();

    // The puppet master was never hit by the big attack; its ally ate both
    // the redirect and its own chosen attacker's hit.
    assert_eq!(battle.teams[1][0].current_hp, decoy_hp);
    assert!(battle.teams[1][1].current_hp < ally_hp);
}

#[test]
fn test_guardian_ally_vetoes_status() {
    let mut warden = pigepic();
    warden.trait_id = TraitId::Guardian;
    let mut battle = Battle::new([vec![volarend(), gyalis()], vec![kinu(), warden]]);
    let kinu_hp = battle.teams[1][0].current_hp;

    battle
        .resolve_turn(
            &[
                Choice::attack(MoveId::ToxicPlume, &[(1, 0)]),
                Choice::attack(MoveId::HaitoUchi, &[(1, 1)]),
            ],
            &[
                Choice::attack(MoveId::StoneWall, &[(0, 0)]),
                Choice::attack(MoveId::HookKick, &[(0, 0)]),
            ],
        )
        .unwrap();

    // Damage landed but the poison rider was vetoed by the ally's trait.
    assert!(battle.teams[1][0].current_hp < kinu_hp);
    assert!(!battle.teams[1][0].poisoned());
}

#[test]
fn test_retargeting_around_fainted_slot() {
    let mut fodder = pigepic();
    fodder.current_hp = 1;
    let mut battle = Battle::new([vec![gyalis(), volarend()], vec![fodder, kinu()]]);
    let kinu_hp = battle.teams[1][1].current_hp;

    // Both attackers aim at slot 0; the faster one KOs it and the second
    // reroutes to the surviving opposing slot.
    battle
        .resolve_turn(
            &[
                Choice::attack(MoveId::CrystalBite, &[(1, 0)]),
                Choice::attack(MoveId::WindBlade, &[(1, 0)]),
            ],
            &[
                Choice::attack(MoveId::StoneWall, &[(1, 1)]),
                Choice::attack(MoveId::BetaBurst, &[(0, 0)]),
            ],
        )
        .unwrap();

    assert!(battle.teams[1][0].fainted);
    assert!(battle.active_creature(1, 0).is_none());
    assert!(battle.teams[1][1].current_hp < kinu_hp);
}

#[test]
fn test_replace_fainted_backfills_slot() {
    let mut fodder = pigepic();
    fodder.current_hp = 1;
    let mut battle = Battle::new([vec![gyalis()], vec![fodder, kinu(), volarend()]]);

    battle
        .resolve_turn(&[Choice::attack(MoveId::CrystalBite, &[(1, 0)])], &[])
        .unwrap();
    assert!(battle.active_creature(1, 0).is_none());
    assert!(battle.winner.is_none());

    // The caller chooses the replacement; the engine only validates it.
    assert!(!battle.replace_fainted(1, 0, 0)); // fainted member refused
    assert!(!battle.replace_fainted(1, 0, 1)); // already on the field
    assert!(battle.replace_fainted(1, 0, 2));
    assert_eq!(battle.active[1][0], Some(2));
    assert_eq!(battle.teams[1][2].ally, Some(1));

    let gyalis_hp = battle.teams[0][0].current_hp;
    battle
        .resolve_turn(&[], &[Choice::attack(MoveId::WindBlade, &[(0, 0)])])
        .unwrap();
    assert!(battle.teams[0][0].current_hp < gyalis_hp);
}

#[test]
fn test_status_move_applies_boost_not_damage() {
    let mut battle = Battle::new([vec![gyalis()], vec![kinu()]]);
    let gyalis_hp = battle.teams[0][0].current_hp;

    battle
        .resolve_turn(
            &[Choice::attack(MoveId::HaitoUchi, &[(1, 0)])],
            &[Choice::attack(MoveId::StoneWall, &[(1, 0)])],
        )
        .unwrap();

    // Stone Wall raised its target's Defense and dealt nothing.
    assert_eq!(battle.teams[1][0].boosts[Stat::Def as usize], 2);
    assert_eq!(battle.teams[0][0].current_hp, gyalis_hp);
}

#[test]
fn test_defender_gear_folds_into_the_modifier() {
    let mut shielded = kinu();
    shielded.gear = GearId::RockShield;
    let mut battle = Battle::new([vec![gyalis()], vec![shielded]]);
    let hp = battle.teams[1][0].current_hp;

    battle
        .resolve_turn(
            &[Choice::attack(MoveId::CrystalBite, &[(1, 0)])],
            &[Choice::attack(MoveId::StoneWall, &[(1, 0)])],
        )
        .unwrap();

    // 149 shrinks to 120 under the 0.8 crystal screen.
    assert_eq!(hp - battle.teams[1][0].current_hp, 120);
}

#[test]
fn test_seizure_suppresses_gear_hooks() {
    let mut shielded = kinu();
    shielded.gear = GearId::RockShield;
    shielded
        .statuses
        .push(StatusInstance::new(StatusId::Seized, 3));
    let mut battle = Battle::new([vec![gyalis()], vec![shielded]]);
    let hp = battle.teams[1][0].current_hp;

    battle
        .resolve_turn(
            &[Choice::attack(MoveId::CrystalBite, &[(1, 0)])],
            &[Choice::attack(MoveId::StoneWall, &[(1, 0)])],
        )
        .unwrap();

    // The screen never fires while its holder is seized.
    assert_eq!(hp - battle.teams[1][0].current_hp, 149);
}

#[test]
fn test_friendship_negates_ally_hits() {
    let mut friend = pigepic();
    friend.trait_id = TraitId::Friendship;
    let mut battle = Battle::new([vec![gyalis(), friend], vec![kinu(), kinu()]]);
    let friend_hp = battle.teams[0][1].current_hp;
    let enemy_hp = battle.teams[1][0].current_hp;

    battle
        .resolve_turn(
            &[
                Choice::attack(MoveId::HookKick, &[(0, 1)]),
                Choice::attack(MoveId::HookKick, &[(1, 0)]),
            ],
            &[
                Choice::attack(MoveId::StoneWall, &[(1, 0)]),
                Choice::attack(MoveId::StoneWall, &[(1, 1)]),
            ],
        )
        .unwrap();

    // The ally's hit was wholly negated; the same move still lands on foes.
    assert_eq!(battle.teams[0][1].current_hp, friend_hp);
    assert!(battle.teams[1][0].current_hp < enemy_hp);
}

#[test]
fn test_wake_up_alerts_the_sleeper() {
    let mut sleeper = gyalis();
    sleeper
        .statuses
        .push(StatusInstance::new(StatusId::Asleep, 4));
    let mut battle = Battle::new([vec![sleeper, kinu()], vec![volarend()]]);

    // Note: Wake Up targets the user's own side.
    battle
        .resolve_turn(
            &[
                Choice::attack(MoveId::HaitoUchi, &[(1, 0)]),
                Choice::attack(MoveId::WakeUp, &[(0, 0)]),
            ],
            &[Choice::attack(MoveId::StoneWall, &[(0, 1)])],
        )
        .unwrap();

    let woken = &battle.teams[0][0];
    assert!(!woken.asleep());
    assert!(woken.alerted());
}
