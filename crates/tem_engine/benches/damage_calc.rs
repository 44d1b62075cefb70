//! Benchmarks for the damage path and full-turn resolution.
//!
//! Run with:
//!   cargo bench --package tem_engine --bench damage_calc

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tem_engine::battle::Battle;
use tem_engine::calc_damage;
use tem_engine::creature::{Creature, CreatureConfig};
use tem_engine::moves::MoveId;
use tem_engine::schedule::Choice;
use tem_engine::species::SpeciesId;
use tem_engine::stats::Stat;
use tem_engine::traits::TraitId;

fn reference_attacker() -> Creature {
    CreatureConfig::new(SpeciesId::Gyalis)
        .level(48)
        .sv(Stat::SpA, 1)
        .tv(Stat::Hp, 350)
        .tv(Stat::Spe, 146)
        .tv(Stat::Atk, 498)
        .trait_id(TraitId::Resistant)
        .moves(&[MoveId::CrystalBite, MoveId::SharpStabs])
        .build()
}

fn reference_defender() -> Creature {
    CreatureConfig::new(SpeciesId::Kinu)
        .level(48)
        .tv(Stat::Hp, 500)
        .tv(Stat::Def, 455)
        .tv(Stat::SpA, 45)
        .trait_id(TraitId::Protector)
        .moves(&[MoveId::BetaBurst, MoveId::StoneWall])
        .build()
}

fn bench_damage_calc(c: &mut Criterion) {
    let attacker = reference_attacker();
    let defender = reference_defender();
    let attack = MoveId::CrystalBite.data();

    let mut group = c.benchmark_group("damage");
    group.throughput(Throughput::Elements(1));
    group.bench_function("calc_damage", |b| {
        b.iter(|| {
            black_box(calc_damage(
                black_box(&attacker),
                black_box(attack),
                black_box(&defender),
                1.0,
            ))
        })
    });
    group.bench_function("live_stat", |b| {
        b.iter(|| black_box(black_box(&attacker).live_stat(Stat::Atk)))
    });
    group.finish();
}

fn bench_turn_resolution(c: &mut Criterion) {
    let side0 = [Choice::attack(MoveId::SharpStabs, &[(1, 0)])];
    let side1 = [Choice::attack(MoveId::StoneWall, &[(1, 0)])];

    c.bench_function("resolve_turn", |b| {
        b.iter(|| {
            let mut battle = Battle::new([vec![reference_attacker()], vec![reference_defender()]]);
            battle
                .resolve_turn(black_box(&side0), black_box(&side1))
                .unwrap();
            black_box(battle.teams[1][0].current_hp)
        })
    });
}

criterion_group!(benches, bench_damage_calc, bench_turn_resolution);
criterion_main!(benches);
