//! Data-driven damage calculation tests.
//!
//! Uses `libtest-mimic` to generate one test per fixture case, so single
//! cases can be filtered with `cargo test crystal-bite` etc. Participants
//! are described by their set text and built through the importer.

use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;
use tem_engine::calc_damage;
use tem_engine::moves::MoveId;
use tem_engine::status::StatusId;
use tem_engine::team::from_importable;

#[derive(Deserialize)]
struct DamageFixture {
    #[allow(dead_code)]
    meta: Option<serde_json::Value>,
    cases: Vec<DamageTestCase>,
}

#[derive(Deserialize, Clone)]
struct DamageTestCase {
    id: String,
    attacker: String,
    defender: String,
    #[serde(rename = "move")]
    move_name: String,
    #[serde(default)]
    attacker_status: Option<String>,
    #[serde(default)]
    defender_status: Option<String>,
    expected: i32,
}

fn run_case(case: &DamageTestCase) -> Result<(), Failed> {
    let mut attacker =
        from_importable(&case.attacker).map_err(|e| format!("attacker: {e}"))?;
    let mut defender =
        from_importable(&case.defender).map_err(|e| format!("defender: {e}"))?;

    if let Some(status) = &case.attacker_status {
        let status = StatusId::from_name(status)
            .ok_or_else(|| format!("unknown attacker status {status}"))?;
        if !attacker.apply_status(None, status, 2) {
            return Err(format!("attacker refused status {status:?}").into());
        }
    }
    if let Some(status) = &case.defender_status {
        let status = StatusId::from_name(status)
            .ok_or_else(|| format!("unknown defender status {status}"))?;
        if !defender.apply_status(None, status, 2) {
            return Err(format!("defender refused status {status:?}").into());
        }
    }

    let move_id = MoveId::from_name(&case.move_name)
        .ok_or_else(|| format!("unknown move {}", case.move_name))?;
    let attack = attacker.resolve_move(None, move_id);

    let damage = calc_damage(&attacker, &attack, &defender, 1.0);
    if damage != case.expected {
        return Err(format!(
            "{}: got {damage}, expected {}",
            case.id, case.expected
        )
        .into());
    }
    Ok(())
}

fn main() {
    let args = Arguments::from_args();

    let fixture: DamageFixture = serde_json::from_str(include_str!("fixtures/damage.json"))
        .expect("damage.json should parse");

    let trials: Vec<Trial> = fixture
        .cases
        .into_iter()
        .map(|case| {
            let name = case.id.clone();
            Trial::test(name, move || run_case(&case))
        })
        .collect();

    libtest_mimic::run(&args, trials).exit();
}
