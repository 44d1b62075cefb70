//! Set-text import and export.
//!
//! The format, one block per creature:
//!
//! ```text
//! Top Percentage (Gyalis) @ Ice Cube
//! Trait: Resistant
//! Level: 48
//! TVs: 350 HP / 146 Spe / 498 Atk
//! SVs: 1 SpA
//! - Heat Up
//! - Crystal Bite
//! ```
//!
//! Nicknames and `Luma:` lines are accepted and discarded. Unknown trait or
//! gear names degrade to the no-op entries; unknown species or moves fail
//! the whole block.

use crate::creature::{Creature, CreatureConfig, DEFAULT_LEVEL, DEFAULT_SV};
use crate::error::EngineError;
use crate::moves::MoveId;
use crate::species::SpeciesId;
use crate::stats::{Stat, ALL_STATS};

/// Parse one creature from its set text.
pub fn from_importable(text: &str) -> Result<Creature, EngineError> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty());

    let header = lines
        .next()
        .ok_or_else(|| EngineError::MalformedSet("empty set".to_string()))?;

    // Header: `nickname (Species) @ gear` with nickname and gear optional.
    let (name_part, gear_name) = match header.split_once('@') {
        Some((name, gear)) => (name.trim(), gear.trim()),
        None => (header, ""),
    };
    let species_name = match name_part.split_once('(') {
        Some((_, rest)) => rest
            .split_once(')')
            .map(|(inner, _)| inner.trim())
            .ok_or_else(|| EngineError::MalformedSet(format!("unclosed species: {name_part}")))?,
        None => name_part.trim(),
    };
    let species = SpeciesId::from_name(species_name)
        .ok_or_else(|| EngineError::UnknownSpecies(species_name.to_string()))?;

    let mut config = CreatureConfig::new(species);
    let mut moves = Vec::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }
        if let Some(move_name) = line.strip_prefix('-') {
            let move_name = move_name.trim();
            let id = MoveId::from_name(move_name)
                .ok_or_else(|| EngineError::UnknownMove(move_name.to_string()))?;
            moves.push(id);
        } else if let Some(trait_name) = line.strip_prefix("Trait:") {
            config = config.trait_named(trait_name.trim());
        } else if let Some(level) = line.strip_prefix("Level:") {
            let level = level
                .trim()
                .parse::<u8>()
                .map_err(|_| EngineError::MalformedSet(format!("bad level: {line}")))?;
            config = config.level(level);
        } else if line.starts_with("Luma:") {
            // cosmetic only
        } else if let Some(spread) = line.strip_prefix("TVs:") {
            for (stat, value) in parse_spread(spread)? {
                config = config.tv(stat, value);
            }
        } else if let Some(spread) = line.strip_prefix("SVs:") {
            for (stat, value) in parse_spread(spread)? {
                config = config.sv(stat, value);
            }
        } else {
            return Err(EngineError::MalformedSet(format!("unrecognized line: {line}")));
        }
    }

    config = config.gear_named(gear_name);
    config = config.moves(&moves);
    Ok(config.build())
}

/// `500 Spe / 498 Atk` style stat spreads.
fn parse_spread(text: &str) -> Result<Vec<(Stat, u16)>, EngineError> {
    let mut out = Vec::new();
    for part in text.split('/') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (value, stat) = part
            .split_once(' ')
            .ok_or_else(|| EngineError::MalformedSet(format!("bad spread entry: {part}")))?;
        let value = value
            .trim()
            .parse::<u16>()
            .map_err(|_| EngineError::MalformedSet(format!("bad spread value: {part}")))?;
        let stat = Stat::from_name(stat.trim())
            .ok_or_else(|| EngineError::MalformedSet(format!("bad spread stat: {part}")))?;
        out.push((stat, value));
    }
    Ok(out)
}

/// Render a creature back to its set text.
pub fn export(creature: &Creature) -> String {
    let mut out = String::new();
    let species = creature.species.data().name;
    if creature.gear == crate::gear::GearId::None {
        out.push_str(&format!("{species}\n"));
    } else {
        out.push_str(&format!("{species} @ {}\n", creature.gear.name()));
    }
    out.push_str(&format!("Trait: {}\n", creature.trait_id.name()));
    if creature.level != DEFAULT_LEVEL {
        out.push_str(&format!("Level: {}\n", creature.level));
    }

    let tvs = ALL_STATS
        .iter()
        .filter(|s| creature.tvs[**s as usize] != 0)
        .map(|s| format!("{} {}", creature.tvs[*s as usize], s.name()))
        .collect::<Vec<_>>()
        .join(" / ");
    if !tvs.is_empty() {
        out.push_str(&format!("TVs: {tvs}\n"));
    }
    let svs = ALL_STATS
        .iter()
        .filter(|s| creature.svs[**s as usize] != DEFAULT_SV)
        .map(|s| format!("{} {}", creature.svs[*s as usize], s.name()))
        .collect::<Vec<_>>()
        .join(" / ");
    if !svs.is_empty() {
        out.push_str(&format!("SVs: {svs}\n"));
    }

    for slot in &creature.moves {
        out.push_str(&format!("- {}\n", slot.id.data().name));
    }
    out
}

/// Parse a whole roster: blocks separated by blank lines. Blocks that fail
/// to parse are logged and skipped so one typo does not drop the team.
pub fn gen_creatures(input: &str) -> Vec<Creature> {
    let mut out = Vec::new();
    let mut block = String::new();
    let mut flush = |block: &mut String, out: &mut Vec<Creature>| {
        if block.trim().is_empty() {
            block.clear();
            return;
        }
        match from_importable(block) {
            Ok(creature) => out.push(creature),
            Err(err) => {
                tracing::error!(%err, set = block.as_str(), "unable to parse set");
            }
        }
        block.clear();
    };
    for line in input.lines() {
        if line.trim().is_empty() {
            flush(&mut block, &mut out);
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    flush(&mut block, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::GearId;
    use crate::traits::TraitId;

    const GYALIS_IMPORT: &str = "Gyalis @ Ice Cube\n\
Trait: Resistant\n\
Level: 48\n\
TVs: 350 HP / 4 Sta / 146 Spe / 498 Atk / 1 Def / 1 SpD\n\
SVs: 1 SpA\n\
- Heat Up\n\
- Crystal Bite\n\
- Haito Uchi\n\
- Sharp Stabs\n";

    const KINU_IMPORT: &str = " Kinu @ Grease\n\
Trait: Protector\n\
Level: 48\n\
TVs: 500 HP / 455 Def / 45 SpA\n\
- Beta Burst\n\
- Revitalize\n\
- Stone Wall\n\
- Turbo Choreography\n";

    #[test]
    fn test_import_reference_set() {
        let tem = from_importable(GYALIS_IMPORT).expect("reference set should parse");
        assert_eq!(tem.species, SpeciesId::Gyalis);
        assert_eq!(tem.level, 48);
        assert_eq!(tem.trait_id, TraitId::Resistant);
        assert_eq!(tem.gear, GearId::IceCube);
        assert_eq!(tem.tvs[Stat::Atk as usize], 498);
        assert_eq!(tem.svs[Stat::SpA as usize], 1);
        assert_eq!(tem.moves.len(), 4);
        assert_eq!(tem.stats[Stat::Atk as usize], 151);
    }

    #[test]
    fn test_import_with_nickname() {
        let text = "Top Percentage (Gyalis) @ Ice Cube\nTrait: Resistant\n- Crystal Bite\n";
        let tem = from_importable(text).expect("nicknamed set should parse");
        assert_eq!(tem.species, SpeciesId::Gyalis);
    }

    #[test]
    fn test_round_trip() {
        for import in [GYALIS_IMPORT, KINU_IMPORT] {
            let tem = from_importable(import).expect("set should parse");
            let rendered = export(&tem);
            let back = from_importable(&rendered).expect("export should re-import");
            assert_eq!(tem, back);
            assert_eq!(tem.stats, back.stats);
        }
    }

    #[test]
    fn test_export_matches_reference_text() {
        let tem = from_importable(GYALIS_IMPORT).unwrap();
        assert_eq!(export(&tem), GYALIS_IMPORT);
    }

    #[test]
    fn test_unknown_species_fails() {
        let err = from_importable("Missingno\nTrait: Resistant\n- Crystal Bite\n");
        assert_eq!(err, Err(EngineError::UnknownSpecies("Missingno".to_string())));
    }

    #[test]
    fn test_unknown_trait_degrades() {
        let tem = from_importable("Gyalis\nTrait: Soul Eater\n- Crystal Bite\n").unwrap();
        assert_eq!(tem.trait_id, TraitId::None);
    }

    #[test]
    fn test_gen_creatures_skips_bad_blocks() {
        let input = format!("{GYALIS_IMPORT}\nMissingno\nTrait: X\n- Kick\n\n{KINU_IMPORT}");
        let roster = gen_creatures(&input);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].species, SpeciesId::Gyalis);
        assert_eq!(roster[1].species, SpeciesId::Kinu);
    }
}
