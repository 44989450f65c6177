//! Clash resolution: one character skill contested against one boss skill.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::rng::CombatRng;
use crate::skill::{Skill, corruption_delta};

/// Margin at which a clash counts as overwhelming.
pub const OVERWHELMING_MARGIN: u32 = 5;

/// Source of the random part of a side's clash power.
pub trait PowerRoll {
    fn roll(&mut self, skill: &Skill) -> u32;
}

/// A single d6 per side, independent of the skill.
#[derive(Debug, Clone)]
pub struct D6Roll {
    rng: CombatRng,
}

impl D6Roll {
    pub fn new(rng: CombatRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(CombatRng::new(seed))
    }

    pub fn rng_mut(&mut self) -> &mut CombatRng {
        &mut self.rng
    }
}

impl PowerRoll for D6Roll {
    fn roll(&mut self, _skill: &Skill) -> u32 {
        self.rng.random_range(1..=6)
    }
}

/// Always rolls the same value. `FixedRoll(0)` removes randomness entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRoll(pub u32);

impl PowerRoll for FixedRoll {
    fn roll(&mut self, _skill: &Skill) -> u32 {
        self.0
    }
}

/// Replays a scripted sequence of rolls, then falls back to zero.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoll {
    rolls: std::collections::VecDeque<u32>,
}

impl ScriptedRoll {
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }
}

impl PowerRoll for ScriptedRoll {
    fn roll(&mut self, _skill: &Skill) -> u32 {
        self.rolls.pop_front().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Character,
    Boss,
}

/// Transient outcome of one clash, consumed by the turn that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClashResult {
    pub winner: Winner,
    pub character_skill: Skill,
    pub boss_skill: Skill,
    pub character_power: u32,
    pub boss_power: u32,
    /// Margin of victory, before resistances.
    pub damage: u32,
    pub effects: Vec<String>,
    pub corruption_gained: i32,
}

impl ClashResult {
    pub fn is_overwhelming(&self) -> bool {
        self.damage >= OVERWHELMING_MARGIN
    }
}

/// Contest `character_skill` against `boss_skill`.
///
/// Each side's power is its base power plus bonus plus one roll. The character
/// wins ties. Both skills must come from non-empty lists; the caller checks.
pub fn resolve_clash<R: PowerRoll + ?Sized>(
    character_skill: &Skill,
    boss_skill: &Skill,
    character_bonus: u32,
    boss_bonus: u32,
    roller: &mut R,
) -> ClashResult {
    let character_power =
        character_skill.base_power + character_bonus + roller.roll(character_skill);
    let boss_power = boss_skill.base_power + boss_bonus + roller.roll(boss_skill);

    let winner = if character_power >= boss_power {
        Winner::Character
    } else {
        Winner::Boss
    };
    let damage = character_power.abs_diff(boss_power);

    let mut effects = Vec::new();
    match winner {
        Winner::Character => {
            effects.push(format!("{} wins the clash!", character_skill.name));
            if damage >= OVERWHELMING_MARGIN {
                effects.push("Overwhelming victory! Bonus damage applied.".to_string());
            }
        }
        Winner::Boss => {
            effects.push(format!(
                "{} overwhelms {}!",
                boss_skill.name, character_skill.name
            ));
            if damage >= OVERWHELMING_MARGIN {
                effects.push("Devastating clash loss! Character takes extra damage.".to_string());
            }
        }
    }

    tracing::debug!(
        character_skill = %character_skill.id,
        boss_skill = %boss_skill.id,
        character_power,
        boss_power,
        %winner,
        damage,
        "clash resolved"
    );

    ClashResult {
        winner,
        character_skill: character_skill.clone(),
        boss_skill: boss_skill.clone(),
        character_power,
        boss_power,
        damage,
        effects,
        corruption_gained: corruption_delta(character_skill),
    }
}
