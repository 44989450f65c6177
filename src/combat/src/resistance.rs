//! Resistance levels and the damage calculator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::skill::DamageType;

/// 抗性等级
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResistanceLevel {
    Fatal,
    Normal,
    Endured,
    Resistant,
    Ineffective,
}

impl ResistanceLevel {
    /// 伤害倍率
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Fatal => 2.0,
            Self::Normal => 1.0,
            Self::Endured => 0.75,
            Self::Resistant | Self::Ineffective => 0.5,
        }
    }
}

/// Scale `base_damage` by the defender's resistance and floor the result.
///
/// The damage type does not alter the multiplier; it is kept so callers can
/// log which column of the table was consulted.
pub fn apply_resistance(base_damage: u32, damage_type: DamageType, level: ResistanceLevel) -> u32 {
    let scaled = (base_damage as f64 * level.multiplier()).floor() as u32;
    tracing::trace!(base_damage, %damage_type, %level, scaled, "applied resistance");
    scaled
}

/// Total mapping from damage type to resistance level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResistanceTable {
    pub slash: ResistanceLevel,
    pub pierce: ResistanceLevel,
    pub blunt: ResistanceLevel,
}

/// Partial override carried by a boss phase.
pub type ResistanceChanges = BTreeMap<DamageType, ResistanceLevel>;

impl ResistanceTable {
    pub fn new(slash: ResistanceLevel, pierce: ResistanceLevel, blunt: ResistanceLevel) -> Self {
        Self {
            slash,
            pierce,
            blunt,
        }
    }

    pub fn uniform(level: ResistanceLevel) -> Self {
        Self::new(level, level, level)
    }

    pub fn get(&self, damage_type: DamageType) -> ResistanceLevel {
        match damage_type {
            DamageType::Slash => self.slash,
            DamageType::Pierce => self.pierce,
            DamageType::Blunt => self.blunt,
        }
    }

    pub fn set(&mut self, damage_type: DamageType, level: ResistanceLevel) {
        match damage_type {
            DamageType::Slash => self.slash = level,
            DamageType::Pierce => self.pierce = level,
            DamageType::Blunt => self.blunt = level,
        }
    }

    /// Overwrite only the entries present in `changes`.
    pub fn merge(&mut self, changes: &ResistanceChanges) {
        for (damage_type, level) in changes {
            self.set(*damage_type, *level);
        }
    }

    /// Damage this defender takes from a hit of the given type.
    pub fn damage_against(&self, base_damage: u32, damage_type: DamageType) -> u32 {
        apply_resistance(base_damage, damage_type, self.get(damage_type))
    }

    pub fn iter(&self) -> impl Iterator<Item = (DamageType, ResistanceLevel)> + '_ {
        DamageType::iter().map(move |dt| (dt, self.get(dt)))
    }
}

impl Default for ResistanceTable {
    fn default() -> Self {
        Self::uniform(ResistanceLevel::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_table_values() {
        assert_eq!(apply_resistance(10, DamageType::Slash, ResistanceLevel::Fatal), 20);
        assert_eq!(apply_resistance(10, DamageType::Slash, ResistanceLevel::Resistant), 5);
        assert_eq!(apply_resistance(10, DamageType::Pierce, ResistanceLevel::Endured), 7);
        assert_eq!(apply_resistance(10, DamageType::Blunt, ResistanceLevel::Ineffective), 5);
        assert_eq!(apply_resistance(2, DamageType::Slash, ResistanceLevel::Normal), 2);
        assert_eq!(apply_resistance(0, DamageType::Slash, ResistanceLevel::Fatal), 0);
    }

    #[test]
    fn merge_keeps_untouched_entries() {
        let mut table = ResistanceTable::new(
            ResistanceLevel::Normal,
            ResistanceLevel::Endured,
            ResistanceLevel::Resistant,
        );
        let changes = ResistanceChanges::from([(DamageType::Blunt, ResistanceLevel::Fatal)]);
        table.merge(&changes);

        assert_eq!(table.slash, ResistanceLevel::Normal);
        assert_eq!(table.pierce, ResistanceLevel::Endured);
        assert_eq!(table.blunt, ResistanceLevel::Fatal);
        assert_eq!(table.damage_against(7, DamageType::Blunt), 14);
    }

    fn any_level() -> impl Strategy<Value = ResistanceLevel> {
        prop_oneof![
            Just(ResistanceLevel::Fatal),
            Just(ResistanceLevel::Normal),
            Just(ResistanceLevel::Endured),
            Just(ResistanceLevel::Resistant),
            Just(ResistanceLevel::Ineffective),
        ]
    }

    fn any_damage_type() -> impl Strategy<Value = DamageType> {
        prop_oneof![
            Just(DamageType::Slash),
            Just(DamageType::Pierce),
            Just(DamageType::Blunt),
        ]
    }

    proptest! {
        #[test]
        fn prop_apply_resistance_is_floored_product(
            base in 0u32..100_000,
            damage_type in any_damage_type(),
            level in any_level(),
        ) {
            let expected = match level {
                ResistanceLevel::Fatal => base * 2,
                ResistanceLevel::Normal => base,
                ResistanceLevel::Endured => base * 3 / 4,
                ResistanceLevel::Resistant | ResistanceLevel::Ineffective => base / 2,
            };
            prop_assert_eq!(apply_resistance(base, damage_type, level), expected);
        }
    }
}
