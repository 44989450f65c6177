//! Skill definitions shared by characters, weapons and bosses.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::effect::{EffectKind, SkillEffect};

/// 元素属性
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
pub enum ElementType {
    Fire,
    Water,
    Earth,
    Air,
    Light,
    Dark,
    Divine,
}

/// 伤害类型
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Slash,
    Pierce,
    Blunt,
}

/// Immutable catalog entry. Owners hold clones of the entries they can use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(rename = "element_type")]
    pub element: ElementType,
    pub damage_type: DamageType,
    pub base_power: u32,
    pub mana_cost: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub effects: Vec<SkillEffect>,
}

impl Skill {
    pub fn new(
        id: &str,
        name: &str,
        element: ElementType,
        damage_type: DamageType,
        base_power: u32,
        mana_cost: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            element,
            damage_type,
            base_power,
            mana_cost,
            description: String::new(),
            effects: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_effect(mut self, effect: SkillEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Skills with no power and no damage effect (heals, buffs) never win a
    /// clash on their own; callers should not pick them as the offensive side.
    pub fn is_offensive(&self) -> bool {
        self.base_power > 0
            || self
                .effects
                .iter()
                .any(|effect| effect.kind == EffectKind::Damage)
    }

    /// 总治疗量（仅计算作用于自身的效果）
    pub fn self_heal(&self) -> u32 {
        self.effects
            .iter()
            .filter(|effect| effect.kind == EffectKind::Heal && effect.is_friendly())
            .map(|effect| effect.value)
            .sum()
    }
}

/// Power bonus for fielding several skills of the same element:
/// three or more grant mastery (+8), two grant harmony (+4).
pub fn element_bonus(skills: &[Skill], element: ElementType) -> u32 {
    let matching = skills.iter().filter(|s| s.element == element).count();
    match matching {
        n if n >= 3 => 8,
        2 => 4,
        _ => 0,
    }
}

/// Corruption change caused by using a skill: dark feeds it, light eases it.
pub fn corruption_delta(skill: &Skill) -> i32 {
    match skill.element {
        ElementType::Dark => 5,
        ElementType::Light => -2,
        _ => 0,
    }
}
