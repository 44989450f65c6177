//src/combat/src/effect.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// 技能附带的效果（结构化，而非自由字符串）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEffect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    pub value: u32,
    pub target: Target,
}

impl SkillEffect {
    pub fn new(kind: EffectKind, value: u32, target: Target) -> Self {
        Self {
            kind,
            value,
            target,
        }
    }

    pub fn damage(value: u32) -> Self {
        Self::new(EffectKind::Damage, value, Target::Enemy)
    }

    pub fn heal_self(value: u32) -> Self {
        Self::new(EffectKind::Heal, value, Target::SelfTarget)
    }

    /// 效果是否作用于施放者一方
    pub fn is_friendly(&self) -> bool {
        matches!(self.target, Target::SelfTarget | Target::AllAllies)
    }

    /// 效果是否有害
    pub fn is_harmful(&self) -> bool {
        matches!(
            self.kind,
            EffectKind::Damage | EffectKind::Debuff | EffectKind::Stagger
        )
    }
}

impl fmt::Display for SkillEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.value, self.target)
    }
}

/// 效果种类
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
pub enum EffectKind {
    Damage,
    Heal,
    Buff,
    Debuff,
    Stagger,
}

/// 效果目标
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
pub enum Target {
    #[strum(serialize = "self")]
    #[serde(rename = "self")]
    SelfTarget,
    Enemy,
    AllAllies,
    AllEnemies,
}
