//! Corruption tiers of the protagonist.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use combat::ElementType;

pub const MAX_CORRUPTION: u8 = 100;

/// 腐化阶段，决定可用技能组
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CorruptionTier {
    Pure,
    Conflicted,
    Corrupted,
}

impl CorruptionTier {
    pub fn from_corruption(corruption: u8) -> Self {
        match corruption {
            c if c >= 70 => Self::Corrupted,
            c if c >= 30 => Self::Conflicted,
            _ => Self::Pure,
        }
    }

    /// Catalog skill set used while in this tier.
    pub fn skill_set(self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::Conflicted => "conflicted",
            Self::Corrupted => "corrupted",
        }
    }

    pub fn affinities(self) -> Vec<ElementType> {
        match self {
            Self::Pure => vec![ElementType::Light, ElementType::Divine],
            Self::Conflicted => vec![ElementType::Light, ElementType::Dark],
            Self::Corrupted => vec![ElementType::Dark, ElementType::Divine],
        }
    }
}

/// 根据腐化值获取称号
pub fn corruption_title(corruption: u8) -> &'static str {
    match corruption {
        c if c >= 90 => "The God Killer's Avatar",
        c if c >= 70 => "The Corrupted Champion",
        c if c >= 50 => "The Fallen Paladin",
        c if c >= 30 => "The Doubting Faithful",
        c if c >= 10 => "The Questioning Believer",
        _ => "The Pure of Heart",
    }
}

/// Add a signed delta and clamp to `0..=MAX_CORRUPTION`.
pub fn shift_corruption(current: u8, delta: i32) -> u8 {
    (current as i32 + delta).clamp(0, MAX_CORRUPTION as i32) as u8
}
