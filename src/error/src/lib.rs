//! 战斗引擎错误处理模块
//!
//! Errors surfaced by the combat engine, the catalog loader and the armory.
//! None of them are fatal: the session logs them and falls back to planning.

use thiserror::Error;

/// Errors raised while resolving a combat turn.
#[derive(Debug, Error)]
pub enum CombatError {
    /// 未知的 Boss
    #[error("Unknown boss: {0}")]
    UnknownBoss(String),

    /// 未知的技能
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    /// 未知的角色
    #[error("Unknown character: {0}")]
    UnknownCharacter(String),

    /// 技能列表为空
    #[error("{0} has no skills to use")]
    EmptySkillList(String),

    /// 法力不足
    #[error("Not enough mana for {skill}: need {required}, have {available}")]
    InsufficientMana {
        skill: String,
        required: u32,
        available: u32,
    },

    /// 没有待处理的行动
    #[error("No action queued for this turn")]
    NoActionQueued,

    /// Actions can only be queued or resolved while planning.
    #[error("Combat is not in the planning phase")]
    NotPlanning,

    /// 战斗已经结束
    #[error("Combat session has already ended")]
    SessionFinished,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// JSON 解析错误
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// 重复的标识符
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// 技能效果数值无效
    #[error("Skill {skill} has an effect with zero value")]
    ZeroEffectValue { skill: String },

    /// 阶段定义无效
    #[error("Boss {boss} has an invalid phase table: {reason}")]
    InvalidPhases { boss: String, reason: String },

    /// 引用了不存在的技能
    #[error("{owner} references unknown skill {skill}")]
    DanglingSkill { owner: String, skill: String },

    /// 最大生命值必须为正
    #[error("Boss {0} must have positive max health")]
    ZeroHealth(String),
}

/// Errors raised by the armory (weapon shop and inventory).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),

    #[error("Not enough gold: need {price}, have {gold}")]
    NotEnoughGold { price: u32, gold: u32 },

    #[error("Weapon {0} is not in the inventory")]
    NotOwned(String),
}

/// 剧情推进错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoryError {
    #[error("Unknown act: {0}")]
    UnknownAct(String),

    #[error("Act {0} is still locked")]
    ActLocked(String),

    #[error("Act {act} is not gated on {boss}")]
    WrongBoss { act: String, boss: String },
}

/// 将错误转换为玩家可读的消息
pub fn handle_error(error: &CombatError) -> String {
    match error {
        CombatError::InsufficientMana { skill, .. } => {
            format!("Not enough mana to use {}", skill)
        }
        CombatError::SessionFinished => "The battle is already over".to_string(),
        CombatError::NoActionQueued => "Choose a skill first".to_string(),
        CombatError::Catalog(_) => "Game data is corrupted".to_string(),
        _ => error.to_string(),
    }
}
