// src/combat/src/boss.rs

use serde::{Deserialize, Serialize};

use crate::resistance::{ResistanceChanges, ResistanceTable};
use crate::rng::CombatRng;
use crate::skill::Skill;

/// Boss 阶段转换定义
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// 目标阶段编号
    pub phase: u32,
    /// 触发阈值（生命值比例，0.0-1.0）
    pub health_threshold: f64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 进入该阶段时追加的技能
    #[serde(default)]
    pub new_skills: Vec<Skill>,
    /// 进入该阶段时覆盖的抗性（部分合并）
    #[serde(default)]
    pub resistance_changes: ResistanceChanges,
    #[serde(default)]
    pub special_mechanics: Vec<String>,
}

impl PhaseTransition {
    pub fn new(phase: u32, health_threshold: f64, name: &str) -> Self {
        Self {
            phase,
            health_threshold,
            name: name.to_string(),
            description: String::new(),
            new_skills: Vec::new(),
            resistance_changes: ResistanceChanges::new(),
            special_mechanics: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.new_skills.push(skill);
        self
    }

    pub fn with_resistances(mut self, changes: ResistanceChanges) -> Self {
        self.resistance_changes = changes;
        self
    }

    pub fn with_mechanic(mut self, mechanic: &str) -> Self {
        self.special_mechanics.push(mechanic.to_string());
        self
    }
}

/// Boss 实体
///
/// Cloned fresh from the catalog at combat start and dropped when the fight
/// ends; only `is_defeated` is of interest afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub max_health: u32,
    pub current_health: u32,
    #[serde(default = "first_phase")]
    pub phase: u32,
    pub max_phase: u32,
    pub skills: Vec<Skill>,
    pub resistances: ResistanceTable,
    #[serde(default)]
    pub phase_transitions: Vec<PhaseTransition>,
    #[serde(default)]
    pub is_defeated: bool,
}

fn first_phase() -> u32 {
    1
}

impl Boss {
    /// 创建新的 Boss 实例（满血，第一阶段）
    pub fn new(
        id: &str,
        name: &str,
        max_health: u32,
        skills: Vec<Skill>,
        resistances: ResistanceTable,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            title: String::new(),
            max_health,
            current_health: max_health,
            phase: 1,
            max_phase: 1,
            skills,
            resistances,
            phase_transitions: Vec::new(),
            is_defeated: false,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Register a transition; `max_phase` follows the highest phase seen.
    pub fn with_transition(mut self, transition: PhaseTransition) -> Self {
        self.max_phase = self.max_phase.max(transition.phase);
        self.phase_transitions.push(transition);
        self.phase_transitions.sort_by_key(|t| t.phase);
        self
    }

    /// 获取当前血量比例
    pub fn health_fraction(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.current_health as f64 / self.max_health as f64
    }

    /// 是否存活
    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// 受到伤害，生命值最低为 0。返回实际扣除的生命值
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.current_health;
        self.current_health = self.current_health.saturating_sub(amount);
        before - self.current_health
    }

    /// 治疗
    pub fn heal(&mut self, amount: u32) {
        self.current_health = self
            .current_health
            .saturating_add(amount)
            .min(self.max_health);
    }

    /// 从当前技能中随机选择一个
    pub fn choose_skill(&self, rng: &mut CombatRng) -> Option<&Skill> {
        rng.choose(&self.skills)
    }

    pub fn transition_for(&self, phase: u32) -> Option<&PhaseTransition> {
        self.phase_transitions.iter().find(|t| t.phase == phase)
    }

    /// Apply every transition whose threshold has been crossed, in order.
    ///
    /// A single heavy hit can cross several thresholds; each intermediate
    /// phase still contributes its skills and resistance overrides.
    pub fn advance_phases(&mut self) -> Vec<PhaseTransition> {
        let mut fired = Vec::new();
        while let Some(transition) = check_phase_transition(self).cloned() {
            apply_in_place(self, &transition);
            tracing::info!(
                boss = %self.id,
                phase = transition.phase,
                name = %transition.name,
                "boss phase changed"
            );
            fired.push(transition);
        }
        fired
    }
}

/// Next transition due for `boss`, if its health has dropped far enough.
///
/// Only the phase directly above the current one is considered, so this
/// advances at most one phase per call.
pub fn check_phase_transition(boss: &Boss) -> Option<&PhaseTransition> {
    let next_phase = boss.phase + 1;
    if next_phase > boss.max_phase {
        return None;
    }

    let transition = boss.transition_for(next_phase)?;
    if boss.health_fraction() <= transition.health_threshold {
        Some(transition)
    } else {
        None
    }
}

/// Copy of `boss` in `transition`'s phase, with merged resistances and the
/// new skills appended.
pub fn apply_phase_transition(boss: &Boss, transition: &PhaseTransition) -> Boss {
    let mut updated = boss.clone();
    apply_in_place(&mut updated, transition);
    updated
}

fn apply_in_place(boss: &mut Boss, transition: &PhaseTransition) {
    // phases only move forward
    boss.phase = boss.phase.max(transition.phase);
    boss.resistances.merge(&transition.resistance_changes);
    boss.skills.extend(transition.new_skills.iter().cloned());
}
