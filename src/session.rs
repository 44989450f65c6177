//! One fight between the protagonist and a boss.
//!
//! A `CombatSession` alternates between `Planning`, where actions are queued,
//! and a single `process_turn` call that resolves the first queued action as a
//! skill clash. State changes are written to the combat log and published on
//! the session's [`EventBus`].

use serde::{Deserialize, Serialize};
use strum::Display;

use combat::{
    Boss, Catalog, ClashResult, CombatRng, D6Roll, PhaseTransition, PowerRoll, Skill, Winner,
    element_bonus, resolve_clash,
};
use error::CombatError;
use hero::Character;

use crate::config::SessionConfig;
use crate::event_bus::{CombatEvent, EventBus};

/// A skill the player wants to use this turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatAction {
    pub character_id: String,
    pub skill_id: String,
    pub target_id: String,
}

impl CombatAction {
    pub fn new(character_id: &str, skill_id: &str, target_id: &str) -> Self {
        Self {
            character_id: character_id.to_string(),
            skill_id: skill_id.to_string(),
            target_id: target_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CombatPhase {
    /// Actions may be queued.
    Planning,
    /// A turn is being resolved.
    Battle,
    Victory,
    Defeat,
}

impl CombatPhase {
    pub fn is_finished(self) -> bool {
        matches!(self, CombatPhase::Victory | CombatPhase::Defeat)
    }
}

/// What one resolved turn did.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub clash: ClashResult,
    /// Damage after the loser's resistance was applied.
    pub damage_applied: u32,
    pub healed: u32,
    pub transitions: Vec<PhaseTransition>,
    pub levels_gained: u32,
    /// Phase the session is in after the turn.
    pub phase: CombatPhase,
}

pub struct CombatSession<'a> {
    catalog: &'a Catalog,
    config: SessionConfig,
    boss: Boss,
    character: Character,
    phase: CombatPhase,
    turn: u32,
    queued: Vec<CombatAction>,
    log: Vec<String>,
    last_clash: Option<ClashResult>,
    rng: CombatRng,
    roller: Box<dyn PowerRoll + 'a>,
    events: EventBus,
}

impl<'a> CombatSession<'a> {
    /// Start a fight against a fresh copy of `boss_id` from the catalog.
    pub fn start(
        boss_id: &str,
        character: Character,
        catalog: &'a Catalog,
        config: SessionConfig,
    ) -> Result<Self, CombatError> {
        let boss = catalog.spawn_boss(boss_id)?;
        let (rng, roller) = match config.seed {
            Some(seed) => (CombatRng::new(seed), D6Roll::seeded(seed.wrapping_add(1))),
            None => (CombatRng::from_entropy(), D6Roll::new(CombatRng::from_entropy())),
        };

        let mut session = Self {
            catalog,
            config,
            boss,
            character,
            phase: CombatPhase::Planning,
            turn: 1,
            queued: Vec::new(),
            log: Vec::new(),
            last_clash: None,
            rng,
            roller: Box::new(roller),
            events: EventBus::new(),
        };

        session.push_log(format!("Combat begins against {}!", session.boss.name));
        session.events.publish(CombatEvent::CombatStarted {
            boss_id: session.boss.id.clone(),
            boss_name: session.boss.name.clone(),
        });
        tracing::info!(boss = %session.boss.id, character = %session.character.id, "combat started");
        Ok(session)
    }

    /// Replace the d6 power roll, e.g. with a scripted one.
    pub fn with_roller(mut self, roller: impl PowerRoll + 'a) -> Self {
        self.roller = Box::new(roller);
        self
    }

    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// End the session and hand the character back, experience and corruption included.
    pub fn into_character(self) -> Character {
        self.character
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn queued_actions(&self) -> &[CombatAction] {
        &self.queued
    }

    pub fn last_clash(&self) -> Option<&ClashResult> {
        self.last_clash.as_ref()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// 在计划阶段加入一个行动
    pub fn queue_action(&mut self, action: CombatAction) -> Result<(), CombatError> {
        if self.phase != CombatPhase::Planning {
            return Err(if self.is_finished() {
                CombatError::SessionFinished
            } else {
                CombatError::NotPlanning
            });
        }
        self.queued.push(action);
        Ok(())
    }

    pub fn clear_actions(&mut self) {
        self.queued.clear();
    }

    /// Resolve the first queued action against a boss skill.
    ///
    /// Invalid actions abort the turn: the queue is cleared, the session goes
    /// back to `Planning`, and nothing else changes.
    pub fn process_turn(&mut self) -> Result<TurnReport, CombatError> {
        if self.is_finished() {
            return Err(CombatError::SessionFinished);
        }

        let (action, skill, boss_skill) = match self.prepare_turn() {
            Ok(prepared) => prepared,
            Err(err) => {
                self.abort_turn(&err);
                return Err(err);
            }
        };

        self.phase = CombatPhase::Battle;
        tracing::debug!(turn = self.turn, skill = %action.skill_id, "resolving turn");
        Ok(self.resolve_turn(skill, boss_skill))
    }

    /// Every check that can fail runs here, before any state changes.
    fn prepare_turn(&mut self) -> Result<(CombatAction, Skill, Skill), CombatError> {
        let action = self
            .queued
            .first()
            .cloned()
            .ok_or(CombatError::NoActionQueued)?;

        if action.character_id != self.character.id {
            return Err(CombatError::UnknownCharacter(action.character_id));
        }
        if action.target_id != self.boss.id {
            return Err(CombatError::UnknownBoss(action.target_id));
        }

        let skill = self
            .character
            .find_skill(&action.skill_id)
            .cloned()
            .ok_or_else(|| CombatError::UnknownSkill(action.skill_id.clone()))?;

        if self.character.current_mana < skill.mana_cost {
            return Err(CombatError::InsufficientMana {
                skill: skill.name.clone(),
                required: skill.mana_cost,
                available: self.character.current_mana,
            });
        }

        let boss_skill = self
            .boss
            .choose_skill(&mut self.rng)
            .cloned()
            .ok_or_else(|| CombatError::EmptySkillList(self.boss.id.clone()))?;

        Ok((action, skill, boss_skill))
    }

    fn resolve_turn(&mut self, skill: Skill, boss_skill: Skill) -> TurnReport {
        let character_bonus = element_bonus(&self.character.available_skills(), skill.element);
        let boss_bonus = element_bonus(&self.boss.skills, boss_skill.element);
        let clash = resolve_clash(
            &skill,
            &boss_skill,
            character_bonus,
            boss_bonus,
            self.roller.as_mut(),
        );

        self.events.publish(CombatEvent::ClashResolved {
            character_skill: skill.id.clone(),
            boss_skill: boss_skill.id.clone(),
            character_power: clash.character_power,
            boss_power: clash.boss_power,
            winner: clash.winner,
        });
        for effect in clash.effects.clone() {
            self.push_log(effect);
        }

        let damage_applied = self.apply_clash_damage(&clash);

        let mut healed = 0;
        let heal = skill.self_heal();
        if heal > 0 && self.character.is_alive() {
            let before = self.character.current_health;
            self.character.heal(heal);
            healed = self.character.current_health - before;
            if healed > 0 {
                self.push_log(format!("{} recovers {} health.", self.character.name, healed));
            }
        }

        // Checked in prepare_turn, cannot fail here.
        if self.character.spend_mana(&skill).is_err() {
            tracing::warn!(skill = %skill.id, "mana changed during turn");
        }

        self.apply_corruption(clash.corruption_gained);

        let transitions = self.boss.advance_phases();
        for transition in &transitions {
            self.push_log(format!("{} enters {}!", self.boss.name, transition.name));
            self.push_log(transition.description.clone());
            self.events.publish(CombatEvent::BossPhaseChanged {
                boss_id: self.boss.id.clone(),
                phase: transition.phase,
                name: transition.name.clone(),
            });
        }

        let levels_gained = self.finish_turn();
        self.last_clash = Some(clash.clone());

        TurnReport {
            clash,
            damage_applied,
            healed,
            transitions,
            levels_gained,
            phase: self.phase,
        }
    }

    /// Damage goes to the loser, scaled by its resistance to the winner's damage type.
    fn apply_clash_damage(&mut self, clash: &ClashResult) -> u32 {
        if clash.damage == 0 {
            return 0;
        }

        let (target, name, dealt, remaining) = match clash.winner {
            Winner::Character => {
                let amount = self
                    .boss
                    .resistances
                    .damage_against(clash.damage, clash.character_skill.damage_type);
                let dealt = self.boss.take_damage(amount);
                (
                    self.boss.id.clone(),
                    self.boss.name.clone(),
                    dealt,
                    self.boss.current_health,
                )
            }
            Winner::Boss => {
                let amount = self
                    .character
                    .resistances
                    .damage_against(clash.damage, clash.boss_skill.damage_type);
                let dealt = self.character.take_damage(amount);
                (
                    self.character.id.clone(),
                    self.character.name.clone(),
                    dealt,
                    self.character.current_health,
                )
            }
        };

        self.push_log(format!("{} takes {} damage.", name, dealt));
        self.events.publish(CombatEvent::DamageDealt {
            target,
            damage: dealt,
            remaining_health: remaining,
        });
        dealt
    }

    fn apply_corruption(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }
        let before = self.character.corruption;
        let new_tier = self.character.apply_corruption(delta, self.catalog);
        if self.character.corruption == before {
            return;
        }

        self.events.publish(CombatEvent::CorruptionChanged {
            character_id: self.character.id.clone(),
            delta,
            corruption: self.character.corruption,
        });
        if new_tier.is_some() {
            self.push_log(format!(
                "{} becomes {}.",
                self.character.name, self.character.title
            ));
        }
    }

    /// Decide victory or defeat, otherwise open the next turn. Returns levels gained.
    fn finish_turn(&mut self) -> u32 {
        if !self.boss.is_alive() {
            self.boss.is_defeated = true;
            self.phase = CombatPhase::Victory;
            self.push_log(format!("Victory! {} has been defeated!", self.boss.name));

            let reward = self.config.experience_reward;
            let levels = self.character.gain_experience(reward);
            self.events.publish(CombatEvent::ExperienceGained {
                character_id: self.character.id.clone(),
                amount: reward,
                level: self.character.level,
            });
            if levels > 0 {
                self.push_log(format!(
                    "{} reaches level {}!",
                    self.character.name, self.character.level
                ));
            }
            self.end_combat(true);
            return levels;
        }

        if !self.character.is_alive() {
            self.phase = CombatPhase::Defeat;
            self.push_log(format!("Defeat! {} has fallen.", self.character.name));
            self.end_combat(false);
            return 0;
        }

        self.turn += 1;
        self.queued.clear();
        self.phase = CombatPhase::Planning;
        self.character.restore_mana(self.config.mana_regen);
        self.push_log(format!("Turn {} begins.", self.turn));
        self.events
            .publish(CombatEvent::TurnAdvanced { turn: self.turn });
        0
    }

    fn end_combat(&mut self, victory: bool) {
        self.queued.clear();
        self.events.publish(CombatEvent::CombatEnded {
            boss_id: self.boss.id.clone(),
            victory,
            turn: self.turn,
        });
        tracing::info!(boss = %self.boss.id, victory, turn = self.turn, "combat ended");
    }

    fn abort_turn(&mut self, err: &CombatError) {
        tracing::warn!(turn = self.turn, error = %err, "turn aborted");
        self.queued.clear();
        self.phase = CombatPhase::Planning;
        self.events.publish(CombatEvent::TurnAborted {
            turn: self.turn,
            reason: err.to_string(),
        });
    }

    fn push_log(&mut self, entry: String) {
        self.log.push(entry);
        let limit = self.config.max_log_entries.max(1);
        if self.log.len() > limit {
            let excess = self.log.len() - limit;
            self.log.drain(..excess);
        }
    }
}
