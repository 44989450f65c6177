// src/story/src/progress.rs
use serde::{Deserialize, Serialize};

use error::StoryError;

use crate::act::{Act, FINAL_BOSS_ID, default_acts};

/// Where the player stands in the story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryProgress {
    acts: Vec<Act>,
    current_act: usize,
    defeated_gods: Vec<String>,
    has_reached_final_boss: bool,
}

impl Default for StoryProgress {
    fn default() -> Self {
        Self::new(default_acts())
    }
}

impl StoryProgress {
    pub fn new(acts: Vec<Act>) -> Self {
        Self {
            acts,
            current_act: 0,
            defeated_gods: Vec::new(),
            has_reached_final_boss: false,
        }
    }

    pub fn acts(&self) -> &[Act] {
        &self.acts
    }

    pub fn current_act(&self) -> Option<&Act> {
        self.acts.get(self.current_act)
    }

    pub fn act(&self, act_id: &str) -> Option<&Act> {
        self.acts.iter().find(|a| a.id == act_id)
    }

    pub fn defeated_gods(&self) -> &[String] {
        &self.defeated_gods
    }

    pub fn has_reached_final_boss(&self) -> bool {
        self.has_reached_final_boss
    }

    /// 只能挑战已解锁且未完成章节的 Boss
    pub fn can_challenge(&self, boss_id: &str) -> bool {
        self.acts
            .iter()
            .any(|a| a.boss_id == boss_id && a.is_unlocked && !a.is_completed)
    }

    /// Mark an act as won against `boss_id` and unlock the following one.
    ///
    /// Completing the last act sets the final-boss flag instead.
    pub fn complete_act(&mut self, act_id: &str, boss_id: &str) -> Result<(), StoryError> {
        let index = self
            .acts
            .iter()
            .position(|a| a.id == act_id)
            .ok_or_else(|| StoryError::UnknownAct(act_id.to_string()))?;

        let act = &mut self.acts[index];
        if !act.is_unlocked {
            return Err(StoryError::ActLocked(act_id.to_string()));
        }
        if act.boss_id != boss_id {
            return Err(StoryError::WrongBoss {
                act: act_id.to_string(),
                boss: boss_id.to_string(),
            });
        }
        act.is_completed = true;

        if boss_id != FINAL_BOSS_ID && !self.defeated_gods.iter().any(|g| g == boss_id) {
            self.defeated_gods.push(boss_id.to_string());
        }

        match self.acts.get_mut(index + 1) {
            Some(next) => {
                next.is_unlocked = true;
                self.current_act = index + 1;
                tracing::info!(act = %next.id, "act unlocked");
            }
            None => {
                self.has_reached_final_boss = true;
                tracing::info!("story completed");
            }
        }
        Ok(())
    }

    /// Complete whichever unlocked act is gated on `boss_id`.
    pub fn record_victory(&mut self, boss_id: &str) -> Result<(), StoryError> {
        let act_id = self
            .acts
            .iter()
            .find(|a| a.boss_id == boss_id && a.is_unlocked && !a.is_completed)
            .map(|a| a.id.clone())
            .ok_or_else(|| StoryError::ActLocked(boss_id.to_string()))?;
        self.complete_act(&act_id, boss_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_first_act_is_open() {
        let story = StoryProgress::default();
        assert_eq!(story.current_act().map(|a| a.id.as_str()), Some("betrayal"));
        assert!(story.can_challenge("god_of_war"));
        assert!(!story.can_challenge("god_of_wisdom"));
    }

    #[test]
    fn completing_unlocks_next_and_records_god() {
        let mut story = StoryProgress::default();
        story.complete_act("betrayal", "god_of_war").unwrap();

        assert_eq!(story.defeated_gods(), ["god_of_war".to_string()]);
        assert_eq!(story.current_act().map(|a| a.id.as_str()), Some("the_pact"));
        assert!(story.can_challenge("god_of_wisdom"));
        assert!(!story.can_challenge("god_of_war"));
    }

    #[test]
    fn locked_and_unknown_acts_are_rejected() {
        let mut story = StoryProgress::default();
        assert_eq!(
            story.complete_act("the_pact", "god_of_wisdom"),
            Err(StoryError::ActLocked("the_pact".into()))
        );
        assert_eq!(
            story.complete_act("nowhere", "god_of_war"),
            Err(StoryError::UnknownAct("nowhere".into()))
        );
        assert!(matches!(
            story.complete_act("betrayal", "god_of_death"),
            Err(StoryError::WrongBoss { .. })
        ));
    }

    #[test]
    fn final_boss_is_not_a_god_and_last_act_ends_story() {
        let mut story = StoryProgress::default();
        let bosses: Vec<String> = story.acts().iter().map(|a| a.boss_id.clone()).collect();
        for boss in &bosses {
            story.record_victory(boss).unwrap();
        }

        assert!(story.has_reached_final_boss());
        assert!(!story.defeated_gods().iter().any(|g| g == FINAL_BOSS_ID));
        assert_eq!(story.defeated_gods().len(), bosses.len() - 1);
    }
}
