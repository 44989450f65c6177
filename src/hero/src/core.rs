// src/hero/src/core.rs
use serde::{Deserialize, Serialize};

use combat::{Catalog, ElementType, ResistanceTable, Skill};
use error::CombatError;
use items::Weapon;

use crate::corruption::{CorruptionTier, corruption_title, shift_corruption};

/// 每级提升的生命值
pub const HEALTH_PER_LEVEL: u32 = 10;
/// 每级提升的法力值
pub const MANA_PER_LEVEL: u32 = 5;

/// 角色核心数据结构
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub title: String,
    pub max_health: u32,
    pub current_health: u32,
    pub max_mana: u32,
    pub current_mana: u32,

    // 成长系统
    pub level: u32,
    pub experience: u32,
    pub corruption: u8,

    pub skills: Vec<Skill>,
    pub resistances: ResistanceTable,
    pub element_affinities: Vec<ElementType>,
    pub equipped_weapon: Option<Weapon>,
}

impl Character {
    pub fn new(id: &str, name: &str, max_health: u32, max_mana: u32, skills: Vec<Skill>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            title: corruption_title(0).to_string(),
            max_health,
            current_health: max_health,
            max_mana,
            current_mana: max_mana,
            level: 1,
            experience: 0,
            corruption: 0,
            skills,
            resistances: ResistanceTable::default(),
            element_affinities: CorruptionTier::Pure.affinities(),
            equipped_weapon: None,
        }
    }

    /// The betrayed champion at the start of the story.
    pub fn protagonist(catalog: &Catalog) -> Self {
        let mut hero = Self::new(
            "protagonist",
            "Aiden",
            100,
            50,
            catalog.skills_for(CorruptionTier::Pure.skill_set()),
        );
        hero.title = "The Betrayed".to_string();
        hero
    }

    pub fn tier(&self) -> CorruptionTier {
        CorruptionTier::from_corruption(self.corruption)
    }

    /// Own skills followed by the equipped weapon's skills.
    pub fn available_skills(&self) -> Vec<Skill> {
        let weapon_skills = self.equipped_weapon.iter().flat_map(|w| w.skills.iter());
        self.skills.iter().chain(weapon_skills).cloned().collect()
    }

    pub fn find_skill(&self, skill_id: &str) -> Option<&Skill> {
        self.skills
            .iter()
            .chain(self.equipped_weapon.iter().flat_map(|w| w.skills.iter()))
            .find(|s| s.id == skill_id)
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// 受到伤害，生命值最低为 0。返回实际扣除的生命值
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.current_health;
        self.current_health = self.current_health.saturating_sub(amount);
        before - self.current_health
    }

    pub fn heal(&mut self, amount: u32) {
        self.current_health = self
            .current_health
            .saturating_add(amount)
            .min(self.max_health);
    }

    pub fn spend_mana(&mut self, skill: &Skill) -> Result<(), CombatError> {
        if self.current_mana < skill.mana_cost {
            return Err(CombatError::InsufficientMana {
                skill: skill.name.clone(),
                required: skill.mana_cost,
                available: self.current_mana,
            });
        }
        self.current_mana -= skill.mana_cost;
        Ok(())
    }

    pub fn restore_mana(&mut self, amount: u32) {
        self.current_mana = self.current_mana.saturating_add(amount).min(self.max_mana);
    }

    /// Refill health and mana, e.g. between acts.
    pub fn rest(&mut self) {
        self.current_health = self.max_health;
        self.current_mana = self.max_mana;
    }

    /// Shift corruption by `delta`, clamped to 0..=100.
    ///
    /// The title always follows the new value. Crossing a tier boundary swaps
    /// the base skill set and affinities; the new tier is returned in that case.
    pub fn apply_corruption(&mut self, delta: i32, catalog: &Catalog) -> Option<CorruptionTier> {
        let old_tier = self.tier();
        self.corruption = shift_corruption(self.corruption, delta);
        self.title = corruption_title(self.corruption).to_string();

        let new_tier = self.tier();
        if new_tier == old_tier {
            return None;
        }

        self.skills = catalog.skills_for(new_tier.skill_set());
        self.element_affinities = new_tier.affinities();
        tracing::info!(
            character = %self.id,
            corruption = self.corruption,
            tier = %new_tier,
            "corruption tier changed"
        );
        Some(new_tier)
    }

    /// 升级系统
    fn level_up(&mut self) {
        self.level += 1;
        self.max_health += HEALTH_PER_LEVEL;
        self.max_mana += MANA_PER_LEVEL;
        self.rest();
    }

    /// Add experience; returns how many levels were gained.
    ///
    /// Level `n` needs `n * 100` experience, leftover carries over.
    pub fn gain_experience(&mut self, exp: u32) -> u32 {
        self.experience += exp;
        let mut gained = 0;
        while self.experience >= self.level * 100 {
            self.experience -= self.level * 100;
            self.level_up();
            gained += 1;
        }
        gained
    }

    /// Equip a weapon, returning the previously equipped one.
    pub fn equip(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.equipped_weapon.replace(weapon)
    }

    pub fn unequip(&mut self) -> Option<Weapon> {
        self.equipped_weapon.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use items::default_weapons;
    use pretty_assertions::assert_eq;

    fn setup() -> (Catalog, Character) {
        let catalog = Catalog::builtin().unwrap();
        let hero = Character::protagonist(&catalog);
        (catalog, hero)
    }

    #[test]
    fn protagonist_starts_pure() {
        let (_, hero) = setup();
        assert_eq!(hero.name, "Aiden");
        assert_eq!(hero.title, "The Betrayed");
        assert_eq!(hero.tier(), CorruptionTier::Pure);
        assert_eq!(hero.current_health, 100);
        assert_eq!(hero.current_mana, 50);
        assert!(hero.find_skill("holy_strike").is_some());
    }

    #[test]
    fn corruption_swaps_skill_sets() {
        let (catalog, mut hero) = setup();

        assert_eq!(hero.apply_corruption(10, &catalog), None);
        assert_eq!(hero.title, "The Questioning Believer");

        assert_eq!(
            hero.apply_corruption(25, &catalog),
            Some(CorruptionTier::Conflicted)
        );
        assert!(hero.find_skill("shadow_prayer").is_some());
        assert!(hero.find_skill("holy_strike").is_none());

        assert_eq!(
            hero.apply_corruption(500, &catalog),
            Some(CorruptionTier::Corrupted)
        );
        assert_eq!(hero.corruption, 100);
        assert_eq!(hero.element_affinities, vec![ElementType::Dark, ElementType::Divine]);

        assert_eq!(
            hero.apply_corruption(-500, &catalog),
            Some(CorruptionTier::Pure)
        );
        assert_eq!(hero.corruption, 0);
    }

    #[test]
    fn weapon_skills_are_appended() {
        let (catalog, mut hero) = setup();
        let sword = default_weapons(&catalog).remove(0);
        assert!(hero.equip(sword).is_none());

        let ids: Vec<String> = hero.available_skills().into_iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "holy_strike",
                "divine_protection",
                "prayer_of_justice",
                "slash_attack"
            ]
        );
        assert!(hero.find_skill("slash_attack").is_some());

        let removed = hero.unequip().unwrap();
        assert_eq!(removed.id, "iron_sword");
        assert!(hero.find_skill("slash_attack").is_none());
    }

    #[test]
    fn experience_levels_up_with_carry_over() {
        let (_, mut hero) = setup();
        hero.take_damage(40);
        assert_eq!(hero.gain_experience(50), 0);
        assert_eq!(hero.gain_experience(260), 2);
        assert_eq!(hero.level, 3);
        assert_eq!(hero.experience, 10);
        assert_eq!(hero.max_health, 120);
        assert_eq!(hero.current_health, 120);
        assert_eq!(hero.max_mana, 60);
    }

    #[test]
    fn mana_is_checked_before_spending() {
        let (catalog, mut hero) = setup();
        let justice = catalog.skill("prayer_of_justice").unwrap().clone();
        hero.spend_mana(&justice).unwrap();
        hero.spend_mana(&justice).unwrap();
        assert_eq!(hero.current_mana, 10);
        assert!(matches!(
            hero.spend_mana(&justice),
            Err(CombatError::InsufficientMana { required: 20, available: 10, .. })
        ));
        assert_eq!(hero.current_mana, 10);
    }

    #[test]
    fn health_is_clamped() {
        let (_, mut hero) = setup();
        assert_eq!(hero.take_damage(250), 100);
        assert!(!hero.is_alive());
        hero.heal(500);
        assert_eq!(hero.current_health, 100);
    }
}
