//! Static catalogs: skills keyed by id, skill sets keyed by owner, and boss
//! templates keyed by id.
//!
//! Catalogs are described by a [`CatalogDefinition`] that refers to skills by
//! id. Loading resolves those references and validates the whole definition,
//! so nothing downstream has to re-check effects, phases or skill ids.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use error::{CatalogError, CombatError};

use crate::boss::{Boss, PhaseTransition};
use crate::resistance::{ResistanceChanges, ResistanceTable};
use crate::skill::Skill;

/// Serialized form of a catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub skills: Vec<Skill>,
    /// Owner id (character form, weapon, boss) → skill ids.
    #[serde(default)]
    pub skill_sets: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub bosses: Vec<BossDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    pub max_health: u32,
    pub skills: Vec<String>,
    pub resistances: ResistanceTable,
    #[serde(default)]
    pub phases: Vec<PhaseDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseDefinition {
    pub phase: u32,
    pub health_threshold: f64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub new_skills: Vec<String>,
    #[serde(default)]
    pub resistance_changes: ResistanceChanges,
    #[serde(default)]
    pub special_mechanics: Vec<String>,
}

/// Validated, fully resolved catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    skills: BTreeMap<String, Skill>,
    skill_sets: BTreeMap<String, Vec<String>>,
    bosses: BTreeMap<String, Boss>,
}

impl Catalog {
    /// The game's own content.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load(crate::content::definition())
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definition: CatalogDefinition = serde_json::from_str(json)?;
        Self::load(definition)
    }

    pub fn load(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        let mut skills = BTreeMap::new();
        for skill in definition.skills {
            if skill.effects.iter().any(|effect| effect.value == 0) {
                return Err(CatalogError::ZeroEffectValue { skill: skill.id });
            }
            if skills.contains_key(&skill.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "skill",
                    id: skill.id,
                });
            }
            skills.insert(skill.id.clone(), skill);
        }

        for (owner, ids) in &definition.skill_sets {
            for id in ids {
                if !skills.contains_key(id) {
                    return Err(CatalogError::DanglingSkill {
                        owner: owner.clone(),
                        skill: id.clone(),
                    });
                }
            }
        }

        let mut bosses = BTreeMap::new();
        for boss_def in definition.bosses {
            let boss = resolve_boss(&skills, boss_def)?;
            if bosses.contains_key(&boss.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "boss",
                    id: boss.id,
                });
            }
            bosses.insert(boss.id.clone(), boss);
        }

        tracing::debug!(
            skills = skills.len(),
            skill_sets = definition.skill_sets.len(),
            bosses = bosses.len(),
            "catalog loaded"
        );

        Ok(Self {
            skills,
            skill_sets: definition.skill_sets,
            bosses,
        })
    }

    pub fn skill(&self, id: &str) -> Option<&Skill> {
        self.skills.get(id)
    }

    /// Copies of the skills registered for `owner`, in catalog order.
    pub fn skills_for(&self, owner: &str) -> Vec<Skill> {
        self.skill_sets
            .get(owner)
            .into_iter()
            .flatten()
            .filter_map(|id| self.skills.get(id).cloned())
            .collect()
    }

    pub fn boss(&self, id: &str) -> Option<&Boss> {
        self.bosses.get(id)
    }

    /// Fresh copy of a boss template, ready for a new fight.
    pub fn spawn_boss(&self, id: &str) -> Result<Boss, CombatError> {
        self.bosses
            .get(id)
            .cloned()
            .ok_or_else(|| CombatError::UnknownBoss(id.to_string()))
    }

    pub fn boss_ids(&self) -> impl Iterator<Item = &str> {
        self.bosses.keys().map(String::as_str)
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}

fn lookup(
    skills: &BTreeMap<String, Skill>,
    owner: &str,
    ids: &[String],
) -> Result<Vec<Skill>, CatalogError> {
    ids.iter()
        .map(|id| {
            skills
                .get(id)
                .cloned()
                .ok_or_else(|| CatalogError::DanglingSkill {
                    owner: owner.to_string(),
                    skill: id.clone(),
                })
        })
        .collect()
}

fn resolve_boss(
    skills: &BTreeMap<String, Skill>,
    def: BossDefinition,
) -> Result<Boss, CatalogError> {
    if def.max_health == 0 {
        return Err(CatalogError::ZeroHealth(def.id));
    }
    if def.skills.is_empty() {
        return Err(CatalogError::InvalidPhases {
            boss: def.id,
            reason: "starts without any skill".to_string(),
        });
    }

    let invalid = |reason: String| CatalogError::InvalidPhases {
        boss: def.id.clone(),
        reason,
    };

    let mut phases = def.phases.clone();
    phases.sort_by_key(|p| p.phase);

    let mut seen = BTreeSet::new();
    let mut previous_threshold = f64::INFINITY;
    for phase in &phases {
        if phase.phase == 0 {
            return Err(invalid("phase numbers start at 1".to_string()));
        }
        if !seen.insert(phase.phase) {
            return Err(invalid(format!("phase {} is defined twice", phase.phase)));
        }
        if !(0.0..=1.0).contains(&phase.health_threshold) {
            return Err(invalid(format!(
                "phase {} threshold {} is outside 0..=1",
                phase.phase, phase.health_threshold
            )));
        }
        if phase.health_threshold > previous_threshold {
            return Err(invalid(format!(
                "phase {} threshold rises above the previous phase",
                phase.phase
            )));
        }
        previous_threshold = phase.health_threshold;
    }

    // every phase between 2 and the last one must be reachable
    if let Some(last) = phases.last() {
        for expected in 2..=last.phase {
            if !seen.contains(&expected) {
                return Err(invalid(format!("phase {} is missing", expected)));
            }
        }
    }

    let starting_skills = lookup(skills, &def.id, &def.skills)?;
    let mut boss = Boss::new(
        &def.id,
        &def.name,
        def.max_health,
        starting_skills,
        def.resistances,
    )
    .with_title(&def.title);

    for phase in phases {
        let mut transition = PhaseTransition::new(phase.phase, phase.health_threshold, &phase.name)
            .with_description(&phase.description)
            .with_resistances(phase.resistance_changes);
        for skill in lookup(skills, &def.id, &phase.new_skills)? {
            transition = transition.with_skill(skill);
        }
        for mechanic in &phase.special_mechanics {
            transition = transition.with_mechanic(mechanic);
        }
        boss = boss.with_transition(transition);
    }

    Ok(boss)
}
