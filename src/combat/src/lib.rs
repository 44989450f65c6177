// src/combat/src/lib.rs
//! Combat resolution engine: skills, resistances, clashes and boss phases.
//!
//! Everything here is synchronous and free of global state. The turn
//! orchestrator in the root crate owns the session and calls into these
//! functions once per turn.

pub mod boss;
pub mod catalog;
pub mod clash;
mod content;
pub mod effect;
pub mod resistance;
pub mod rng;
pub mod skill;

pub use crate::boss::{Boss, PhaseTransition, apply_phase_transition, check_phase_transition};
pub use crate::catalog::{BossDefinition, Catalog, CatalogDefinition, PhaseDefinition};
pub use crate::clash::{
    ClashResult, D6Roll, FixedRoll, PowerRoll, ScriptedRoll, Winner, resolve_clash,
};
pub use crate::effect::{EffectKind, SkillEffect, Target};
pub use crate::resistance::{ResistanceChanges, ResistanceLevel, ResistanceTable, apply_resistance};
pub use crate::rng::CombatRng;
pub use crate::skill::{DamageType, ElementType, Skill, corruption_delta, element_bonus};
