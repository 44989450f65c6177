// src/hero/src/lib.rs
//! The protagonist: health, mana, growth, corruption and equipment.

mod core;
pub mod corruption;

pub use self::{
    core::{Character, HEALTH_PER_LEVEL, MANA_PER_LEVEL},
    corruption::{CorruptionTier, MAX_CORRUPTION, corruption_title, shift_corruption},
};
