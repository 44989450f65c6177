//src/items/src/lib.rs
//! Weapons and the armory that sells them.

pub mod armory;
pub mod weapon;

pub use crate::armory::{Armory, STARTING_GOLD};
pub use crate::weapon::{Rarity, StatBoosts, Weapon, default_weapons};
