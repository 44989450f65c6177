// src/story/src/lib.rs
//! Ordered acts gated on boss victories.

pub mod act;
pub mod progress;

pub use crate::act::{Act, FINAL_BOSS_ID, default_acts};
pub use crate::progress::StoryProgress;
