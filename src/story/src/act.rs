// src/story/src/act.rs
use serde::{Deserialize, Serialize};

/// Boss whose defeat ends the story's first arc. It is not counted among
/// the defeated gods.
pub const FINAL_BOSS_ID: &str = "final_boss";

/// 剧情章节，每章由一名 Boss 把守
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Act {
    pub id: String,
    pub title: String,
    pub description: String,
    pub boss_id: String,
    pub is_unlocked: bool,
    pub is_completed: bool,
}

impl Act {
    pub fn new(id: &str, title: &str, description: &str, boss_id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            boss_id: boss_id.to_string(),
            is_unlocked: false,
            is_completed: false,
        }
    }
}

/// The built-in story, in play order. Only the first act starts unlocked.
pub fn default_acts() -> Vec<Act> {
    let mut acts = vec![
        Act::new(
            "betrayal",
            "The Betrayal",
            "The day the gods abandoned their most faithful servant...",
            "god_of_war",
        ),
        Act::new(
            "the_pact",
            "The Dark Pact",
            "A voice from the shadows offers power beyond imagination...",
            "god_of_wisdom",
        ),
        Act::new(
            "divine_hunt",
            "The Divine Hunt",
            "Armed with dark power, you begin your quest for vengeance...",
            "god_of_nature",
        ),
        Act::new(
            "storm_of_wrath",
            "Storm of Wrath",
            "The heavens themselves shake as divine blood is spilled...",
            "god_of_storms",
        ),
        Act::new(
            "deaths_embrace",
            "Death's Embrace",
            "The final god stands before you, but the truth emerges...",
            "god_of_death",
        ),
        Act::new(
            "the_truth",
            "The Terrible Truth",
            "As the last god falls, the God Killer reveals its true nature...",
            FINAL_BOSS_ID,
        ),
        Act::new(
            "the_awakening",
            "The Awakening",
            "You realize the God Killer's control and fight back...",
            "corrupted_self",
        ),
        Act::new(
            "divine_rebellion",
            "Divine Rebellion",
            "The surviving angels rally to help you break free...",
            "god_killer_avatar",
        ),
        Act::new(
            "final_redemption",
            "The Final Redemption",
            "Your ultimate choice determines the fate of all realms...",
            "true_god_killer",
        ),
    ];
    if let Some(first) = acts.first_mut() {
        first.is_unlocked = true;
    }
    acts
}
