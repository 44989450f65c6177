//! Shared fixtures: a small catalog whose numbers are easy to follow by hand.
#![allow(dead_code)]

use divine_clash::combat::Catalog;
use divine_clash::hero::Character;

pub const BOSS_ID: &str = "training_golem";

const TEST_CATALOG: &str = r#"{
    "skills": [
        { "id": "strike", "name": "Strike", "element_type": "fire", "damage_type": "slash",
          "base_power": 12, "mana_cost": 5 },
        { "id": "dark_cut", "name": "Dark Cut", "element_type": "dark", "damage_type": "pierce",
          "base_power": 12, "mana_cost": 5 },
        { "id": "mend", "name": "Mend", "element_type": "water", "damage_type": "blunt",
          "base_power": 0, "mana_cost": 5,
          "effects": [ { "type": "heal", "value": 15, "target": "self" } ] },
        { "id": "blade_dance", "name": "Blade Dance", "element_type": "air", "damage_type": "pierce",
          "base_power": 20, "mana_cost": 5 },
        { "id": "claw", "name": "Claw", "element_type": "earth", "damage_type": "slash",
          "base_power": 10, "mana_cost": 0 },
        { "id": "quake", "name": "Quake", "element_type": "divine", "damage_type": "blunt",
          "base_power": 10, "mana_cost": 0 }
    ],
    "skill_sets": {
        "pure": ["strike", "dark_cut", "mend"],
        "conflicted": ["strike", "dark_cut", "mend"],
        "corrupted": ["dark_cut"],
        "iron_sword": ["blade_dance"]
    },
    "bosses": [
        {
            "id": "training_golem",
            "name": "Training Golem",
            "title": "Keeper of the Yard",
            "max_health": 300,
            "skills": ["claw"],
            "resistances": { "slash": "normal", "pierce": "normal", "blunt": "normal" },
            "phases": [
                { "phase": 2, "health_threshold": 0.5, "name": "Cracked Shell",
                  "description": "Stone flakes away from the golem.",
                  "new_skills": ["quake"],
                  "resistance_changes": { "slash": "resistant" } },
                { "phase": 3, "health_threshold": 0.25, "name": "Core Exposed",
                  "description": "The golem's core glows.",
                  "resistance_changes": { "pierce": "fatal" } }
            ]
        }
    ]
}"#;

pub fn test_catalog() -> Catalog {
    Catalog::from_json(TEST_CATALOG).expect("test catalog is valid")
}

pub fn test_hero(catalog: &Catalog) -> Character {
    Character::new("protagonist", "Tester", 100, 50, catalog.skills_for("pure"))
}
