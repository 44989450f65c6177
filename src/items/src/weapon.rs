//src/items/src/weapon.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use combat::{Catalog, Skill};

/// 武器稀有度
#[derive(
    PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// 武器属性加成
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatBoosts {
    pub attack: u32,
    pub defense: u32,
    pub speed: u32,
}

impl StatBoosts {
    pub fn new(attack: u32, defense: u32, speed: u32) -> Self {
        Self {
            attack,
            defense,
            speed,
        }
    }
}

/// 武器数据结构
///
/// Equipping a weapon adds its skills after the wielder's own skill list.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub rarity: Rarity,
    pub skills: Vec<Skill>,
    pub stat_boosts: StatBoosts,
}

impl Weapon {
    /// Selling returns 60% of the purchase price, rounded down.
    pub fn sell_price(&self) -> u32 {
        self.price * 3 / 5
    }
}

struct WeaponTemplate {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: u32,
    rarity: Rarity,
    boosts: (u32, u32, u32),
}

const WEAPONS: &[WeaponTemplate] = &[
    WeaponTemplate {
        id: "iron_sword",
        name: "Iron Sword",
        description: "A basic sword forged from iron. Reliable and sturdy.",
        price: 100,
        rarity: Rarity::Common,
        boosts: (5, 0, 0),
    },
    WeaponTemplate {
        id: "blessed_mace",
        name: "Blessed Mace",
        description: "A holy weapon blessed by divine light.",
        price: 250,
        rarity: Rarity::Rare,
        boosts: (8, 3, 0),
    },
    WeaponTemplate {
        id: "shadow_dagger",
        name: "Shadow Dagger",
        description: "A dark blade that whispers of vengeance.",
        price: 300,
        rarity: Rarity::Rare,
        boosts: (6, 0, 8),
    },
    WeaponTemplate {
        id: "godslayer_blade",
        name: "Godslayer Blade",
        description: "A legendary weapon capable of harming divine beings.",
        price: 1000,
        rarity: Rarity::Legendary,
        boosts: (15, 5, 5),
    },
];

/// Weapons sold by the armory. Skills are taken from the catalog's skill set
/// registered under each weapon's id.
pub fn default_weapons(catalog: &Catalog) -> Vec<Weapon> {
    WEAPONS
        .iter()
        .map(|t| Weapon {
            id: t.id.to_string(),
            name: t.name.to_string(),
            description: t.description.to_string(),
            price: t.price,
            rarity: t.rarity,
            skills: catalog.skills_for(t.id),
            stat_boosts: StatBoosts::new(t.boosts.0, t.boosts.1, t.boosts.2),
        })
        .collect()
}
