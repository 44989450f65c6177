//! Gold purse and owned weapons. Prices and inventory only; presentation is
//! left to the caller.

use serde::{Deserialize, Serialize};

use error::ShopError;

use crate::weapon::Weapon;

pub const STARTING_GOLD: u32 = 500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Armory {
    stock: Vec<Weapon>,
    gold: u32,
    inventory: Vec<Weapon>,
}

impl Armory {
    pub fn new(stock: Vec<Weapon>) -> Self {
        Self::with_gold(stock, STARTING_GOLD)
    }

    pub fn with_gold(stock: Vec<Weapon>, gold: u32) -> Self {
        Self {
            stock,
            gold,
            inventory: Vec::new(),
        }
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn stock(&self) -> &[Weapon] {
        &self.stock
    }

    pub fn inventory(&self) -> &[Weapon] {
        &self.inventory
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Buy a copy of a stocked weapon. The stock itself never runs out.
    pub fn buy(&mut self, weapon_id: &str) -> Result<&Weapon, ShopError> {
        let weapon = self
            .stock
            .iter()
            .find(|w| w.id == weapon_id)
            .ok_or_else(|| ShopError::UnknownWeapon(weapon_id.to_string()))?;

        if self.gold < weapon.price {
            return Err(ShopError::NotEnoughGold {
                price: weapon.price,
                gold: self.gold,
            });
        }

        self.gold -= weapon.price;
        self.inventory.push(weapon.clone());
        tracing::debug!(weapon = weapon_id, gold = self.gold, "weapon bought");

        let last = self.inventory.len() - 1;
        Ok(&self.inventory[last])
    }

    /// Sell one owned copy of a weapon; returns the gold received.
    pub fn sell(&mut self, weapon_id: &str) -> Result<u32, ShopError> {
        let index = self
            .inventory
            .iter()
            .position(|w| w.id == weapon_id)
            .ok_or_else(|| ShopError::NotOwned(weapon_id.to_string()))?;

        let weapon = self.inventory.remove(index);
        let price = weapon.sell_price();
        self.gold = self.gold.saturating_add(price);
        tracing::debug!(weapon = weapon_id, price, gold = self.gold, "weapon sold");
        Ok(price)
    }

    /// Remove an owned weapon so it can be equipped.
    pub fn take(&mut self, weapon_id: &str) -> Result<Weapon, ShopError> {
        let index = self
            .inventory
            .iter()
            .position(|w| w.id == weapon_id)
            .ok_or_else(|| ShopError::NotOwned(weapon_id.to_string()))?;
        Ok(self.inventory.remove(index))
    }

    /// Put an unequipped weapon back into the inventory.
    pub fn store(&mut self, weapon: Weapon) {
        self.inventory.push(weapon);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapon::default_weapons;
    use combat::Catalog;
    use pretty_assertions::assert_eq;

    fn armory() -> Armory {
        let catalog = Catalog::builtin().unwrap();
        Armory::new(default_weapons(&catalog))
    }

    #[test]
    fn buy_and_sell_round() {
        let mut armory = armory();
        assert_eq!(armory.gold(), 500);

        armory.buy("blessed_mace").unwrap();
        assert_eq!(armory.gold(), 250);
        assert_eq!(armory.inventory().len(), 1);

        assert_eq!(armory.sell("blessed_mace"), Ok(150));
        assert_eq!(armory.gold(), 400);
        assert!(armory.inventory().is_empty());
    }

    #[test]
    fn cannot_buy_without_gold() {
        let mut armory = armory();
        assert_eq!(
            armory.buy("godslayer_blade").map(|w| w.id.clone()),
            Err(ShopError::NotEnoughGold {
                price: 1000,
                gold: 500
            })
        );
        assert_eq!(armory.gold(), 500);

        armory.add_gold(500);
        assert!(armory.buy("godslayer_blade").is_ok());
        assert_eq!(armory.gold(), 0);
    }

    #[test]
    fn unknown_and_unowned_weapons() {
        let mut armory = armory();
        assert_eq!(
            armory.buy("excalibur").map(|w| w.id.clone()),
            Err(ShopError::UnknownWeapon("excalibur".into()))
        );
        assert_eq!(
            armory.sell("iron_sword"),
            Err(ShopError::NotOwned("iron_sword".into()))
        );
    }

    #[test]
    fn take_and_store() {
        let mut armory = armory();
        armory.buy("iron_sword").unwrap();
        let sword = armory.take("iron_sword").unwrap();
        assert!(armory.inventory().is_empty());
        armory.store(sword);
        assert_eq!(armory.inventory()[0].id, "iron_sword");
    }
}
