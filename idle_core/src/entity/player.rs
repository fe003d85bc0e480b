//! Player - the aggregate root owning currency, party, pets and inventory

use super::{Hero, Pet};
use crate::item::Item;
use crate::types::{ItemId, PetId, Rarity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    // === Currency ===
    pub gold: u64,
    #[serde(alias = "enchantStones")]
    pub enchant_stones: u64,

    // === Shared progression ===
    #[serde(alias = "currentExp")]
    pub current_exp: u64,
    #[serde(alias = "maxExp")]
    pub max_exp: u64,
    pub level: u32,

    // === Roster ===
    /// Index 0 is the leader
    pub heroes: Vec<Hero>,
    pub pets: Vec<Pet>,

    // === Inventory ===
    pub inventory: Vec<Item>,
    #[serde(alias = "maxInventorySize")]
    pub max_inventory_size: usize,
    #[serde(alias = "autoSellSettings")]
    pub auto_sell: BTreeMap<Rarity, bool>,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            gold: 0,
            enchant_stones: 0,
            current_exp: 0,
            max_exp: 100,
            level: 1,
            heroes: vec![Hero::leader()],
            pets: Vec::new(),
            inventory: Vec::new(),
            max_inventory_size: 120,
            auto_sell: BTreeMap::new(),
        }
    }
}

impl Player {
    pub fn leader(&self) -> Option<&Hero> {
        self.heroes.first()
    }

    pub fn leader_mut(&mut self) -> Option<&mut Hero> {
        self.heroes.first_mut()
    }

    pub fn is_inventory_full(&self) -> bool {
        self.inventory.len() >= self.max_inventory_size
    }

    pub fn inventory_index(&self, id: &ItemId) -> Option<usize> {
        self.inventory.iter().position(|i| &i.id == id)
    }

    /// Find an item wherever it lives: inventory first, then equipment
    pub fn find_item(&self, id: &ItemId) -> Option<&Item> {
        self.inventory.iter().find(|i| &i.id == id).or_else(|| {
            self.heroes
                .iter()
                .flat_map(|h| h.equipment.values())
                .find(|i| &i.id == id)
        })
    }

    /// Mutable access to the single copy of an item
    pub fn find_item_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        if let Some(idx) = self.inventory_index(id) {
            return self.inventory.get_mut(idx);
        }
        self.heroes
            .iter_mut()
            .flat_map(|h| h.equipment.values_mut())
            .find(|i| &i.id == id)
    }

    /// Index of the hero wearing this item
    pub fn wearer_of(&self, id: &ItemId) -> Option<usize> {
        self.heroes.iter().position(|h| h.slot_of(id).is_some())
    }

    pub fn pet(&self, id: &PetId) -> Option<&Pet> {
        self.pets.iter().find(|p| &p.id == id)
    }

    pub fn pet_mut(&mut self, id: &PetId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|p| &p.id == id)
    }

    pub fn is_auto_sell(&self, rarity: Rarity) -> bool {
        self.auto_sell.get(&rarity).copied().unwrap_or(false)
    }

    /// Ids of pets bound to a hero and present in the collection
    pub fn active_pet_ids(&self) -> impl Iterator<Item = &PetId> {
        self.heroes
            .iter()
            .filter_map(|h| h.active_pet_id.as_ref())
            .filter(|id| self.pet(id).is_some())
    }
}
