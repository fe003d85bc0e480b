//! Hero - a party member with attributes and equipment

use super::BaseStats;
use crate::item::Item;
use crate::types::{EquipmentSlot, PetId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_seed: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub base_stats: BaseStats,
    /// At most one item per slot
    #[serde(default)]
    pub equipment: BTreeMap<EquipmentSlot, Item>,
    #[serde(default)]
    pub is_leader: bool,
    #[serde(default)]
    pub active_pet_id: Option<PetId>,
}

fn default_level() -> u32 {
    1
}

impl Hero {
    /// The controllable party leader of a fresh save
    pub fn leader() -> Self {
        Hero {
            id: "hero_leader".to_string(),
            name: "长恨".to_string(),
            avatar_seed: "leader".to_string(),
            level: 1,
            base_stats: BaseStats::starting(),
            equipment: BTreeMap::new(),
            is_leader: true,
            active_pet_id: None,
        }
    }

    /// Put `item` in its slot, returning whatever was there
    pub fn equip(&mut self, slot: EquipmentSlot, item: Item) -> Option<Item> {
        self.equipment.insert(slot, item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.equipment.remove(&slot)
    }

    pub fn equipped(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.equipment.get(&slot)
    }

    /// Slot holding the item with this id
    pub fn slot_of(&self, item_id: &crate::types::ItemId) -> Option<EquipmentSlot> {
        self.equipment
            .iter()
            .find(|(_, item)| &item.id == item_id)
            .map(|(slot, _)| *slot)
    }
}
