//! Items - equipment and consumables, set definitions and enchanting

mod enchant;
mod sets;

pub use enchant::{attempt_enchant, EnchantError, EnchantOutcome};
pub use sets::{set_by_id, GameSet, SetBonus, GAME_SETS};

use crate::config::EnchantConstants;
use crate::types::{ConsumableKind, EquipmentSlot, ItemId, Rarity, StatType};
use serde::{Deserialize, Serialize};

/// A single stat line on an item or set bonus
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemStat {
    pub stat: StatType,
    pub value: f64,
    #[serde(default)]
    pub is_percentage: bool,
}

impl ItemStat {
    pub const fn flat(stat: StatType, value: f64) -> Self {
        ItemStat {
            stat,
            value,
            is_percentage: false,
        }
    }

    pub const fn percent(stat: StatType, value: f64) -> Self {
        ItemStat {
            stat,
            value,
            is_percentage: true,
        }
    }

    /// Scale by an enchant multiplier: flat values floor, percentages keep one decimal
    pub fn scaled(&self, multiplier: f64) -> Self {
        let value = if self.is_percentage {
            (self.value * multiplier * 10.0).round() / 10.0
        } else {
            (self.value * multiplier).floor()
        };
        ItemStat { value, ..*self }
    }
}

/// What an item is: something to wear, or something to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Equipment { slot: EquipmentSlot },
    Consumable { consumable: ConsumableKind },
}

/// An item instance. Created by the generator, destroyed on sale or use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub rarity: Rarity,
    pub level: u32,
    #[serde(default)]
    pub stats: Vec<ItemStat>,
    /// Weapon attack or armor value
    #[serde(default)]
    pub base_stat: Option<u32>,
    /// Sell price in gold
    pub value: u64,
    #[serde(default)]
    pub set_id: Option<String>,
    #[serde(default)]
    pub is_locked: bool,

    // === Enchantment ===
    #[serde(default)]
    pub enchant_level: u32,
    #[serde(default)]
    pub max_enchant_slots: u32,
    #[serde(default)]
    pub used_enchant_slots: u32,
}

impl Item {
    /// Equipment slot, if this item can be worn
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self.kind {
            ItemKind::Equipment { slot } => Some(slot),
            ItemKind::Consumable { .. } => None,
        }
    }

    pub fn is_pet_egg(&self) -> bool {
        matches!(
            self.kind,
            ItemKind::Consumable {
                consumable: ConsumableKind::PetEgg
            }
        )
    }

    /// Stat multiplier for the current enchant level
    pub fn enchant_multiplier(&self, constants: &EnchantConstants) -> f64 {
        constants.multiplier(self.enchant_level)
    }

    /// Flat base stat after enchant scaling
    pub fn scaled_base_stat(&self, constants: &EnchantConstants) -> f64 {
        let base = self.base_stat.unwrap_or(0) as f64;
        (base * self.enchant_multiplier(constants)).floor()
    }

    /// Affixes after enchant scaling, in their original order
    pub fn scaled_stats(&self, constants: &EnchantConstants) -> Vec<ItemStat> {
        let multiplier = self.enchant_multiplier(constants);
        self.stats.iter().map(|s| s.scaled(multiplier)).collect()
    }

    /// Display name with the enchant suffix
    pub fn display_name(&self) -> String {
        if self.enchant_level > 0 {
            format!("{} +{}", self.name, self.enchant_level)
        } else {
            self.name.clone()
        }
    }

    /// Create a pet egg consumable
    pub fn pet_egg(id: ItemId, level: u32) -> Self {
        Item {
            id,
            name: "神秘宠物蛋".to_string(),
            kind: ItemKind::Consumable {
                consumable: ConsumableKind::PetEgg,
            },
            rarity: Rarity::Epic,
            level,
            stats: Vec::new(),
            base_stat: None,
            value: u64::from(level) * 50,
            set_id: None,
            is_locked: false,
            enchant_level: 0,
            max_enchant_slots: 0,
            used_enchant_slots: 0,
        }
    }
}
