//! Core enums and identifiers shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment slot for gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Helmet,
    Chest,
    Legs,
    Gloves,
    Boots,
    Necklace,
    Ring1,
    Ring2,
    Amulet,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Weapon,
            EquipmentSlot::Helmet,
            EquipmentSlot::Chest,
            EquipmentSlot::Legs,
            EquipmentSlot::Gloves,
            EquipmentSlot::Boots,
            EquipmentSlot::Necklace,
            EquipmentSlot::Ring1,
            EquipmentSlot::Ring2,
            EquipmentSlot::Amulet,
        ]
    }

    /// Body slots whose base stat is armor
    pub fn is_armor(&self) -> bool {
        matches!(
            self,
            EquipmentSlot::Helmet
                | EquipmentSlot::Chest
                | EquipmentSlot::Legs
                | EquipmentSlot::Gloves
                | EquipmentSlot::Boots
        )
    }

    /// Necklace, rings and amulet carry no flat base stat
    pub fn is_jewelry(&self) -> bool {
        matches!(
            self,
            EquipmentSlot::Necklace | EquipmentSlot::Ring1 | EquipmentSlot::Ring2 | EquipmentSlot::Amulet
        )
    }
}

/// Item rarity, ordered from most to least common
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[serde(alias = "普通")]
    Common,
    #[serde(alias = "魔法")]
    Magic,
    #[serde(alias = "稀有")]
    Rare,
    #[serde(alias = "罕见")]
    Uncommon,
    #[serde(alias = "史诗")]
    Epic,
    #[serde(alias = "不朽")]
    Immortal,
    #[serde(alias = "传说")]
    Legendary,
    #[serde(alias = "神圣")]
    Divine,
}

impl Rarity {
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Magic,
            Rarity::Rare,
            Rarity::Uncommon,
            Rarity::Epic,
            Rarity::Immortal,
            Rarity::Legendary,
            Rarity::Divine,
        ]
    }

    /// Whether items of this rarity may roll set membership
    pub fn can_be_set(&self) -> bool {
        *self >= Rarity::Uncommon
    }

    /// Multiplier applied to rolled affix values
    pub fn affix_boost(&self) -> f64 {
        match self {
            Rarity::Legendary | Rarity::Immortal => 1.5,
            Rarity::Divine => 2.0,
            _ => 1.0,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rarity::Common => "Common",
            Rarity::Magic => "Magic",
            Rarity::Rare => "Rare",
            Rarity::Uncommon => "Uncommon",
            Rarity::Epic => "Epic",
            Rarity::Immortal => "Immortal",
            Rarity::Legendary => "Legendary",
            Rarity::Divine => "Divine",
        };
        f.write_str(name)
    }
}

/// The five allocatable attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Intelligence,
    Vitality,
    Spirit,
}

impl Attribute {
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Intelligence,
            Attribute::Vitality,
            Attribute::Spirit,
        ]
    }
}

/// Stat types an item affix or set bonus can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatType {
    Attack,
    Armor,
    MaxHp,
    CritRate,
    CritDamage,
    Dodge,
    HpRegen,
    Lifesteal,
    ArmorPenetration,
    AttackSpeed,
    DamageReduction,
    DamageIncrease,
}

impl StatType {
    /// Stats where a percentage entry scales the running total instead of adding
    pub fn scales_running_total(&self) -> bool {
        matches!(self, StatType::Attack | StatType::Armor | StatType::MaxHp)
    }
}

/// Consumable item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumableKind {
    PetEgg,
}

/// Unique item identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique pet identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub String);

impl From<&str> for PetId {
    fn from(s: &str) -> Self {
        PetId(s.to_string())
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Random short identifier in the style of the persisted saves (9 base-36 chars)
pub fn random_id(rng: &mut impl rand::Rng) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Magic);
        assert!(Rarity::Rare < Rarity::Uncommon);
        assert!(Rarity::Legendary < Rarity::Divine);
        assert!(!Rarity::Rare.can_be_set());
        assert!(Rarity::Uncommon.can_be_set());
    }

    #[test]
    fn test_slot_families() {
        let jewelry = EquipmentSlot::all().iter().filter(|s| s.is_jewelry()).count();
        let armor = EquipmentSlot::all().iter().filter(|s| s.is_armor()).count();
        assert_eq!(jewelry, 4);
        assert_eq!(armor, 5);
        assert!(!EquipmentSlot::Weapon.is_armor());
    }

    #[test]
    fn test_random_id_shape() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let id = random_id(&mut rng);
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
