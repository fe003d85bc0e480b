//! GearSource - Stats from equipped items

use crate::config::EnchantConstants;
use crate::item::Item;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::types::EquipmentSlot;

/// Stats from an equipped item, scaled by its enchant level
pub struct GearSource<'a> {
    /// Which slot this item is in
    pub slot: EquipmentSlot,
    /// The equipped item
    pub item: &'a Item,
    enchant: &'a EnchantConstants,
}

impl<'a> GearSource<'a> {
    pub fn new(slot: EquipmentSlot, item: &'a Item, enchant: &'a EnchantConstants) -> Self {
        GearSource {
            slot,
            item,
            enchant,
        }
    }
}

impl StatSource for GearSource<'_> {
    fn id(&self) -> &str {
        &self.item.id.0
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    fn apply(&self, acc: &mut StatAccumulator) {
        // Implicit base value
        let base = self.item.scaled_base_stat(self.enchant);
        if self.slot == EquipmentSlot::Weapon {
            acc.stats.attack += base;
        } else if self.slot.is_armor() {
            acc.stats.armor += base;
        }

        // Affixes, in the order they were rolled
        for stat in self.item.scaled_stats(self.enchant) {
            acc.apply_stat(&stat);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::test_support::equipment;
    use crate::item::ItemStat;
    use crate::types::StatType;

    #[test]
    fn test_gear_source_id() {
        let item = equipment("test_sword", EquipmentSlot::Weapon, None, vec![]);
        let enchant = EnchantConstants::default();
        let source = GearSource::new(EquipmentSlot::Weapon, &item, &enchant);
        assert_eq!(source.id(), "test_sword");
    }

    #[test]
    fn test_weapon_base_goes_to_attack() {
        let item = equipment("sword", EquipmentSlot::Weapon, Some(20), vec![]);
        let enchant = EnchantConstants::default();
        let mut acc = StatAccumulator::new();
        GearSource::new(EquipmentSlot::Weapon, &item, &enchant).apply(&mut acc);
        assert!((acc.stats.attack - 20.0).abs() < f64::EPSILON);
        assert!((acc.stats.armor - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jewelry_has_no_base_contribution() {
        let item = equipment("ring", EquipmentSlot::Ring2, Some(50), vec![]);
        let enchant = EnchantConstants::default();
        let mut acc = StatAccumulator::new();
        GearSource::new(EquipmentSlot::Ring2, &item, &enchant).apply(&mut acc);
        assert!((acc.stats.attack - 0.0).abs() < f64::EPSILON);
        assert!((acc.stats.armor - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_enchant_scales_affixes() {
        let mut item = equipment(
            "chest",
            EquipmentSlot::Chest,
            Some(10),
            vec![ItemStat::flat(StatType::MaxHp, 40.0)],
        );
        item.enchant_level = 5; // x2.0
        let enchant = EnchantConstants::default();
        let mut acc = StatAccumulator::new();
        GearSource::new(EquipmentSlot::Chest, &item, &enchant).apply(&mut acc);
        assert!((acc.stats.armor - 20.0).abs() < f64::EPSILON);
        // 100 base + 80
        assert!((acc.stats.max_hp - 180.0).abs() < f64::EPSILON);
    }
}
