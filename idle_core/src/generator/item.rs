//! Item generation - rarity ladder, affix rolls and naming

use super::tables::{base_item_names, ADJECTIVES};
use crate::config::LootConstants;
use crate::item::{Item, ItemKind, ItemStat, GAME_SETS};
use crate::types::{random_id, EquipmentSlot, ItemId, Rarity, StatType};
use rand::seq::SliceRandom;
use rand::Rng;

/// Cumulative upper bounds of the rarity ladder, rarest first
const RARITY_LADDER: &[(f64, Rarity)] = &[
    (0.005, Rarity::Divine),
    (0.015, Rarity::Legendary),
    (0.04, Rarity::Immortal),
    (0.10, Rarity::Epic),
    (0.25, Rarity::Uncommon),
    (0.50, Rarity::Rare),
    (0.80, Rarity::Magic),
];

/// Map a uniform roll in `[0, 1)` to a rarity
pub fn rarity_for_roll(roll: f64) -> Rarity {
    RARITY_LADDER
        .iter()
        .find(|(bound, _)| roll < *bound)
        .map(|(_, rarity)| *rarity)
        .unwrap_or(Rarity::Common)
}

/// Affix count and enchant-slot ranges for a rarity (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RarityProfile {
    pub affixes: (u32, u32),
    pub enchant_slots: (u32, u32),
}

impl RarityProfile {
    pub fn of(rarity: Rarity) -> Self {
        let (affixes, enchant_slots) = match rarity {
            Rarity::Divine => ((8, 9), (8, 12)),
            Rarity::Legendary => ((7, 8), (6, 10)),
            Rarity::Immortal => ((6, 7), (5, 8)),
            Rarity::Epic => ((5, 6), (4, 7)),
            Rarity::Uncommon => ((4, 5), (3, 5)),
            Rarity::Rare => ((3, 5), (2, 4)),
            Rarity::Magic => ((2, 3), (1, 3)),
            Rarity::Common => ((1, 2), (0, 2)),
        };
        RarityProfile { affixes, enchant_slots }
    }
}

/// One entry of the affix pool
#[derive(Debug, Clone, Copy)]
pub struct AffixRange {
    pub stat: StatType,
    pub min: u32,
    pub max: u32,
    /// Multiplied by `1 + level / 50`
    pub scales_with_level: bool,
}

const fn affix(stat: StatType, min: u32, max: u32, scales_with_level: bool) -> AffixRange {
    AffixRange {
        stat,
        min,
        max,
        scales_with_level,
    }
}

/// Dodge is never rolled on items
pub const AFFIX_POOL: &[AffixRange] = &[
    affix(StatType::Attack, 2, 10, true),
    affix(StatType::Armor, 2, 10, true),
    affix(StatType::MaxHp, 20, 100, true),
    affix(StatType::CritRate, 1, 3, false),
    affix(StatType::CritDamage, 5, 15, false),
    affix(StatType::HpRegen, 1, 5, true),
    affix(StatType::Lifesteal, 1, 3, false),
    affix(StatType::ArmorPenetration, 2, 10, true),
    affix(StatType::AttackSpeed, 1, 5, false),
    affix(StatType::DamageReduction, 1, 3, false),
    affix(StatType::DamageIncrease, 1, 5, false),
];

fn roll_range(rng: &mut impl Rng, (min, max): (u32, u32)) -> u32 {
    rng.gen_range(min..=max)
}

fn roll_affix(level: u32, rarity: Rarity, rng: &mut impl Rng) -> ItemStat {
    let range = AFFIX_POOL[rng.gen_range(0..AFFIX_POOL.len())];
    let mut value = rng.gen_range(range.min..=range.max) as f64;
    if range.scales_with_level {
        value *= 1.0 + level as f64 / 50.0;
    }
    let value = (value * rarity.affix_boost()).floor().max(1.0);
    ItemStat::flat(range.stat, value)
}

fn roll_base_stat(slot: EquipmentSlot, level: u32, rng: &mut impl Rng) -> Option<u32> {
    if slot == EquipmentSlot::Weapon {
        Some(level * 5 + rng.gen_range(5..=15))
    } else if slot.is_armor() {
        Some(level * 3 + rng.gen_range(2..=8))
    } else {
        None
    }
}

/// Generate a random piece of equipment at `level`
pub fn generate_item(level: u32, loot: &LootConstants, rng: &mut impl Rng) -> Item {
    let slots = EquipmentSlot::all();
    let slot = slots[rng.gen_range(0..slots.len())];

    let rarity = rarity_for_roll(rng.gen::<f64>());
    let profile = RarityProfile::of(rarity);
    let affix_count = roll_range(rng, profile.affixes);
    let max_enchant_slots = roll_range(rng, profile.enchant_slots);

    let set = if rarity.can_be_set() && rng.gen::<f64>() < loot.set_chance {
        GAME_SETS.choose(rng)
    } else {
        None
    };

    let base_stat = roll_base_stat(slot, level, rng);
    let stats: Vec<ItemStat> = (0..affix_count).map(|_| roll_affix(level, rarity, rng)).collect();

    let base_name = base_item_names(slot).choose(rng).copied().unwrap_or("未知物品");
    let name = match set {
        Some(set) => format!("{}{}", set.name_prefix(), base_name),
        None => {
            let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("");
            format!("{}的{}", adjective, base_name)
        }
    };

    Item {
        id: ItemId(random_id(rng)),
        name,
        kind: ItemKind::Equipment { slot },
        rarity,
        level,
        stats,
        base_stat,
        value: u64::from(level) * u64::from(affix_count + 1) * 20,
        set_id: set.map(|s| s.id.to_string()),
        is_locked: false,
        enchant_level: 0,
        max_enchant_slots,
        used_enchant_slots: 0,
    }
}
