//! Reward ledger - gold, experience, stones, drops and eggs after a victory

use super::{grant_exp, grant_pet_exp};
use crate::combat::CombatUnit;
use crate::config::GameConstants;
use crate::entity::Player;
use crate::events::{EventLog, FloatStyle, FloatTarget};
use crate::generator::generate_item;
use crate::item::Item;
use crate::types::{random_id, ItemId, Rarity};
use rand::Rng;

/// What happened to a dropped item
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Kept { name: String, rarity: Rarity },
    AutoSold { name: String, gold: u64 },
    Discarded { name: String },
}

/// Everything a victory granted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VictoryReport {
    pub gold: u64,
    pub exp: u64,
    pub levels_gained: u32,
    pub stones: u64,
    pub drops: Vec<DropOutcome>,
    pub egg: bool,
    pub boss_defeated: bool,
}

/// Put a drop into the inventory, honoring auto-sell and capacity
pub fn store_drop(player: &mut Player, item: Item, events: &mut EventLog) -> DropOutcome {
    let name = item.display_name();

    if item.slot().is_some() && player.is_auto_sell(item.rarity) {
        player.gold += item.value;
        events.system(format!("出售: {} (+{}G)", name, item.value));
        return DropOutcome::AutoSold { name, gold: item.value };
    }

    if player.is_inventory_full() {
        events.system(format!("背包已满，丢弃了 {}", name));
        return DropOutcome::Discarded { name };
    }

    let rarity = item.rarity;
    events.loot(format!("掉落: {}", name));
    events.float(format!("掉落: {}", name), FloatTarget::Party, FloatStyle::Loot);
    player.inventory.push(item);
    DropOutcome::Kept { name, rarity }
}

/// Apply the rewards of a won encounter to the player
pub fn grant_victory_rewards(
    player: &mut Player,
    defeated: &[CombatUnit],
    constants: &GameConstants,
    rng: &mut impl Rng,
    events: &mut EventLog,
) -> VictoryReport {
    let mut report = VictoryReport {
        gold: defeated.iter().map(|e| e.gold_reward).sum(),
        exp: defeated.iter().map(|e| e.exp_reward).sum(),
        boss_defeated: defeated.iter().any(|e| e.is_boss),
        ..VictoryReport::default()
    };

    player.gold += report.gold;
    events.float(format!("+{}G", report.gold), FloatTarget::Party, FloatStyle::Gold);
    events.float(format!("+{}Exp", report.exp), FloatTarget::Party, FloatStyle::Exp);

    report.levels_gained = grant_exp(player, report.exp, &constants.progression);
    if report.levels_gained > 0 {
        events.system(format!("升级! 等级 {}", player.level));
        events.float("Level Up!", FloatTarget::Party, FloatStyle::Exp);
    }

    let active: Vec<_> = player.active_pet_ids().cloned().collect();
    for pet_id in active {
        if let Some(pet) = player.pet_mut(&pet_id) {
            if grant_pet_exp(pet, report.exp, &constants.progression) > 0 {
                let message = format!("{} 升级到 {} 级", pet.name, pet.level);
                events.system(message);
            }
        }
    }

    let loot = &constants.loot;
    if report.boss_defeated {
        report.stones = rng.gen_range(loot.boss_stones_min..=loot.boss_stones_max.max(loot.boss_stones_min));
        player.enchant_stones += report.stones;
        events.loot(format!("掉落: 启灵石 x{}", report.stones));
        events.float(format!("启灵石 x{}", report.stones), FloatTarget::Party, FloatStyle::Loot);
    }

    for enemy in defeated {
        let chance = if enemy.is_boss {
            loot.boss_drop_chance
        } else {
            loot.minion_drop_chance
        };
        if rng.gen::<f64>() < chance {
            let item = generate_item(enemy.level, loot, rng);
            report.drops.push(store_drop(player, item, events));
        }
    }

    if report.boss_defeated && rng.gen::<f64>() < loot.egg_drop_chance {
        let egg = Item::pet_egg(ItemId(random_id(rng)), player.level);
        report.egg = matches!(store_drop(player, egg, events), DropOutcome::Kept { .. });
    }

    tracing::debug!(
        gold = report.gold,
        exp = report.exp,
        drops = report.drops.len(),
        "victory rewards granted"
    );
    report
}
