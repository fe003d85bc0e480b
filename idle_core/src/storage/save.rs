//! Save layout - five independent keys, loaded with migration and fallbacks

use super::{KeyValueStore, Result};
use crate::combat::FloorProgress;
use crate::config::ProgressionConstants;
use crate::entity::{Hero, Player};
use crate::item::Item;
use crate::progression::exp_threshold;
use crate::types::EquipmentSlot;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub mod keys {
    pub const PLAYER: &str = "changhen_player";
    pub const CURRENT_FLOOR: &str = "changhen_currentLevel";
    pub const HIGHEST_FLOOR: &str = "changhen_highestLevel";
    pub const KILL_COUNT: &str = "changhen_killCount";
    pub const LAST_SAVE: &str = "changhen_lastSaveTime";
}

/// Everything that survives a restart
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SaveData {
    pub player: Player,
    pub floor: FloorProgress,
    /// Milliseconds since the Unix epoch
    pub last_save_ms: Option<u64>,
}

/// Load every key, falling back to defaults for anything missing or corrupt
pub fn load_save(store: &dyn KeyValueStore) -> SaveData {
    let defaults = FloorProgress::default();

    let player = read_raw(store, keys::PLAYER)
        .and_then(|raw| match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Some(migrate_player(value)),
            Err(e) => {
                tracing::warn!("Corrupted player save, starting fresh: {}", e);
                None
            }
        })
        .unwrap_or_default();

    let current = read_json(store, keys::CURRENT_FLOOR).unwrap_or(defaults.current).max(1);
    let highest = read_json(store, keys::HIGHEST_FLOOR).unwrap_or(defaults.highest).max(current);
    let kill_count = read_json(store, keys::KILL_COUNT).unwrap_or(defaults.kill_count);

    SaveData {
        player,
        floor: FloorProgress {
            current,
            highest,
            kill_count,
        },
        last_save_ms: read_json(store, keys::LAST_SAVE),
    }
}

/// Write every key
pub fn write_save(store: &dyn KeyValueStore, save: &SaveData) -> Result<()> {
    store.put(keys::PLAYER, &serde_json::to_string(&save.player)?)?;
    store.put(keys::CURRENT_FLOOR, &save.floor.current.to_string())?;
    store.put(keys::HIGHEST_FLOOR, &save.floor.highest.to_string())?;
    store.put(keys::KILL_COUNT, &save.floor.kill_count.to_string())?;
    if let Some(ms) = save.last_save_ms {
        store.put(keys::LAST_SAVE, &ms.to_string())?;
    }
    Ok(())
}

fn read_raw(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", key, e);
            None
        }
    }
}

fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = read_raw(store, key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Corrupted value for {}, using default: {}", key, e);
            None
        }
    }
}

/// Bring an older player document up to the current shape
///
/// Saves from before the party existed kept attributes and equipment at the
/// top level; those are wrapped into a single leader hero. Missing fields
/// take their defaults. A document that still cannot be read yields a fresh
/// player. An empty party gets its leader back, and `max_exp` is recomputed
/// from the stored level.
pub fn migrate_player(value: Value) -> Player {
    let value = match value {
        Value::Object(map) if !map.contains_key("heroes") => Value::Object(wrap_legacy_hero(map)),
        other => other,
    };

    let mut player: Player = serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::warn!("Unreadable player save, starting fresh: {}", e);
        Player::default()
    });
    repair_party(&mut player);
    player.max_exp = exp_threshold(player.level, &ProgressionConstants::default());
    player
}

/// The party always has a leader at index 0
fn repair_party(player: &mut Player) {
    if player.heroes.is_empty() {
        tracing::warn!("Save has no heroes, restoring the leader");
        let mut leader = Hero::leader();
        leader.level = player.level;
        player.heroes.push(leader);
    }
    for (idx, hero) in player.heroes.iter_mut().enumerate() {
        hero.is_leader = idx == 0;
    }
}

fn wrap_legacy_hero(mut map: Map<String, Value>) -> Map<String, Value> {
    let base_stats = map.remove("baseStats").or_else(|| map.remove("base_stats"));
    let equipment = map.remove("equipment");
    if base_stats.is_none() && equipment.is_none() {
        return map;
    }

    let mut hero = Hero::leader();
    if let Some(stats) = base_stats.and_then(|v| serde_json::from_value(v).ok()) {
        hero.base_stats = stats;
    }
    if let Some(Value::Object(slots)) = equipment {
        for (slot, item) in slots {
            let parsed = serde_json::from_value::<EquipmentSlot>(Value::String(slot.clone()))
                .ok()
                .zip(serde_json::from_value::<Item>(item).ok());
            match parsed {
                Some((slot, item)) => {
                    hero.equip(slot, item);
                }
                None => tracing::warn!("Dropping unreadable legacy item in slot {}", slot),
            }
        }
    }
    if let Some(level) = map.get("level").and_then(Value::as_u64) {
        hero.level = level as u32;
    }

    tracing::info!("Migrated single-hero save into a party");
    if let Ok(hero) = serde_json::to_value(hero) {
        map.insert("heroes".to_string(), Value::Array(vec![hero]));
    }
    map
}
