//! Game session - owns the player aggregate and routes every command
//!
//! Commands either succeed, after which ally snapshots are rebuilt and the
//! save is written, or fail with a [`CommandError`] that leaves state
//! untouched and is echoed to the event log.

use crate::combat::{CombatScheduler, FloorError, FloorProgress, TickReport};
use crate::config::GameConstants;
use crate::entity::Player;
use crate::events::{EventLog, FloatingText};
use crate::generator::generate_pet;
use crate::item::{attempt_enchant, EnchantError, EnchantOutcome};
use crate::progression::{apply_offline, exp_threshold, OfflineReport};
use crate::storage::{load_save, write_save, KeyValueStore, SaveData, StorageError};
use crate::types::{Attribute, ItemId, PetId, Rarity};
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Wall-clock source, in milliseconds since the Unix epoch
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Why a command was refused
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("没有可分配的属性点")]
    NoFreePoints,

    #[error("队伍中没有第 {0} 位英雄")]
    HeroNotFound(usize),

    #[error("找不到物品 {0}")]
    ItemNotFound(ItemId),

    #[error("找不到宠物 {0}")]
    PetNotFound(PetId),

    #[error("{0} 无法装备")]
    NotEquipment(String),

    #[error("{0} 不是宠物蛋")]
    NotAnEgg(String),

    #[error("{0} 已锁定")]
    Locked(String),

    #[error("{0} 正在装备中, 请先卸下")]
    Equipped(String),

    #[error("背包已满")]
    InventoryFull,

    #[error("重置需要确认")]
    ResetNotConfirmed,

    #[error(transparent)]
    Enchant(#[from] EnchantError),

    #[error(transparent)]
    Floor(#[from] FloorError),

    #[error("存档失败: {0}")]
    Storage(#[from] StorageError),
}

/// Result of selling every unlocked item of one rarity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSale {
    pub count: usize,
    pub gold: u64,
}

/// One player's running game
pub struct GameSession<R: Rng> {
    player: Player,
    scheduler: CombatScheduler,
    events: EventLog,
    constants: GameConstants,
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    rng: R,
    offline: Option<OfflineReport>,
}

impl<R: Rng> GameSession<R> {
    /// Load the save, credit time spent away and prepare the party
    pub fn open(
        store: Box<dyn KeyValueStore>,
        clock: Box<dyn Clock>,
        constants: GameConstants,
        rng: R,
    ) -> Self {
        let save = load_save(store.as_ref());
        let now = clock.now_ms();

        let mut session = GameSession {
            player: save.player,
            scheduler: CombatScheduler::new(save.floor),
            events: EventLog::new(),
            constants,
            store,
            clock,
            rng,
            offline: None,
        };
        session.events.stamp(now);
        session.player.max_exp = exp_threshold(session.player.level, &session.constants.progression);

        if let Some(last) = save.last_save_ms {
            let elapsed_secs = now.saturating_sub(last) / 1000;
            session.offline = apply_offline(
                &mut session.player,
                elapsed_secs,
                save.floor.current,
                &session.constants.offline,
                &session.constants.progression,
            );
        }
        if let Some(report) = session.offline {
            session.events.system(format!(
                "离线 {} 分钟: 击败 {} 个敌人, +{}G, +{}Exp",
                report.elapsed_secs / 60,
                report.kills,
                report.gold,
                report.exp
            ));
        }

        session.scheduler.refresh_allies(&session.player, &session.constants);
        session.persist();
        tracing::info!(
            level = session.player.level,
            floor = save.floor.current,
            "session opened"
        );
        session
    }

    // === Views ===

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn scheduler(&self) -> &CombatScheduler {
        &self.scheduler
    }

    pub fn floor(&self) -> FloorProgress {
        self.scheduler.floor()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Hand pending floating texts to the presentation layer
    pub fn drain_floating(&mut self) -> Vec<FloatingText> {
        self.events.drain_floating()
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    /// Rewards credited for the absence before this session opened
    pub fn offline_report(&self) -> Option<&OfflineReport> {
        self.offline.as_ref()
    }

    // === Persistence ===

    /// Write the full save now
    pub fn save(&self) -> Result<(), StorageError> {
        let save = SaveData {
            player: self.player.clone(),
            floor: self.scheduler.floor(),
            last_save_ms: Some(self.clock.now_ms()),
        };
        write_save(self.store.as_ref(), &save)
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            tracing::warn!("Failed to save game: {}", e);
            self.events.system(format!("保存失败: {}", e));
        }
    }

    /// Run a command: refresh and save on success, log on refusal
    fn run<T>(
        &mut self,
        command: impl FnOnce(&mut Self) -> Result<T, CommandError>,
    ) -> Result<T, CommandError> {
        self.events.stamp(self.clock.now_ms());
        match command(self) {
            Ok(value) => {
                self.scheduler.refresh_allies(&self.player, &self.constants);
                self.persist();
                Ok(value)
            }
            Err(e) => {
                tracing::debug!(error = %e, "command rejected");
                self.events.system(e.to_string());
                Err(e)
            }
        }
    }

    // === Tick ===

    /// Advance combat by one tick, saving when anything persistent moved
    pub fn tick(&mut self) -> TickReport {
        self.events.stamp(self.clock.now_ms());
        let report = self.scheduler.tick(
            &mut self.player,
            &self.constants,
            &mut self.rng,
            &mut self.events,
        );
        if report.outcome.is_some() {
            self.persist();
        }
        report
    }

    // === Attributes ===

    pub fn allocate_point(&mut self, hero: usize, attribute: Attribute) -> Result<(), CommandError> {
        self.run(|s| {
            let hero = s.player.heroes.get_mut(hero).ok_or(CommandError::HeroNotFound(hero))?;
            if !hero.base_stats.allocate(attribute) {
                return Err(CommandError::NoFreePoints);
            }
            Ok(())
        })
    }

    pub fn allocate_pet_point(&mut self, pet_id: &PetId, attribute: Attribute) -> Result<(), CommandError> {
        self.run(|s| {
            let pet = s
                .player
                .pet_mut(pet_id)
                .ok_or_else(|| CommandError::PetNotFound(pet_id.clone()))?;
            if !pet.base_stats.allocate(attribute) {
                return Err(CommandError::NoFreePoints);
            }
            Ok(())
        })
    }

    // === Equipment ===

    /// Move an inventory item onto a hero, returning the displaced item's id
    pub fn equip(&mut self, hero: usize, item_id: &ItemId) -> Result<Option<ItemId>, CommandError> {
        self.run(|s| {
            if hero >= s.player.heroes.len() {
                return Err(CommandError::HeroNotFound(hero));
            }
            let idx = s
                .player
                .inventory_index(item_id)
                .ok_or_else(|| CommandError::ItemNotFound(item_id.clone()))?;
            let slot = s.player.inventory[idx]
                .slot()
                .ok_or_else(|| CommandError::NotEquipment(s.player.inventory[idx].display_name()))?;

            let item = s.player.inventory.remove(idx);
            s.events.system(format!("装备了 {}", item.display_name()));
            let displaced = s.player.heroes[hero].equip(slot, item);
            Ok(displaced.map(|old| {
                let id = old.id.clone();
                s.player.inventory.push(old);
                id
            }))
        })
    }

    pub fn unequip(&mut self, item_id: &ItemId) -> Result<(), CommandError> {
        self.run(|s| {
            let wearer = s
                .player
                .wearer_of(item_id)
                .ok_or_else(|| CommandError::ItemNotFound(item_id.clone()))?;
            if s.player.is_inventory_full() {
                return Err(CommandError::InventoryFull);
            }
            let hero = &mut s.player.heroes[wearer];
            let item = hero
                .slot_of(item_id)
                .and_then(|slot| hero.unequip(slot))
                .ok_or_else(|| CommandError::ItemNotFound(item_id.clone()))?;
            s.events.system(format!("卸下了 {}", item.display_name()));
            s.player.inventory.push(item);
            Ok(())
        })
    }

    // === Inventory ===

    /// Sell an unlocked inventory item, returning the gold gained
    pub fn sell(&mut self, item_id: &ItemId) -> Result<u64, CommandError> {
        self.run(|s| {
            let Some(idx) = s.player.inventory_index(item_id) else {
                return Err(match s.player.find_item(item_id) {
                    Some(item) => CommandError::Equipped(item.display_name()),
                    None => CommandError::ItemNotFound(item_id.clone()),
                });
            };
            if s.player.inventory[idx].is_locked {
                return Err(CommandError::Locked(s.player.inventory[idx].display_name()));
            }

            let item = s.player.inventory.remove(idx);
            s.player.gold += item.value;
            s.events.system(format!("出售: {} (+{}G)", item.display_name(), item.value));
            Ok(item.value)
        })
    }

    /// Flip an item's lock, wherever it lives. Returns the new state.
    pub fn toggle_lock(&mut self, item_id: &ItemId) -> Result<bool, CommandError> {
        self.run(|s| {
            let item = s
                .player
                .find_item_mut(item_id)
                .ok_or_else(|| CommandError::ItemNotFound(item_id.clone()))?;
            item.is_locked = !item.is_locked;
            Ok(item.is_locked)
        })
    }

    pub fn enchant(&mut self, item_id: &ItemId) -> Result<EnchantOutcome, CommandError> {
        self.run(|s| {
            let mut stones = s.player.enchant_stones;
            let item = s
                .player
                .find_item_mut(item_id)
                .ok_or_else(|| CommandError::ItemNotFound(item_id.clone()))?;
            let outcome = attempt_enchant(item, &mut stones, &s.constants.enchant, &mut s.rng)?;
            let message = match outcome {
                EnchantOutcome::Success { new_level } => format!("强化成功! {} 达到 +{}", item.name, new_level),
                EnchantOutcome::Failure { .. } => format!("强化失败: {}", item.name),
            };
            tracing::debug!(item = %item_id, ?outcome, "enchant attempted");
            s.player.enchant_stones = stones;
            s.events.system(message);
            Ok(outcome)
        })
    }

    /// Flip auto-sell for a rarity. Returns the new state.
    pub fn toggle_auto_sell(&mut self, rarity: Rarity) -> Result<bool, CommandError> {
        self.run(|s| {
            let enabled = !s.player.is_auto_sell(rarity);
            s.player.auto_sell.insert(rarity, enabled);
            Ok(enabled)
        })
    }

    /// Sell every unlocked piece of equipment of `rarity` in the inventory
    pub fn batch_sell(&mut self, rarity: Rarity) -> Result<BatchSale, CommandError> {
        self.run(|s| {
            let mut sale = BatchSale::default();
            s.player.inventory.retain(|item| {
                let sell = item.rarity == rarity && !item.is_locked && item.slot().is_some();
                if sell {
                    sale.count += 1;
                    sale.gold += item.value;
                }
                !sell
            });
            s.player.gold += sale.gold;
            if sale.count > 0 {
                s.events
                    .system(format!("批量出售 {} 件 {} 物品, +{}G", sale.count, rarity, sale.gold));
            }
            Ok(sale)
        })
    }

    // === Pets ===

    /// Consume an egg and add the hatched pet to the collection
    pub fn hatch_egg(&mut self, item_id: &ItemId) -> Result<PetId, CommandError> {
        self.run(|s| {
            let idx = s
                .player
                .inventory_index(item_id)
                .ok_or_else(|| CommandError::ItemNotFound(item_id.clone()))?;
            if !s.player.inventory[idx].is_pet_egg() {
                return Err(CommandError::NotAnEgg(s.player.inventory[idx].display_name()));
            }

            s.player.inventory.remove(idx);
            let pet = generate_pet(s.player.level, &mut s.rng);
            let id = pet.id.clone();
            s.events.system(format!("孵化出了 {}!", pet.name));
            tracing::info!(pet = %id, breed = %pet.breed_id, "egg hatched");
            s.player.pets.push(pet);
            Ok(id)
        })
    }

    /// Bind a pet to a hero, or clear the binding with `None`
    ///
    /// A pet follows one hero at a time; any other binding is released.
    pub fn set_active_pet(&mut self, hero: usize, pet_id: Option<&PetId>) -> Result<(), CommandError> {
        self.run(|s| {
            if hero >= s.player.heroes.len() {
                return Err(CommandError::HeroNotFound(hero));
            }
            if let Some(id) = pet_id {
                if s.player.pet(id).is_none() {
                    return Err(CommandError::PetNotFound(id.clone()));
                }
                for other in &mut s.player.heroes {
                    if other.active_pet_id.as_ref() == Some(id) {
                        other.active_pet_id = None;
                    }
                }
            }
            s.player.heroes[hero].active_pet_id = pet_id.cloned();
            Ok(())
        })
    }

    // === Floors and switches ===

    pub fn change_floor(&mut self, delta: i32) -> Result<u32, CommandError> {
        self.run(|s| {
            let floor = s.scheduler.change_floor(delta)?;
            s.events.system(format!("进入第 {} 层", floor));
            Ok(floor)
        })
    }

    pub fn toggle_invincible(&mut self) -> bool {
        let enabled = self.scheduler.toggle_invincible();
        self.events.system(if enabled { "无敌模式: 开" } else { "无敌模式: 关" });
        enabled
    }

    pub fn set_auto_battle(&mut self, enabled: bool) {
        self.scheduler.set_auto_battle(enabled);
    }

    /// Wipe the store and start over
    pub fn reset_all_data(&mut self, confirmed: bool) -> Result<(), CommandError> {
        self.run(|s| {
            if !confirmed {
                return Err(CommandError::ResetNotConfirmed);
            }
            s.store.clear()?;
            s.player = Player::default();
            s.scheduler = CombatScheduler::default();
            s.events.clear();
            s.offline = None;
            tracing::warn!("all game data reset");
            s.events.system("游戏数据已重置");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Hero;
    use crate::item::test_support::equipment;
    use crate::item::Item;
    use crate::storage::{keys, InMemoryStore};
    use crate::types::EquipmentSlot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            self.0
        }
    }

    const NOW: u64 = 1_700_000_000_000;

    fn open_with(store: Arc<InMemoryStore>, now: u64) -> GameSession<StdRng> {
        GameSession::open(
            Box::new(store),
            Box::new(FixedClock(now)),
            GameConstants::default(),
            StdRng::seed_from_u64(9),
        )
    }

    fn session() -> (GameSession<StdRng>, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (open_with(Arc::clone(&store), NOW), store)
    }

    #[test]
    fn test_open_writes_an_initial_save() {
        let (session, store) = session();
        assert!(store.get(keys::PLAYER).unwrap().is_some());
        assert_eq!(store.get(keys::LAST_SAVE).unwrap(), Some(NOW.to_string()));
        assert!(session.offline_report().is_none());
        assert_eq!(session.scheduler().allies().len(), 1);
    }

    #[test]
    fn test_offline_rewards_on_reopen() {
        let (session, store) = session();
        drop(session);

        let reopened = open_with(store, NOW + 3_600_000);
        let report = reopened.offline_report().unwrap();
        assert_eq!(report.kills, 480);
        assert_eq!(reopened.player().gold, report.gold);
        assert!(reopened.events().latest().unwrap().message.contains("480"));
    }

    #[test]
    fn test_empty_party_save_still_plays() {
        let store = Arc::new(InMemoryStore::new());
        store.put(keys::PLAYER, r#"{"gold":50,"heroes":[]}"#).unwrap();

        let mut session = open_with(Arc::clone(&store), NOW);
        assert_eq!(session.player().gold, 50);
        assert_eq!(session.scheduler().allies().len(), 1);
        assert!((0..500).any(|_| session.tick().spawned));
        assert!(session.allocate_point(0, Attribute::Strength).is_ok());
    }

    #[test]
    fn test_allocate_point_and_reject_without_points() {
        let (mut session, _) = session();
        session.player.heroes[0].base_stats.free_points = 1;

        session.allocate_point(0, Attribute::Strength).unwrap();
        assert_eq!(session.player().heroes[0].base_stats.strength, 6);

        let before = session.player().clone();
        let err = session.allocate_point(0, Attribute::Strength).unwrap_err();
        assert!(matches!(err, CommandError::NoFreePoints));
        assert_eq!(session.player(), &before);
        assert_eq!(session.events().latest().unwrap().message, "没有可分配的属性点");
    }

    #[test]
    fn test_equip_swaps_displaced_item_back() {
        let (mut session, _) = session();
        session.player.inventory.push(equipment("old", EquipmentSlot::Weapon, Some(10), vec![]));
        session.player.inventory.push(equipment("new", EquipmentSlot::Weapon, Some(20), vec![]));

        assert_eq!(session.equip(0, &"old".into()).unwrap(), None);
        let attack_with_old = session.scheduler().allies()[0].stats.attack;
        let displaced = session.equip(0, &"new".into()).unwrap();
        assert_eq!(displaced, Some("old".into()));

        let player = session.player();
        assert_eq!(player.inventory.len(), 1);
        assert_eq!(player.inventory[0].id, "old".into());
        assert_eq!(player.heroes[0].equipped(EquipmentSlot::Weapon).unwrap().id, "new".into());
        assert!(session.scheduler().allies()[0].stats.attack > attack_with_old);
    }

    #[test]
    fn test_unequip_needs_inventory_room() {
        let (mut session, _) = session();
        session.player.inventory.push(equipment("cap", EquipmentSlot::Helmet, Some(5), vec![]));
        session.equip(0, &"cap".into()).unwrap();
        session.player.max_inventory_size = 0;

        assert!(matches!(session.unequip(&"cap".into()), Err(CommandError::InventoryFull)));
        assert!(session.player().heroes[0].equipped(EquipmentSlot::Helmet).is_some());

        session.player.max_inventory_size = 10;
        session.unequip(&"cap".into()).unwrap();
        assert_eq!(session.player().inventory.len(), 1);
    }

    #[test]
    fn test_sell_respects_lock_and_equipment() {
        let (mut session, _) = session();
        session.player.inventory.push(equipment("ring", EquipmentSlot::Ring1, None, vec![]));
        session.player.inventory.push(equipment("belt", EquipmentSlot::Amulet, None, vec![]));
        session.equip(0, &"belt".into()).unwrap();

        assert!(session.toggle_lock(&"ring".into()).unwrap());
        assert!(matches!(session.sell(&"ring".into()), Err(CommandError::Locked(_))));
        assert!(matches!(session.sell(&"belt".into()), Err(CommandError::Equipped(_))));
        assert!(matches!(session.sell(&"nope".into()), Err(CommandError::ItemNotFound(_))));

        assert!(!session.toggle_lock(&"ring".into()).unwrap());
        let value = session.sell(&"ring".into()).unwrap();
        assert_eq!(session.player().gold, value);
        assert!(session.player().inventory.is_empty());
    }

    #[test]
    fn test_batch_sell_skips_locked_and_eggs() {
        let (mut session, _) = session();
        let mut locked = equipment("a", EquipmentSlot::Boots, None, vec![]);
        locked.is_locked = true;
        session.player.inventory.push(locked);
        session.player.inventory.push(equipment("b", EquipmentSlot::Boots, None, vec![]));
        session.player.inventory.push(equipment("c", EquipmentSlot::Gloves, None, vec![]));
        let mut egg = Item::pet_egg("egg".into(), 1);
        egg.rarity = Rarity::Common;
        session.player.inventory.push(egg);

        let sale = session.batch_sell(Rarity::Common).unwrap();
        assert_eq!(sale.count, 2);
        assert_eq!(session.player().gold, sale.gold);
        assert_eq!(session.player().inventory.len(), 2);
    }

    #[test]
    fn test_enchant_refusal_consumes_nothing() {
        let (mut session, _) = session();
        let mut sword = equipment("sword", EquipmentSlot::Weapon, Some(10), vec![]);
        sword.max_enchant_slots = 3;
        session.player.inventory.push(sword);

        let err = session.enchant(&"sword".into()).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Enchant(EnchantError::InsufficientStones { have: 0, need: 1 })
        ));
        assert_eq!(session.player().inventory[0].used_enchant_slots, 0);

        session.player.enchant_stones = 1;
        session.enchant(&"sword".into()).unwrap();
        assert_eq!(session.player().enchant_stones, 0);
        assert_eq!(session.player().inventory[0].used_enchant_slots, 1);
    }

    #[test]
    fn test_hatch_egg_adds_a_pet() {
        let (mut session, _) = session();
        session.player.inventory.push(Item::pet_egg("egg".into(), 1));
        session.player.inventory.push(equipment("boots", EquipmentSlot::Boots, None, vec![]));

        assert!(matches!(session.hatch_egg(&"boots".into()), Err(CommandError::NotAnEgg(_))));
        let pet_id = session.hatch_egg(&"egg".into()).unwrap();
        assert_eq!(session.player().pets.len(), 1);
        assert_eq!(session.player().pets[0].id, pet_id);
        assert_eq!(session.player().inventory.len(), 1);
    }

    #[test]
    fn test_active_pet_moves_between_heroes() {
        let (mut session, _) = session();
        session.player.heroes.push(Hero {
            id: "hero_2".to_string(),
            is_leader: false,
            ..Hero::leader()
        });
        session.player.inventory.push(Item::pet_egg("egg".into(), 1));
        let pet_id = session.hatch_egg(&"egg".into()).unwrap();

        session.set_active_pet(0, Some(&pet_id)).unwrap();
        assert_eq!(session.scheduler().allies().len(), 3);
        assert!(session.scheduler().allies()[1].is_pet);

        session.set_active_pet(1, Some(&pet_id)).unwrap();
        assert_eq!(session.player().heroes[0].active_pet_id, None);
        assert_eq!(session.player().heroes[1].active_pet_id, Some(pet_id.clone()));

        let missing = PetId::from("ghost");
        assert!(matches!(
            session.set_active_pet(0, Some(&missing)),
            Err(CommandError::PetNotFound(_))
        ));
    }

    #[test]
    fn test_pet_points_and_auto_sell_toggle() {
        let (mut session, _) = session();
        session.player.inventory.push(Item::pet_egg("egg".into(), 1));
        let pet_id = session.hatch_egg(&"egg".into()).unwrap();

        assert!(matches!(
            session.allocate_pet_point(&pet_id, Attribute::Vitality),
            Err(CommandError::NoFreePoints)
        ));
        session.player.pets[0].base_stats.free_points = 1;
        session.allocate_pet_point(&pet_id, Attribute::Vitality).unwrap();
        assert_eq!(session.player().pets[0].base_stats.vitality, 1);

        assert!(session.toggle_auto_sell(Rarity::Magic).unwrap());
        assert!(session.player().is_auto_sell(Rarity::Magic));
        assert!(!session.toggle_auto_sell(Rarity::Magic).unwrap());
    }

    #[test]
    fn test_switches_and_floating_text() {
        let (mut session, _) = session();
        assert!(!session.scheduler().is_invincible());
        assert!(session.toggle_invincible());
        assert!(session.scheduler().is_invincible());

        session.set_auto_battle(false);
        assert!(!session.scheduler().is_auto_battle());
        session.set_auto_battle(true);

        for _ in 0..200 {
            session.tick();
        }
        assert!(!session.drain_floating().is_empty());
        assert!(session.drain_floating().is_empty());
    }

    #[test]
    fn test_change_floor_bounds() {
        let (mut session, _) = session();
        assert!(matches!(session.change_floor(1), Err(CommandError::Floor(_))));
        assert!(matches!(session.change_floor(-1), Err(CommandError::Floor(_))));
        assert_eq!(session.floor().current, 1);
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let (mut session, store) = session();
        session.player.gold = 500;

        assert!(matches!(session.reset_all_data(false), Err(CommandError::ResetNotConfirmed)));
        assert_eq!(session.player().gold, 500);

        session.reset_all_data(true).unwrap();
        assert_eq!(session.player(), &Player::default());
        assert_eq!(load_save(store.as_ref()).player.gold, 0);
    }

    #[test]
    fn test_ticks_reach_a_saved_outcome() {
        let (mut session, store) = session();
        session.toggle_invincible();

        let mut outcome = None;
        for _ in 0..2_000 {
            if let Some(o) = session.tick().outcome {
                outcome = Some(o);
                break;
            }
        }
        assert!(outcome.is_some());
        let saved = load_save(store.as_ref());
        assert_eq!(saved.player, *session.player());
        assert_eq!(saved.floor, session.floor());
    }

    #[test]
    fn test_auto_battle_off_ignores_ticks() {
        let (mut session, _) = session();
        session.set_auto_battle(false);
        for _ in 0..10 {
            assert!(!session.tick().changed_state());
        }
        assert!(session.scheduler().enemies().is_empty());
    }
}
