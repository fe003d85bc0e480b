//! idle_core - Combat and progression engine for an idle dungeon RPG
//!
//! This library provides:
//! - Stat derivation: attributes, gear, set bonuses and enchantment folded into DerivedStats
//! - Generators: rarity-weighted items, enemy squads and pets
//! - CombatScheduler: the ATB loop, victory/defeat and reward hand-off
//! - Progression: experience, level-ups, drops and offline catch-up
//! - GameSession: the command surface over a persisted player

pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod entity;
pub mod events;
pub mod generator;
pub mod item;
pub mod prelude;
pub mod progression;
pub mod session;
pub mod source;
pub mod stat_block;
pub mod storage;
pub mod types;

// Re-export core types for convenience
pub use combat::{CombatOutcome, CombatPhase, CombatScheduler, CombatUnit, FloorProgress, Side, TickReport};
pub use config::{load_constants, GameConstants};
pub use damage::{calculate_damage, DamageRoll};
pub use entity::{BaseStats, Hero, Pet, PetQualities, Player};
pub use events::{EventLog, FloatingText, LogEntry, LogKind};
pub use item::{attempt_enchant, EnchantError, EnchantOutcome, Item, ItemKind, ItemStat};
pub use session::{BatchSale, Clock, CommandError, GameSession, SystemClock};
pub use source::StatSource;
pub use stat_block::{derive_hero_stats, derive_pet_stats, DerivedStats, StatAccumulator};
pub use storage::{FileStore, InMemoryStore, KeyValueStore, StorageError};
pub use types::{Attribute, ConsumableKind, EquipmentSlot, ItemId, PetId, Rarity, StatType};
