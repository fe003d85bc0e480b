//! Prelude module for convenient imports
//!
//! ```rust
//! use idle_core::prelude::*;
//! ```

// Core types
pub use crate::entity::{Hero, Pet, Player};
pub use crate::item::{Item, ItemKind, ItemStat};
pub use crate::stat_block::DerivedStats;
pub use crate::types::{Attribute, EquipmentSlot, ItemId, PetId, Rarity, StatType};

// Session
pub use crate::session::{CommandError, GameSession, SystemClock};
pub use crate::storage::{FileStore, InMemoryStore, KeyValueStore};

// Combat
pub use crate::combat::{CombatOutcome, CombatScheduler, TickReport};
pub use crate::events::{EventLog, FloatingText};

// Config
pub use crate::config::{load_constants, GameConstants};
