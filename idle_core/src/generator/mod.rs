//! Procedural generation - items, enemy squads and pets

mod enemy;
mod item;
mod pet;
mod tables;

pub use enemy::{generate_enemies, Enemy, BOSS_REWARD_SCALE, BOSS_STAT_SCALE, MAX_SQUAD_SIZE};
pub use item::{generate_item, rarity_for_roll, RarityProfile, AFFIX_POOL};
pub use pet::generate_pet;
