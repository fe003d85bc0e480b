//! Enemy squad generation

use super::tables::{BOSS_NAMES, MINION_NAMES};
use crate::types::random_id;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MAX_SQUAD_SIZE: usize = 5;
/// Boss HP and attack multiplier
pub const BOSS_STAT_SCALE: f64 = 5.0;
/// Boss gold and exp multiplier
pub const BOSS_REWARD_SCALE: u64 = 10;

/// An enemy template produced for one encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub max_hp: u64,
    pub attack: u64,
    pub armor: u64,
    pub exp_reward: u64,
    pub gold_reward: u64,
    pub is_boss: bool,
    pub avatar_seed: String,
}

impl Enemy {
    /// Stats of a floor-`level` enemy; bosses are scaled
    pub fn new(id: String, name: &str, level: u32, is_boss: bool, avatar_seed: String) -> Self {
        let scale = if is_boss { BOSS_STAT_SCALE } else { 1.0 };
        let rewards = if is_boss { BOSS_REWARD_SCALE } else { 1 };
        let lvl = u64::from(level);

        Enemy {
            id,
            name: name.to_string(),
            level,
            max_hp: ((150.0 + level as f64 * 30.0) * scale).floor() as u64,
            attack: ((15.0 + level as f64 * 4.0) * scale).floor() as u64,
            armor: lvl * 3,
            exp_reward: (30 + lvl * 8) * rewards,
            gold_reward: (15 + lvl * 3) * rewards,
            is_boss,
            avatar_seed,
        }
    }
}

/// Roll an encounter for a floor
///
/// Squad size follows the party size by ±1 within `[1, 5]`; a boss
/// encounter is always a single boss.
pub fn generate_enemies(level: u32, party_size: usize, force_boss: bool, rng: &mut impl Rng) -> Vec<Enemy> {
    let count = if force_boss {
        1
    } else {
        let jitter: i64 = rng.gen_range(-1..=1);
        (party_size as i64 + jitter).clamp(1, MAX_SQUAD_SIZE as i64) as usize
    };

    (0..count)
        .map(|_| {
            let pool = if force_boss { BOSS_NAMES } else { MINION_NAMES };
            let name = pool.choose(rng).copied().unwrap_or("???");
            let avatar_seed = format!("{}-{}", name, rng.gen_range(1..=9999));
            Enemy::new(random_id(rng), name, level, force_boss, avatar_seed)
        })
        .collect()
}
