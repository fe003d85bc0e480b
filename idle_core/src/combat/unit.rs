//! CombatUnit - transient fighting state for heroes, pets and enemies

use crate::config::CombatConstants;
use crate::entity::{Hero, Pet};
use crate::generator::Enemy;
use crate::stat_block::DerivedStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Ally,
    Enemy,
}

/// One participant in an encounter. Rebuilt from the roster, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatUnit {
    pub id: String,
    pub name: String,
    pub side: Side,
    pub level: u32,

    // === Resources ===
    pub current_hp: f64,
    pub max_hp: f64,
    /// Frozen at spawn or at the last ally refresh
    pub stats: DerivedStats,

    // === ATB ===
    pub gauge: f64,

    // === Flags ===
    pub is_boss: bool,
    pub is_pet: bool,
    pub owner_id: Option<String>,

    // === Rewards (enemies only) ===
    pub gold_reward: u64,
    pub exp_reward: u64,
}

impl CombatUnit {
    fn ally(id: String, name: String, level: u32, stats: DerivedStats) -> Self {
        CombatUnit {
            id,
            name,
            side: Side::Ally,
            level,
            current_hp: stats.max_hp,
            max_hp: stats.max_hp,
            stats,
            gauge: 0.0,
            is_boss: false,
            is_pet: false,
            owner_id: None,
            gold_reward: 0,
            exp_reward: 0,
        }
    }

    pub fn from_hero(hero: &Hero, stats: DerivedStats) -> Self {
        Self::ally(hero.id.clone(), hero.name.clone(), hero.level, stats)
    }

    pub fn from_pet(pet: &Pet, owner: &Hero, stats: DerivedStats) -> Self {
        let mut unit = Self::ally(pet.id.0.clone(), pet.name.clone(), pet.level, stats);
        unit.is_pet = true;
        unit.owner_id = Some(owner.id.clone());
        unit
    }

    pub fn from_enemy(enemy: &Enemy, combat: &CombatConstants) -> Self {
        let stats = DerivedStats {
            attack: enemy.attack as f64,
            armor: enemy.armor as f64,
            hp: enemy.max_hp as f64,
            max_hp: enemy.max_hp as f64,
            crit_rate: combat.enemy_crit_rate,
            crit_damage: combat.enemy_crit_damage,
            ..DerivedStats::base()
        };
        CombatUnit {
            id: enemy.id.clone(),
            name: enemy.name.clone(),
            side: Side::Enemy,
            level: enemy.level,
            current_hp: stats.max_hp,
            max_hp: stats.max_hp,
            stats,
            gauge: 0.0,
            is_boss: enemy.is_boss,
            is_pet: false,
            owner_id: None,
            gold_reward: enemy.gold_reward,
            exp_reward: enemy.exp_reward,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0.0
    }

    /// Reduce HP, flooring at zero. Returns true on the killing blow.
    pub fn take_damage(&mut self, amount: u64) -> bool {
        let was_alive = self.is_alive();
        self.current_hp = (self.current_hp - amount as f64).max(0.0);
        was_alive && !self.is_alive()
    }

    /// Restore HP up to max, returning the amount actually healed
    pub fn heal(&mut self, amount: f64) -> f64 {
        let before = self.current_hp;
        self.current_hp = (self.current_hp + amount.max(0.0)).min(self.max_hp);
        self.current_hp - before
    }

    /// Gauge gained per tick
    pub fn gauge_gain(&self, rate_per_tick: f64) -> f64 {
        self.stats.effective_speed() * rate_per_tick
    }

    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp <= 0.0 {
            return 0.0;
        }
        self.current_hp / self.max_hp
    }
}
