//! Game constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConstants {
    pub enchant: EnchantConstants,
    pub combat: CombatConstants,
    pub progression: ProgressionConstants,
    pub loot: LootConstants,
    pub offline: OfflineConstants,
}

impl GameConstants {
    /// Check cross-field consistency that serde defaults cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.enchant.max_level as usize;
        if self.enchant.success_rates.len() < max {
            return Err(ConfigError::ValidationError(format!(
                "enchant.success_rates needs {} entries, found {}",
                max,
                self.enchant.success_rates.len()
            )));
        }
        if self.enchant.stat_multipliers.len() < max + 1 {
            return Err(ConfigError::ValidationError(format!(
                "enchant.stat_multipliers needs {} entries, found {}",
                max + 1,
                self.enchant.stat_multipliers.len()
            )));
        }
        if self.combat.gauge_threshold <= 0.0 {
            return Err(ConfigError::ValidationError(
                "combat.gauge_threshold must be positive".to_string(),
            ));
        }
        if self.combat.max_floor == 0 || self.progression.level_cap == 0 {
            return Err(ConfigError::ValidationError(
                "combat.max_floor and progression.level_cap must be at least 1".to_string(),
            ));
        }
        if self.loot.boss_stones_min > self.loot.boss_stones_max {
            return Err(ConfigError::ValidationError(
                "loot.boss_stones_min exceeds loot.boss_stones_max".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnchantConstants {
    /// Highest reachable enchant level
    #[serde(default = "default_max_level")]
    pub max_level: u32,
    /// Chance to advance from level `i` to `i + 1`
    #[serde(default = "default_success_rates")]
    pub success_rates: Vec<f64>,
    /// Stat multiplier at level `i`
    #[serde(default = "default_stat_multipliers")]
    pub stat_multipliers: Vec<f64>,
    /// Stones consumed per attempt
    #[serde(default = "default_cost_per_attempt")]
    pub cost_per_attempt: u64,
}

impl Default for EnchantConstants {
    fn default() -> Self {
        EnchantConstants {
            max_level: default_max_level(),
            success_rates: default_success_rates(),
            stat_multipliers: default_stat_multipliers(),
            cost_per_attempt: default_cost_per_attempt(),
        }
    }
}

impl EnchantConstants {
    /// Success probability for an attempt made at `level` (0 past the table)
    pub fn success_rate(&self, level: u32) -> f64 {
        self.success_rates.get(level as usize).copied().unwrap_or(0.0)
    }

    /// Stat multiplier for an item at `level`, clamped to the table
    pub fn multiplier(&self, level: u32) -> f64 {
        let index = level.min(self.max_level) as usize;
        self.stat_multipliers.get(index).copied().unwrap_or(1.0)
    }
}

fn default_max_level() -> u32 {
    10
}
fn default_success_rates() -> Vec<f64> {
    vec![1.0, 0.90, 0.80, 0.70, 0.60, 0.50, 0.40, 0.30, 0.20, 0.10]
}
fn default_stat_multipliers() -> Vec<f64> {
    vec![1.0, 1.1, 1.25, 1.45, 1.70, 2.0, 2.4, 2.9, 3.5, 4.5, 6.0]
}
fn default_cost_per_attempt() -> u64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConstants {
    /// Gauge value at which a unit acts
    pub gauge_threshold: f64,
    /// Gauge gained per tick at speed 1.0
    pub gauge_rate_per_tick: f64,
    /// Minion clears on a floor before the boss spawns
    pub boss_threshold: u32,
    /// Deepest floor
    pub max_floor: u32,
    /// Fraction of max HP restored to allies after a victory
    pub victory_heal_fraction: f64,
    /// Ticks spent searching after a victory
    pub victory_cooldown_ticks: u32,
    /// Ticks spent recovering after a defeat
    pub defeat_cooldown_ticks: u32,
    /// Damage dealt by allies in invincible mode
    pub invincible_damage: u64,
    /// Enemy critical strike chance (percent)
    pub enemy_crit_rate: f64,
    /// Enemy bonus critical damage (percent)
    pub enemy_crit_damage: f64,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            gauge_threshold: 100.0,
            gauge_rate_per_tick: 10.0,
            boss_threshold: 4,
            max_floor: 100,
            victory_heal_fraction: 0.3,
            victory_cooldown_ticks: 25,
            defeat_cooldown_ticks: 10,
            invincible_damage: 999_999,
            enemy_crit_rate: 5.0,
            enemy_crit_damage: 50.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConstants {
    pub level_cap: u32,
    /// threshold(level) = floor(exp_base * level ^ exp_exponent)
    pub exp_base: f64,
    pub exp_exponent: f64,
    /// Free attribute points granted per level gained
    pub points_per_level: u32,
}

impl Default for ProgressionConstants {
    fn default() -> Self {
        ProgressionConstants {
            level_cap: 100,
            exp_base: 100.0,
            exp_exponent: 2.2,
            points_per_level: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LootConstants {
    pub minion_drop_chance: f64,
    pub boss_drop_chance: f64,
    pub boss_stones_min: u64,
    pub boss_stones_max: u64,
    pub egg_drop_chance: f64,
    /// Chance for an eligible item to be set-bound
    pub set_chance: f64,
}

impl Default for LootConstants {
    fn default() -> Self {
        LootConstants {
            minion_drop_chance: 0.4,
            boss_drop_chance: 1.0,
            boss_stones_min: 1,
            boss_stones_max: 2,
            egg_drop_chance: 0.2,
            set_chance: 0.3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OfflineConstants {
    /// Absences shorter than this earn nothing
    pub min_elapsed_secs: u64,
    pub seconds_per_kill: f64,
    pub efficiency: f64,
}

impl Default for OfflineConstants {
    fn default() -> Self {
        OfflineConstants {
            min_elapsed_secs: 60,
            seconds_per_kill: 6.0,
            efficiency: 0.8,
        }
    }
}
