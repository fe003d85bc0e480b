//! StatAccumulator - Collects stat modifications before finalizing DerivedStats

use super::DerivedStats;
use crate::item::ItemStat;
use crate::types::StatType;

pub const CRIT_RATE_CAP: f64 = 80.0;
pub const DODGE_CAP: f64 = 75.0;
pub const DAMAGE_REDUCTION_CAP: f64 = 80.0;

/// Accumulates stat modifications from various sources
///
/// Sources mutate `stats` directly or through [`StatAccumulator::apply_stat`];
/// [`StatAccumulator::finish`] applies the final multipliers and caps.
#[derive(Debug, Clone)]
pub struct StatAccumulator {
    pub stats: DerivedStats,
}

impl Default for StatAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatAccumulator {
    pub fn new() -> Self {
        StatAccumulator {
            stats: DerivedStats::base(),
        }
    }

    /// Merge one stat line into the running totals
    ///
    /// Percentage lines on attack, armor and max HP multiply the running
    /// total (floored). Every other line is additive.
    pub fn apply_stat(&mut self, stat: &ItemStat) {
        if stat.is_percentage && stat.stat.scales_running_total() {
            let target = self.pool_mut(stat.stat);
            *target = (*target * (1.0 + stat.value / 100.0)).floor();
            return;
        }

        let s = &mut self.stats;
        match stat.stat {
            StatType::Attack => s.attack += stat.value,
            StatType::Armor => s.armor += stat.value,
            StatType::MaxHp => s.max_hp += stat.value,
            StatType::CritRate => s.crit_rate += stat.value,
            StatType::CritDamage => s.crit_damage += stat.value,
            StatType::Dodge => s.dodge += stat.value,
            StatType::HpRegen => s.hp_regen += stat.value,
            StatType::Lifesteal => s.lifesteal += stat.value,
            StatType::ArmorPenetration => s.armor_penetration += stat.value,
            StatType::AttackSpeed => s.attack_speed += stat.value,
            StatType::DamageReduction => s.damage_reduction += stat.value,
            StatType::DamageIncrease => s.damage_increase += stat.value,
        }
    }

    fn pool_mut(&mut self, stat: StatType) -> &mut f64 {
        match stat {
            StatType::Armor => &mut self.stats.armor,
            StatType::MaxHp => &mut self.stats.max_hp,
            _ => &mut self.stats.attack,
        }
    }

    /// Apply the strength and damage multipliers, caps, and fill HP
    pub fn finish(mut self, strength: u32) -> DerivedStats {
        let s = &mut self.stats;

        s.attack = (s.attack * (1.0 + strength as f64 / 100.0)).floor();
        s.attack = (s.attack * (1.0 + s.damage_increase / 100.0)).floor();

        s.crit_rate = s.crit_rate.min(CRIT_RATE_CAP);
        s.dodge = s.dodge.min(DODGE_CAP);
        s.damage_reduction = s.damage_reduction.min(DAMAGE_REDUCTION_CAP);

        s.hp = s.max_hp;
        self.stats
    }
}
