//! Damage calculation - crit roll, armor and damage reduction

use crate::defense::{armor_reduction, effective_armor};
use crate::stat_block::DerivedStats;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome of one attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Always at least 1
    pub damage: u64,
    pub is_crit: bool,
}

/// Roll crit and compute the damage of one attack
pub fn calculate_damage(
    attacker: &DerivedStats,
    defender: &DerivedStats,
    defender_level: u32,
    rng: &mut impl Rng,
) -> DamageRoll {
    let is_crit = rng.gen::<f64>() * 100.0 < attacker.crit_rate;
    resolve_hit(attacker, defender, defender_level, is_crit)
}

/// Damage of a hit whose crit outcome is already known
pub fn resolve_hit(
    attacker: &DerivedStats,
    defender: &DerivedStats,
    defender_level: u32,
    is_crit: bool,
) -> DamageRoll {
    let armor = effective_armor(defender.armor, attacker.armor_penetration);
    let reduction = armor_reduction(armor, defender_level);

    let raw = if is_crit {
        attacker.attack * attacker.crit_multiplier()
    } else {
        attacker.attack
    };

    let damage = raw * (1.0 - reduction) * (1.0 - defender.damage_reduction / 100.0);
    let damage = damage.floor().max(1.0) as u64;

    DamageRoll { damage, is_crit }
}
