//! Stat derivation - Flattened combat stats from attributes, gear and sets

mod aggregator;
mod computed;

pub use aggregator::{StatAccumulator, CRIT_RATE_CAP, DAMAGE_REDUCTION_CAP, DODGE_CAP};

use crate::config::EnchantConstants;
use crate::entity::{BaseStats, Hero, Pet};
use crate::item::{set_by_id, Item};
use crate::source::{AttributeSource, GearSource, PetQualitySource, SetBonusSource, StatSource};
use crate::types::EquipmentSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final combat stats. Never persisted; recomputed from the sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    // === Pools ===
    pub attack: f64,
    pub armor: f64,
    pub hp: f64,
    pub max_hp: f64,

    // === Offense ===
    pub crit_rate: f64,
    pub crit_damage: f64,
    pub armor_penetration: f64,
    pub damage_increase: f64,
    pub attack_speed: f64,
    pub speed: f64,

    // === Defense ===
    pub dodge: f64,
    pub damage_reduction: f64,

    // === Recovery ===
    pub hp_regen: f64,
    pub lifesteal: f64,
}

impl DerivedStats {
    /// Starting values before any source applies
    pub fn base() -> Self {
        DerivedStats {
            attack: 0.0,
            armor: 0.0,
            hp: 100.0,
            max_hp: 100.0,
            crit_rate: 5.0,
            crit_damage: 0.0,
            armor_penetration: 0.0,
            damage_increase: 0.0,
            attack_speed: 0.0,
            speed: 1.0,
            dodge: 0.0,
            damage_reduction: 0.0,
            hp_regen: 0.0,
            lifesteal: 0.0,
        }
    }
}

impl Default for DerivedStats {
    fn default() -> Self {
        Self::base()
    }
}

/// Run sources in priority order (stable, so equal priorities keep their order)
pub fn derive_from_sources(sources: &[Box<dyn StatSource + '_>], strength: u32) -> DerivedStats {
    let mut accumulator = StatAccumulator::new();

    let mut sorted_sources: Vec<_> = sources.iter().collect();
    sorted_sources.sort_by_key(|s| s.priority());

    for source in sorted_sources {
        source.apply(&mut accumulator);
    }

    accumulator.finish(strength)
}

/// Derive stats from attributes and worn equipment
///
/// Pure: the same inputs always produce the same stats.
pub fn derive_stats(
    base: &BaseStats,
    equipment: &BTreeMap<EquipmentSlot, Item>,
    enchant: &EnchantConstants,
) -> DerivedStats {
    let mut sources: Vec<Box<dyn StatSource + '_>> = vec![Box::new(AttributeSource::new(*base))];

    // BTreeMap iteration keeps slot order
    for (slot, item) in equipment {
        sources.push(Box::new(GearSource::new(*slot, item, enchant)));
    }

    for source in set_sources(equipment) {
        sources.push(Box::new(source));
    }

    derive_from_sources(&sources, base.strength)
}

pub fn derive_hero_stats(hero: &Hero, enchant: &EnchantConstants) -> DerivedStats {
    derive_stats(&hero.base_stats, &hero.equipment, enchant)
}

/// Pets have no equipment; their aptitudes stand in for gear
pub fn derive_pet_stats(pet: &Pet) -> DerivedStats {
    let sources: Vec<Box<dyn StatSource>> = vec![
        Box::new(AttributeSource::new(pet.base_stats)),
        Box::new(PetQualitySource::new(pet.level, pet.qualities)),
    ];
    derive_from_sources(&sources, pet.base_stats.strength)
}

fn set_sources(equipment: &BTreeMap<EquipmentSlot, Item>) -> Vec<SetBonusSource> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for set_id in equipment.values().filter_map(|i| i.set_id.as_deref()) {
        *counts.entry(set_id).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter_map(|(id, count)| set_by_id(id).map(|set| SetBonusSource::new(set, count)))
        .collect()
}
