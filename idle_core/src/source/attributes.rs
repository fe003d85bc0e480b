//! AttributeSource - Stats from the five allocatable attributes

use crate::entity::BaseStats;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Linear attribute coefficients
pub struct AttributeSource {
    pub base: BaseStats,
}

impl AttributeSource {
    pub fn new(base: BaseStats) -> Self {
        AttributeSource { base }
    }
}

impl StatSource for AttributeSource {
    fn id(&self) -> &str {
        "attributes"
    }

    fn priority(&self) -> i32 {
        -100 // Attributes apply first
    }

    fn apply(&self, acc: &mut StatAccumulator) {
        let strength = self.base.strength as f64;
        let dexterity = self.base.dexterity as f64;
        let intelligence = self.base.intelligence as f64;
        let vitality = self.base.vitality as f64;
        let spirit = self.base.spirit as f64;
        let stats = &mut acc.stats;

        stats.attack += strength * 3.0;
        stats.crit_damage += strength * 0.5;

        stats.crit_rate += dexterity * 0.2;
        stats.dodge += dexterity * 0.1;
        stats.attack_speed += dexterity * 0.05;

        stats.attack += intelligence * 2.0;
        stats.damage_increase += intelligence * 0.2;

        stats.max_hp += vitality * 20.0;
        stats.hp_regen += vitality * 1.0;
        stats.damage_reduction += vitality * 0.05;

        stats.hp_regen += spirit * 1.5;
        stats.armor += spirit * 1.0;
        stats.armor_penetration += spirit * 0.2;
    }
}
