//! PetQualitySource - Level-scaled stats from a pet's rolled aptitudes

use crate::entity::PetQualities;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

pub struct PetQualitySource {
    pub level: u32,
    pub qualities: PetQualities,
}

impl PetQualitySource {
    pub fn new(level: u32, qualities: PetQualities) -> Self {
        PetQualitySource { level, qualities }
    }
}

impl StatSource for PetQualitySource {
    fn id(&self) -> &str {
        "pet_qualities"
    }

    fn priority(&self) -> i32 {
        -50 // After attributes, before anything percentage-based
    }

    fn apply(&self, acc: &mut StatAccumulator) {
        let level = self.level as f64;
        let q = &self.qualities;

        acc.stats.attack += ((10.0 + level * 5.0) * (q.atk as f64 / 1000.0) * q.grow).floor();
        acc.stats.max_hp += (level * 30.0 * (q.hp as f64 / 3000.0) * q.grow).floor();
        acc.stats.armor += (level * 2.0 * (q.def as f64 / 1000.0) * q.grow).floor();
        acc.stats.speed = q.spd as f64 / 1000.0;
    }
}
