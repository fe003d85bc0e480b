//! SetBonusSource - Threshold bonuses from wearing several pieces of a set

use crate::item::GameSet;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

pub struct SetBonusSource {
    pub set: &'static GameSet,
    /// Pieces of the set currently worn
    pub count: u32,
}

impl SetBonusSource {
    pub fn new(set: &'static GameSet, count: u32) -> Self {
        SetBonusSource { set, count }
    }
}

impl StatSource for SetBonusSource {
    fn id(&self) -> &str {
        self.set.id
    }

    fn priority(&self) -> i32 {
        100 // After all gear
    }

    fn apply(&self, acc: &mut StatAccumulator) {
        for bonus in self.set.active_bonuses(self.count) {
            for stat in bonus.stats {
                acc.apply_stat(stat);
            }
        }
    }
}
