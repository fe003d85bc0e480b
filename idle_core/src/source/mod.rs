//! StatSource - Trait and implementations for stat providers

mod attributes;
mod gear;
mod pet;
mod set_bonus;

pub use attributes::AttributeSource;
pub use gear::GearSource;
pub use pet::PetQualitySource;
pub use set_bonus::SetBonusSource;

use crate::stat_block::StatAccumulator;

/// Trait for anything that contributes stats to DerivedStats
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Priorities used by the pipeline:
    /// - Attributes: -100
    /// - Pet qualities: -50
    /// - Gear: 0
    /// - Set bonuses: 100
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}
