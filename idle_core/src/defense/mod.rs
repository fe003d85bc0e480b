//! Defense system - Armor and dodge

mod armour;
mod dodge;

pub use armour::{armor_reduction, effective_armor};
pub use dodge::roll_dodge;

/// Defense calculation constants
pub mod constants {
    /// Per-level armor divisor: `reduction = armor / (armor + level * FACTOR)`
    pub const ARMOR_LEVEL_FACTOR: f64 = 15.0;
}
