//! Damage system - turning attacker and defender stats into a hit

mod calculation;

pub use calculation::{calculate_damage, resolve_hit, DamageRoll};
