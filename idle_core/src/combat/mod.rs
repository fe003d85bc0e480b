//! Combat - ATB scheduling of ally and enemy units

mod result;
mod scheduler;
mod unit;

pub use result::{AttackEvent, CombatOutcome, TickReport};
pub use scheduler::{CombatPhase, CombatScheduler, FloorError, FloorProgress};
pub use unit::{CombatUnit, Side};
