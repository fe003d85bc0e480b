//! Combat results - what one tick produced

use super::Side;
use crate::progression::VictoryReport;
use serde::{Deserialize, Serialize};

/// One resolved action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackEvent {
    pub attacker_id: String,
    pub attacker_side: Side,
    pub target_id: String,
    /// Zero when dodged or blocked by invincibility
    pub damage: u64,
    pub is_crit: bool,
    pub dodged: bool,
    /// HP regained by the attacker (lifesteal plus regeneration)
    pub healed: u64,
    pub is_killing_blow: bool,
}

/// How an encounter ended. Exactly one per encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// Everything that happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// A new squad appeared this tick
    pub spawned: bool,
    pub attacks: Vec<AttackEvent>,
    pub outcome: Option<CombatOutcome>,
    pub rewards: Option<VictoryReport>,
}

impl TickReport {
    /// Whether the tick changed any state worth saving
    pub fn changed_state(&self) -> bool {
        self.spawned || !self.attacks.is_empty() || self.outcome.is_some()
    }

    pub fn total_damage(&self, side: Side) -> u64 {
        self.attacks
            .iter()
            .filter(|a| a.attacker_side == side)
            .map(|a| a.damage)
            .sum()
    }
}
