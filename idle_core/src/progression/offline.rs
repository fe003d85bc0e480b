//! Offline catch-up - estimated minion kills while the game was closed

use super::grant_exp;
use crate::config::{OfflineConstants, ProgressionConstants};
use crate::entity::Player;
use crate::generator::Enemy;
use serde::{Deserialize, Serialize};

/// Rewards earned while away, before they are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineEstimate {
    pub kills: u64,
    pub gold: u64,
    pub exp: u64,
}

/// Summary shown to the player on return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineReport {
    pub elapsed_secs: u64,
    pub kills: u64,
    pub gold: u64,
    pub exp: u64,
    pub levels_gained: u32,
}

/// Estimate rewards for `elapsed_secs` spent on floor `floor_level`
///
/// Returns `None` for absences shorter than the minimum.
pub fn estimate_offline(elapsed_secs: u64, floor_level: u32, constants: &OfflineConstants) -> Option<OfflineEstimate> {
    if elapsed_secs < constants.min_elapsed_secs || constants.seconds_per_kill <= 0.0 {
        return None;
    }

    let kills = (elapsed_secs as f64 / constants.seconds_per_kill * constants.efficiency).floor() as u64;
    let minion = Enemy::new(String::new(), "", floor_level, false, String::new());

    Some(OfflineEstimate {
        kills,
        gold: kills * minion.gold_reward,
        exp: kills * minion.exp_reward,
    })
}

/// Estimate and credit offline rewards
pub fn apply_offline(
    player: &mut Player,
    elapsed_secs: u64,
    floor_level: u32,
    offline: &OfflineConstants,
    progression: &ProgressionConstants,
) -> Option<OfflineReport> {
    let estimate = estimate_offline(elapsed_secs, floor_level, offline)?;

    player.gold += estimate.gold;
    let levels_gained = grant_exp(player, estimate.exp, progression);

    tracing::info!(
        elapsed_secs,
        kills = estimate.kills,
        gold = estimate.gold,
        exp = estimate.exp,
        "applied offline progress"
    );

    Some(OfflineReport {
        elapsed_secs,
        kills: estimate.kills,
        gold: estimate.gold,
        exp: estimate.exp,
        levels_gained,
    })
}
