//! Progression - experience curve, level-ups and the reward ledger

mod offline;
mod rewards;

pub use offline::{apply_offline, estimate_offline, OfflineEstimate, OfflineReport};
pub use rewards::{grant_victory_rewards, store_drop, DropOutcome, VictoryReport};

use crate::config::ProgressionConstants;
use crate::entity::{Pet, Player};

/// Experience needed to advance from `level`
pub fn exp_threshold(level: u32, constants: &ProgressionConstants) -> u64 {
    (constants.exp_base * (level as f64).powf(constants.exp_exponent)).floor() as u64
}

/// Add shared party experience, levelling up as many times as it covers
///
/// Each level grants free points to the leader and raises every hero to the
/// party level. Returns the number of levels gained.
pub fn grant_exp(player: &mut Player, amount: u64, constants: &ProgressionConstants) -> u32 {
    player.current_exp += amount;

    let mut gained = 0;
    while player.level < constants.level_cap {
        let threshold = exp_threshold(player.level, constants);
        if player.current_exp < threshold {
            break;
        }
        player.current_exp -= threshold;
        player.level += 1;
        gained += 1;
        if let Some(leader) = player.leader_mut() {
            leader.base_stats.free_points += constants.points_per_level;
        }
    }

    player.max_exp = exp_threshold(player.level, constants);
    if gained > 0 {
        for hero in &mut player.heroes {
            hero.level = player.level;
        }
        tracing::info!(level = player.level, gained, "party levelled up");
    }
    gained
}

/// Pet experience follows the party curve, with points going to the pet
pub fn grant_pet_exp(pet: &mut Pet, amount: u64, constants: &ProgressionConstants) -> u32 {
    pet.exp += amount;

    let mut gained = 0;
    while pet.level < constants.level_cap {
        let threshold = exp_threshold(pet.level, constants);
        if pet.exp < threshold {
            break;
        }
        pet.exp -= threshold;
        pet.level += 1;
        pet.base_stats.free_points += constants.points_per_level;
        gained += 1;
    }
    gained
}
