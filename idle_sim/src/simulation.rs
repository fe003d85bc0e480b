//! Run tallies accumulated from tick reports

use idle_core::combat::{CombatOutcome, Side, TickReport};
use idle_core::progression::DropOutcome;

/// Totals over a headless run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub encounters: u64,
    pub victories: u64,
    pub defeats: u64,
    pub bosses: u64,
    pub damage_dealt: u64,
    pub damage_taken: u64,
    pub crits: u64,
    pub dodges: u64,
    pub gold: u64,
    pub exp: u64,
    pub items_kept: u64,
    pub items_sold: u64,
    /// Filled in by the caller as hints are drained
    pub floating_texts: u64,
}

impl RunSummary {
    pub fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        if report.spawned {
            self.encounters += 1;
        }

        self.damage_dealt += report.total_damage(Side::Ally);
        self.damage_taken += report.total_damage(Side::Enemy);
        self.crits += report.attacks.iter().filter(|a| a.is_crit).count() as u64;
        self.dodges += report.attacks.iter().filter(|a| a.dodged).count() as u64;

        match report.outcome {
            Some(CombatOutcome::Victory) => self.victories += 1,
            Some(CombatOutcome::Defeat) => self.defeats += 1,
            None => {}
        }

        if let Some(rewards) = &report.rewards {
            self.gold += rewards.gold;
            self.exp += rewards.exp;
            if rewards.boss_defeated {
                self.bosses += 1;
            }
            for drop in &rewards.drops {
                match drop {
                    DropOutcome::Kept { .. } => self.items_kept += 1,
                    DropOutcome::AutoSold { .. } => self.items_sold += 1,
                    DropOutcome::Discarded { .. } => {}
                }
            }
        }
    }

    /// Share of finished encounters that were won
    pub fn win_rate(&self) -> f64 {
        let finished = self.victories + self.defeats;
        if finished == 0 {
            return 0.0;
        }
        self.victories as f64 / finished as f64
    }
}
