//! Computed values derived from DerivedStats at combat time

use super::DerivedStats;

impl DerivedStats {
    /// Gauge fill speed: base speed scaled by attack speed
    pub fn effective_speed(&self) -> f64 {
        self.speed * (1.0 + self.attack_speed / 100.0)
    }

    /// HP restored each time the unit acts
    pub fn regen_per_action(&self) -> f64 {
        (self.hp_regen / 2.0).floor()
    }

    /// Crit damage multiplier (150% base)
    pub fn crit_multiplier(&self) -> f64 {
        1.5 + self.crit_damage / 100.0
    }
}
