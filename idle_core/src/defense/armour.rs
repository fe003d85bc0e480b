//! Armor - Damage reduction with diminishing returns against the defender's level

use super::constants::ARMOR_LEVEL_FACTOR;

/// Armor left after the attacker's penetration, never negative
pub fn effective_armor(armor: f64, penetration: f64) -> f64 {
    (armor - penetration).max(0.0)
}

/// Fraction of damage absorbed by armor
///
/// Uses `Reduction = Armor / (Armor + Level * 15)`, so the same armor is
/// worth less as the defender's level rises. A zero denominator (no armor
/// at level 0) absorbs nothing.
pub fn armor_reduction(effective_armor: f64, defender_level: u32) -> f64 {
    let denominator = effective_armor + defender_level as f64 * ARMOR_LEVEL_FACTOR;
    if denominator <= 0.0 {
        return 0.0;
    }
    effective_armor / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_armor() {
        assert!((armor_reduction(0.0, 10) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_denominator() {
        assert!((armor_reduction(0.0, 0) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_armor_vs_level() {
        // 150 armor at level 10: 150 / (150 + 150) = 50%
        assert!((armor_reduction(150.0, 10) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_diminishing_returns() {
        let low = armor_reduction(100.0, 20);
        let high = armor_reduction(200.0, 20);
        assert!(high > low);
        assert!(high < low * 2.0);
    }

    #[test]
    fn test_penetration_floors_at_zero() {
        assert!((effective_armor(30.0, 50.0) - 0.0).abs() < f64::EPSILON);
        assert!((effective_armor(80.0, 30.0) - 50.0).abs() < f64::EPSILON);
    }
}
