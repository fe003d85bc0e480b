//! Enchanting - spend a stone and an attempt for a chance at the next level

use super::Item;
use crate::config::EnchantConstants;
use rand::Rng;
use thiserror::Error;

/// Why an enchant attempt was refused. Nothing is consumed in these cases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnchantError {
    #[error("{name} 已达到最高强化等级")]
    MaxLevel { name: String },
    #[error("{name} 的强化次数已用完 ({used}/{max})")]
    SlotsExhausted { name: String, used: u32, max: u32 },
    #[error("强化石不足 (拥有 {have}, 需要 {need})")]
    InsufficientStones { have: u64, need: u64 },
}

/// Result of an attempt that went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnchantOutcome {
    Success { new_level: u32 },
    Failure { level: u32 },
}

impl EnchantOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, EnchantOutcome::Success { .. })
    }
}

/// Attempt to enchant `item`, paying from `stones`.
///
/// Both outcomes consume the stone and the attempt.
pub fn attempt_enchant(
    item: &mut Item,
    stones: &mut u64,
    constants: &EnchantConstants,
    rng: &mut impl Rng,
) -> Result<EnchantOutcome, EnchantError> {
    if item.enchant_level >= constants.max_level {
        return Err(EnchantError::MaxLevel {
            name: item.name.clone(),
        });
    }
    if item.used_enchant_slots >= item.max_enchant_slots {
        return Err(EnchantError::SlotsExhausted {
            name: item.name.clone(),
            used: item.used_enchant_slots,
            max: item.max_enchant_slots,
        });
    }
    if *stones < constants.cost_per_attempt {
        return Err(EnchantError::InsufficientStones {
            have: *stones,
            need: constants.cost_per_attempt,
        });
    }

    *stones -= constants.cost_per_attempt;
    item.used_enchant_slots += 1;

    let rate = constants.success_rate(item.enchant_level);
    if rng.gen::<f64>() < rate {
        item.enchant_level += 1;
        Ok(EnchantOutcome::Success {
            new_level: item.enchant_level,
        })
    } else {
        Ok(EnchantOutcome::Failure {
            level: item.enchant_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::test_support::equipment;
    use crate::types::EquipmentSlot;
    use rand::SeedableRng;

    fn rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_first_level_always_succeeds() {
        let mut item = equipment("helm", EquipmentSlot::Helmet, Some(10), vec![]);
        let mut stones = 3;
        let outcome = attempt_enchant(&mut item, &mut stones, &EnchantConstants::default(), &mut rng()).unwrap();
        assert_eq!(outcome, EnchantOutcome::Success { new_level: 1 });
        assert_eq!(stones, 2);
        assert_eq!(item.used_enchant_slots, 1);
    }

    #[test]
    fn test_insufficient_stones_mutates_nothing() {
        let mut item = equipment("helm", EquipmentSlot::Helmet, Some(10), vec![]);
        let before = item.clone();
        let mut stones = 0;
        let err = attempt_enchant(&mut item, &mut stones, &EnchantConstants::default(), &mut rng()).unwrap_err();
        assert_eq!(err, EnchantError::InsufficientStones { have: 0, need: 1 });
        assert_eq!(item, before);
    }

    #[test]
    fn test_exhausted_slots() {
        let mut item = equipment("helm", EquipmentSlot::Helmet, Some(10), vec![]);
        item.max_enchant_slots = 2;
        item.used_enchant_slots = 2;
        let mut stones = 10;
        let err = attempt_enchant(&mut item, &mut stones, &EnchantConstants::default(), &mut rng()).unwrap_err();
        assert!(matches!(err, EnchantError::SlotsExhausted { used: 2, max: 2, .. }));
        assert_eq!(stones, 10);
    }

    #[test]
    fn test_max_level_refused() {
        let mut item = equipment("helm", EquipmentSlot::Helmet, Some(10), vec![]);
        item.enchant_level = 10;
        let mut stones = 10;
        let err = attempt_enchant(&mut item, &mut stones, &EnchantConstants::default(), &mut rng()).unwrap_err();
        assert!(matches!(err, EnchantError::MaxLevel { .. }));
        assert_eq!(item.used_enchant_slots, 0);
    }

    #[test]
    fn test_level_nine_success_rate() {
        let constants = EnchantConstants::default();
        let mut rng = rng();
        let mut successes = 0;
        // Ten batches of 10,000 attempts, averaged per batch
        let batches = 10;
        let attempts = 10_000 * batches;
        for _ in 0..attempts {
            let mut item = equipment("blade", EquipmentSlot::Weapon, Some(10), vec![]);
            item.enchant_level = 9;
            let mut stones = u64::MAX;
            let outcome = attempt_enchant(&mut item, &mut stones, &constants, &mut rng).unwrap();
            assert_eq!(item.used_enchant_slots, 1);
            if outcome.is_success() {
                successes += 1;
                assert_eq!(item.enchant_level, 10);
            } else {
                assert_eq!(item.enchant_level, 9);
            }
        }
        let per_batch = successes / batches;
        // Within 5% of the expected 1000 per 10,000 attempts
        assert!((950..=1050).contains(&per_batch), "per batch = {}", per_batch);
    }
}
