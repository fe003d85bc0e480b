//! Persistent game entities - heroes, pets and the player aggregate

mod hero;
mod pet;
mod player;

pub use hero::Hero;
pub use pet::{breed_by_id, Pet, PetBreed, PetQualities, PET_BREEDS};
pub use player::Player;

use crate::types::Attribute;
use serde::{Deserialize, Serialize};

/// Allocatable attributes plus unspent points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    #[serde(alias = "str")]
    pub strength: u32,
    #[serde(alias = "dex")]
    pub dexterity: u32,
    #[serde(alias = "int")]
    pub intelligence: u32,
    #[serde(alias = "vit")]
    pub vitality: u32,
    #[serde(alias = "spi")]
    pub spirit: u32,
    #[serde(alias = "freePoints")]
    pub free_points: u32,
}

impl BaseStats {
    /// Starting attributes for a new hero
    pub fn starting() -> Self {
        BaseStats {
            strength: 5,
            dexterity: 5,
            intelligence: 5,
            vitality: 5,
            spirit: 5,
            free_points: 5,
        }
    }

    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Intelligence => self.intelligence,
            Attribute::Vitality => self.vitality,
            Attribute::Spirit => self.spirit,
        }
    }

    fn get_mut(&mut self, attribute: Attribute) -> &mut u32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Vitality => &mut self.vitality,
            Attribute::Spirit => &mut self.spirit,
        }
    }

    /// Spend one free point. Returns false (and changes nothing) without points.
    pub fn allocate(&mut self, attribute: Attribute) -> bool {
        if self.free_points == 0 {
            return false;
        }
        self.free_points -= 1;
        *self.get_mut(attribute) += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_spends_a_point() {
        let mut stats = BaseStats::starting();
        assert!(stats.allocate(Attribute::Vitality));
        assert_eq!(stats.vitality, 6);
        assert_eq!(stats.free_points, 4);
    }

    #[test]
    fn test_allocate_without_points_is_noop() {
        let mut stats = BaseStats::default();
        assert!(!stats.allocate(Attribute::Strength));
        assert_eq!(stats, BaseStats::default());
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let stats: BaseStats = serde_json::from_str(r#"{"strength": 3}"#).unwrap();
        assert_eq!(stats.strength, 3);
        assert_eq!(stats.spirit, 0);
        assert_eq!(stats.free_points, 0);
    }
}
