//! Pets - companion creatures that fight as their own combat units

use super::BaseStats;
use crate::types::PetId;
use serde::{Deserialize, Serialize};

/// Aptitudes rolled once when a pet is created
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetQualities {
    pub atk: u32,
    pub def: u32,
    pub hp: u32,
    pub spd: u32,
    pub grow: f64,
}

/// A pet species and the range its qualities roll in
#[derive(Debug)]
pub struct PetBreed {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub min: PetQualities,
    pub max: PetQualities,
}

pub static PET_BREEDS: &[PetBreed] = &[
    PetBreed {
        id: "breed_turtle",
        name: "大海龟",
        desc: "Sturdy starter companion with excellent defense.",
        min: PetQualities { atk: 900, def: 1300, hp: 3500, spd: 800, grow: 1.05 },
        max: PetQualities { atk: 1100, def: 1550, hp: 4500, spd: 1000, grow: 1.15 },
    },
    PetBreed {
        id: "breed_wolf",
        name: "幽灵狼",
        desc: "A hunter balancing attack and speed.",
        min: PetQualities { atk: 1300, def: 900, hp: 3000, spd: 1300, grow: 1.10 },
        max: PetQualities { atk: 1500, def: 1100, hp: 3800, spd: 1500, grow: 1.20 },
    },
    PetBreed {
        id: "breed_vampire",
        name: "吸血鬼",
        desc: "Very high attack aptitude.",
        min: PetQualities { atk: 1400, def: 1000, hp: 3200, spd: 1200, grow: 1.15 },
        max: PetQualities { atk: 1600, def: 1200, hp: 4000, spd: 1400, grow: 1.25 },
    },
    PetBreed {
        id: "breed_angel",
        name: "灵鹤",
        desc: "Deep magic and great speed.",
        min: PetQualities { atk: 1100, def: 1100, hp: 3200, spd: 1400, grow: 1.18 },
        max: PetQualities { atk: 1300, def: 1300, hp: 4200, spd: 1600, grow: 1.26 },
    },
    PetBreed {
        id: "breed_golem",
        name: "熔岩巨兽",
        desc: "Overwhelming stamina and defense.",
        min: PetQualities { atk: 1000, def: 1500, hp: 5000, spd: 800, grow: 1.12 },
        max: PetQualities { atk: 1200, def: 1700, hp: 6500, spd: 900, grow: 1.22 },
    },
    PetBreed {
        id: "breed_dragon",
        name: "超级神龙",
        desc: "A legendary beast, perfect in every aptitude.",
        min: PetQualities { atk: 1500, def: 1400, hp: 5000, spd: 1400, grow: 1.25 },
        max: PetQualities { atk: 1700, def: 1600, hp: 6000, spd: 1600, grow: 1.30 },
    },
];

pub fn breed_by_id(id: &str) -> Option<&'static PetBreed> {
    PET_BREEDS.iter().find(|b| b.id == id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub breed_id: String,
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub exp: u64,
    /// Immutable after creation
    pub qualities: PetQualities,
    #[serde(default)]
    pub base_stats: BaseStats,
    #[serde(default)]
    pub avatar_seed: String,
    #[serde(default)]
    pub is_locked: bool,
}

fn default_level() -> u32 {
    1
}

impl Pet {
    pub fn breed(&self) -> Option<&'static PetBreed> {
        breed_by_id(&self.breed_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_ranges_are_ordered() {
        for breed in PET_BREEDS {
            assert!(breed.min.atk <= breed.max.atk, "{}", breed.id);
            assert!(breed.min.def <= breed.max.def, "{}", breed.id);
            assert!(breed.min.hp <= breed.max.hp, "{}", breed.id);
            assert!(breed.min.spd <= breed.max.spd, "{}", breed.id);
            assert!(breed.min.grow <= breed.max.grow, "{}", breed.id);
        }
    }

    #[test]
    fn test_pet_without_base_stats_loads_zeroed() {
        let json = r#"{
            "id": "p1",
            "breed_id": "breed_wolf",
            "name": "幽灵狼",
            "qualities": {"atk": 1400, "def": 1000, "hp": 3500, "spd": 1400, "grow": 1.15}
        }"#;
        let pet: Pet = serde_json::from_str(json).unwrap();
        assert_eq!(pet.level, 1);
        assert_eq!(pet.base_stats, BaseStats::default());
        assert_eq!(pet.breed().unwrap().name, "幽灵狼");
    }
}
