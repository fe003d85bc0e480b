//! Pet generation - random breed, qualities rolled within the breed's range

use crate::entity::{BaseStats, Pet, PetQualities, PET_BREEDS};
use crate::types::{random_id, PetId};
use rand::Rng;

/// Hatch a new pet at `level`. Qualities are permanent once rolled.
pub fn generate_pet(level: u32, rng: &mut impl Rng) -> Pet {
    let breed = &PET_BREEDS[rng.gen_range(0..PET_BREEDS.len())];
    let (min, max) = (&breed.min, &breed.max);

    let qualities = PetQualities {
        atk: rng.gen_range(min.atk..=max.atk),
        def: rng.gen_range(min.def..=max.def),
        hp: rng.gen_range(min.hp..=max.hp),
        spd: rng.gen_range(min.spd..=max.spd),
        // Two decimals, like the breed table
        grow: (rng.gen_range(min.grow..=max.grow) * 100.0).round() / 100.0,
    };

    Pet {
        id: PetId(random_id(rng)),
        breed_id: breed.id.to_string(),
        name: breed.name.to_string(),
        level: level.max(1),
        exp: 0,
        qualities,
        base_stats: BaseStats::default(),
        avatar_seed: format!("{}-{}", breed.id, rng.gen_range(1..=9999)),
        is_locked: false,
    }
}
