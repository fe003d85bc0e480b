//! Dodge - Chance for an ally to avoid an attack entirely

use rand::Rng;

/// Roll a dodge against a percentage chance (already capped at derivation)
pub fn roll_dodge(dodge: f64, rng: &mut impl Rng) -> bool {
    if dodge <= 0.0 {
        return false;
    }
    rng.gen::<f64>() * 100.0 < dodge
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_zero_dodge_never_dodges() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        assert!((0..1000).all(|_| !roll_dodge(0.0, &mut rng)));
    }

    #[test]
    fn test_full_dodge_always_dodges() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        assert!((0..1000).all(|_| roll_dodge(100.0, &mut rng)));
    }
}
