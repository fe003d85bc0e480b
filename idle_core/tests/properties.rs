//! Property tests over the engine's numeric invariants

use idle_core::combat::{CombatPhase, CombatScheduler};
use idle_core::config::{GameConstants, LootConstants, ProgressionConstants};
use idle_core::damage::resolve_hit;
use idle_core::events::EventLog;
use idle_core::generator::{generate_item, rarity_for_roll};
use idle_core::item::attempt_enchant;
use idle_core::progression::{exp_threshold, grant_exp};
use idle_core::stat_block::{derive_hero_stats, DerivedStats};
use idle_core::{EquipmentSlot, ItemKind, Player, StatType};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Strategy helpers ──────────────────────────────────

fn arb_attacker() -> impl Strategy<Value = DerivedStats> {
    (0.0f64..100_000.0, 0.0f64..5_000.0, 0.0f64..300.0).prop_map(|(attack, pen, crit_damage)| DerivedStats {
        attack,
        armor_penetration: pen,
        crit_damage,
        ..DerivedStats::base()
    })
}

fn arb_defender() -> impl Strategy<Value = DerivedStats> {
    (0.0f64..100_000.0, 0.0f64..=80.0).prop_map(|(armor, damage_reduction)| DerivedStats {
        armor,
        damage_reduction,
        ..DerivedStats::base()
    })
}

// ── Damage ────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_damage_is_at_least_one(
        attacker in arb_attacker(),
        defender in arb_defender(),
        level in 1u32..300,
        is_crit in any::<bool>(),
    ) {
        let roll = resolve_hit(&attacker, &defender, level, is_crit);
        prop_assert!(roll.damage >= 1, "damage was {}", roll.damage);
        prop_assert_eq!(roll.is_crit, is_crit);
    }

    #[test]
    fn prop_crit_never_lowers_damage(
        attacker in arb_attacker(),
        defender in arb_defender(),
        level in 1u32..300,
    ) {
        let normal = resolve_hit(&attacker, &defender, level, false);
        let crit = resolve_hit(&attacker, &defender, level, true);
        prop_assert!(crit.damage >= normal.damage);
    }
}

// ── Enchanting ────────────────────────────────────────

proptest! {
    #[test]
    fn prop_enchant_respects_budgets(
        seed in any::<u64>(),
        item_level in 1u32..100,
        stones in 0u64..40,
        attempts in 0usize..40,
    ) {
        let constants = GameConstants::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut item = generate_item(item_level, &constants.loot, &mut rng);
        let mut wallet = stones;
        let mut accepted = 0u64;

        for _ in 0..attempts {
            let level_before = item.enchant_level;
            match attempt_enchant(&mut item, &mut wallet, &constants.enchant, &mut rng) {
                Ok(_) => {
                    accepted += 1;
                    prop_assert!(item.enchant_level <= level_before + 1);
                }
                Err(_) => prop_assert_eq!(item.enchant_level, level_before),
            }
            prop_assert!(item.used_enchant_slots <= item.max_enchant_slots);
            prop_assert!(item.enchant_level <= constants.enchant.max_level);
        }
        prop_assert_eq!(wallet, stones - accepted * constants.enchant.cost_per_attempt);
        prop_assert_eq!(u64::from(item.used_enchant_slots), accepted);
    }
}

// ── Loot tables ───────────────────────────────────────

proptest! {
    #[test]
    fn prop_lower_rolls_are_never_more_common(a in 0.0f64..1.0, b in 0.0f64..1.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rarity_for_roll(low) >= rarity_for_roll(high));
    }

    #[test]
    fn prop_generated_items_are_consistent(seed in any::<u64>(), level in 1u32..200) {
        let mut rng = StdRng::seed_from_u64(seed);
        let item = generate_item(level, &LootConstants::default(), &mut rng);
        prop_assert_eq!(item.level, level);
        prop_assert_eq!(item.enchant_level, 0);
        prop_assert_eq!(item.used_enchant_slots, 0);
        prop_assert!(item.slot().is_some());
        if item.set_id.is_some() {
            prop_assert!(item.rarity.can_be_set());
        }
    }
}

// ── Progression ───────────────────────────────────────

proptest! {
    #[test]
    fn prop_leveling_drains_experience(amount in 0u64..50_000_000) {
        let constants = ProgressionConstants::default();
        let mut player = Player::default();
        let points_before = player.heroes[0].base_stats.free_points;

        let gained = grant_exp(&mut player, amount, &constants);

        prop_assert_eq!(player.level, 1 + gained);
        prop_assert!(
            player.level == constants.level_cap
                || player.current_exp < exp_threshold(player.level, &constants)
        );
        prop_assert_eq!(
            player.heroes[0].base_stats.free_points,
            points_before + gained * constants.points_per_level
        );
        prop_assert_eq!(player.max_exp, exp_threshold(player.level, &constants));
    }
}

// ── Derivation ────────────────────────────────────────

proptest! {
    #[test]
    fn prop_derivation_is_pure(seed in any::<u64>(), strength in 0u32..500) {
        let constants = GameConstants::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut player = Player::default();
        let hero = &mut player.heroes[0];
        hero.base_stats.strength = strength;
        for _ in 0..4 {
            let item = generate_item(10, &constants.loot, &mut rng);
            if let Some(slot) = item.slot() {
                hero.equip(slot, item);
            }
        }

        let first = derive_hero_stats(hero, &constants.enchant);
        let second = derive_hero_stats(hero, &constants.enchant);
        prop_assert_eq!(first, second);
        prop_assert!(first.crit_rate <= 80.0);
        prop_assert!(first.dodge <= 75.0);
        prop_assert!(first.damage_reduction <= 80.0);
        prop_assert_eq!(first.hp, first.max_hp);
    }

    #[test]
    fn prop_enchanting_one_item_leaves_others_alone(seed in any::<u64>(), enchant_level in 1u32..=10) {
        let constants = GameConstants::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut player = Player::default();
        let hero = &mut player.heroes[0];
        for slot in [EquipmentSlot::Weapon, EquipmentSlot::Chest] {
            let mut item = generate_item(20, &constants.loot, &mut rng);
            item.kind = ItemKind::Equipment { slot };
            hero.equip(slot, item);
        }

        let before = derive_hero_stats(hero, &constants.enchant);
        let mut touched = vec![StatType::Attack];
        if let Some(weapon) = hero.equipment.get_mut(&EquipmentSlot::Weapon) {
            weapon.enchant_level = enchant_level;
            touched.extend(weapon.stats.iter().map(|s| s.stat));
        }
        let after = derive_hero_stats(hero, &constants.enchant);

        for stat in ALL_STATS {
            if !touched.contains(&stat) {
                prop_assert_eq!(stat_value(&before, stat), stat_value(&after, stat), "{:?} moved", stat);
            }
        }
        if !touched.contains(&StatType::MaxHp) {
            prop_assert_eq!(before.hp, after.hp);
        }
        prop_assert_eq!(before.speed, after.speed);
        prop_assert!(after.attack >= before.attack);
    }
}

const ALL_STATS: [StatType; 12] = [
    StatType::Attack,
    StatType::Armor,
    StatType::MaxHp,
    StatType::CritRate,
    StatType::CritDamage,
    StatType::Dodge,
    StatType::HpRegen,
    StatType::Lifesteal,
    StatType::ArmorPenetration,
    StatType::AttackSpeed,
    StatType::DamageReduction,
    StatType::DamageIncrease,
];

fn stat_value(stats: &DerivedStats, stat: StatType) -> f64 {
    match stat {
        StatType::Attack => stats.attack,
        StatType::Armor => stats.armor,
        StatType::MaxHp => stats.max_hp,
        StatType::CritRate => stats.crit_rate,
        StatType::CritDamage => stats.crit_damage,
        StatType::Dodge => stats.dodge,
        StatType::HpRegen => stats.hp_regen,
        StatType::Lifesteal => stats.lifesteal,
        StatType::ArmorPenetration => stats.armor_penetration,
        StatType::AttackSpeed => stats.attack_speed,
        StatType::DamageReduction => stats.damage_reduction,
        StatType::DamageIncrease => stats.damage_increase,
    }
}

// ── Combat termination ────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_each_encounter_ends_once(seed in any::<u64>()) {
        let constants = GameConstants::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut player = Player::default();
        let mut events = EventLog::new();
        let mut scheduler = CombatScheduler::default();

        for _ in 0..1_500 {
            let report = scheduler.tick(&mut player, &constants, &mut rng, &mut events);
            if report.outcome.is_some() {
                let searching = matches!(scheduler.phase(), CombatPhase::Searching { .. });
                prop_assert!(searching);
                prop_assert!(scheduler.enemies().is_empty());
                let next = scheduler.tick(&mut player, &constants, &mut rng, &mut events);
                prop_assert!(next.outcome.is_none());
            }
        }
    }
}
