//! Equipment sets and their threshold bonuses

use super::ItemStat;
use crate::types::StatType;

/// Bonus unlocked when `count` pieces of a set are worn
#[derive(Debug)]
pub struct SetBonus {
    pub count: u32,
    pub description: &'static str,
    pub stats: &'static [ItemStat],
}

/// A named group of items
#[derive(Debug)]
pub struct GameSet {
    pub id: &'static str,
    pub name: &'static str,
    pub bonuses: &'static [SetBonus],
}

impl GameSet {
    /// Prefix used for item names: the set name up to and including '的'
    pub fn name_prefix(&self) -> String {
        match self.name.find('的') {
            Some(idx) => self.name[..idx + '的'.len_utf8()].to_string(),
            None => format!("{}的", self.name),
        }
    }

    /// Bonuses active with `count` pieces worn
    pub fn active_bonuses(&self, count: u32) -> impl Iterator<Item = &'static SetBonus> {
        self.bonuses.iter().filter(move |b| count >= b.count)
    }
}

pub static GAME_SETS: &[GameSet] = &[
    GameSet {
        id: "set_archangel",
        name: "大天使的荣光",
        bonuses: &[
            SetBonus {
                count: 2,
                description: "Damage +15%",
                stats: &[ItemStat::flat(StatType::DamageIncrease, 15.0)],
            },
            SetBonus {
                count: 4,
                description: "Crit rate +20%",
                stats: &[ItemStat::flat(StatType::CritRate, 20.0)],
            },
            SetBonus {
                count: 6,
                description: "Crit damage +100%",
                stats: &[ItemStat::flat(StatType::CritDamage, 100.0)],
            },
        ],
    },
    GameSet {
        id: "set_demon",
        name: "恶魔的低语",
        bonuses: &[
            SetBonus {
                count: 2,
                description: "Lifesteal +5%",
                stats: &[ItemStat::flat(StatType::Lifesteal, 5.0)],
            },
            SetBonus {
                count: 4,
                description: "Attack speed +20%",
                stats: &[ItemStat::flat(StatType::AttackSpeed, 20.0)],
            },
            SetBonus {
                count: 6,
                description: "Damage +50%",
                stats: &[ItemStat::flat(StatType::DamageIncrease, 50.0)],
            },
        ],
    },
    GameSet {
        id: "set_guardian",
        name: "泰坦守护者",
        bonuses: &[
            SetBonus {
                count: 2,
                description: "Max HP +20%",
                stats: &[ItemStat::percent(StatType::MaxHp, 20.0)],
            },
            SetBonus {
                count: 4,
                description: "Damage reduction +15%",
                stats: &[ItemStat::flat(StatType::DamageReduction, 15.0)],
            },
            SetBonus {
                count: 6,
                description: "Armor +50%",
                stats: &[ItemStat::percent(StatType::Armor, 50.0)],
            },
        ],
    },
    GameSet {
        id: "set_assassin",
        name: "幻影刺客",
        bonuses: &[
            SetBonus {
                count: 2,
                description: "Dodge +10%",
                stats: &[ItemStat::flat(StatType::Dodge, 10.0)],
            },
            SetBonus {
                count: 4,
                description: "Armor penetration +50",
                stats: &[ItemStat::flat(StatType::ArmorPenetration, 50.0)],
            },
            SetBonus {
                count: 6,
                description: "Crit rate +30%",
                stats: &[ItemStat::flat(StatType::CritRate, 30.0)],
            },
        ],
    },
    GameSet {
        id: "set_sage",
        name: "贤者的真理",
        bonuses: &[
            SetBonus {
                count: 2,
                description: "HP regen +50",
                stats: &[ItemStat::flat(StatType::HpRegen, 50.0)],
            },
            SetBonus {
                count: 4,
                description: "Damage reduction +10%",
                stats: &[ItemStat::flat(StatType::DamageReduction, 10.0)],
            },
            SetBonus {
                count: 6,
                description: "Attack +40%",
                stats: &[ItemStat::percent(StatType::Attack, 40.0)],
            },
        ],
    },
];

/// Look up a set definition
pub fn set_by_id(id: &str) -> Option<&'static GameSet> {
    GAME_SETS.iter().find(|s| s.id == id)
}
