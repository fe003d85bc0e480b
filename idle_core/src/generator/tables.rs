//! Name pools used by the generators

use crate::types::EquipmentSlot;

pub fn base_item_names(slot: EquipmentSlot) -> &'static [&'static str] {
    match slot {
        EquipmentSlot::Weapon => &["长剑", "战斧", "匕首", "重锤", "镰刀", "太刀", "魔杖", "长枪", "巨剑"],
        EquipmentSlot::Helmet => &["战盔", "面甲", "头冠", "兜帽", "额饰", "角盔"],
        EquipmentSlot::Chest => &["板甲", "法袍", "锁甲", "胸铠", "战衣", "灵甲"],
        EquipmentSlot::Legs => &["护腿", "战裙", "长裤", "腿甲", "法裤"],
        EquipmentSlot::Gloves => &["护手", "拳套", "手套", "臂铠", "灵腕"],
        EquipmentSlot::Boots => &["战靴", "胫甲", "长靴", "履", "踏云靴"],
        EquipmentSlot::Necklace => &["项链", "挂坠", "颈饰", "璎珞"],
        EquipmentSlot::Ring1 | EquipmentSlot::Ring2 => &["指环", "戒指", "指套", "扳指"],
        EquipmentSlot::Amulet => &["护身符", "宝珠", "印章", "魂石", "令箭"],
    }
}

pub const ADJECTIVES: &[&str] = &[
    "黑暗", "远古", "诅咒", "鲜血", "幽灵", "深渊", "冰霜", "烈焰", "虚空", "神圣", "破碎", "梦魇", "龙骨", "星辰",
    "混沌", "永恒",
];

pub const MINION_NAMES: &[&str] = &[
    "暗影爬行者",
    "深渊骷髅",
    "虚空行者",
    "被诅咒的卫兵",
    "黑暗魔狼",
    "幽灵射手",
    "腐烂僵尸",
    "血色蝙蝠",
];

pub const BOSS_NAMES: &[&str] = &["深渊领主", "虚空主宰", "堕落骑士王", "黑暗吞噬者", "鲜血女王", "骸骨巨龙"];
