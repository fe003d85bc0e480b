//! ATB scheduler - gauge filling, action resolution and encounter lifecycle

use super::{AttackEvent, CombatOutcome, CombatUnit, Side, TickReport};
use crate::config::{CombatConstants, GameConstants};
use crate::damage::{calculate_damage, DamageRoll};
use crate::defense::roll_dodge;
use crate::entity::Player;
use crate::events::{EventLog, FloatStyle, FloatTarget};
use crate::generator::generate_enemies;
use crate::progression::{grant_victory_rewards, VictoryReport};
use crate::stat_block::{derive_hero_stats, derive_pet_stats};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the encounter loop is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatPhase {
    /// Ready to spawn a squad on the next tick
    NoEncounter,
    Fighting,
    /// Cooling down after a victory or defeat; ticks are consumed
    Searching { ticks_remaining: u32 },
}

/// Persisted floor state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorProgress {
    pub current: u32,
    pub highest: u32,
    /// Squads cleared on the current floor since the last boss
    pub kill_count: u32,
}

impl Default for FloorProgress {
    fn default() -> Self {
        FloorProgress {
            current: 1,
            highest: 1,
            kill_count: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloorError {
    #[error("战斗中无法切换层数")]
    InCombat,

    #[error("第 {target} 层超出范围 1..={highest}")]
    OutOfRange { target: i64, highest: u32 },
}

/// Owns the transient combat state for one party
#[derive(Debug, Clone)]
pub struct CombatScheduler {
    phase: CombatPhase,
    floor: FloorProgress,
    allies: Vec<CombatUnit>,
    enemies: Vec<CombatUnit>,
    invincible: bool,
    auto_battle: bool,
}

impl Default for CombatScheduler {
    fn default() -> Self {
        Self::new(FloorProgress::default())
    }
}

impl CombatScheduler {
    pub fn new(floor: FloorProgress) -> Self {
        CombatScheduler {
            phase: CombatPhase::NoEncounter,
            floor,
            allies: Vec::new(),
            enemies: Vec::new(),
            invincible: false,
            auto_battle: true,
        }
    }

    // === Accessors ===

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn floor(&self) -> FloorProgress {
        self.floor
    }

    pub fn allies(&self) -> &[CombatUnit] {
        &self.allies
    }

    pub fn enemies(&self) -> &[CombatUnit] {
        &self.enemies
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    pub fn toggle_invincible(&mut self) -> bool {
        self.invincible = !self.invincible;
        self.invincible
    }

    pub fn is_auto_battle(&self) -> bool {
        self.auto_battle
    }

    pub fn set_auto_battle(&mut self, enabled: bool) {
        self.auto_battle = enabled;
    }

    // === Roster ===

    /// Rebuild ally snapshots from the roster
    ///
    /// Stats are always re-derived; HP (clamped to the new max) and gauge
    /// carry over for units that were already fighting.
    pub fn refresh_allies(&mut self, player: &Player, constants: &GameConstants) {
        let mut allies = Vec::with_capacity(player.heroes.len() * 2);
        for hero in &player.heroes {
            allies.push(CombatUnit::from_hero(hero, derive_hero_stats(hero, &constants.enchant)));
            if let Some(pet) = hero.active_pet_id.as_ref().and_then(|id| player.pet(id)) {
                allies.push(CombatUnit::from_pet(pet, hero, derive_pet_stats(pet)));
            }
        }

        for unit in &mut allies {
            if let Some(old) = self.allies.iter().find(|o| o.id == unit.id) {
                unit.current_hp = old.current_hp.min(unit.max_hp);
                unit.gauge = old.gauge;
            }
        }
        self.allies = allies;
    }

    // === Floors ===

    /// Move `delta` floors within `[1, highest]`
    pub fn change_floor(&mut self, delta: i32) -> Result<u32, FloorError> {
        if self.phase == CombatPhase::Fighting {
            return Err(FloorError::InCombat);
        }

        let target = i64::from(self.floor.current) + i64::from(delta);
        if target < 1 || target > i64::from(self.floor.highest) {
            return Err(FloorError::OutOfRange {
                target,
                highest: self.floor.highest,
            });
        }

        self.floor.current = target as u32;
        self.floor.kill_count = 0;
        self.enemies.clear();
        self.phase = CombatPhase::NoEncounter;
        tracing::info!(floor = self.floor.current, "changed floor");
        Ok(self.floor.current)
    }

    // === Tick ===

    /// Advance the encounter by one tick
    pub fn tick(
        &mut self,
        player: &mut Player,
        constants: &GameConstants,
        rng: &mut impl Rng,
        events: &mut EventLog,
    ) -> TickReport {
        let mut report = TickReport::default();
        if !self.auto_battle {
            return report;
        }
        if self.allies.is_empty() {
            self.refresh_allies(player, constants);
        }

        match self.phase {
            CombatPhase::Searching { ticks_remaining } => {
                self.phase = if ticks_remaining <= 1 {
                    CombatPhase::NoEncounter
                } else {
                    CombatPhase::Searching {
                        ticks_remaining: ticks_remaining - 1,
                    }
                };
            }
            CombatPhase::NoEncounter => {
                report.spawned = self.spawn(&constants.combat, rng, events);
            }
            CombatPhase::Fighting => {
                self.run_round(&constants.combat, rng, events, &mut report);
                match self.check_outcome() {
                    Some(CombatOutcome::Victory) => {
                        report.outcome = Some(CombatOutcome::Victory);
                        report.rewards = Some(self.on_victory(player, constants, rng, events));
                    }
                    Some(CombatOutcome::Defeat) => {
                        report.outcome = Some(CombatOutcome::Defeat);
                        self.on_defeat(&constants.combat, events);
                    }
                    None => {}
                }
            }
        }
        report
    }

    fn spawn(&mut self, combat: &CombatConstants, rng: &mut impl Rng, events: &mut EventLog) -> bool {
        if self.allies.is_empty() {
            tracing::warn!("no allies to fight with; skipping spawn");
            return false;
        }

        let is_boss = self.floor.kill_count >= combat.boss_threshold;
        let squad = generate_enemies(self.floor.current, self.allies.len(), is_boss, rng);
        self.enemies = squad.iter().map(|e| CombatUnit::from_enemy(e, combat)).collect();
        self.phase = CombatPhase::Fighting;

        let names: Vec<&str> = self.enemies.iter().map(|e| e.name.as_str()).collect();
        events.combat(format!(
            "遭遇了 {}{}!",
            names.join("、"),
            if is_boss { " (BOSS)" } else { "" }
        ));
        tracing::info!(
            floor = self.floor.current,
            enemies = self.enemies.len(),
            is_boss,
            "encounter started"
        );
        true
    }

    /// Allies first, then enemies, each in roster order
    fn run_round(
        &mut self,
        combat: &CombatConstants,
        rng: &mut impl Rng,
        events: &mut EventLog,
        report: &mut TickReport,
    ) {
        let invincible = self.invincible;

        for i in 0..self.allies.len() {
            if !any_alive(&self.enemies) {
                return;
            }
            if let Some(event) = advance_unit(&mut self.allies[i], &mut self.enemies, invincible, combat, rng, events) {
                report.attacks.push(event);
            }
        }

        for i in 0..self.enemies.len() {
            if !any_alive(&self.allies) {
                return;
            }
            if let Some(event) = advance_unit(&mut self.enemies[i], &mut self.allies, invincible, combat, rng, events) {
                report.attacks.push(event);
            }
        }
    }

    /// Enemy wipe is checked first, so a tick yields at most one outcome
    fn check_outcome(&self) -> Option<CombatOutcome> {
        if !any_alive(&self.enemies) {
            Some(CombatOutcome::Victory)
        } else if !any_alive(&self.allies) {
            Some(CombatOutcome::Defeat)
        } else {
            None
        }
    }

    fn on_victory(
        &mut self,
        player: &mut Player,
        constants: &GameConstants,
        rng: &mut impl Rng,
        events: &mut EventLog,
    ) -> VictoryReport {
        let combat = &constants.combat;
        let defeated = std::mem::take(&mut self.enemies);
        let report = grant_victory_rewards(player, &defeated, constants, rng, events);

        if report.boss_defeated {
            self.floor.kill_count = 0;
            self.floor.current = (self.floor.current + 1).min(combat.max_floor);
            self.floor.highest = self.floor.highest.max(self.floor.current);
            events.system("BOSS被击败! 下一层开启");
            tracing::info!(floor = self.floor.current, "boss defeated, advancing");
        } else {
            self.floor.kill_count += 1;
        }

        // Level-ups may have changed stats; fallen allies come back at the heal fraction
        self.refresh_allies(player, constants);
        for ally in &mut self.allies {
            ally.heal((ally.max_hp * combat.victory_heal_fraction).floor());
            ally.gauge = 0.0;
        }

        self.phase = CombatPhase::Searching {
            ticks_remaining: combat.victory_cooldown_ticks,
        };
        report
    }

    fn on_defeat(&mut self, combat: &CombatConstants, events: &mut EventLog) {
        self.floor.current = self.floor.current.saturating_sub(1).max(1);
        self.floor.kill_count = 0;
        self.enemies.clear();

        for ally in &mut self.allies {
            ally.current_hp = ally.max_hp;
            ally.gauge = 0.0;
        }

        self.phase = CombatPhase::Searching {
            ticks_remaining: combat.defeat_cooldown_ticks,
        };
        events.system(format!("你被击败了! 退回第 {} 层...", self.floor.current));
        tracing::info!(floor = self.floor.current, "party defeated, retreating");
    }
}

fn any_alive(units: &[CombatUnit]) -> bool {
    units.iter().any(CombatUnit::is_alive)
}

fn pick_target(units: &[CombatUnit], rng: &mut impl Rng) -> Option<usize> {
    let living: Vec<usize> = (0..units.len()).filter(|&i| units[i].is_alive()).collect();
    living.choose(rng).copied()
}

/// Fill one unit's gauge and resolve its action if the gauge is full
fn advance_unit(
    actor: &mut CombatUnit,
    opponents: &mut [CombatUnit],
    invincible: bool,
    combat: &CombatConstants,
    rng: &mut impl Rng,
    events: &mut EventLog,
) -> Option<AttackEvent> {
    if !actor.is_alive() {
        return None;
    }

    actor.gauge += actor.gauge_gain(combat.gauge_rate_per_tick);
    if actor.gauge < combat.gauge_threshold {
        return None;
    }
    actor.gauge -= combat.gauge_threshold;

    let target_idx = pick_target(opponents, rng)?;
    let target = &mut opponents[target_idx];

    match actor.side {
        Side::Ally => Some(ally_attack(actor, target, invincible, combat, rng, events)),
        Side::Enemy => Some(enemy_attack(actor, target, invincible, rng, events)),
    }
}

fn ally_attack(
    actor: &mut CombatUnit,
    target: &mut CombatUnit,
    invincible: bool,
    combat: &CombatConstants,
    rng: &mut impl Rng,
    events: &mut EventLog,
) -> AttackEvent {
    let regen = actor.stats.regen_per_action();
    let mut healed = actor.heal(regen);

    let roll = if invincible {
        DamageRoll {
            damage: combat.invincible_damage,
            is_crit: true,
        }
    } else {
        calculate_damage(&actor.stats, &target.stats, target.level, rng)
    };
    let is_killing_blow = target.take_damage(roll.damage);

    let stolen = (roll.damage as f64 * actor.stats.lifesteal / 100.0).floor();
    let stolen = actor.heal(stolen);
    healed += stolen;

    log_hit(actor, target, roll, events);
    let value = if roll.is_crit {
        format!("{}!", roll.damage)
    } else {
        roll.damage.to_string()
    };
    let style = if roll.is_crit { FloatStyle::Crit } else { FloatStyle::Damage };
    events.float(value, FloatTarget::Enemy(target.id.clone()), style);
    if stolen > 0.0 {
        events.float(format!("+{}", stolen), FloatTarget::Ally(actor.id.clone()), FloatStyle::Heal);
    }
    if is_killing_blow {
        events.combat(format!("击败 {}", target.name));
    }

    AttackEvent {
        attacker_id: actor.id.clone(),
        attacker_side: Side::Ally,
        target_id: target.id.clone(),
        damage: roll.damage,
        is_crit: roll.is_crit,
        dodged: false,
        healed: healed as u64,
        is_killing_blow,
    }
}

fn enemy_attack(
    actor: &CombatUnit,
    target: &mut CombatUnit,
    invincible: bool,
    rng: &mut impl Rng,
    events: &mut EventLog,
) -> AttackEvent {
    let mut event = AttackEvent {
        attacker_id: actor.id.clone(),
        attacker_side: Side::Enemy,
        target_id: target.id.clone(),
        damage: 0,
        is_crit: false,
        dodged: false,
        healed: 0,
        is_killing_blow: false,
    };

    if invincible {
        events.float("无敌", FloatTarget::Ally(target.id.clone()), FloatStyle::Heal);
        return event;
    }

    if roll_dodge(target.stats.dodge, rng) {
        event.dodged = true;
        events.combat(format!("{} 闪避了 {} 的攻击", target.name, actor.name));
        events.float("闪避", FloatTarget::Ally(target.id.clone()), FloatStyle::Dodge);
        return event;
    }

    let roll = calculate_damage(&actor.stats, &target.stats, target.level, rng);
    event.damage = roll.damage;
    event.is_crit = roll.is_crit;
    event.is_killing_blow = target.take_damage(roll.damage);

    log_hit(actor, target, roll, events);
    let style = if roll.is_crit { FloatStyle::Crit } else { FloatStyle::Damage };
    events.float(roll.damage.to_string(), FloatTarget::Ally(target.id.clone()), style);
    if event.is_killing_blow {
        events.combat(format!("{} 倒下了", target.name));
    }
    event
}

fn log_hit(actor: &CombatUnit, target: &CombatUnit, roll: DamageRoll, events: &mut EventLog) {
    tracing::debug!(
        attacker = %actor.id,
        target = %target.id,
        damage = roll.damage,
        crit = roll.is_crit,
        target_hp = target.current_hp,
        "attack resolved"
    );
    events.combat(format!(
        "{} 对 {} 造成 {} 点伤害{}",
        actor.name,
        target.name,
        roll.damage,
        if roll.is_crit { " (暴击)" } else { "" }
    ));
}
