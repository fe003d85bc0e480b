//! Player-facing event log and floating combat text
//!
//! This is game state shown to the player, separate from `tracing`
//! diagnostics.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Entries kept in the log
pub const LOG_CAPACITY: usize = 100;

/// Floating texts held until the presentation layer drains them
pub const FLOATING_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Combat,
    Loot,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub message: String,
    pub kind: LogKind,
    /// Milliseconds since the Unix epoch
    pub timestamp: u64,
}

/// Who a floating text hovers over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatTarget {
    Ally(String),
    Enemy(String),
    Party,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatStyle {
    Damage,
    Crit,
    Heal,
    Dodge,
    Gold,
    Exp,
    Loot,
}

/// Short-lived rendering hint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatingText {
    pub value: String,
    pub target: FloatTarget,
    pub style: FloatStyle,
}

/// Bounded log, most recent first, plus pending floating texts
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
    floating: VecDeque<FloatingText>,
    next_id: u64,
    now_ms: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp used for subsequent entries
    pub fn stamp(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    pub fn push(&mut self, kind: LogKind, message: impl Into<String>) {
        let entry = LogEntry {
            id: self.next_id,
            message: message.into(),
            kind,
            timestamp: self.now_ms,
        };
        self.next_id += 1;
        self.entries.push_front(entry);
        self.entries.truncate(LOG_CAPACITY);
    }

    pub fn combat(&mut self, message: impl Into<String>) {
        self.push(LogKind::Combat, message);
    }

    pub fn loot(&mut self, message: impl Into<String>) {
        self.push(LogKind::Loot, message);
    }

    pub fn system(&mut self, message: impl Into<String>) {
        self.push(LogKind::System, message);
    }

    pub fn float(&mut self, value: impl Into<String>, target: FloatTarget, style: FloatStyle) {
        if self.floating.len() == FLOATING_CAPACITY {
            self.floating.pop_front();
        }
        self.floating.push_back(FloatingText {
            value: value.into(),
            target,
            style,
        });
    }

    /// Entries, most recent first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand pending floating texts to the presentation layer
    pub fn drain_floating(&mut self) -> Vec<FloatingText> {
        self.floating.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.floating.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first() {
        let mut log = EventLog::new();
        log.system("first");
        log.combat("second");
        let messages: Vec<_> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
        assert_eq!(log.latest().unwrap().kind, LogKind::Combat);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = EventLog::new();
        for i in 0..150 {
            log.loot(format!("drop {}", i));
        }
        assert_eq!(log.len(), LOG_CAPACITY);
        assert_eq!(log.latest().unwrap().message, "drop 149");
        assert_eq!(log.entries().last().unwrap().message, "drop 50");
    }

    #[test]
    fn test_ids_are_unique_and_stamped() {
        let mut log = EventLog::new();
        log.stamp(1_000);
        log.system("a");
        log.stamp(2_000);
        log.system("b");
        let entries: Vec<_> = log.entries().collect();
        assert_ne!(entries[0].id, entries[1].id);
        assert_eq!(entries[0].timestamp, 2_000);
        assert_eq!(entries[1].timestamp, 1_000);
    }

    #[test]
    fn test_floating_texts_drain() {
        let mut log = EventLog::new();
        log.float("120", FloatTarget::Enemy("e1".into()), FloatStyle::Damage);
        assert_eq!(log.drain_floating().len(), 1);
        assert!(log.drain_floating().is_empty());
    }

    #[test]
    fn test_undrained_floating_texts_drop_oldest() {
        let mut log = EventLog::new();
        for i in 0..FLOATING_CAPACITY + 10 {
            log.float(i.to_string(), FloatTarget::Party, FloatStyle::Gold);
        }
        let pending = log.drain_floating();
        assert_eq!(pending.len(), FLOATING_CAPACITY);
        assert_eq!(pending[0].value, "10");
        assert_eq!(pending.last().unwrap().value, (FLOATING_CAPACITY + 9).to_string());
    }
}
