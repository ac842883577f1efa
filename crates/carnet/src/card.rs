//! Card data model.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleUpdate;

/// Ease given to a freshly created card.
pub const DEFAULT_EASE: f64 = 2.5;

/// Ease never drops below this.
pub const MIN_EASE: f64 = 1.3;

/// A flashcard and its spaced-repetition state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Identifier, unique within a card file. Zero until the card is stored.
    #[serde(default)]
    pub id: u64,
    /// Question side.
    pub front: String,
    /// Answer side.
    pub back: String,
    /// Topic pill (e.g. "animals").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Part-of-speech pill (e.g. "noun").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    /// When the card is next eligible for review.
    pub due: DateTime<Utc>,
    /// Interval growth multiplier.
    #[serde(default = "default_ease")]
    pub ease: f64,
    /// Consecutive successful repetitions since the last lapse.
    #[serde(default)]
    pub reps: u32,
    /// Days between the last review and `due`.
    #[serde(default)]
    pub interval: u32,
    /// Time of the last review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<DateTime<Utc>>,
}

fn default_ease() -> f64 {
    DEFAULT_EASE
}

impl Card {
    /// Create a new card due immediately.
    pub fn new(front: impl Into<String>, back: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            front: front.into(),
            back: back.into(),
            topic: None,
            part_of_speech: None,
            tags: BTreeSet::new(),
            due: now,
            ease: DEFAULT_EASE,
            reps: 0,
            interval: 0,
            last: None,
        }
    }

    /// Add tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Set the part of speech.
    pub fn with_part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = Some(pos.into());
        self
    }

    /// Whether the card should be reviewed at `now`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due <= now
    }

    /// Whether the card has never been reviewed.
    pub fn is_new(&self) -> bool {
        self.last.is_none()
    }

    /// Whether the card carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Write a scheduling result into the card.
    pub fn apply(&mut self, update: &ScheduleUpdate) {
        self.ease = update.ease;
        self.reps = update.reps;
        self.interval = update.interval;
        self.due = update.due;
        self.last = Some(update.last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_new_card_defaults() {
        let card = Card::new("le chat", "the cat", now());
        assert_eq!(card.ease, DEFAULT_EASE);
        assert_eq!(card.reps, 0);
        assert_eq!(card.interval, 0);
        assert_eq!(card.due, now());
        assert!(card.is_new());
        assert!(card.is_due(now()));
    }

    #[test]
    fn test_builders() {
        let card = Card::new("manger", "to eat", now())
            .with_topic("food")
            .with_part_of_speech("verb")
            .with_tags(["a1", "er-verbs"]);
        assert_eq!(card.topic.as_deref(), Some("food"));
        assert_eq!(card.part_of_speech.as_deref(), Some("verb"));
        assert!(card.has_tag("a1"));
        assert!(card.has_tag("er-verbs"));
        assert!(!card.has_tag("b2"));
    }

    #[test]
    fn test_is_due_boundary() {
        let mut card = Card::new("la pomme", "the apple", now());
        card.due = now() + Duration::seconds(1);
        assert!(!card.is_due(now()));
        assert!(card.is_due(now() + Duration::seconds(1)));
    }

    #[test]
    fn test_apply_update() {
        let mut card = Card::new("le pain", "the bread", now());
        let update = ScheduleUpdate {
            ease: 2.36,
            reps: 0,
            interval: 1,
            due: now() + Duration::days(1),
            last: now(),
        };
        card.apply(&update);
        assert_eq!(card.ease, 2.36);
        assert_eq!(card.interval, 1);
        assert_eq!(card.due, now() + Duration::days(1));
        assert_eq!(card.last, Some(now()));
        assert!(!card.is_new());
    }
}
