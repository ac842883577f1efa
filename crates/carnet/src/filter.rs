//! Pill-group filters for review mode.
//!
//! The review screen shows three rows of pills: topics, tags and parts of
//! speech. Selecting pills narrows the deck. Groups combine with AND, pills
//! inside a group combine with OR, and a group with nothing selected does not
//! filter at all.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Selected pills for each group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Selected topics.
    #[serde(default)]
    pub topics: BTreeSet<String>,
    /// Selected tags.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Selected parts of speech.
    #[serde(default)]
    pub parts_of_speech: BTreeSet<String>,
}

impl Filters {
    /// No pills selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select topics.
    pub fn topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics.extend(topics.into_iter().map(Into::into));
        self
    }

    /// Select tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Select parts of speech.
    pub fn parts_of_speech<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parts_of_speech
            .extend(parts.into_iter().map(Into::into));
        self
    }

    /// Flip a topic pill. Returns whether it is now selected.
    pub fn toggle_topic(&mut self, topic: &str) -> bool {
        toggle(&mut self.topics, topic)
    }

    /// Flip a tag pill. Returns whether it is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        toggle(&mut self.tags, tag)
    }

    /// Flip a part-of-speech pill. Returns whether it is now selected.
    pub fn toggle_part_of_speech(&mut self, pos: &str) -> bool {
        toggle(&mut self.parts_of_speech, pos)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.topics.clear();
        self.tags.clear();
        self.parts_of_speech.clear();
    }

    /// Whether no group is active.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty() && self.tags.is_empty() && self.parts_of_speech.is_empty()
    }

    /// Whether `card` passes every active group.
    pub fn matches(&self, card: &Card) -> bool {
        matches_value(&self.topics, card.topic.as_deref())
            && matches_value(&self.parts_of_speech, card.part_of_speech.as_deref())
            && (self.tags.is_empty() || self.tags.iter().any(|t| card.tags.contains(t)))
    }

    /// Pool indices of the cards that pass, in pool order.
    pub fn apply(&self, cards: &[Card]) -> Vec<usize> {
        cards
            .iter()
            .enumerate()
            .filter(|(_, card)| self.matches(card))
            .map(|(i, _)| i)
            .collect()
    }
}

fn matches_value(selected: &BTreeSet<String>, value: Option<&str>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.contains(v))
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}
