//! TOML card files.
//!
//! # Example TOML
//!
//! ```toml
//! [[cards]]
//! id = 1
//! front = "le chat"
//! back = "the cat"
//! topic = "animals"
//! part_of_speech = "noun"
//! tags = ["a1"]
//! due = "2026-10-14T09:00:00Z"
//!
//! [[cards]]
//! front = "manger"
//! back = "to eat"
//! part_of_speech = "verb"
//! due = "2026-10-14T09:00:00Z"
//! ease = 2.36
//! reps = 2
//! interval = 6
//! last = "2026-10-08T09:00:00Z"
//! ```
//!
//! Scheduling fields default to a new card. Cards without an `id` are given
//! the next free one when the file is parsed.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::card::{Card, MIN_EASE};
use crate::error::{Error, Result};

/// The contents of a card file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardFile {
    /// Cards in file order.
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl CardFile {
    /// Load a card file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file = Self::parse(&content)?;
        debug!(path = %path.display(), cards = file.cards.len(), "loaded card file");
        Ok(file)
    }

    /// Load a card file, or start empty if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.display(), "card file missing, starting empty");
            Ok(Self::default())
        }
    }

    /// Parse a card file from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        let mut file: CardFile = toml::from_str(content)?;
        file.validate()?;
        file.assign_ids();
        Ok(file)
    }

    /// Check ids are unique and every card respects the ease floor.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for card in &self.cards {
            if card.id != 0 && !seen.insert(card.id) {
                return Err(Error::DuplicateCard(card.id));
            }
            if !card.ease.is_finite() || card.ease < MIN_EASE {
                return Err(Error::InvalidCard(format!(
                    "'{}' has ease {} below {}",
                    card.front, card.ease, MIN_EASE
                )));
            }
            if card.reps >= 1 && card.interval == 0 {
                return Err(Error::InvalidCard(format!(
                    "'{}' has {} reps but a zero-day interval",
                    card.front, card.reps
                )));
            }
        }
        Ok(())
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the card file to disk.
    ///
    /// The content goes to a temporary file next to `path` that is then
    /// renamed over it, so an interrupted write leaves the old file intact.
    pub fn write_toml(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_toml()?;
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        debug!(path = %path.display(), cards = self.cards.len(), "wrote card file");
        Ok(())
    }

    /// Add a card, giving it the next free id. Returns the id.
    pub fn add(&mut self, mut card: Card) -> u64 {
        card.id = self.next_id();
        let id = card.id;
        self.cards.push(card);
        id
    }

    /// Look up a card by id.
    pub fn get(&self, id: u64) -> Result<&Card> {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .ok_or(Error::CardNotFound(id))
    }

    /// Look up a card by id for rescheduling.
    pub fn get_mut(&mut self, id: u64) -> Result<&mut Card> {
        self.cards
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(Error::CardNotFound(id))
    }

    /// Delete a card.
    pub fn remove(&mut self, id: u64) -> Result<Card> {
        let pos = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::CardNotFound(id))?;
        Ok(self.cards.remove(pos))
    }

    fn next_id(&self) -> u64 {
        self.cards.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }

    fn assign_ids(&mut self) {
        let mut next = self.next_id();
        for card in self.cards.iter_mut().filter(|c| c.id == 0) {
            card.id = next;
            next += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const SAMPLE: &str = r#"
[[cards]]
id = 4
front = "le chat"
back = "the cat"
tags = ["a1"]
due = "2026-10-14T09:00:00Z"

[[cards]]
front = "le chien"
back = "the dog"
due = "2026-10-14T09:00:00Z"
"#;

    #[test]
    fn test_parse_defaults_and_ids() {
        let file = CardFile::parse(SAMPLE).unwrap();
        assert_eq!(file.cards.len(), 2);
        assert_eq!(file.cards[0].id, 4);
        assert_eq!(file.cards[1].id, 5);
        assert_eq!(file.cards[1].ease, 2.5);
        assert_eq!(file.cards[1].reps, 0);
        assert!(file.cards[1].is_new());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let content = r#"
[[cards]]
id = 1
front = "a"
back = "b"
due = "2026-10-14T09:00:00Z"

[[cards]]
id = 1
front = "c"
back = "d"
due = "2026-10-14T09:00:00Z"
"#;
        assert!(matches!(
            CardFile::parse(content),
            Err(Error::DuplicateCard(1))
        ));
    }

    #[test]
    fn test_low_ease_rejected() {
        let content = r#"
[[cards]]
front = "a"
back = "b"
due = "2026-10-14T09:00:00Z"
ease = 1.1
"#;
        assert!(matches!(
            CardFile::parse(content),
            Err(Error::InvalidCard(_))
        ));
    }

    #[test]
    fn test_reviewed_card_with_zero_interval_rejected() {
        let content = r#"
[[cards]]
front = "a"
back = "b"
due = "2026-10-14T09:00:00Z"
reps = 2
interval = 0
"#;
        assert!(matches!(
            CardFile::parse(content),
            Err(Error::InvalidCard(_))
        ));

        let fresh = r#"
[[cards]]
front = "a"
back = "b"
due = "2026-10-14T09:00:00Z"
reps = 0
interval = 0
"#;
        assert!(CardFile::parse(fresh).is_ok());
    }

    #[test]
    fn test_add_get_remove() {
        let mut file = CardFile::default();
        let a = file.add(Card::new("oui", "yes", Utc::now()));
        let b = file.add(Card::new("non", "no", Utc::now()));
        assert_eq!((a, b), (1, 2));

        file.get_mut(b).unwrap().reps = 3;
        assert_eq!(file.get(b).unwrap().reps, 3);

        let removed = file.remove(a).unwrap();
        assert_eq!(removed.front, "oui");
        assert!(matches!(file.get(a), Err(Error::CardNotFound(1))));
        assert!(matches!(file.remove(99), Err(Error::CardNotFound(99))));
    }
}
