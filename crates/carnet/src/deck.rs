//! Deck building and navigation.
//!
//! A [`Deck`] is the ordered selection of cards being drilled, plus a cursor.
//! It holds indices into the caller's card pool rather than the cards
//! themselves, so the pool can be rescheduled while the deck is live.
//! Rebuild it whenever the filters or preferences change.
//!
//! # Example
//!
//! ```
//! use carnet::{build_deck, Card, DeckPrefs, Filters};
//! use chrono::Utc;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let now = Utc::now();
//! let cards = vec![
//!     Card::new("le lait", "the milk", now).with_topic("food"),
//!     Card::new("la voiture", "the car", now).with_topic("transport"),
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let filters = Filters::new().topics(["food"]);
//! let deck = build_deck(&cards, &filters, DeckPrefs::default(), &mut rng);
//!
//! assert_eq!(deck.current(), Some(0));
//! ```

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::card::Card;
use crate::filter::Filters;

/// How the deck is ordered and traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPrefs {
    /// Shuffle the filtered cards.
    #[serde(default = "default_true")]
    pub randomize: bool,
    /// Visit every card once before repeating. When off, each step picks a
    /// random card and repeats are possible.
    #[serde(default = "default_true")]
    pub without_replacement: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DeckPrefs {
    fn default() -> Self {
        Self {
            randomize: true,
            without_replacement: true,
        }
    }
}

/// An ordered selection of pool indices with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    order: Vec<usize>,
    cursor: usize,
    prefs: DeckPrefs,
}

/// Filter `cards`, optionally shuffle, and put the cursor on the first card.
pub fn build_deck<R: Rng + ?Sized>(
    cards: &[Card],
    filters: &Filters,
    prefs: DeckPrefs,
    rng: &mut R,
) -> Deck {
    let mut order = filters.apply(cards);
    if prefs.randomize {
        order.shuffle(rng);
    }

    debug!(
        pool = cards.len(),
        selected = order.len(),
        randomize = prefs.randomize,
        without_replacement = prefs.without_replacement,
        "built deck"
    );

    Deck {
        order,
        cursor: 0,
        prefs,
    }
}

impl Deck {
    /// Recompute from the pool after a filter or preference change.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        cards: &[Card],
        filters: &Filters,
        prefs: DeckPrefs,
        rng: &mut R,
    ) {
        *self = build_deck(cards, filters, prefs, rng);
    }

    /// Pool index under the cursor.
    pub fn current(&self) -> Option<usize> {
        self.order.get(self.cursor).copied()
    }

    /// Card under the cursor.
    pub fn current_card<'a>(&self, cards: &'a [Card]) -> Option<&'a Card> {
        self.current().and_then(|i| cards.get(i))
    }

    /// Move to the next card and return its pool index.
    ///
    /// Without replacement the cursor advances and wraps to the start,
    /// reshuffling first if `randomize` is set. Otherwise the cursor jumps to
    /// a uniformly random position.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.order.is_empty() {
            return None;
        }

        if self.prefs.without_replacement {
            self.cursor += 1;
            if self.cursor >= self.order.len() {
                if self.prefs.randomize {
                    self.order.shuffle(rng);
                }
                self.cursor = 0;
                trace!(len = self.order.len(), "deck wrapped");
            }
        } else {
            self.cursor = rng.random_range(0..self.order.len());
        }

        self.current()
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the filters left nothing to drill.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cursor position within the deck.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Pool indices in deck order.
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// Preferences the deck was built with.
    pub fn prefs(&self) -> DeckPrefs {
        self.prefs
    }
}
