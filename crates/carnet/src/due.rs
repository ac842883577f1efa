//! Due-card selection for flashcard mode.

use chrono::{DateTime, Utc};

use crate::card::Card;

/// Pool indices of cards due at `now`, oldest due first.
///
/// Cards with the same due time keep their pool order.
pub fn due_indices(cards: &[Card], now: DateTime<Utc>) -> Vec<usize> {
    let mut due: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.is_due(now))
        .map(|(i, _)| i)
        .collect();
    due.sort_by_key(|&i| cards[i].due);
    due
}

/// The card to present next, if anything is due.
pub fn next_due(cards: &[Card], now: DateTime<Utc>) -> Option<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.is_due(now))
        .min_by_key(|(_, card)| card.due)
        .map(|(i, _)| i)
}

/// Number of cards due at `now`.
pub fn due_count(cards: &[Card], now: DateTime<Utc>) -> usize {
    cards.iter().filter(|card| card.is_due(now)).count()
}
