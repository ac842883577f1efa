//! Card pool summary.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::card::Card;

/// Counts and averages over a card pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Total number of cards.
    pub total: usize,
    /// Cards never reviewed.
    pub new: usize,
    /// Cards due now.
    pub due: usize,
    /// Cards with at least one successful repetition since their last lapse.
    pub learned: usize,
    /// Average ease over all cards (0 for an empty pool).
    pub avg_ease: f64,
    /// Average interval in days over reviewed cards (0 if none).
    pub avg_interval: f64,
}

impl Summary {
    /// Summarize `cards` at `now`.
    pub fn of(cards: &[Card], now: DateTime<Utc>) -> Self {
        let total = cards.len();
        if total == 0 {
            return Self::default();
        }

        let reviewed: Vec<&Card> = cards.iter().filter(|c| !c.is_new()).collect();
        let avg_interval = if reviewed.is_empty() {
            0.0
        } else {
            reviewed.iter().map(|c| f64::from(c.interval)).sum::<f64>() / reviewed.len() as f64
        };

        Self {
            total,
            new: total - reviewed.len(),
            due: cards.iter().filter(|c| c.is_due(now)).count(),
            learned: cards.iter().filter(|c| c.reps >= 1).count(),
            avg_ease: cards.iter().map(|c| c.ease).sum::<f64>() / total as f64,
            avg_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Quality, Scheduler, Sm2Scheduler};
    use chrono::TimeZone;

    #[test]
    fn test_empty_pool() {
        assert_eq!(Summary::of(&[], Utc::now()), Summary::default());
    }

    #[test]
    fn test_counts() {
        let now = Utc.with_ymd_and_hms(2026, 10, 14, 9, 0, 0).unwrap();
        let mut cards = vec![
            Card::new("le vin", "the wine", now),
            Card::new("le fromage", "the cheese", now),
            Card::new("le beurre", "the butter", now),
        ];
        let update = Sm2Scheduler.schedule(&cards[0], Quality::GOOD, now);
        cards[0].apply(&update);
        let update = Sm2Scheduler.schedule(&cards[1], Quality::AGAIN, now);
        cards[1].apply(&update);

        let summary = Summary::of(&cards, now);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.new, 1);
        assert_eq!(summary.due, 1);
        assert_eq!(summary.learned, 1);
        assert!((summary.avg_interval - 1.0).abs() < 1e-9);
        assert!((summary.avg_ease - (2.5 + 1.7 + 2.5) / 3.0).abs() < 1e-9);
    }
}
