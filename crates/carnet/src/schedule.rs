//! Spaced-repetition scheduling.
//!
//! Two schedulers share the [`Scheduler`] trait:
//!
//! - [`Sm2Scheduler`]: the adaptive SuperMemo 2 variant. Intervals grow by
//!   the card's ease, and ease moves with every answer.
//! - [`FixedScheduler`]: walks a fixed table of day intervals, one step per
//!   successful review.
//!
//! Both are pure: they read a card and return a [`ScheduleUpdate`] without
//! touching it. Apply the update with [`Card::apply`].
//!
//! # Example
//!
//! ```
//! use carnet::{Card, Quality, Scheduler, Sm2Scheduler};
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let mut card = Card::new("le chien", "the dog", now);
//!
//! let update = Sm2Scheduler.schedule(&card, Quality::GOOD, now);
//! card.apply(&update);
//!
//! assert_eq!(card.reps, 1);
//! assert_eq!(card.interval, 1);
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::{Card, MIN_EASE};
use crate::error::{Error, Result};
use crate::quality::{Grade, Quality};

/// Default day table for [`FixedScheduler`].
pub const DEFAULT_INTERVALS: [u32; 5] = [1, 3, 7, 14, 30];

/// Longest interval either scheduler hands out, roughly a century.
pub const MAX_INTERVAL: u32 = 36_500;

/// The fields a review changes on a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleUpdate {
    /// New ease.
    pub ease: f64,
    /// New repetition count (or step index for the fixed table).
    pub reps: u32,
    /// New interval in days.
    pub interval: u32,
    /// Next due time.
    pub due: DateTime<Utc>,
    /// Review time.
    pub last: DateTime<Utc>,
}

impl ScheduleUpdate {
    /// Clamps `interval` to [`MAX_INTERVAL`]; `due` saturates at chrono's
    /// latest representable time.
    fn stamped(ease: f64, reps: u32, interval: u32, now: DateTime<Utc>) -> Self {
        let interval = interval.min(MAX_INTERVAL);
        let due = now
            .checked_add_signed(Duration::days(i64::from(interval)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self {
            ease,
            reps,
            interval,
            due,
            last: now,
        }
    }
}

/// Intervals each answer button would produce, shown before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Interval after "again".
    pub again: u32,
    /// Interval after "hard".
    pub hard: u32,
    /// Interval after "good".
    pub good: u32,
    /// Interval after "easy".
    pub easy: u32,
}

impl Preview {
    /// Interval for one grade.
    pub fn get(&self, grade: Grade) -> u32 {
        match grade {
            Grade::Again => self.again,
            Grade::Hard => self.hard,
            Grade::Good => self.good,
            Grade::Easy => self.easy,
        }
    }

    /// `(grade, interval)` pairs in button order.
    pub fn iter(&self) -> impl Iterator<Item = (Grade, u32)> + '_ {
        Grade::ALL.into_iter().map(move |g| (g, self.get(g)))
    }
}

/// A review scheduling algorithm.
pub trait Scheduler {
    /// Compute the card's state after answering with `quality` at `now`.
    fn schedule(&self, card: &Card, quality: Quality, now: DateTime<Utc>) -> ScheduleUpdate;

    /// Short algorithm name for logs and output.
    fn name(&self) -> &'static str;

    /// Intervals for each answer button.
    fn preview(&self, card: &Card, now: DateTime<Utc>) -> Preview {
        let interval = |grade: Grade| self.schedule(card, grade.into(), now).interval;
        Preview {
            again: interval(Grade::Again),
            hard: interval(Grade::Hard),
            good: interval(Grade::Good),
            easy: interval(Grade::Easy),
        }
    }
}

/// Adaptive SM-2 scheduler.
///
/// - Lapse (quality below 3): `reps = 0`, `interval = 1`.
/// - First pass: 1 day. Second pass: 6 days. After that the previous
///   interval times the current ease, rounded.
/// - Ease moves by `0.1 - (5 - q) * (0.08 + (5 - q) * 0.02)` on every review
///   and never drops below [`MIN_EASE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sm2Scheduler;

impl Sm2Scheduler {
    /// Ease after answering with `quality`.
    pub fn next_ease(ease: f64, quality: Quality) -> f64 {
        let d = quality.shortfall();
        // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02))
        (ease + (0.1 - d * (0.08 + d * 0.02))).max(MIN_EASE)
    }
}

impl Scheduler for Sm2Scheduler {
    fn schedule(&self, card: &Card, quality: Quality, now: DateTime<Utc>) -> ScheduleUpdate {
        let (reps, interval) = if quality.is_pass() {
            let interval = match card.reps {
                0 => 1,
                1 => 6,
                _ => ((f64::from(card.interval) * card.ease).round() as u32).max(1),
            };
            (card.reps.saturating_add(1), interval.min(MAX_INTERVAL))
        } else {
            (0, 1)
        };

        let ease = Self::next_ease(card.ease, quality);

        debug!(
            card = card.id,
            quality = quality.value(),
            reps,
            interval,
            ease,
            "sm2 review"
        );

        ScheduleUpdate::stamped(ease, reps, interval, now)
    }

    fn name(&self) -> &'static str {
        "sm2"
    }
}

/// Fixed interval table scheduler.
///
/// `reps` is the zero-based step into the table. A lapse sends the card back
/// to step 0, a pass moves it one step forward; the interval is the entry at
/// that step, holding at the last entry once the table runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedScheduler {
    intervals: Vec<u32>,
}

impl FixedScheduler {
    /// Create a scheduler over `intervals`.
    ///
    /// The table must be non-empty and every entry at least one day.
    pub fn new(intervals: Vec<u32>) -> Result<Self> {
        if intervals.is_empty() {
            return Err(Error::InvalidIntervals("table is empty".to_string()));
        }
        if let Some(pos) = intervals.iter().position(|&days| days == 0) {
            return Err(Error::InvalidIntervals(format!(
                "entry {} is zero days",
                pos
            )));
        }
        if let Some(pos) = intervals.iter().position(|&days| days > MAX_INTERVAL) {
            return Err(Error::InvalidIntervals(format!(
                "entry {} exceeds {} days",
                pos, MAX_INTERVAL
            )));
        }
        Ok(Self { intervals })
    }

    /// The day table.
    pub fn intervals(&self) -> &[u32] {
        &self.intervals
    }

    fn interval_at(&self, step: u32) -> u32 {
        let last = self.intervals.len() - 1;
        let idx = (step as usize).min(last);
        self.intervals[idx]
    }
}

impl Default for FixedScheduler {
    fn default() -> Self {
        Self {
            intervals: DEFAULT_INTERVALS.to_vec(),
        }
    }
}

impl Scheduler for FixedScheduler {
    fn schedule(&self, card: &Card, quality: Quality, now: DateTime<Utc>) -> ScheduleUpdate {
        let reps = if quality.is_pass() {
            card.reps.saturating_add(1)
        } else {
            0
        };
        let interval = self.interval_at(reps);

        debug!(
            card = card.id,
            quality = quality.value(),
            step = reps,
            interval,
            "fixed review"
        );

        ScheduleUpdate::stamped(card.ease, reps, interval, now)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Either scheduler, chosen at runtime from configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyScheduler {
    /// Adaptive SM-2.
    Sm2(Sm2Scheduler),
    /// Fixed interval table.
    Fixed(FixedScheduler),
}

impl Default for AnyScheduler {
    fn default() -> Self {
        AnyScheduler::Sm2(Sm2Scheduler)
    }
}

impl Scheduler for AnyScheduler {
    fn schedule(&self, card: &Card, quality: Quality, now: DateTime<Utc>) -> ScheduleUpdate {
        match self {
            AnyScheduler::Sm2(s) => s.schedule(card, quality, now),
            AnyScheduler::Fixed(s) => s.schedule(card, quality, now),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AnyScheduler::Sm2(s) => s.name(),
            AnyScheduler::Fixed(s) => s.name(),
        }
    }
}

/// Format an interval in days to a compact label.
pub fn format_interval(days: u32) -> String {
    match days {
        0 => "now".to_string(),
        1..=6 => format!("{}d", days),
        7..=29 => format!("{}w", days / 7),
        30..=364 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}
