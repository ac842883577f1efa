//! Spaced-repetition scheduling and deck selection for French vocabulary
//! drills.
//!
//! The crate has two independent parts:
//!
//! - **Scheduling** ([`schedule`]): given a card and a 0-5 answer quality,
//!   work out the next review. [`Sm2Scheduler`] adapts intervals to the
//!   card's ease; [`FixedScheduler`] walks a day table.
//! - **Deck selection** ([`filter`], [`deck`], [`due`]): narrow a card pool
//!   with topic / tag / part-of-speech pills, shuffle it, step through it,
//!   or pick the cards due for review.
//!
//! Both are pure and take the current time explicitly. [`store`] and
//! [`config`] read and write the TOML files the command-line front end uses.
//!
//! # Quick Start
//!
//! ```
//! use carnet::{Card, Grade, Scheduler, Sm2Scheduler, due};
//! use chrono::{Duration, Utc};
//!
//! let now = Utc::now();
//! let mut cards = vec![
//!     Card::new("le chat", "the cat", now).with_tags(["a1"]),
//!     Card::new("la souris", "the mouse", now).with_tags(["a2"]),
//! ];
//!
//! let idx = due::next_due(&cards, now).unwrap();
//! let update = Sm2Scheduler.schedule(&cards[idx], Grade::Good.into(), now);
//! cards[idx].apply(&update);
//!
//! assert_eq!(cards[idx].due, now + Duration::days(1));
//! assert_eq!(due::due_count(&cards, now), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod card;
pub mod config;
pub mod deck;
pub mod due;
pub mod error;
pub mod filter;
pub mod quality;
pub mod schedule;
pub mod stats;
pub mod store;

pub use card::{Card, DEFAULT_EASE, MIN_EASE};
pub use config::{Algorithm, Config, SchedulerConfig};
pub use deck::{Deck, DeckPrefs, build_deck};
pub use error::{Error, Result};
pub use filter::Filters;
pub use quality::{Grade, PASS_THRESHOLD, Quality};
pub use schedule::{
    AnyScheduler, DEFAULT_INTERVALS, FixedScheduler, MAX_INTERVAL, Preview, ScheduleUpdate,
    Scheduler, Sm2Scheduler, format_interval,
};
pub use stats::Summary;
pub use store::CardFile;
