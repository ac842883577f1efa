//! Review quality scores.
//!
//! Quality ratings (0-5):
//! - 0: Complete blackout, no recall
//! - 1: Incorrect, but upon seeing answer, remembered
//! - 2: Incorrect, but answer seemed easy to recall
//! - 3: Correct response with serious difficulty
//! - 4: Correct response after hesitation
//! - 5: Perfect response with no hesitation
//!
//! The review screen only offers four buttons, see [`Grade`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest quality that counts as a successful recall.
pub const PASS_THRESHOLD: u8 = 3;

/// A review quality score in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quality(u8);

impl Quality {
    /// "Again" button.
    pub const AGAIN: Quality = Quality(0);
    /// "Hard" button.
    pub const HARD: Quality = Quality(3);
    /// "Good" button.
    pub const GOOD: Quality = Quality(4);
    /// "Easy" button.
    pub const EASY: Quality = Quality(5);

    /// Create a quality score, rejecting anything above 5.
    pub fn new(value: u8) -> Result<Self> {
        if value > 5 {
            return Err(Error::InvalidQuality(value));
        }
        Ok(Self(value))
    }

    /// The raw score.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether this score counts as a successful recall.
    pub fn is_pass(self) -> bool {
        self.0 >= PASS_THRESHOLD
    }

    /// `5 - quality`, the distance from a perfect answer.
    pub(crate) fn shortfall(self) -> f64 {
        f64::from(5 - self.0)
    }
}

impl TryFrom<u8> for Quality {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Quality::new(value)
    }
}

impl From<Quality> for u8 {
    fn from(q: Quality) -> u8 {
        q.0
    }
}

impl From<Grade> for Quality {
    fn from(grade: Grade) -> Self {
        match grade {
            Grade::Again => Quality::AGAIN,
            Grade::Hard => Quality::HARD,
            Grade::Good => Quality::GOOD,
            Grade::Easy => Quality::EASY,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quality {
    type Err = Error;

    /// Accepts a number (`"4"`) or a grade name (`"good"`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(value) = s.parse::<u8>() {
            return Quality::new(value);
        }
        s.parse::<Grade>().map(Quality::from)
    }
}

/// The four answer buttons shown after revealing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    /// Not recalled.
    Again,
    /// Recalled with serious difficulty.
    Hard,
    /// Recalled after hesitation.
    Good,
    /// Recalled instantly.
    Easy,
}

impl Grade {
    /// All grades in button order.
    pub const ALL: [Grade; 4] = [Grade::Again, Grade::Hard, Grade::Good, Grade::Easy];

    /// Lowercase button label.
    pub fn label(self) -> &'static str {
        match self {
            Grade::Again => "again",
            Grade::Hard => "hard",
            Grade::Good => "good",
            Grade::Easy => "easy",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Grade {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "again" | "a" => Ok(Grade::Again),
            "hard" | "h" => Ok(Grade::Hard),
            "good" | "g" => Ok(Grade::Good),
            "easy" | "e" => Ok(Grade::Easy),
            _ => Err(Error::UnknownGrade(s.to_string())),
        }
    }
}
