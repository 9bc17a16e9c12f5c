use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::model::ids::{CategoryId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when building scores.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("score out of range: {0} (expected 1-5)")]
    OutOfRange(u8),
}

//
// ─── SCORE ─────────────────────────────────────────────────────────────────────
//

/// Answer value for a single-choice question, 1 (lowest) to 5 (highest).
///
/// Serializes as a bare integer, matching the wire protocol. Scores only
/// ever travel client-to-server, so there is no deserialize path to guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Converts a numeric value to a `Score`.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` if the value is not in 1..=5.
    pub fn from_u8(value: u8) -> Result<Self, ScoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreError::OutOfRange(value))
        }
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// One selectable answer of a question group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    pub score: Score,
    pub label: String,
}

/// A single-choice question group: one prompt, five mutually exclusive options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

/// An assessment category grouping related questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}
