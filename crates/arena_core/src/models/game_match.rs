//! Scheduled matches and recorded outcomes.

use serde::{Deserialize, Serialize};

use super::track::Track;

/// Recorded result of a finished match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Decisive result. `dominant` marks a win by the track's decisive
    /// margin, which scores the higher point value.
    Win { winner: String, dominant: bool },
    /// Neither side prevailed. Advances quota accounting but awards no
    /// points.
    Draw,
}

impl MatchOutcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchOutcome::Win { winner, .. } => Some(winner),
            MatchOutcome::Draw => None,
        }
    }
}

/// Catch-up annotations for a shortfall match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchUp {
    /// The competitor who fell short of their quota.
    pub shortfall: String,
    /// The quota-complete competitor drafted to play them.
    pub volunteer: String,
    /// The volunteer pool had no clean (non-rematch, non-excluded)
    /// candidate left.
    pub exhausted: bool,
    /// The volunteer was drafted at random, ignoring exclusions.
    pub forced: bool,
}

/// A match proposed by the pairing engine or the catch-up matcher.
///
/// The engine never records outcomes itself; the surrounding layer applies
/// results through the state-transition functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    pub track: Track,
    pub first: String,
    pub second: String,
    pub round: u32,
    /// `None` until a result is recorded.
    pub outcome: Option<MatchOutcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catch_up: Option<CatchUp>,
}

impl ScheduledMatch {
    pub fn new(
        track: Track,
        first: impl Into<String>,
        second: impl Into<String>,
        round: u32,
    ) -> Self {
        Self {
            track,
            first: first.into(),
            second: second.into(),
            round,
            outcome: None,
            catch_up: None,
        }
    }

    pub fn involves(&self, name: &str) -> bool {
        self.first == name || self.second == name
    }

    pub fn opponent_of(&self, name: &str) -> Option<&str> {
        if self.first == name {
            Some(&self.second)
        } else if self.second == name {
            Some(&self.first)
        } else {
            None
        }
    }

    /// Winner name, if a decisive outcome has been recorded.
    pub fn winner(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(|o| o.winner())
    }
}
