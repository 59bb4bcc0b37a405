//! Per-round diagnostic log.
//!
//! The log explains why each pairing was chosen and why unfilled tracks
//! were skipped. It is informational output for operators and the UI
//! layer; the pairing algorithm never reads it back.

use serde::{Deserialize, Serialize};

use super::game_match::ScheduledMatch;
use super::track::Track;

/// One pairing decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairingLogEntry {
    pub track: Track,
    pub first: String,
    pub second: String,
    /// First competitor's track record at pairing time, e.g. "2W-1L (3/3 played)".
    pub first_record: String,
    /// Second competitor's track record at pairing time.
    pub second_record: String,
    /// Short headline reason for the choice.
    pub reason: String,
    /// Ordered free-text rationale details.
    pub details: Vec<String>,
}

/// A track that could not be filled this round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedTrack {
    pub track: Track,
    pub reason: String,
}

/// Diagnostic output for one generated round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundLog {
    pub round: u32,
    pub entries: Vec<PairingLogEntry>,
    pub skipped: Vec<SkippedTrack>,
}

impl RoundLog {
    pub fn new(round: u32) -> Self {
        Self {
            round,
            entries: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Output of the round generator: up to one match per track, plus the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundPairings {
    pub round: u32,
    pub matches: Vec<ScheduledMatch>,
    pub log: RoundLog,
}
