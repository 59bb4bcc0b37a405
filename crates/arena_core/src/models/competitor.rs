//! Competitor roster entries and their competition records.
//!
//! The display name is the engine-wide identity key: opponent lists, match
//! participants and volunteer exclusions all refer to competitors by name.
//! Registration guarantees unique names before anything reaches the engine.

use serde::{Deserialize, Serialize};

use super::rules::CompetitionRules;
use super::track::{Track, TrackMap};

/// Per-track slice of a competitor's record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub wins: u32,
    pub losses: u32,
    /// Matches played in this track, draws included.
    pub played: u32,
    /// Wins by the track's decisive margin.
    pub dominant_wins: u32,
    /// Opponents faced in this track, in order. Doubles as the permanent
    /// no-rematch set: a name appears at most once, for the life of the
    /// competition.
    pub opponents: Vec<String>,
    /// Opponent-strength score. Recomputed from current opponent point
    /// totals on every standings request, never accumulated.
    #[serde(default)]
    pub buchholz: u32,
}

impl TrackRecord {
    /// Signed win-loss differential.
    pub fn diff(&self) -> i64 {
        self.wins as i64 - self.losses as i64
    }

    pub fn has_faced(&self, name: &str) -> bool {
        self.opponents.iter().any(|o| o == name)
    }

    /// Record summary in the diagnostic-log format, e.g. "2W-1L (3/3 played)".
    pub fn summary(&self, quota: u32) -> String {
        format!(
            "{}W-{}L ({}/{} played)",
            self.wins, self.losses, self.played, quota
        )
    }
}

/// A roster entry and its full competition record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    /// Display name; also the identity key.
    pub name: String,
    /// Per-track records.
    pub tracks: TrackMap<TrackRecord>,
    /// Aggregate wins across all tracks.
    pub wins: u32,
    /// Aggregate losses across all tracks.
    pub losses: u32,
    /// Aggregate point total.
    pub points: u32,
    /// Aggregate dominant-win count.
    pub dominant_wins: u32,
    /// Fan bets placed on this competitor. Only consulted as the
    /// fan-favorite tie-break signal; settlement happens elsewhere.
    pub bets_received: u32,
    /// Aggregate opponent-strength score; recomputed with the per-track
    /// scores on every standings request.
    #[serde(default)]
    pub buchholz: u32,
}

impl Competitor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: TrackMap::default(),
            wins: 0,
            losses: 0,
            points: 0,
            dominant_wins: 0,
            bets_received: 0,
            buchholz: 0,
        }
    }

    pub fn track(&self, track: Track) -> &TrackRecord {
        self.tracks.get(track)
    }

    pub fn track_mut(&mut self, track: Track) -> &mut TrackRecord {
        self.tracks.get_mut(track)
    }

    /// Aggregate matches played, equal to the sum of the track counts.
    pub fn matches_played(&self) -> u32 {
        self.tracks.iter().map(|(_, rec)| rec.played).sum()
    }

    /// Aggregate signed win-loss differential.
    pub fn diff(&self) -> i64 {
        self.wins as i64 - self.losses as i64
    }

    pub fn has_faced_anywhere(&self, name: &str) -> bool {
        Track::ALL.into_iter().any(|t| self.track(t).has_faced(name))
    }

    /// Whether the full per-roster match quota has been met.
    pub fn has_reached_quota(&self, rules: &CompetitionRules) -> bool {
        self.matches_played() >= rules.total_quota()
    }
}
