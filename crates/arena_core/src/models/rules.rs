//! Competition tunables.

use serde::{Deserialize, Serialize};

use super::track::Track;

/// Tunable competition parameters.
///
/// Front-ends can load these from a JSON file or use `Default`, which
/// matches the standard format: three matches per competitor per track,
/// one point per win, two for a dominant win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionRules {
    /// Target matches per competitor, per track.
    pub matches_per_track: u32,
    /// Points awarded for a regular win.
    pub win_points: u32,
    /// Points awarded for a dominant (decisive-margin) win.
    pub dominant_win_points: u32,
    /// Base of the scarcity measure: scarcity = base − remaining options.
    pub scarcity_base: i32,
}

impl Default for CompetitionRules {
    fn default() -> Self {
        Self {
            matches_per_track: 3,
            win_points: 1,
            dominant_win_points: 2,
            scarcity_base: 10,
        }
    }
}

impl CompetitionRules {
    /// Aggregate match quota across all tracks.
    pub fn total_quota(&self) -> u32 {
        self.matches_per_track * Track::ALL.len() as u32
    }
}
