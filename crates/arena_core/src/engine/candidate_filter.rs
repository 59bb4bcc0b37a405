//! Eligibility filtering for one track in one round.

use std::collections::HashSet;

use crate::models::{CompetitionRules, Competitor, Track};

/// Competitors still eligible for `track` this round: not already locked
/// into another track and below the per-track quota.
///
/// An empty result is a normal outcome and means the track cannot be
/// filled this round.
pub fn eligible_candidates<'a>(
    competitors: &'a [Competitor],
    track: Track,
    locked: &HashSet<String>,
    rules: &CompetitionRules,
) -> Vec<&'a Competitor> {
    competitors
        .iter()
        .filter(|c| !locked.contains(&c.name))
        .filter(|c| c.track(track).played < rules.matches_per_track)
        .collect()
}
