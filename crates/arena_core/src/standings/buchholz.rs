//! Opponent-strength ("Buchholz") scoring.

use std::collections::HashMap;

use crate::models::{Competitor, Track};

/// Recompute per-track and aggregate opponent-strength scores.
///
/// A competitor's track score is the sum of the CURRENT point totals of
/// every opponent recorded in that track; the aggregate is the sum of the
/// three. Opponents' totals keep moving after a match is recorded, so the
/// score is derived fresh from the snapshot on every call rather than
/// maintained incrementally. Only the Buchholz fields change.
pub fn compute_standings_scores(competitors: &[Competitor]) -> Vec<Competitor> {
    let points: HashMap<&str, u32> = competitors
        .iter()
        .map(|c| (c.name.as_str(), c.points))
        .collect();

    competitors
        .iter()
        .cloned()
        .map(|mut c| {
            let mut aggregate = 0;
            for track in Track::ALL {
                let rec = c.track_mut(track);
                rec.buchholz = rec
                    .opponents
                    .iter()
                    .map(|o| points.get(o.as_str()).copied().unwrap_or(0))
                    .sum();
                aggregate += rec.buchholz;
            }
            c.buchholz = aggregate;
            c
        })
        .collect()
}
