//! Catch-up volunteer matching.
//!
//! After the main schedule, competitors who fell short of their quota get
//! extra matches against "volunteers" who already finished theirs. The
//! search degrades gracefully: clean closest-skill pick first, then
//! rematch-allowed, then a forced random draft, then an explicit
//! no-volunteer result. Callers handle a decline by re-invoking with the
//! declined name added to the exclusions.

use log::debug;
use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::models::{CompetitionRules, Competitor, Track};

/// Result of a volunteer search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerOutcome {
    pub volunteer: Option<String>,
    /// No clean (non-rematch, non-excluded) candidate was available.
    pub exhausted: bool,
    /// Every non-excluded candidate was gone; the volunteer was drafted
    /// at random from the full quota-complete pool, ignoring exclusions.
    pub forced: bool,
    /// Size of the pool the pick was drawn from; 0 when no volunteer
    /// exists.
    pub eligible_count: usize,
}

impl VolunteerOutcome {
    fn none() -> Self {
        Self {
            volunteer: None,
            exhausted: false,
            forced: false,
            eligible_count: 0,
        }
    }
}

/// Find a volunteer for `shortfall`'s remaining need in `track`.
///
/// `excluded` carries prior declines plus volunteers already locked into
/// other catch-up matches this cycle, so one volunteer is never
/// double-booked.
pub fn find_catch_up_volunteer(
    competitors: &[Competitor],
    shortfall: &str,
    track: Track,
    excluded: &[String],
    rules: &CompetitionRules,
    rng: &mut impl Rng,
) -> VolunteerOutcome {
    let Some(shortfall_c) = competitors.iter().find(|c| c.name == shortfall) else {
        return VolunteerOutcome::none();
    };

    let finished: Vec<&Competitor> = competitors
        .iter()
        .filter(|c| c.name != shortfall && c.has_reached_quota(rules))
        .collect();
    if finished.is_empty() {
        return VolunteerOutcome::none();
    }

    let available: Vec<&Competitor> = finished
        .iter()
        .copied()
        .filter(|c| !excluded.contains(&c.name))
        .collect();

    // Clean candidates: no prior meeting with the shortfall competitor in
    // this track.
    let clean: Vec<&Competitor> = available
        .iter()
        .copied()
        .filter(|c| !shortfall_c.track(track).has_faced(&c.name))
        .collect();

    if let Some(pick) = closest_by_record(&clean, shortfall_c) {
        return VolunteerOutcome {
            volunteer: Some(pick.name.clone()),
            exhausted: false,
            forced: false,
            eligible_count: clean.len(),
        };
    }

    // Rematch allowed; matchmaking has no clean options left.
    if let Some(pick) = closest_by_record(&available, shortfall_c) {
        debug!("{track} catch-up for {shortfall}: rematch volunteer {}", pick.name);
        return VolunteerOutcome {
            volunteer: Some(pick.name.clone()),
            exhausted: true,
            forced: false,
            eligible_count: available.len(),
        };
    }

    // Exclusions emptied the pool entirely; draft uniformly at random
    // from every quota-complete competitor.
    let pick = finished[rng.gen_range(0..finished.len())];
    debug!("{track} catch-up for {shortfall}: forced draft {}", pick.name);
    VolunteerOutcome {
        volunteer: Some(pick.name.clone()),
        exhausted: true,
        forced: true,
        eligible_count: finished.len(),
    }
}

/// Closest aggregate win-loss differential to the shortfall competitor;
/// first in roster order on ties.
fn closest_by_record<'a>(pool: &[&'a Competitor], target: &Competitor) -> Option<&'a Competitor> {
    pool.iter()
        .copied()
        .min_by_key(|c| (c.diff() - target.diff()).abs())
}
