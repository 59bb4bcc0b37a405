//! Round pairing generation.
//!
//! Greedy, track-order randomized: the three tracks are shuffled each
//! round so no single track systematically gets first pick of the best
//! eligible competitors, then each track in that order takes the best
//! available pair and locks both competitors out of the remaining tracks.
//! The greedy choice for an earlier track can make a later track
//! infeasible; that trade-off is intentional and must stay.

use std::collections::HashSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    CompetitionRules, Competitor, PairingLogEntry, RoundLog, RoundPairings, ScheduledMatch,
    SkippedTrack, Track,
};

use super::candidate_filter::eligible_candidates;
use super::pair_scorer::{best_pair, ScoredPair};

/// Generate up to one match per track for `round`, plus the diagnostic
/// log. Pure with respect to the inputs; the only nondeterminism comes
/// from the injected `rng`.
pub fn generate_round_pairings(
    competitors: &[Competitor],
    history: &[ScheduledMatch],
    round: u32,
    rules: &CompetitionRules,
    rng: &mut impl Rng,
) -> RoundPairings {
    let mut order = Track::ALL;
    order.shuffle(rng);

    let mut locked: HashSet<String> = HashSet::new();
    let mut matches = Vec::new();
    let mut log = RoundLog::new(round);

    for track in order {
        let candidates = eligible_candidates(competitors, track, &locked, rules);
        match best_pair(&candidates, track, history, rules) {
            Ok(pair) => {
                debug!(
                    "round {round} {track}: {} vs {}",
                    pair.first.name, pair.second.name
                );
                locked.insert(pair.first.name.clone());
                locked.insert(pair.second.name.clone());
                log.entries.push(log_entry(track, &pair, rules));
                matches.push(ScheduledMatch::new(
                    track,
                    pair.first.name.clone(),
                    pair.second.name.clone(),
                    round,
                ));
            }
            Err(failure) => {
                let reason = failure.reason();
                debug!("round {round} {track}: skipped ({reason})");
                log.skipped.push(SkippedTrack { track, reason });
            }
        }
    }

    RoundPairings {
        round,
        matches,
        log,
    }
}

fn log_entry(track: Track, pair: &ScoredPair<'_>, rules: &CompetitionRules) -> PairingLogEntry {
    let score = &pair.score;
    let reason = if score.is_last_chance {
        "last chance to ever meet"
    } else if score.is_urgent() {
        "running out of opponents"
    } else if score.cross_game_encounters == 0 {
        "first-time matchup"
    } else {
        "already met in another game"
    };

    let mut details = Vec::new();
    if score.cross_game_encounters > 0 {
        details.push(format!(
            "met in {} other game(s)",
            score.cross_game_encounters
        ));
    }
    details.push(if score.record_diff <= 1 {
        format!("records aligned (gap {})", score.record_diff)
    } else {
        format!("record gap {}", score.record_diff)
    });
    if score.station_stickiness > 0 {
        details.push(format!(
            "{} of them stay at this station",
            score.station_stickiness
        ));
    }
    details.push(format!("scarcity {}", score.scarcity));

    PairingLogEntry {
        track,
        first: pair.first.name.clone(),
        second: pair.second.name.clone(),
        first_record: pair.first.track(track).summary(rules.matches_per_track),
        second_record: pair.second.track(track).summary(rules.matches_per_track),
        reason: reason.to_string(),
        details,
    }
}
