//! Pair enumeration and multi-factor priority scoring for one track.
//!
//! Given the eligible candidates for a track, every two-element
//! combination that has never met in that track is scored on five
//! factors, then the cascade in [`priority`] picks the winner. Each step
//! of the cascade is a strict partition: later factors are only consulted
//! among pairs that tie on every earlier one.

use std::cmp::Ordering;

use crate::models::{CompetitionRules, Competitor, ScheduledMatch, Track};

/// Scarcity at or above this means a competitor has at most two valid
/// opponents left in the track.
pub const URGENT_SCARCITY: i32 = 8;

/// A record gap at or above this is treated as a skill mismatch and
/// avoided.
pub const MISMATCH_RECORD_DIFF: u32 = 2;

/// Priority factors computed for one candidate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairScore {
    /// In how many of the other two tracks the pair has already met (0-2).
    pub cross_game_encounters: u8,
    /// Absolute gap between the two win-loss differentials in this track.
    pub record_diff: u32,
    /// Base minus the smaller remaining-valid-opponent count of the two.
    /// High scarcity means one of them is close to running out of
    /// opponents; can go negative early on when options abound.
    pub scarcity: i32,
    /// This track is the pair's only remaining chance to ever meet.
    pub is_last_chance: bool,
    /// How many of the two competitors played their most recent match in
    /// this same track (0-2). Penalized to encourage station rotation.
    pub station_stickiness: u8,
}

impl PairScore {
    /// First meeting in any game, with closely aligned records.
    pub fn is_good_first_time(&self) -> bool {
        self.cross_game_encounters == 0 && self.record_diff <= 1
    }

    /// One of the two is nearly out of valid opponents.
    pub fn is_urgent(&self) -> bool {
        self.scarcity >= URGENT_SCARCITY
    }

    /// The records are far enough apart to count as a mismatch.
    pub fn is_mismatch(&self) -> bool {
        self.record_diff >= MISMATCH_RECORD_DIFF
    }
}

/// A scored candidate pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPair<'a> {
    pub first: &'a Competitor,
    pub second: &'a Competitor,
    pub score: PairScore,
}

/// Why a track could not be filled. An ordinary outcome, common at the
/// tail of a competition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingFailure {
    /// Zero eligible competitors.
    NoEligible,
    /// Exactly one eligible competitor.
    OnlyOne(String),
    /// Every eligible pair has already met in this track.
    AllPairsMet,
}

impl PairingFailure {
    /// Reason string for the diagnostic log.
    pub fn reason(&self) -> String {
        match self {
            PairingFailure::NoEligible => "no eligible players".to_string(),
            PairingFailure::OnlyOne(name) => format!("only one eligible player: {name}"),
            PairingFailure::AllPairsMet => "no valid pairings possible".to_string(),
        }
    }
}

/// Cascade comparator: `Less` means `a` is the better pairing.
///
/// Order: last-chance pairs, then urgent scarcity, then avoidance of
/// record mismatches, then lower station stickiness, then good first-time
/// pairs, then fewer cross-game encounters, then higher scarcity, then
/// lower record gap.
pub fn priority(a: &PairScore, b: &PairScore) -> Ordering {
    b.is_last_chance
        .cmp(&a.is_last_chance)
        .then(b.is_urgent().cmp(&a.is_urgent()))
        .then(a.is_mismatch().cmp(&b.is_mismatch()))
        .then(a.station_stickiness.cmp(&b.station_stickiness))
        .then(b.is_good_first_time().cmp(&a.is_good_first_time()))
        .then(a.cross_game_encounters.cmp(&b.cross_game_encounters))
        .then(b.scarcity.cmp(&a.scarcity))
        .then(a.record_diff.cmp(&b.record_diff))
}

/// Pick the best never-met pair among the candidates for `track`.
///
/// Ties after the full cascade resolve to the first pair in enumeration
/// order, so the result is deterministic for a given roster order.
pub fn best_pair<'a>(
    candidates: &[&'a Competitor],
    track: Track,
    history: &[ScheduledMatch],
    rules: &CompetitionRules,
) -> Result<ScoredPair<'a>, PairingFailure> {
    match candidates {
        [] => return Err(PairingFailure::NoEligible),
        [only] => return Err(PairingFailure::OnlyOne(only.name.clone())),
        _ => {}
    }

    let mut best: Option<ScoredPair<'a>> = None;
    for i in 0..candidates.len() {
        for j in (i + 1)..candidates.len() {
            let (a, b) = (candidates[i], candidates[j]);
            if a.track(track).has_faced(&b.name) {
                continue;
            }
            let score = score_pair(a, b, track, candidates, history, rules);
            let replaces = match &best {
                Some(current) => priority(&score, &current.score) == Ordering::Less,
                None => true,
            };
            if replaces {
                best = Some(ScoredPair {
                    first: a,
                    second: b,
                    score,
                });
            }
        }
    }
    best.ok_or(PairingFailure::AllPairsMet)
}

/// Compute all five priority factors for one candidate pair.
pub fn score_pair(
    a: &Competitor,
    b: &Competitor,
    track: Track,
    candidates: &[&Competitor],
    history: &[ScheduledMatch],
    rules: &CompetitionRules,
) -> PairScore {
    let cross_game_encounters = track
        .others()
        .into_iter()
        .filter(|&t| a.track(t).has_faced(&b.name))
        .count() as u8;

    let record_diff = (a.track(track).diff() - b.track(track).diff()).unsigned_abs() as u32;

    let remaining = remaining_options(a, candidates, track)
        .min(remaining_options(b, candidates, track));
    let scarcity = rules.scarcity_base - remaining as i32;

    PairScore {
        cross_game_encounters,
        record_diff,
        scarcity,
        is_last_chance: is_last_chance(a, b, track, rules),
        station_stickiness: station_stickiness(a, b, track, history),
    }
}

/// How many other eligible candidates `c` could still validly face in
/// this track.
fn remaining_options(c: &Competitor, candidates: &[&Competitor], track: Track) -> usize {
    candidates
        .iter()
        .filter(|other| other.name != c.name && !c.track(track).has_faced(&other.name))
        .count()
}

/// The pair has never met in any track, and every other track is closed
/// to them: both at quota there, or already used for a meeting.
fn is_last_chance(a: &Competitor, b: &Competitor, track: Track, rules: &CompetitionRules) -> bool {
    if a.has_faced_anywhere(&b.name) {
        return false;
    }
    track.others().into_iter().all(|t| {
        let both_at_quota = a.track(t).played >= rules.matches_per_track
            && b.track(t).played >= rules.matches_per_track;
        both_at_quota || a.track(t).has_faced(&b.name)
    })
}

/// How many of the two played their most recent match in this track.
fn station_stickiness(
    a: &Competitor,
    b: &Competitor,
    track: Track,
    history: &[ScheduledMatch],
) -> u8 {
    [a, b]
        .into_iter()
        .filter(|c| last_track(&c.name, history) == Some(track))
        .count() as u8
}

/// Track of the competitor's most recent match, by round number.
fn last_track(name: &str, history: &[ScheduledMatch]) -> Option<Track> {
    history
        .iter()
        .filter(|m| m.involves(name))
        .max_by_key(|m| m.round)
        .map(|m| m.track)
}
