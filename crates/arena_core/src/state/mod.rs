//! Tournament snapshot and explicit state transitions.
//!
//! The engine is a pure function library over a snapshot; the snapshot is
//! an ordinary value owned and threaded by the caller. Transition
//! functions take the current snapshot by reference and return a fresh
//! one, so the caller always keeps a consistent before/after pair and the
//! core never holds canonical state.

use serde::{Deserialize, Serialize};

use crate::engine::VolunteerOutcome;
use crate::error::StateError;
use crate::models::{
    CatchUp, CompetitionRules, Competitor, MatchOutcome, RoundPairings, ScheduledMatch, Track,
};

/// Full competition snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentState {
    pub competitors: Vec<Competitor>,
    /// Every scheduled match, in scheduling order; recorded outcomes live
    /// inline.
    pub match_history: Vec<ScheduledMatch>,
    /// Highest round admitted so far.
    pub round: u32,
}

impl TournamentState {
    /// Fresh state from registered names.
    pub fn with_roster<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            competitors: names.into_iter().map(Competitor::new).collect(),
            match_history: Vec::new(),
            round: 0,
        }
    }

    pub fn competitor(&self, name: &str) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.name == name)
    }
}

/// Admit a generated round: bump the round counter and append the
/// proposed matches, outcomes still unrecorded.
pub fn append_matches(state: &TournamentState, pairings: &RoundPairings) -> TournamentState {
    let mut next = state.clone();
    next.round = next.round.max(pairings.round);
    next.match_history.extend(pairings.matches.iter().cloned());
    next
}

/// Record the outcome of `state.match_history[index]`.
///
/// Applies the result to both participants: appends to the track opponent
/// lists, bumps win/loss, played and dominant counters, and adds points
/// per `rules`. Draws advance quota accounting only.
pub fn record_outcome(
    state: &TournamentState,
    index: usize,
    outcome: MatchOutcome,
    rules: &CompetitionRules,
) -> Result<TournamentState, StateError> {
    let mut next = state.clone();

    let (track, first, second) = {
        let m = next
            .match_history
            .get_mut(index)
            .ok_or(StateError::UnknownMatch(index))?;
        if m.outcome.is_some() {
            return Err(StateError::AlreadyRecorded(index));
        }
        if let Some(winner) = outcome.winner() {
            if !m.involves(winner) {
                return Err(StateError::NotAParticipant {
                    winner: winner.to_string(),
                    index,
                });
            }
        }
        m.outcome = Some(outcome.clone());
        (m.track, m.first.clone(), m.second.clone())
    };

    apply_to(&mut next, &first, &second, track, &outcome, rules)?;
    apply_to(&mut next, &second, &first, track, &outcome, rules)?;
    Ok(next)
}

fn apply_to(
    state: &mut TournamentState,
    name: &str,
    opponent: &str,
    track: Track,
    outcome: &MatchOutcome,
    rules: &CompetitionRules,
) -> Result<(), StateError> {
    let c = state
        .competitors
        .iter_mut()
        .find(|c| c.name == name)
        .ok_or_else(|| StateError::UnknownCompetitor(name.to_string()))?;

    let rec = c.track_mut(track);
    rec.opponents.push(opponent.to_string());
    rec.played += 1;

    match outcome {
        MatchOutcome::Win { winner, dominant } if winner == name => {
            rec.wins += 1;
            if *dominant {
                rec.dominant_wins += 1;
            }
            c.wins += 1;
            c.points += if *dominant {
                rules.dominant_win_points
            } else {
                rules.win_points
            };
            if *dominant {
                c.dominant_wins += 1;
            }
        }
        MatchOutcome::Win { .. } => {
            rec.losses += 1;
            c.losses += 1;
        }
        MatchOutcome::Draw => {}
    }
    Ok(())
}

/// Credit a fan bet. Bookkeeping for the fan-favorite tie-break signal;
/// settlement arithmetic happens outside the core.
pub fn receive_bet(state: &TournamentState, name: &str) -> Result<TournamentState, StateError> {
    let mut next = state.clone();
    let c = next
        .competitors
        .iter_mut()
        .find(|c| c.name == name)
        .ok_or_else(|| StateError::UnknownCompetitor(name.to_string()))?;
    c.bets_received += 1;
    Ok(next)
}

/// Unmet per-track quotas after the main schedule, track-major in the
/// fixed track priority order. The catch-up driver walks this list and
/// invokes the volunteer matcher once per entry.
pub fn remaining_needs(
    state: &TournamentState,
    rules: &CompetitionRules,
) -> Vec<(String, Track)> {
    Track::ALL
        .into_iter()
        .flat_map(|track| {
            state
                .competitors
                .iter()
                .filter(move |c| c.track(track).played < rules.matches_per_track)
                .map(move |c| (c.name.clone(), track))
        })
        .collect()
}

/// Materialize the catch-up match for a satisfied volunteer search.
/// Returns `None` when the search produced no volunteer.
pub fn catch_up_match(
    shortfall: &str,
    track: Track,
    outcome: &VolunteerOutcome,
    round: u32,
) -> Option<ScheduledMatch> {
    let volunteer = outcome.volunteer.as_ref()?;
    let mut m = ScheduledMatch::new(track, shortfall, volunteer.clone(), round);
    m.catch_up = Some(CatchUp {
        shortfall: shortfall.to_string(),
        volunteer: volunteer.clone(),
        exhausted: outcome.exhausted,
        forced: outcome.forced,
    });
    Some(m)
}
