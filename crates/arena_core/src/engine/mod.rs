//! Pairing pipeline: eligibility, pair scoring, round generation and
//! catch-up volunteer matching.

pub mod candidate_filter;
pub mod pair_scorer;
pub mod pairing;
pub mod sync_matcher;

#[cfg(test)]
mod invariants_test;

pub use candidate_filter::eligible_candidates;
pub use pair_scorer::{
    best_pair, priority, score_pair, PairScore, PairingFailure, ScoredPair, MISMATCH_RECORD_DIFF,
    URGENT_SCARCITY,
};
pub use pairing::generate_round_pairings;
pub use sync_matcher::{find_catch_up_volunteer, VolunteerOutcome};
