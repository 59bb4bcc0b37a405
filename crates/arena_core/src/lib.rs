//! # arena_core - Deterministic multi-track competition matchmaking engine
//!
//! This library pairs a fixed roster of competitors across three parallel
//! game tracks, round after round, then ranks them and schedules catch-up
//! matches for anyone who fell short of their quota.
//!
//! ## Features
//! - Per-round greedy pairing with a multi-factor priority cascade
//!   (last-chance meetings, opponent scarcity, skill balance, station
//!   rotation)
//! - Permanent no-rematch guarantee within a track
//! - Opponent-strength (Buchholz) scoring and tie-break cascades with a
//!   head-to-head champion override
//! - Escalating catch-up volunteer matching
//! - 100% deterministic under an injected rng (same seed = same
//!   tournament)
//!
//! The engine is pure: every entry point is a function of a state
//! snapshot. The surrounding application layer owns the canonical state
//! and applies results through the `state` transition functions.

pub mod engine;
pub mod error;
pub mod models;
pub mod standings;
pub mod state;

pub use engine::{
    best_pair, eligible_candidates, find_catch_up_volunteer, generate_round_pairings, PairScore,
    PairingFailure, ScoredPair, VolunteerOutcome,
};
pub use error::StateError;
pub use models::{
    CatchUp, CompetitionRules, Competitor, MatchOutcome, PairingLogEntry, RoundLog, RoundPairings,
    ScheduledMatch, SkippedTrack, Track, TrackMap, TrackRecord,
};
pub use standings::{compute_standings_scores, rank_standings, select_track_champion};
pub use state::{
    append_matches, catch_up_match, receive_bet, record_outcome, remaining_needs, TournamentState,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
