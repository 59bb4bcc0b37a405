//! Data model for the matchmaking engine.

pub mod competitor;
pub mod game_match;
pub mod round_log;
pub mod rules;
pub mod track;

pub use competitor::{Competitor, TrackRecord};
pub use game_match::{CatchUp, MatchOutcome, ScheduledMatch};
pub use round_log::{PairingLogEntry, RoundLog, RoundPairings, SkippedTrack};
pub use rules::CompetitionRules;
pub use track::{Track, TrackMap};
