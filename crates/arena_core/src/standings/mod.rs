//! Standings: opponent-strength scoring and tie-break resolution.

pub mod buchholz;
pub mod tiebreak;

pub use buchholz::compute_standings_scores;
pub use tiebreak::{rank_standings, select_track_champion};
