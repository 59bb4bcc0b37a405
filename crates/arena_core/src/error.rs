//! Error types for the state-transition layer.
//!
//! The engine itself has no fatal conditions: an unfillable track or an
//! empty volunteer pool is an ordinary result carrying a reason, not an
//! error. Only the transition functions, which cross-reference names and
//! match indices supplied by the caller, can fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("unknown competitor: {0}")]
    UnknownCompetitor(String),

    #[error("no match at index {0}")]
    UnknownMatch(usize),

    #[error("match at index {0} already has a recorded outcome")]
    AlreadyRecorded(usize),

    #[error("winner {winner} is not a participant of match {index}")]
    NotAParticipant { winner: String, index: usize },
}
