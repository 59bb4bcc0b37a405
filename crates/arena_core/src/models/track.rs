//! Game track definitions.
//!
//! Every round pairs competitors across three parallel game tracks. The
//! track set is fixed for the life of a competition; `Track::ALL` is also
//! the priority order the catch-up pass walks when resolving shortfalls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three parallel game tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Darts,
    Foosball,
    AirHockey,
}

impl Track {
    /// All tracks, in fixed priority order (Darts before Foosball before
    /// Air Hockey).
    pub const ALL: [Track; 3] = [Track::Darts, Track::Foosball, Track::AirHockey];

    /// Stable slot index for `TrackMap` storage.
    pub fn index(self) -> usize {
        match self {
            Track::Darts => 0,
            Track::Foosball => 1,
            Track::AirHockey => 2,
        }
    }

    /// The two tracks other than this one.
    pub fn others(self) -> [Track; 2] {
        match self {
            Track::Darts => [Track::Foosball, Track::AirHockey],
            Track::Foosball => [Track::Darts, Track::AirHockey],
            Track::AirHockey => [Track::Darts, Track::Foosball],
        }
    }

    /// Display name used in reports and diagnostic logs.
    pub fn name(self) -> &'static str {
        match self {
            Track::Darts => "Darts",
            Track::Foosball => "Foosball",
            Track::AirHockey => "Air Hockey",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed three-slot container keyed by [`Track`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMap<T>([T; 3]);

impl<T> TrackMap<T> {
    pub fn get(&self, track: Track) -> &T {
        &self.0[track.index()]
    }

    pub fn get_mut(&mut self, track: Track) -> &mut T {
        &mut self.0[track.index()]
    }

    /// Iterate slots in `Track::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Track, &T)> {
        Track::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Default> Default for TrackMap<T> {
    fn default() -> Self {
        Self([T::default(), T::default(), T::default()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn others_never_contains_self() {
        for track in Track::ALL {
            assert!(!track.others().contains(&track));
        }
    }

    #[test]
    fn track_map_slots_are_independent() {
        let mut map: TrackMap<u32> = TrackMap::default();
        *map.get_mut(Track::Foosball) = 7;
        assert_eq!(*map.get(Track::Darts), 0);
        assert_eq!(*map.get(Track::Foosball), 7);
        assert_eq!(*map.get(Track::AirHockey), 0);
    }
}
