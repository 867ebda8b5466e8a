//! Yard state: the placement of every train across the main line and sidings.

use std::collections::HashSet;
use std::fmt;

use super::{Move, PuzzleError, TrackId, TrainId};

/// An immutable snapshot of train placement.
///
/// Track 0 is the main line; tracks `1..=k` are the sidings. Every track is a
/// stack whose accessible end is the *last* element of its sequence, so index 0
/// of the main line is the train furthest from the points. Moving a train never
/// changes the index of any other train.
///
/// Two yards are equal iff every track holds the same sequence.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Yard {
    tracks: Vec<Vec<TrainId>>,
}

impl Yard {
    /// Creates a yard from the main line and siding contents.
    pub fn new(main_line: Vec<TrainId>, sidings: Vec<Vec<TrainId>>) -> Self {
        let mut tracks = Vec::with_capacity(sidings.len() + 1);
        tracks.push(main_line);
        tracks.extend(sidings);
        Self { tracks }
    }

    /// Creates a yard with the given main line and `siding_count` empty sidings.
    pub fn with_empty_sidings(main_line: Vec<TrainId>, siding_count: usize) -> Self {
        Self::new(main_line, vec![Vec::new(); siding_count])
    }

    /// Returns the main line, furthest train first.
    pub fn main_line(&self) -> &[TrainId] {
        &self.tracks[0]
    }

    /// Returns the sidings in order (siding 1 first).
    pub fn sidings(&self) -> &[Vec<TrainId>] {
        &self.tracks[1..]
    }

    /// Returns the contents of a track, or `None` if the track does not exist.
    pub fn track(&self, track: TrackId) -> Option<&[TrainId]> {
        self.tracks.get(track.index()).map(Vec::as_slice)
    }

    /// Returns the number of tracks, including the main line.
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Returns the number of sidings.
    pub fn siding_count(&self) -> usize {
        self.tracks.len() - 1
    }

    /// Iterates over every train in the yard, track by track.
    pub fn trains(&self) -> impl Iterator<Item = &TrainId> {
        self.tracks.iter().flatten()
    }

    /// Returns the total number of trains in the yard.
    pub fn train_count(&self) -> usize {
        self.tracks.iter().map(Vec::len).sum()
    }

    /// Returns the train at the accessible end of a track.
    pub fn top(&self, track: TrackId) -> Option<&TrainId> {
        self.tracks.get(track.index()).and_then(|t| t.last())
    }

    /// Applies a transfer from one track to another, returning the new yard.
    ///
    /// Returns `None` if either track does not exist, the tracks are the same,
    /// or the source track is empty. `self` is left untouched.
    pub fn transfer(&self, from: TrackId, to: TrackId) -> Option<(Move, Yard)> {
        if from == to || to.index() >= self.tracks.len() {
            return None;
        }
        let train = self.top(from)?.clone();

        let mut tracks = self.tracks.clone();
        tracks[from.index()].pop();
        tracks[to.index()].push(train.clone());

        Some((Move::new(train, from, to), Yard { tracks }))
    }

    /// Checks that no identifier appears on more than one slot.
    pub fn check_unique(&self) -> Result<(), PuzzleError> {
        let mut seen = HashSet::with_capacity(self.train_count());
        for train in self.trains() {
            if !seen.insert(train) {
                return Err(PuzzleError::DuplicateTrain(train.clone()));
            }
        }
        Ok(())
    }

    /// Checks every siding against an optional capacity.
    pub fn check_capacity(&self, capacity: Option<usize>) -> Result<(), PuzzleError> {
        let Some(capacity) = capacity else {
            return Ok(());
        };
        for (i, siding) in self.sidings().iter().enumerate() {
            if siding.len() > capacity {
                return Err(PuzzleError::SidingOverCapacity {
                    siding: i + 1,
                    len: siding.len(),
                    capacity,
                });
            }
        }
        Ok(())
    }
}

fn write_track(f: &mut fmt::Formatter<'_>, track: &[TrainId]) -> fmt::Result {
    if track.is_empty() {
        return f.write_str("-");
    }
    for (i, train) in track.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", train)?;
    }
    Ok(())
}

impl fmt::Display for Yard {
    /// Writes `main: A B | siding 1: C | siding 2: -`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, track) in self.tracks.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}: ", TrackId(i))?;
            write_track(f, track)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Yard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Yard({})", self)
    }
}
