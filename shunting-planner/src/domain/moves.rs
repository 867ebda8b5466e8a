//! Moves and the move generator.

use std::fmt;

use super::{TrainId, Yard};

/// Index of a track in a yard. Track 0 is the main line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub usize);

impl TrackId {
    /// The main line.
    pub const MAIN: TrackId = TrackId(0);

    /// The `n`th siding, counting from 1.
    pub const fn siding(n: usize) -> Self {
        TrackId(n)
    }

    /// Returns the position of this track in the yard.
    pub fn index(&self) -> usize {
        self.0
    }

    /// Returns true for the main line.
    pub fn is_main(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_main() {
            f.write_str("main")
        } else {
            write!(f, "siding {}", self.0)
        }
    }
}

/// A single unit-cost transfer of the accessible-end train of one track onto
/// the accessible end of another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// The train that moved
    pub train: TrainId,
    /// Track it left
    pub from: TrackId,
    /// Track it joined
    pub to: TrackId,
}

impl Move {
    /// Creates a move record.
    pub fn new(train: TrainId, from: TrackId, to: TrackId) -> Self {
        Self { train, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.train, self.from, self.to)
    }
}

/// Rules that restrict which transfers are legal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveRules {
    /// Maximum trains per siding. The main line is never limited.
    pub siding_capacity: Option<usize>,
}

impl MoveRules {
    /// Rules with no capacity limit.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Rules limiting every siding to `capacity` trains.
    pub fn with_siding_capacity(capacity: usize) -> Self {
        Self {
            siding_capacity: Some(capacity),
        }
    }

    fn accepts(&self, yard: &Yard, to: TrackId) -> bool {
        match (self.siding_capacity, yard.track(to)) {
            (_, None) => false,
            (Some(cap), Some(track)) if !to.is_main() => track.len() < cap,
            _ => true,
        }
    }

    /// Enumerates every legal successor of `yard`.
    ///
    /// One move is produced for each ordered pair of distinct tracks whose
    /// source is non-empty and whose destination has room. Sources are visited
    /// in ascending order, then destinations, so the output order is stable.
    pub fn successors(&self, yard: &Yard) -> Vec<(Move, Yard)> {
        let tracks = yard.track_count();
        let mut out = Vec::with_capacity(tracks * tracks.saturating_sub(1));

        for from in (0..tracks).map(TrackId) {
            if yard.top(from).is_none() {
                continue;
            }
            for to in (0..tracks).map(TrackId) {
                if from == to || !self.accepts(yard, to) {
                    continue;
                }
                if let Some(step) = yard.transfer(from, to) {
                    out.push(step);
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn ids(s: &str) -> Vec<TrainId> {
        TrainId::parse_list(s).unwrap()
    }

    fn census(yard: &Yard) -> HashMap<TrainId, usize> {
        let mut counts = HashMap::new();
        for train in yard.trains() {
            *counts.entry(train.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn one_move_per_ordered_track_pair() {
        // Every track non-empty: 3 tracks give 3 * 2 moves
        let yard = Yard::new(ids("A"), vec![ids("B"), ids("C")]);
        let next = MoveRules::unbounded().successors(&yard);

        assert_eq!(next.len(), 6);
        let pairs: Vec<(usize, usize)> = next
            .iter()
            .map(|(m, _)| (m.from.index(), m.to.index()))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn empty_sources_produce_nothing() {
        let yard = Yard::with_empty_sidings(ids("A B"), 2);
        let next = MoveRules::unbounded().successors(&yard);

        assert_eq!(next.len(), 2);
        assert!(next.iter().all(|(m, _)| m.from.is_main()));
        assert!(next.iter().all(|(m, _)| m.train.as_str() == "B"));
    }

    #[test]
    fn no_sidings_means_no_moves() {
        let yard = Yard::with_empty_sidings(ids("A B"), 0);
        assert!(MoveRules::unbounded().successors(&yard).is_empty());
    }

    #[test]
    fn empty_yard_has_no_moves() {
        let yard = Yard::with_empty_sidings(vec![], 2);
        assert!(MoveRules::unbounded().successors(&yard).is_empty());
    }

    #[test]
    fn capacity_blocks_full_sidings_only() {
        let yard = Yard::new(ids("A"), vec![ids("B"), vec![]]);
        let next = MoveRules::with_siding_capacity(1).successors(&yard);

        // siding 1 is full; main is never limited
        let pairs: Vec<(usize, usize)> = next
            .iter()
            .map(|(m, _)| (m.from.index(), m.to.index()))
            .collect();
        assert_eq!(pairs, vec![(0, 2), (1, 0), (1, 2)]);
    }

    #[test]
    fn successors_do_not_mutate_input() {
        let yard = Yard::new(ids("A B"), vec![ids("C")]);
        let before = yard.clone();
        let _ = MoveRules::unbounded().successors(&yard);
        assert_eq!(yard, before);
    }

    #[test]
    fn successors_conserve_trains() {
        let yard = Yard::new(ids("A B"), vec![ids("C"), ids("D E")]);
        let expected = census(&yard);
        for (_, next) in MoveRules::unbounded().successors(&yard) {
            assert_eq!(census(&next), expected);
        }
    }

    #[test]
    fn move_display() {
        let mv = Move::new(ids("B")[0].clone(), TrackId::MAIN, TrackId::siding(2));
        assert_eq!(mv.to_string(), "B: main -> siding 2");
    }
}
