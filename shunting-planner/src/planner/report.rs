//! Search outcome record.
//!
//! Plain data handed to whatever presents the result; nothing here does any
//! searching.

use std::fmt;
use std::time::Duration;

use crate::domain::{Move, Yard};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// A yard satisfying the goal was reached.
    Success,
    /// Every reachable yard was expanded without satisfying the goal.
    NoSolution,
    /// The configured expansion limit was hit first.
    ExpansionLimit,
}

impl SearchStatus {
    /// Returns true for [`SearchStatus::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, SearchStatus::Success)
    }

    /// Returns a short lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchStatus::Success => "success",
            SearchStatus::NoSolution => "no solution",
            SearchStatus::ExpansionLimit => "expansion limit",
        }
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one search call.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// How the search ended.
    pub status: SearchStatus,

    /// Moves from the initial yard to the goal. Empty unless successful.
    pub moves: Vec<Move>,

    /// Yards visited along the path, starting with the initial yard.
    /// Always one longer than `moves` on success; empty otherwise.
    pub states: Vec<Yard>,

    /// Number of moves on the path (0 on failure).
    pub cost: usize,

    /// Number of distinct yards expanded.
    pub nodes_expanded: usize,

    /// Largest frontier size observed.
    pub max_frontier: usize,

    /// Wall-clock time spent in the search call.
    pub elapsed: Duration,
}

impl SearchReport {
    /// Returns true if a path to the goal was found.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the final yard on the path, if any.
    pub fn final_state(&self) -> Option<&Yard> {
        self.states.last()
    }

    /// Returns expansions per second of wall-clock time, or 0 if no time
    /// was measured.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nodes_expanded as f64 / secs
        } else {
            0.0
        }
    }

    /// Iterates over each move paired with the yard it produced.
    pub fn steps(&self) -> impl Iterator<Item = (&Move, &Yard)> {
        self.moves.iter().zip(self.states.iter().skip(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TrackId, TrainId};

    fn ids(s: &str) -> Vec<TrainId> {
        TrainId::parse_list(s).unwrap()
    }

    #[test]
    fn status_labels() {
        assert_eq!(SearchStatus::Success.to_string(), "success");
        assert_eq!(SearchStatus::NoSolution.to_string(), "no solution");
        assert_eq!(SearchStatus::ExpansionLimit.to_string(), "expansion limit");
        assert!(SearchStatus::Success.is_success());
        assert!(!SearchStatus::NoSolution.is_success());
        assert!(!SearchStatus::ExpansionLimit.is_success());
    }

    #[test]
    fn steps_pair_moves_with_resulting_yards() {
        let start = Yard::new(ids("A B"), vec![vec![]]);
        let (mv, next) = start.transfer(TrackId::MAIN, TrackId::siding(1)).unwrap();

        let report = SearchReport {
            status: SearchStatus::Success,
            moves: vec![mv.clone()],
            states: vec![start, next.clone()],
            cost: 1,
            nodes_expanded: 1,
            max_frontier: 1,
            elapsed: Duration::ZERO,
        };

        let steps: Vec<_> = report.steps().collect();
        assert_eq!(steps, vec![(&mv, &next)]);
        assert_eq!(report.final_state(), Some(&next));
    }

    #[test]
    fn nodes_per_second_guards_zero_elapsed() {
        let mut report = SearchReport {
            status: SearchStatus::NoSolution,
            moves: Vec::new(),
            states: Vec::new(),
            cost: 0,
            nodes_expanded: 50,
            max_frontier: 3,
            elapsed: Duration::ZERO,
        };
        assert_eq!(report.nodes_per_second(), 0.0);

        report.elapsed = Duration::from_millis(250);
        assert_eq!(report.nodes_per_second(), 200.0);
    }
}
