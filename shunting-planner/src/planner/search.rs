//! Best-first search over yard states.
//!
//! A single driver serves every strategy: uniform-cost search orders the
//! frontier by path cost `g`, A* by `g + h`. Duplicates are removed lazily,
//! when a node is popped, so the frontier never needs decrease-key.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::fmt;
use std::time::Instant;

use tracing::{debug, trace};

use crate::domain::{Goal, Move, PuzzleError, Yard};

use super::config::SearchConfig;
use super::heuristic::Heuristic;
use super::report::{SearchReport, SearchStatus};

/// Error from a search call.
///
/// Exhausting the frontier is not an error; it is reported through
/// [`SearchStatus::NoSolution`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The yard and goal cannot describe the same puzzle
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(#[from] PuzzleError),
}

/// Which frontier ordering to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Uniform-cost search: priority `g`.
    UniformCost,
    /// A* with the misplaced-trains heuristic.
    AStarMisplaced,
    /// A* with the capped Manhattan-distance heuristic.
    AStarManhattan,
}

impl Strategy {
    /// Every strategy, in report order.
    pub const ALL: [Strategy; 3] = [
        Strategy::UniformCost,
        Strategy::AStarMisplaced,
        Strategy::AStarManhattan,
    ];

    /// Returns the heuristic plugged into this strategy, if any.
    pub fn heuristic(&self) -> Option<Heuristic> {
        match self {
            Strategy::UniformCost => None,
            Strategy::AStarMisplaced => Some(Heuristic::Misplaced),
            Strategy::AStarManhattan => Some(Heuristic::Manhattan),
        }
    }

    /// Returns the frontier priority of a yard reached at cost `g`.
    pub fn priority(&self, yard: &Yard, goal: &Goal, g: usize) -> usize {
        g + self.heuristic().map_or(0, |h| h.estimate(yard, goal))
    }

    /// Returns a display name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::UniformCost => "UCS",
            Strategy::AStarMisplaced => "A* (misplaced)",
            Strategy::AStarManhattan => "A* (manhattan)",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in the search tree. Parents are arena indices.
#[derive(Debug)]
struct Node {
    yard: Yard,
    cost: usize,
    parent: Option<usize>,
    via: Option<Move>,
}

/// Shunting planner.
///
/// Holds no state between calls; each search owns its own frontier, closed
/// set and node arena.
pub struct Planner<'a> {
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a SearchConfig) -> Self {
        Self { config }
    }

    /// Search for a cheapest move sequence that brings the main line to `goal`.
    pub fn search(
        &self,
        initial: &Yard,
        goal: &Goal,
        strategy: Strategy,
    ) -> Result<SearchReport, SearchError> {
        debug!(
            strategy = %strategy,
            trains = initial.train_count(),
            sidings = initial.siding_count(),
            "Starting search"
        );

        let report = self.search_by(initial, goal, |yard, g| strategy.priority(yard, goal, g))?;

        debug!(
            strategy = %strategy,
            status = %report.status,
            cost = report.cost,
            nodes_expanded = report.nodes_expanded,
            max_frontier = report.max_frontier,
            elapsed = ?report.elapsed,
            "Search complete"
        );

        Ok(report)
    }

    /// Run the best-first driver with an arbitrary priority function.
    ///
    /// `priority(yard, g)` must be non-decreasing along any path for the
    /// returned cost to be optimal; `g` alone and `g + h` for a consistent `h`
    /// both qualify.
    pub fn search_by<F>(
        &self,
        initial: &Yard,
        goal: &Goal,
        priority: F,
    ) -> Result<SearchReport, SearchError>
    where
        F: Fn(&Yard, usize) -> usize,
    {
        goal.check_against(initial)?;
        initial.check_capacity(self.config.siding_capacity)?;

        let started = Instant::now();
        let rules = self.config.move_rules();

        let mut arena = vec![Node {
            yard: initial.clone(),
            cost: 0,
            parent: None,
            via: None,
        }];
        // Arena indices grow with insertion, so they double as the FIFO
        // tie-break among equal priorities.
        let mut frontier = BinaryHeap::from([Reverse((priority(initial, 0), 0usize))]);
        let mut closed: HashSet<Yard> = HashSet::new();
        let mut nodes_expanded = 0;
        let mut max_frontier = 1;

        let status = loop {
            let Some(Reverse((_, idx))) = frontier.pop() else {
                break SearchStatus::NoSolution;
            };

            let node = &arena[idx];
            if closed.contains(&node.yard) {
                continue;
            }

            if goal.is_satisfied_by(&node.yard) {
                let (moves, states) = reconstruct(&arena, idx);
                return Ok(SearchReport {
                    status: SearchStatus::Success,
                    cost: node.cost,
                    moves,
                    states,
                    nodes_expanded,
                    max_frontier,
                    elapsed: started.elapsed(),
                });
            }

            if self.config.expansion_limit_reached(nodes_expanded) {
                break SearchStatus::ExpansionLimit;
            }

            closed.insert(node.yard.clone());
            nodes_expanded += 1;

            let cost = node.cost + 1;
            trace!(yard = %node.yard, g = node.cost, "Expanding");

            for (mv, yard) in rules.successors(&node.yard) {
                if closed.contains(&yard) {
                    continue;
                }
                let key = priority(&yard, cost);
                frontier.push(Reverse((key, arena.len())));
                arena.push(Node {
                    yard,
                    cost,
                    parent: Some(idx),
                    via: Some(mv),
                });
            }

            max_frontier = max_frontier.max(frontier.len());
        };

        Ok(SearchReport {
            status,
            moves: Vec::new(),
            states: Vec::new(),
            cost: 0,
            nodes_expanded,
            max_frontier,
            elapsed: started.elapsed(),
        })
    }
}

/// Search with the default configuration.
pub fn search(initial: &Yard, goal: &Goal, strategy: Strategy) -> Result<SearchReport, SearchError> {
    let config = SearchConfig::default();
    Planner::new(&config).search(initial, goal, strategy)
}

/// Walk parent links from `idx` back to the root and return the path in order.
fn reconstruct(arena: &[Node], idx: usize) -> (Vec<Move>, Vec<Yard>) {
    let mut moves = Vec::new();
    let mut states = Vec::new();

    let mut cursor = Some(idx);
    while let Some(i) = cursor {
        let node = &arena[i];
        states.push(node.yard.clone());
        if let Some(mv) = &node.via {
            moves.push(mv.clone());
        }
        cursor = node.parent;
    }

    moves.reverse();
    states.reverse();
    (moves, states)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
