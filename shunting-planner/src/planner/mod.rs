//! Shunting planner using best-first search.
//!
//! This module implements the core planning algorithm that answers:
//! "What is the shortest sequence of moves that puts the main line in
//! goal order?"
//!
//! One driver serves uniform-cost search and A* with either heuristic; the
//! strategies differ only in the priority function they hand it.

mod config;
mod heuristic;
mod report;
mod search;

pub use config::SearchConfig;
pub use heuristic::{Heuristic, manhattan, misplaced};
pub use report::{SearchReport, SearchStatus};
pub use search::{Planner, SearchError, Strategy, search};
