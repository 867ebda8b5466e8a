//! Railway shunting planner.
//!
//! Finds a minimum-move sequence that rearranges the trains on a main line
//! into a goal order, using dead-end sidings as temporary storage.

pub mod domain;
pub mod output;
pub mod planner;
pub mod puzzles;
