//! Domain types for the shunting planner.
//!
//! This module contains the yard model: train identifiers, the immutable yard
//! snapshot, moves between tracks and the goal order. Types validate their
//! invariants at construction time, so the search engine can trust them.

mod error;
mod goal;
mod moves;
mod train;
mod yard;

pub use error::PuzzleError;
pub use goal::Goal;
pub use moves::{Move, MoveRules, TrackId};
pub use train::{InvalidTrainId, TrainId};
pub use yard::Yard;
