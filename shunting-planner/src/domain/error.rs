//! Domain error types.
//!
//! These errors describe puzzles that cannot be searched at all: the yard and
//! the goal disagree about which trains exist, or the yard breaks a structural
//! rule. They are distinct from a search that runs and finds no solution.

use super::TrainId;

/// Validation failures for a yard and goal pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// The same identifier appears twice in the yard or the goal
    #[error("train {0} appears more than once")]
    DuplicateTrain(TrainId),

    /// The goal names a train the yard does not contain
    #[error("train {0} is in the goal but not in the yard")]
    MissingFromYard(TrainId),

    /// The yard contains a train the goal does not place
    #[error("train {0} is in the yard but not in the goal")]
    MissingFromGoal(TrainId),

    /// The goal order is empty
    #[error("goal order must name at least one train")]
    EmptyGoal,

    /// A siding already holds more trains than the configured capacity
    #[error("siding {siding} holds {len} trains but its capacity is {capacity}")]
    SidingOverCapacity {
        siding: usize,
        len: usize,
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let c = TrainId::parse("C").unwrap();

        let err = PuzzleError::DuplicateTrain(c.clone());
        assert_eq!(err.to_string(), "train C appears more than once");

        let err = PuzzleError::MissingFromYard(c.clone());
        assert_eq!(err.to_string(), "train C is in the goal but not in the yard");

        let err = PuzzleError::MissingFromGoal(c);
        assert_eq!(err.to_string(), "train C is in the yard but not in the goal");

        let err = PuzzleError::EmptyGoal;
        assert_eq!(err.to_string(), "goal order must name at least one train");

        let err = PuzzleError::SidingOverCapacity {
            siding: 2,
            len: 4,
            capacity: 3,
        };
        assert_eq!(
            err.to_string(),
            "siding 2 holds 4 trains but its capacity is 3"
        );
    }
}
