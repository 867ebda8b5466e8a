//! Goal order for the main line.

use std::collections::{HashMap, HashSet};

use super::{PuzzleError, TrainId, Yard};

/// The target main-line order.
///
/// Only the main line is constrained; siding contents are ignored when
/// testing whether a yard satisfies the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    order: Vec<TrainId>,
    /// Index of each train in `order`.
    positions: HashMap<TrainId, usize>,
}

impl Goal {
    /// Creates a goal from the desired main-line order.
    ///
    /// Fails if an identifier is repeated.
    pub fn new(order: Vec<TrainId>) -> Result<Self, PuzzleError> {
        let mut positions = HashMap::with_capacity(order.len());
        for (i, train) in order.iter().enumerate() {
            if positions.insert(train.clone(), i).is_some() {
                return Err(PuzzleError::DuplicateTrain(train.clone()));
            }
        }
        Ok(Self { order, positions })
    }

    /// Returns the goal order, furthest train first.
    pub fn order(&self) -> &[TrainId] {
        &self.order
    }

    /// Returns the number of trains in the goal.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the goal names no trains.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the goal index of a train.
    pub fn position_of(&self, train: &TrainId) -> Option<usize> {
        self.positions.get(train).copied()
    }

    /// Returns true if the yard's main line is exactly the goal order.
    pub fn is_satisfied_by(&self, yard: &Yard) -> bool {
        yard.main_line() == self.order.as_slice()
    }

    /// Checks that the yard and the goal hold exactly the same trains.
    ///
    /// Duplicates in the yard are reported first, then goal trains the yard
    /// lacks (in goal order), then yard trains the goal lacks.
    pub fn check_against(&self, yard: &Yard) -> Result<(), PuzzleError> {
        yard.check_unique()?;

        let present: HashSet<&TrainId> = yard.trains().collect();
        if let Some(missing) = self.order.iter().find(|t| !present.contains(t)) {
            return Err(PuzzleError::MissingFromYard(missing.clone()));
        }

        if let Some(extra) = yard.trains().find(|t| !self.positions.contains_key(*t)) {
            return Err(PuzzleError::MissingFromGoal(extra.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(s: &str) -> Vec<TrainId> {
        TrainId::parse_list(s).unwrap()
    }

    fn id(s: &str) -> TrainId {
        TrainId::parse(s).unwrap()
    }

    #[test]
    fn positions() {
        let goal = Goal::new(ids("C B A")).unwrap();
        assert_eq!(goal.position_of(&id("C")), Some(0));
        assert_eq!(goal.position_of(&id("A")), Some(2));
        assert_eq!(goal.position_of(&id("Z")), None);
        assert_eq!(goal.len(), 3);
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Goal::new(ids("A B A")),
            Err(PuzzleError::DuplicateTrain(id("A")))
        );
    }

    #[test]
    fn satisfied_ignores_sidings() {
        let goal = Goal::new(ids("A B")).unwrap();
        assert!(goal.is_satisfied_by(&Yard::new(ids("A B"), vec![vec![]])));
        assert!(!goal.is_satisfied_by(&Yard::new(ids("B A"), vec![vec![]])));
        assert!(!goal.is_satisfied_by(&Yard::new(ids("A"), vec![ids("B")])));
    }

    #[test]
    fn check_against_matching_sets() {
        let goal = Goal::new(ids("C B A")).unwrap();
        let yard = Yard::new(ids("A"), vec![ids("B"), ids("C")]);
        assert!(goal.check_against(&yard).is_ok());
    }

    #[test]
    fn check_against_missing_from_yard() {
        let goal = Goal::new(ids("A B C")).unwrap();
        let yard = Yard::with_empty_sidings(ids("A B"), 1);
        assert_eq!(
            goal.check_against(&yard),
            Err(PuzzleError::MissingFromYard(id("C")))
        );
    }

    #[test]
    fn check_against_missing_from_goal() {
        let goal = Goal::new(ids("A B")).unwrap();
        let yard = Yard::new(ids("A B"), vec![ids("D")]);
        assert_eq!(
            goal.check_against(&yard),
            Err(PuzzleError::MissingFromGoal(id("D")))
        );
    }

    #[test]
    fn check_against_duplicate_in_yard() {
        let goal = Goal::new(ids("A B")).unwrap();
        let yard = Yard::new(ids("A B"), vec![ids("A")]);
        assert_eq!(
            goal.check_against(&yard),
            Err(PuzzleError::DuplicateTrain(id("A")))
        );
    }
}
