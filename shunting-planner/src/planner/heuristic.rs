//! Heuristic estimates of the remaining number of moves.
//!
//! Both heuristics rely on the tail-access convention of [`Yard`]: a move
//! relocates exactly one train and never shifts the index of any other. Each
//! move therefore changes at most one term of either sum by at most one, which
//! makes both estimates consistent (and so admissible) under unit move cost.

use crate::domain::{Goal, Yard};

/// A remaining-cost estimate used to guide A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Number of main-line slots that differ from the goal.
    Misplaced,
    /// Sum of per-train displacement, capped at the moves it forces.
    Manhattan,
}

impl Heuristic {
    /// Estimate the moves still needed to reach `goal` from `yard`.
    ///
    /// Returns 0 iff the main line already equals the goal, given that the yard
    /// and goal hold the same trains.
    pub fn estimate(&self, yard: &Yard, goal: &Goal) -> usize {
        match self {
            Heuristic::Misplaced => misplaced(yard, goal),
            Heuristic::Manhattan => manhattan(yard, goal),
        }
    }
}

/// Count main-line slots `0..max(len(main), len(goal))` whose train differs
/// from the goal's. A slot present on one side only counts as misplaced.
pub fn misplaced(yard: &Yard, goal: &Goal) -> usize {
    let main = yard.main_line();
    let target = goal.order();
    let slots = main.len().max(target.len());

    (0..slots)
        .filter(|&i| main.get(i) != target.get(i))
        .count()
}

/// Sum over every train of its displacement from its goal slot.
///
/// A train on the main line at its goal index contributes 0. One at the wrong
/// index contributes `min(|i - g|, 2)`: it has to leave and come back, and no
/// single move can bring it closer by more than one. A train in a siding sits
/// beyond the end of the main line and contributes 1, the one move needed to
/// place it.
pub fn manhattan(yard: &Yard, goal: &Goal) -> usize {
    let on_main: usize = yard
        .main_line()
        .iter()
        .enumerate()
        .map(|(i, train)| match goal.position_of(train) {
            Some(g) if g == i => 0,
            Some(g) => i.abs_diff(g).min(2),
            None => 2,
        })
        .sum();

    let in_sidings: usize = yard.sidings().iter().map(Vec::len).sum();

    on_main + in_sidings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrainId;

    fn ids(s: &str) -> Vec<TrainId> {
        TrainId::parse_list(s).unwrap()
    }

    fn goal(s: &str) -> Goal {
        Goal::new(ids(s)).unwrap()
    }

    #[test]
    fn misplaced_counts_differing_slots() {
        let g = goal("A B C");
        assert_eq!(misplaced(&Yard::with_empty_sidings(ids("A B C"), 1), &g), 0);
        assert_eq!(misplaced(&Yard::with_empty_sidings(ids("A C B"), 1), &g), 2);
        assert_eq!(misplaced(&Yard::with_empty_sidings(ids("C B A"), 1), &g), 2);
    }

    #[test]
    fn misplaced_counts_missing_slots() {
        let g = goal("A B C");
        // Slot 2 is empty on the main line
        assert_eq!(misplaced(&Yard::new(ids("A B"), vec![ids("C")]), &g), 1);
        // Nothing on the main line
        assert_eq!(misplaced(&Yard::new(vec![], vec![ids("A B C")]), &g), 3);
    }

    #[test]
    fn manhattan_zero_at_goal() {
        let g = goal("A B C");
        assert_eq!(manhattan(&Yard::with_empty_sidings(ids("A B C"), 2), &g), 0);
    }

    #[test]
    fn manhattan_caps_displacement() {
        let g = goal("A B C D");
        // D at 0 wants 3 (capped to 2), A at 3 wants 0 (capped to 2)
        let yard = Yard::with_empty_sidings(ids("D B C A"), 1);
        assert_eq!(manhattan(&yard, &g), 4);
        // Adjacent swap: each off by one
        let yard = Yard::with_empty_sidings(ids("B A C D"), 1);
        assert_eq!(manhattan(&yard, &g), 2);
    }

    #[test]
    fn manhattan_siding_trains_cost_one() {
        let g = goal("A B C D");
        let yard = Yard::new(vec![], vec![ids("D C"), ids("B A")]);
        // Four trains to place, four moves needed
        assert_eq!(manhattan(&yard, &g), 4);
    }

    #[test]
    fn estimate_dispatches() {
        let g = goal("A B");
        let yard = Yard::new(ids("B"), vec![ids("A")]);
        assert_eq!(Heuristic::Misplaced.estimate(&yard, &g), misplaced(&yard, &g));
        assert_eq!(Heuristic::Manhattan.estimate(&yard, &g), manhattan(&yard, &g));
    }
}
