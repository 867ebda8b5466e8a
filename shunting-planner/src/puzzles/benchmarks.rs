//! Built-in benchmark puzzles.

use super::{Difficulty, Puzzle};

/// Benchmark names, easiest first.
const NAMES: [&str; 6] = ["easy1", "easy2", "medium1", "medium2", "hard1", "hard2"];

/// Returns the names of every built-in benchmark.
pub fn benchmark_names() -> &'static [&'static str] {
    &NAMES
}

/// Look up a benchmark by name.
pub fn benchmark(name: &str) -> Option<Puzzle> {
    let puzzle = match name {
        "easy1" => build(
            &["1", "2", "3"],
            2,
            &["1", "2", "3"],
            Difficulty::Easy,
            "already in order",
            0,
        ),
        "easy2" => build(
            &["2", "1", "3"],
            2,
            &["1", "2", "3"],
            Difficulty::Easy,
            "swap the first two",
            6,
        ),
        "medium1" => build(
            &["3", "1", "2"],
            2,
            &["1", "2", "3"],
            Difficulty::Medium,
            "rotate three",
            6,
        ),
        "medium2" => build(
            &["2", "3", "1"],
            3,
            &["1", "2", "3"],
            Difficulty::Medium,
            "rotate three the other way",
            6,
        ),
        "hard1" => build(
            &["4", "3", "2", "1"],
            3,
            &["1", "2", "3", "4"],
            Difficulty::Hard,
            "reverse four",
            9,
        ),
        "hard2" => build(
            &["2", "4", "1", "3"],
            3,
            &["1", "2", "3", "4"],
            Difficulty::Hard,
            "interleaved four",
            8,
        ),
        _ => return None,
    };
    Some(puzzle)
}

fn build(
    main: &[&str],
    sidings: usize,
    goal: &[&str],
    difficulty: Difficulty,
    description: &str,
    expected_cost: usize,
) -> Puzzle {
    let empty: &[&str] = &[];
    let mut puzzle = Puzzle::new(main, &vec![empty; sidings], goal);
    puzzle.difficulty = Some(difficulty);
    puzzle.description = Some(description.to_string());
    puzzle.expected_cost = Some(expected_cost);
    puzzle
}

/// Returns every benchmark with its name, easiest first.
pub fn benchmarks() -> Vec<(&'static str, Puzzle)> {
    NAMES
        .iter()
        .filter_map(|&name| benchmark(name).map(|p| (name, p)))
        .collect()
}
