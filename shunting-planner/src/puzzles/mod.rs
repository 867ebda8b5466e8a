//! Puzzle definitions: JSON input, validation and the built-in benchmarks.
//!
//! A [`Puzzle`] is the raw, string-typed description a user supplies. It is
//! validated and converted into a [`Yard`] and [`Goal`] before any search runs.

mod benchmarks;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Goal, InvalidTrainId, PuzzleError, TrainId, Yard};

pub use benchmarks::{benchmark, benchmark_names, benchmarks};

/// More sidings than this draws a warning.
const MANY_SIDINGS: usize = 3;

/// More trains than this draws a warning.
const MANY_TRAINS: usize = 5;

/// Error loading or preparing a puzzle.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the puzzle file
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid puzzle document
    #[error("invalid puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A train identifier could not be parsed
    #[error(transparent)]
    TrainId(#[from] InvalidTrainId),

    /// No built-in benchmark has this name
    #[error("unknown benchmark: {0}")]
    UnknownBenchmark(String),

    /// The puzzle parsed but failed validation
    #[error("puzzle failed validation: {}", join_errors(.0))]
    Invalid(Vec<PuzzleError>),
}

fn join_errors(errors: &[PuzzleError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Rough difficulty label for a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Returns the lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something legal but probably not what the author intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleWarning {
    /// Every train starts in a siding
    EmptyMainLine,
    /// With no sidings nothing can move
    NoSidings,
    /// Many sidings make reordering trivial
    ManySidings(usize),
    /// Many trains make the state space large
    ManyTrains(usize),
}

impl fmt::Display for PuzzleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleWarning::EmptyMainLine => f.write_str("main line starts empty"),
            PuzzleWarning::NoSidings => f.write_str("no sidings: no move is possible"),
            PuzzleWarning::ManySidings(n) => {
                write!(f, "{n} sidings may make the puzzle too easy")
            }
            PuzzleWarning::ManyTrains(n) => {
                write!(f, "{n} trains may make the puzzle too complex")
            }
        }
    }
}

/// Outcome of [`Puzzle::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: Vec<PuzzleError>,
    pub warnings: Vec<PuzzleWarning>,
}

impl Validation {
    /// Returns true if there are no errors. Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A puzzle as written in a JSON file.
///
/// ```json
/// {
///   "main_line": ["3", "1", "2"],
///   "sidings": [[], []],
///   "goal": ["1", "2", "3"],
///   "difficulty": "medium",
///   "expected_cost": 6
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Main line contents, furthest train first
    pub main_line: Vec<String>,

    /// Siding contents, deepest train first
    #[serde(default)]
    pub sidings: Vec<Vec<String>>,

    /// Desired main-line order
    pub goal: Vec<String>,

    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Difficulty label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    /// Known optimal number of moves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_cost: Option<usize>,
}

fn parse_ids(names: &[String]) -> Result<Vec<TrainId>, InvalidTrainId> {
    names.iter().map(|n| TrainId::parse(n)).collect()
}

impl Puzzle {
    /// Create a puzzle from its track contents and goal.
    pub fn new(main_line: &[&str], sidings: &[&[&str]], goal: &[&str]) -> Self {
        let owned = |xs: &[&str]| xs.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();
        Self {
            main_line: owned(main_line),
            sidings: sidings.iter().map(|s| owned(s)).collect(),
            goal: owned(goal),
            description: None,
            difficulty: None,
            expected_cost: None,
        }
    }

    /// Parse a puzzle from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a puzzle from a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize the puzzle as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the initial yard.
    pub fn yard(&self) -> Result<Yard, InvalidTrainId> {
        let main = parse_ids(&self.main_line)?;
        let sidings = self
            .sidings
            .iter()
            .map(|s| parse_ids(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Yard::new(main, sidings))
    }

    /// Check the puzzle, collecting every error and warning.
    ///
    /// Only malformed identifiers abort early; structural problems are all
    /// reported together.
    pub fn validate(&self, siding_capacity: Option<usize>) -> Result<Validation, InvalidTrainId> {
        let yard = self.yard()?;
        let order = parse_ids(&self.goal)?;
        let mut report = Validation::default();

        if order.is_empty() {
            report.errors.push(PuzzleError::EmptyGoal);
        }

        let unique = yard.check_unique();
        if let Err(e) = &unique {
            report.errors.push(e.clone());
        }

        match Goal::new(order) {
            Ok(goal) if unique.is_ok() => {
                if let Err(e) = goal.check_against(&yard) {
                    report.errors.push(e);
                }
            }
            Ok(_) => {}
            Err(e) => report.errors.push(e),
        }

        if let Err(e) = yard.check_capacity(siding_capacity) {
            report.errors.push(e);
        }

        if yard.main_line().is_empty() {
            report.warnings.push(PuzzleWarning::EmptyMainLine);
        }
        if yard.siding_count() == 0 {
            report.warnings.push(PuzzleWarning::NoSidings);
        }
        if yard.siding_count() > MANY_SIDINGS {
            report
                .warnings
                .push(PuzzleWarning::ManySidings(yard.siding_count()));
        }
        if yard.train_count() > MANY_TRAINS {
            report
                .warnings
                .push(PuzzleWarning::ManyTrains(yard.train_count()));
        }

        Ok(report)
    }

    /// Validate and convert into a searchable yard and goal.
    ///
    /// Warnings are logged, errors returned.
    pub fn prepare(&self, siding_capacity: Option<usize>) -> Result<(Yard, Goal), LoadError> {
        let validation = self.validate(siding_capacity)?;
        for warning in &validation.warnings {
            warn!(%warning, "Puzzle warning");
        }
        if !validation.is_valid() {
            return Err(LoadError::Invalid(validation.errors));
        }

        let yard = self.yard()?;
        let goal = Goal::new(parse_ids(&self.goal)?).map_err(|e| LoadError::Invalid(vec![e]))?;
        Ok((yard, goal))
    }
}
