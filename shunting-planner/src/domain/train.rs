//! Train identifier type.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid train identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train id: {reason}")]
pub struct InvalidTrainId {
    reason: &'static str,
}

/// A validated train identifier.
///
/// Identifiers are non-empty and contain no whitespace, so a yard can always be
/// written as space-separated tokens and read back. The text is shared, which
/// keeps cloning a yard cheap during search.
///
/// # Examples
///
/// ```
/// use shunting_planner::domain::TrainId;
///
/// let a = TrainId::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// assert!(TrainId::parse("").is_err());
/// assert!(TrainId::parse("A B").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainId(Arc<str>);

impl TrainId {
    /// Parse a train identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidTrainId> {
        if s.is_empty() {
            return Err(InvalidTrainId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidTrainId {
                reason: "must not contain whitespace",
            });
        }

        Ok(TrainId(Arc::from(s)))
    }

    /// Parse a whitespace-separated list of identifiers, e.g. `"3 1 2"`.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, InvalidTrainId> {
        s.split_whitespace().map(Self::parse).collect()
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainId({})", self.as_str())
    }
}

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z0-9_-]{1,8}") {
            let id = TrainId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Any string containing a space is rejected
        #[test]
        fn spaces_rejected(a in "[A-Z]{0,3}", b in "[A-Z]{0,3}") {
            let s = format!("{} {}", a, b);
            prop_assert!(TrainId::parse(&s).is_err());
        }
    }
}
