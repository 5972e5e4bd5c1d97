use std::{fmt, num::ParseIntError, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Which algorithm [`unique_with`](crate::unique_with) should use.
///
/// The textual form (used by [`FromStr`], [`Display`](fmt::Display) and
/// serde) is one of `scan`, `hashed`, `auto` or `auto:<threshold>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay)]
pub enum Strategy {
    /// Compare every element against the ones before it.
    Scan,
    /// Remember the elements seen so far in a hash set.
    Hashed,
    /// Scan sequences of at most `threshold` elements, hash longer ones.
    Auto { threshold: usize },
}

impl Strategy {
    /// Below this many elements, scanning usually beats hashing.
    pub const DEFAULT_THRESHOLD: usize = 32;

    /// Does this strategy hash a sequence of length `len`?
    pub fn uses_hashing(self, len: usize) -> bool {
        match self {
            Strategy::Scan => false,
            Strategy::Hashed => true,
            Strategy::Auto { threshold } => len > threshold,
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Auto {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseStrategyError {
    #[error("empty strategy")]
    Empty,
    #[error("unknown strategy `{0}`, expected `scan`, `hashed` or `auto`")]
    Unknown(String),
    #[error("invalid threshold: `{0}`")]
    Threshold(#[from] ParseIntError),
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            _ if s.is_empty() => Err(ParseStrategyError::Empty),
            Some(("auto", threshold)) => Ok(Strategy::Auto {
                threshold: threshold.trim().parse()?,
            }),
            Some(_) => Err(ParseStrategyError::Unknown(s.to_owned())),
            None => match s {
                "scan" => Ok(Strategy::Scan),
                "hashed" => Ok(Strategy::Hashed),
                "auto" => Ok(Strategy::default()),
                _ => Err(ParseStrategyError::Unknown(s.to_owned())),
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Scan => write!(f, "scan"),
            Strategy::Hashed => write!(f, "hashed"),
            Strategy::Auto { threshold } => write!(f, "auto:{threshold}"),
        }
    }
}
