//! Coarse message sentiment.

use core::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state message polarity.
///
/// Serialized as the integer score `{-1, 0, 1}` to match the persisted
/// conversation format and the sentiment service wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sentiment {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl Sentiment {
    /// The numeric score: negative = -1, neutral = 0, positive = 1.
    #[must_use]
    pub const fn score(self) -> i64 {
        match self {
            Self::Negative => -1,
            Self::Neutral => 0,
            Self::Positive => 1,
        }
    }

    /// Build from a numeric score; any negative value maps to `Negative`,
    /// any positive value to `Positive`.
    #[must_use]
    pub const fn from_score(score: i64) -> Self {
        if score < 0 {
            Self::Negative
        } else if score > 0 {
            Self::Positive
        } else {
            Self::Neutral
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score())
    }
}

impl Serialize for Sentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.score())
    }
}

impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let score = i64::deserialize(deserializer)?;
        if !(-1..=1).contains(&score) {
            return Err(D::Error::custom(format!(
                "sentiment score out of range: {score}"
            )));
        }
        Ok(Self::from_score(score))
    }
}
