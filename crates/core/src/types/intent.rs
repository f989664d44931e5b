//! Intent classification types.
//!
//! The intent label set is closed: the classifier only ever emits one of the
//! four supported intents, but wire responses are still deserialized
//! defensively into [`Intent::Unknown`] so an unrecognized label degrades to
//! the capability-summary response instead of failing the message.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of user-message intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// General question matched against the FAQ table.
    Faq,
    /// "Where is my order" style queries.
    OrderTracking,
    /// Request to return or refund an order.
    ReturnRequest,
    /// Request to talk to a human agent.
    HumanSupport,
    /// Any label outside the closed set.
    #[serde(other)]
    Unknown,
}

impl Intent {
    /// The wire label for this intent.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Faq => "faq",
            Self::OrderTracking => "order_tracking",
            Self::ReturnRequest => "return_request",
            Self::HumanSupport => "human_support",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Intent {
    fn from(label: &str) -> Self {
        match label {
            "faq" => Self::Faq,
            "order_tracking" => Self::OrderTracking,
            "return_request" => Self::ReturnRequest,
            "human_support" => Self::HumanSupport,
            _ => Self::Unknown,
        }
    }
}

/// A classifier confidence score, clamped to `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a confidence score, clamping out-of-range input.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// The raw score.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
