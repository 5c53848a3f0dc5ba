//! Evidence and step-outcome vocabulary shared by the model and engine.

use crate::id::Cell;
use std::fmt;

/// What the observer saw this tick.
///
/// `NoDetection` plays the role of an out-of-grid sentinel: it never
/// matches a key in any emission table, so looking it up always yields
/// probability 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Evidence {
    /// The hidden agent was directly seen at this cell.
    Seen(Cell),
    /// The hidden agent is not inside the observer's range.
    NoDetection,
}

impl Evidence {
    /// The sighted cell, if any.
    pub fn cell(self) -> Option<Cell> {
        match self {
            Self::Seen(c) => Some(c),
            Self::NoDetection => None,
        }
    }

    /// `true` if the agent was seen.
    pub fn is_detection(self) -> bool {
        matches!(self, Self::Seen(_))
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seen(c) => write!(f, "seen at {c}"),
            Self::NoDetection => write!(f, "no detection"),
        }
    }
}

/// Result of a normalizing belief operator (predict or update).
///
/// Anything other than [`Applied`](Self::Applied) means the belief was
/// left bit-identical to its value before the operator ran.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MassOutcome {
    /// The new distribution was normalized and replaced the belief.
    Applied,
    /// The state space is empty; nothing to do.
    Empty,
    /// The unnormalized mass summed to exactly zero.
    ZeroMass,
    /// The unnormalized mass was NaN or infinite.
    NonFinite {
        /// The offending total.
        total: f64,
    },
}

impl MassOutcome {
    /// `true` if the belief was left unchanged.
    pub fn is_retained(self) -> bool {
        !matches!(self, Self::Applied)
    }

    /// `true` if the operator hit a numeric guard (zero or non-finite mass).
    pub fn is_degenerate(self) -> bool {
        matches!(self, Self::ZeroMass | Self::NonFinite { .. })
    }
}

impl fmt::Display for MassOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => write!(f, "applied"),
            Self::Empty => write!(f, "empty state space"),
            Self::ZeroMass => write!(f, "zero total mass"),
            Self::NonFinite { total } => write!(f, "non-finite total mass {total}"),
        }
    }
}
