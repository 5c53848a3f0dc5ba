//! Tracker configuration, validation, and error types.
//!
//! [`TrackerConfig`] is the builder input for constructing a
//! [`Tracker`](crate::Tracker). [`validate()`](TrackerConfig::validate)
//! checks its numeric invariants once at startup; grid dimensions come
//! from the occupancy grid itself and are checked when it is built.

use std::error::Error;
use std::fmt;

use haunt_model::IsolatedCellPolicy;

// ── TrackerConfig ──────────────────────────────────────────────────

/// Parameters of a [`Tracker`](crate::Tracker).
#[derive(Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Manhattan sensing radius of the observer, in cells. Default: 10.
    pub observation_range: u32,
    /// Seconds of accumulated `dt` a predict step waits for. The step
    /// fires once the accumulator is strictly greater. Default: 1.0.
    pub update_interval: f64,
    /// Weight of the previous value in the smoothed feed. Default: 0.9.
    pub smoothing_decay: f64,
    /// Transition row for cells with no walkable neighbour.
    /// Default: [`IsolatedCellPolicy::SelfLoop`].
    pub isolated_cell_policy: IsolatedCellPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            observation_range: 10,
            update_interval: 1.0,
            smoothing_decay: 0.9,
            isolated_cell_policy: IsolatedCellPolicy::SelfLoop,
        }
    }
}

impl TrackerConfig {
    /// Check structural invariants.
    ///
    /// `update_interval` must be finite and positive; `smoothing_decay`
    /// must lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.update_interval.is_finite() || self.update_interval <= 0.0 {
            return Err(ConfigError::InvalidUpdateInterval {
                value: self.update_interval,
            });
        }
        if !(0.0..=1.0).contains(&self.smoothing_decay) {
            return Err(ConfigError::InvalidSmoothingDecay {
                value: self.smoothing_decay,
            });
        }
        Ok(())
    }

    /// Builder-style setter for the sensing radius.
    pub fn with_observation_range(mut self, range: u32) -> Self {
        self.observation_range = range;
        self
    }

    /// Builder-style setter for the predict interval.
    pub fn with_update_interval(mut self, seconds: f64) -> Self {
        self.update_interval = seconds;
        self
    }

    /// Builder-style setter for the smoothing decay.
    pub fn with_smoothing_decay(mut self, decay: f64) -> Self {
        self.smoothing_decay = decay;
        self
    }

    /// Builder-style setter for the isolated-cell policy.
    pub fn with_isolated_cell_policy(mut self, policy: IsolatedCellPolicy) -> Self {
        self.isolated_cell_policy = policy;
        self
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`TrackerConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `update_interval` is NaN, infinite, zero, or negative.
    InvalidUpdateInterval {
        /// The invalid value.
        value: f64,
    },
    /// `smoothing_decay` is NaN or outside `[0, 1]`.
    InvalidSmoothingDecay {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUpdateInterval { value } => {
                write!(f, "update_interval must be finite and positive, got {value}")
            }
            Self::InvalidSmoothingDecay { value } => {
                write!(f, "smoothing_decay must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = TrackerConfig::default();
        assert_eq!(c.observation_range, 10);
        assert_eq!(c.update_interval, 1.0);
        assert_eq!(c.smoothing_decay, 0.9);
        assert_eq!(c.isolated_cell_policy, IsolatedCellPolicy::SelfLoop);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_interval() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let c = TrackerConfig::default().with_update_interval(value);
            assert!(
                matches!(c.validate(), Err(ConfigError::InvalidUpdateInterval { .. })),
                "{value} accepted"
            );
        }
    }

    #[test]
    fn rejects_bad_decay() {
        for value in [-0.1, 1.5, f64::NAN] {
            let c = TrackerConfig::default().with_smoothing_decay(value);
            assert!(matches!(
                c.validate(),
                Err(ConfigError::InvalidSmoothingDecay { .. })
            ));
        }
        assert!(TrackerConfig::default().with_smoothing_decay(0.0).validate().is_ok());
        assert!(TrackerConfig::default().with_smoothing_decay(1.0).validate().is_ok());
    }

    #[test]
    fn error_messages_name_the_field() {
        let e = ConfigError::InvalidUpdateInterval { value: -2.0 };
        assert_eq!(e.to_string(), "update_interval must be finite and positive, got -2");
    }
}
