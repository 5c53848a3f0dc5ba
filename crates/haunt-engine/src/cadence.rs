//! Time-accumulator gating the predict step.

/// Fires once each time the accumulated `dt` strictly exceeds the
/// interval, then restarts from exactly zero. Overshoot is discarded, so
/// a single large `dt` never fires more than once.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictCadence {
    interval: f64,
    accumulated: f64,
}

impl PredictCadence {
    /// A cadence with an empty accumulator.
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Add `dt` seconds. Returns `true` if a predict step is due.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.accumulated += dt;
        if self.accumulated > self.interval {
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }

    /// Seconds accumulated since the last firing.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// The configured interval.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Empty the accumulator.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}
