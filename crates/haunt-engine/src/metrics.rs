//! Per-step performance metrics for the tracker.
//!
//! [`StepMetrics`] captures timing data for a single step plus a few
//! counters that accumulate over the tracker's lifetime.

/// Timing and counter metrics collected during a single step.
///
/// All durations are in microseconds. The tracker populates these fields
/// after each `step()` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Time spent recomputing the visible cells, in microseconds.
    pub observation_us: u64,
    /// Time spent rebuilding the emission table, in microseconds.
    pub emission_us: u64,
    /// Time spent in the update operator, in microseconds.
    pub update_us: u64,
    /// Time spent in the predict operator, in microseconds. Zero when the
    /// cadence did not fire.
    pub predict_us: u64,
    /// Time spent refreshing the smoothed feed, in microseconds.
    pub smoothing_us: u64,
    /// Number of cells visible to the observer this step.
    pub visible_cells: usize,
    /// Cumulative number of steps in which the agent was detected.
    pub detections: u64,
    /// Cumulative number of predict steps that fired.
    pub predicts_fired: u64,
    /// Cumulative number of update steps that kept the previous belief
    /// because of zero or non-finite mass.
    pub guarded_updates: u64,
    /// Cumulative number of predict steps that kept the previous belief
    /// because of zero or non-finite mass.
    pub guarded_predicts: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.predict_us, 0);
        assert_eq!(m.visible_cells, 0);
        assert_eq!(m.detections, 0);
        assert_eq!(m.guarded_updates, 0);
        assert_eq!(m.guarded_predicts, 0);
    }
}
