//! The tick-driven belief tracker.
//!
//! [`Tracker`] owns every piece of the model and runs one complete
//! filter step per [`step()`](Tracker::step) call:
//!
//! 1. read the observer and agent positions from their sources
//! 2. recompute the visible cells around the observer
//! 3. rebuild the emission table
//! 4. run the update operator with this step's evidence
//! 5. advance the predict cadence and run predict if it fires
//! 6. fold the belief into the smoothed feed
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`. The topology is immutable and
//! shared by [`Arc`] between the models, so the tracker is [`Send`] and
//! can be moved to whichever thread drives the simulation.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use haunt_core::{Cell, Evidence, MassOutcome, PositionSource, TickId};
use haunt_model::{Belief, EmissionModel, ObservationModel, TransitionModel};
use haunt_space::{GridTopology, OccupancyGrid};

use crate::cadence::PredictCadence;
use crate::config::{ConfigError, TrackerConfig};
use crate::feed::SmoothedBelief;
use crate::metrics::StepMetrics;

const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Tracker>();
    }
};

// ── StepError ───────────────────────────────────────────────────

/// Error returned from [`Tracker::step()`]. The tracker is left untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// `dt` was negative, NaN, or infinite.
    InvalidDt {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDt { value } => {
                write!(f, "dt must be finite and non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for StepError {}

// ── StepReport ──────────────────────────────────────────────────

/// What happened during one [`Tracker::step()`].
#[derive(Clone, Debug, PartialEq)]
pub struct StepReport {
    /// The tick this step produced.
    pub tick: TickId,
    /// Observer position read this step.
    pub observer: Cell,
    /// Agent position read this step.
    pub agent: Cell,
    /// The evidence the update ran with.
    pub evidence: Evidence,
    /// Outcome of the update operator.
    pub update: MassOutcome,
    /// Outcome of the predict operator, `None` if the cadence did not fire.
    pub predict: Option<MassOutcome>,
    /// Timings and counters for this step.
    pub metrics: StepMetrics,
}

// ── Tracker ─────────────────────────────────────────────────────

/// Single-threaded belief tracker over a fixed grid.
///
/// # Example
///
/// ```
/// use haunt_core::Cell;
/// use haunt_engine::{Tracker, TrackerConfig};
/// use haunt_space::OccupancyGrid;
///
/// let grid = OccupancyGrid::open(5, 5).unwrap();
/// let mut tracker = Tracker::new(&grid, TrackerConfig::default()).unwrap();
///
/// let report = tracker.step(0.1, &Cell::new(0, 4), &Cell::new(2, 2)).unwrap();
/// assert!(report.evidence.is_detection());
/// assert_eq!(tracker.belief().most_likely().map(|(c, _)| c), Some(Cell::new(2, 2)));
/// ```
#[derive(Debug)]
pub struct Tracker {
    topology: Arc<GridTopology>,
    config: TrackerConfig,
    transition: TransitionModel,
    observation: ObservationModel,
    emission: EmissionModel,
    belief: Belief,
    smoothed: SmoothedBelief,
    cadence: PredictCadence,
    current_tick: TickId,
    last_metrics: StepMetrics,
}

impl Tracker {
    /// Build a tracker for `grid`.
    ///
    /// Validates `config`, derives the topology, and starts from a uniform
    /// belief.
    pub fn new(grid: &OccupancyGrid, config: TrackerConfig) -> Result<Self, ConfigError> {
        Self::from_topology(Arc::new(GridTopology::from_occupancy(grid)), config)
    }

    /// Build a tracker over an already-derived topology.
    pub fn from_topology(
        topology: Arc<GridTopology>,
        config: TrackerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let transition = TransitionModel::new(topology.clone(), config.isolated_cell_policy);
        let observation = ObservationModel::new(topology.clone(), config.observation_range);
        let belief = Belief::uniform(topology.clone());
        let smoothed = SmoothedBelief::new(topology.clone(), config.smoothing_decay);
        let cadence = PredictCadence::new(config.update_interval);

        tracing::info!(
            states = topology.len(),
            width = topology.width(),
            height = topology.height(),
            range = config.observation_range,
            interval = config.update_interval,
            "belief tracker ready"
        );
        if topology.is_empty() {
            tracing::warn!("grid has no walkable cell; every step is a no-op");
        }

        Ok(Self {
            topology,
            config,
            transition,
            observation,
            emission: EmissionModel::new(),
            belief,
            smoothed,
            cadence,
            current_tick: TickId(0),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Run one filter step covering `dt` seconds.
    ///
    /// # Errors
    ///
    /// [`StepError::InvalidDt`] if `dt` is negative or not finite. Nothing
    /// is read or mutated in that case.
    pub fn step(
        &mut self,
        dt: f64,
        observer: &dyn PositionSource,
        agent: &dyn PositionSource,
    ) -> Result<StepReport, StepError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(StepError::InvalidDt { value: dt });
        }
        let step_start = Instant::now();
        let tick = TickId(self.current_tick.0 + 1);
        let observer = observer.position();
        let agent = agent.position();

        let mut metrics = StepMetrics {
            detections: self.last_metrics.detections,
            predicts_fired: self.last_metrics.predicts_fired,
            guarded_updates: self.last_metrics.guarded_updates,
            guarded_predicts: self.last_metrics.guarded_predicts,
            ..StepMetrics::default()
        };

        // 1. Field of view.
        let start = Instant::now();
        metrics.visible_cells = self.observation.recompute(observer).len();
        metrics.observation_us = start.elapsed().as_micros() as u64;

        // 2. Emission table.
        let start = Instant::now();
        self.emission
            .rebuild(&self.topology, &self.observation, agent);
        metrics.emission_us = start.elapsed().as_micros() as u64;

        // 3. Update.
        let start = Instant::now();
        let evidence = self.observation.detect(agent);
        let update = self.belief.update(&self.emission, evidence);
        metrics.update_us = start.elapsed().as_micros() as u64;

        if evidence.is_detection() {
            metrics.detections += 1;
            tracing::debug!(%tick, %agent, %observer, "agent detected");
        }
        if update.is_degenerate() {
            metrics.guarded_updates += 1;
            // Without a detection every emission lookup misses, so zero
            // mass is the normal outcome there.
            if evidence.is_detection() || !matches!(update, MassOutcome::ZeroMass) {
                tracing::warn!(%tick, %evidence, outcome = %update, "update kept previous belief");
            } else {
                tracing::trace!(%tick, "no detection, belief retained");
            }
        }

        // 4. Predict on cadence.
        let predict = if self.cadence.advance(dt) {
            let start = Instant::now();
            let outcome = self.belief.predict(&self.transition);
            metrics.predict_us = start.elapsed().as_micros() as u64;
            metrics.predicts_fired += 1;
            tracing::debug!(%tick, %outcome, "predict fired");
            if outcome.is_degenerate() {
                metrics.guarded_predicts += 1;
                tracing::warn!(%tick, %outcome, "predict kept previous belief");
            }
            Some(outcome)
        } else {
            None
        };

        // 5. Smoothed feed.
        let start = Instant::now();
        self.smoothed.absorb(&self.belief);
        metrics.smoothing_us = start.elapsed().as_micros() as u64;

        metrics.total_us = step_start.elapsed().as_micros() as u64;
        self.current_tick = tick;
        self.last_metrics = metrics.clone();

        Ok(StepReport {
            tick,
            observer,
            agent,
            evidence,
            update,
            predict,
            metrics,
        })
    }

    /// Restore the uniform prior and clear the smoothed feed and the
    /// predict accumulator. The tick counter keeps running.
    pub fn reset(&mut self) {
        self.belief.reset();
        self.smoothed.clear();
        self.cadence.reset();
        tracing::debug!(tick = %self.current_tick, "tracker reset");
    }

    /// The current belief.
    pub fn belief(&self) -> &Belief {
        &self.belief
    }

    /// The smoothed presentation copy of the belief.
    pub fn smoothed(&self) -> &SmoothedBelief {
        &self.smoothed
    }

    /// The field of view as of the last step.
    pub fn observation(&self) -> &ObservationModel {
        &self.observation
    }

    /// The emission table as of the last step.
    pub fn emission(&self) -> &EmissionModel {
        &self.emission
    }

    /// The transition model.
    pub fn transition(&self) -> &TransitionModel {
        &self.transition
    }

    /// The state space.
    pub fn topology(&self) -> &Arc<GridTopology> {
        &self.topology
    }

    /// The configuration the tracker was built with.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// The predict cadence.
    pub fn cadence(&self) -> &PredictCadence {
        &self.cadence
    }

    /// The last completed tick; `TickId(0)` before the first step.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(w: u32, h: u32, config: TrackerConfig) -> Tracker {
        Tracker::new(&OccupancyGrid::open(w, h).unwrap(), config).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let grid = OccupancyGrid::open(3, 3).unwrap();
        let err = Tracker::new(&grid, TrackerConfig::default().with_update_interval(0.0)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidUpdateInterval { value: 0.0 });
    }

    #[test]
    fn invalid_dt_leaves_tracker_untouched() {
        let mut t = open(3, 3, TrackerConfig::default());
        for dt in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                t.step(dt, &Cell::new(0, 0), &Cell::new(1, 1)),
                Err(StepError::InvalidDt { .. })
            ));
        }
        assert_eq!(t.current_tick(), TickId(0));
        assert!(t.smoothed().is_empty());
        assert_eq!(t.observation().observer(), None);
    }

    #[test]
    fn ticks_count_up() {
        let mut t = open(3, 3, TrackerConfig::default());
        for expected in 1..=3 {
            let r = t.step(0.1, &Cell::new(0, 0), &Cell::new(2, 2)).unwrap();
            assert_eq!(r.tick, TickId(expected));
        }
        assert_eq!(t.current_tick(), TickId(3));
    }

    #[test]
    fn report_carries_positions_and_evidence() {
        let mut t = open(10, 10, TrackerConfig::default().with_observation_range(2));
        let r = t.step(0.1, &Cell::new(0, 0), &Cell::new(9, 9)).unwrap();
        assert_eq!(r.observer, Cell::new(0, 0));
        assert_eq!(r.agent, Cell::new(9, 9));
        assert_eq!(r.evidence, Evidence::NoDetection);
        assert_eq!(r.update, MassOutcome::ZeroMass);
        assert_eq!(r.predict, None);
        assert_eq!(r.metrics.visible_cells, 6);
        assert_eq!(r.metrics.guarded_updates, 1);
    }

    #[test]
    fn counters_accumulate() {
        let mut t = open(5, 5, TrackerConfig::default().with_update_interval(0.5));
        for _ in 0..4 {
            t.step(0.3, &Cell::new(0, 0), &Cell::new(1, 1)).unwrap();
        }
        let m = t.last_metrics();
        assert_eq!(m.detections, 4);
        // 0.3, 0.6 > 0.5 fires; 0.3, 0.6 fires again.
        assert_eq!(m.predicts_fired, 2);
        assert_eq!(m.guarded_updates, 0);
    }

    #[test]
    fn reset_restores_prior() {
        let mut t = open(5, 5, TrackerConfig::default());
        t.step(0.7, &Cell::new(0, 0), &Cell::new(2, 2)).unwrap();
        assert!(t.belief().probability(Cell::new(2, 2)) > 0.5);
        t.reset();
        assert_eq!(t.belief().probability(Cell::new(2, 2)), 1.0 / 25.0);
        assert!(t.smoothed().is_empty());
        assert_eq!(t.cadence().accumulated(), 0.0);
        assert_eq!(t.current_tick(), TickId(1));
    }

    #[test]
    fn step_error_message() {
        let e = StepError::InvalidDt { value: -1.5 };
        assert_eq!(e.to_string(), "dt must be finite and non-negative, got -1.5");
    }
}
