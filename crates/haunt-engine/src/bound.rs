//! A tracker that owns its two position sources.

use haunt_core::PositionSource;

use crate::tracker::{StepError, StepReport, Tracker};

/// A [`Tracker`] bound at construction to the observer and agent it
/// follows, so each tick only needs `dt`.
///
/// The host still drives the sources: move them through
/// [`observer_mut`](Self::observer_mut) and [`agent_mut`](Self::agent_mut)
/// between steps. Pass `&T` to bind borrowed sources instead.
///
/// ```
/// use haunt_core::{Cell, Evidence};
/// use haunt_engine::{BoundTracker, Tracker, TrackerConfig};
/// use haunt_space::OccupancyGrid;
///
/// let grid = OccupancyGrid::open(5, 5).unwrap();
/// let tracker = Tracker::new(&grid, TrackerConfig::default()).unwrap();
/// let mut bound = BoundTracker::new(tracker, Cell::new(0, 0), Cell::new(2, 2));
///
/// let report = bound.step(0.016).unwrap();
/// assert_eq!(report.evidence, Evidence::Seen(Cell::new(2, 2)));
///
/// *bound.agent_mut() = Cell::new(3, 2);
/// assert_eq!(bound.step(0.016).unwrap().agent, Cell::new(3, 2));
/// ```
#[derive(Debug)]
pub struct BoundTracker<O, A> {
    tracker: Tracker,
    observer: O,
    agent: A,
}

impl<O: PositionSource, A: PositionSource> BoundTracker<O, A> {
    /// Bind `tracker` to its observer and agent.
    pub fn new(tracker: Tracker, observer: O, agent: A) -> Self {
        Self {
            tracker,
            observer,
            agent,
        }
    }

    /// Run one tick, reading both positions from the bound sources.
    pub fn step(&mut self, dt: f64) -> Result<StepReport, StepError> {
        self.tracker.step(dt, &self.observer, &self.agent)
    }

    /// The wrapped tracker.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Mutable access to the wrapped tracker, e.g. to [`Tracker::reset`].
    pub fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }

    /// The bound observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the bound observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// The bound agent.
    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Mutable access to the bound agent.
    pub fn agent_mut(&mut self) -> &mut A {
        &mut self.agent
    }

    /// Unbind, returning the tracker and both sources.
    pub fn into_parts(self) -> (Tracker, O, A) {
        (self.tracker, self.observer, self.agent)
    }
}
