//! The observer's field of view.

use std::sync::Arc;

use haunt_core::{Cell, Evidence};
use haunt_space::GridTopology;
use indexmap::IndexSet;

/// The set of states within sensing range of the observer.
///
/// Recomputed from scratch every tick from the observer's current
/// position; its contents only live until the next
/// [`recompute`](Self::recompute). Range is a manhattan radius and walls
/// do not block sight.
#[derive(Clone, Debug)]
pub struct ObservationModel {
    topology: Arc<GridTopology>,
    range: u32,
    observer: Option<Cell>,
    visible: IndexSet<Cell>,
}

impl ObservationModel {
    /// Create a model with nothing visible yet.
    pub fn new(topology: Arc<GridTopology>, range: u32) -> Self {
        Self {
            topology,
            range,
            observer: None,
            visible: IndexSet::new(),
        }
    }

    /// The sensing radius.
    pub fn range(&self) -> u32 {
        self.range
    }

    /// The observer position of the last recompute.
    pub fn observer(&self) -> Option<Cell> {
        self.observer
    }

    /// Recompute the visible cells for an observer standing at `observer`.
    ///
    /// Visible cells keep the topology's canonical order. The previous
    /// allocation is reused.
    pub fn recompute(&mut self, observer: Cell) -> &IndexSet<Cell> {
        self.visible.clear();
        self.visible
            .extend(self.topology.within_range(observer, self.range));
        self.observer = Some(observer);
        &self.visible
    }

    /// Cells visible as of the last recompute.
    pub fn visible_cells(&self) -> &IndexSet<Cell> {
        &self.visible
    }

    /// `true` if `cell` was visible at the last recompute.
    pub fn is_visible(&self, cell: Cell) -> bool {
        self.visible.contains(&cell)
    }

    /// Scan the visible cells for the hidden agent.
    ///
    /// Returns [`Evidence::Seen`] with the first visible cell occupied by
    /// the agent, or [`Evidence::NoDetection`].
    pub fn detect(&self, agent: Cell) -> Evidence {
        self.visible
            .iter()
            .find(|&&c| c == agent)
            .map_or(Evidence::NoDetection, |&c| Evidence::Seen(c))
    }
}
