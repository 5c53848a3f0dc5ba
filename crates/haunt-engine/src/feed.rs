//! Smoothed belief for presentation.
//!
//! The feed never influences the filter. It keeps an exponential moving
//! average of the belief so that a renderer can show a heat map that does
//! not flicker with every predict step.

use std::sync::Arc;

use haunt_core::Cell;
use haunt_model::Belief;
use haunt_space::GridTopology;

/// Exponential moving average of the belief over the same states.
#[derive(Clone, Debug)]
pub struct SmoothedBelief {
    topology: Arc<GridTopology>,
    decay: f64,
    values: Vec<f64>,
}

impl SmoothedBelief {
    /// An empty feed. Nothing is reported until the first
    /// [`absorb`](Self::absorb).
    pub fn new(topology: Arc<GridTopology>, decay: f64) -> Self {
        Self {
            topology,
            decay,
            values: Vec::new(),
        }
    }

    /// Blend the current belief in:
    /// `smoothed[s] = decay · prev[s] + (1 − decay) · belief[s]`.
    ///
    /// On the first call `prev` is the belief itself.
    pub fn absorb(&mut self, belief: &Belief) {
        let current = belief.as_slice();
        if self.values.len() != current.len() {
            self.values = current.to_vec();
        }
        let keep = self.decay;
        let take = 1.0 - keep;
        for (s, &b) in self.values.iter_mut().zip(current) {
            *s = keep * *s + take * b;
        }
    }

    /// Forget everything absorbed so far.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// `true` until the first absorb (or after a clear).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smoothed values in canonical state order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Smoothed value of `cell`, if it is a state and the feed has data.
    pub fn get(&self, cell: Cell) -> Option<f64> {
        self.topology
            .index_of(cell)
            .and_then(|i| self.values.get(i).copied())
    }

    /// `(cell, smoothed value)` pairs in canonical state order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.topology
            .states()
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Classify every state into a [`HeatBand`].
    ///
    /// Values are min/max normalized. Every state equal to the maximum is
    /// [`HeatBand::Peak`]; on a flat feed that is all of them.
    pub fn heat_map(&self) -> Vec<HeatCell> {
        let (min, max) = self
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let range = max - min;
        self.iter()
            .map(|(cell, value)| {
                let band = if value == max {
                    HeatBand::Peak
                } else {
                    HeatBand::classify((value - min) / range)
                };
                HeatCell { cell, value, band }
            })
            .collect()
    }
}

/// One state of a heat map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatCell {
    /// The state.
    pub cell: Cell,
    /// Its smoothed probability.
    pub value: f64,
    /// Its intensity band.
    pub band: HeatBand,
}

/// Intensity band of a smoothed value relative to the whole feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeatBand {
    /// Equal to the maximum.
    Peak,
    /// Normalized value at least 0.75.
    High,
    /// Normalized value at least 0.25.
    Medium,
    /// Everything else.
    Low,
}

impl HeatBand {
    /// Band for a min/max normalized value that is not the peak.
    pub fn classify(normalized: f64) -> Self {
        if normalized >= 0.75 {
            Self::High
        } else if normalized >= 0.25 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Display colour as linear RGBA in `[0, 1]`.
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Self::Peak => [1.0, 0.0, 1.0, 1.0],
            Self::High => [0.0, 1.0, 0.0, 0.5],
            Self::Medium => [1.0, 1.0, 0.0, 0.5],
            Self::Low => [1.0, 0.0, 0.0, 0.25],
        }
    }

    /// Single-character glyph for terminal output.
    pub fn glyph(self) -> char {
        match self {
            Self::Peak => '@',
            Self::High => '*',
            Self::Medium => '+',
            Self::Low => '.',
        }
    }
}
