//! The model pieces wired together by hand, one tick at a time.

use std::sync::Arc;

use haunt_core::{Cell, Evidence, MassOutcome};
use haunt_model::{Belief, EmissionModel, IsolatedCellPolicy, ObservationModel, TransitionModel};
use haunt_space::{GridTopology, OccupancyGrid};

struct Pipeline {
    topology: Arc<GridTopology>,
    transition: TransitionModel,
    observation: ObservationModel,
    emission: EmissionModel,
    belief: Belief,
}

impl Pipeline {
    fn new(grid: &OccupancyGrid, range: u32) -> Self {
        let topology = Arc::new(GridTopology::from_occupancy(grid));
        Self {
            transition: TransitionModel::new(topology.clone(), IsolatedCellPolicy::SelfLoop),
            observation: ObservationModel::new(topology.clone(), range),
            emission: EmissionModel::new(),
            belief: Belief::uniform(topology.clone()),
            topology,
        }
    }

    fn correct(&mut self, observer: Cell, agent: Cell) -> (Evidence, MassOutcome) {
        self.observation.recompute(observer);
        self.emission.rebuild(&self.topology, &self.observation, agent);
        let evidence = self.observation.detect(agent);
        (evidence, self.belief.update(&self.emission, evidence))
    }
}

#[test]
fn partial_view_detection_follows_closed_form() {
    // n states, m visible: the agent gets m / (m + n - 1), the rest 1 / (m + n - 1).
    let grid = OccupancyGrid::open(8, 8).unwrap();
    let mut p = Pipeline::new(&grid, 2);
    let agent = Cell::new(1, 1);
    let (evidence, outcome) = p.correct(Cell::new(0, 0), agent);

    assert_eq!(evidence, Evidence::Seen(agent));
    assert_eq!(outcome, MassOutcome::Applied);
    let n = 64.0;
    let m = p.observation.visible_cells().len() as f64;
    assert_eq!(m, 6.0);
    let denom = m + n - 1.0;
    assert!((p.belief.probability(agent) - m / denom).abs() < 1e-12);
    assert!((p.belief.probability(Cell::new(7, 7)) - 1.0 / denom).abs() < 1e-12);
    assert!((p.belief.probability(Cell::new(0, 1)) - 1.0 / denom).abs() < 1e-12);
}

#[test]
fn repeated_sightings_sharpen_the_belief() {
    let grid = OccupancyGrid::open(5, 5).unwrap();
    let mut p = Pipeline::new(&grid, 10);
    let agent = Cell::new(3, 1);
    let mut last = 0.0;
    for _ in 0..4 {
        p.correct(Cell::new(0, 0), agent);
        let now = p.belief.probability(agent);
        assert!(now > last);
        last = now;
    }
    assert_eq!(p.belief.most_likely().map(|(c, _)| c), Some(agent));
}

#[test]
fn losing_sight_keeps_belief_until_predict() {
    let grid = OccupancyGrid::open(6, 1).unwrap();
    let mut p = Pipeline::new(&grid, 1);
    p.correct(Cell::new(0, 0), Cell::new(1, 0));
    let after_sighting = p.belief.as_slice().to_vec();

    let (evidence, outcome) = p.correct(Cell::new(0, 0), Cell::new(5, 0));
    assert_eq!(evidence, Evidence::NoDetection);
    assert_eq!(outcome, MassOutcome::ZeroMass);
    assert_eq!(p.belief.as_slice(), after_sighting.as_slice());

    assert_eq!(p.belief.predict(&p.transition), MassOutcome::Applied);
    assert_ne!(p.belief.as_slice(), after_sighting.as_slice());
    assert!((p.belief.total() - 1.0).abs() < 1e-12);
}

#[test]
fn predict_spreads_a_point_mass_to_neighbours() {
    let grid = OccupancyGrid::parse(
        "
        ...
        ...
        ...
        ",
    )
    .unwrap();
    let topology = Arc::new(GridTopology::from_occupancy(&grid));
    let transition = TransitionModel::new(topology.clone(), IsolatedCellPolicy::SelfLoop);
    let mut values = vec![0.0; topology.len()];
    values[topology.index_of(Cell::new(1, 1)).unwrap()] = 1.0;
    let mut belief = Belief::from_values(topology.clone(), values).unwrap();

    belief.predict(&transition);
    for &n in topology.neighbours(Cell::new(1, 1)) {
        assert_eq!(belief.probability(n), 0.25);
    }
    assert_eq!(belief.probability(Cell::new(1, 1)), 0.0);
    assert_eq!(belief.probability(Cell::new(0, 0)), 0.0);
}
