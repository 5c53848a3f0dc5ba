//! Topology compliance test helpers.
//!
//! These functions verify that a [`GridTopology`] satisfies the invariants
//! the transition and observation models rely on. Reused by every
//! topology test in this crate.

use crate::topology::GridTopology;
use indexmap::IndexSet;

/// Assert that every neighbour is itself a state, one step away.
pub fn assert_neighbours_are_adjacent_states(topo: &GridTopology) {
    for &cell in topo.states() {
        for &nb in topo.neighbours(cell) {
            assert!(
                topo.contains(nb),
                "neighbour {nb} of {cell} is not a walkable state"
            );
            assert_eq!(
                cell.manhattan(nb),
                1,
                "neighbour {nb} of {cell} is not one step away"
            );
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(topo: &GridTopology) {
    for &cell in topo.states() {
        for &nb in topo.neighbours(cell) {
            assert!(
                topo.neighbours(nb).contains(&cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert that every walkable adjacent cell is listed as a neighbour.
pub fn assert_neighbours_complete(topo: &GridTopology) {
    for &cell in topo.states() {
        let expected = cell
            .adjacent()
            .into_iter()
            .filter(|c| topo.contains(*c))
            .count();
        assert_eq!(
            topo.degree(cell),
            expected,
            "degree of {cell} is {}, expected {expected}",
            topo.degree(cell)
        );
    }
}

/// Assert that states are unique and in row-major order.
pub fn assert_states_row_major(topo: &GridTopology) {
    let unique: IndexSet<_> = topo.states().iter().collect();
    assert_eq!(unique.len(), topo.len(), "states have duplicates");
    let ordered: Vec<_> = topo.states().iter().copied().collect();
    for pair in ordered.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            (a.y, a.x) < (b.y, b.x),
            "states out of row-major order: {a} before {b}"
        );
    }
}

/// Assert that every state lies inside the source grid.
pub fn assert_states_in_bounds(topo: &GridTopology) {
    for &cell in topo.states() {
        assert!(
            cell.x >= 0
                && cell.y >= 0
                && (cell.x as u32) < topo.width()
                && (cell.y as u32) < topo.height(),
            "state {cell} outside {}x{} grid",
            topo.width(),
            topo.height()
        );
    }
}

/// Run all compliance checks on a topology.
pub fn run_full_compliance(topo: &GridTopology) {
    assert_neighbours_are_adjacent_states(topo);
    assert_neighbours_symmetric(topo);
    assert_neighbours_complete(topo);
    assert_states_row_major(topo);
    assert_states_in_bounds(topo);
}
