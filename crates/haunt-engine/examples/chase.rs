//! Haunt chase: an observer patrols a generated playfield while the
//! tracker follows a wandering ghost it can only see up close.
//!
//! Demonstrates:
//!   1. Generating a seeded playfield
//!   2. Building a Tracker from the shared topology
//!   3. Binding it to a random-walk ghost and a scripted observer
//!   4. Printing the smoothed belief as an ASCII heat map
//!
//! Run with:
//!   RUST_LOG=haunt_engine=debug cargo run --example chase -- 42

use std::sync::Arc;

use haunt_core::{Cell, PositionSource};
use haunt_engine::{BoundTracker, HeatBand, Tracker, TrackerConfig};
use haunt_sim::{Direction, PlayfieldConfig, RandomWalker, ScriptedObserver};
use haunt_space::{GridTopology, Occupancy, OccupancyGrid};
use tracing_subscriber::{fmt, EnvFilter};

// ─── Simulation parameters ──────────────────────────────────────

const DT: f64 = 1.0 / 30.0;
const TICKS: usize = 900;
const FRAME_EVERY: usize = 150;
const GHOST_SPEED: f64 = 3.0;
const OBSERVER_STEP_EVERY: usize = 6;

fn init_logging() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(d) = "haunt_engine=info".parse() {
        filter = filter.add_directive(d);
    }
    fmt().with_env_filter(filter).init();
}

fn render(grid: &OccupancyGrid, tracker: &Tracker, observer: Cell, ghost: Cell) -> String {
    let heat = tracker.smoothed().heat_map();
    let mut out = String::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let cell = Cell::new(x, y);
            let glyph = if cell == observer {
                'P'
            } else if cell == ghost {
                'G'
            } else if grid.get(cell) == Some(Occupancy::Wall) {
                '#'
            } else {
                tracker
                    .topology()
                    .index_of(cell)
                    .and_then(|i| heat.get(i))
                    .map_or(' ', |h| h.band.glyph())
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let grid = PlayfieldConfig::default().generate(seed)?;
    let topology = Arc::new(GridTopology::from_occupancy(&grid));
    let config = TrackerConfig::default().with_observation_range(4);
    let tracker = Tracker::from_topology(topology.clone(), config)?;

    let ghost_start = grid.agent_start().ok_or("playfield has no ghost start")?;
    let ghost = RandomWalker::new(topology, ghost_start, GHOST_SPEED, seed);
    let patrol = [Direction::Right; 8]
        .into_iter()
        .chain([Direction::Up; 5])
        .chain([Direction::Left; 8])
        .chain([Direction::Down; 5]);
    let observer = ScriptedObserver::at_start(grid.clone())
        .ok_or("playfield has no observer start")?
        .with_script(patrol);

    println!("seed {seed}, {} walkable cells\n{grid}", tracker.topology().len());
    let mut chase = BoundTracker::new(tracker, observer, ghost);

    let mut detections = 0usize;
    for tick in 0..TICKS {
        chase.agent_mut().advance(DT);
        if tick % OBSERVER_STEP_EVERY == 0 {
            chase.observer_mut().advance();
        }
        let report = chase.step(DT)?;
        if report.evidence.is_detection() {
            detections += 1;
        }

        if (tick + 1) % FRAME_EVERY == 0 {
            let (tracker, observer, ghost) = (chase.tracker(), chase.observer(), chase.agent());
            let best = tracker.belief().most_likely();
            println!(
                "tick {} | ghost {} | best guess {} | entropy {:.3} | {} us",
                report.tick,
                ghost.position(),
                best.map_or_else(|| "-".to_string(), |(c, p)| format!("{c} ({p:.3})")),
                tracker.belief().entropy(),
                report.metrics.total_us,
            );
            print!("{}", render(&grid, tracker, observer.position(), ghost.position()));
            println!(
                "legend: {} peak  {} high  {} medium  {} low\n",
                HeatBand::Peak.glyph(),
                HeatBand::High.glyph(),
                HeatBand::Medium.glyph(),
                HeatBand::Low.glyph(),
            );
        }
    }

    let m = chase.tracker().last_metrics();
    println!(
        "{TICKS} ticks: {detections} with the ghost in sight, {} predicts, {} guarded updates",
        m.predicts_fired, m.guarded_updates
    );
    Ok(())
}
