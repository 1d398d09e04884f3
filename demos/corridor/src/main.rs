//! corridor: plan through a zig-zag corridor with both planners.
//!
//! Usage: `corridor [MAP_FILE] [ALGORITHM]`
//!
//! Without arguments the built-in corridor map is used and both RRT-Connect
//! and RRT* run.  `ALGORITHM` is `rrt_connect` or `rrt_star`.  Output for
//! each run goes to `output/corridor/<algorithm>/`: the CSV files written by
//! `rrt-output` plus a `summary.json`.  Set `RUST_LOG=debug` for planner
//! logging.

mod scenario;

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use rrt_core::PlannerConfig;
use rrt_map::{Map, load_map, load_map_reader};
use rrt_output::{CsvWriter, PlanOutputObserver};
use rrt_planner::{Algorithm, Plan};

use scenario::{CORRIDOR_MAP, GOAL, ROBOT_RADIUS, START};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:        &str  = "output/corridor";
const PROGRESS_INTERVAL: usize = 100; // progress row every 100 iterations

// ── Run summary ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Summary<'a> {
    algorithm:  &'a str,
    success:    bool,
    iterations: usize,
    vertices:   usize,
    edges:      usize,
    waypoints:  usize,
    cost:       f64,
    elapsed_ms: f64,
    config:     &'a PlannerConfig,
}

impl<'a> Summary<'a> {
    fn new(algorithm: Algorithm, plan: &Plan, elapsed_ms: f64, config: &'a PlannerConfig) -> Self {
        Self {
            algorithm: algorithm.name(),
            success: plan.is_success(),
            iterations: plan.iterations(),
            vertices: plan.tree_size(),
            edges: plan.graph().edge_count(),
            waypoints: plan.path().len(),
            cost: plan.cost(),
            elapsed_ms,
            config,
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let map_path = args.next().map(PathBuf::from);
    let algorithms = match args.next() {
        Some(name) => vec![name.parse::<Algorithm>()?],
        None => Algorithm::ALL.to_vec(),
    };

    println!("=== corridor: RRT-Connect / RRT* ===");

    // 1. Map.
    let map = match &map_path {
        Some(path) => load_map(path, ROBOT_RADIUS)
            .with_context(|| format!("loading map {}", path.display()))?,
        None => load_map_reader(Cursor::new(CORRIDOR_MAP), ROBOT_RADIUS)?,
    };
    println!(
        "Map: {} × {} half-extent, {} obstacles, robot radius {ROBOT_RADIUS}",
        map.width(),
        map.height(),
        map.obstacle_count()
    );
    println!("Start {START}  →  goal {GOAL}");
    println!();

    let config = scenario::config();

    // 2. Plan with each algorithm.
    println!("{:<12} {:<8} {:>10} {:>9} {:>9} {:>10}", "Algorithm", "Found", "Iters", "Vertices", "Cost", "Time (ms)");
    println!("{}", "-".repeat(63));
    for algorithm in algorithms {
        let summary = run(algorithm, &map, &config)?;
        println!(
            "{:<12} {:<8} {:>10} {:>9} {:>9.3} {:>10.1}",
            summary.algorithm,
            if summary.success { "yes" } else { "no" },
            summary.iterations,
            summary.vertices,
            summary.cost,
            summary.elapsed_ms,
        );
    }

    println!();
    println!("Output written to {OUTPUT_DIR}/");
    Ok(())
}

fn run<'a>(algorithm: Algorithm, map: &Map, config: &'a PlannerConfig) -> Result<Summary<'a>> {
    let dir = Path::new(OUTPUT_DIR).join(algorithm.name());
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut obs = PlanOutputObserver::new(CsvWriter::new(&dir)?, PROGRESS_INTERVAL);
    obs.write_map(map);

    let t0 = Instant::now();
    let plan = algorithm.run(START, GOAL, map, config, &mut obs)?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1_000.0;

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    let summary = Summary::new(algorithm, &plan, elapsed_ms, config);
    let json = serde_json::to_string_pretty(&summary)?;
    std::fs::write(dir.join("summary.json"), json)?;
    info!("{algorithm}: wrote {}", dir.display());

    Ok(summary)
}
