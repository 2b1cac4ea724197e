//! Shared demo driver: maze generation with both algorithms, maze solving,
//! and an A* / Dijkstra comparison on random terrain.

use std::error::Error;
use std::io::Write;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use trailblazer_core::{Cell, World};
use trailblazer_maze::{MazeAlgorithm, MazeConfig, generate};
use trailblazer_paths::costs::{entry_cost, scaled_manhattan};
use trailblazer_paths::{VisitLog, WorldPather, astar_path, dijkstra_path};

/// Command-line settings: `[rows] [cols] [seed]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoArgs {
    pub rows: i32,
    pub cols: i32,
    pub seed: u64,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 12,
            seed: 42,
        }
    }
}

impl DemoArgs {
    /// Parse positional arguments; missing ones keep their defaults.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, Box<dyn Error>> {
        let mut out = Self::default();
        let mut it = args.into_iter();
        if let Some(a) = it.next() {
            out.rows = a.parse()?;
        }
        if let Some(a) = it.next() {
            out.cols = a.parse()?;
        }
        if let Some(a) = it.next() {
            out.seed = a.parse()?;
        }
        if let Some(extra) = it.next() {
            return Err(format!("unexpected argument {extra:?}").into());
        }
        Ok(out)
    }
}

/// Run every demo, writing the output to `out`.
pub fn run(args: &DemoArgs, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    for algorithm in [MazeAlgorithm::Kruskal, MazeAlgorithm::Prim] {
        let config = MazeConfig {
            rows: args.rows,
            cols: args.cols,
            algorithm,
            seed: Some(args.seed),
            ..MazeConfig::default()
        };
        let maze = generate(&config)?;
        let start = Cell::ZERO;
        let end = Cell::new(args.rows - 1, args.cols - 1);
        let path = astar_path(&maze, start, end, &mut ())?;

        writeln!(out, "{algorithm:?} maze, {} passages:", maze.len())?;
        write!(out, "{}", maze.render(path.cells()))?;
        writeln!(out, "solution {start} -> {end}: {} steps", path.len() - 1)?;
        writeln!(out)?;
    }

    terrain_demo(args, out)
}

fn terrain_demo(args: &DemoArgs, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut world = World::new(args.rows, args.cols, 1.0);
    world.fill_fn(|_| rng.random_range(1.0..9.0));

    let start = Cell::ZERO;
    let end = Cell::new(args.rows - 1, args.cols - 1);
    let plain = WorldPather::new(&world, entry_cost);
    let guided = WorldPather::new(&world, entry_cost).with_heuristic(scaled_manhattan(world.min_cost()));

    let mut log = VisitLog::new();
    let dp = dijkstra_path(&plain, start, end, &mut log)?;
    let dcount = log.finalized().count();
    log.clear();
    let ap = astar_path(&guided, start, end, &mut log)?;
    let acount = log.finalized().count();

    writeln!(out, "terrain {start} -> {end}:")?;
    writeln!(
        out,
        "  dijkstra: cost {:.2}, {dcount} cells finalized",
        dp.cost()
    )?;
    writeln!(
        out,
        "  a*:       cost {:.2}, {acount} cells finalized",
        ap.cost()
    )?;
    Ok(())
}
