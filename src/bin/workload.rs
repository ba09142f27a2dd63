//! Benchmark driver: replays a randomized add/remove/query workload against
//! the hierarchy and reports per-operation timings as CSV on stdout.
//!
//! Run with: `cargo run --release --bin workload -- --config test.json`
//!
//! Lines come out as `add,<live>,<depth>,<ns>`, `sub,<live>,<depth>,<ns>`
//! and `que,<live>,<depth>,<ns>,<hits>`. With `--compare`, each addition
//! instead emits `<i>,<inc-depth>,<inc-score>,<bulk-depth>,<bulk-score>`,
//! pitting the incremental tree against a fresh top-down build of the same
//! volumes.

use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use serde::Deserialize;

use dynbvh::{Bvh, Coordinate, Orthotope};

/// The driver works the 2D projection the renderer draws.
const DIMS: usize = 2;

type Box2 = Orthotope<f32, DIMS>;
type Tree2 = Bvh<f32, Box2, DIMS>;

#[derive(Parser)]
#[command(about = "Replay a randomized BVH workload and report CSV timings")]
struct Args {
    /// JSON workload configuration.
    #[arg(long, default_value = "test.json")]
    config: PathBuf,

    /// Compare incremental insertion against repeated top-down builds.
    #[arg(long)]
    compare: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BoundsConfig {
    point: [f32; DIMS],
    delta: [f32; DIMS],
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WorkloadConfig {
    /// Spatial domain every generated volume stays inside.
    max_bounds: BoundsConfig,
    /// Per-dimension minimum extent of generated volumes.
    min_vol: [f32; DIMS],
    /// Per-dimension maximum extent of generated volumes.
    max_vol: [f32; DIMS],
    additions: usize,
    removals: usize,
    queries: usize,
    rand_seed: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("reading config {}", args.config.display()))?;
    let config: WorkloadConfig =
        serde_json::from_str(&raw).context("parsing workload configuration")?;
    validate(&config)?;

    if args.compare {
        comparison_test(&config);
    } else {
        run_test(&config);
    }
    Ok(())
}

fn validate(config: &WorkloadConfig) -> Result<()> {
    if config.removals > config.additions {
        bail!("incorrect config, removals larger than additions");
    }
    for d in 0..DIMS {
        if config.min_vol[d] >= config.max_vol[d] {
            bail!("incorrect config, MinVol must stay below MaxVol in dimension {d}");
        }
        if config.max_vol[d] >= config.max_bounds.delta[d] {
            bail!("incorrect config, MaxVol must fit inside MaxBounds in dimension {d}");
        }
    }
    Ok(())
}

/// Mixed workload: each step adds one volume, then performs that step's
/// share of removals and counted queries, timing every operation.
fn run_test(config: &WorkloadConfig) {
    let mut rng = ChaCha8Rng::seed_from_u64(config.rand_seed);
    let mut orths: Vec<Rc<Box2>> = Vec::with_capacity(config.additions);
    let mut removed: FxHashSet<usize> = FxHashSet::default();
    let mut tree = Tree2::new();

    let mut removals = distribute(&mut rng, config.removals, config.additions);
    let queries = distribute(&mut rng, config.queries, config.additions);
    let mut live = 0_usize;

    for step in 0..config.additions {
        let orth = Rc::new(make_orth(config, &mut rng));
        orths.push(orth.clone());

        let start = Instant::now();
        tree.add(orth);
        let elapsed = start.elapsed().as_nanos();
        live += 1;
        println!("add,{live},{},{elapsed}", tree.depth());

        for _ in 0..removals[step] {
            // Pick a random victim, scanning past already-removed indices.
            let mut target = rng.random_range(0..=step);
            while removed.contains(&target) && target <= step {
                target += 1;
            }
            if target <= step {
                removed.insert(target);

                let start = Instant::now();
                tree.remove(&orths[target]);
                let elapsed = start.elapsed().as_nanos();
                live -= 1;
                println!("sub,{live},{},{elapsed}", tree.depth());
            } else if step + 1 < removals.len() {
                // Everything at or below this step is gone; push the event
                // to the next step.
                removals[step + 1] += 1;
            }
        }

        for _ in 0..queries[step] {
            let probe = make_orth(config, &mut rng);
            let mut cursor = tree.iter();

            let start = Instant::now();
            let mut hits = 0_usize;
            while cursor.query(&probe).is_some() {
                hits += 1;
            }
            let elapsed = start.elapsed().as_nanos();
            println!("que,{live},{},{elapsed},{hits}", tree.depth());
        }
    }
}

/// Per-addition quality comparison between the incremental tree and a
/// top-down build over the same volumes.
fn comparison_test(config: &WorkloadConfig) {
    let mut rng = ChaCha8Rng::seed_from_u64(config.rand_seed);
    let mut orths: Vec<Rc<Box2>> = Vec::with_capacity(config.additions);
    let mut tree = Tree2::new();

    for step in 0..config.additions {
        let orth = Rc::new(make_orth(config, &mut rng));
        orths.push(orth.clone());
        tree.add(orth);

        let mut pool = orths.clone();
        let bulk = Tree2::top_down(&mut pool);
        println!(
            "{step},{},{},{},{}",
            tree.depth(),
            tree.score(),
            bulk.depth(),
            bulk.score()
        );
    }
}

/// Spread `total_events` uniformly over `steps` buckets.
fn distribute(rng: &mut ChaCha8Rng, total_events: usize, steps: usize) -> Vec<usize> {
    let mut events = vec![0_usize; steps];
    if steps == 0 {
        return events;
    }
    for _ in 0..total_events {
        events[rng.random_range(0..steps)] += 1;
    }
    events
}

/// A random volume: extent drawn from `[MinVol, MaxVol)`, placed so the
/// whole box stays inside `MaxBounds`.
fn make_orth(config: &WorkloadConfig, rng: &mut ChaCha8Rng) -> Box2 {
    let mut point = Coordinate([0.0_f32; DIMS]);
    let mut delta = Coordinate([0.0_f32; DIMS]);
    for d in 0..DIMS {
        delta[d] = rng.random_range(config.min_vol[d]..config.max_vol[d]);
        let min_pos = config.max_bounds.point[d];
        let max_pos = min_pos + config.max_bounds.delta[d];
        point[d] = rng.random_range(min_pos..max_pos - delta[d]);
    }
    Orthotope::new(point, delta)
}
