//! nodesim: build or load a node layout and compare shortest-path
//! algorithms on it.

mod config;
mod render;

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use nodesim_core::{Layout, Point, generate, io};
use nodesim_paths::{Algorithm, Path, Zero, heuristic_map};

use config::{Config, LayoutKind};

/// Layouts with more nodes than this get a warning before an exhaustive
/// search.
const EXHAUSTIVE_WARN_NODES: usize = 20;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (default: ./nodesim.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Load the layout from this file instead of generating one
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Algorithm to run; repeat to compare several
    #[arg(short, long = "algorithm")]
    algorithms: Vec<Algorithm>,

    /// Save the layout to this file
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Timed runs per algorithm
    #[arg(short = 'n', long)]
    iterations: Option<u32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    let mut config = Config::discover(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    let layout = build_layout(&config)?;
    log::info!(
        "layout: {} nodes, {} connections",
        layout.len(),
        layout.edge_count()
    );

    let (start, goal) = endpoints(&config, &layout)?;
    let algorithms = if args.algorithms.is_empty() {
        config.algorithms()?
    } else {
        args.algorithms.clone()
    };
    if algorithms.is_empty() {
        return Err("no algorithm selected".into());
    }

    let path = compare(&config, &layout, &algorithms, start, goal)?;
    println!("{path}");

    if config.output.render {
        match render::render(&layout, Some(&path), config.output.render_limit) {
            Some(art) => print!("{art}"),
            None => log::info!(
                "layout exceeds {0}x{0}, not rendering",
                config.output.render_limit
            ),
        }
    }

    if let Some(dest) = &config.output.save {
        io::save_file(&layout, dest)?;
        log::info!("layout saved to {}", dest.display());
    }
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(path) = &args.layout {
        config.layout.kind = LayoutKind::File;
        config.layout.path = Some(path.clone());
    }
    if let Some(path) = &args.save {
        config.output.save = Some(path.clone());
    }
    if let Some(n) = args.iterations {
        config.search.iterations = n;
    }
}

fn build_layout(config: &Config) -> Result<Layout, Box<dyn Error>> {
    let mut layout = Layout::new();
    match config.layout.kind {
        LayoutKind::Grid => {
            generate::grid(&mut layout, config.layout.size, config.layout.weight)?;
        }
        LayoutKind::Octagon => {
            generate::recursive_octagon(&mut layout, config.layout.depth, Point::ZERO)?;
        }
        LayoutKind::File => {
            let path = config.layout_path()?;
            log::info!("loading layout from {}", path.display());
            layout = io::load_file(path)?;
        }
    }
    Ok(layout)
}

/// Configured start and goal, defaulting to the first and last node.
fn endpoints(config: &Config, layout: &Layout) -> Result<(Point, Point), Box<dyn Error>> {
    let first = layout.nodes().next().map(|n| n.pos());
    let last = layout.nodes().last().map(|n| n.pos());
    let start = config.start().or(first).ok_or("layout has no nodes")?;
    let goal = config.goal().or(last).ok_or("layout has no nodes")?;
    Ok((start, goal))
}

/// Time every algorithm over the configured number of runs and check that
/// they agree on the path length. Returns the first algorithm's path.
fn compare(
    config: &Config,
    layout: &Layout,
    algorithms: &[Algorithm],
    start: Point,
    goal: Point,
) -> Result<Path, Box<dyn Error>> {
    let options = config.search_options();
    let iterations = config.search.iterations.max(1);
    let heuristic = if algorithms.contains(&Algorithm::AStar) {
        heuristic_map(
            layout,
            goal,
            config.distance()?,
            config.search.heuristic_scale,
        )
    } else {
        Default::default()
    };

    let mut results: Vec<(Algorithm, Path)> = Vec::with_capacity(algorithms.len());
    for &alg in algorithms {
        if alg == Algorithm::Exhaustive && layout.len() > EXHAUSTIVE_WARN_NODES {
            log::warn!(
                "exhaustive search over {} nodes may not finish",
                layout.len()
            );
        }
        let mut elapsed = Duration::ZERO;
        let mut path = None;
        for _ in 0..iterations {
            let t0 = Instant::now();
            let found = match alg {
                Algorithm::AStar => alg.find_path(layout, &heuristic, start, goal, &options),
                _ => alg.find_path(layout, &Zero, start, goal, &options),
            }?;
            elapsed += t0.elapsed();
            path = Some(found);
        }
        let Some(path) = path else {
            continue;
        };
        log::info!(
            "{alg}: {} nodes, length {} in {:?} per run ({iterations} runs)",
            path.len(),
            path.total_length(),
            elapsed / iterations
        );
        results.push((alg, path));
    }

    let mut results = results.into_iter();
    let Some((first_alg, first)) = results.next() else {
        return Err("no algorithm produced a path".into());
    };
    for (alg, path) in results {
        let (a, b) = (first.total_length(), path.total_length());
        if (a - b).abs() > 1e-9 * a.abs().max(1.0) {
            log::warn!("{first_alg} and {alg} disagree on path length: {a} vs {b}");
        }
    }
    Ok(first)
}
