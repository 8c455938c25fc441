use anyhow::{bail, Result};
use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::report::compare_all;
use eight_puzzle_solver::solver::{Algorithm, SolverConfig, DEFAULT_MAX_DEPTH};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare the search strategies over random boards", long_about = None)]
struct Args {
    /// Number of random boards to evaluate
    #[arg(short = 'n', long, default_value_t = 20)]
    boards: usize,

    /// Seed of the first board; later boards use consecutive seeds
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Random moves applied to the goal for each board
    #[arg(long, default_value_t = 20)]
    scramble: usize,

    /// Depth bound for DFS and IDDFS
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase log verbosity (-v for debug, -vv for trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Running totals for one strategy.
#[derive(Debug, Default)]
struct Tally {
    solved: usize,
    moves: usize,
    nodes_explored: usize,
    visited_nodes: usize,
    disagreements: usize,
}

impl Tally {
    fn average(total: usize, count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,eight_puzzle_solver=debug,strategy_evaluator=debug",
        _ => "warn,eight_puzzle_solver=trace,strategy_evaluator=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    if args.boards == 0 {
        bail!("--boards must be at least 1");
    }

    let config = SolverConfig {
        max_depth: args.max_depth,
    };
    let mut tallies: FxHashMap<Algorithm, Tally> = FxHashMap::default();

    println!(
        "Evaluating {} strategies on {} boards ({} scramble moves each)...",
        Algorithm::ALL.len(),
        args.boards,
        args.scramble
    );

    for board_idx in 0..args.boards {
        let seed = args.seed + board_idx as u64;
        let board = Board::random_solvable(seed, args.scramble);
        debug!(seed, fingerprint = %board.fingerprint(), "evaluating board");

        let reports = compare_all(&board, &config);
        let reference = reports
            .iter()
            .find(|r| r.algorithm == Algorithm::Bfs)
            .and_then(|r| r.moves);

        println!("\nBoard {} (Seed: {})", board_idx, seed);
        for report in &reports {
            let tally = tallies.entry(report.algorithm).or_default();
            tally.nodes_explored += report.nodes_explored;
            tally.visited_nodes += report.visited_nodes;
            if let Some(moves) = report.moves {
                tally.solved += 1;
                tally.moves += moves;
            }
            if report.algorithm.is_optimal() && report.moves != reference {
                tally.disagreements += 1;
                warn!(
                    algorithm = report.algorithm.key(),
                    seed,
                    moves = ?report.moves,
                    bfs_moves = ?reference,
                    "optimal strategy disagrees with BFS"
                );
            }
            println!(
                "  {:<18} Moves: {:<6} Explored: {}",
                report.name,
                report.moves.map_or_else(|| "-".to_string(), |m| m.to_string()),
                report.nodes_explored
            );
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!(
        "{:<18} {:>7} {:>10} {:>12} {:>12}",
        "Strategy", "Solved", "Avg Moves", "Avg Explored", "Avg Visited"
    );
    for algorithm in Algorithm::ALL {
        let Some(tally) = tallies.get(&algorithm) else {
            continue;
        };
        let flag = if tally.disagreements > 0 {
            format!("  ({} length mismatches vs BFS)", tally.disagreements)
        } else {
            String::new()
        };
        println!(
            "{:<18} {:>7} {:>10.2} {:>12.1} {:>12.1}{}",
            algorithm.display_name(),
            format!("{}/{}", tally.solved, args.boards),
            Tally::average(tally.moves, tally.solved),
            Tally::average(tally.nodes_explored, args.boards),
            Tally::average(tally.visited_nodes, args.boards),
            flag
        );
    }
    Ok(())
}
