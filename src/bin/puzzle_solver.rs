use anyhow::{bail, Context, Result};
use clap::Parser;
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::report::{compare_all, SolveReport};
use eight_puzzle_solver::solver::{Algorithm, SolverConfig, DEFAULT_MAX_DEPTH};
use eight_puzzle_solver::utils::{parse_board, preset, PRESETS};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve a 3x3 sliding-tile puzzle", long_about = None)]
struct Args {
    /// Board cells, row-major with 0 or _ for the blank, e.g. "1 2 3 4 5 6 7 0 8" or "123456708"
    #[arg(short, long, conflicts_with_all = ["preset", "random", "file"])]
    board: Option<String>,

    /// Read the board from a file (three lines of three cells, or nine cells on one line)
    #[arg(short, long, conflicts_with_all = ["preset", "random"])]
    file: Option<PathBuf>,

    /// Named starting board: easy, medium or hard
    #[arg(short, long, conflicts_with = "random")]
    preset: Option<String>,

    /// Generate a solvable board from this seed
    #[arg(short, long)]
    random: Option<u64>,

    /// Random moves applied to the goal when generating a board with --random
    #[arg(long, default_value_t = 20)]
    scramble: usize,

    /// Strategy to run: astar, bfs, dfs, iddfs, bidirectional, greedy, or all
    #[arg(short, long, default_value = "astar")]
    algorithm: String,

    /// Depth bound for DFS and IDDFS
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print reports as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v for debug, -vv for trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,eight_puzzle_solver=debug,puzzle_solver=debug",
        _ => "warn,eight_puzzle_solver=trace,puzzle_solver=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_board(args: &Args) -> Result<Board> {
    if let Some(text) = &args.board {
        return parse_board(text).with_context(|| format!("invalid board '{}'", text));
    }
    if let Some(path) = &args.file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return parse_board(&content)
            .with_context(|| format!("invalid board in {}", path.display()));
    }
    if let Some(name) = &args.preset {
        let Some(board) = preset(name) else {
            let names: Vec<&str> = PRESETS.iter().map(|(key, _)| *key).collect();
            bail!("unknown preset '{}' (expected one of: {})", name, names.join(", "));
        };
        return Ok(board);
    }
    if let Some(seed) = args.random {
        return Ok(Board::random_solvable(seed, args.scramble));
    }
    bail!("no board given; use --board, --file, --preset or --random")
}

fn select_algorithms(name: &str) -> Result<Vec<Algorithm>> {
    if name.trim().eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    let algorithm: Algorithm = name.parse()?;
    Ok(vec![algorithm])
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let board = load_board(&args)?;
    let algorithms = select_algorithms(&args.algorithm)?;
    let config = SolverConfig {
        max_depth: args.max_depth,
    };

    if !board.is_solvable() {
        warn!(
            inversions = board.inversions(),
            "board has odd inversion parity and cannot reach the goal"
        );
    }
    info!(fingerprint = %board.fingerprint(), "loaded board");

    let reports: Vec<SolveReport> = if algorithms.len() == Algorithm::ALL.len() {
        compare_all(&board, &config)
    } else {
        algorithms
            .into_iter()
            .map(|algorithm| {
                let mut solver = algorithm.solver(&config);
                SolveReport::run(solver.as_mut(), &board)
            })
            .collect()
    };

    if args.json {
        let json = serde_json::to_string_pretty(&reports).context("failed to encode reports")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Initial board:\n{}", board);
    for report in &reports {
        println!("{}", report);
    }
    if reports.len() > 1 {
        println!("{}", SolveReport::summary_header());
        for report in &reports {
            println!("{}", report.summary_row());
        }
    }
    Ok(())
}
