//! Cross-strategy properties of the solvers.
//!
//! Every strategy is run on the same boards and checked for:
//! - structurally valid paths (root first, goal last, each step one legal slide)
//! - equal path lengths among the move-optimal strategies
//! - exhaustion with `None` on boards of the wrong parity

use eight_puzzle_solver::engine::{Board, Move, GOAL};
use eight_puzzle_solver::heuristics::manhattan_distance;
use eight_puzzle_solver::report::compare_all;
use eight_puzzle_solver::solver::{AStarSolver, Algorithm, BfsSolver, Solver, SolverConfig};
use eight_puzzle_solver::state::State;
use eight_puzzle_solver::utils::preset;

// =============================================================================
// Helper functions
// =============================================================================

fn one_move_board() -> Board {
    Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap()
}

fn unsolvable_board() -> Board {
    Board::from_rows([[2, 1, 3], [4, 5, 6], [7, 8, 0]]).unwrap()
}

/// Checks the output contract every strategy shares.
fn assert_valid_path(algorithm: Algorithm, initial: &Board, path: &[State]) {
    assert!(!path.is_empty(), "{}: empty path", algorithm);
    assert_eq!(path[0].board, *initial, "{}: wrong root", algorithm);
    assert_eq!(path[0].mv, None, "{}: root carries a move", algorithm);
    assert_eq!(path[0].parent, None, "{}: root has a parent", algorithm);
    assert_eq!(path.last().unwrap().board, GOAL, "{}: does not end at goal", algorithm);

    let uses_heuristic = matches!(algorithm, Algorithm::AStar | Algorithm::Greedy);
    for (i, step) in path.iter().enumerate() {
        assert_eq!(step.g as usize, i, "{}: g differs from step index", algorithm);
        let expected_h = if uses_heuristic {
            manhattan_distance(&step.board)
        } else {
            0
        };
        assert_eq!(step.h, expected_h, "{}: unexpected h at step {}", algorithm, i);
        if i > 0 {
            let mv = step.mv.expect("non-root step has a move");
            assert_eq!(
                path[i - 1].board.slide(mv),
                Some(step.board),
                "{}: step {} is not a single slide",
                algorithm,
                i
            );
            assert_eq!(step.parent.map(|p| p.index()), Some(i - 1));
        }
    }
}

fn solve(algorithm: Algorithm, config: &SolverConfig, board: &Board) -> Option<Vec<State>> {
    algorithm.solver(config).solve(board)
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_one_move_board_for_every_strategy() {
    let board = one_move_board();
    for algorithm in Algorithm::ALL {
        let path = solve(algorithm, &SolverConfig::default(), &board)
            .unwrap_or_else(|| panic!("{} found no path", algorithm));
        assert_eq!(path.len(), 2, "{}", algorithm);
        assert_eq!(path[1].mv, Some(Move::Right), "{}", algorithm);
        assert_valid_path(algorithm, &board, &path);
    }
}

#[test]
fn test_paths_are_structurally_valid() {
    let config = SolverConfig::default();
    let boards = [
        preset("easy").unwrap(),
        preset("medium").unwrap(),
        Board::random_solvable(7, 10),
        Board::random_solvable(11, 16),
    ];
    for board in &boards {
        for algorithm in Algorithm::ALL {
            if let Some(path) = solve(algorithm, &config, board) {
                assert_valid_path(algorithm, board, &path);
            } else {
                assert_eq!(algorithm, Algorithm::Dfs, "only DFS may miss within its bound");
            }
        }
    }
}

#[test]
fn test_optimal_strategies_agree_on_length() {
    let config = SolverConfig::default();
    for seed in 0..8 {
        let board = Board::random_solvable(1_000 + seed, 14);
        let lengths: Vec<(Algorithm, usize)> = Algorithm::ALL
            .into_iter()
            .filter(|algorithm| algorithm.is_optimal())
            .map(|algorithm| {
                let path = solve(algorithm, &config, &board).unwrap();
                (algorithm, path.len())
            })
            .collect();
        let (_, reference) = lengths[0];
        for (algorithm, length) in &lengths {
            assert_eq!(*length, reference, "{} disagrees on seed {}", algorithm, seed);
        }
    }
}

#[test]
fn test_suboptimal_strategies_are_never_shorter() {
    let config = SolverConfig::default();
    for seed in 0..5 {
        let board = Board::random_solvable(2_000 + seed, 18);
        let optimal = solve(Algorithm::Bfs, &config, &board).unwrap().len();
        for algorithm in [Algorithm::Dfs, Algorithm::Greedy] {
            if let Some(path) = solve(algorithm, &config, &board) {
                assert!(path.len() >= optimal, "{} beat BFS on seed {}", algorithm, seed);
            }
        }
    }
}

#[test]
fn test_unsolvable_board_exhausts_every_strategy() {
    let board = unsolvable_board();
    assert!(!board.is_solvable());
    let config = SolverConfig { max_depth: 12 };
    for algorithm in Algorithm::ALL {
        let mut solver = algorithm.solver(&config);
        assert!(solver.solve(&board).is_none(), "{} returned a path", algorithm);
        assert!(solver.nodes_explored() > 0, "{}", algorithm);
    }
}

// IDDFS needs tens of millions of node entries here; run with `--ignored --release`.
#[test]
#[ignore]
fn test_unsolvable_board_exhausts_depth_bounded_strategies_at_default_bound() {
    let board = unsolvable_board();
    let config = SolverConfig::default();
    for algorithm in [Algorithm::Dfs, Algorithm::Iddfs] {
        let mut solver = algorithm.solver(&config);
        assert!(solver.solve(&board).is_none(), "{} returned a path", algorithm);
        assert_eq!(solver.max_depth(), Some(50), "{}", algorithm);
        assert!(solver.nodes_explored() > 0, "{}", algorithm);
    }
}

#[test]
fn test_astar_expands_no_more_than_bfs() {
    for seed in 0..6 {
        let board = Board::random_solvable(3_000 + seed, 20);
        let mut astar = AStarSolver::new();
        let mut bfs = BfsSolver::new();
        let a = astar.solve(&board).unwrap();
        let b = bfs.solve(&board).unwrap();
        assert_eq!(a.len(), b.len());
        assert!(
            astar.nodes_explored() <= bfs.nodes_explored(),
            "seed {}: a* {} > bfs {}",
            seed,
            astar.nodes_explored(),
            bfs.nodes_explored()
        );
    }
}

#[test]
fn test_solvers_run_on_separate_threads() {
    let board = preset("medium").unwrap();
    let lengths: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = [Algorithm::AStar, Algorithm::Bfs, Algorithm::Bidirectional]
            .into_iter()
            .map(|algorithm| {
                scope.spawn(move || {
                    let mut solver = algorithm.solver(&SolverConfig::default());
                    solver.solve(&board).map(|path| path.len())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });
    assert!(lengths.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_compare_all_serializes_to_json() {
    let reports = compare_all(&preset("easy").unwrap(), &SolverConfig::default());
    let json = serde_json::to_value(&reports).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), Algorithm::ALL.len());
    for (entry, algorithm) in entries.iter().zip(Algorithm::ALL) {
        assert_eq!(entry["algorithm"], algorithm.key());
        assert_eq!(entry["name"], algorithm.display_name());
        assert_eq!(entry["color"], algorithm.color());
        assert_eq!(entry["solved"], true);
        assert_eq!(entry["moves"], 1);
        assert_eq!(entry["path"].as_array().unwrap().len(), 2);
    }
    assert_eq!(entries[2]["max_depth"], 50);
    assert!(entries[0]["max_depth"].is_null());
}
