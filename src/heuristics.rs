//! Distance estimates used by the informed strategies.
//!
//! Only the Manhattan distance is provided. It never overestimates the number of
//! slides left and drops by at most one per slide (admissible and consistent), which
//! is what A* relies on to return a minimum-move path.

use crate::engine::{Board, BLANK, BOARD_SIZE};

/// Signature shared by heuristic functions handed to the neighbor generator.
pub type HeuristicFn = fn(&Board) -> u32;

/// Returns the goal `(row, col)` of a tile value.
///
/// # Panics
/// Panics in debug builds if `value` is the blank, which has no goal cell in the
/// distance sum.
pub fn goal_position(value: u8) -> (usize, usize) {
    debug_assert!(value != BLANK, "the blank has no goal position in the heuristic");
    let index = (value - 1) as usize;
    (index / BOARD_SIZE, index % BOARD_SIZE)
}

/// Number of slides the tile at `(r, c)` would need on an otherwise empty board.
/// The blank contributes nothing.
pub fn tile_distance(board: &Board, r: usize, c: usize) -> u32 {
    let value = board.get(r, c);
    if value == BLANK {
        return 0;
    }
    let (goal_r, goal_c) = goal_position(value);
    (r.abs_diff(goal_r) + c.abs_diff(goal_c)) as u32
}

/// Sums [`tile_distance`] over every tile on the board.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, GOAL};
/// use eight_puzzle_solver::heuristics::manhattan_distance;
///
/// assert_eq!(manhattan_distance(&GOAL), 0);
/// let board = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
/// assert_eq!(manhattan_distance(&board), 1);
/// ```
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            distance += tile_distance(board, r, c);
        }
    }
    distance
}
