//! Board model for the 3x3 sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: The four directions the blank can slide, in the fixed order the
//!   search strategies consume them.
//! - `Board`: A 3x3 permutation of the values 0-8 (0 is the blank), with methods
//!   for locating the blank, sliding it, enumerating successor boards and
//!   checking solvability.
//! - `Fingerprint`: The injective integer key every visited set is built on.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

use crate::error::BoardError;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, including the blank.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The value that marks the blank cell.
pub const BLANK: u8 = 0;

/// The canonical solved arrangement every strategy searches for.
pub const GOAL: Board = Board {
    grid: [[1, 2, 3], [4, 5, 6], [7, 8, 0]],
};

/// A direction in which the blank slides.
///
/// The variant order is the emission order of successor generation:
/// Up, Down, Left, Right. DFS recursion order and BFS queue order follow it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All four moves in emission order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column offset applied to the blank's position.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Move;
    /// assert_eq!(Move::Up.opposite(), Move::Down);
    /// assert_eq!(Move::Left.opposite(), Move::Right);
    /// ```
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// The label used in solution listings and reports.
    pub fn label(self) -> &'static str {
        match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Deduplication key for a board.
///
/// The nine cell values are folded in row-major order as the digits of a
/// base-10 number, so `[[1,2,3],[4,5,6],[7,8,0]]` becomes `123456780`. This is
/// an injective encoding, not a hash: it is collision-free only because every
/// cell holds a single decimal digit. The largest possible value, `876543210`,
/// fits in a `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(pub u32);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

/// A 3x3 arrangement of the tiles 1-8 and the blank.
///
/// A `Board` is always a permutation of `0..=8`. The only public constructor that
/// accepts arbitrary cells, [`Board::from_rows`], validates this; every other way of
/// obtaining a board (`GOAL`, sliding, random scrambles) preserves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board from three rows of cell values.
    ///
    /// # Arguments
    /// * `rows`: The cells in row-major order. `0` is the blank.
    ///
    /// # Returns
    /// * `Ok(Board)` if the cells are a permutation of `0..=8`.
    /// * `Err(BoardError)` naming the first out-of-range or repeated value.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, GOAL};
    /// let board = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
    /// assert_eq!(board, GOAL);
    /// assert!(Board::from_rows([[1, 1, 3], [4, 5, 6], [7, 8, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, BoardError> {
        let mut seen = [false; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let index = value as usize;
                if index >= CELL_COUNT {
                    return Err(BoardError::ValueOutOfRange {
                        value: value as u32,
                        row: r,
                        col: c,
                    });
                }
                if seen[index] {
                    return Err(BoardError::DuplicateValue { value, row: r, col: c });
                }
                seen[index] = true;
            }
        }
        Ok(Board { grid: rows })
    }

    /// Returns the cell value at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside `0..BOARD_SIZE`.
    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns the underlying grid.
    pub fn rows(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Returns the cells in row-major order.
    pub fn cells(&self) -> [u8; CELL_COUNT] {
        let mut cells = [0; CELL_COUNT];
        for (i, cell) in self.grid.iter().flatten().enumerate() {
            cells[i] = *cell;
        }
        cells
    }

    /// Computes the board's [`Fingerprint`].
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Fingerprint, GOAL};
    /// assert_eq!(GOAL.fingerprint(), Fingerprint(123_456_780));
    /// ```
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(
            self.grid
                .iter()
                .flatten()
                .fold(0u32, |acc, &cell| acc * 10 + cell as u32),
        )
    }

    /// Whether this board is the canonical goal arrangement.
    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Locates the blank cell.
    ///
    /// # Returns
    /// The `(row, col)` of the cell holding `0`. A valid board always has exactly one.
    pub fn blank_position(&self) -> (usize, usize) {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.grid[r][c] == BLANK {
                    return (r, c);
                }
            }
        }
        unreachable!("board invariant violated: no blank cell in {:?}", self.grid)
    }

    /// Slides the blank in the given direction.
    ///
    /// # Returns
    /// * `Some(Board)` holding the new arrangement if the destination lies on the board.
    /// * `None` if the move would push the blank off an edge.
    pub fn slide(&self, mv: Move) -> Option<Board> {
        let (r, c) = self.blank_position();
        self.slide_from(r, c, mv)
    }

    fn slide_from(&self, r: usize, c: usize, mv: Move) -> Option<Board> {
        let (dr, dc) = mv.delta();
        let nr = r.checked_add_signed(dr).filter(|&v| v < BOARD_SIZE)?;
        let nc = c.checked_add_signed(dc).filter(|&v| v < BOARD_SIZE)?;

        let mut next = *self;
        next.grid[r][c] = next.grid[nr][nc];
        next.grid[nr][nc] = BLANK;
        Some(next)
    }

    /// Enumerates the legal successor boards in emission order (Up, Down, Left, Right).
    ///
    /// Between two and four boards are produced depending on where the blank sits.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> {
        let board = *self;
        let (r, c) = board.blank_position();
        Move::ALL
            .into_iter()
            .filter_map(move |mv| board.slide_from(r, c, mv).map(|next| (mv, next)))
    }

    /// Counts the pairs of tiles that appear in the opposite order to the goal,
    /// reading the board row by row and ignoring the blank.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self
            .grid
            .iter()
            .flatten()
            .copied()
            .filter(|&v| v != BLANK)
            .collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &val)| tiles[i + 1..].iter().filter(|&&next| next < val).count())
            .sum()
    }

    /// Whether the goal is reachable from this board.
    ///
    /// On an odd-width board a slide never changes the parity of the inversion count,
    /// and the goal has zero inversions, so exactly the even-parity half of the
    /// permutations can be solved.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// Creates a solvable board by walking the blank randomly away from the goal.
    ///
    /// The walk never immediately undoes its previous move. The same `seed` and
    /// `scramble_moves` always produce the same board.
    ///
    /// # Arguments
    /// * `seed`: Seed for the random number generator.
    /// * `scramble_moves`: Number of slides applied to the goal.
    pub fn random_solvable(seed: u64, scramble_moves: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = GOAL;
        let mut last: Option<Move> = None;

        for _ in 0..scramble_moves {
            let options: Vec<(Move, Board)> = board
                .successors()
                .filter(|(mv, _)| last.map_or(true, |prev| *mv != prev.opposite()))
                .collect();
            let (mv, next) = options[rng.gen_range(0..options.len())];
            board = next;
            last = Some(mv);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        GOAL
    }
}

impl fmt::Display for Board {
    /// Draws the board as a framed grid, leaving the blank cell empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-------------")?;
        for row in &self.grid {
            write!(f, "|")?;
            for &cell in row {
                if cell == BLANK {
                    write!(f, "   |")?;
                } else {
                    write!(f, " {} |", cell)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "-------------")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [[u8; 3]; 3]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_goal_fingerprint() {
        assert_eq!(GOAL.fingerprint(), Fingerprint(123456780));
        assert_eq!(GOAL.fingerprint().to_string(), "123456780");
    }

    #[test]
    fn test_fingerprint_leading_blank_is_zero_padded() {
        let b = board([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert_eq!(b.fingerprint(), Fingerprint(12345678));
        assert_eq!(b.fingerprint().to_string(), "012345678");
    }

    #[test]
    fn test_from_rows_rejects_out_of_range() {
        let err = Board::from_rows([[1, 2, 3], [4, 9, 6], [7, 8, 0]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::ValueOutOfRange {
                value: 9,
                row: 1,
                col: 1
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_duplicate() {
        let err = Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 8]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::DuplicateValue {
                value: 8,
                row: 2,
                col: 2
            }
        );
    }

    #[test]
    fn test_blank_position() {
        assert_eq!(GOAL.blank_position(), (2, 2));
        assert_eq!(board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).blank_position(), (1, 1));
    }

    #[test]
    fn test_slide_in_bounds_and_out_of_bounds() {
        let up = GOAL.slide(Move::Up).unwrap();
        assert_eq!(up, board([[1, 2, 3], [4, 5, 0], [7, 8, 6]]));
        assert!(GOAL.slide(Move::Down).is_none());
        assert!(GOAL.slide(Move::Right).is_none());
        assert_eq!(up.slide(Move::Down), Some(GOAL));
    }

    #[test]
    fn test_successors_emission_order() {
        let center = board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let moves: Vec<Move> = center.successors().map(|(mv, _)| mv).collect();
        assert_eq!(moves, Move::ALL.to_vec());

        let corner = board([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let moves: Vec<Move> = corner.successors().map(|(mv, _)| mv).collect();
        assert_eq!(moves, vec![Move::Down, Move::Right]);

        let edge = board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
        let moves: Vec<Move> = edge.successors().map(|(mv, _)| mv).collect();
        assert_eq!(moves, vec![Move::Up, Move::Left, Move::Right]);
    }

    #[test]
    fn test_successors_swap_only_blank_and_neighbor() {
        let start = board([[2, 8, 3], [1, 6, 4], [7, 0, 5]]);
        for (_, next) in start.successors() {
            let differing = start
                .cells()
                .iter()
                .zip(next.cells().iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 2);
        }
    }

    #[test]
    fn test_solvability_parity() {
        assert!(GOAL.is_solvable());
        assert_eq!(GOAL.inversions(), 0);
        let swapped = board([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        assert_eq!(swapped.inversions(), 1);
        assert!(!swapped.is_solvable());
        assert!(board([[8, 6, 7], [2, 5, 4], [3, 0, 1]]).is_solvable());
    }

    #[test]
    fn test_random_solvable_is_deterministic_and_solvable() {
        let a = Board::random_solvable(7, 40);
        let b = Board::random_solvable(7, 40);
        assert_eq!(a, b);
        for seed in 0..20 {
            assert!(Board::random_solvable(seed, 25).is_solvable());
        }
        assert_eq!(Board::random_solvable(3, 0), GOAL);
    }

    #[test]
    fn test_display_board_formatting() {
        let expected = "\
-------------
| 1 | 2 | 3 |
-------------
| 4 | 5 | 6 |
-------------
| 7 | 8 |   |
-------------
";
        assert_eq!(GOAL.to_string(), expected);
    }
}
