use crate::engine::{Board, BOARD_SIZE, CELL_COUNT};
use crate::error::BoardError;

/// Named starting boards: easy (one move), medium and hard (31 moves, the longest
/// any solvable board needs).
pub const PRESETS: [(&str, [[u8; BOARD_SIZE]; BOARD_SIZE]); 3] = [
    ("easy", [[1, 2, 3], [4, 5, 6], [7, 0, 8]]),
    ("medium", [[0, 2, 3], [5, 6, 8], [7, 4, 1]]),
    ("hard", [[8, 6, 7], [2, 5, 4], [3, 0, 1]]),
];

/// Looks up a preset board by name, ignoring case.
pub fn preset(name: &str) -> Option<Board> {
    PRESETS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name.trim()))
        .and_then(|(_, rows)| Board::from_rows(*rows).ok())
}

/// Parses a board from text.
///
/// Accepted forms:
/// - nine values separated by whitespace, commas, `/` or newlines: `"1 2 3 / 4 5 6 / 7 8 0"`
/// - a compact nine-character string: `"123456780"`
///
/// `_` and `.` may stand for the blank.
///
/// # Returns
/// * `Ok(Board)` if the nine cells form a permutation of 0-8.
/// * `Err(BoardError)` for a wrong cell count, an unparsable cell, a value outside
///   0-8 or a repeated value.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::GOAL;
/// use eight_puzzle_solver::utils::parse_board;
///
/// assert_eq!(parse_board("123456780").unwrap(), GOAL);
/// assert_eq!(parse_board("1,2,3\n4,5,6\n7,8,_").unwrap(), GOAL);
/// assert!(parse_board("1 2 3 4 5 6 7 8").is_err());
/// ```
pub fn parse_board(s: &str) -> Result<Board, BoardError> {
    let tokens = split_cells(s, CELL_COUNT);
    if tokens.len() != CELL_COUNT {
        return Err(BoardError::WrongCellCount {
            expected: CELL_COUNT,
            found: tokens.len(),
        });
    }

    let mut rows = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for (i, token) in tokens.iter().enumerate() {
        rows[i / BOARD_SIZE][i % BOARD_SIZE] = parse_cell(token, i)?;
    }
    Board::from_rows(rows)
}

/// Parses a board given as one string per row, e.g. `["1 2 3", "4 5 6", "7 8 0"]`
/// or `["123", "456", "780"]`.
pub fn board_from_str_array(s: &[&str]) -> Result<Board, BoardError> {
    if s.len() != BOARD_SIZE {
        return Err(BoardError::WrongCellCount {
            expected: CELL_COUNT,
            found: s.iter().map(|row| split_cells(row, BOARD_SIZE).len()).sum(),
        });
    }
    let mut rows = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for (r, row_str) in s.iter().enumerate() {
        let tokens = split_cells(row_str, BOARD_SIZE);
        if tokens.len() != BOARD_SIZE {
            return Err(BoardError::WrongCellCount {
                expected: CELL_COUNT,
                found: s.iter().map(|row| split_cells(row, BOARD_SIZE).len()).sum(),
            });
        }
        for (c, token) in tokens.iter().enumerate() {
            rows[r][c] = parse_cell(token, r * BOARD_SIZE + c)?;
        }
    }
    Board::from_rows(rows)
}

/// Splits on separators; a lone token of exactly `width` characters is read one
/// character per cell.
fn split_cells(s: &str, width: usize) -> Vec<String> {
    let tokens: Vec<String> = s
        .split(|ch: char| ch.is_whitespace() || ch == ',' || ch == '/')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if tokens.len() == 1 && tokens[0].chars().count() == width {
        tokens[0].chars().map(String::from).collect()
    } else {
        tokens
    }
}

fn parse_cell(token: &str, position: usize) -> Result<u8, BoardError> {
    if token == "_" || token == "." {
        return Ok(0);
    }
    let value: u32 = token.parse().map_err(|_| BoardError::InvalidToken {
        token: token.to_string(),
        position,
    })?;
    if value as usize >= CELL_COUNT {
        return Err(BoardError::ValueOutOfRange {
            value,
            row: position / BOARD_SIZE,
            col: position % BOARD_SIZE,
        });
    }
    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GOAL;

    #[test]
    fn test_parse_board_forms() {
        assert_eq!(parse_board("123456780").unwrap(), GOAL);
        assert_eq!(parse_board("1 2 3 4 5 6 7 8 0").unwrap(), GOAL);
        assert_eq!(parse_board("1,2,3/4,5,6/7,8,0").unwrap(), GOAL);
        assert_eq!(parse_board("  1 2 3\n4 5 6\n7 8 .\n").unwrap(), GOAL);
    }

    #[test]
    fn test_parse_board_wrong_count() {
        let err = parse_board("1 2 3 4 5 6 7 8").unwrap_err();
        assert_eq!(
            err,
            BoardError::WrongCellCount {
                expected: 9,
                found: 8
            }
        );
        assert!(parse_board("").is_err());
        assert!(parse_board("1234567800").is_err());
    }

    #[test]
    fn test_parse_board_invalid_token() {
        let err = parse_board("1 2 3 4 x 6 7 8 0").unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidToken {
                token: "x".to_string(),
                position: 4
            }
        );
        assert!(err.to_string().contains("unrecognized cell 'x'"));
    }

    #[test]
    fn test_parse_board_out_of_range_and_duplicate() {
        let err = parse_board("1 2 3 4 5 6 7 8 9").unwrap_err();
        assert!(matches!(err, BoardError::ValueOutOfRange { value: 9, row: 2, col: 2 }));
        let err = parse_board("112345678").unwrap_err();
        assert!(matches!(err, BoardError::DuplicateValue { value: 1, .. }));
    }

    #[test]
    fn test_board_from_str_array() {
        let board = board_from_str_array(&["1 2 3", "4 5 6", "7 8 0"]).unwrap();
        assert_eq!(board, GOAL);
        let board = board_from_str_array(&["123", "456", "780"]).unwrap();
        assert_eq!(board, GOAL);
        let err = board_from_str_array(&["1 2 3", "4 5 6"]).unwrap_err();
        assert!(err.to_string().contains("expected 9 cells, found 6"));
        assert!(board_from_str_array(&["1 2 3 4", "5 6", "7 8 0"]).is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(
            preset("easy").unwrap(),
            Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap()
        );
        assert!(preset("Medium").is_some());
        assert!(preset("hard").unwrap().is_solvable());
        assert!(preset("impossible").is_none());
        for (_, rows) in PRESETS {
            assert!(Board::from_rows(rows).unwrap().is_solvable());
        }
    }
}
