use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows, then columns, then diagonals. Scan order decides which line is reported.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for cells in LINES {
        let [a, b, c] = cells;
        let Some(mark) = board.get(a) else {
            continue;
        };
        if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
            return Some(WinningLine::new(mark, cells));
        }
    }
    None
}
