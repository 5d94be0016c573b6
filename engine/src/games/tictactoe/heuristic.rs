use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::{LINES, Line};

fn find_hole(board: &Board, line: &Line, mark: Mark) -> Option<Position> {
    let owned = line.iter().filter(|&&position| board.get(position) == Some(mark)).count();
    if owned != 2 {
        return None;
    }
    line.iter().copied().find(|&position| board.get(position).is_none())
}

/// The empty cell that would complete a line for `mark`, scanning rows, then
/// columns, then diagonals and returning the first hit.
pub fn find_completing_move(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| find_hole(board, line, mark))
}
