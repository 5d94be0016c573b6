use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};

pub type Line = [Position; 3];

const fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// The eight lines: rows top to bottom, columns left to right, the main
/// diagonal, then the anti-diagonal. The heuristic finder's tie-break depends
/// on this order.
pub const LINES: [Line; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

fn is_line_of(board: &Board, line: &Line, mark: Mark) -> bool {
    line.iter().all(|&position| board.get(position) == Some(mark))
}

pub fn check_win(board: &Board, mark: Mark) -> bool {
    LINES.iter().any(|line| is_line_of(board, line, mark))
}

/// First completed line in [`LINES`] order, whichever mark owns it.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        let mark = board.get(line[0])?;
        is_line_of(board, line, mark).then(|| WinningLine::new(mark, line[0], line[2]))
    })
}

/// Winner before draw, and X before O. A malformed board where both marks
/// own a line is reported as an X win.
pub fn classify(board: &Board) -> GameStatus {
    if check_win(board, Mark::X) {
        GameStatus::Won(Mark::X)
    } else if check_win(board, Mark::O) {
        GameStatus::Won(Mark::O)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::Cells;

    fn board_from_index(mut index: u32) -> Board {
        let mut cells: Cells = Default::default();
        for i in 0..9 {
            cells[i / 3][i % 3] = match index % 3 {
                0 => None,
                1 => Some(Mark::X),
                _ => Some(Mark::O),
            };
            index /= 3;
        }
        Board::from_cells(cells)
    }

    fn owns_any_line(cells: &Cells, mark: Mark) -> bool {
        let m = Some(mark);
        (0..3).any(|i| (0..3).all(|j| cells[i][j] == m))
            || (0..3).any(|j| (0..3).all(|i| cells[i][j] == m))
            || (0..3).all(|i| cells[i][i] == m)
            || (0..3).all(|i| cells[i][2 - i] == m)
    }

    #[test]
    fn test_check_win_matches_line_ownership_on_every_board() {
        for index in 0..3u32.pow(9) {
            let board = board_from_index(index);
            let cells = board.cells();
            for mark in [Mark::X, Mark::O] {
                assert_eq!(
                    check_win(&board, mark),
                    owns_any_line(&cells, mark),
                    "board {}",
                    board.to_notation()
                );
            }
        }
    }

    #[test]
    fn test_draw_implies_full_and_no_winner_on_every_board() {
        for index in 0..3u32.pow(9) {
            let board = board_from_index(index);
            if board.is_draw() {
                assert!(board.is_full());
                assert!(!check_win(&board, Mark::X));
                assert!(!check_win(&board, Mark::O));
            }
        }
    }

    #[test]
    fn test_each_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for position in line {
                board.place(position, Mark::O).unwrap();
            }
            assert!(check_win(&board, Mark::O));
            assert!(!check_win(&board, Mark::X));
            assert_eq!(classify(&board), GameStatus::Won(Mark::O));
        }
    }

    #[test]
    fn test_winning_line_reports_endpoints() {
        let board: Board = "O_X_X_XO_".parse().unwrap();
        assert_eq!(
            check_win_with_line(&board),
            Some(WinningLine::new(Mark::X, Position::new(0, 2), Position::new(2, 0)))
        );
        assert_eq!(check_win_with_line(&Board::new()), None);
    }

    #[test]
    fn test_classify_in_progress_and_malformed_board() {
        assert_eq!(classify(&Board::new()), GameStatus::InProgress);

        let both: Board = "XXXOOO___".parse().unwrap();
        assert!(check_win(&both, Mark::X));
        assert!(check_win(&both, Mark::O));
        assert_eq!(classify(&both), GameStatus::Won(Mark::X));
    }
}
