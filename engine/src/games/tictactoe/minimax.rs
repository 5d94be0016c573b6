use super::board::Board;
use super::types::{Mark, Position};
use super::win_detector::check_win;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub position: Option<Position>,
    pub score: i32,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self {
            position: None,
            score,
        }
    }
}

/// Exhaustive minimax over the rest of the game.
///
/// Scores are always from `maximizing`'s point of view: +10 is its win, -10
/// its loss, 0 a draw. When `to_move == maximizing` the first move with the
/// highest score is chosen, otherwise the first with the lowest, in
/// [`Board::legal_moves`] order. Every speculative mark is cleared before the
/// next candidate, so `board` is unchanged when this returns.
pub fn best_move(board: &mut Board, to_move: Mark, maximizing: Mark) -> SearchResult {
    if check_win(board, maximizing) {
        return SearchResult::terminal(WIN_SCORE);
    }
    if check_win(board, maximizing.opponent()) {
        return SearchResult::terminal(LOSS_SCORE);
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return SearchResult::terminal(DRAW_SCORE);
    }

    let is_maximizing = to_move == maximizing;
    let mut best = SearchResult::terminal(if is_maximizing { i32::MIN } else { i32::MAX });

    for position in moves {
        board.set(position, to_move);
        let score = best_move(board, to_move.opponent(), maximizing).score;
        board.clear(position);

        let improves = if is_maximizing {
            score > best.score
        } else {
            score < best.score
        };
        if improves {
            best = SearchResult {
                position: Some(position),
                score,
            };
        }
    }

    best
}

/// Hard-level move for `mark`, searched on a private copy of `board`.
pub fn calculate_minimax_move(board: &Board, mark: Mark) -> Option<Position> {
    let mut scratch = *board;
    best_move(&mut scratch, mark, mark).position
}
