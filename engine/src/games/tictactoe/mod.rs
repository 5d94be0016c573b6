mod board;
mod bot_controller;
mod game_state;
mod heuristic;
mod minimax;
mod types;
mod win_detector;

pub use board::{Board, Cells};
pub use bot_controller::{BotInput, calculate_move};
pub use game_state::TicTacToeGameState;
pub use heuristic::find_completing_move;
pub use minimax::{DRAW_SCORE, LOSS_SCORE, SearchResult, WIN_SCORE, best_move, calculate_minimax_move};
pub use types::{BOARD_SIZE, Difficulty, GameStatus, Mark, Player, PlayerKind, Position, WinningLine};
pub use win_detector::{LINES, Line, check_win, check_win_with_line, classify};
