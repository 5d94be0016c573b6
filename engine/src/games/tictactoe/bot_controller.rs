use crate::games::SessionRng;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::heuristic::find_completing_move;
use super::minimax::calculate_minimax_move;
use super::types::{Difficulty, Mark, Position};

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

/// Picks a move for `input.current_mark`. `None` only when the board has no
/// empty cell left.
pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(&input, rng),
        Difficulty::Medium => calculate_medium_move(&input, rng),
        Difficulty::Hard => calculate_minimax_move(&input.board, input.current_mark),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = input.board.legal_moves();
    rng.choose(&available_moves).copied()
}

fn calculate_medium_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let bot_mark = input.current_mark;

    if let Some(position) = find_completing_move(&input.board, bot_mark) {
        return Some(position);
    }

    if let Some(position) = find_completing_move(&input.board, bot_mark.opponent()) {
        return Some(position);
    }

    calculate_random_move(input, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(notation: &str, current_mark: Mark) -> BotInput {
        BotInput {
            board: notation.parse().unwrap(),
            current_mark,
        }
    }

    #[test]
    fn test_easy_with_single_legal_move_takes_it() {
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let position = calculate_move(Difficulty::Easy, input("XOXXOOOX_", Mark::X), &mut rng);
            assert_eq!(position, Some(Position::new(2, 2)));
        }
    }

    #[test]
    fn test_easy_only_picks_empty_cells() {
        let board: Board = "XO__X_O__".parse().unwrap();
        let mut rng = SessionRng::new(3);
        for _ in 0..50 {
            let position = calculate_move(
                Difficulty::Easy,
                BotInput {
                    board,
                    current_mark: Mark::X,
                },
                &mut rng,
            )
            .unwrap();
            assert!(board.is_valid_move(position));
        }
    }

    #[test]
    fn test_easy_eventually_uses_every_cell() {
        let mut rng = SessionRng::new(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            if let Some(position) = calculate_move(Difficulty::Easy, input("_________", Mark::X), &mut rng) {
                seen.insert(position);
            }
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_medium_prefers_winning_over_blocking() {
        // X can win on row 1; O threatens row 2.
        let mut rng = SessionRng::new(0);
        let position = calculate_move(Difficulty::Medium, input("XX_OO____", Mark::X), &mut rng);
        assert_eq!(position, Some(Position::new(0, 2)));
    }

    #[test]
    fn test_medium_blocks_opponent() {
        let mut rng = SessionRng::new(0);
        let position = calculate_move(Difficulty::Medium, input("X__OO___X", Mark::X), &mut rng);
        assert_eq!(position, Some(Position::new(1, 2)));
    }

    #[test]
    fn test_medium_falls_back_to_random_legal_move() {
        let board: Board = "X___O____".parse().unwrap();
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let position = calculate_move(
                Difficulty::Medium,
                BotInput {
                    board,
                    current_mark: Mark::X,
                },
                &mut rng,
            )
            .unwrap();
            assert!(board.is_valid_move(position));
        }
    }

    #[test]
    fn test_hard_dispatches_to_search() {
        let mut rng = SessionRng::new(0);
        let position = calculate_move(Difficulty::Hard, input("XOXOXO___", Mark::X), &mut rng);
        assert_eq!(position, Some(Position::new(2, 0)));
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let mut rng = SessionRng::new(0);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(calculate_move(difficulty, input("XOXXOOOXX", Mark::X), &mut rng), None);
        }
    }
}
