use crate::error::{GameError, RequestError};
use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::types::{Difficulty, GameStatus, Mark, Player, PlayerKind, Position};

/// One game: the board, both players and whose turn it is.
///
/// Moves are applied for the current player and never advance the turn on
/// their own; the turn loop calls [`TicTacToeGameState::advance_turn`] once
/// the move is in and the game is not over.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    player_x: Player,
    player_o: Player,
    current_mark: Mark,
}

impl TicTacToeGameState {
    /// The first player always plays X and moves first.
    pub fn new(first: PlayerKind, second: PlayerKind) -> Self {
        Self {
            board: Board::new(),
            player_x: Player::new(first, Mark::X),
            player_o: Player::new(second, Mark::O),
            current_mark: Mark::X,
        }
    }

    /// Resumes from a position; X is to move when both marks have been
    /// played equally often, O when X is one ahead.
    pub fn from_board(
        board: Board,
        first: PlayerKind,
        second: PlayerKind,
    ) -> Result<Self, GameError> {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        let current_mark = if x == o {
            Mark::X
        } else if x == o + 1 {
            Mark::O
        } else {
            return Err(RequestError::InvalidMarkCounts { x, o }.into());
        };

        Ok(Self {
            board,
            current_mark,
            ..Self::new(first, second)
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn current_player(&self) -> Player {
        self.player(self.current_mark)
    }

    pub fn player(&self, mark: Mark) -> Player {
        match mark {
            Mark::X => self.player_x,
            Mark::O => self.player_o,
        }
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves()
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn advance_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    /// Places the current player's mark at a 0-indexed position.
    pub fn apply_move(&mut self, position: Position) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.board.place(position, self.current_mark)
    }

    /// Places the current player's mark at 1-indexed console coordinates.
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<Position, GameError> {
        let position = Position::from_coordinates(row, col)?;
        self.apply_move(position)?;
        Ok(position)
    }

    /// The move `difficulty` would play for the current mark. Does not touch
    /// the board.
    pub fn compute_ai_move(
        &self,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> Result<Position, GameError> {
        self.ensure_in_progress()?;
        calculate_move(difficulty, BotInput::from_game_state(self), rng)
            .ok_or_else(|| RequestError::GameOver.into())
    }

    /// Lets the current computer player choose and apply its move.
    pub fn play_computer_turn(&mut self, rng: &mut SessionRng) -> Result<Position, GameError> {
        self.ensure_in_progress()?;
        let difficulty = self
            .current_player()
            .kind
            .difficulty()
            .ok_or(RequestError::HumanToMove)?;
        let position = self.compute_ai_move(difficulty, rng)?;
        self.apply_move(position)?;
        Ok(position)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(RequestError::GameOver.into());
        }
        Ok(())
    }
}
