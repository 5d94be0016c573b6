use std::str::FromStr;

use crate::error::{GameError, MoveError, RequestError};
use super::types::{BOARD_SIZE, GameStatus, Mark, Position};
use super::win_detector::{check_win, classify};

pub type Cells = [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE];

/// The 3x3 grid. A plain value: copying it is how callers take a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Cells,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Cells) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> Cells {
        self.cells
    }

    /// # Panics
    /// If `position` is off the board; check with
    /// [`Board::is_valid_move`] or go through [`Board::place`] for
    /// untrusted positions.
    pub fn get(&self, position: Position) -> Option<Mark> {
        self.cells[position.row][position.col]
    }

    pub fn is_valid_move(&self, position: Position) -> bool {
        position.row < BOARD_SIZE && position.col < BOARD_SIZE && self.get(position).is_none()
    }

    /// Empty cells in row-major order. Strategies rely on this order for
    /// their tie-breaks.
    pub fn legal_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_none() {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn place(&mut self, position: Position, mark: Mark) -> Result<(), GameError> {
        if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
            return Err(MoveError::OutOfRange {
                row: position.row.saturating_add(1),
                col: position.col.saturating_add(1),
            }
            .into());
        }
        if self.get(position).is_some() {
            return Err(MoveError::CellOccupied(position).into());
        }
        self.cells[position.row][position.col] = Some(mark);
        Ok(())
    }

    pub(super) fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = Some(mark);
    }

    /// Undoes a speculative [`Board::place`]. Only the search uses this.
    ///
    /// # Panics
    /// If `position` is off the board.
    pub fn clear(&mut self, position: Position) {
        self.cells[position.row][position.col] = None;
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(mark))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|cell| cell.is_some()))
    }

    pub fn is_winner(&self, mark: Mark) -> bool {
        check_win(self, mark)
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.is_winner(Mark::X) && !self.is_winner(Mark::O)
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_over()
    }

    pub fn status(&self) -> GameStatus {
        classify(self)
    }

    /// Row-major notation, `_` for empty cells; the inverse of `FromStr`.
    pub fn to_notation(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|cell| cell.map_or('_', |mark| mark.to_char()))
            .collect()
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::from(RequestError::InvalidBoardNotation(s.to_string()));

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(invalid());
        }

        let mut board = Board::new();
        for (i, c) in chars.into_iter().enumerate() {
            let cell = match c.to_ascii_uppercase() {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '_' => None,
                _ => return Err(invalid()),
            };
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = cell;
        }
        Ok(board)
    }
}
