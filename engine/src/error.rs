use crate::games::tictactoe::Position;

/// A move that cannot be played on the current board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange { row: usize, col: usize },
    CellOccupied(Position),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfRange { .. } => write!(f, "Coordinates should be from 1 to 3!"),
            MoveError::CellOccupied(_) => write!(f, "This cell is occupied! Choose another one!"),
        }
    }
}

/// A request the caller should never have made in the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    GameOver,
    UnknownPlayerKind(String),
    HumanToMove,
    InvalidBoardNotation(String),
    InvalidMarkCounts { x: usize, o: usize },
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::GameOver => write!(f, "Game is already over"),
            RequestError::UnknownPlayerKind(tag) => write!(f, "Unknown player kind: {}", tag),
            RequestError::HumanToMove => write!(f, "Current player is not a computer"),
            RequestError::InvalidBoardNotation(notation) => {
                write!(f, "Invalid board notation: {:?}", notation)
            }
            RequestError::InvalidMarkCounts { x, o } => {
                write!(f, "Unreachable position: {} X marks and {} O marks", x, o)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidMove(MoveError),
    MalformedRequest(RequestError),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidMove(e) => write!(f, "{}", e),
            GameError::MalformedRequest(e) => write!(f, "Malformed request: {}", e),
        }
    }
}

impl std::error::Error for GameError {}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        GameError::InvalidMove(e)
    }
}

impl From<RequestError> for GameError {
    fn from(e: RequestError) -> Self {
        GameError::MalformedRequest(e)
    }
}
