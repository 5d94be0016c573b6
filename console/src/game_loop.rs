use std::io::{self, BufRead, Write};

use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{
    GameStatus, PlayerKind, TicTacToeGameState, check_win_with_line,
};
use tictactoe_engine::{GameError, log};

use crate::command::{Command, parse_command};
use crate::input::parse_coordinates;
use crate::render::render_board;

/// The interactive session: reads commands and coordinates from `input`,
/// writes prompts, boards and results to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
    rng: SessionRng,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, rng: SessionRng) -> Self {
        Self { input, output, rng }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs commands until `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(line) = self.prompt("Input command")? else {
                return Ok(());
            };

            match parse_command(&line) {
                Ok(Command::Exit) => return Ok(()),
                Ok(Command::Start { first, second }) => {
                    if self.play_game(first, second)?.is_none() {
                        return Ok(());
                    }
                }
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }

    /// Plays one game to the end. `None` when input ran out mid-game.
    pub fn play_game(
        &mut self,
        first: PlayerKind,
        second: PlayerKind,
    ) -> io::Result<Option<GameStatus>> {
        log!("Starting game: {} (X) vs {} (O), seed {}", first, second, self.rng.seed());

        let mut state = TicTacToeGameState::new(first, second);
        writeln!(self.output, "{}", render_board(state.board()))?;

        while !state.is_terminal() {
            let player = state.current_player();
            match player.kind.difficulty() {
                None => {
                    if !self.play_human_turn(&mut state)? {
                        log!("Input ended during the game");
                        return Ok(None);
                    }
                }
                Some(difficulty) => {
                    let position = state.play_computer_turn(&mut self.rng).map_err(to_io_error)?;
                    writeln!(self.output, "Making move level \"{}\"", difficulty)?;
                    log!("{} ({}) played {}", player.mark, difficulty, position);
                }
            }

            writeln!(self.output, "{}", render_board(state.board()))?;

            if !state.is_terminal() {
                state.advance_turn();
            }
        }

        let status = state.status();
        writeln!(self.output, "{}", status)?;
        match check_win_with_line(state.board()) {
            Some(line) => log!("{} won from {} to {}", line.mark, line.start, line.end),
            None => log!("Game ended: {}", status),
        }
        Ok(Some(status))
    }

    /// Prompts until a legal move is applied. `false` on end of input.
    fn play_human_turn(&mut self, state: &mut TicTacToeGameState) -> io::Result<bool> {
        loop {
            let Some(line) = self.prompt("Enter the coordinates")? else {
                return Ok(false);
            };

            let (row, col) = match parse_coordinates(&line) {
                Ok(coordinates) => coordinates,
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
            };

            match state.apply_human_move(row, col) {
                Ok(position) => {
                    log!("{} (user) played {}", state.current_mark(), position);
                    return Ok(true);
                }
                Err(err @ GameError::InvalidMove(_)) => writeln!(self.output, "{}", err)?,
                Err(err) => return Err(to_io_error(err)),
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: > ", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn to_io_error(err: GameError) -> io::Error {
    io::Error::other(err)
}
