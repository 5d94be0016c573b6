use std::fmt;

use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{GameStatus, Mark, PlayerKind, TicTacToeGameState};
use tictactoe_engine::{GameError, log};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl SimulationReport {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "X wins: {}", self.x_wins)?;
        writeln!(f, "O wins: {}", self.o_wins)?;
        write!(f, "Draws: {}", self.draws)
    }
}

/// Plays one computer-vs-computer game to the end.
pub fn play_computer_game(
    first: PlayerKind,
    second: PlayerKind,
    rng: &mut SessionRng,
) -> Result<GameStatus, GameError> {
    let mut state = TicTacToeGameState::new(first, second);
    while !state.is_terminal() {
        state.play_computer_turn(rng)?;
        if !state.is_terminal() {
            state.advance_turn();
        }
    }
    Ok(state.status())
}

pub fn run_simulation(
    first: PlayerKind,
    second: PlayerKind,
    games: u32,
    rng: &mut SessionRng,
) -> Result<SimulationReport, GameError> {
    log!("Simulating {} games: {} (X) vs {} (O), seed {}", games, first, second, rng.seed());

    let mut report = SimulationReport::default();
    for _ in 0..games {
        report.record(play_computer_game(first, second, rng)?);
    }

    log!(
        "Simulation finished after {} games: {} X, {} O, {} draws",
        report.games(),
        report.x_wins,
        report.o_wins,
        report.draws
    );
    Ok(report)
}
