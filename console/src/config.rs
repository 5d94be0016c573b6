use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{FileContentConfigProvider, LoadedConfig, Validate, load_config};
use tictactoe_engine::games::tictactoe::PlayerKind;

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";
pub const MAX_SIMULATION_GAMES: u32 = 100_000;

/// Reads the config file; a missing file gives the defaults.
pub fn load_config_file(file_path: &str) -> Result<LoadedConfig<Config>, String> {
    load_config(&FileContentConfigProvider::new(file_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub log: LogConfig,
    /// Fixed seed for the random strategies; drawn fresh each run when unset.
    pub seed: Option<u64>,
    pub simulation: SimulationConfig,
}

impl Config {
    /// Checks the sections the chosen mode runs with. The simulation section
    /// only matters with `simulate`.
    pub fn validate_for(&self, simulate: bool) -> Result<(), String> {
        self.log.validate()?;
        if simulate {
            self.simulation.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LogConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.prefix.as_deref().is_some_and(|prefix| prefix.trim().is_empty()) {
            return Err("log prefix must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SimulationConfig {
    pub first: PlayerKind,
    pub second: PlayerKind,
    pub games: u32,
}

impl Validate for SimulationConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.first.is_computer() || !self.second.is_computer() {
            return Err("simulation players must both be computer players".to_string());
        }
        if self.games == 0 {
            return Err("simulation games must be greater than 0".to_string());
        }
        if self.games > MAX_SIMULATION_GAMES {
            return Err(format!(
                "simulation games must not exceed {}",
                MAX_SIMULATION_GAMES
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig {
                enabled: false,
                prefix: None,
            },
            seed: None,
            simulation: SimulationConfig {
                first: PlayerKind::Hard,
                second: PlayerKind::Medium,
                games: 100,
            },
        }
    }
}
