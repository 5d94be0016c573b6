mod command;
mod config;
mod game_loop;
mod input;
mod render;
mod simulation;

use std::io;

use clap::Parser;
use tictactoe_engine::config::{ConfigOrigin, to_yaml};
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::PlayerKind;
use tictactoe_engine::{log, logger};

use config::{CONFIG_FILE, Config, load_config_file};
use game_loop::Console;
use simulation::run_simulation;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-tac-toe against the computer")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// Seed for the easy and medium strategies, overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostic log lines to stderr
    #[arg(long)]
    verbose: bool,

    /// Play computer-vs-computer games and print the tally instead of
    /// reading commands
    #[arg(long)]
    simulate: bool,

    /// Print the effective config as YAML and exit
    #[arg(long)]
    print_config: bool,

    #[arg(long)]
    games: Option<u32>,

    #[arg(long)]
    first: Option<PlayerKind>,

    #[arg(long)]
    second: Option<PlayerKind>,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.verbose {
            config.log.enabled = true;
        }
        if let Some(games) = self.games {
            config.simulation.games = games;
        }
        if let Some(first) = self.first {
            config.simulation.first = first;
        }
        if let Some(second) = self.second {
            config.simulation.second = second;
        }
    }

    /// Loads the config file, applies the flags on top and validates the
    /// result for the selected mode.
    fn resolve_config(&self) -> Result<(Config, ConfigOrigin), String> {
        let loaded = load_config_file(&self.config)?;
        let mut config = loaded.config;
        self.apply_to(&mut config);
        config
            .validate_for(self.simulate)
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok((config, loaded.origin))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (config, origin) = args.resolve_config()?;

    if args.print_config {
        print!("{}", to_yaml(&config)?);
        return Ok(());
    }

    logger::init_logger(config.log.prefix.clone(), config.log.enabled);
    match origin {
        ConfigOrigin::Stored => log!("Loaded config from {}", args.config),
        ConfigOrigin::Defaults => log!("No config at {}, using defaults", args.config),
    }

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    if args.simulate {
        let simulation = &config.simulation;
        let report = run_simulation(simulation.first, simulation.second, simulation.games, &mut rng)?;
        println!("{}", report);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), rng);
    console.run()?;

    log!("Bye");
    Ok(())
}
