mod command;
mod config;
mod terminal_ui;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{Mark, Mode, TicTacToeEngine};
use common::{log, logger};

use config::get_config_manager;
use terminal_ui::TerminalShell;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-Tac-Toe in the terminal")]
struct Args {
    /// two | ai
    #[arg(long)]
    mode: Option<Mode>,
    /// Skip the symbol prompt: x | o
    #[arg(long)]
    symbol: Option<Mark>,
    /// Seed for the AI's random moves
    #[arg(long)]
    seed: Option<u64>,
    /// Config file, defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<String>,
    /// Write the effective settings back to the config file before starting
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    use_log_prefix: bool,
    /// Log engine activity to stderr
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;

    if let Some(mode) = args.mode {
        config.default_mode = mode;
    }
    if args.symbol.is_some() {
        config.preferred_symbol = args.symbol;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        config.log.prefix.clone()
    };
    logger::init_logger(prefix, args.verbose || config.log.enabled);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting in {} mode with seed {}", config.default_mode, rng.seed());

    let engine = TicTacToeEngine::with_mode(config.default_mode, rng);
    let mut shell = TerminalShell::new(engine, config.preferred_symbol);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
