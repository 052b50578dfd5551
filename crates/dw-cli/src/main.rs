//! Terminal frontend for the Darkwood text adventure.

mod terminal;

use std::process;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use dw_mechanics::CombatMode;
use dw_story::{GameConfig, GameEnd, GameSession};

use crate::terminal::TerminalConsole;

#[derive(Parser)]
#[command(
    name = "darkwood",
    about = "Darkwood - escape the cursed forest, one d20 at a time",
    version
)]
struct Cli {
    /// Seed the dice for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Fight every battle in this mode instead of asking (auto or manual)
    #[arg(long)]
    mode: Option<CombatMode>,

    /// Disable colored output
    #[arg(long)]
    plain: bool,

    /// Log more detail to stderr (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8, ansi: bool) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    if cli.plain {
        colored::control::set_override(false);
    }

    let mut config = GameConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(mode) = cli.mode {
        config = config.with_fight_mode(mode);
    }
    tracing::debug!(?config, "starting game");

    let mut session = GameSession::from_config(&config);
    let mut console = TerminalConsole::new();
    match session.run(&mut console).map_err(|e| e.to_string())? {
        GameEnd::Victory => tracing::info!("game won"),
        GameEnd::Abandoned => println!(),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, !cli.plain);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
