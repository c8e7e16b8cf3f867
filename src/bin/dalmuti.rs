use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use rust_dalmuti::ai::{play_game, Strategy, DEFAULT_ITERATIONS, DEFAULT_MAX_TURNS};
use rust_dalmuti::core::{seat_names, GameRng, GameState, OpeningPass, RulesConfig, Style};
use rust_dalmuti::mcts::MCTSConfig;

/// Headless Great Dalmuti match runner.
#[derive(Debug, Parser)]
#[command(
    name = "dalmuti",
    author,
    version,
    about = "Play seeded Great Dalmuti games between automated seats"
)]
struct Cli {
    /// Seat styles in order (balanced, aggressive, defensive, mcts, mcts_pro).
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "mcts_pro,mcts,balanced,aggressive"
    )]
    styles: Vec<Style>,

    /// Number of games to play.
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// MCTS iterations per decision.
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Seed for deals and searches.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// JSON file with MCTS settings applied to every MCTS seat.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Offer `pass` to the player opening a fresh round.
    #[arg(long)]
    allow_opening_pass: bool,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    if !cli.styles.iter().all(|style| style.is_ai()) {
        bail!("the match runner only drives automated seats");
    }

    let search_config = match &cli.config {
        Some(path) => Some(
            MCTSConfig::from_path(path)
                .with_context(|| format!("loading MCTS config from {}", path.display()))?,
        ),
        None => None,
    };

    let strategies: Vec<Option<Strategy>> = Strategy::for_styles(&cli.styles, cli.iterations)
        .into_iter()
        .map(|slot| match (&search_config, slot) {
            (Some(config), Some(strategy)) => Some(strategy.with_config(config.clone())),
            (_, slot) => slot,
        })
        .collect();

    let rules = if cli.allow_opening_pass {
        RulesConfig::default().with_opening_pass(OpeningPass::Allowed)
    } else {
        RulesConfig::default()
    };

    let names = seat_names(&cli.styles);
    let mut wins = vec![0u32; cli.styles.len()];
    let mut rng = GameRng::new(cli.seed);

    for game in 0..cli.games {
        let state = GameState::deal(&cli.styles, rules, &mut rng)?;
        let outcome = play_game(state, &strategies, &mut rng, DEFAULT_MAX_TURNS)
            .with_context(|| format!("game {game}"))?;
        wins[outcome.winner.index()] += 1;
    }

    println!("{} games, seed {}", cli.games, cli.seed);
    for ((name, style), won) in names.iter().zip(&cli.styles).zip(&wins) {
        println!("{name:>6} ({style:<10}) {won:>5} wins");
    }

    Ok(())
}
