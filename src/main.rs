//! Mastermind Solver - CLI
//!
//! Break a code yourself, let the solver break yours, or measure the solver
//! strategies against every possible code.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{run_play, run_simple, run_test_all, solve_code},
    core::Code,
    output::{print_solve_result, print_test_all_statistics},
    solver::{DEFAULT_MAX_TURNS, SessionConfig, StrategyType},
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code breaker with first-available and minimax strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of pegs in a code
    #[arg(long, global = true, default_value_t = 4)]
    holes: usize,

    /// Number of colours, numbered from 0
    #[arg(short, long, global = true, default_value_t = 6)]
    colors: u8,

    /// Strategy: minimax (default) or first-available. test-all runs both when omitted
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Guesses allowed per game
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Break a random code (default)
    Play {
        /// Seed for the hidden code, for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let the solver break a code you hold, scoring its guesses
    Simple,

    /// Solve a specific hidden code
    Solve {
        /// The hidden code, e.g. "0 1 2 3" or 0123
        code: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play every possible code and report average and worst-case guesses
    TestAll {
        /// Number of passes over all codes
        #[arg(short, long, default_value_t = 1)]
        runs: usize,

        /// Limit number of codes tested per pass
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let strategies = parse_strategies(cli.strategy.as_deref())?;
    let config = |strategy: StrategyType| {
        SessionConfig::new(cli.holes, cli.colors, strategy).with_max_turns(cli.max_turns)
    };
    // Single-game modes use minimax unless a strategy was named
    let single = config(match strategies.as_slice() {
        [strategy] => *strategy,
        _ => StrategyType::default(),
    });
    single.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { seed: None });

    match command {
        Commands::Play { seed } => run_play(&single, seed),
        Commands::Simple => run_simple(single),
        Commands::Solve { code, verbose } => run_solve_command(single, &code, verbose),
        Commands::TestAll { runs, limit } => {
            let configs: Vec<SessionConfig> = strategies.into_iter().map(config).collect();
            run_test_all_command(&configs, runs, limit)
        }
    }
}

/// `None` selects every strategy, in reporting order
fn parse_strategies(name: Option<&str>) -> Result<Vec<StrategyType>> {
    match name {
        None => Ok(StrategyType::ALL.to_vec()),
        Some(name) => StrategyType::from_name(name)
            .map(|strategy| vec![strategy])
            .ok_or_else(|| {
                anyhow!("unknown strategy '{name}' (expected 'minimax' or 'first-available')")
            }),
    }
}

fn run_solve_command(config: SessionConfig, code: &str, verbose: bool) -> Result<()> {
    let target: Code = code
        .parse()
        .with_context(|| format!("invalid code '{code}'"))?;

    let result = solve_code(config, &target)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_test_all_command(configs: &[SessionConfig], runs: usize, limit: Option<usize>) -> Result<()> {
    let Some(first) = configs.first() else {
        return Ok(());
    };

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nBoard: {} holes, {} colours, {} guesses allowed",
        first.holes, first.colors, first.max_turns
    );
    println!("Runs: {runs}\n");

    for config in configs {
        let stats = run_test_all(*config, runs, limit)?;
        print_test_all_statistics(&stats);
    }
    Ok(())
}
