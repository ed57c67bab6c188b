use std::process;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::Level;

use indigo::{ComputerBot, GameBuilder, HumanBot, TextConsole, init_logging, play_round};

/// Salt mixed into the seed so the computer's tie-breaks don't mirror the shuffle.
const COMPUTER_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "indigo", about = "Play Indigo against the computer.")]
struct Args {
    /// Seed for the shuffle and the computer's tie-breaks (random when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Print the computer's hand before each of its plays
    #[arg(long = "reveal-computer-hand")]
    reveal_computer_hand: bool,

    /// Diagnostics written to stderr; RUST_LOG overrides this
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level.into());

    let mut builder = GameBuilder::new();
    let computer_rng = match args.seed {
        Some(seed) => {
            builder = builder.with_seed(seed);
            StdRng::seed_from_u64(seed ^ COMPUTER_SEED_SALT)
        }
        None => StdRng::from_entropy(),
    };

    let mut human = HumanBot::new();
    let mut computer = ComputerBot::new(computer_rng).with_revealed_hand(args.reveal_computer_hand);
    let mut console = TextConsole::stdio();

    if let Err(err) = play_round(builder, &mut human, &mut computer, &mut console) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
