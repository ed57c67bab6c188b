//! Indigo: a two-player matching card game between a person and the computer.

pub mod bot;
pub mod bots;
pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod game;
pub mod logging;
pub mod policy;
pub mod round;
pub mod score;
pub mod seat;
pub mod state;
pub mod visualize;

pub use crate::bot::Bot;
pub use crate::bots::{ComputerBot, HumanBot};
pub use crate::card::{Card, Rank, Suit};
pub use crate::console::{Console, TextConsole};
pub use crate::deck::Deck;
pub use crate::error::GameError;
pub use crate::game::{Game, GameBuilder, GameConfig, TrickOutcome};
pub use crate::logging::init_logging;
pub use crate::policy::{Choice, Selection, select_card};
pub use crate::round::{RoundOutcome, play_round};
pub use crate::score::ScoreBoard;
pub use crate::seat::Seat;
pub use crate::state::{GameStateView, Phase};
pub use crate::visualize::GameEvent;
