use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::score::ScoreBoard;
use crate::seat::Seat;

/// Everything the game reports to the player, in the order it happens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Banner,
    InitialTable(Vec<Card>),
    Table { count: usize, top: Option<Card> },
    /// Table as it stands once the deck and both hands are exhausted.
    FinalTable { count: usize, top: Option<Card> },
    Hand(Vec<Card>),
    ComputerHand(Vec<Card>),
    ComputerPlays(Card),
    WinsCards(Seat),
    Score(ScoreBoard),
    GameOver,
}

impl GameEvent {
    pub fn table(cards: &[Card]) -> Self {
        GameEvent::Table {
            count: cards.len(),
            top: cards.last().copied(),
        }
    }

    pub fn final_table(cards: &[Card]) -> Self {
        GameEvent::FinalTable {
            count: cards.len(),
            top: cards.last().copied(),
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Banner => f.write_str("Indigo Card Game"),
            GameEvent::InitialTable(cards) => {
                write!(f, "Initial cards on the table: {}", format_cards(cards))
            }
            GameEvent::Table { top: None, .. } | GameEvent::FinalTable { top: None, .. } => {
                f.write_str("No cards on the table")
            }
            GameEvent::Table {
                count,
                top: Some(top),
            }
            | GameEvent::FinalTable {
                count,
                top: Some(top),
            } => write!(f, "{count} cards on the table, and the top card is {top}"),
            GameEvent::Hand(cards) => write!(f, "Cards in hand: {}", format_indexed(cards)),
            GameEvent::ComputerHand(cards) => f.write_str(&format_cards(cards)),
            GameEvent::ComputerPlays(card) => write!(f, "Computer plays {card}"),
            GameEvent::WinsCards(seat) => write!(f, "{seat} wins cards"),
            GameEvent::Score(board) => {
                writeln!(
                    f,
                    "Score: {} {} - {} {}",
                    Seat::Human,
                    board.points(Seat::Human),
                    Seat::Computer,
                    board.points(Seat::Computer)
                )?;
                write!(
                    f,
                    "Cards: {} {} - {} {}",
                    Seat::Human,
                    board.won_cards(Seat::Human),
                    Seat::Computer,
                    board.won_cards(Seat::Computer)
                )
            }
            GameEvent::GameOver => f.write_str("Game Over"),
        }
    }
}

/// Space separated, e.g. `7♠ 10♦ Q♣`.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-based listing used when asking the player for a card, e.g. `1)7♠ 2)10♦`.
pub fn format_indexed(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}){card}", index + 1))
        .collect::<Vec<_>>()
        .join(" ")
}
