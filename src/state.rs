use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::seat::Seat;

/// Where the round controller currently stands.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Hands may need replenishing before the next play.
    Dealing,
    /// The current seat must play a card.
    AwaitingPlay,
    /// Deck and hands are exhausted; leftover table cards still need an owner.
    Cleanup,
    /// Leftover cards have been awarded and the final score is fixed.
    Finished,
}

/// Snapshot handed to a bot when it is asked for a card.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub top_card: Option<Card>,
}
