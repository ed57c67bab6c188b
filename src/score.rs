//! Scoring for a game of Indigo.
//!
//! Every captured A, 10, J, Q or K is worth one point. At the end of the game
//! the seat holding more captured cards gets a bonus of three points; on a tie
//! the bonus goes to whoever played first. Running scores never include it.

use serde::{Deserialize, Serialize};

use crate::card::{Card, MOST_CARDS_BONUS};
use crate::seat::Seat;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub points: [u32; 2],
    pub won_cards: [usize; 2],
}

impl ScoreBoard {
    /// Mid-game tally, no bonus.
    pub fn running(won: [&[Card]; 2]) -> Self {
        let mut board = Self::default();
        for seat in Seat::ALL {
            let pile = won[seat.index()];
            let high = pile.iter().filter(|card| card.is_high_value()).count();
            board.points[seat.index()] = high as u32;
            board.won_cards[seat.index()] = pile.len();
        }
        board
    }

    /// End-of-game tally including the most-cards bonus.
    pub fn final_tally(won: [&[Card]; 2], first_player: Seat) -> Self {
        let mut board = Self::running(won);
        let human = board.won_cards[Seat::Human.index()];
        let computer = board.won_cards[Seat::Computer.index()];
        let bonus_seat = match human.cmp(&computer) {
            std::cmp::Ordering::Greater => Seat::Human,
            std::cmp::Ordering::Less => Seat::Computer,
            std::cmp::Ordering::Equal => first_player,
        };
        board.points[bonus_seat.index()] += MOST_CARDS_BONUS;
        board
    }

    pub fn points(&self, seat: Seat) -> u32 {
        self.points[seat.index()]
    }

    pub fn won_cards(&self, seat: Seat) -> usize {
        self.won_cards[seat.index()]
    }
}
