use rand::Rng;

use crate::bot::Bot;
use crate::console::Console;
use crate::error::GameError;
use crate::policy::select_card;
use crate::state::GameStateView;
use crate::visualize::GameEvent;

/// Automated player backed by the selection policy.
pub struct ComputerBot<R: Rng> {
    rng: R,
    reveal_hand: bool,
}

impl<R: Rng> ComputerBot<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            reveal_hand: false,
        }
    }

    /// Print the computer's hand before each of its plays.
    pub fn with_revealed_hand(mut self, reveal: bool) -> Self {
        self.reveal_hand = reveal;
        self
    }
}

impl<R: Rng> Bot for ComputerBot<R> {
    fn select_card(
        &mut self,
        state: &GameStateView,
        console: &mut dyn Console,
    ) -> Result<usize, GameError> {
        if self.reveal_hand {
            console.emit(&GameEvent::ComputerHand(state.hand.clone()));
        }
        let Some(selection) = select_card(&state.hand, state.top_card, &mut self.rng) else {
            return Err(GameError::EmptyHand);
        };
        console.emit(&GameEvent::ComputerPlays(state.hand[selection.index]));
        Ok(selection.index)
    }
}
