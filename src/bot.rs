use crate::console::Console;
use crate::error::GameError;
use crate::state::GameStateView;

/// Decides which card a seat plays. The game owns the hand; a bot only names
/// a position in it.
pub trait Bot {
    /// Returns the zero-based index of the card to play from `state.hand`.
    fn select_card(
        &mut self,
        state: &GameStateView,
        console: &mut dyn Console,
    ) -> Result<usize, GameError>;
}
