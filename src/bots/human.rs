use crate::bot::Bot;
use crate::console::Console;
use crate::error::GameError;
use crate::state::GameStateView;
use crate::visualize::GameEvent;

/// Interactive player: shows the hand and asks the console for a card.
#[derive(Debug, Default)]
pub struct HumanBot;

impl HumanBot {
    pub fn new() -> Self {
        Self
    }
}

impl Bot for HumanBot {
    fn select_card(
        &mut self,
        state: &GameStateView,
        console: &mut dyn Console,
    ) -> Result<usize, GameError> {
        console.emit(&GameEvent::Hand(state.hand.clone()));
        let choice = console.prompt_card_index(state.hand.len())?;
        choice
            .checked_sub(1)
            .ok_or(GameError::InvalidHandIndex(choice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    /// Answers every card prompt with the same number.
    struct FixedConsole(usize);

    impl Console for FixedConsole {
        fn emit(&mut self, _event: &GameEvent) {}

        fn prompt_yes_no(&mut self, _question: &str) -> Result<bool, GameError> {
            Ok(true)
        }

        fn prompt_card_index(&mut self, _hand_size: usize) -> Result<usize, GameError> {
            Ok(self.0)
        }
    }

    fn view() -> GameStateView {
        GameStateView {
            seat: crate::seat::Seat::Human,
            hand: vec![
                Card::new(Rank::Two, Suit::Clubs),
                Card::new(Rank::Nine, Suit::Hearts),
            ],
            top_card: None,
        }
    }

    #[test]
    fn one_based_choice_becomes_hand_index() {
        let index = HumanBot::new()
            .select_card(&view(), &mut FixedConsole(2))
            .expect("valid choice");
        assert_eq!(index, 1);
    }

    #[test]
    fn zero_choice_is_rejected() {
        assert!(matches!(
            HumanBot::new().select_card(&view(), &mut FixedConsole(0)),
            Err(GameError::InvalidHandIndex(0))
        ));
    }
}
