use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, full_deck};
use crate::error::GameError;

/// Stock of undealt cards. Cards are drawn from the front and never return.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        Self { cards: full_deck() }
    }

    /// Wraps a caller-supplied ordering, used for reproducible games.
    /// The cards must be exactly the 52-card set with no duplicates.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.len() != DECK_SIZE {
            return Err(GameError::InvalidDeck("deck must contain exactly 52 cards"));
        }
        let unique: HashSet<Card> = cards.iter().copied().collect();
        if unique.len() != DECK_SIZE {
            return Err(GameError::InvalidDeck("deck contains duplicate cards"));
        }
        Ok(Self { cards })
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the first `count` cards.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        if count > self.cards.len() {
            return Err(GameError::InvalidDraw {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn draws_leave_the_deck_for_good() {
        let mut deck = Deck::standard();
        let mut rng = StdRng::seed_from_u64(7);
        deck.shuffle(&mut rng);
        let mut drawn = Vec::new();
        for count in [4, 6, 6, 0, 12, 24] {
            drawn.extend(deck.draw(count).expect("enough cards"));
            assert_eq!(drawn.len() + deck.len(), DECK_SIZE);
        }
        assert!(deck.is_empty());
        let unique: HashSet<Card> = drawn.iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn remaining_and_drawn_are_disjoint() {
        let mut deck = Deck::standard();
        let drawn = deck.draw(10).expect("enough cards");
        for card in &drawn {
            assert!(!deck.cards().contains(card), "{card} drawn twice");
        }
    }

    #[test]
    fn draws_from_the_front() {
        let mut deck = Deck::standard();
        let drawn = deck.draw(2).expect("enough cards");
        assert_eq!(
            drawn,
            vec![
                Card::new(Rank::Ace, Suit::Diamonds),
                Card::new(Rank::Two, Suit::Diamonds)
            ]
        );
        assert_eq!(deck.cards()[0], Card::new(Rank::Three, Suit::Diamonds));
    }

    #[test]
    fn overdraw_is_rejected_without_side_effects() {
        let mut deck = Deck::standard();
        deck.draw(50).expect("enough cards");
        let err = deck.draw(3).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidDraw {
                requested: 3,
                remaining: 2
            }
        ));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn shuffle_with_same_seed_is_reproducible() {
        let mut a = Deck::standard();
        let mut b = Deck::standard();
        a.shuffle(&mut StdRng::seed_from_u64(42));
        b.shuffle(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.cards(), b.cards());
        assert_eq!(a.len(), DECK_SIZE);
    }

    #[test]
    fn injected_deck_must_be_a_permutation() {
        let mut cards = full_deck();
        cards.reverse();
        assert!(Deck::from_cards(cards.clone()).is_ok());
        cards.pop();
        assert!(matches!(
            Deck::from_cards(cards.clone()),
            Err(GameError::InvalidDeck(_))
        ));
        cards.push(cards[0]);
        assert!(matches!(
            Deck::from_cards(cards),
            Err(GameError::InvalidDeck(_))
        ));
    }
}
