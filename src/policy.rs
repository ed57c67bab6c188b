//! Card selection policy for the automated player.
//!
//! Cases are checked in order and the first that applies decides:
//! 1. A single card in hand is played.
//! 2. A single candidate (card matching the table's top card) is played.
//! 3. With an empty table or no candidates, discard from a suit held at least
//!    twice, else from a rank held at least twice, else from the whole hand.
//! 4. With two or more candidates, prefer candidates sharing the top card's
//!    suit when there are at least two of them, else those sharing its rank
//!    when there are at least two, else any candidate.
//!
//! Ties within the chosen pool are broken uniformly at random.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::card::Card;

/// Which branch of the policy produced the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    OnlyCard,
    OnlyCandidate,
    Discard,
    Capture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Zero-based position in the hand.
    pub index: usize,
    pub reason: Choice,
}

/// Picks a card from `hand` given the table's top card. Returns `None` only
/// for an empty hand.
pub fn select_card<R: Rng + ?Sized>(
    hand: &[Card],
    top: Option<Card>,
    rng: &mut R,
) -> Option<Selection> {
    if hand.is_empty() {
        return None;
    }
    if hand.len() == 1 {
        return Some(Selection {
            index: 0,
            reason: Choice::OnlyCard,
        });
    }

    let candidates: Vec<usize> = match top {
        Some(top) => positions(hand, |card| card.matches(&top)),
        None => Vec::new(),
    };

    let candidate_count = candidates.len();
    let selection = match (top, candidate_count) {
        (_, 1) => Selection {
            index: candidates[0],
            reason: Choice::OnlyCandidate,
        },
        (Some(top), n) if n >= 2 => {
            let same_suit = positions(hand, |card| card.suit == top.suit);
            let same_rank = positions(hand, |card| card.rank == top.rank);
            let pool = if same_suit.len() >= 2 {
                same_suit
            } else if same_rank.len() >= 2 {
                same_rank
            } else {
                candidates
            };
            Selection {
                index: pick(&pool, rng)?,
                reason: Choice::Capture,
            }
        }
        _ => {
            let repeated_suits = positions(hand, |card| {
                hand.iter().filter(|other| other.suit == card.suit).count() >= 2
            });
            let repeated_ranks = positions(hand, |card| {
                hand.iter().filter(|other| other.rank == card.rank).count() >= 2
            });
            let pool = if !repeated_suits.is_empty() {
                repeated_suits
            } else if !repeated_ranks.is_empty() {
                repeated_ranks
            } else {
                (0..hand.len()).collect()
            };
            Selection {
                index: pick(&pool, rng)?,
                reason: Choice::Discard,
            }
        }
    };

    debug!(
        card = %hand[selection.index],
        reason = ?selection.reason,
        candidates = candidate_count,
        "computer selected card"
    );
    Some(selection)
}

fn positions(hand: &[Card], predicate: impl Fn(&Card) -> bool) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| predicate(*card))
        .map(|(index, _)| index)
        .collect()
}

fn pick<R: Rng + ?Sized>(pool: &[usize], rng: &mut R) -> Option<usize> {
    pool.choose(rng).copied()
}
