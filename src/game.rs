use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::card::{Card, DEAL_SIZE, INITIAL_TABLE_CARDS};
use crate::deck::Deck;
use crate::error::GameError;
use crate::score::ScoreBoard;
use crate::seat::Seat;
use crate::state::{GameStateView, Phase};

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    /// Shuffle seed. `None` draws one from the operating system.
    pub seed: Option<u64>,
    pub first_player: Seat,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            first_player: Seat::Human,
        }
    }
}

/// Builder that enables deterministic deck injection for testing.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Use this exact card order instead of shuffling a fresh deck.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn with_first_player(mut self, seat: Seat) -> Self {
        self.config.first_player = seat;
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Result of a single play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrickOutcome {
    pub seat: Seat,
    pub card: Card,
    /// Cards moved to the seat's won pile, including the played card.
    /// `None` when the card stayed on the table.
    pub captured: Option<usize>,
}

impl TrickOutcome {
    pub fn is_win(&self) -> bool {
        self.captured.is_some()
    }
}

#[derive(Clone, Debug, Default)]
struct PlayerState {
    hand: Vec<Card>,
    won: Vec<Card>,
}

/// Core Indigo engine: owns the deck, both players' cards, the table pile
/// and the turn marker.
pub struct Game {
    deck: Deck,
    table: Vec<Card>,
    players: [PlayerState; 2],
    first_player: Seat,
    current_player: Seat,
    last_winner: Option<Seat>,
    phase: Phase,
    plays: usize,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    pub fn current_player(&self) -> Seat {
        self.current_player
    }

    pub fn first_player(&self) -> Seat {
        self.first_player
    }

    /// Seat that captured the most recent trick, if any.
    pub fn last_winner(&self) -> Option<Seat> {
        self.last_winner
    }

    pub fn table(&self) -> &[Card] {
        &self.table
    }

    pub fn top_card(&self) -> Option<Card> {
        self.table.last().copied()
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.players[seat.index()].hand
    }

    pub fn won_cards(&self, seat: Seat) -> &[Card] {
        &self.players[seat.index()].won
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Number of cards played so far.
    pub fn plays(&self) -> usize {
        self.plays
    }

    pub fn state_view(&self, seat: Seat) -> GameStateView {
        GameStateView {
            seat,
            hand: self.hand(seat).to_vec(),
            top_card: self.top_card(),
        }
    }

    /// Dealing gate run before every turn. Refills both hands when they are
    /// empty; when the deck is exhausted as well the game moves to
    /// [`Phase::Cleanup`] and [`Game::finish`] must be called.
    pub fn prepare_turn(&mut self) -> Result<Phase, GameError> {
        match self.phase {
            Phase::Dealing => {}
            Phase::AwaitingPlay | Phase::Cleanup => return Ok(self.phase),
            Phase::Finished => return Err(GameError::WrongPhase),
        }
        if self.players.iter().all(|player| player.hand.is_empty()) {
            if self.deck.is_empty() {
                self.phase = Phase::Cleanup;
                return Ok(self.phase);
            }
            for seat in [self.first_player, self.first_player.other()] {
                let cards = self.deck.draw(DEAL_SIZE)?;
                debug!(?seat, cards = cards.len(), "dealt hand");
                self.players[seat.index()].hand.extend(cards);
            }
        }
        self.phase = Phase::AwaitingPlay;
        Ok(self.phase)
    }

    /// Awards any cards left on the table to the last trick winner (or the
    /// first player when nobody won a trick) and returns the final score.
    pub fn finish(&mut self) -> Result<ScoreBoard, GameError> {
        if !matches!(self.phase, Phase::Cleanup) {
            return Err(GameError::WrongPhase);
        }
        if !self.table.is_empty() {
            let seat = self.last_winner.unwrap_or(self.first_player);
            debug!(?seat, cards = self.table.len(), "awarding leftovers");
            self.players[seat.index()].won.append(&mut self.table);
        }
        self.phase = Phase::Finished;
        self.final_score()
    }

    /// Plays the card at `hand_index` for `seat` and resolves the trick.
    /// The turn passes to the other seat whatever the outcome.
    pub fn play_card(&mut self, seat: Seat, hand_index: usize) -> Result<TrickOutcome, GameError> {
        if !matches!(self.phase, Phase::AwaitingPlay) {
            return Err(GameError::WrongPhase);
        }
        if seat != self.current_player {
            return Err(GameError::NotPlayersTurn);
        }
        let top = self.table.last().copied();
        let player = &mut self.players[seat.index()];
        if hand_index >= player.hand.len() {
            return Err(GameError::InvalidHandIndex(hand_index));
        }
        let card = player.hand.remove(hand_index);

        let captured = match top {
            Some(top) if card.matches(&top) => {
                self.table.push(card);
                let count = self.table.len();
                player.won.append(&mut self.table);
                self.last_winner = Some(seat);
                debug!(?seat, %card, count, "trick won");
                Some(count)
            }
            _ => {
                debug!(?seat, %card, "card left on table");
                self.table.push(card);
                None
            }
        };

        self.plays += 1;
        self.current_player = seat.other();
        self.phase = Phase::Dealing;
        Ok(TrickOutcome {
            seat,
            card,
            captured,
        })
    }

    /// Tally without the end-of-game bonus.
    pub fn running_score(&self) -> ScoreBoard {
        ScoreBoard::running(self.won_piles())
    }

    pub fn final_score(&self) -> Result<ScoreBoard, GameError> {
        if !self.is_finished() {
            return Err(GameError::WrongPhase);
        }
        let board = ScoreBoard::final_tally(self.won_piles(), self.first_player);
        info!(
            human = board.points(Seat::Human),
            computer = board.points(Seat::Computer),
            "final score"
        );
        Ok(board)
    }

    fn won_piles(&self) -> [&[Card]; 2] {
        [
            self.players[0].won.as_slice(),
            self.players[1].won.as_slice(),
        ]
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let mut deck = match deck {
            Some(cards) => Deck::from_cards(cards)?,
            None => {
                let mut rng = match config.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                let mut deck = Deck::standard();
                deck.shuffle(&mut rng);
                deck
            }
        };
        let table = deck.draw(INITIAL_TABLE_CARDS)?;

        Ok(Game {
            deck,
            table,
            players: Default::default(),
            first_player: config.first_player,
            current_player: config.first_player,
            last_winner: None,
            phase: Phase::Dealing,
            plays: 0,
        })
    }
}
