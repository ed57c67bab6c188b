use thiserror::Error;

/// Errors that can occur while running a game of Indigo.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("cannot draw {requested} cards, only {remaining} remain in the deck")]
    InvalidDraw { requested: usize, remaining: usize },
    #[error("invalid deck: {0}")]
    InvalidDeck(&'static str),
    #[error("hand index {0} is out of range")]
    InvalidHandIndex(usize),
    #[error("cannot select a card from an empty hand")]
    EmptyHand,
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("operation not allowed in the current phase")]
    WrongPhase,
    #[error("game cancelled by the player")]
    Cancelled,
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
