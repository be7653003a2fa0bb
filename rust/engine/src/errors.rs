use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is out of cards")]
    EmptyDeck,
    #[error("A hand is already in progress")]
    HandInProgress,
}
