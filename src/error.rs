use thiserror::Error;

use crate::meld::MeldKind;
use crate::{Card, Seat};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinochleError {
    #[error("deck has no cards")]
    DeckEmpty,
    #[error("deck has no trump card")]
    NoTrump,
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("no card was proposed")]
    NoCardProposed,
    #[error("hand is empty")]
    EmptyHand,
    #[error("cards do not form a meld")]
    InvalidMeld,
    #[error("{0} was already declared this game")]
    MeldAlreadyDeclared(MeldKind),
    #[error("trick is missing a card from {0}")]
    TrickIncomplete(Seat),
    #[error("{0} has already played to this trick")]
    AlreadyPlayed(Seat),
    #[error("{0} played out of turn")]
    OutOfTurn(Seat),
    #[error("cards are still owed from the last trick")]
    DrawPending,
    #[error("no draw is owed")]
    NoDrawOwed,
    #[error("cannot parse card: {0:?}")]
    ParseCard(String),
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PinochleError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PinochleError>;
