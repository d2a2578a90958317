use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    fn letter(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Suit::Spades => "♠",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Hearts => "♥",
        };
        write!(f, "{}", s)
    }
}

/// Card faces in trick rank order, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    Nine,
    Jack,
    Queen,
    King,
    Ten,
    Ace,
}

impl Face {
    /// Faces in the order a fresh deck lays them out within a suit.
    pub const DECK_ORDER: [Face; 6] = [
        Face::Ace,
        Face::Ten,
        Face::King,
        Face::Queen,
        Face::Jack,
        Face::Nine,
    ];
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Face::Nine => "9",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
            Face::Ten => "10",
            Face::Ace => "A",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub face: Face,
    pub suit: Suit,
}

impl Card {
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self { face, suit }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.suit)
    }
}

/// Parses short notation such as `10H`, `QS` or `9d`.
impl std::str::FromStr for Card {
    type Err = PinochleError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let bad = || PinochleError::ParseCard(s.to_string());
        let mut chars = s.chars();
        let suit_letter = chars.next_back().ok_or_else(bad)?.to_ascii_uppercase();
        let suit = Suit::ALL
            .into_iter()
            .find(|suit| suit.letter() == suit_letter)
            .ok_or_else(bad)?;
        let face = match chars.as_str().to_ascii_uppercase().as_str() {
            "9" => Face::Nine,
            "J" => Face::Jack,
            "Q" => Face::Queen,
            "K" => Face::King,
            "10" | "T" => Face::Ten,
            "A" => Face::Ace,
            _ => return Err(bad()),
        };
        Ok(Card::new(face, suit))
    }
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::One => write!(f, "player one"),
            Seat::Two => write!(f, "player two"),
        }
    }
}


pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod meld;
pub mod player;
pub mod points;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::MatchConfig;
pub use deck::Deck;
pub use error::{PinochleError, Result};
pub use game::{resolve_trick, Match, Phase};
pub use meld::{MeldCatalog, MeldKind};
pub use player::{Computer, Human, PlayerAgent, Scorecard};
pub use points::PointTable;
