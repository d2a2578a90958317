use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Card, Face, PinochleError, Result, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    Flush,
    RoyalMarriage,
    /// King and queen of a suit other than trump.
    Marriage(Suit),
    Dix,
    HundredAces,
    EightyKings,
    SixtyQueens,
    FortyJacks,
    Pinochle,
    DoublePinochle,
}

impl std::fmt::Display for MeldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeldKind::Flush => write!(f, "flush"),
            MeldKind::RoyalMarriage => write!(f, "royal marriage"),
            MeldKind::Marriage(suit) => write!(f, "marriage in {}", suit),
            MeldKind::Dix => write!(f, "dix"),
            MeldKind::HundredAces => write!(f, "hundred aces"),
            MeldKind::EightyKings => write!(f, "eighty kings"),
            MeldKind::SixtyQueens => write!(f, "sixty queens"),
            MeldKind::FortyJacks => write!(f, "forty jacks"),
            MeldKind::Pinochle => write!(f, "pinochle"),
            MeldKind::DoublePinochle => write!(f, "double pinochle"),
        }
    }
}

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut map = HashMap::new();
    for &card in cards {
        *map.entry(card).or_insert(0) += 1;
    }
    map
}

/// True when both slices hold the same cards with the same multiplicities.
pub fn same_cards(first: &[Card], second: &[Card]) -> bool {
    first.len() == second.len() && counts(first) == counts(second)
}

/// First card of `needed` that `hand` cannot supply, copies included.
pub fn missing_from(hand: &[Card], needed: &[Card]) -> Option<Card> {
    let mut have = counts(hand);
    for card in needed {
        match have.get_mut(card) {
            Some(n) if *n > 0 => *n -= 1,
            _ => return Some(*card),
        }
    }
    None
}

pub fn contains_all(hand: &[Card], needed: &[Card]) -> bool {
    missing_from(hand, needed).is_none()
}

/// Every meld that can be declared in a game, keyed to that game's trump suit.
#[derive(Debug, Clone)]
pub struct MeldCatalog {
    trump: Suit,
    entries: Vec<(MeldKind, Vec<Card>)>,
}

impl MeldCatalog {
    pub fn for_trump(trump: Suit) -> Self {
        use Face::*;
        let of = |face, suit| Card::new(face, suit);
        let mut entries = vec![
            (
                MeldKind::Flush,
                vec![
                    of(Ace, trump),
                    of(Ten, trump),
                    of(King, trump),
                    of(Queen, trump),
                    of(Jack, trump),
                ],
            ),
            (MeldKind::RoyalMarriage, vec![of(King, trump), of(Queen, trump)]),
        ];
        for suit in Suit::ALL.into_iter().filter(|s| *s != trump) {
            entries.push((MeldKind::Marriage(suit), vec![of(King, suit), of(Queen, suit)]));
        }
        entries.push((MeldKind::Dix, vec![of(Nine, trump)]));
        for (kind, face) in [
            (MeldKind::HundredAces, Ace),
            (MeldKind::EightyKings, King),
            (MeldKind::SixtyQueens, Queen),
            (MeldKind::FortyJacks, Jack),
        ] {
            entries.push((kind, Suit::ALL.iter().map(|&suit| of(face, suit)).collect()));
        }
        let queen_spades = of(Queen, Suit::Spades);
        let jack_diamonds = of(Jack, Suit::Diamonds);
        entries.push((MeldKind::Pinochle, vec![queen_spades, jack_diamonds]));
        entries.push((
            MeldKind::DoublePinochle,
            vec![queen_spades, queen_spades, jack_diamonds, jack_diamonds],
        ));
        Self { trump, entries }
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn entries(&self) -> &[(MeldKind, Vec<Card>)] {
        &self.entries
    }

    pub fn cards(&self, kind: MeldKind) -> Option<&[Card]> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, cards)| cards.as_slice())
    }

    /// Match an attempt against the catalog. Order of cards is irrelevant,
    /// multiplicity is not.
    pub fn validate(&self, attempt: &[Card]) -> Result<MeldKind> {
        self.entries
            .iter()
            .find(|(_, cards)| same_cards(cards, attempt))
            .map(|(kind, _)| *kind)
            .ok_or(PinochleError::InvalidMeld)
    }

    /// Melds that could be laid down from `hand` right now.
    pub fn available_in(&self, hand: &[Card]) -> Vec<MeldKind> {
        self.entries
            .iter()
            .filter(|(_, cards)| contains_all(hand, cards))
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// Cards from `hand` that take part in at least one catalog entry.
    pub fn meldable_cards(&self, hand: &[Card]) -> Vec<Card> {
        hand.iter()
            .copied()
            .filter(|card| self.entries.iter().any(|(_, cards)| cards.contains(card)))
            .collect()
    }
}
