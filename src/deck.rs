use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Card, Face, PinochleError, Result, Suit};

/// Number of cards in a pinochle deck: two copies of 24 distinct cards.
pub const DECK_SIZE: usize = 48;

/// Draw stack (top is the end of the vector) plus the card turned up for trump.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    stack: Vec<Card>,
    trump: Option<Card>,
}

impl Deck {
    /// Build a full deck, laid out suit by suit with each card doubled, and
    /// shuffle it with `rng` when asked.
    pub fn build<R: Rng + ?Sized>(shuffle: bool, rng: &mut R) -> Self {
        let mut stack = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for face in Face::DECK_ORDER {
                let card = Card::new(face, suit);
                stack.push(card);
                stack.push(card);
            }
        }
        if shuffle {
            stack.shuffle(rng);
        }
        Self { stack, trump: None }
    }

    pub fn pop(&mut self) -> Result<Card> {
        self.stack.pop().ok_or(PinochleError::DeckEmpty)
    }

    pub fn set_trump(&mut self, card: Card) {
        self.trump = Some(card);
    }

    /// Hand out the trump card. It can only be claimed once.
    pub fn claim_trump(&mut self) -> Result<Card> {
        self.trump.take().ok_or(PinochleError::NoTrump)
    }

    pub fn trump(&self) -> Option<Card> {
        self.trump
    }

    pub fn stack(&self) -> &[Card] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unshuffled_deck_has_two_of_each() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = Deck::build(false, &mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        for card in deck.stack() {
            let copies = deck.stack().iter().filter(|c| *c == card).count();
            assert_eq!(copies, 2, "{} appears {} times", card, copies);
        }
        assert_eq!(deck.trump(), None);
    }

    #[test]
    fn unshuffled_top_is_nine_of_hearts() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = Deck::build(false, &mut rng);
        assert_eq!(deck.pop().unwrap(), Card::new(Face::Nine, Suit::Hearts));
        assert_eq!(deck.pop().unwrap(), Card::new(Face::Nine, Suit::Hearts));
        assert_eq!(deck.pop().unwrap(), Card::new(Face::Jack, Suit::Hearts));
        assert_eq!(deck.stack()[0], Card::new(Face::Ace, Suit::Spades));
    }

    #[test]
    fn shuffled_deck_keeps_contents() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::build(true, &mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        for card in deck.stack() {
            assert_eq!(deck.stack().iter().filter(|c| *c == card).count(), 2);
        }
    }

    #[test]
    fn shuffle_moves_most_cards() {
        let mut rng = StdRng::seed_from_u64(42);
        let ordered = Deck::build(false, &mut rng);
        let shuffled = Deck::build(true, &mut rng);
        let same = ordered
            .stack()
            .iter()
            .zip(shuffled.stack())
            .filter(|(a, b)| a == b)
            .count();
        assert!(same <= DECK_SIZE / 4, "{} cards kept their position", same);
    }

    #[test]
    fn pop_fails_when_empty() {
        let mut deck = Deck::default();
        assert_eq!(deck.pop(), Err(PinochleError::DeckEmpty));
    }

    #[test]
    fn trump_is_claimed_once() {
        let mut deck = Deck::default();
        assert_eq!(deck.claim_trump(), Err(PinochleError::NoTrump));
        let card = Card::new(Face::King, Suit::Spades);
        deck.set_trump(card);
        assert_eq!(deck.trump(), Some(card));
        assert_eq!(deck.claim_trump(), Ok(card));
        assert_eq!(deck.claim_trump(), Err(PinochleError::NoTrump));
        assert_eq!(deck.trump(), None);
    }
}
