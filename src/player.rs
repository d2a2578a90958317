use serde::{Deserialize, Serialize};

use crate::{Card, PinochleError, Result};

/// What the match engine needs from a player, human or automated.
pub trait PlayerAgent {
    fn push_to_hand(&mut self, card: Card);

    fn hand(&self) -> &[Card];

    fn has_cards(&self) -> bool {
        !self.hand().is_empty()
    }

    /// Take a card out of the hand for the current trick. `proposed` is the
    /// card the caller asked for; an agent may choose to ignore it.
    fn play(&mut self, proposed: Option<Card>) -> Result<Card>;

    fn score_trick_points(&mut self, points: u32);

    fn score_meld_points(&mut self, points: u32);

    fn merge_melds_and_tricks(&mut self);

    /// Total score. Merges pending trick and meld points first.
    fn score(&mut self) -> u32;

    fn melds(&self) -> &[Vec<Card>];

    fn store_meld(&mut self, meld: Vec<Card>);

    /// Drop hand and meld history between games. The score carries over.
    fn reset_for_game(&mut self);
}

impl<T: PlayerAgent + ?Sized> PlayerAgent for &mut T {
    fn push_to_hand(&mut self, card: Card) {
        (**self).push_to_hand(card)
    }
    fn hand(&self) -> &[Card] {
        (**self).hand()
    }
    fn has_cards(&self) -> bool {
        (**self).has_cards()
    }
    fn play(&mut self, proposed: Option<Card>) -> Result<Card> {
        (**self).play(proposed)
    }
    fn score_trick_points(&mut self, points: u32) {
        (**self).score_trick_points(points)
    }
    fn score_meld_points(&mut self, points: u32) {
        (**self).score_meld_points(points)
    }
    fn merge_melds_and_tricks(&mut self) {
        (**self).merge_melds_and_tricks()
    }
    fn score(&mut self) -> u32 {
        (**self).score()
    }
    fn melds(&self) -> &[Vec<Card>] {
        (**self).melds()
    }
    fn store_meld(&mut self, meld: Vec<Card>) {
        (**self).store_meld(meld)
    }
    fn reset_for_game(&mut self) {
        (**self).reset_for_game()
    }
}

/// Trick and meld accumulators, merged into a running total on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub trick_points: u32,
    pub meld_points: u32,
    pub total: u32,
}

impl Scorecard {
    pub fn merge(&mut self) {
        self.total += self.trick_points + self.meld_points;
        self.trick_points = 0;
        self.meld_points = 0;
    }

    pub fn score(&mut self) -> u32 {
        self.merge();
        self.total
    }
}

/// Player whose cards are chosen by a person; every request is checked
/// against the hand.
#[derive(Debug, Clone, Default)]
pub struct Human {
    pub hand: Vec<Card>,
    pub scorecard: Scorecard,
    pub melds: Vec<Vec<Card>>,
}

impl Human {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Automated player. It always gives up the card it was dealt most recently,
/// whatever the caller proposed.
#[derive(Debug, Clone, Default)]
pub struct Computer {
    pub hand: Vec<Card>,
    pub scorecard: Scorecard,
    pub melds: Vec<Vec<Card>>,
}

impl Computer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerAgent for Human {
    fn push_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn play(&mut self, proposed: Option<Card>) -> Result<Card> {
        let card = proposed.ok_or(PinochleError::NoCardProposed)?;
        let idx = self
            .hand
            .iter()
            .position(|c| *c == card)
            .ok_or(PinochleError::CardNotInHand(card))?;
        Ok(self.hand.remove(idx))
    }

    fn score_trick_points(&mut self, points: u32) {
        self.scorecard.trick_points += points;
    }

    fn score_meld_points(&mut self, points: u32) {
        self.scorecard.meld_points += points;
    }

    fn merge_melds_and_tricks(&mut self) {
        self.scorecard.merge();
    }

    fn score(&mut self) -> u32 {
        self.scorecard.score()
    }

    fn melds(&self) -> &[Vec<Card>] {
        &self.melds
    }

    fn store_meld(&mut self, meld: Vec<Card>) {
        self.melds.push(meld);
    }

    fn reset_for_game(&mut self) {
        self.hand.clear();
        self.melds.clear();
    }
}

impl PlayerAgent for Computer {
    fn push_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn play(&mut self, _proposed: Option<Card>) -> Result<Card> {
        self.hand.pop().ok_or(PinochleError::EmptyHand)
    }

    fn score_trick_points(&mut self, points: u32) {
        self.scorecard.trick_points += points;
    }

    fn score_meld_points(&mut self, points: u32) {
        self.scorecard.meld_points += points;
    }

    fn merge_melds_and_tricks(&mut self) {
        self.scorecard.merge();
    }

    fn score(&mut self) -> u32 {
        self.scorecard.score()
    }

    fn melds(&self) -> &[Vec<Card>] {
        &self.melds
    }

    fn store_meld(&mut self, meld: Vec<Card>) {
        self.melds.push(meld);
    }

    fn reset_for_game(&mut self) {
        self.hand.clear();
        self.melds.clear();
    }
}
