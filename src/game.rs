use std::cmp::Ordering;

use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::meld::{missing_from, same_cards, MeldCatalog, MeldKind};
use crate::{Card, MatchConfig, PinochleError, PlayerAgent, PointTable, Result, Seat, Suit};

pub const DEAL_ROUNDS: usize = 4;
pub const DEAL_BATCH: usize = 3;
pub const HAND_SIZE: usize = DEAL_ROUNDS * DEAL_BATCH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No hands have been dealt yet.
    Dealing,
    /// Cards remain on the stack; both players draw after every trick.
    Tricks,
    /// Stack exhausted, hands are played out.
    Playoff,
    GameOver,
}

/// Decide who takes a trick from the card each seat played, the trump suit
/// and the seat that led.
///
/// A lone trump wins. Otherwise a card off the other's suit cannot beat the
/// leader, and within one suit the higher face wins with ties going to the
/// leader.
pub fn resolve_trick(one: Card, two: Card, trump: Suit, leader: Seat) -> Seat {
    let one_trump = one.suit == trump;
    let two_trump = two.suit == trump;
    if one_trump != two_trump {
        return if one_trump { Seat::One } else { Seat::Two };
    }
    if one.suit != two.suit {
        return leader;
    }
    match one.face.cmp(&two.face) {
        Ordering::Greater => Seat::One,
        Ordering::Less => Seat::Two,
        Ordering::Equal => leader,
    }
}

/// Two-player match controller. Owns the deck and drives both agents through
/// every game until one of them reaches the threshold.
pub struct Match<'a> {
    points: PointTable,
    players: [Box<dyn PlayerAgent + 'a>; 2],
    deck: Deck,
    rng: StdRng,
    shuffle: bool,
    threshold: u32,
    /// Seat that deals the next game.
    dealer: Seat,
    trick_leader: Seat,
    trick_winner: Option<Seat>,
    /// Seats that still have to draw after the last trick.
    draws_owed: [bool; 2],
    trump_suit: Option<Suit>,
    plays: [Option<Card>; 2],
    last_trick: Option<[Card; 2]>,
    catalog: Option<MeldCatalog>,
}

impl<'a> Match<'a> {
    pub fn new<A, B>(one: A, two: B, config: MatchConfig) -> Self
    where
        A: PlayerAgent + 'a,
        B: PlayerAgent + 'a,
    {
        Self {
            rng: config.rng(),
            points: config.points,
            players: [Box::new(one), Box::new(two)],
            deck: Deck::default(),
            shuffle: config.shuffle,
            threshold: config.threshold,
            dealer: Seat::Two,
            trick_leader: Seat::One,
            trick_winner: None,
            draws_owed: [false, false],
            trump_suit: None,
            plays: [None, None],
            last_trick: None,
            catalog: None,
        }
    }

    /// Fresh deck, empty hands, then deal. Scores carry over from earlier games.
    pub fn new_game(&mut self) -> Result<()> {
        self.deck = Deck::build(self.shuffle, &mut self.rng);
        for player in self.players.iter_mut() {
            player.reset_for_game();
        }
        self.trick_winner = None;
        self.draws_owed = [false, false];
        self.trump_suit = None;
        self.plays = [None, None];
        self.last_trick = None;
        self.catalog = None;
        info!(dealer = %self.dealer, shuffle = self.shuffle, "Starting new game");
        self.deal()
    }

    /// Deal four rounds of three cards each, non-dealer first, then turn up
    /// the trump. The non-dealer leads and deals the next game.
    pub fn deal(&mut self) -> Result<()> {
        let first = self.dealer.other();
        for _ in 0..DEAL_ROUNDS {
            for seat in [first, self.dealer] {
                for _ in 0..DEAL_BATCH {
                    let card = self.deck.pop()?;
                    self.agent_mut(seat).push_to_hand(card);
                }
            }
        }
        let trump = self.deck.pop()?;
        self.deck.set_trump(trump);
        self.trump_suit = Some(trump.suit);
        self.catalog = Some(MeldCatalog::for_trump(trump.suit));
        self.trick_leader = first;
        self.dealer = first;
        info!(%trump, stack = self.deck.len(), "Hands dealt");
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        if self.trump_suit.is_none() {
            Phase::Dealing
        } else if !self.deck.is_empty() {
            Phase::Tricks
        } else if self.players.iter().any(|p| p.has_cards())
            || self.plays.iter().any(Option::is_some)
        {
            Phase::Playoff
        } else {
            Phase::GameOver
        }
    }

    /// Whether tricks are still followed by draws, and whether the next
    /// draw takes the last card off the stack.
    pub fn trick_phase(&self) -> (bool, bool) {
        let active = self.phase() == Phase::Tricks;
        (active, active && self.deck.len() == 1)
    }

    pub fn playoff(&self) -> bool {
        self.phase() == Phase::Playoff
    }

    pub fn game_over(&self) -> bool {
        self.phase() == Phase::GameOver
    }

    /// Seat expected to play next in the current trick.
    pub fn turn(&self) -> Seat {
        if self.plays[self.trick_leader.index()].is_none() {
            self.trick_leader
        } else {
            self.trick_leader.other()
        }
    }

    /// Record a seat's card for the current trick. The agent decides which
    /// card actually leaves its hand. Plays wait for the previous trick's
    /// draws and follow `turn()`.
    pub fn play(&mut self, seat: Seat, proposed: Option<Card>) -> Result<Card> {
        if self.draw_pending() {
            return Err(PinochleError::DrawPending);
        }
        if self.plays[seat.index()].is_some() {
            return Err(PinochleError::AlreadyPlayed(seat));
        }
        if self.turn() != seat {
            return Err(PinochleError::OutOfTurn(seat));
        }
        let card = self.agent_mut(seat).play(proposed)?;
        self.plays[seat.index()] = Some(card);
        debug!(%seat, %card, "Card played");
        Ok(card)
    }

    /// Resolve the current trick once both seats have played. The winner
    /// leads next and is credited with the value of both cards.
    pub fn decide_trick_winner(&mut self) -> Result<Seat> {
        let one = self.plays[0].ok_or(PinochleError::TrickIncomplete(Seat::One))?;
        let two = self.plays[1].ok_or(PinochleError::TrickIncomplete(Seat::Two))?;
        let trump = self.trump_suit.ok_or(PinochleError::NoTrump)?;
        let winner = resolve_trick(one, two, trump, self.trick_leader);
        let points = self.points.card_points(one.face) + self.points.card_points(two.face);
        self.agent_mut(winner).score_trick_points(points);
        self.trick_winner = Some(winner);
        self.trick_leader = winner;
        self.plays = [None, None];
        self.last_trick = Some([one, two]);
        if !self.deck.is_empty() {
            self.draws_owed = [true, true];
        }
        info!(%one, %two, %winner, points, "Trick taken");
        Ok(winner)
    }

    /// True while a seat still has to draw for the last trick.
    pub fn draw_pending(&self) -> bool {
        self.draws_owed.iter().any(|owed| *owed)
    }

    /// Draw the owed card for `seat` off the stack.
    pub fn draw(&mut self, seat: Seat) -> Result<()> {
        if !self.draws_owed[seat.index()] {
            return Err(PinochleError::NoDrawOwed);
        }
        let card = self.deck.pop()?;
        self.draws_owed[seat.index()] = false;
        self.agent_mut(seat).push_to_hand(card);
        debug!(%seat, %card, left = self.deck.len(), "Card drawn");
        Ok(())
    }

    /// Take the trump card as `seat`'s owed draw once the stack is empty.
    pub fn draw_trump(&mut self, seat: Seat) -> Result<()> {
        if !self.draws_owed[seat.index()] {
            return Err(PinochleError::NoDrawOwed);
        }
        let card = self.deck.claim_trump()?;
        self.draws_owed[seat.index()] = false;
        self.agent_mut(seat).push_to_hand(card);
        debug!(%seat, %card, "Trump card drawn");
        Ok(())
    }

    /// Refill both hands after a trick, winner first. When only one card is
    /// left on the stack the winner takes it and the loser gets the trump.
    pub fn replenish(&mut self) -> Result<()> {
        let winner = match self.trick_winner {
            Some(seat) if self.draws_owed == [true, true] => seat,
            _ => return Err(PinochleError::NoDrawOwed),
        };
        let last_card = self.deck.len() == 1;
        self.draw(winner)?;
        if last_card {
            self.draw_trump(winner.other())
        } else {
            self.draw(winner.other())
        }
    }

    /// Declare a meld from cards in `seat`'s hand. The cards stay in hand.
    pub fn meld(&mut self, seat: Seat, attempt: &[Card]) -> Result<u32> {
        let catalog = self.catalog.as_ref().ok_or(PinochleError::NoTrump)?;
        let agent = &self.players[seat.index()];
        if let Some(card) = missing_from(agent.hand(), attempt) {
            return Err(PinochleError::CardNotInHand(card));
        }
        let kind = catalog.validate(attempt).map_err(|err| {
            warn!(%seat, ?attempt, "Rejected meld");
            err
        })?;
        if agent.melds().iter().any(|m| same_cards(m, attempt)) {
            return Err(PinochleError::MeldAlreadyDeclared(kind));
        }
        let points = self.points.meld_points(kind);
        let agent = self.agent_mut(seat);
        agent.score_meld_points(points);
        agent.store_meld(attempt.to_vec());
        info!(%seat, %kind, points, "Meld declared");
        Ok(points)
    }

    pub fn available_melds(&self, seat: Seat) -> Vec<MeldKind> {
        self.catalog
            .as_ref()
            .map(|c| c.available_in(self.hand(seat)))
            .unwrap_or_default()
    }

    pub fn meldable_cards(&self, seat: Seat) -> Vec<Card> {
        self.catalog
            .as_ref()
            .map(|c| c.meldable_cards(self.hand(seat)))
            .unwrap_or_default()
    }

    pub fn scores(&mut self) -> [u32; 2] {
        let [one, two] = &mut self.players;
        [one.score(), two.score()]
    }

    /// True once exactly one player has reached the threshold. Both getting
    /// there together is left for the host to break.
    pub fn match_over(&mut self) -> bool {
        let [one, two] = self.scores();
        (one >= self.threshold) != (two >= self.threshold)
    }

    pub fn winner(&mut self) -> Option<Seat> {
        if !self.match_over() {
            return None;
        }
        let [one, _] = self.scores();
        let seat = if one >= self.threshold { Seat::One } else { Seat::Two };
        debug!(winner = %seat, "Match over");
        Some(seat)
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.players[seat.index()].hand()
    }

    pub fn agent(&self, seat: Seat) -> &(dyn PlayerAgent + 'a) {
        &*self.players[seat.index()]
    }

    pub fn agent_mut(&mut self, seat: Seat) -> &mut (dyn PlayerAgent + 'a) {
        &mut *self.players[seat.index()]
    }

    pub fn into_agents(self) -> [Box<dyn PlayerAgent + 'a>; 2] {
        self.players
    }

    pub fn next_dealer(&self) -> Seat {
        self.dealer
    }

    pub fn dealer_is_player_one(&self) -> bool {
        self.dealer == Seat::One
    }

    pub fn set_next_dealer(&mut self, seat: Seat) {
        self.dealer = seat;
    }

    pub fn trick_leader(&self) -> Seat {
        self.trick_leader
    }

    pub fn trick_winner(&self) -> Option<Seat> {
        self.trick_winner
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_suit
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn catalog(&self) -> Option<&MeldCatalog> {
        self.catalog.as_ref()
    }

    pub fn pending_plays(&self) -> [Option<Card>; 2] {
        self.plays
    }

    pub fn last_trick(&self) -> Option<[Card; 2]> {
        self.last_trick
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn points(&self) -> &PointTable {
        &self.points
    }
}
