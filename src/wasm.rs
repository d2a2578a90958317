use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use crate::game::{Match, Phase};
use crate::{Card, Computer, Human, MatchConfig, PinochleError, Seat};

fn js_error(err: PinochleError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn seat(one: bool) -> Seat {
    if one {
        Seat::One
    } else {
        Seat::Two
    }
}

#[wasm_bindgen]
pub struct WasmMatch {
    inner: Match<'static>,
}

#[derive(Serialize, Deserialize)]
pub struct JsState {
    phase: String,
    trump: Option<Card>,
    stack: usize,
    turn_player_one: bool,
    scores: [u32; 2],
    last_trick: Option<[Card; 2]>,
}

#[wasm_bindgen]
impl WasmMatch {
    /// `config` is an optional JSON match config.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<WasmMatch, JsValue> {
        let config = match config {
            Some(text) => MatchConfig::from_json(&text).map_err(js_error)?,
            None => MatchConfig::default(),
        };
        Ok(WasmMatch {
            inner: Match::new(Human::new(), Computer::new(), config),
        })
    }

    pub fn new_game(&mut self) -> Result<(), JsValue> {
        self.inner.new_game().map_err(js_error)
    }

    /// Play a card for the human seat, given in short notation like `10H`.
    pub fn play_human(&mut self, card: &str) -> Result<String, JsValue> {
        let card: Card = card.parse().map_err(js_error)?;
        let played = self.inner.play(Seat::One, Some(card)).map_err(js_error)?;
        Ok(played.to_string())
    }

    pub fn play_computer(&mut self) -> Result<String, JsValue> {
        let played = self.inner.play(Seat::Two, None).map_err(js_error)?;
        Ok(played.to_string())
    }

    /// Returns true when player one took the trick.
    pub fn decide_trick(&mut self) -> Result<bool, JsValue> {
        let winner = self.inner.decide_trick_winner().map_err(js_error)?;
        Ok(winner == Seat::One)
    }

    pub fn replenish(&mut self) -> Result<(), JsValue> {
        self.inner.replenish().map_err(js_error)
    }

    pub fn meld(&mut self, player_one: bool, cards: JsValue) -> Result<u32, JsValue> {
        let cards: Vec<Card> = swb::from_value(cards)?;
        self.inner.meld(seat(player_one), &cards).map_err(js_error)
    }

    pub fn match_over(&mut self) -> bool {
        self.inner.match_over()
    }

    pub fn hand(&self, player_one: bool) -> Result<JsValue, JsValue> {
        Ok(swb::to_value(self.inner.hand(seat(player_one)))?)
    }

    pub fn state(&mut self) -> Result<JsValue, JsValue> {
        let phase = match self.inner.phase() {
            Phase::Dealing => "dealing",
            Phase::Tricks => "tricks",
            Phase::Playoff => "playoff",
            Phase::GameOver => "game_over",
        };
        let state = JsState {
            phase: phase.to_string(),
            trump: self.inner.deck().trump(),
            stack: self.inner.deck().len(),
            turn_player_one: self.inner.turn() == Seat::One,
            scores: self.inner.scores(),
            last_trick: self.inner.last_trick(),
        };
        Ok(swb::to_value(&state)?)
    }
}
