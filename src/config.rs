use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::{PointTable, Result};

/// Points a player needs to take the match.
pub const WINNING_POINTS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub threshold: u32,
    pub shuffle: bool,
    /// Fixed seed for reproducible deals. `None` draws from entropy.
    pub seed: Option<u64>,
    pub points: PointTable,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: WINNING_POINTS,
            shuffle: true,
            seed: None,
            points: PointTable::default(),
        }
    }
}

impl MatchConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
