use serde::{Deserialize, Serialize};

use crate::meld::MeldKind;
use crate::Face;

/// Point values for captured cards and declared melds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointTable {
    pub ace: u32,
    pub ten: u32,
    pub king: u32,
    pub queen: u32,
    pub jack: u32,

    pub flush: u32,
    pub royal_marriage: u32,
    pub marriage: u32,
    pub dix: u32,

    pub hundred_aces: u32,
    pub eighty_kings: u32,
    pub sixty_queens: u32,
    pub forty_jacks: u32,

    pub pinochle: u32,
    pub double_pinochle: u32,
}

impl Default for PointTable {
    fn default() -> Self {
        Self {
            ace: 11,
            ten: 10,
            king: 4,
            queen: 3,
            jack: 2,
            flush: 150,
            royal_marriage: 40,
            marriage: 20,
            dix: 10,
            hundred_aces: 100,
            eighty_kings: 80,
            sixty_queens: 60,
            forty_jacks: 40,
            pinochle: 40,
            double_pinochle: 300,
        }
    }
}

impl PointTable {
    /// Value of a card captured in a trick. Nines count for nothing.
    pub fn card_points(&self, face: Face) -> u32 {
        match face {
            Face::Nine => 0,
            Face::Jack => self.jack,
            Face::Queen => self.queen,
            Face::King => self.king,
            Face::Ten => self.ten,
            Face::Ace => self.ace,
        }
    }

    pub fn meld_points(&self, kind: MeldKind) -> u32 {
        match kind {
            MeldKind::Flush => self.flush,
            MeldKind::RoyalMarriage => self.royal_marriage,
            MeldKind::Marriage(_) => self.marriage,
            MeldKind::Dix => self.dix,
            MeldKind::HundredAces => self.hundred_aces,
            MeldKind::EightyKings => self.eighty_kings,
            MeldKind::SixtyQueens => self.sixty_queens,
            MeldKind::FortyJacks => self.forty_jacks,
            MeldKind::Pinochle => self.pinochle,
            MeldKind::DoublePinochle => self.double_pinochle,
        }
    }
}
