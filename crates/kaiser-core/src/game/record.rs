use super::rules::Rules;
use crate::model::bidding::BiddingRound;
use crate::model::hand::Hand;
use crate::model::passing::PassingRound;
use crate::model::score::Score;
use crate::model::seat::Seat;
use crate::model::tally::Tally;
use crate::model::trick::Trick;
use serde::{Deserialize, Serialize};

/// Everything an external store keeps for one game.
///
/// Each rules component is carried as its canonical encoding, so the stored
/// document holds the same strings the components parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Opaque player identities by seat; seat 0 created the game.
    pub player_ids: [Option<String>; 4],
    pub complete: bool,
    pub score: Score,
    pub dealer: Seat,
    pub bidding: BiddingRound,
    #[serde(default)]
    pub passing: Option<PassingRound>,
    pub hands: [Hand; 4],
    #[serde(default)]
    pub current_trick: Option<Trick>,
    #[serde(default)]
    pub last_trick: Option<Trick>,
    pub tally: Tally,
    #[serde(default)]
    pub rules: Rules,
}

impl GameRecord {
    /// A game with no players and no cards dealt. Bidding opens left of the
    /// dealer.
    pub fn fresh(dealer: Seat, rules: Rules) -> Self {
        Self {
            player_ids: Default::default(),
            complete: false,
            score: Score::new(),
            dealer,
            bidding: BiddingRound::new(dealer.next()),
            passing: rules.pass_card.then(|| PassingRound::new(dealer.next())),
            hands: Default::default(),
            current_trick: None,
            last_trick: None,
            tally: Tally::new(),
            rules,
        }
    }

    pub fn player_at(&self, seat: Seat) -> Option<&str> {
        self.player_ids[seat.index()].as_deref()
    }

    pub fn seat_of(&self, player_id: &str) -> Option<Seat> {
        Seat::LOOP
            .into_iter()
            .find(|seat| self.player_at(*seat) == Some(player_id))
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
