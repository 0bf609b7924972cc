use crate::codec::parse_int;
use crate::error::RuleError;
use crate::model::bid::{Bid, legal_next_bids};
use crate::model::seat::Seat;
use crate::model::turn::TurnOrder;
use core::fmt;
use core::str::FromStr;
use tracing::debug;

/// One bid per seat, clockwise from the seat left of the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiddingRound {
    bids: TurnOrder<Bid>,
}

impl BiddingRound {
    pub fn new(lead: Seat) -> Self {
        Self {
            bids: TurnOrder::new(lead),
        }
    }

    /// Builds a round from a raw position, rejecting anything outside [0,3].
    pub fn with_lead(lead: i64) -> Result<Self, RuleError> {
        Ok(Self::new(Seat::try_from(lead)?))
    }

    pub fn lead(&self) -> Seat {
        self.bids.lead()
    }

    pub fn bids(&self) -> &[Bid] {
        self.bids.items()
    }

    pub fn placed(&self) -> usize {
        self.bids.placed()
    }

    pub fn is_done(&self) -> bool {
        self.bids.is_done()
    }

    pub fn current_turn(&self) -> Result<Seat, RuleError> {
        self.bids.current_turn()
    }

    /// Records `bid` for `seat`. Only turn order is enforced here; callers
    /// check the bid against [`BiddingRound::legal_bids`] first.
    pub fn place_bid(&mut self, seat: Seat, bid: Bid) -> Result<(), RuleError> {
        self.bids.place(seat, bid)?;
        debug!(seat = seat.index(), bid = %bid, placed = self.placed(), "bid placed");
        Ok(())
    }

    /// The bids open to the seat whose turn it is.
    pub fn legal_bids(&self, dealer: Seat) -> Result<Vec<Bid>, RuleError> {
        let seat = self.current_turn()?;
        Ok(legal_next_bids(self.bids(), seat == dealer))
    }

    /// The last non-pass bid and the seat that made it.
    ///
    /// Bids only ever rise, so the last contract bid is also the highest.
    pub fn winning_bid_and_seat(&self) -> Result<(Bid, Seat), RuleError> {
        if !self.is_done() {
            return Err(RuleError::RoundIncomplete);
        }
        self.bids
            .iter()
            .filter(|(_, bid)| !bid.is_pass())
            .last()
            .map(|(seat, bid)| (*bid, seat))
            .ok_or(RuleError::AllPassed)
    }
}

impl fmt::Display for BiddingRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lead())?;
        if self.bids.placed() == 0 {
            return f.write_str("|");
        }
        self.bids.write_items(f)
    }
}

impl FromStr for BiddingRound {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(RuleError::encoding("bidding round", s, "empty string"));
        }
        let mut parts = s.split('|');
        let lead_field = parts.next().unwrap_or_default();
        let lead: i64 = parse_int("bidding round", s, lead_field)?;
        let lead = Seat::try_from(lead)
            .map_err(|_| RuleError::encoding("bidding round", s, "lead must be on [0,3]"))?;
        let bids = TurnOrder::from_slots("bidding round", s, lead, parts)?;
        Ok(Self { bids })
    }
}

crate::impl_encoded_serde!(BiddingRound);
