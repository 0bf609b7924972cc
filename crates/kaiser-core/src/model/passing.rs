use crate::codec::parse_int;
use crate::error::RuleError;
use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::turn::TurnOrder;
use core::fmt;
use core::str::FromStr;
use tracing::debug;

/// One card passed by each seat, in turn from the lead.
///
/// Only what each seat gave up is recorded. Who receives it is decided by
/// whoever runs the hand, and whether the card was actually held is checked
/// against the player's [`Hand`](crate::model::hand::Hand) by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassingRound {
    cards: TurnOrder<Card>,
}

impl PassingRound {
    pub fn new(lead: Seat) -> Self {
        Self {
            cards: TurnOrder::new(lead),
        }
    }

    pub fn lead(&self) -> Seat {
        self.cards.lead()
    }

    pub fn cards(&self) -> &[Card] {
        self.cards.items()
    }

    pub fn passed(&self) -> usize {
        self.cards.placed()
    }

    pub fn is_done(&self) -> bool {
        self.cards.is_done()
    }

    pub fn current_turn(&self) -> Result<Seat, RuleError> {
        self.cards.current_turn()
    }

    pub fn pass_card(&mut self, seat: Seat, card: Card) -> Result<(), RuleError> {
        self.cards.place(seat, card)?;
        debug!(seat = seat.index(), passed = self.passed(), "card passed");
        Ok(())
    }

    /// The card `seat` contributed. Only answered once every seat has passed.
    pub fn from_player(&self, seat: Seat) -> Result<Card, RuleError> {
        if !self.is_done() {
            return Err(RuleError::RoundIncomplete);
        }
        self.cards
            .item_from(seat)
            .copied()
            .ok_or(RuleError::RoundIncomplete)
    }

    /// Passed cards paired with the seat that gave them up, lead first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, Card)> + '_ {
        self.cards.iter().map(|(seat, card)| (seat, *card))
    }
}

impl fmt::Display for PassingRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lead())?;
        if self.cards.placed() == 0 {
            return f.write_str("|");
        }
        self.cards.write_items(f)
    }
}

impl FromStr for PassingRound {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let encoded = if s.is_empty() { "0|" } else { s };
        let mut parts = encoded.split('|');
        let lead_field = parts.next().unwrap_or_default();
        let lead: i64 = parse_int("passing round", s, lead_field)?;
        let lead = Seat::try_from(lead)
            .map_err(|_| RuleError::encoding("passing round", s, "lead must be on [0,3]"))?;
        let cards = TurnOrder::from_slots("passing round", s, lead, parts)?;
        Ok(Self { cards })
    }
}

crate::impl_encoded_serde!(PassingRound);
