use crate::codec::parse_int;
use crate::error::RuleError;
use crate::model::card::Card;
use crate::model::seat::Seat;
use crate::model::suit::{Suit, Trump};
use crate::model::turn::TurnOrder;
use core::fmt;
use core::str::FromStr;
use tracing::debug;

/// One card from each seat, played clockwise from the lead, under the
/// hand's trump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    trump: Trump,
    plays: TurnOrder<Card>,
}

impl Trick {
    pub fn new(lead: Seat, trump: Trump) -> Self {
        Self {
            trump,
            plays: TurnOrder::new(lead),
        }
    }

    pub fn lead(&self) -> Seat {
        self.plays.lead()
    }

    pub fn trump(&self) -> Trump {
        self.trump
    }

    /// Cards in the order they were played, lead first.
    pub fn cards(&self) -> &[Card] {
        self.plays.items()
    }

    /// Played cards paired with the seat that played them.
    pub fn plays(&self) -> impl Iterator<Item = (Seat, Card)> + '_ {
        self.plays.iter().map(|(seat, card)| (seat, *card))
    }

    pub fn played(&self) -> usize {
        self.plays.placed()
    }

    pub fn is_done(&self) -> bool {
        self.plays.is_done()
    }

    pub fn current_turn(&self) -> Result<Seat, RuleError> {
        self.plays.current_turn()
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.cards().first().map(|card| card.suit)
    }

    /// Records `card` for `seat`. Whether the seat holds the card and follows
    /// suit is checked by the caller against its hand.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<(), RuleError> {
        self.plays.place_checked(seat, card, |played, card| {
            if played.contains(card) {
                Err(RuleError::DuplicateCard(*card))
            } else {
                Ok(())
            }
        })?;
        debug!(seat = seat.index(), card = %card, played = self.played(), "card played");
        Ok(())
    }

    pub fn winning_seat(&self) -> Result<Seat, RuleError> {
        if !self.is_done() {
            return Err(RuleError::TrickIncomplete);
        }
        let cards = self.cards();
        let lead_suit = cards[0].suit;
        let mut best = 0;
        for (ordinal, card) in cards.iter().enumerate().skip(1) {
            if self.is_higher(lead_suit, cards[best], *card) {
                best = ordinal;
            }
        }
        Ok(self.plays.seat_at(best))
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }

    pub fn contains_three_of_spades(&self) -> bool {
        self.contains(Card::THREE_OF_SPADES)
    }

    pub fn contains_five_of_hearts(&self) -> bool {
        self.contains(Card::FIVE_OF_HEARTS)
    }

    /// Whether `challenger` takes the trick from `incumbent`.
    ///
    /// Ranks are only ever compared between cards of one suit.
    fn is_higher(&self, lead_suit: Suit, incumbent: Card, challenger: Card) -> bool {
        if let Some(trump) = self.trump.suit() {
            match (incumbent.suit == trump, challenger.suit == trump) {
                (true, true) => return challenger.rank > incumbent.rank,
                (true, false) => return false,
                (false, true) => return true,
                (false, false) => {}
            }
        }
        match (incumbent.suit == lead_suit, challenger.suit == lead_suit) {
            (true, true) => challenger.rank > incumbent.rank,
            (false, true) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Trick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.lead(), self.trump)?;
        self.plays.write_items(f)
    }
}

impl FromStr for Trick {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('|');
        let (Some(lead_field), Some(trump_field)) = (parts.next(), parts.next()) else {
            return Err(RuleError::encoding("trick", s, "expected at least lead and trump"));
        };
        let lead: i64 = parse_int("trick", s, lead_field)?;
        let lead = Seat::try_from(lead)
            .map_err(|_| RuleError::encoding("trick", s, "lead must be on [0,3]"))?;
        let trump: Trump = trump_field.parse()?;
        let plays: TurnOrder<Card> = TurnOrder::from_slots("trick", s, lead, parts)?;
        let cards = plays.items();
        for (index, card) in cards.iter().enumerate() {
            if cards[..index].contains(card) {
                return Err(RuleError::encoding("trick", s, format!("duplicate card {card}")));
            }
        }
        Ok(Self { trump, plays })
    }
}

crate::impl_encoded_serde!(Trick);
