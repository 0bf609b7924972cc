use crate::error::RuleError;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Worth -3 to the team that takes it.
    pub const THREE_OF_SPADES: Card = Card::new(Rank::Three, Suit::Spades);
    /// Worth +5 to the team that takes it.
    pub const FIVE_OF_HEARTS: Card = Card::new(Rank::Five, Suit::Hearts);
    pub const SEVEN_OF_CLUBS: Card = Card::new(Rank::Seven, Suit::Clubs);
    pub const SEVEN_OF_DIAMONDS: Card = Card::new(Rank::Seven, Suit::Diamonds);

    /// The four cards that replace the low ranks of a standard deck.
    pub const SPECIALS: [Card; 4] = [
        Card::SEVEN_OF_CLUBS,
        Card::SEVEN_OF_DIAMONDS,
        Card::THREE_OF_SPADES,
        Card::FIVE_OF_HEARTS,
    ];

    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn is_special(self) -> bool {
        Card::SPECIALS.contains(&self)
    }

    pub fn human(self) -> String {
        format!("{} of {}", self.rank.human(), self.suit.human())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_code), Some(suit_code), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(RuleError::encoding("card", s, "must be two characters"));
        };
        let rank = Rank::from_code(rank_code)
            .ok_or_else(|| RuleError::encoding("card", s, format!("unknown rank {rank_code:?}")))?;
        let suit = Suit::from_code(suit_code)
            .ok_or_else(|| RuleError::encoding("card", s, format!("unknown suit {suit_code:?}")))?;
        Ok(Card::new(rank, suit))
    }
}

crate::impl_encoded_serde!(Card);
