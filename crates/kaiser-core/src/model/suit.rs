use crate::error::RuleError;
use core::fmt;
use core::str::FromStr;

/// A card suit. Discriminants are the display weights used when sorting a
/// hand for presentation (Hearts first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Clubs = 1,
    Diamonds = 2,
    Spades = 3,
    Hearts = 4,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'H' | 'h' => Some(Suit::Hearts),
            'D' | 'd' => Some(Suit::Diamonds),
            'S' | 's' => Some(Suit::Spades),
            'C' | 'c' => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub const fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }

    pub const fn display_value(self) -> u8 {
        self as u8
    }

    pub const fn human(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Suit {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Suit::from_code(code)
                .ok_or_else(|| RuleError::encoding("suit", s, "expected one of H, D, S, C")),
            _ => Err(RuleError::encoding("suit", s, "must be a single character")),
        }
    }
}

/// The trump designator for a hand: one of the four suits, or no trump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trump {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
    NoTrump,
}

impl Trump {
    pub const ALL: [Trump; 5] = [
        Trump::Hearts,
        Trump::Diamonds,
        Trump::Spades,
        Trump::Clubs,
        Trump::NoTrump,
    ];

    /// The trump suit, or `None` for a no-trump hand.
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Trump::Hearts => Some(Suit::Hearts),
            Trump::Diamonds => Some(Suit::Diamonds),
            Trump::Spades => Some(Suit::Spades),
            Trump::Clubs => Some(Suit::Clubs),
            Trump::NoTrump => None,
        }
    }

    pub const fn is_no_trump(self) -> bool {
        matches!(self, Trump::NoTrump)
    }

    pub const fn code(self) -> char {
        match self.suit() {
            Some(suit) => suit.code(),
            None => 'N',
        }
    }

    pub const fn human(self) -> &'static str {
        match self.suit() {
            Some(suit) => suit.human(),
            None => "No Trump",
        }
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Hearts => Trump::Hearts,
            Suit::Diamonds => Trump::Diamonds,
            Suit::Spades => Trump::Spades,
            Suit::Clubs => Trump::Clubs,
        }
    }
}

impl fmt::Display for Trump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Trump {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("N") {
            return Ok(Trump::NoTrump);
        }
        s.parse::<Suit>()
            .map(Trump::from)
            .map_err(|_| RuleError::encoding("trump", s, "expected one of H, D, S, C, N"))
    }
}

crate::impl_encoded_serde!(Suit);
crate::impl_encoded_serde!(Trump);

#[cfg(test)]
mod tests {
    use super::{Suit, Trump};

    #[test]
    fn parses_case_insensitive_codes() {
        assert_eq!("d".parse::<Suit>(), Ok(Suit::Diamonds));
        assert_eq!("H".parse::<Trump>(), Ok(Trump::Hearts));
        assert_eq!("n".parse::<Trump>(), Ok(Trump::NoTrump));
    }

    #[test]
    fn rejects_malformed_codes() {
        for bad in ["", "?", "HH", "N"] {
            assert!(bad.parse::<Suit>().is_err(), "{bad:?} is not a card suit");
        }
        for bad in ["", "?", "HH", "NT"] {
            assert!(bad.parse::<Trump>().is_err(), "{bad:?} is not a trump");
        }
    }

    #[test]
    fn trump_encoding_roundtrip() {
        for trump in Trump::ALL {
            assert_eq!(trump.to_string().parse::<Trump>(), Ok(trump));
        }
        assert_eq!(Trump::NoTrump.human(), "No Trump");
        assert_eq!(Trump::from(Suit::Spades).suit(), Some(Suit::Spades));
    }

    #[test]
    fn display_values_rank_hearts_highest() {
        assert_eq!(Suit::Hearts.display_value(), 4);
        assert_eq!(Suit::Spades.display_value(), 3);
        assert_eq!(Suit::Diamonds.display_value(), 2);
        assert_eq!(Suit::Clubs.display_value(), 1);
    }
}
