use core::fmt;

/// Card ranks present in a Kaiser deck, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum Rank {
    Three = 3,
    Five = 5,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ORDERED: [Rank; 10] = [
        Rank::Three,
        Rank::Five,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Ranks dealt in every suit; the remaining ranks appear on one card each.
    pub const FULL_SUIT: [Rank; 7] = [
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            '3' => Some(Rank::Three),
            '5' => Some(Rank::Five),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' | 't' => Some(Rank::Ten),
            'J' | 'j' => Some(Rank::Jack),
            'Q' | 'q' => Some(Rank::Queen),
            'K' | 'k' => Some(Rank::King),
            'A' | 'a' => Some(Rank::Ace),
            _ => None,
        }
    }

    pub const fn code(self) -> char {
        match self {
            Rank::Three => '3',
            Rank::Five => '5',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub const fn human(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Five => "5",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn from_code_maps() {
        assert_eq!(Rank::from_code('J'), Some(Rank::Jack));
        assert_eq!(Rank::from_code('t'), Some(Rank::Ten));
        assert_eq!(Rank::from_code('2'), None);
        assert_eq!(Rank::from_code('4'), None);
    }

    #[test]
    fn ordering_runs_three_to_ace() {
        assert!(Rank::ORDERED.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(Rank::Five < Rank::Seven);
        assert!(Rank::King < Rank::Ace);
    }

    #[test]
    fn display_matches_codes() {
        assert_eq!(Rank::Ten.to_string(), "T");
        assert_eq!(Rank::Queen.to_string(), "Q");
        assert_eq!(Rank::Ten.human(), "10");
    }
}
