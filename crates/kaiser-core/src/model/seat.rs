use crate::error::RuleError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A position at the table, numbered clockwise from the organiser's seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Seat {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Seat {
    pub const LOOP: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::North),
            1 => Some(Seat::East),
            2 => Some(Seat::South),
            3 => Some(Seat::West),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The seat `steps` places clockwise from this one.
    pub const fn offset(self, steps: usize) -> Seat {
        Seat::LOOP[(self.index() + steps) % 4]
    }

    pub const fn next(self) -> Seat {
        self.offset(1)
    }

    pub const fn partner(self) -> Seat {
        self.offset(2)
    }

    pub const fn team(self) -> Team {
        match self {
            Seat::North | Seat::South => Team::NorthSouth,
            Seat::East | Seat::West => Team::EastWest,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        }
    }
}

impl TryFrom<i64> for Seat {
    type Error = RuleError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(Seat::from_index)
            .ok_or(RuleError::InvalidSeat(value))
    }
}

impl TryFrom<u8> for Seat {
    type Error = RuleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Seat::try_from(i64::from(value))
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> u8 {
        seat as u8
    }
}

impl FromStr for Seat {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .parse()
            .map_err(|_| RuleError::encoding("seat", s, "not an integer"))?;
        Seat::try_from(value).map_err(|_| RuleError::encoding("seat", s, "must be on [0,3]"))
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// One of the two partnerships. Seats 0 and 2 play together against 1 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    NorthSouth,
    EastWest,
}

impl Team {
    pub const BOTH: [Team; 2] = [Team::NorthSouth, Team::EastWest];

    /// 0 for seats {0,2}, 1 for seats {1,3}.
    pub const fn index(self) -> usize {
        match self {
            Team::NorthSouth => 0,
            Team::EastWest => 1,
        }
    }

    pub const fn opponents(self) -> Team {
        match self {
            Team::NorthSouth => Team::EastWest,
            Team::EastWest => Team::NorthSouth,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Team::NorthSouth => "0/2",
            Team::EastWest => "1/3",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Seat, Team};
    use crate::error::RuleError;

    #[test]
    fn offset_wraps_around() {
        assert_eq!(Seat::West.next(), Seat::North);
        assert_eq!(Seat::South.offset(3), Seat::East);
    }

    #[test]
    fn partners_share_a_team() {
        for seat in Seat::LOOP {
            assert_eq!(seat.team(), seat.partner().team());
            assert_ne!(seat.team(), seat.next().team());
        }
        assert_eq!(Seat::North.team(), Team::NorthSouth);
        assert_eq!(Seat::West.team().index(), 1);
    }

    #[test]
    fn parses_integer_positions() {
        assert_eq!("2".parse::<Seat>(), Ok(Seat::South));
        assert!(matches!(
            "4".parse::<Seat>(),
            Err(RuleError::InvalidEncoding { what: "seat", .. })
        ));
        assert!("?".parse::<Seat>().is_err());
        assert_eq!(Seat::try_from(-1i64), Err(RuleError::InvalidSeat(-1)));
    }

    #[test]
    fn index_roundtrip() {
        for (i, seat) in Seat::LOOP.iter().enumerate() {
            assert_eq!(Seat::from_index(i), Some(*seat));
            assert_eq!(seat.index(), i);
            assert_eq!(seat.to_string(), i.to_string());
        }
    }
}
