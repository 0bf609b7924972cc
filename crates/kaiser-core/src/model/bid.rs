use crate::error::RuleError;
use core::fmt;
use core::str::FromStr;

/// A contract bid, stored as its position on the bid ladder.
///
/// Position 0 is Pass; positions 1..=12 run 7, 7N, 8, 8N, ... 12, 12N, so the
/// derived ordering is the ladder ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bid(u8);

const CODES: [&str; 13] = [
    "P", "7", "7N", "8", "8N", "9", "9N", "A", "AN", "B", "BN", "C", "CN",
];

impl Bid {
    pub const PASS: Bid = Bid(0);

    /// Every bid, lowest first.
    pub const LADDER: [Bid; 13] = [
        Bid(0),
        Bid(1),
        Bid(2),
        Bid(3),
        Bid(4),
        Bid(5),
        Bid(6),
        Bid(7),
        Bid(8),
        Bid(9),
        Bid(10),
        Bid(11),
        Bid(12),
    ];

    /// A contract at `level` (7..=12), or `None` outside the ladder.
    pub const fn contract(level: u8, no_trump: bool) -> Option<Bid> {
        if level < 7 || level > 12 {
            return None;
        }
        let base = (level - 7) * 2 + 1;
        Some(Bid(if no_trump { base + 1 } else { base }))
    }

    pub const fn is_pass(self) -> bool {
        self.0 == 0
    }

    pub const fn is_no_trump(self) -> bool {
        !self.is_pass() && self.0 % 2 == 0
    }

    /// The number of points the contract commits to; Pass has none.
    pub const fn value(self) -> Option<u8> {
        if self.is_pass() {
            None
        } else {
            Some((self.0 - 1) / 2 + 7)
        }
    }

    /// No-trump contracts score double, made or missed.
    pub const fn multiplier(self) -> i32 {
        if self.is_no_trump() { 2 } else { 1 }
    }

    pub fn human(self) -> String {
        match self.value() {
            None => "Pass".to_string(),
            Some(value) if self.is_no_trump() => format!("{value} No Trump"),
            Some(value) => value.to_string(),
        }
    }

    const fn code(self) -> &'static str {
        CODES[self.0 as usize]
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Bid {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CODES
            .iter()
            .position(|code| code.eq_ignore_ascii_case(s))
            .map(|index| Bid(index as u8))
            .ok_or_else(|| RuleError::encoding("bid", s, "not on the bid ladder"))
    }
}

crate::impl_encoded_serde!(Bid);

/// The bids the player whose turn it is may choose from, lowest first.
///
/// A non-dealer must pass or exceed the high bid. The dealer may match it,
/// and when everyone before them passed the dealer must bid.
pub fn legal_next_bids(prior: &[Bid], is_dealer: bool) -> Vec<Bid> {
    let Some(high) = prior.iter().copied().max() else {
        return Bid::LADDER.to_vec();
    };

    let mut legal = Vec::with_capacity(Bid::LADDER.len());
    if !(is_dealer && high.is_pass()) {
        legal.push(Bid::PASS);
    }
    legal.extend(
        Bid::LADDER
            .iter()
            .copied()
            .filter(|bid| !bid.is_pass())
            .filter(|bid| if is_dealer { *bid >= high } else { *bid > high }),
    );
    legal
}
