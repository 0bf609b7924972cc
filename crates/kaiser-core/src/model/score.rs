use crate::codec::parse_int;
use crate::error::RuleError;
use crate::model::bid::Bid;
use crate::model::bidding::BiddingRound;
use crate::model::seat::Team;
use crate::model::tally::Tally;
use core::fmt;
use core::str::FromStr;
use tracing::info;

pub const DEFAULT_TO_WIN: i32 = 52;
pub const RAISED_TO_WIN: i32 = 62;

/// How one hand was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    pub bid_team: Team,
    pub bid: Bid,
    pub made: bool,
    /// `(points02, points13)` added by this hand.
    pub delta: (i32, i32),
    pub winner: Option<Team>,
}

/// The running score across hands: one `(points02, points13)` delta per hand.
///
/// Every prefix of `entries` sums inside the `i32` range; decoding and
/// `add_tally` refuse anything that would break that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    to_win: i32,
    entries: Vec<(i32, i32)>,
}

impl Score {
    pub fn new() -> Self {
        Self {
            to_win: DEFAULT_TO_WIN,
            entries: Vec::new(),
        }
    }

    pub fn to_win(&self) -> i32 {
        self.to_win
    }

    pub fn raise_win_threshold(&mut self) {
        self.to_win = RAISED_TO_WIN;
    }

    pub fn entries(&self) -> &[(i32, i32)] {
        &self.entries
    }

    pub fn current_score(&self) -> (i32, i32) {
        self.entries
            .iter()
            .fold((0, 0), |(a, b), (da, db)| (a + da, b + db))
    }

    pub fn score_for(&self, team: Team) -> i32 {
        let (points02, points13) = self.current_score();
        match team {
            Team::NorthSouth => points02,
            Team::EastWest => points13,
        }
    }

    /// Scores a finished hand against the contract won in `bidding`.
    ///
    /// The bidding team is paid its points times the contract multiplier if it
    /// took at least the contract, and loses the contract times the multiplier
    /// otherwise. The other team always keeps what it took. Nothing is
    /// recorded unless all eight tricks are in.
    pub fn add_tally(
        &mut self,
        bidding: &BiddingRound,
        tally: &Tally,
    ) -> Result<HandResult, RuleError> {
        let (bid, seat) = bidding.winning_bid_and_seat()?;
        let Some(bid_value) = bid.value() else {
            return Err(RuleError::AllPassed);
        };
        if !tally.is_done() {
            return Err(RuleError::TallyIncomplete);
        }
        let bid_team = seat.team();
        let multiplier = bid.multiplier();
        let team_points = tally.points_for(bid_team);
        let made = team_points >= i32::from(bid_value);
        let bid_delta = if made {
            team_points
                .checked_mul(multiplier)
                .ok_or(RuleError::PointsOverflow)?
        } else {
            -(i32::from(bid_value) * multiplier)
        };
        let other_delta = tally.points_for(bid_team.opponents());
        let delta = match bid_team {
            Team::NorthSouth => (bid_delta, other_delta),
            Team::EastWest => (other_delta, bid_delta),
        };
        checked_total(self.current_score(), delta).ok_or(RuleError::PointsOverflow)?;
        self.entries.push(delta);

        let winner = self.winner();
        info!(
            bid = %bid,
            bid_team = %bid_team,
            made,
            delta02 = delta.0,
            delta13 = delta.1,
            "hand scored"
        );
        if let Some(team) = winner {
            info!(winner = %team, score = ?self.current_score(), "match won");
        }
        Ok(HandResult {
            bid_team,
            bid,
            made,
            delta,
            winner,
        })
    }

    /// The team that has reached the threshold.
    ///
    /// When both have, the higher total wins and an exact tie goes to 0/2.
    pub fn winner(&self) -> Option<Team> {
        let (points02, points13) = self.current_score();
        match (points02 >= self.to_win, points13 >= self.to_win) {
            (true, true) if points13 > points02 => Some(Team::EastWest),
            (true, _) => Some(Team::NorthSouth),
            (false, true) => Some(Team::EastWest),
            (false, false) => None,
        }
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.to_win)?;
        for (index, (points02, points13)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str("||")?;
            }
            write!(f, "{points02}|{points13}")?;
        }
        Ok(())
    }
}

impl FromStr for Score {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Score::new());
        }
        let Some((to_win, pairs)) = s.split_once('-') else {
            return Err(RuleError::encoding("score", s, "missing '-' after the win threshold"));
        };
        let to_win = parse_int("score", s, to_win)?;
        let mut entries = Vec::new();
        let mut total = (0, 0);
        if !pairs.is_empty() {
            for pair in pairs.split("||") {
                let members: Vec<&str> = pair.split('|').collect();
                let [points02, points13] = members[..] else {
                    return Err(RuleError::encoding(
                        "score",
                        s,
                        format!("{pair:?} is not a pair"),
                    ));
                };
                let entry = (
                    parse_int("score", s, points02)?,
                    parse_int("score", s, points13)?,
                );
                total = checked_total(total, entry).ok_or_else(|| {
                    RuleError::encoding("score", s, "running total leaves the i32 range")
                })?;
                entries.push(entry);
            }
        }
        Ok(Self { to_win, entries })
    }
}

fn checked_total((a, b): (i32, i32), (da, db): (i32, i32)) -> Option<(i32, i32)> {
    Some((a.checked_add(da)?, b.checked_add(db)?))
}

crate::impl_encoded_serde!(Score);
