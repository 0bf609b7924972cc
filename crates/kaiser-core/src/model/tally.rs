use crate::codec::parse_int;
use crate::error::RuleError;
use crate::model::seat::Team;
use crate::model::trick::Trick;
use core::fmt;
use core::str::FromStr;
use tracing::debug;

pub const TRICKS_PER_HAND: u8 = 8;

const TRICK_POINTS: i32 = 1;
const THREE_OF_SPADES_POINTS: i32 = -3;
const FIVE_OF_HEARTS_POINTS: i32 = 5;

/// Points taken by each team over the eight tricks of one hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    trick_count: u8,
    points: [i32; 2],
}

impl Tally {
    pub const fn new() -> Self {
        Self {
            trick_count: 0,
            points: [0; 2],
        }
    }

    /// What a finished trick is worth to whoever takes it.
    pub fn trick_value(trick: &Trick) -> i32 {
        let mut value = TRICK_POINTS;
        if trick.contains_three_of_spades() {
            value += THREE_OF_SPADES_POINTS;
        }
        if trick.contains_five_of_hearts() {
            value += FIVE_OF_HEARTS_POINTS;
        }
        value
    }

    pub fn add_trick(&mut self, trick: &Trick) -> Result<(), RuleError> {
        let winner = trick.winning_seat()?;
        if self.is_done() {
            return Err(RuleError::TallyComplete);
        }
        let value = Self::trick_value(trick);
        let team = winner.team().index();
        self.points[team] = self.points[team]
            .checked_add(value)
            .ok_or(RuleError::PointsOverflow)?;
        self.trick_count += 1;
        debug!(
            winner = winner.index(),
            value,
            tricks = self.trick_count,
            "trick tallied"
        );
        Ok(())
    }

    pub fn is_done(&self) -> bool {
        self.trick_count == TRICKS_PER_HAND
    }

    pub fn trick_count(&self) -> u8 {
        self.trick_count
    }

    /// `(points02, points13)`.
    pub fn points(&self) -> (i32, i32) {
        (self.points[0], self.points[1])
    }

    pub fn points_for(&self, team: Team) -> i32 {
        self.points[team.index()]
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.trick_count, self.points[0], self.points[1]
        )
    }
}

impl FromStr for Tally {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Tally::new());
        }
        let fields: Vec<&str> = s.split('|').collect();
        let [count, points02, points13] = fields[..] else {
            return Err(RuleError::encoding("tally", s, "expected three fields"));
        };
        let trick_count: u8 = parse_int("tally", s, count)?;
        if trick_count > TRICKS_PER_HAND {
            return Err(RuleError::encoding("tally", s, "trick count exceeds eight"));
        }
        Ok(Self {
            trick_count,
            points: [
                parse_int("tally", s, points02)?,
                parse_int("tally", s, points13)?,
            ],
        })
    }
}

crate::impl_encoded_serde!(Tally);
