use crate::model::card::Card;
use crate::model::seat::Seat;
use thiserror::Error;

/// Every way a rules operation can reject its input or the current state.
///
/// None of these are retried internally; the caller decides whether a
/// rejection is a user-facing message or a bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("invalid {what} encoding {input:?}: {reason}")]
    InvalidEncoding {
        what: &'static str,
        input: String,
        reason: String,
    },
    #[error("seat {0} is not on the interval [0,3]")]
    InvalidSeat(i64),
    #[error("expected {expected} to act next but got {actual}")]
    OutOfOrder { expected: Seat, actual: Seat },
    #[error("round is not complete")]
    RoundIncomplete,
    #[error("round is already complete")]
    RoundComplete,
    #[error("trick is not complete")]
    TrickIncomplete,
    #[error("tally already holds eight tricks")]
    TallyComplete,
    #[error("tally is not done")]
    TallyIncomplete,
    #[error("points total leaves the i32 range")]
    PointsOverflow,
    #[error("card {0} is not held")]
    CardNotHeld(Card),
    #[error("card {0} is already present")]
    DuplicateCard(Card),
    #[error("every player passed")]
    AllPassed,
}

impl RuleError {
    pub(crate) fn encoding(
        what: &'static str,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RuleError::InvalidEncoding {
            what,
            input: input.into(),
            reason: reason.into(),
        }
    }
}
