use crate::error::RuleError;
use crate::model::seat::Seat;
use core::fmt;
use core::str::FromStr;

const SLOTS: usize = 4;

/// Four slots filled one per seat, clockwise from a lead seat.
///
/// Bidding, passing and tricks all share this shape; they differ only in the
/// item they collect and in what else they check before accepting one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOrder<T> {
    lead: Seat,
    items: Vec<T>,
}

impl<T> TurnOrder<T> {
    pub fn new(lead: Seat) -> Self {
        Self {
            lead,
            items: Vec::with_capacity(SLOTS),
        }
    }

    pub fn lead(&self) -> Seat {
        self.lead
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn placed(&self) -> usize {
        self.items.len()
    }

    pub fn is_done(&self) -> bool {
        self.items.len() == SLOTS
    }

    /// Position of `seat` in the order of play (0 for the lead).
    pub fn ordinal_of(&self, seat: Seat) -> usize {
        (seat.index() + SLOTS - self.lead.index()) % SLOTS
    }

    pub fn seat_at(&self, ordinal: usize) -> Seat {
        self.lead.offset(ordinal)
    }

    pub fn current_turn(&self) -> Result<Seat, RuleError> {
        if self.is_done() {
            return Err(RuleError::RoundComplete);
        }
        Ok(self.seat_at(self.items.len()))
    }

    pub fn place(&mut self, seat: Seat, item: T) -> Result<(), RuleError> {
        self.place_checked(seat, item, |_, _| Ok(()))
    }

    /// Places `item` for `seat` after `check` accepts it against the items
    /// already in the round.
    pub fn place_checked<F>(&mut self, seat: Seat, item: T, check: F) -> Result<(), RuleError>
    where
        F: FnOnce(&[T], &T) -> Result<(), RuleError>,
    {
        if self.ordinal_of(seat) != self.items.len() {
            return Err(RuleError::OutOfOrder {
                expected: self.seat_at(self.items.len()),
                actual: seat,
            });
        }
        check(&self.items, &item)?;
        self.items.push(item);
        Ok(())
    }

    /// Items paired with the seat that placed them, lead first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(ordinal, item)| (self.seat_at(ordinal), item))
    }

    pub fn item_from(&self, seat: Seat) -> Option<&T> {
        self.items.get(self.ordinal_of(seat))
    }
}

impl<T: fmt::Display> TurnOrder<T> {
    /// Writes `|<item>` for each placed item.
    pub(crate) fn write_items(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "|{item}")?;
        }
        Ok(())
    }
}

impl<T> TurnOrder<T>
where
    T: FromStr<Err = RuleError>,
{
    /// Rebuilds a round from the slot fields that follow the lead.
    ///
    /// Trailing empty slots are tolerated; an empty slot followed by an item
    /// is not, and neither are more than four slots.
    pub(crate) fn from_slots<'a>(
        what: &'static str,
        input: &str,
        lead: Seat,
        slots: impl Iterator<Item = &'a str>,
    ) -> Result<Self, RuleError> {
        let mut round = TurnOrder::new(lead);
        let mut gap = false;
        for (index, slot) in slots.enumerate() {
            if index >= SLOTS {
                return Err(RuleError::encoding(what, input, "more than four slots"));
            }
            if slot.is_empty() {
                gap = true;
                continue;
            }
            if gap {
                return Err(RuleError::encoding(what, input, "empty slot before a filled one"));
            }
            let item = slot.parse()?;
            round.items.push(item);
        }
        Ok(round)
    }
}
