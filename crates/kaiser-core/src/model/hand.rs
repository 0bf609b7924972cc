use crate::error::RuleError;
use crate::model::card::Card;
use crate::model::suit::Suit;
use core::fmt;
use core::str::FromStr;

/// The cards one player holds, kept in the order they arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Result<Self, RuleError> {
        for (index, card) in cards.iter().enumerate() {
            if cards[..index].contains(card) {
                return Err(RuleError::DuplicateCard(*card));
            }
        }
        Ok(Self { cards })
    }

    /// Cards straight off a deck, which never repeats a card.
    pub(crate) fn from_dealt(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn contains_suit(&self, suit: Suit) -> bool {
        self.cards.iter().any(|card| card.suit == suit)
    }

    /// Whether any card other than `except` is of `suit`; a player holding
    /// one must follow the lead with it.
    pub fn contains_suit_except(&self, suit: Suit, except: Card) -> bool {
        self.cards
            .iter()
            .any(|card| card.suit == suit && *card != except)
    }

    /// A copy of this hand without `card`.
    pub fn remove_card(&self, card: Card) -> Result<Hand, RuleError> {
        let index = self
            .cards
            .iter()
            .position(|&held| held == card)
            .ok_or(RuleError::CardNotHeld(card))?;
        let mut cards = self.cards.clone();
        cards.remove(index);
        Ok(Hand { cards })
    }

    /// A copy of this hand with a received card appended.
    pub fn with_card(&self, card: Card) -> Result<Hand, RuleError> {
        if self.contains(card) {
            return Err(RuleError::DuplicateCard(card));
        }
        let mut cards = self.cards.clone();
        cards.push(card);
        Ok(Hand { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The order a hand is shown to its player: Hearts, Spades, Diamonds,
    /// Clubs, low to high within each suit.
    pub fn display_order(&self) -> Vec<Card> {
        let mut sorted = self.cards.clone();
        sorted.sort_by(|a, b| {
            b.suit
                .display_value()
                .cmp(&a.suit.display_value())
                .then(a.rank.cmp(&b.rank))
        });
        sorted
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str("-")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Hand::new());
        }
        let cards = s
            .split('-')
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()
            .map_err(|err| RuleError::encoding("hand", s, err.to_string()))?;
        Hand::from_cards(cards).map_err(|err| RuleError::encoding("hand", s, err.to_string()))
    }
}

crate::impl_encoded_serde!(Hand);

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::error::RuleError;
    use crate::model::card::Card;
    use crate::model::suit::Suit;

    fn hand(encoded: &str) -> Hand {
        encoded.parse().unwrap()
    }

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    #[test]
    fn parses_hyphen_delimited_cards() {
        assert!(hand("").is_empty());
        assert_eq!(hand("3S-5H-TC").len(), 3);
        assert_eq!(hand("3S-5H-TC").to_string(), "3S-5H-TC");
        assert_eq!(hand("ts").to_string(), "TS");
    }

    #[test]
    fn rejects_invalid_segments() {
        for bad in ["not-valid", "3S--5H", "3S-", "3S-3S"] {
            assert!(
                matches!(bad.parse::<Hand>(), Err(RuleError::InvalidEncoding { what: "hand", .. })),
                "{bad:?} should fail"
            );
        }
    }

    #[test]
    fn contains_queries() {
        let held = hand("3S-5H-8D");
        assert!(held.contains(card("3S")));
        assert!(held.contains(card("8D")));
        assert!(!held.contains(card("JC")));
        assert!(held.contains_suit(Suit::Hearts));
        assert!(!held.contains_suit(Suit::Clubs));
    }

    #[test]
    fn contains_suit_except_ignores_the_named_card() {
        let held = hand("3S-5H-8S");
        assert!(!held.contains_suit_except(Suit::Hearts, card("5H")));
        assert!(held.contains_suit_except(Suit::Spades, card("3S")));
        assert!(held.contains_suit_except(Suit::Hearts, card("3S")));
        assert!(!held.contains_suit_except(Suit::Diamonds, card("5H")));
    }

    #[test]
    fn remove_card_returns_new_hand() {
        let held = hand("3S-5H-7D-TC");
        let after = held.remove_card(card("7D")).unwrap();
        assert_eq!(after.to_string(), "3S-5H-TC");
        assert_eq!(held.len(), 4);

        assert_eq!(
            held.remove_card(card("AH")),
            Err(RuleError::CardNotHeld(card("AH")))
        );
        assert!(Hand::new().remove_card(card("3S")).is_err());
        assert!(hand("3S").remove_card(card("3S")).unwrap().is_empty());
    }

    #[test]
    fn with_card_rejects_duplicates() {
        let held = hand("3S");
        assert_eq!(held.with_card(card("5H")).unwrap().to_string(), "3S-5H");
        assert_eq!(
            held.with_card(card("3S")),
            Err(RuleError::DuplicateCard(card("3S")))
        );
    }

    #[test]
    fn display_order_groups_suits_then_ranks() {
        let held = hand("3S-5H-TH-9C-QC-TS-7D-AH");
        let ordered: Vec<String> = held.display_order().iter().map(Card::to_string).collect();
        assert_eq!(ordered, ["5H", "TH", "AH", "3S", "TS", "7D", "9C", "QC"]);
        assert_eq!(held.to_string(), "3S-5H-TH-9C-QC-TS-7D-AH");
    }
}
