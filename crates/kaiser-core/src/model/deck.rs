use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::array;

pub const DECK_SIZE: usize = 32;
pub const HAND_SIZE: usize = 8;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 28 full-suit cards (8 through Ace) followed by the four specials.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::FULL_SUIT {
                cards.push(Card::new(rank, suit));
            }
        }
        cards.extend(Card::SPECIALS);
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Deals round-robin: card `i` goes to seat `i % 4`.
    pub fn deal(&self) -> [Hand; 4] {
        array::from_fn(|seat| {
            let cards = self
                .cards
                .iter()
                .skip(seat)
                .step_by(Seat::LOOP.len())
                .copied()
                .collect();
            Hand::from_dealt(cards)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DECK_SIZE, Deck, HAND_SIZE};
    use crate::model::card::Card;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_32_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.cards().len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), DECK_SIZE);
        for special in Card::SPECIALS {
            assert!(unique.contains(&special), "{special} missing");
        }
        for code in ["8H", "AH", "TC", "JD", "QS"] {
            assert!(unique.contains(&code.parse().unwrap()), "{code} missing");
        }
        for absent in ["7H", "7S", "3H", "5S"] {
            assert!(!unique.contains(&absent.parse().unwrap()), "{absent} present");
        }
    }

    #[test]
    fn shuffle_with_seed_is_deterministic() {
        let deck_a = Deck::shuffled_with_seed(42);
        let deck_b = Deck::shuffled_with_seed(42);
        assert_eq!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn shuffle_with_different_seeds_differs() {
        let deck_a = Deck::shuffled_with_seed(1);
        let deck_b = Deck::shuffled_with_seed(2);
        assert_ne!(deck_a.cards(), deck_b.cards());
    }

    #[test]
    fn deal_is_round_robin() {
        let deck = Deck::standard();
        let hands = deck.deal();
        for (seat, hand) in hands.iter().enumerate() {
            assert_eq!(hand.len(), HAND_SIZE);
            assert_eq!(hand.cards()[0], deck.cards()[seat]);
            assert_eq!(hand.cards()[1], deck.cards()[seat + 4]);
        }
    }
}
