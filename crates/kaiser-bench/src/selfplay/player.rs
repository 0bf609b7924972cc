use kaiser_core::model::bid::Bid;
use kaiser_core::model::card::Card;
use kaiser_core::model::hand::Hand;
use kaiser_core::model::suit::{Suit, Trump};
use kaiser_core::model::trick::Trick;
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// A seat that picks uniformly among its legal options.
///
/// Every choice draws from the match RNG, so a run replays exactly for a
/// given seed.
pub struct RandomPlayer<'a> {
    rng: &'a mut StdRng,
}

impl<'a> RandomPlayer<'a> {
    pub fn new(rng: &'a mut StdRng) -> Self {
        Self { rng }
    }

    pub fn choose_bid(&mut self, legal: &[Bid]) -> Option<Bid> {
        legal.choose(&mut *self.rng).copied()
    }

    pub fn choose_pass(&mut self, hand: &Hand) -> Option<Card> {
        hand.cards().choose(&mut *self.rng).copied()
    }

    /// No-trump contracts have no trump to call; otherwise the caller names
    /// its longest suit, falling back to a random suit on a tie for longest.
    pub fn choose_trump(&mut self, bid: Bid, hand: &Hand) -> Trump {
        if bid.is_no_trump() {
            return Trump::NoTrump;
        }
        let length = |suit: Suit| hand.iter().filter(|card| card.suit == suit).count();
        let longest = Suit::ALL.iter().map(|suit| length(*suit)).max().unwrap_or(0);
        let candidates: Vec<Suit> = Suit::ALL
            .into_iter()
            .filter(|suit| length(*suit) == longest)
            .collect();
        let index = self.rng.gen_range(0..candidates.len());
        Trump::from(candidates[index])
    }

    pub fn choose_play(&mut self, hand: &Hand, trick: &Trick) -> Option<Card> {
        legal_plays(hand, trick).choose(&mut *self.rng).copied()
    }
}

/// Cards `hand` may play into `trick`: anything when leading, otherwise a
/// card of the led suit if the hand holds one.
pub fn legal_plays(hand: &Hand, trick: &Trick) -> Vec<Card> {
    match trick.lead_suit() {
        Some(lead) if hand.contains_suit(lead) => hand
            .iter()
            .copied()
            .filter(|card| card.suit == lead)
            .collect(),
        _ => hand.cards().to_vec(),
    }
}
