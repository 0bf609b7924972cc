//! Property tests for the rules engine (pure values, no I/O).

use kaiser_core::model::bid::{Bid, legal_next_bids};
use kaiser_core::model::bidding::BiddingRound;
use kaiser_core::model::card::Card;
use kaiser_core::model::deck::{DECK_SIZE, Deck, HAND_SIZE};
use kaiser_core::model::hand::Hand;
use kaiser_core::model::rank::Rank;
use kaiser_core::model::score::Score;
use kaiser_core::model::seat::Seat;
use kaiser_core::model::suit::{Suit, Trump};
use kaiser_core::model::tally::Tally;
use kaiser_core::model::trick::Trick;
use proptest::prelude::*;
use std::collections::HashSet;

fn card_strategy() -> impl Strategy<Value = Card> {
    (
        prop::sample::select(Rank::ORDERED.to_vec()),
        prop::sample::select(Suit::ALL.to_vec()),
    )
        .prop_map(|(rank, suit)| Card::new(rank, suit))
}

fn seat_strategy() -> impl Strategy<Value = Seat> {
    prop::sample::select(Seat::LOOP.to_vec())
}

fn trump_strategy() -> impl Strategy<Value = Trump> {
    prop::sample::select(Trump::ALL.to_vec())
}

/// Drives a bidding round where each seat picks `choices[i]` (modulo the
/// number of legal bids) from what it may legally bid.
fn bid_round(dealer: Seat, choices: &[usize]) -> BiddingRound {
    let mut round = BiddingRound::new(dealer.next());
    for choice in choices {
        let seat = round.current_turn().unwrap();
        let legal = round.legal_bids(dealer).unwrap();
        let bid = legal[choice % legal.len()];
        round.place_bid(seat, bid).unwrap();
    }
    round
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_card_encoding_roundtrips(card in card_strategy()) {
        let encoded = card.to_string();
        prop_assert_eq!(encoded.parse::<Card>().unwrap(), card);
        prop_assert_eq!(encoded.to_lowercase().parse::<Card>().unwrap(), card);
        prop_assert_eq!(encoded.to_uppercase(), encoded);
    }

    #[test]
    fn prop_trump_encoding_roundtrips(trump in trump_strategy()) {
        prop_assert_eq!(trump.to_string().parse::<Trump>().unwrap(), trump);
    }

    #[test]
    fn prop_bid_encoding_roundtrips(index in 0usize..13) {
        let bid = Bid::LADDER[index];
        prop_assert_eq!(bid.to_string().parse::<Bid>().unwrap(), bid);
        prop_assert_eq!(bid.to_string().to_lowercase().parse::<Bid>().unwrap(), bid);
    }

    /// Dealing always partitions the whole deck into four hands of eight.
    #[test]
    fn prop_deal_partitions_deck(seed in any::<u64>()) {
        let deck = Deck::shuffled_with_seed(seed);
        let standard: HashSet<Card> = Deck::standard().cards().iter().copied().collect();
        let hands = deck.deal();

        let mut seen = HashSet::new();
        for hand in &hands {
            prop_assert_eq!(hand.len(), HAND_SIZE);
            for card in hand.iter() {
                prop_assert!(seen.insert(*card), "card {} dealt twice", card);
            }
        }
        prop_assert_eq!(seen.len(), DECK_SIZE);
        prop_assert_eq!(seen, standard);
    }

    #[test]
    fn prop_hand_encoding_roundtrips(seed in any::<u64>(), take in 0usize..=HAND_SIZE) {
        let dealt = Deck::shuffled_with_seed(seed).deal();
        let hand = Hand::from_cards(dealt[0].cards()[..take].to_vec()).unwrap();
        let encoded = hand.to_string();
        prop_assert_eq!(encoded.parse::<Hand>().unwrap(), hand.clone());
        prop_assert_eq!(encoded.to_lowercase().parse::<Hand>().unwrap(), hand);
    }

    /// Choosing only legal bids keeps the contract bids strictly rising and
    /// never lets a round end with everyone passing.
    #[test]
    fn prop_legal_bidding_is_monotonic(
        dealer in seat_strategy(),
        choices in prop::collection::vec(0usize..13, 4),
    ) {
        let round = bid_round(dealer, &choices);
        let contracts: Vec<Bid> = round.bids().iter().copied().filter(|bid| !bid.is_pass()).collect();
        prop_assert!(contracts.windows(2).all(|pair| pair[0] < pair[1]),
            "contract bids must rise: {:?}", contracts);
        prop_assert!(round.winning_bid_and_seat().is_ok());

        let encoded = round.to_string();
        prop_assert_eq!(encoded.parse::<BiddingRound>().unwrap(), round);
    }

    #[test]
    fn prop_partial_bidding_roundtrips(
        dealer in seat_strategy(),
        choices in prop::collection::vec(0usize..13, 0..4),
    ) {
        let round = bid_round(dealer, &choices);
        prop_assert_eq!(round.to_string().parse::<BiddingRound>().unwrap(), round);
    }

    /// The trick goes to the highest trump if any was played, otherwise to
    /// the highest card of the suit led.
    #[test]
    fn prop_trick_winner_is_highest_trump_or_lead_suit(
        seed in any::<u64>(),
        lead in seat_strategy(),
        trump in trump_strategy(),
    ) {
        let deck = Deck::shuffled_with_seed(seed);
        let mut trick = Trick::new(lead, trump);
        for (ordinal, card) in deck.cards()[..4].iter().enumerate() {
            trick.play_card(lead.offset(ordinal), *card).unwrap();
        }
        let winner = trick.winning_seat().unwrap();
        let (_, winning_card) = trick.plays().find(|(seat, _)| *seat == winner).unwrap();

        let lead_suit = trick.lead_suit().unwrap();
        let governing = match trump.suit() {
            Some(suit) if trick.cards().iter().any(|card| card.suit == suit) => suit,
            _ => lead_suit,
        };
        prop_assert_eq!(winning_card.suit, governing);
        for card in trick.cards().iter().filter(|card| card.suit == governing) {
            prop_assert!(card.rank <= winning_card.rank);
        }
        prop_assert_eq!(trick.to_string().parse::<Trick>().unwrap(), trick);
    }

    #[test]
    fn prop_tally_encoding_roundtrips(count in 0u8..=8, points02 in -40i32..40, points13 in -40i32..40) {
        let encoded = format!("{count}|{points02}|{points13}");
        let tally: Tally = encoded.parse().unwrap();
        prop_assert_eq!(tally.points(), (points02, points13));
        prop_assert_eq!(tally.to_string(), encoded);
    }

    #[test]
    fn prop_score_encoding_roundtrips(
        raised in any::<bool>(),
        entries in prop::collection::vec((-30i32..30, -30i32..30), 0..10),
    ) {
        let pairs: Vec<String> = entries.iter().map(|(a, b)| format!("{a}|{b}")).collect();
        let to_win = if raised { 62 } else { 52 };
        let encoded = format!("{to_win}-{}", pairs.join("||"));
        let score: Score = encoded.parse().unwrap();
        prop_assert_eq!(score.entries(), entries.as_slice());
        let sum = entries.iter().fold((0, 0), |(a, b), (x, y)| (a + x, b + y));
        prop_assert_eq!(score.current_score(), sum);
        prop_assert_eq!(score.to_string(), encoded);
    }
}

#[test]
fn dealer_is_stuck_after_three_passes() {
    let legal = legal_next_bids(&[Bid::PASS], true);
    assert!(!legal.contains(&Bid::PASS));
    assert_eq!(legal.len(), 12);

    let legal = legal_next_bids(&[Bid::PASS], false);
    assert!(legal.contains(&Bid::PASS));
    assert_eq!(legal.len(), 13);
}
