mod player;

pub use player::{RandomPlayer, legal_plays};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use kaiser_core::RuleError;
use kaiser_core::game::record::GameRecord;
use kaiser_core::model::bid::Bid;
use kaiser_core::model::bidding::BiddingRound;
use kaiser_core::model::deck::Deck;
use kaiser_core::model::passing::PassingRound;
use kaiser_core::model::score::HandResult;
use kaiser_core::model::seat::{Seat, Team};
use kaiser_core::model::suit::Trump;
use kaiser_core::model::tally::Tally;
use kaiser_core::model::trick::Trick;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, info_span, warn};

use crate::config::{BenchConfig, ResolvedOutputs};
use crate::summary::{SummaryCollector, SummaryError};

/// Redeals allowed in a row before a match is abandoned.
const MAX_CONSECUTIVE_REDEALS: usize = 16;

/// Plays seeded matches between four random legal players.
pub struct SelfPlayRunner {
    config: BenchConfig,
    outputs: ResolvedOutputs,
}

/// What a run produced and where it was written.
#[derive(Debug)]
pub struct RunSummary {
    pub matches_played: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
    pub stats: SummaryCollector,
}

/// The outcome of dealing and playing one hand.
enum HandOutcome {
    Scored {
        result: HandResult,
        trump: Trump,
        bid_seat: Seat,
    },
    Redeal,
}

#[derive(Serialize)]
struct HandLogRow<'a> {
    run_id: &'a str,
    match_index: usize,
    match_seed: u64,
    hand_index: usize,
    dealer: Seat,
    passing: Option<&'a PassingRound>,
    bidding: &'a BiddingRound,
    winning_bid: Bid,
    bid_seat: Seat,
    bid_team: Team,
    trump: Trump,
    tally: &'a Tally,
    made: bool,
    delta: [i32; 2],
    score: [i32; 2],
    winner: Option<Team>,
}

impl SelfPlayRunner {
    pub fn new(config: BenchConfig, outputs: ResolvedOutputs) -> Self {
        Self { config, outputs }
    }

    /// Plays every configured match, streaming one JSONL row per scored hand.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_md.parent())?;

        let seed = self.config.deals.seed.unwrap_or(0);
        let run_span = info_span!("selfplay", run_id = %self.config.run_id, seed);
        let _run = run_span.enter();

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut stats = SummaryCollector::new();
        let mut rows_written = 0usize;

        for match_index in 0..self.config.deals.matches {
            let match_seed = rng.next_u64();
            rows_written +=
                self.play_match(&mut writer, &mut stats, match_index, match_seed)?;
        }

        writer.flush()?;
        stats.write_markdown(&self.config.run_id, &self.outputs.summary_md)?;

        Ok(RunSummary {
            matches_played: stats.matches,
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_md.clone(),
            stats,
        })
    }

    fn play_match(
        &self,
        writer: &mut BufWriter<File>,
        stats: &mut SummaryCollector,
        match_index: usize,
        match_seed: u64,
    ) -> Result<usize, RunnerError> {
        let match_span = info_span!("match", match_index, match_seed);
        let _match = match_span.enter();

        let mut rng = StdRng::seed_from_u64(match_seed);
        // Dealing advances the dealer first, so North deals the opening hand.
        let mut record = GameRecord::fresh(Seat::West, self.config.rules);
        let mut rows_written = 0usize;
        let mut hand_index = 0usize;
        let mut redeals_in_a_row = 0usize;

        while hand_index < self.config.deals.max_hands_per_match {
            match play_hand(&mut record, &mut rng)? {
                HandOutcome::Redeal => {
                    stats.record_redeal();
                    redeals_in_a_row += 1;
                    warn!(match_index, dealer = record.dealer.index(), "all passed; redealing");
                    if redeals_in_a_row >= MAX_CONSECUTIVE_REDEALS {
                        return Err(RunnerError::game(format!(
                            "match {match_index} redealt {redeals_in_a_row} times in a row"
                        )));
                    }
                }
                HandOutcome::Scored {
                    result,
                    trump,
                    bid_seat,
                } => {
                    redeals_in_a_row = 0;
                    stats.record_hand(&result);
                    let (score02, score13) = record.score.current_score();
                    let row = HandLogRow {
                        run_id: &self.config.run_id,
                        match_index,
                        match_seed,
                        hand_index,
                        dealer: record.dealer,
                        passing: record.passing.as_ref(),
                        bidding: &record.bidding,
                        winning_bid: result.bid,
                        bid_seat,
                        bid_team: result.bid_team,
                        trump,
                        tally: &record.tally,
                        made: result.made,
                        delta: [result.delta.0, result.delta.1],
                        score: [score02, score13],
                        winner: result.winner,
                    };
                    serde_json::to_writer(&mut *writer, &row)?;
                    writer.write_all(b"\n")?;
                    rows_written += 1;
                    hand_index += 1;

                    if result.winner.is_some() {
                        record.complete = true;
                        break;
                    }
                }
            }
        }

        let winner = record.score.winner();
        info!(
            match_index,
            hands = hand_index,
            score = %record.score,
            complete = record.complete,
            "match finished"
        );
        stats.record_match(winner);
        Ok(rows_written)
    }
}

/// Deals, passes, bids and plays one hand on `record`, scoring it into the
/// record's running score.
fn play_hand(record: &mut GameRecord, rng: &mut StdRng) -> Result<HandOutcome, RunnerError> {
    record.dealer = record.dealer.next();
    let lead = record.dealer.next();
    record.hands = Deck::shuffled(rng).deal();
    record.bidding = BiddingRound::new(lead);
    record.passing = None;
    record.current_trick = None;
    record.last_trick = None;
    record.tally = Tally::new();

    if record.rules.pass_card {
        exchange_passes(record, lead, rng)?;
    }

    let mut player = RandomPlayer::new(rng);
    while !record.bidding.is_done() {
        let seat = record.bidding.current_turn()?;
        let legal = record.bidding.legal_bids(record.dealer)?;
        let bid = player
            .choose_bid(&legal)
            .ok_or_else(|| RunnerError::game(format!("no legal bid for seat {seat}")))?;
        record.bidding.place_bid(seat, bid)?;
    }

    let (bid, bid_seat) = match record.bidding.winning_bid_and_seat() {
        Ok(winning) => winning,
        Err(RuleError::AllPassed) => return Ok(HandOutcome::Redeal),
        Err(err) => return Err(err.into()),
    };
    let trump = player.choose_trump(bid, record.hand(bid_seat));

    let mut trick_lead = bid_seat;
    while !record.tally.is_done() {
        let mut trick = Trick::new(trick_lead, trump);
        while !trick.is_done() {
            let seat = trick.current_turn()?;
            let hand = &record.hands[seat.index()];
            let card = player.choose_play(hand, &trick).ok_or_else(|| {
                RunnerError::game(format!("seat {seat} has no card to play"))
            })?;
            record.hands[seat.index()] = hand.remove_card(card)?;
            trick.play_card(seat, card)?;
            record.current_trick = Some(trick.clone());
        }
        record.tally.add_trick(&trick)?;
        trick_lead = trick.winning_seat()?;
        record.current_trick = None;
        record.last_trick = Some(trick);
    }

    let result = record.score.add_tally(&record.bidding, &record.tally)?;
    Ok(HandOutcome::Scored {
        result,
        trump,
        bid_seat,
    })
}

/// Each seat gives one card to its partner, passing in turn from `lead`.
fn exchange_passes(
    record: &mut GameRecord,
    lead: Seat,
    rng: &mut StdRng,
) -> Result<(), RunnerError> {
    let mut passing = PassingRound::new(lead);
    let mut player = RandomPlayer::new(rng);
    while !passing.is_done() {
        let seat = passing.current_turn()?;
        let hand = &record.hands[seat.index()];
        let card = player
            .choose_pass(hand)
            .ok_or_else(|| RunnerError::game(format!("seat {seat} has no card to pass")))?;
        record.hands[seat.index()] = hand.remove_card(card)?;
        passing.pass_card(seat, card)?;
    }
    for seat in Seat::LOOP {
        let received = passing.from_player(seat.partner())?;
        record.hands[seat.index()] = record.hands[seat.index()].with_card(received)?;
    }
    record.passing = Some(passing);
    Ok(())
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize log row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("rules engine rejected a move: {0}")]
    Rules(#[from] RuleError),
    #[error("game execution failed: {message}")]
    Game { message: String },
    #[error("summary error: {0}")]
    Summary(#[from] SummaryError),
}

impl RunnerError {
    fn game(message: String) -> Self {
        RunnerError::Game { message }
    }
}
