use std::fs;
use std::path::Path;

use kaiser_core::model::score::HandResult;
use kaiser_core::model::seat::Team;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Counters accumulated over a run and rendered as a Markdown table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryCollector {
    pub matches: usize,
    pub hands: usize,
    pub redeals: usize,
    pub wins: [usize; 2],
    pub undecided: usize,
    pub contracts: [usize; 2],
    pub made: [usize; 2],
    pub no_trump_contracts: usize,
}

impl SummaryCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hand(&mut self, result: &HandResult) {
        self.hands += 1;
        let team = result.bid_team.index();
        self.contracts[team] += 1;
        if result.made {
            self.made[team] += 1;
        }
        if result.bid.is_no_trump() {
            self.no_trump_contracts += 1;
        }
    }

    pub fn record_redeal(&mut self) {
        self.redeals += 1;
    }

    pub fn record_match(&mut self, winner: Option<Team>) {
        self.matches += 1;
        match winner {
            Some(team) => self.wins[team.index()] += 1,
            None => self.undecided += 1,
        }
    }

    pub fn average_hands_per_match(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.hands as f64 / self.matches as f64
        }
    }

    pub fn render_markdown(&self, run_id: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("# Self-play Summary: {run_id}\n\n"));
        out.push_str(&format!(
            "Matches: {} ({} undecided at the hand limit)\n\n",
            self.matches, self.undecided
        ));
        out.push_str(&format!(
            "Hands scored: {} (avg {:.2} per match), redeals: {}, no-trump contracts: {}\n\n",
            self.hands,
            self.average_hands_per_match(),
            self.redeals,
            self.no_trump_contracts
        ));
        out.push_str("| Team | Match wins | Contracts | Made | Missed | Make % |\n");
        out.push_str("|------|------------|-----------|------|--------|--------|\n");
        for team in Team::BOTH {
            let index = team.index();
            let contracts = self.contracts[index];
            let made = self.made[index];
            let rate = if contracts == 0 {
                0.0
            } else {
                made as f64 / contracts as f64 * 100.0
            };
            out.push_str(&format!(
                "| {team} | {wins} | {contracts} | {made} | {missed} | {rate:.1}% |\n",
                wins = self.wins[index],
                missed = contracts - made,
            ));
        }
        out
    }

    pub fn write_markdown(&self, run_id: &str, path: impl AsRef<Path>) -> Result<(), SummaryError> {
        fs::write(path.as_ref(), self.render_markdown(run_id)).map_err(|source| {
            SummaryError::Io {
                context: "writing summary markdown",
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SummaryCollector;
    use kaiser_core::model::score::HandResult;
    use kaiser_core::model::seat::Team;

    fn result(team: Team, bid: &str, made: bool) -> HandResult {
        HandResult {
            bid_team: team,
            bid: bid.parse().unwrap(),
            made,
            delta: (0, 0),
            winner: None,
        }
    }

    #[test]
    fn counts_contracts_per_team() {
        let mut summary = SummaryCollector::new();
        summary.record_hand(&result(Team::NorthSouth, "8", true));
        summary.record_hand(&result(Team::NorthSouth, "9N", false));
        summary.record_hand(&result(Team::EastWest, "7", true));
        summary.record_match(Some(Team::EastWest));
        summary.record_match(None);

        assert_eq!(summary.contracts, [2, 1]);
        assert_eq!(summary.made, [1, 1]);
        assert_eq!(summary.no_trump_contracts, 1);
        assert_eq!(summary.wins, [0, 1]);
        assert_eq!(summary.undecided, 1);
        assert!((summary.average_hands_per_match() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn markdown_lists_both_teams() {
        let mut summary = SummaryCollector::new();
        summary.record_hand(&result(Team::EastWest, "A", false));
        summary.record_match(Some(Team::NorthSouth));
        let markdown = summary.render_markdown("demo");
        assert!(markdown.starts_with("# Self-play Summary: demo"));
        assert!(markdown.contains("| 0/2 | 1 | 0 | 0 | 0 | 0.0% |"));
        assert!(markdown.contains("| 1/3 | 0 | 1 | 0 | 1 | 0.0% |"));
    }
}
