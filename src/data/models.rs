use serde::{Deserialize, Serialize};

/// `won_by` value for matches decided by a runs margin.
pub const WON_BY_RUNS: &str = "Runs";

const FIGURE_SEPARATOR: &str = "--";

// One row of the match CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: u32,
    #[serde(default)]
    pub date: Option<String>,
    pub venue: String,
    #[serde(default)]
    pub team1: Option<String>,
    #[serde(default)]
    pub team2: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    pub toss_winner: String,
    pub toss_decision: String,
    #[serde(default)]
    pub first_ings_score: Option<u32>,
    #[serde(default)]
    pub first_ings_wkts: Option<u32>,
    #[serde(default)]
    pub second_ings_score: Option<u32>,
    #[serde(default)]
    pub second_ings_wkts: Option<u32>,
    pub match_winner: String,
    pub won_by: String,
    pub margin: u32,
    pub player_of_the_match: String,
    pub top_scorer: String,
    pub highscore: u32,
    pub best_bowling: String,
    pub best_bowling_figure: String,
}

impl MatchRecord {
    pub fn toss_winner_won(&self) -> bool {
        self.toss_winner == self.match_winner
    }

    pub fn won_by_runs(&self) -> bool {
        self.won_by == WON_BY_RUNS
    }
}

/// A parsed `"<wickets>--<runs>"` bowling figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BowlingFigure {
    pub wickets: u32,
    pub runs: Option<u32>,
    pub raw: String,
}

impl BowlingFigure {
    /// Returns `None` when the separator is missing or the wicket count
    /// before it is not an integer. Runs are informational only and never
    /// cause a parse failure.
    pub fn parse(raw: &str) -> Option<Self> {
        let (wickets, runs) = raw.split_once(FIGURE_SEPARATOR)?;
        let wickets = wickets.trim().parse::<u32>().ok()?;
        let runs = runs.trim().parse::<u32>().ok();

        Some(BowlingFigure {
            wickets,
            runs,
            raw: raw.to_string(),
        })
    }
}

/// A match record together with its parsed bowling figure.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub record: MatchRecord,
    pub figure: BowlingFigure,
}

impl MatchRow {
    pub fn highest_wickets(&self) -> u32 {
        self.figure.wickets
    }
}
