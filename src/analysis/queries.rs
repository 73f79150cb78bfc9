use super::tally::{Ranked, Tally};
use crate::data::models::MatchRecord;
use crate::data::table::MatchView;
use serde::Serialize;

pub const TOP_PLAYERS_LIMIT: usize = 10;
pub const TOP_SCORERS_LIMIT: usize = 2;
pub const TOP_BOWLERS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinMargin {
    pub match_winner: String,
    pub margin: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreLine {
    pub top_scorer: String,
    pub highscore: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BowlingLine {
    pub best_bowling: String,
    pub best_bowling_figure: String,
}

/// Wins per team, most wins first. Meant for the team-filtered view.
pub fn wins_by_team(view: &MatchView) -> Vec<Ranked<usize>> {
    let mut tally = Tally::new();
    for row in view.iter() {
        tally.add(&row.record.match_winner, 1);
    }
    tally.into_ranked()
}

pub fn toss_decision_distribution(view: &MatchView) -> Vec<Ranked<usize>> {
    let mut tally = Tally::new();
    for row in view.iter() {
        tally.add(&row.record.toss_decision, 1);
    }
    tally.into_entries()
}

/// Percentage of matches won by the toss winner, rounded to two decimals.
/// `None` for an empty view.
pub fn toss_win_percentage(view: &MatchView) -> Option<f64> {
    if view.is_empty() {
        return None;
    }

    let matches = view.iter().filter(|row| row.record.toss_winner_won()).count();
    let percentage = (matches as f64 * 100.0) / view.len() as f64;
    Some(round_to(percentage, 2))
}

pub fn win_margin_type_distribution(view: &MatchView) -> Vec<Ranked<usize>> {
    let mut tally = Tally::new();
    for row in view.iter() {
        tally.add(&row.record.won_by, 1);
    }
    tally.into_entries()
}

pub fn top_players_of_match(view: &MatchView) -> Vec<Ranked<usize>> {
    let mut tally = Tally::new();
    for row in view.iter() {
        tally.add(&row.record.player_of_the_match, 1);
    }
    tally.top(TOP_PLAYERS_LIMIT)
}

/// Total `highscore` runs per top scorer.
pub fn top_scorers(view: &MatchView) -> Vec<Ranked<u64>> {
    let mut tally = Tally::new();
    for row in view.iter() {
        tally.add(&row.record.top_scorer, u64::from(row.record.highscore));
    }
    tally.top(TOP_SCORERS_LIMIT)
}

/// Total best-figure wickets per bowler.
pub fn top_bowlers(view: &MatchView) -> Vec<Ranked<u64>> {
    let mut tally = Tally::new();
    for row in view.iter() {
        tally.add(&row.record.best_bowling, u64::from(row.highest_wickets()));
    }
    tally.top(TOP_BOWLERS_LIMIT)
}

pub fn venue_distribution(view: &MatchView) -> Vec<Ranked<usize>> {
    let mut tally = Tally::new();
    for row in view.iter() {
        tally.add(&row.record.venue, 1);
    }
    tally.into_ranked()
}

/// Largest runs margin; the earliest row wins a tie.
pub fn biggest_win_by_runs(view: &MatchView) -> Option<WinMargin> {
    let mut best: Option<&MatchRecord> = None;

    for row in view.iter().filter(|row| row.record.won_by_runs()) {
        match best {
            Some(current) if current.margin >= row.record.margin => {}
            _ => best = Some(&row.record),
        }
    }

    best.map(|rec| WinMargin {
        match_winner: rec.match_winner.clone(),
        margin: rec.margin,
    })
}

/// Every row whose `highscore` equals the maximum.
pub fn highest_individual_scores(view: &MatchView) -> Vec<ScoreLine> {
    let Some(max) = view.iter().map(|row| row.record.highscore).max() else {
        return Vec::new();
    };

    view.iter()
        .filter(|row| row.record.highscore == max)
        .map(|row| ScoreLine {
            top_scorer: row.record.top_scorer.clone(),
            highscore: row.record.highscore,
        })
        .collect()
}

/// Every row whose wicket count equals the maximum.
pub fn best_bowling_figures(view: &MatchView) -> Vec<BowlingLine> {
    let Some(max) = view.iter().map(|row| row.highest_wickets()).max() else {
        return Vec::new();
    };

    view.iter()
        .filter(|row| row.highest_wickets() == max)
        .map(|row| BowlingLine {
            best_bowling: row.record.best_bowling.clone(),
            best_bowling_figure: row.figure.raw.clone(),
        })
        .collect()
}

/// Rounds half to even at `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
