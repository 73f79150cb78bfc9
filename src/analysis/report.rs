use super::filter::filter_by_winners;
use super::queries::{self, BowlingLine, ScoreLine, WinMargin};
use super::tally::Ranked;
use crate::data::table::MatchTable;
use log::debug;
use serde::Serialize;

/// Every dashboard section, computed once for one team selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub total_matches: usize,
    pub selected_teams: Vec<String>,
    pub filtered_matches: usize,
    pub wins_by_team: Vec<Ranked<usize>>,
    pub toss_decisions: Vec<Ranked<usize>>,
    pub toss_win_percentage: Option<f64>,
    pub win_margin_types: Vec<Ranked<usize>>,
    pub top_players_of_match: Vec<Ranked<usize>>,
    pub top_scorers: Vec<Ranked<u64>>,
    pub top_bowlers: Vec<Ranked<u64>>,
    pub venues: Vec<Ranked<usize>>,
    pub biggest_win_by_runs: Option<WinMargin>,
    pub highest_individual_scores: Vec<ScoreLine>,
    pub best_bowling_figures: Vec<BowlingLine>,
}

impl DashboardReport {
    /// Only the wins-by-team section honours the team selection; the rest
    /// always describe the whole table.
    pub fn build(table: &MatchTable, teams: &[String]) -> Self {
        let filtered = filter_by_winners(table, teams);
        let full = table.view();

        debug!(
            "Building dashboard report over {} rows ({} after team filter)",
            full.len(),
            filtered.len()
        );

        DashboardReport {
            total_matches: full.len(),
            selected_teams: teams.to_vec(),
            filtered_matches: filtered.len(),
            wins_by_team: queries::wins_by_team(&filtered),
            toss_decisions: queries::toss_decision_distribution(&full),
            toss_win_percentage: queries::toss_win_percentage(&full),
            win_margin_types: queries::win_margin_type_distribution(&full),
            top_players_of_match: queries::top_players_of_match(&full),
            top_scorers: queries::top_scorers(&full),
            top_bowlers: queries::top_bowlers(&full),
            venues: queries::venue_distribution(&full),
            biggest_win_by_runs: queries::biggest_win_by_runs(&full),
            highest_individual_scores: queries::highest_individual_scores(&full),
            best_bowling_figures: queries::best_bowling_figures(&full),
        }
    }
}
