use crate::data::table::{MatchTable, MatchView};
use log::debug;
use std::collections::HashSet;

/// Rows whose `match_winner` is one of `teams`. An empty selection
/// yields an empty view.
pub fn filter_by_winners<'a, S: AsRef<str>>(table: &'a MatchTable, teams: &[S]) -> MatchView<'a> {
    let selected: HashSet<&str> = teams.iter().map(|t| t.as_ref()).collect();

    let rows = table
        .rows()
        .iter()
        .filter(|row| selected.contains(row.record.match_winner.as_str()))
        .collect::<Vec<_>>();

    debug!(
        "Team filter kept {} of {} rows ({} teams selected)",
        rows.len(),
        table.len(),
        selected.len()
    );

    MatchView::new(rows)
}

/// Distinct match winners in order of first appearance.
pub fn team_options(table: &MatchTable) -> Vec<String> {
    let mut seen = HashSet::new();
    table
        .records()
        .filter(|rec| seen.insert(rec.match_winner.as_str()))
        .map(|rec| rec.match_winner.clone())
        .collect()
}
