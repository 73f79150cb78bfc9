use super::models::{BowlingFigure, MatchRecord, MatchRow};
use crate::error::AppError;
use log::debug;

/// The loaded match table. Built once per session and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct MatchTable {
    rows: Vec<MatchRow>,
}

impl MatchTable {
    /// Parses every bowling figure up front. The first malformed figure
    /// fails the whole table; rows are never skipped or defaulted.
    pub fn from_records(records: Vec<MatchRecord>) -> Result<Self, AppError> {
        let mut rows = Vec::with_capacity(records.len());

        for (idx, record) in records.into_iter().enumerate() {
            let figure = BowlingFigure::parse(&record.best_bowling_figure).ok_or_else(|| {
                AppError::MalformedBowlingFigure {
                    row: idx + 1,
                    match_id: record.match_id,
                    value: record.best_bowling_figure.clone(),
                }
            })?;
            rows.push(MatchRow { record, figure });
        }

        debug!("Built match table with {} rows", rows.len());
        Ok(MatchTable { rows })
    }

    pub fn rows(&self) -> &[MatchRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &MatchRecord> {
        self.rows.iter().map(|r| &r.record)
    }

    /// A view over every row.
    pub fn view(&self) -> MatchView<'_> {
        MatchView {
            rows: self.rows.iter().collect(),
        }
    }
}

/// Borrowed subset of a [`MatchTable`], in table order.
#[derive(Debug, Clone, Default)]
pub struct MatchView<'a> {
    rows: Vec<&'a MatchRow>,
}

impl<'a> MatchView<'a> {
    pub fn new(rows: Vec<&'a MatchRow>) -> Self {
        MatchView { rows }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a MatchRow> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
