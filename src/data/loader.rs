use super::models::MatchRecord;
use super::table::MatchTable;
use crate::error::AppError;
use log::{debug, info};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub fn read_records<R: Read>(reader: R) -> Result<Vec<MatchRecord>, AppError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: MatchRecord = result?;
        records.push(record);
    }

    Ok(records)
}

/// Reads the raw records from a CSV file on disk.
pub fn read_records_from_path(path: &Path) -> Result<Vec<MatchRecord>, AppError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::SourceNotFound(path.display().to_string()),
        _ => AppError::Io(e),
    })?;

    debug!("Reading match records from {}", path.display());
    let records = read_records(file)?;
    info!("Loaded {} match records from {}", records.len(), path.display());

    Ok(records)
}

pub fn load_table(path: &Path) -> Result<MatchTable, AppError> {
    let records = read_records_from_path(path)?;
    MatchTable::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::queries::wins_by_team;
    use crate::analysis::tally::Ranked;
    use std::io::Write;

    const HEADER: &str = "match_id,date,venue,team1,team2,stage,toss_winner,toss_decision,first_ings_score,first_ings_wkts,second_ings_score,second_ings_wkts,match_winner,won_by,margin,player_of_the_match,top_scorer,highscore,best_bowling,best_bowling_figure";

    #[test]
    fn reads_full_header() {
        let csv = format!(
            "{HEADER}\n1,\"March 26,2022\",\"Wankhede Stadium, Mumbai\",Chennai,Kolkata,Group,Kolkata,Field,131,5,133,4,Kolkata,Wickets,6,Umesh Yadav,MS Dhoni,50,Dwayne Bravo,3--20\n"
        );
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.match_id, 1);
        assert_eq!(rec.date.as_deref(), Some("March 26,2022"));
        assert_eq!(rec.venue, "Wankhede Stadium, Mumbai");
        assert_eq!(rec.first_ings_score, Some(131));
        assert_eq!(rec.match_winner, "Kolkata");
        assert_eq!(rec.best_bowling_figure, "3--20");
    }

    #[test]
    fn optional_columns_may_be_missing_or_empty() {
        let csv = "match_id,venue,toss_winner,toss_decision,first_ings_score,match_winner,won_by,margin,player_of_the_match,top_scorer,highscore,best_bowling,best_bowling_figure\n\
                   2,Eden Gardens,A,Bat,,A,Runs,12,P,S,77,B,2--11\n";
        let records = read_records(csv.as_bytes()).unwrap();

        assert_eq!(records[0].first_ings_score, None);
        assert_eq!(records[0].team1, None);
        assert_eq!(records[0].margin, 12);
    }

    #[test]
    fn field_whitespace_is_kept() {
        let csv = "match_id,venue,toss_winner,toss_decision,match_winner,won_by,margin,player_of_the_match,top_scorer,highscore,best_bowling,best_bowling_figure\n\
                   1,Eden Gardens,Kolkata,Bat,Kolkata,Runs,12,P,S,77,B,2--11\n\
                   2,Eden Gardens,Kolkata ,Bat,Kolkata ,Runs,9,P,S,40,B, 3 -- 20\n";
        let table = MatchTable::from_records(read_records(csv.as_bytes()).unwrap()).unwrap();

        assert_eq!(table.rows()[1].record.match_winner, "Kolkata ");
        assert_eq!(table.rows()[1].highest_wickets(), 3);

        let wins = wins_by_team(&table.view());
        assert_eq!(
            wins,
            vec![Ranked::new("Kolkata", 1), Ranked::new("Kolkata ", 1)]
        );
    }

    #[test]
    fn missing_required_column_is_csv_error() {
        let csv = "match_id,venue\n1,Eden Gardens\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Csv(_)));
    }

    #[test]
    fn missing_file_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, AppError::SourceNotFound(_)));
    }

    #[test]
    fn load_table_parses_figures() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(
            file,
            "1,,Eden Gardens,A,B,Group,A,Bat,180,6,150,9,A,Runs,30,P,S,88,Bowler,4--16"
        )
        .unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].highest_wickets(), 4);
    }
}
