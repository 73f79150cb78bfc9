use crate::data::loader::read_records_from_path;
use crate::data::models::MatchRecord;
use crate::data::table::MatchTable;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Identity of a data source. A cache entry is valid only while this is
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFingerprint {
    pub path: String,
    pub len: u64,
    pub modified: DateTime<Utc>,
}

impl SourceFingerprint {
    pub fn of(path: &Path) -> Result<Self, AppError> {
        let not_found = |e: io::Error| match e.kind() {
            io::ErrorKind::NotFound => AppError::SourceNotFound(path.display().to_string()),
            _ => AppError::Io(e),
        };

        let canonical = fs::canonicalize(path).map_err(not_found)?;
        let metadata = fs::metadata(&canonical).map_err(not_found)?;
        let modified: DateTime<Utc> = metadata.modified()?.into();

        Ok(SourceFingerprint {
            path: canonical.display().to_string(),
            len: metadata.len(),
            modified,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableCache {
    pub source: SourceFingerprint,
    pub cached_at: DateTime<Utc>,
    pub records: Vec<MatchRecord>,
}

impl TableCache {
    pub fn new(source: SourceFingerprint, records: Vec<MatchRecord>) -> Self {
        TableCache {
            source,
            cached_at: Utc::now(),
            records,
        }
    }

    pub fn get_cache_path(cache_dir: &Path, source: &SourceFingerprint) -> PathBuf {
        let name: String = source
            .path
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
            .collect();

        cache_dir.join(format!("{}.json", name.trim_start_matches('_')))
    }

    /// The cached records for `source`, or `None` on a miss. Missing,
    /// unreadable or stale entries are all misses.
    pub fn load(cache_dir: &Path, source: &SourceFingerprint) -> Option<Self> {
        let path = Self::get_cache_path(cache_dir, source);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => {
                debug!("No table cache at {}", path.display());
                return None;
            }
        };

        let cache: TableCache = match serde_json::from_str(&content) {
            Ok(cache) => cache,
            Err(e) => {
                warn!("Ignoring unreadable table cache {}: {}", path.display(), e);
                return None;
            }
        };

        if cache.source != *source {
            info!("Data source changed since {}, cache invalidated", cache.cached_at);
            return None;
        }

        Some(cache)
    }

    pub fn save(&self, cache_dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(cache_dir).map_err(|e| {
            AppError::CacheError(format!("Failed to create cache directory: {}", e))
        })?;

        let path = Self::get_cache_path(cache_dir, &self.source);
        let json = serde_json::to_string(self).map_err(|e| {
            AppError::CacheError(format!("Failed to serialize cache: {}", e))
        })?;

        fs::write(&path, json).map_err(|e| {
            AppError::CacheError(format!("Failed to write cache: {}", e))
        })?;

        Ok(())
    }
}

/// Where a loaded table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    Cache,
    File,
}

/// Loads the table for `data_path`, reusing the parsed records from the
/// cache while the source is unchanged. `refresh` skips the cache read.
pub fn load_table_cached(
    data_path: &Path,
    cache_dir: &Path,
    refresh: bool,
) -> Result<(MatchTable, TableSource), AppError> {
    let source = SourceFingerprint::of(data_path)?;

    if !refresh {
        if let Some(cache) = TableCache::load(cache_dir, &source) {
            debug!("Table cache hit for {}", source.path);
            let table = MatchTable::from_records(cache.records)?;
            return Ok((table, TableSource::Cache));
        }
    }

    let records = read_records_from_path(data_path)?;
    // Parse before caching so a malformed file is never stored.
    let table = MatchTable::from_records(records.clone())?;

    if let Err(e) = TableCache::new(source, records).save(cache_dir) {
        warn!("{}", e);
    }

    Ok((table, TableSource::File))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "match_id,venue,toss_winner,toss_decision,match_winner,won_by,margin,player_of_the_match,top_scorer,highscore,best_bowling,best_bowling_figure\n\
                       1,Eden Gardens,A,Bat,A,Runs,12,P,S,77,B,2--11\n";

    fn write_source(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("IPL.csv");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn second_load_hits_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("cache");
        let data = write_source(dir.path(), CSV);

        let (first, origin) = load_table_cached(&data, &cache_dir, false).unwrap();
        assert_eq!(origin, TableSource::File);

        let (second, origin) = load_table_cached(&data, &cache_dir, false).unwrap();
        assert_eq!(origin, TableSource::Cache);
        assert_eq!(first.rows(), second.rows());
    }

    #[test]
    fn refresh_skips_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("cache");
        let data = write_source(dir.path(), CSV);

        load_table_cached(&data, &cache_dir, false).unwrap();
        let (_, origin) = load_table_cached(&data, &cache_dir, true).unwrap();
        assert_eq!(origin, TableSource::File);
    }

    #[test]
    fn changed_source_invalidates_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("cache");
        let data = write_source(dir.path(), CSV);
        load_table_cached(&data, &cache_dir, false).unwrap();

        let grown = format!("{CSV}2,Wankhede,B,Field,B,Wickets,4,Q,T,64,C,3--25\n");
        write_source(dir.path(), &grown);

        let (table, origin) = load_table_cached(&data, &cache_dir, false).unwrap();
        assert_eq!(origin, TableSource::File);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn corrupt_cache_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let data = write_source(dir.path(), CSV);
        let source = SourceFingerprint::of(&data).unwrap();

        let cache_path = TableCache::get_cache_path(dir.path(), &source);
        fs::write(&cache_path, "{ not json").unwrap();

        assert!(TableCache::load(dir.path(), &source).is_none());
    }

    #[test]
    fn missing_source_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table_cached(&dir.path().join("absent.csv"), dir.path(), false).unwrap_err();
        assert!(matches!(err, AppError::SourceNotFound(_)));
    }

    #[test]
    fn malformed_figure_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("cache");
        let data = write_source(dir.path(), &CSV.replace("2--11", "2/11"));

        let err = load_table_cached(&data, &cache_dir, false).unwrap_err();
        assert!(matches!(err, AppError::MalformedBowlingFigure { .. }));

        let source = SourceFingerprint::of(&data).unwrap();
        assert!(TableCache::load(&cache_dir, &source).is_none());
    }
}
