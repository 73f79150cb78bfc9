use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_PATH: &str = "IPL.csv";
const CACHE_DIR_NAME: &str = ".ipl_insights";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub cache_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup("IPL_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let cache_dir = match lookup("IPL_CACHE_DIR") {
            Some(dir) if dir.trim().is_empty() => {
                return Err(AppError::ConfigError(
                    "IPL_CACHE_DIR is set but empty".to_string(),
                ));
            }
            Some(dir) => PathBuf::from(dir),
            None => Self::default_cache_dir(),
        };

        Ok(Config {
            data_path,
            cache_dir,
        })
    }

    /// Command-line values win over the environment.
    pub fn with_data_path(mut self, data_path: Option<PathBuf>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        self
    }

    pub fn default_cache_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CACHE_DIR_NAME)
    }
}
