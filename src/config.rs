use crate::error::AppError;
use std::env;
use std::path::PathBuf;

const DEFAULT_LANG: &str = "EN";
const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub lang: String,
    pub top_n: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("DRAFT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());

        let lang = env::var("DRAFT_LANG")
            .map(|l| l.trim().to_uppercase())
            .unwrap_or_else(|_| DEFAULT_LANG.to_string());

        let top_n = match env::var("DRAFT_TOP_N") {
            Ok(raw) => raw.trim().parse::<usize>().map_err(|_| {
                AppError::ConfigError(format!("DRAFT_TOP_N must be a positive integer, got '{}'", raw))
            })?,
            Err(_) => DEFAULT_TOP_N,
        };

        Ok(Config {
            data_dir,
            lang,
            top_n,
        })
    }

    /// `./data` when present, otherwise `~/.wr_draft/data`.
    pub fn default_data_dir() -> PathBuf {
        let local = PathBuf::from("data");
        if local.is_dir() {
            return local;
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wr_draft")
            .join("data")
    }
}
