//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::data::DEFAULT_API_URL;

pub const COOKIE_FILE: &str = "cookies.json";
pub const STORAGE_FILE: &str = "storage.json";
pub const LOG_FILE: &str = "trivia.log";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Ten-question trivia rounds in the terminal", long_about = None)]
pub struct Config {
    /// Directory holding the cookie jar, saved scores and the log
    #[arg(short, long, env = "TRIVIA_DATA_DIR", default_value = ".trivia")]
    pub data_dir: PathBuf,

    /// Open Trivia Database endpoint to request questions from
    #[arg(long, env = "TRIVIA_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Log file, defaults to trivia.log inside the data directory
    #[arg(long, env = "TRIVIA_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn cookie_path(&self) -> PathBuf {
        self.data_dir.join(COOKIE_FILE)
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(LOG_FILE))
    }
}
