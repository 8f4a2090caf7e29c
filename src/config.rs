use std::path::PathBuf;

pub const DB_FILE_VAR: &str = "MOVIE_DB_FILE";
pub const EXPORT_FILE_VAR: &str = "MOVIE_EXPORT_FILE";

const DEFAULT_DB_FILE: &str = "movie.json";
const DEFAULT_EXPORT_FILE: &str = "movies.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub db_file: PathBuf,
    pub export_file: String,
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Config {
            db_file: non_blank(DB_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE)),
            export_file: non_blank(EXPORT_FILE_VAR)
                .unwrap_or_else(|| DEFAULT_EXPORT_FILE.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_lookup(|_| None)
    }
}
