use dotenv::dotenv;
use std::{env::var, path::PathBuf};
use tracing::warn;

pub const ENV_MAX_NGRAM: &str = "KEYWORDS_MAX_NGRAM";
pub const ENV_LEXICON_PATH: &str = "KEYWORDS_LEXICON_PATH";
pub const DEFAULT_LOG_FILTER: &str = "goodspoint_keywords=info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub max_ngram: Option<i64>,
    pub lexicon_path: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from the process environment, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_ngram = lookup(ENV_MAX_NGRAM).and_then(|raw| match raw.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(value = %raw, "ignoring unparsable {}", ENV_MAX_NGRAM);
                None
            }
        });

        let lexicon_path = lookup(ENV_LEXICON_PATH)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Self {
            max_ngram,
            lexicon_path,
        }
    }
}
