use std::{io, path::PathBuf};
use thiserror::Error;

/// Failures on the edges of the keyword engine: lexicon files and batch
/// I/O. Keyword generation itself cannot fail.
#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("failed to read lexicon file {}: {source}", .path.display())]
    LexiconRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid lexicon file {}: {source}", .path.display())]
    LexiconParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode keywords: {0}")]
    Encode(#[from] serde_json::Error),
}
