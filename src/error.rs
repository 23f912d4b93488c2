use thiserror::Error;

/// Errors surfaced by the storage and configuration layers.
///
/// The playback engine itself never returns these; its commands report
/// rejected calls through outcome enums instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("history database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// Tempo outside the supported range or not a finite number.
    #[error("tempo must be between {min} and {max} seconds, got {0}", min = crate::metrics::TEMPO_MIN, max = crate::metrics::TEMPO_MAX)]
    InvalidTempo(f64),

    #[error("word list is empty")]
    EmptyWordList,

    #[error("invalid word list: {0}")]
    InvalidWordList(String),

    #[error("no word list with id '{0}'")]
    UnknownList(String),
}

pub type Result<T> = std::result::Result<T, Error>;
