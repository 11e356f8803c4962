use thiserror::Error;

/// Errors raised at the library boundary (parsing codes, loading catalogs).
///
/// The scoring functions themselves are total and never fail; absence of
/// data degrades to an unsuited/zero score instead of an error.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("unknown position code: {0}")]
    UnknownPosition(String),

    #[error("unknown formation id: {0}")]
    UnknownFormation(String),

    #[error("rating {found} out of range (expected 0..={max})")]
    RatingOutOfRange { found: u8, max: u8 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
