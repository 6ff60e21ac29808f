use ndarray_stats::errors::MinMaxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaggerError {
    /// Observation sequence or trace the recurrences cannot work on
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Division by a zero (or non-finite) sequence probability
    #[error("numeric domain error: {0}")]
    NumericDomain(String),

    /// Tables that are not 4-state / 5-symbol stochastic matrices
    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("cannot rank tag scores: {0}")]
    Ranking(#[from] MinMaxError),
}

pub type Result<T> = std::result::Result<T, TaggerError>;
