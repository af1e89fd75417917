use thiserror::Error;

/// Errors raised while parsing core domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown match mode: {0} (expected {modes})", modes = crate::MatchMode::ALL_VARIANTS_STR)]
    InvalidMatchMode(String),

    #[error("unknown direction: {0} (expected {dirs})", dirs = crate::Direction::ALL_VARIANTS_STR)]
    InvalidDirection(String),
}
