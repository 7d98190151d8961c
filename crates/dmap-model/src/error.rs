use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid region id: {0:?}")]
    InvalidRegionId(String),
    #[error("invalid region code: {0:?}")]
    InvalidRegionCode(String),
    #[error("region name must not be empty")]
    EmptyRegionName,
    #[error("invalid date {value:?}; expected YYYY-MM-DD, M/D/YYYY or M/D/YY")]
    InvalidDate { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
