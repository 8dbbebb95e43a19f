use thiserror::Error;

use crate::Seconds;

#[derive(Error, Debug)]
pub enum BakeError {
    #[error("Thresholds must be strictly increasing, got {low}, {mid}, {high}, {max}")]
    UnorderedThresholds {
        low: Seconds,
        mid: Seconds,
        high: Seconds,
        max: Seconds,
    },
    #[error("Malformed threshold table: {0:?}")]
    MalformedThresholds(String),
    #[error("Invalid bake config")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, BakeError>;
