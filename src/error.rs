use num_bigint::BigInt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported base: {base} (expected 2..=36)")]
    InvalidBase { base: u32 },
    #[error("Invalid digit {} for base {base}", describe_digit(.found))]
    InvalidDigit { found: Option<char>, base: u32 },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Duplicate x coordinate {x} among selected shares")]
    DuplicateXCoordinate { x: BigInt },
    #[error("Not enough shares to interpolate: have {available}, need {required}")]
    InsufficientShares { required: usize, available: usize },
    #[error("Threshold must be at least 1, got {0}")]
    InvalidThreshold(usize),
    #[error("Invalid x coordinate: {0:?}")]
    InvalidCoordinate(String),
    #[error("Malformed share document: {0}")]
    MalformedDocument(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn describe_digit(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => "(empty input)".to_string(),
    }
}
