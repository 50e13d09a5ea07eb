use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashIdError {
    #[error("negative numbers are not supported: {0}")]
    NegativeNumber(i64),
}
