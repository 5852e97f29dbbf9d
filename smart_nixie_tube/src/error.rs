use core::result::Result as CoreResult;
use thiserror::Error;

pub type Result<T> = CoreResult<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied a value that violates a precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Channel value outside what the tube hardware accepts
    #[error("{field} must be between 0-255, got {value}")]
    OutOfRange { field: &'static str, value: i64 },
    /// Requested number has more digits than the chain has tubes
    #[error("not enough tubes to display all digits of {number}")]
    NotEnoughTubes { number: i64 },
    /// Serial port missing, could not be opened, or used after close
    #[error("transport unavailable: {0}")]
    TransportUnavailable(String),
    /// I/O failure while flushing or writing a frame
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
}
