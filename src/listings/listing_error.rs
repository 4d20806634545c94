use thiserror::Error;

/// Failures of the one outbound listing call. Any of them sends the
/// coordinator down the fallback path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("listing unavailable: {0}")]
    Unavailable(String),
    #[error("invalid owner identifier: {0:?}")]
    InvalidOwner(String),
    #[error("listing response could not be decoded: {0}")]
    Decode(String),
}
