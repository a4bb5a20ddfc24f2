use thiserror::Error;

/// Every validation failure in this crate is an `InvalidArgument`: a key
/// length below the minimum, a cipher token that is not a decimal integer,
/// or a decrypted value that maps to no character. Validation errors are
/// fatal to the call; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
