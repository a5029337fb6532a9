use thiserror::Error;

/// Authentication failures surfaced to callers.
///
/// `InvalidPin` and `UserNotFound` are deliberately indistinguishable at
/// the API boundary; both map to a generic unauthorized response.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid PIN")]
    InvalidPin,

    #[error("Too many failed attempts, try again later")]
    TooManyAttempts,

    #[error("Unknown user: {0}")]
    UserNotFound(String),

    #[error("Credential hashing failed: {0}")]
    Hashing(String),
}
