use thiserror::Error;

/// Errors that can occur while building or modifying boundary values
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Error {
    #[error("'{0}' is not a constructor")]
    NotAConstructor(String),
    #[error("a {0} can't be converted into an object")]
    CantBox(&'static str),
    #[error("setting the prototype would create a cycle")]
    CyclicPrototype,
    #[error("invalid date string '{input}': {reason}")]
    InvalidDate { input: String, reason: String },
}

/// The Result type used by the runtime
pub type Result<T> = std::result::Result<T, Error>;
