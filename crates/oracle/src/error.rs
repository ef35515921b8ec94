use thiserror::Error;

/// The different error types that can be returned by the ordering predicates
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Error {
    #[error("NaN is not a valid value")]
    NanValue,
    #[error("second argument must be array-like")]
    NotArrayLike,
    #[error("all arguments must be numbers")]
    NonNumericArgument,
}

/// The category of an [Error]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A precondition on the predicate's arguments wasn't met
    InvalidArgument,
}

impl Error {
    /// Returns the error's category
    ///
    /// All errors are currently caused by invalid arguments, the category allows callers to
    /// handle them without matching on individual variants.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NanValue | Self::NotArrayLike | Self::NonNumericArgument => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// The Result type returned by predicates that can reject their arguments
pub type Result<T> = std::result::Result<T, Error>;
