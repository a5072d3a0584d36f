use thiserror::Error;

use crate::codec::types::ValueKind;

/// Unified error type for the packwire library.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Dynamic dispatch found no encoder for the value's kind.
    #[error("Unsupported Type: {0}")]
    UnsupportedType(ValueKind),

    /// Array element count does not fit in the 32-bit array header.
    #[error("Array Length Out Of Range: {0}")]
    ArrayLengthOutOfRange(usize),
}

/// A specialized `Result` type for packwire operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true if the error was caused by an unencodable value.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Error::UnsupportedType(_))
    }
}

/*
Panic policy:

Recoverable conditions (an unsupported value kind, an oversized array) are returned as
`Result<T, Error>` and propagated with `?`.
Programmer errors (committing more than was reserved) and allocation failure panic.
The library never catches a panic itself.
*/
