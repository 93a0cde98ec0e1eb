//! Error types for sqlego

use thiserror::Error;

/// Result type alias for statement construction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing an INSERT or UPDATE.
///
/// Rendering never fails; malformed predicates render to empty text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Column and value lists of an INSERT or UPDATE differ in length
    #[error("column/value length mismatch: {columns} columns, {values} values")]
    LengthMismatch { columns: usize, values: usize },
}

impl Error {
    /// Check if this is a column/value length mismatch
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::LengthMismatch {
            columns: 2,
            values: 1,
        };
        assert_eq!(
            "column/value length mismatch: 2 columns, 1 values",
            err.to_string()
        );
        assert!(err.is_length_mismatch());
    }
}
