use std::fmt;

/// Sentinel used as the "actual" type name when retrieval is attempted on an
/// empty box.
pub(crate) const EMPTY_CONTAINER: &str = "empty container";

/// Errors that can occur when using TypedBox or SharedBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    /// Attempted to retrieve a value with a type that doesn't match what was
    /// stored. `actual` is `"empty container"` when nothing was stored at all.
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    /// Failed to acquire the lock on a shared box
    LockError,
}

impl BoxError {
    pub(crate) fn mismatch(expected: &'static str, actual: &'static str) -> Self {
        BoxError::TypeMismatch { expected, actual }
    }

    pub(crate) fn empty(expected: &'static str) -> Self {
        BoxError::TypeMismatch {
            expected,
            actual: EMPTY_CONTAINER,
        }
    }
}

impl fmt::Display for BoxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoxError::TypeMismatch { expected, actual } => {
                write!(f, "expected type {}, but got type {}", expected, actual)
            }
            BoxError::LockError => write!(f, "Failed to acquire lock"),
        }
    }
}

impl std::error::Error for BoxError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = BoxError::mismatch("f64", "i32");
        assert_eq!(err.to_string(), "expected type f64, but got type i32");

        let err = BoxError::empty("i32");
        assert_eq!(
            err.to_string(),
            "expected type i32, but got type empty container"
        );

        assert_eq!(BoxError::LockError.to_string(), "Failed to acquire lock");
    }
}
