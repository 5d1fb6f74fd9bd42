//! Error types for the integer arrays.
//!
//! Only contract violations are errors. Absence of a value is reported
//! through sentinels by [`IntegerArrayList::index_of`] and
//! [`search`](super::search), never through this type.
//!
//! [`IntegerArrayList::index_of`]: super::IntegerArrayList::index_of

/// Errors raised by [`IntegerArrayList`](super::IntegerArrayList) operations.
///
/// # Examples
///
/// ```rust
/// use intarray::arrays::{ArrayError, IntegerArrayList};
///
/// let list = IntegerArrayList::new();
/// assert_eq!(
///     list.get(0),
///     Err(ArrayError::OutOfBounds { index: 0, length: 0 })
/// );
/// assert_eq!(
///     format!("{}", list.get(3).unwrap_err()),
///     "index 3 is out of bounds for length 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// The index falls outside the range valid for the operation.
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// The logical length of the list at the time of the call.
        length: usize,
    },
    /// A construction argument was rejected.
    InvalidArgument {
        /// The name of the rejected argument.
        argument: &'static str,
        /// The rejected value.
        value: isize,
    },
}

impl ArrayError {
    #[inline]
    pub(crate) const fn out_of_bounds(index: usize, length: usize) -> Self {
        Self::OutOfBounds { index, length }
    }
}

impl std::fmt::Display for ArrayError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { index, length } => {
                write!(formatter, "index {index} is out of bounds for length {length}")
            }
            Self::InvalidArgument { argument, value } => {
                write!(formatter, "invalid {argument}: {value} must not be negative")
            }
        }
    }
}

impl std::error::Error for ArrayError {}
