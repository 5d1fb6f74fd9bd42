//! Integer arrays specialized for raw `i32` storage.
//!
//! This module provides:
//!
//! - [`IntegerArrayList`]: Growable array list of `i32` values with an
//!   explicit, observable capacity
//! - [`search`] / [`search_position`]: Binary search over any [`Searchable`]
//!   sequence, including prefixes of a larger buffer
//! - [`ArrayError`]: Out-of-bounds and invalid-argument failures
//!
//! Elements are stored unboxed in a contiguous buffer; the list never hands
//! out its spare capacity.
//!
//! # Examples
//!
//! ```rust
//! use intarray::arrays::{IntegerArrayList, insertion_point};
//!
//! let mut list = IntegerArrayList::new();
//! for value in [10, 20, 40] {
//!     let encoded = list.binary_search(value);
//!     let point = insertion_point(encoded).unwrap();
//!     list.insert(point, value).unwrap();
//! }
//!
//! let encoded = list.binary_search(30);
//! assert_eq!(encoded, -3);
//! list.insert(insertion_point(encoded).unwrap(), 30).unwrap();
//! assert_eq!(list.as_slice(), &[10, 20, 30, 40]);
//! ```

mod binary_search;
mod error;
mod integer_array_list;

pub use binary_search::{Searchable, insertion_point, search, search_position};
pub use error::ArrayError;
pub use integer_array_list::{
    IntegerArrayList, IntegerArrayListIntoIterator, IntegerArrayListIterator,
};
