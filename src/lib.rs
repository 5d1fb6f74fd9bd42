//! # intarray
//!
//! Growable integer array lists and binary search over sorted integer
//! sequences.
//!
//! ## Overview
//!
//! This library provides a dynamic array specialized for raw `i32` values,
//! meant as a building block for indexes that keep large numbers of row
//! positions in memory without boxing each one. It includes:
//!
//! - **`IntegerArrayList`**: Contiguous, growable list with positional
//!   insert/remove, linear search and an observable capacity
//! - **Binary Search**: Stateless bisection over any indexable sequence,
//!   with the insertion point encoded in negative results
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `IntegerArrayList`
//! - `tracing`: Trace-level events when a list grows its buffer
//!
//! ## Example
//!
//! ```rust
//! use intarray::prelude::*;
//!
//! let mut list = IntegerArrayList::new();
//! list.add(1);
//! list.add(3);
//!
//! assert_eq!(search(&list, list.len(), 3), 1);
//! assert_eq!(search(&list, list.len(), 2), -2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use intarray::prelude::*;
/// ```
pub mod prelude {
    pub use crate::arrays::*;
}

pub mod arrays;
