//! Binary search over sorted, indexable sequences.
//!
//! [`search`] bisects the first `length` items of any [`Searchable`]
//! sequence. The caller guarantees that this prefix is sorted ascending;
//! sortedness is not checked.
//!
//! # Result Encoding
//!
//! A non-negative result is the index of a matching item. A negative
//! result encodes the insertion point as `-(insertion_point) - 1`, so one
//! comparison against zero tells a hit from a miss and
//! [`insertion_point`] recovers where the needle would go.
//!
//! # Examples
//!
//! ```rust
//! use intarray::arrays::{insertion_point, search};
//!
//! let sorted = [10, 20, 30, 40];
//! assert_eq!(search(&sorted[..], 4, 30), 2);
//!
//! let missing = search(&sorted[..], 4, 25);
//! assert_eq!(missing, -3);
//! assert_eq!(insertion_point(missing), Some(2));
//!
//! // Only the first two items take part in the search.
//! assert_eq!(search(&sorted[..], 2, 40), -3);
//! ```

use std::cmp::Ordering;

/// A sized sequence whose items can be read by index.
///
/// Implementations may panic when `index` is outside the sequence; [`search`]
/// only reads indices below the `length` it is given.
pub trait Searchable {
    /// The item type compared against the needle.
    type Item: Ord + Copy;

    /// Returns the item at `index`.
    fn item_at(&self, index: usize) -> Self::Item;
}

impl<T: Ord + Copy> Searchable for [T] {
    type Item = T;

    #[inline]
    fn item_at(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Ord + Copy> Searchable for Vec<T> {
    type Item = T;

    #[inline]
    fn item_at(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Ord + Copy, const N: usize> Searchable for [T; N] {
    type Item = T;

    #[inline]
    fn item_at(&self, index: usize) -> T {
        self[index]
    }
}

/// Binary searches the first `length` items of `haystack` for `needle`.
///
/// Returns `Ok(index)` of a matching item, or `Err(insertion_point)` where
/// `needle` would have to be inserted to keep the prefix sorted. When
/// duplicates match, which one is returned depends only on the bisection
/// and is not guaranteed to be the first or last.
///
/// # Panics
///
/// Panics if `length` exceeds the number of items `haystack` can serve and
/// the bisection reads past them.
///
/// # Examples
///
/// ```rust
/// use intarray::arrays::search_position;
///
/// let sorted = vec![1, 3, 5];
/// assert_eq!(search_position(&sorted, 3, 3), Ok(1));
/// assert_eq!(search_position(&sorted, 3, 4), Err(2));
/// assert_eq!(search_position(&sorted, 0, 4), Err(0));
/// ```
pub fn search_position<S>(haystack: &S, length: usize, needle: S::Item) -> Result<usize, usize>
where
    S: Searchable + ?Sized,
{
    let mut low = 0;
    let mut high = length;
    while low < high {
        let middle = low + (high - low) / 2;
        match haystack.item_at(middle).cmp(&needle) {
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle,
            Ordering::Equal => return Ok(middle),
        }
    }
    Err(low)
}

/// Binary searches the first `length` items of `haystack` for `needle`.
///
/// Returns the index of a matching item, or `-(insertion_point) - 1` if
/// there is none. `length == 0` always returns `-1`.
///
/// # Panics
///
/// Panics if `length` exceeds the number of items `haystack` can serve and
/// the bisection reads past them.
///
/// # Examples
///
/// ```rust
/// use intarray::arrays::{search, IntegerArrayList};
///
/// let mut list = IntegerArrayList::new();
/// assert_eq!(search(&list, list.len(), 42), -1);
///
/// list.add(42);
/// assert_eq!(search(&list, list.len(), 42), 0);
/// assert_eq!(search(&list, list.len(), 43), -2);
///
/// list.add(43);
/// assert_eq!(search(&list, list.len(), 43), 1);
/// assert_eq!(search(&list, list.len(), 41), -1);
/// ```
pub fn search<S>(haystack: &S, length: usize, needle: S::Item) -> isize
where
    S: Searchable + ?Sized,
{
    match search_position(haystack, length, needle) {
        Ok(index) => isize::try_from(index).unwrap_or(isize::MAX),
        Err(point) => isize::try_from(point).map_or(isize::MIN, |point| -point - 1),
    }
}

/// Recovers the insertion point from a result of [`search`].
///
/// Returns `None` when `encoded` is a found index (non-negative).
///
/// # Examples
///
/// ```rust
/// use intarray::arrays::insertion_point;
///
/// assert_eq!(insertion_point(-1), Some(0));
/// assert_eq!(insertion_point(-4), Some(3));
/// assert_eq!(insertion_point(2), None);
/// ```
#[must_use]
pub fn insertion_point(encoded: isize) -> Option<usize> {
    if encoded < 0 {
        usize::try_from(-(encoded + 1)).ok()
    } else {
        None
    }
}
