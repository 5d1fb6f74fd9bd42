//! Growable array list specialized for `i32` values.
//!
//! This module provides [`IntegerArrayList`], a mutable dynamic array that
//! stores raw `i32` values in a single contiguous buffer it owns.
//!
//! # Overview
//!
//! The list keeps two pieces of state:
//!
//! - A fixed-capacity backing buffer
//! - The number of logically present elements (`len() <= capacity()`)
//!
//! When a write would push the length past the capacity, the buffer is
//! replaced by a larger one of `capacity + capacity / 2 + 1` slots and the
//! live elements are copied over. This is the only time the buffer is
//! replaced; inserts and removals inside the capacity shift elements in
//! place. Capacity never shrinks, except that a copy of a list is always
//! allocated with exactly as many slots as the source has elements.
//!
//! # Examples
//!
//! ```rust
//! use intarray::arrays::IntegerArrayList;
//!
//! let mut list = IntegerArrayList::new();
//! list.add(10);
//! list.add(30);
//! list.insert(1, 20).unwrap();
//!
//! assert_eq!(list.as_slice(), &[10, 20, 30]);
//! assert_eq!(list.remove(0), Ok(10));
//! assert_eq!(list.index_of(30), Some(1));
//! assert_eq!(list.index_of(99), None);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use super::ArrayError;
use super::Searchable;

// =============================================================================
// Constants
// =============================================================================

/// Capacity of a list created with [`IntegerArrayList::new`].
const DEFAULT_CAPACITY: usize = 1;

/// Computes the capacity that follows `capacity` in a growth event.
///
/// The trailing `+ 1` keeps a zero-capacity buffer growing.
#[inline]
const fn grown_capacity(capacity: usize) -> usize {
    capacity.saturating_add(capacity / 2).saturating_add(1)
}

// =============================================================================
// IntegerArrayList Definition
// =============================================================================

/// A growable, mutable list of `i32` values backed by a contiguous buffer.
///
/// # Time Complexity
///
/// | Operation     | Complexity                 |
/// |---------------|----------------------------|
/// | `get` / `set` | O(1)                       |
/// | `add`         | O(1) amortized             |
/// | `insert`      | O(len - index)             |
/// | `remove`      | O(len - index)             |
/// | `remove_last` | O(1)                       |
/// | `index_of`    | O(len)                     |
/// | `len`         | O(1)                       |
///
/// # Equality
///
/// Two lists are equal when they hold the same elements in the same order.
/// Capacity does not take part in equality or hashing.
///
/// # Examples
///
/// ```rust
/// use intarray::arrays::IntegerArrayList;
///
/// let mut list = IntegerArrayList::with_capacity(2);
/// list.add(1);
///
/// let copy = IntegerArrayList::copy_of(&list);
/// assert_eq!(copy, list);
/// assert_eq!(list.capacity(), 2);
/// assert_eq!(copy.capacity(), 1);
/// ```
pub struct IntegerArrayList {
    /// Backing buffer; its length is the capacity of the list
    values: Box<[i32]>,
    /// Number of logically present elements
    length: usize,
}

impl IntegerArrayList {
    /// Creates an empty list with a capacity of one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intarray::arrays::IntegerArrayList;
    ///
    /// let list = IntegerArrayList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with exactly `capacity` slots.
    ///
    /// A capacity of zero is allowed; the first write then triggers growth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intarray::arrays::IntegerArrayList;
    ///
    /// let list = IntegerArrayList::with_capacity(1000);
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 1000);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: vec![0; capacity].into_boxed_slice(),
            length: 0,
        }
    }

    /// Creates an empty list from a signed capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::InvalidArgument`] if `capacity` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intarray::arrays::{ArrayError, IntegerArrayList};
    ///
    /// assert_eq!(IntegerArrayList::try_with_capacity(4).unwrap().capacity(), 4);
    /// assert!(matches!(
    ///     IntegerArrayList::try_with_capacity(-1),
    ///     Err(ArrayError::InvalidArgument { value: -1, .. })
    /// ));
    /// ```
    pub fn try_with_capacity(capacity: isize) -> Result<Self, ArrayError> {
        usize::try_from(capacity)
            .map(Self::with_capacity)
            .map_err(|_| ArrayError::InvalidArgument {
                argument: "capacity",
                value: capacity,
            })
    }

    /// Creates a deep copy of `source` whose capacity equals `source.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intarray::arrays::IntegerArrayList;
    ///
    /// let mut original = IntegerArrayList::with_capacity(8);
    /// original.add(7);
    ///
    /// let copy = IntegerArrayList::copy_of(&original);
    /// assert_eq!(copy.len(), 1);
    /// assert_eq!(copy.capacity(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn copy_of(source: &Self) -> Self {
        Self::from(source.as_slice())
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Returns the logical contents as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.values[..self.length]
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intarray::arrays::IntegerArrayList;
    ///
    /// let list: IntegerArrayList = [4, 5, 6].into_iter().collect();
    /// assert_eq!(list.get(1), Ok(5));
    /// assert!(list.get(3).is_err());
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<i32, ArrayError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or(ArrayError::out_of_bounds(index, self.length))
    }

    /// Overwrites the element at `index` and returns the previous value.
    ///
    /// Length and capacity are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfBounds`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<i32, ArrayError> {
        self.check_element_index(index)?;
        Ok(std::mem::replace(&mut self.values[index], value))
    }

    /// Appends `value` to the end of the list, growing the buffer if full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intarray::arrays::IntegerArrayList;
    ///
    /// let mut list = IntegerArrayList::new();
    /// let capacities: Vec<usize> = (1..=5)
    ///     .map(|value| {
    ///         list.add(value);
    ///         list.capacity()
    ///     })
    ///     .collect();
    /// assert_eq!(capacities, vec![1, 2, 4, 4, 7]);
    /// ```
    pub fn add(&mut self, value: i32) {
        self.reserve_one();
        self.values[self.length] = value;
        self.length += 1;
    }

    /// Inserts `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfBounds`] if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intarray::arrays::IntegerArrayList;
    ///
    /// let mut list: IntegerArrayList = [0, 1].into_iter().collect();
    /// list.insert(1, 2).unwrap();
    /// list.insert(3, 3).unwrap();
    /// assert_eq!(list.as_slice(), &[0, 2, 1, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: i32) -> Result<(), ArrayError> {
        if index > self.length {
            return Err(ArrayError::out_of_bounds(index, self.length));
        }
        self.reserve_one();
        self.values.copy_within(index..self.length, index + 1);
        self.values[index] = value;
        self.length += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one slot left. Capacity is not reduced.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfBounds`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<i32, ArrayError> {
        self.check_element_index(index)?;
        let removed = self.values[index];
        self.values.copy_within(index + 1..self.length, index);
        self.length -= 1;
        Ok(removed)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfBounds`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intarray::arrays::IntegerArrayList;
    ///
    /// let mut list: IntegerArrayList = [1, 2].into_iter().collect();
    /// assert_eq!(list.remove_last(), Ok(2));
    /// assert_eq!(list.remove_last(), Ok(1));
    /// assert!(list.remove_last().is_err());
    /// ```
    pub fn remove_last(&mut self) -> Result<i32, ArrayError> {
        match self.length.checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(ArrayError::out_of_bounds(0, 0)),
        }
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// Absence is reported as `None`.
    #[must_use]
    pub fn index_of(&self, value: i32) -> Option<usize> {
        self.as_slice().iter().position(|&element| element == value)
    }

    /// Returns `true` if the list contains `value`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.as_slice().contains(&value)
    }

    /// Removes all elements, keeping the capacity.
    #[inline]
    pub const fn clear(&mut self) {
        self.length = 0;
    }

    /// Grows the buffer until it has at least `minimum_capacity` slots.
    ///
    /// Capacities are stepped through the same growth sequence as appends,
    /// and the buffer is reallocated at most once. A request at or below
    /// the current capacity does nothing.
    pub fn ensure_capacity(&mut self, minimum_capacity: usize) {
        let mut capacity = self.capacity();
        if capacity >= minimum_capacity {
            return;
        }
        while capacity < minimum_capacity {
            capacity = grown_capacity(capacity);
        }
        self.reallocate(capacity);
    }

    /// Returns an estimate, in bytes, of the memory held by this list.
    #[must_use]
    pub fn heap_size(&self) -> usize {
        std::mem::size_of::<Self>() + self.capacity() * std::mem::size_of::<i32>()
    }

    /// Binary searches the logical contents for `needle`.
    ///
    /// Equivalent to `search(self, self.len(), needle)`; see
    /// [`search`](super::search) for the result encoding.
    #[inline]
    #[must_use]
    pub fn binary_search(&self, needle: i32) -> isize {
        super::search(self, self.length, needle)
    }

    /// Returns an iterator over the elements in index order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> IntegerArrayListIterator<'_> {
        IntegerArrayListIterator {
            elements: self.as_slice().iter(),
        }
    }

    #[inline]
    fn check_element_index(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.length {
            Ok(())
        } else {
            Err(ArrayError::out_of_bounds(index, self.length))
        }
    }

    /// Makes room for one more element, growing if the buffer is full.
    #[inline]
    fn reserve_one(&mut self) {
        if self.length == self.capacity() {
            self.reallocate(grown_capacity(self.capacity()));
        }
    }

    fn reallocate(&mut self, new_capacity: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity,
            length = self.length,
            "growing integer array list"
        );

        let mut values = vec![0; new_capacity].into_boxed_slice();
        values[..self.length].copy_from_slice(self.as_slice());
        self.values = values;
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over the elements of an [`IntegerArrayList`], by value.
#[derive(Clone)]
pub struct IntegerArrayListIterator<'a> {
    elements: std::slice::Iter<'a, i32>,
}

impl Iterator for IntegerArrayListIterator<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl DoubleEndedIterator for IntegerArrayListIterator<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back().copied()
    }
}

impl ExactSizeIterator for IntegerArrayListIterator<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl FusedIterator for IntegerArrayListIterator<'_> {}

/// An owning iterator over the elements of an [`IntegerArrayList`].
pub struct IntegerArrayListIntoIterator {
    /// The consumed list's buffer
    values: Box<[i32]>,
    /// Index of the next element returned from the front
    front: usize,
    /// One past the index of the next element returned from the back
    back: usize,
}

impl Iterator for IntegerArrayListIntoIterator {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let element = self.values[self.front];
            self.front += 1;
            Some(element)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for IntegerArrayListIntoIterator {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.values[self.back])
        } else {
            None
        }
    }
}

impl ExactSizeIterator for IntegerArrayListIntoIterator {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl FusedIterator for IntegerArrayListIntoIterator {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl Default for IntegerArrayList {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning produces a tight copy: the clone's capacity equals the source's
/// length.
impl Clone for IntegerArrayList {
    #[inline]
    fn clone(&self) -> Self {
        Self::copy_of(self)
    }
}

impl From<&IntegerArrayList> for IntegerArrayList {
    #[inline]
    fn from(source: &IntegerArrayList) -> Self {
        Self::copy_of(source)
    }
}

impl From<&[i32]> for IntegerArrayList {
    fn from(elements: &[i32]) -> Self {
        Self {
            values: Box::from(elements),
            length: elements.len(),
        }
    }
}

impl From<Vec<i32>> for IntegerArrayList {
    fn from(elements: Vec<i32>) -> Self {
        let length = elements.len();
        Self {
            values: elements.into_boxed_slice(),
            length,
        }
    }
}

impl FromIterator<i32> for IntegerArrayList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<i32> for IntegerArrayList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl IntoIterator for IntegerArrayList {
    type Item = i32;
    type IntoIter = IntegerArrayListIntoIterator;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntegerArrayListIntoIterator {
            values: self.values,
            front: 0,
            back: self.length,
        }
    }
}

impl<'a> IntoIterator for &'a IntegerArrayList {
    type Item = i32;
    type IntoIter = IntegerArrayListIterator<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for IntegerArrayList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for IntegerArrayList {}

impl Hash for IntegerArrayList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl fmt::Debug for IntegerArrayList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for IntegerArrayList {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl Searchable for IntegerArrayList {
    type Item = i32;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    fn item_at(&self, index: usize) -> i32 {
        self.as_slice()[index]
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for IntegerArrayList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(&element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct IntegerArrayListVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for IntegerArrayListVisitor {
    type Value = IntegerArrayList;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of integers")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(IntegerArrayList::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntegerArrayList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(IntegerArrayListVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
