//! Property-based tests for IntegerArrayList and binary search.
//!
//! This module verifies the growth law and the structural invariants of
//! IntegerArrayList, and the correctness of the binary search encoding,
//! using proptest.

use intarray::arrays::{IntegerArrayList, insertion_point, search};
use proptest::prelude::*;

/// A single mutation applied to a list in the invariant tests.
#[derive(Debug, Clone)]
enum Operation {
    Add(i32),
    Insert(usize, i32),
    Remove(usize),
    RemoveLast,
    Set(usize, i32),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<i32>().prop_map(Operation::Add),
        (0..64usize, any::<i32>()).prop_map(|(index, value)| Operation::Insert(index, value)),
        (0..64usize).prop_map(Operation::Remove),
        Just(Operation::RemoveLast),
        (0..64usize, any::<i32>()).prop_map(|(index, value)| Operation::Set(index, value)),
    ]
}

// =============================================================================
// Growth Laws
// =============================================================================

proptest! {
    /// Growth Law: capacity steps through c + c / 2 + 1 exactly when full
    #[test]
    fn prop_growth_law(
        initial_capacity in 0..32usize,
        elements in prop::collection::vec(any::<i32>(), 0..200)
    ) {
        let mut list = IntegerArrayList::with_capacity(initial_capacity);
        let mut expected_capacity = initial_capacity;

        for element in elements {
            if list.len() + 1 > expected_capacity {
                expected_capacity = expected_capacity + expected_capacity / 2 + 1;
            }
            list.add(element);
            prop_assert_eq!(list.capacity(), expected_capacity);
        }
    }

    /// Capacity never decreases and always covers the length
    #[test]
    fn prop_length_within_capacity(
        operations in prop::collection::vec(operation_strategy(), 0..100)
    ) {
        let mut list = IntegerArrayList::new();
        let mut model: Vec<i32> = Vec::new();

        for operation in operations {
            let capacity_before = list.capacity();
            match operation {
                Operation::Add(value) => {
                    list.add(value);
                    model.push(value);
                }
                Operation::Insert(index, value) => {
                    let result = list.insert(index, value);
                    prop_assert_eq!(result.is_ok(), index <= model.len());
                    if result.is_ok() {
                        model.insert(index, value);
                    }
                }
                Operation::Remove(index) => {
                    let result = list.remove(index);
                    prop_assert_eq!(result.is_ok(), index < model.len());
                    if let Ok(removed) = result {
                        prop_assert_eq!(removed, model.remove(index));
                    }
                }
                Operation::RemoveLast => {
                    prop_assert_eq!(list.remove_last().ok(), model.pop());
                }
                Operation::Set(index, value) => {
                    let result = list.set(index, value);
                    prop_assert_eq!(result.is_ok(), index < model.len());
                    if let Ok(previous) = result {
                        prop_assert_eq!(previous, std::mem::replace(&mut model[index], value));
                    }
                }
            }
            prop_assert!(list.len() <= list.capacity());
            prop_assert!(list.capacity() >= capacity_before);
            prop_assert_eq!(list.as_slice(), model.as_slice());
        }
    }
}

// =============================================================================
// Structural Laws
// =============================================================================

proptest! {
    /// Copy Tightness: a copy has capacity == len and equals its source
    #[test]
    fn prop_copy_is_tight(
        extra_capacity in 0..16usize,
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let mut list = IntegerArrayList::with_capacity(elements.len() + extra_capacity);
        list.extend(elements.iter().copied());

        let copy = IntegerArrayList::copy_of(&list);
        prop_assert_eq!(copy.capacity(), list.len());
        prop_assert_eq!(&copy, &list);
    }

    /// Insert-Remove Law: remove(i) undoes insert(i, v)
    #[test]
    fn prop_insert_remove_inverse(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        position in any::<prop::sample::Index>(),
        value: i32
    ) {
        let original: IntegerArrayList = elements.iter().copied().collect();
        let index = position.index(original.len() + 1);

        let mut list = original.clone();
        list.insert(index, value).unwrap();
        prop_assert_eq!(list.remove(index), Ok(value));
        prop_assert_eq!(list, original);
    }

    /// Out-of-bounds: indices len and len + 1 are rejected for element access
    #[test]
    fn prop_out_of_bounds_rejected(
        elements in prop::collection::vec(any::<i32>(), 0..20)
    ) {
        let mut list: IntegerArrayList = elements.iter().copied().collect();
        for index in [list.len(), list.len() + 1] {
            prop_assert!(list.get(index).is_err());
            prop_assert!(list.set(index, 0).is_err());
            prop_assert!(list.remove(index).is_err());
        }
        prop_assert!(list.insert(list.len() + 1, 0).is_err());
        prop_assert_eq!(list.as_slice(), elements.as_slice());
    }

    /// Equality ignores capacity
    #[test]
    fn prop_equality_ignores_capacity(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        capacity in 0..100usize
    ) {
        let tight: IntegerArrayList = elements.iter().copied().collect();
        let mut roomy = IntegerArrayList::with_capacity(capacity);
        roomy.extend(elements.iter().copied());
        prop_assert_eq!(tight, roomy);
    }
}

// =============================================================================
// Binary Search Laws
// =============================================================================

proptest! {
    /// Found: a non-negative result points at an equal element
    #[test]
    fn prop_search_finds_present_values(
        mut elements in prop::collection::vec(-1000..1000i32, 1..100),
        pick in any::<prop::sample::Index>()
    ) {
        elements.sort_unstable();
        let list: IntegerArrayList = elements.iter().copied().collect();
        let needle = elements[pick.index(elements.len())];

        let result = search(&list, list.len(), needle);
        prop_assert!(result >= 0);
        let index = usize::try_from(result).unwrap();
        prop_assert_eq!(list.get(index), Ok(needle));
    }

    /// Missing: inserting at the decoded insertion point keeps the order
    #[test]
    fn prop_search_insertion_point_preserves_order(
        mut elements in prop::collection::vec(-1000..1000i32, 0..100),
        needle in -1100..1100i32
    ) {
        elements.sort_unstable();
        elements.dedup();
        prop_assume!(!elements.contains(&needle));
        let mut list: IntegerArrayList = elements.iter().copied().collect();

        let result = search(&list, list.len(), needle);
        prop_assert!(result < 0);
        let point = insertion_point(result).unwrap();
        prop_assert!(point <= list.len());

        list.insert(point, needle).unwrap();
        prop_assert!(list.as_slice().windows(2).all(|pair| pair[0] <= pair[1]));
    }

    /// Agreement with the standard library on unique sorted data
    #[test]
    fn prop_search_agrees_with_slice_binary_search(
        mut elements in prop::collection::vec(any::<i32>(), 0..100),
        needle: i32
    ) {
        elements.sort_unstable();
        elements.dedup();

        let expected = match elements.binary_search(&needle) {
            Ok(index) => isize::try_from(index).unwrap(),
            Err(point) => -isize::try_from(point).unwrap() - 1,
        };
        prop_assert_eq!(search(&elements, elements.len(), needle), expected);
    }
}
