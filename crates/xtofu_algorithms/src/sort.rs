//! In-place ascending sorts over integer arrays.
//!
//! Every variant produces the same ascending permutation; none is stable.
//! Before touching any element, each one checks that the cell is an array
//! and that its declared element kind is an integer kind (invalid operation
//! otherwise). Every element must then carry that kind: a non-integer
//! element is an invalid operation, an integer of another width a type
//! mismatch. An empty integer array is a no-op.

use std::fmt;
use std::mem;

use xtofu_foundation::{Result, Value};

use crate::guard::{self, int_key};

/// Selects a sorting strategy for [`sort_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Adjacent-swap sort; the baseline behind [`sort`].
    #[default]
    Bubble,
    /// Insertion sort.
    Insertion,
    /// Selection sort.
    Selection,
    /// Top-down merge sort.
    Merge,
    /// Quicksort with a last-element pivot.
    Quick,
}

impl SortAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    /// Returns the lowercase name of this algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sorts with the algorithm of the caller's choosing.
///
/// # Errors
///
/// See the [module documentation](self).
pub fn sort_with(array: &mut Value, algorithm: SortAlgorithm) -> Result<()> {
    match algorithm {
        SortAlgorithm::Bubble => sort(array),
        SortAlgorithm::Insertion => sort_insertion(array),
        SortAlgorithm::Selection => sort_selection(array),
        SortAlgorithm::Merge => sort_merge(array),
        SortAlgorithm::Quick => sort_quick(array),
    }
}

/// Sorts ascending with the O(n²) adjacent-swap algorithm.
///
/// # Errors
///
/// See the [module documentation](self).
pub fn sort(array: &mut Value) -> Result<()> {
    bubble(sortable(array, "sort")?);
    Ok(())
}

/// Sorts ascending with insertion sort.
///
/// # Errors
///
/// See the [module documentation](self).
pub fn sort_insertion(array: &mut Value) -> Result<()> {
    insertion(sortable(array, "sort_insertion")?);
    Ok(())
}

/// Sorts ascending with selection sort.
///
/// # Errors
///
/// See the [module documentation](self).
pub fn sort_selection(array: &mut Value) -> Result<()> {
    selection(sortable(array, "sort_selection")?);
    Ok(())
}

/// Sorts ascending with merge sort.
///
/// # Errors
///
/// See the [module documentation](self). Also fails with an allocation
/// failure if the merge buffer cannot be reserved; the elements are then a
/// permutation of the input but not necessarily sorted.
pub fn sort_merge(array: &mut Value) -> Result<()> {
    merge(sortable(array, "sort_merge")?)
}

/// Sorts ascending with quicksort.
///
/// # Errors
///
/// See the [module documentation](self).
pub fn sort_quick(array: &mut Value) -> Result<()> {
    quick(sortable(array, "sort_quick")?);
    Ok(())
}

fn sortable<'a>(value: &'a mut Value, operation: &'static str) -> Result<&'a mut [Value]> {
    let array = guard::array_mut(value, operation)?;
    guard::integers(array, operation)?;
    Ok(array.as_mut_slice())
}

// =============================================================================
// Algorithms
// =============================================================================

fn bubble(items: &mut [Value]) {
    let n = items.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if int_key(&items[j]) > int_key(&items[j + 1]) {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

fn insertion(items: &mut [Value]) {
    for i in 1..items.len() {
        let key = int_key(&items[i]);
        let mut j = i;
        while j > 0 && int_key(&items[j - 1]) > key {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn selection(items: &mut [Value]) {
    let n = items.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            if int_key(&items[j]) < int_key(&items[min]) {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }
}

fn merge(items: &mut [Value]) -> Result<()> {
    let len = items.len();
    if len < 2 {
        return Ok(());
    }
    let mid = len / 2;
    merge(&mut items[..mid])?;
    merge(&mut items[mid..])?;

    let mut merged = Vec::new();
    merged.try_reserve_exact(len)?;
    let (mut i, mut j) = (0, mid);
    while i < mid && j < len {
        if int_key(&items[j]) < int_key(&items[i]) {
            merged.push(mem::take(&mut items[j]));
            j += 1;
        } else {
            merged.push(mem::take(&mut items[i]));
            i += 1;
        }
    }
    merged.extend(items[i..mid].iter_mut().map(mem::take));
    merged.extend(items[j..].iter_mut().map(mem::take));

    for (slot, value) in items.iter_mut().zip(merged) {
        *slot = value;
    }
    Ok(())
}

fn quick(mut items: &mut [Value]) {
    // Recurse into the smaller side and loop on the larger to bound depth.
    while items.len() > 1 {
        let pivot = partition(items);
        let (left, right) = mem::take(&mut items).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick(left);
            items = right;
        } else {
            quick(right);
            items = left;
        }
    }
}

fn partition(items: &mut [Value]) -> usize {
    let last = items.len() - 1;
    let pivot = int_key(&items[last]);
    let mut store = 0;
    for i in 0..last {
        if int_key(&items[i]) < pivot {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, last);
    store
}
