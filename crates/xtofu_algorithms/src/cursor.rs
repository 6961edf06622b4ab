//! Bidirectional position over an array's elements.

use std::fmt;

use xtofu_foundation::{Result, Value};

use crate::guard;

/// A position within a borrowed element slice.
///
/// The index ranges over `0..=len`; `len` is the terminal end position,
/// where [`Cursor::current`] yields nothing. Movement saturates at both ends.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    elements: &'a [Value],
    index: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at `index`, clamping anything past the last element
    /// to the end position.
    #[must_use]
    pub fn at(elements: &'a [Value], index: usize) -> Self {
        Self {
            elements,
            index: index.min(elements.len()),
        }
    }

    /// Creates a cursor at the first element.
    #[must_use]
    pub fn start(elements: &'a [Value]) -> Self {
        Self::at(elements, 0)
    }

    /// Creates the end cursor.
    #[must_use]
    pub fn end(elements: &'a [Value]) -> Self {
        Self::at(elements, elements.len())
    }

    /// Creates a cursor over the elements of an array cell.
    ///
    /// # Errors
    ///
    /// Fails with an invalid operation error if `value` is not an array.
    pub fn over(value: &'a Value, index: usize) -> Result<Self> {
        let array = guard::array(value, "cursor")?;
        Ok(Self::at(array.as_slice(), index))
    }

    /// Returns the cursor one step forward, staying put at the end.
    #[must_use]
    pub fn next(self) -> Self {
        Self::at(self.elements, self.index.saturating_add(1))
    }

    /// Returns the cursor one step back, staying put at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::at(self.elements, self.index.saturating_sub(1))
    }

    /// Returns the element under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&'a Value> {
        self.elements.get(self.index)
    }

    /// Returns the cursor's index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns true at the end position.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.index == self.elements.len()
    }

    /// Iterates from the cursor to the end.
    pub fn remaining(&self) -> std::slice::Iter<'a, Value> {
        self.elements[self.index..].iter()
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.elements, other.elements) && self.index == other.index
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.elements.len())
            .finish()
    }
}
