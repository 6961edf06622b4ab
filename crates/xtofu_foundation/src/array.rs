//! Owned compound containers: homogeneous arrays and parallel-sequence maps.
//!
//! Unlike persistent collections, both containers own their elements
//! exclusively. Cloning walks every nested cell, and nothing is shared
//! between two containers.

use std::fmt;

use crate::error::{Error, ErrorContext, Result};
use crate::kind::Kind;
use crate::value::{Scalar, Value};

// =============================================================================
// Array
// =============================================================================

/// An ordered sequence of cells that all share one element kind.
///
/// Constructors validate homogeneity. [`Array::as_mut_slice`] hands out raw
/// element access, so algorithms call [`Array::check_homogeneous`] before
/// relying on the invariant.
#[derive(Clone, PartialEq)]
pub struct Array {
    kind: Kind,
    elements: Vec<Value>,
}

impl Array {
    /// Creates an empty array of the given element kind.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if `kind` cannot be stored in an array.
    pub fn new(kind: Kind) -> Result<Self> {
        Self::with_capacity(kind, 0)
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if `kind` cannot be stored in an array
    /// and an allocation failure if the reservation fails.
    pub fn with_capacity(kind: Kind, capacity: usize) -> Result<Self> {
        check_element_kind(kind)?;
        let mut elements = Vec::new();
        elements.try_reserve_exact(capacity)?;
        Ok(Self { kind, elements })
    }

    /// Builds an array from already-typed Rust values.
    ///
    /// ```
    /// use xtofu_foundation::{Array, Kind};
    ///
    /// let a = Array::of([5, 3, 8]);
    /// assert_eq!(a.element_kind(), Kind::Int);
    /// assert_eq!(a.len(), 3);
    /// ```
    #[must_use]
    pub fn of<T, I>(items: I) -> Self
    where
        T: Scalar,
        I: IntoIterator<Item = T>,
    {
        Self {
            kind: T::KIND,
            elements: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds an array from cells, validating that each matches `kind`.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error naming the first offending element.
    pub fn from_values(kind: Kind, elements: Vec<Value>) -> Result<Self> {
        check_element_kind(kind)?;
        let array = Self { kind, elements };
        array.check_homogeneous()?;
        Ok(array)
    }

    /// Assembles an array whose elements the caller has already validated.
    pub(crate) fn from_parts(kind: Kind, elements: Vec<Value>) -> Self {
        Self { kind, elements }
    }

    /// Returns the declared element kind.
    #[must_use]
    pub const fn element_kind(&self) -> Kind {
        self.kind
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    /// Returns the elements as a mutable slice.
    ///
    /// Writing a cell of a different kind breaks homogeneity; operations that
    /// depend on it re-validate first.
    pub fn as_mut_slice(&mut self) -> &mut [Value] {
        &mut self.elements
    }

    /// Appends a cell of the array's element kind.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error for a cell of another kind and an
    /// allocation failure if the array cannot grow.
    pub fn push(&mut self, value: Value) -> Result<()> {
        if value.kind() != self.kind {
            return Err(Error::type_mismatch(self.kind, value.kind()).with_context(
                ErrorContext::new()
                    .with_operation("push")
                    .with_index(self.elements.len()),
            ));
        }
        self.elements.try_reserve(1)?;
        self.elements.push(value);
        Ok(())
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&Value) -> bool) {
        self.elements.retain(keep);
    }

    /// Shortens the array to `len` elements, dropping the rest.
    pub fn truncate(&mut self, len: usize) {
        self.elements.truncate(len);
    }

    /// Replaces every element, validating the new contents first.
    ///
    /// On error the array is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error naming the first offending element.
    pub fn replace(&mut self, elements: Vec<Value>) -> Result<()> {
        check_elements(self.kind, &elements)?;
        self.elements = elements;
        Ok(())
    }

    /// Verifies that every element still matches the declared kind.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error naming the first offending element.
    pub fn check_homogeneous(&self) -> Result<()> {
        check_elements(self.kind, &self.elements)
    }

    /// Consumes the array, returning its elements.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.elements
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array<{}>", self.kind)?;
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

fn check_element_kind(kind: Kind) -> Result<()> {
    if kind.is_constructible() {
        Ok(())
    } else {
        Err(Error::type_mismatch(Kind::Array, kind)
            .with_context(ErrorContext::new().with_operation("array element kind")))
    }
}

fn check_elements(kind: Kind, elements: &[Value]) -> Result<()> {
    match elements.iter().position(|v| v.kind() != kind) {
        None => Ok(()),
        Some(index) => Err(Error::type_mismatch(kind, elements[index].kind())
            .with_context(ErrorContext::new().with_index(index))),
    }
}

// =============================================================================
// ArrayBuilder
// =============================================================================

/// Incrementally builds an [`Array`], deferring validation errors to
/// [`ArrayBuilder::build`].
///
/// ```
/// use xtofu_foundation::{ArrayBuilder, Kind, Value};
///
/// let a = ArrayBuilder::new(Kind::Int8)
///     .push(Value::Int8(1))
///     .push(2i8)
///     .build()
///     .unwrap();
/// assert_eq!(a.len(), 2);
/// ```
#[derive(Debug)]
pub struct ArrayBuilder {
    kind: Kind,
    elements: Vec<Value>,
}

impl ArrayBuilder {
    /// Starts an empty builder for the given element kind.
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
        }
    }

    /// Appends a cell.
    #[must_use]
    pub fn push(mut self, value: impl Into<Value>) -> Self {
        self.elements.push(value.into());
        self
    }

    /// Appends every cell from an iterator.
    #[must_use]
    pub fn extend<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.elements.extend(values.into_iter().map(Into::into));
        self
    }

    /// Validates and produces the array.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch error if the element kind cannot be stored in
    /// an array or any pushed cell has a different kind.
    pub fn build(self) -> Result<Array> {
        Array::from_values(self.kind, self.elements)
    }
}

// =============================================================================
// Map
// =============================================================================

/// Parallel key and value sequences of equal length.
///
/// Keys are matched by cell equality; inserting an existing key replaces its
/// value in place, so insertion order is preserved.
#[derive(Clone, Default, PartialEq)]
pub struct Map {
    keys: Vec<Value>,
    values: Vec<Value>,
}

impl Map {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from key/value pairs, later duplicates replacing earlier
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns a null input error if any key is an invalid cell.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Value, Value)>) -> Result<Self> {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.insert(key, value)?;
        }
        Ok(map)
    }

    /// Assembles a map from sequences the caller has already paired up.
    pub(crate) fn from_parts(keys: Vec<Value>, values: Vec<Value>) -> Self {
        debug_assert_eq!(keys.len(), values.len());
        Self { keys, values }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Inserts an entry, returning the previous value for an existing key.
    ///
    /// # Errors
    ///
    /// Returns a null input error for an invalid key and an allocation
    /// failure if the map cannot grow.
    pub fn insert(&mut self, key: Value, value: Value) -> Result<Option<Value>> {
        if key.is_invalid() {
            return Err(Error::null_input("map insert"));
        }
        if let Some(index) = self.position(&key) {
            return Ok(Some(std::mem::replace(&mut self.values[index], value)));
        }
        self.keys.try_reserve(1)?;
        self.values.try_reserve(1)?;
        self.keys.push(key);
        self.values.push(value);
        Ok(None)
    }

    /// Looks up the value for a key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.position(key).map(|index| &self.values[index])
    }

    /// Removes an entry, returning its value.
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        let index = self.position(key)?;
        self.keys.remove(index);
        Some(self.values.remove(index))
    }

    /// Returns the keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> &[Value] {
        &self.keys
    }

    /// Returns the values in insertion order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterates over key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.keys.iter().zip(self.values.iter())
    }

    /// Consumes the map, returning its key and value sequences.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Value>, Vec<Value>) {
        (self.keys, self.values)
    }

    fn position(&self, key: &Value) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
