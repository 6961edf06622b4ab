//! Integration tests for Layer 1: Algorithms
//!
//! Tests comparison, sorting, searching, functional operations, ordering,
//! shuffling, and cursors over foundation cells.

mod functional;
mod ordering;
mod searching;
mod sorting;
