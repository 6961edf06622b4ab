//! Bounded storage for trace records.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use super::record::{EventCategory, TraceEvent, TraceRecord};

/// Keeps the newest records up to a fixed capacity.
///
/// Record ids are assigned here and keep increasing across evictions and
/// [`clear`](Self::clear), so an id never names two records.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    records: VecDeque<TraceRecord>,
    capacity: usize,
    next_id: u64,
    evicted: u64,
}

impl TraceBuffer {
    /// Capacity used by [`TracerConfig::default`](super::TracerConfig).
    pub const DEFAULT_CAPACITY: usize = 4_096;

    /// Creates an empty buffer holding at most `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity,
            next_id: 0,
            evicted: 0,
        }
    }

    /// Stores an event and returns the id it was given.
    ///
    /// When full, the oldest record is evicted first.
    pub fn push(&mut self, step: u64, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        if self.capacity == 0 {
            self.evicted += 1;
            return id;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
            self.evicted += 1;
        }
        self.records
            .push_back(TraceRecord::new(id, step, timestamp_ns, event));
        id
    }

    /// Returns the maximum number of records kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every held record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns the newest record.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// Iterates the records made during `step`.
    pub fn in_step(&self, step: u64) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter().filter(move |r| r.step == step)
    }

    /// Iterates the records of one category.
    pub fn in_category(&self, category: EventCategory) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter().filter(move |r| r.category() == category)
    }

    /// Summarizes the held records in one pass.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let mut stats = TraceBufferStats {
            len: self.records.len(),
            capacity: self.capacity,
            evicted: self.evicted,
            steps: None,
            lifecycle: 0,
            algorithms: 0,
            failures: 0,
        };
        for record in &self.records {
            match record.category() {
                EventCategory::Lifecycle => stats.lifecycle += 1,
                EventCategory::Algorithm => stats.algorithms += 1,
                EventCategory::Failure => stats.failures += 1,
            }
        }
        if let (Some(first), Some(last)) = (self.records.front(), self.records.back()) {
            stats.steps = Some(first.step..=last.step);
        }
        stats
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

/// Counts taken by [`TraceBuffer::stats`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceBufferStats {
    /// Records currently held.
    pub len: usize,
    /// Maximum records held.
    pub capacity: usize,
    /// Records dropped to stay within capacity.
    pub evicted: u64,
    /// Steps spanned by the held records, oldest to newest.
    pub steps: Option<RangeInclusive<u64>>,
    /// Held lifecycle records.
    pub lifecycle: usize,
    /// Held algorithm records.
    pub algorithms: usize,
    /// Held failure records.
    pub failures: usize,
}

impl TraceBufferStats {
    /// Returns the held count for one category.
    #[must_use]
    pub const fn count(&self, category: EventCategory) -> usize {
        match category {
            EventCategory::Lifecycle => self.lifecycle,
            EventCategory::Algorithm => self.algorithms,
            EventCategory::Failure => self.failures,
        }
    }
}
