//! Operation tracing.
//!
//! A [`Tracer`] stamps each [`TraceEvent`] with an id, the current step, and
//! the time since the tracer started, then keeps it in a bounded
//! [`TraceBuffer`]. Records can also be echoed to stderr as they arrive.
//! Nothing is built or stored while the tracer is disabled.
//!
//! # Example
//!
//! ```
//! use xtofu_debug::{EventCategory, TraceEvent, Tracer, TracerConfig};
//! use xtofu_foundation::Kind;
//!
//! let config = TracerConfig::new().enabled().mute(EventCategory::Lifecycle);
//! let mut tracer = Tracer::new(config);
//! tracer.record(TraceEvent::Create { kind: Kind::Int });
//! tracer.algorithm("sort", Kind::Int, 3, 3);
//! assert_eq!(tracer.buffer().len(), 1);
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{EventCategory, TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use xtofu_foundation::{Error, Kind};

// =============================================================================
// Configuration
// =============================================================================

/// How records are rendered to text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceFormat {
    /// One aligned line per record, with timestamps.
    #[default]
    Human,
    /// One JSON object per record; a JSON array for several.
    Json,
}

impl TraceFormat {
    /// Renders one record.
    #[must_use]
    pub fn render(self, record: &TraceRecord) -> String {
        match self {
            Self::Human => HumanFormatter::new().with_timestamps().format(record),
            Self::Json => JsonFormatter::new().format(record),
        }
    }

    /// Renders several records.
    #[must_use]
    pub fn render_all(self, records: &[&TraceRecord]) -> String {
        match self {
            Self::Human => HumanFormatter::new().with_timestamps().format_many(records),
            Self::Json => JsonFormatter::new().format_many(records),
        }
    }
}

/// Settings for a [`Tracer`].
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether events are recorded at all.
    pub enabled: bool,
    /// Records kept before the oldest is evicted.
    pub capacity: usize,
    /// Rendering for echoed and formatted records.
    pub format: TraceFormat,
    /// Whether each record is written to stderr as it is recorded.
    pub echo: bool,
    /// Categories dropped instead of recorded.
    pub muted: Vec<EventCategory>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            capacity: TraceBuffer::DEFAULT_CAPACITY,
            format: TraceFormat::Human,
            echo: false,
            muted: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a disabled configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns recording on.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Sets how many records are kept.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Echoes each record to stderr.
    #[must_use]
    pub fn echo(mut self) -> Self {
        self.echo = true;
        self
    }

    /// Renders records as JSON.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.format = TraceFormat::Json;
        self
    }

    /// Drops events of `category`.
    #[must_use]
    pub fn mute(mut self, category: EventCategory) -> Self {
        if !self.muted.contains(&category) {
            self.muted.push(category);
        }
        self
    }

    /// Returns true if events of `category` are recorded.
    #[must_use]
    pub fn records(&self, category: EventCategory) -> bool {
        self.enabled && !self.muted.contains(&category)
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records operation events into a bounded buffer.
#[derive(Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    step: u64,
    started: Instant,
}

impl Tracer {
    /// Creates a tracer from its configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        Self {
            buffer: TraceBuffer::with_capacity(config.capacity),
            config,
            step: 0,
            started: Instant::now(),
        }
    }

    /// Creates a tracer that records nothing until enabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// Returns true if recording is on.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Turns recording on.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Turns recording off. Held records are kept.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Starts the next step and returns its number. Steps start at 1.
    pub fn begin_step(&mut self) -> u64 {
        self.step += 1;
        self.step
    }

    /// Returns the current step, 0 before the first [`begin_step`](Self::begin_step).
    #[must_use]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Records an event under the current step.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if self.config.records(event.category()) {
            self.store(event);
        }
    }

    fn store(&mut self, event: TraceEvent) {
        let elapsed = u64::try_from(self.started.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.buffer.push(self.step, elapsed, event);

        if self.config.echo {
            if let Some(record) = self.buffer.last() {
                let line = self.config.format.render(record);
                let _ = writeln!(io::stderr().lock(), "{line}");
            }
        }
    }

    /// Renders a record in the configured format.
    #[must_use]
    pub fn render(&self, record: &TraceRecord) -> String {
        self.config.format.render(record)
    }

    /// Renders every held record in the configured format.
    #[must_use]
    pub fn render_all(&self) -> String {
        let records: Vec<&TraceRecord> = self.buffer.iter().collect();
        self.config.format.render_all(&records)
    }

    /// Returns the record buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Drops every held record.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }

    // -------------------------------------------------------------------------
    // Event shorthands
    // -------------------------------------------------------------------------

    /// Records a [`TraceEvent::Create`].
    #[inline]
    pub fn create(&mut self, kind: Kind) {
        self.record(TraceEvent::Create { kind });
    }

    /// Records a [`TraceEvent::Copy`].
    #[inline]
    pub fn copy(&mut self, kind: Kind) {
        self.record(TraceEvent::Copy { kind });
    }

    /// Records a [`TraceEvent::Move`].
    #[inline]
    pub fn moved(&mut self, kind: Kind) {
        self.record(TraceEvent::Move { kind });
    }

    /// Records a [`TraceEvent::Erase`].
    #[inline]
    pub fn erase(&mut self, kind: Kind) {
        self.record(TraceEvent::Erase { kind });
    }

    /// Records a [`TraceEvent::Algorithm`].
    #[inline]
    pub fn algorithm(
        &mut self,
        operation: &'static str,
        kind: Kind,
        len_before: usize,
        len_after: usize,
    ) {
        self.record(TraceEvent::Algorithm {
            operation,
            kind,
            len_before,
            len_after,
        });
    }

    /// Records a [`TraceEvent::Failure`].
    ///
    /// The error message is only rendered when failures are recorded.
    #[inline]
    pub fn failure(&mut self, operation: &'static str, error: &Error) {
        if self.config.records(EventCategory::Failure) {
            self.store(TraceEvent::failure(operation, error));
        }
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}
