//! Wall-clock timing attached to produced values.

use std::fmt;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::value::Value;

/// A duration broken into display components.
///
/// Each component holds only its own unit; `seconds` never exceeds 59,
/// `milliseconds` and `microseconds` never exceed 999.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Timing {
    /// Whole minutes.
    pub minutes: u64,
    /// Remaining seconds.
    pub seconds: u64,
    /// Remaining milliseconds.
    pub milliseconds: u64,
    /// Remaining microseconds.
    pub microseconds: u64,
}

impl Timing {
    /// Splits a duration into components.
    #[must_use]
    pub const fn from_duration(duration: Duration) -> Self {
        let total_secs = duration.as_secs();
        let micros = duration.subsec_micros() as u64;
        Self {
            minutes: total_secs / 60,
            seconds: total_secs % 60,
            milliseconds: micros / 1_000,
            microseconds: micros % 1_000,
        }
    }

    /// Reassembles the components into a duration, saturating at
    /// [`Duration::MAX`].
    #[must_use]
    pub const fn to_duration(self) -> Duration {
        let secs = self.minutes.saturating_mul(60).saturating_add(self.seconds);
        let micros = self
            .milliseconds
            .saturating_mul(1_000)
            .saturating_add(self.microseconds);
        Duration::from_secs(secs).saturating_add(Duration::from_micros(micros))
    }
}

impl From<Duration> for Timing {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}m {}s {}ms {}us",
            self.minutes, self.seconds, self.milliseconds, self.microseconds
        )
    }
}

/// A value paired with the time it took to produce.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamped {
    value: Value,
    timing: Timing,
}

impl Stamped {
    /// Wraps a value with zero timing.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            value,
            timing: Timing::default(),
        }
    }

    /// Runs `produce` and records how long it took.
    pub fn measure(produce: impl FnOnce() -> Value) -> Self {
        let start = Instant::now();
        let value = produce();
        Self {
            value,
            timing: start.elapsed().into(),
        }
    }

    /// Runs a fallible `produce` and records how long it took.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `produce`.
    pub fn try_measure(produce: impl FnOnce() -> Result<Value>) -> Result<Self> {
        let start = Instant::now();
        let value = produce()?;
        Ok(Self {
            value,
            timing: start.elapsed().into(),
        })
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the recorded timing.
    #[must_use]
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    /// Consumes the stamp, returning the value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}
