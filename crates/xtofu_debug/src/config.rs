//! Configuration for traced sessions.

use xtofu_algorithms::SortAlgorithm;

use crate::trace::TracerConfig;

/// Configuration for a [`Session`](crate::Session).
///
/// Controls the shuffle seed, the sort used by [`Session::sort`](crate::Session::sort),
/// and tracing.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Seed for the session's random number generator.
    pub seed: u64,

    /// Algorithm used when no explicit one is requested.
    pub sort_algorithm: SortAlgorithm,

    /// Tracer settings.
    pub tracer: TracerConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            sort_algorithm: SortAlgorithm::default(),
            tracer: TracerConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Creates a configuration with tracing enabled into the buffer only.
    #[must_use]
    pub fn traced() -> Self {
        Self {
            tracer: TracerConfig::new().enabled(),
            ..Self::default()
        }
    }

    /// Creates a configuration for development: tracing to stderr and an
    /// O(n log n) default sort.
    #[must_use]
    pub fn development() -> Self {
        Self {
            seed: 0,
            sort_algorithm: SortAlgorithm::Merge,
            tracer: TracerConfig::new().enabled().echo(),
        }
    }

    /// Creates a configuration for debugging with JSON trace output.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            seed: 0,
            sort_algorithm: SortAlgorithm::Merge,
            tracer: TracerConfig::new().enabled().echo().json(),
        }
    }

    /// Builder method to set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the default sort algorithm.
    #[must_use]
    pub fn with_sort_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.sort_algorithm = algorithm;
        self
    }

    /// Builder method to set the tracer configuration.
    #[must_use]
    pub fn with_tracer(mut self, tracer: TracerConfig) -> Self {
        self.tracer = tracer;
        self
    }
}
