//! Traced facade over the construction and algorithm surfaces.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use xtofu_algorithms::{self as algo, SortAlgorithm};
use xtofu_foundation::{Kind, Result, Stamped, Value, lifecycle};

use crate::config::SessionConfig;
use crate::trace::Tracer;

/// Element kind and length of a cell, as recorded in algorithm events.
fn shape(value: &Value) -> (Kind, usize) {
    match value.as_array() {
        Some(array) => (array.element_kind(), array.len()),
        None => (value.kind(), 0),
    }
}

/// A session that runs xtofu operations and traces each one.
///
/// Every call advances the tracer's step and records either the operation's
/// event or a failure event carrying the error code.
///
/// ```
/// use xtofu_debug::{Session, SessionConfig};
/// use xtofu_foundation::{Array, Value};
///
/// let mut session = Session::new(SessionConfig::traced());
/// let mut v = Value::from(Array::of([5, 3, 8, 1, 7]));
/// session.sort(&mut v).unwrap();
/// assert_eq!(session.tracer().buffer().len(), 1);
/// ```
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    tracer: Tracer,
    rng: ChaCha8Rng,
}

impl Session {
    /// Creates a session from a configuration.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            tracer: Tracer::new(config.tracer.clone()),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns the tracer mutably.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Restarts the random number generator from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Traced [`lifecycle::create`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn create(&mut self, kind: Kind, value: &Value) -> Result<Value> {
        self.tracer.begin_step();
        let result = lifecycle::create(kind, value);
        match &result {
            Ok(_) => self.tracer.create(kind),
            Err(e) => self.tracer.failure("create", e),
        }
        result
    }

    /// Traced [`lifecycle::create_default`].
    pub fn create_default(&mut self, kind: Kind) -> Value {
        self.tracer.begin_step();
        let value = lifecycle::create_default(kind);
        self.tracer.create(value.kind());
        value
    }

    /// Traced [`lifecycle::create_array`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn create_array(&mut self, kind: Kind, count: usize, values: &[Value]) -> Result<Value> {
        self.tracer.begin_step();
        let result = lifecycle::create_array(kind, count, values);
        match &result {
            Ok(_) => self.tracer.create(Kind::Array),
            Err(e) => self.tracer.failure("create_array", e),
        }
        result
    }

    /// Traced [`lifecycle::copy`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn copy(&mut self, source: &Value) -> Result<Value> {
        self.tracer.begin_step();
        let result = lifecycle::copy(source);
        match &result {
            Ok(v) => self.tracer.copy(v.kind()),
            Err(e) => self.tracer.failure("copy", e),
        }
        result
    }

    /// Traced [`lifecycle::move_value`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn move_value(&mut self, source: &mut Value) -> Result<Value> {
        self.tracer.begin_step();
        let result = lifecycle::move_value(source);
        match &result {
            Ok(v) => self.tracer.moved(v.kind()),
            Err(e) => self.tracer.failure("move", e),
        }
        result
    }

    /// Traced [`lifecycle::erase`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn erase(&mut self, value: &mut Value) -> Result<()> {
        self.tracer.begin_step();
        let kind = value.kind();
        let result = lifecycle::erase(value);
        match &result {
            Ok(()) => self.tracer.erase(kind),
            Err(e) => self.tracer.failure("erase", e),
        }
        result
    }

    // -------------------------------------------------------------------------
    // Algorithms
    // -------------------------------------------------------------------------

    fn mutate<T>(
        &mut self,
        operation: &'static str,
        array: &mut Value,
        run: impl FnOnce(&mut Value, &mut ChaCha8Rng) -> Result<T>,
    ) -> Result<T> {
        self.tracer.begin_step();
        let (kind, len_before) = shape(array);
        let result = run(array, &mut self.rng);
        match &result {
            Ok(_) => self
                .tracer
                .algorithm(operation, kind, len_before, shape(array).1),
            Err(e) => self.tracer.failure(operation, e),
        }
        result
    }

    fn observe<T>(
        &mut self,
        operation: &'static str,
        array: &Value,
        run: impl FnOnce(&Value) -> Result<T>,
    ) -> Result<T> {
        self.tracer.begin_step();
        let (kind, len) = shape(array);
        let result = run(array);
        match &result {
            Ok(_) => self.tracer.algorithm(operation, kind, len, len),
            Err(e) => self.tracer.failure(operation, e),
        }
        result
    }

    /// Sorts with the configured default algorithm.
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn sort(&mut self, array: &mut Value) -> Result<()> {
        let algorithm = self.config.sort_algorithm;
        self.sort_with(array, algorithm)
    }

    /// Sorts with an explicit algorithm.
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn sort_with(&mut self, array: &mut Value, algorithm: SortAlgorithm) -> Result<()> {
        self.mutate("sort", array, |a, _| algo::sort_with(a, algorithm))
    }

    /// Traced [`algo::search_linear`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn search_linear(&mut self, array: &Value, key: &Value) -> Result<usize> {
        self.observe("search_linear", array, |a| algo::search_linear(a, key))
    }

    /// Traced [`algo::search_binary`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn search_binary(&mut self, array: &Value, key: &Value) -> Result<usize> {
        self.observe("search_binary", array, |a| algo::search_binary(a, key))
    }

    /// Traced [`algo::transform`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn transform(&mut self, array: &mut Value, f: impl FnMut(i128) -> i128) -> Result<()> {
        self.mutate("transform", array, |a, _| algo::transform(a, f))
    }

    /// Traced [`algo::filter`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn filter(&mut self, array: &mut Value, predicate: impl FnMut(&Value) -> bool) -> Result<()> {
        self.mutate("filter", array, |a, _| algo::filter(a, predicate))
    }

    /// Traced [`algo::reduce`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn reduce(
        &mut self,
        array: &mut Value,
        f: impl FnMut(&Value, &Value) -> Value,
    ) -> Result<()> {
        self.mutate("reduce", array, |a, _| algo::reduce(a, f))
    }

    /// Traced [`algo::accumulate`], timed.
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn accumulate(&mut self, array: &mut Value) -> Result<Stamped> {
        self.mutate("accumulate", array, |a, _| {
            Stamped::try_measure(|| {
                algo::accumulate(a)?;
                Ok(a.clone())
            })
        })
    }

    /// Traced [`algo::partition`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn partition(
        &mut self,
        array: &Value,
        predicate: impl FnMut(&Value) -> bool,
    ) -> Result<(Value, Value)> {
        self.observe("partition", array, |a| algo::partition(a, predicate))
    }

    /// Traced [`algo::for_each`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn for_each(&mut self, array: &Value, f: impl FnMut(&Value)) -> Result<()> {
        self.observe("for_each", array, |a| algo::for_each(a, f))
    }

    /// Traced [`algo::reverse`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn reverse(&mut self, array: &mut Value) -> Result<()> {
        self.mutate("reverse", array, |a, _| algo::reverse(a))
    }

    /// Shuffles with the session's seeded generator.
    ///
    /// Two sessions built from the same seed produce the same sequence of
    /// permutations.
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn shuffle(&mut self, array: &mut Value) -> Result<()> {
        self.mutate("shuffle", array, |a, rng| algo::shuffle(a, rng))
    }

    /// Traced [`algo::compare`].
    ///
    /// # Errors
    ///
    /// Propagates the underlying error after recording it.
    pub fn compare(&mut self, a: &Value, b: &Value) -> Result<std::cmp::Ordering> {
        self.observe("compare", a, |a| algo::compare(a, b))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
