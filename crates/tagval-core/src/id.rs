//! Identity indices and the counters that hand them out.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a [`TaggedValue`](crate::TaggedValue).
///
/// Assigned once at construction from an [`IndexCounter`]. Indices drawn
/// from the same counter are unique and strictly increasing in
/// construction order; they are never reused, even after the value that
/// held one has been released.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueIndex(pub u64);

impl fmt::Display for ValueIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ValueIndex {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Counter behind [`IndexCounter::global`].
static GLOBAL_COUNTER: IndexCounter = IndexCounter::new();

/// Monotonic source of [`ValueIndex`] values.
///
/// Each call to [`next`](IndexCounter::next) is a single atomic
/// read-modify-write, so concurrent callers never observe the same index.
/// Callers that want isolated numbering (a registry, a test) own their
/// own counter; the `create_*` constructors on
/// [`TaggedValue`](crate::TaggedValue) share the process-wide one.
#[derive(Debug)]
pub struct IndexCounter {
    next: AtomicU64,
}

impl IndexCounter {
    /// Create a counter whose first index is 0.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a counter whose first index is `start`.
    pub const fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// The process-wide counter.
    ///
    /// Initialised at compile time with a first index of 0; there is no
    /// runtime initialisation step and no way to reset it.
    pub fn global() -> &'static IndexCounter {
        &GLOBAL_COUNTER
    }

    /// Allocate a fresh index. Thread-safe.
    pub fn next(&self) -> ValueIndex {
        ValueIndex(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The index the next call to [`next`](IndexCounter::next) would return,
    /// without consuming it.
    ///
    /// Only a hint under concurrency: another thread may take it first.
    pub fn peek(&self) -> ValueIndex {
        ValueIndex(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IndexCounter {
    fn default() -> Self {
        Self::new()
    }
}
