//! An owning collection of values with its own index counter.

use indexmap::IndexMap;
use tracing::debug;

use crate::id::{IndexCounter, ValueIndex};
use crate::value::{TaggedValue, Variant};

/// Owns a set of [`TaggedValue`]s and the counter that numbers them.
///
/// Numbering is independent of the process-wide counter, so two
/// registries each start at their counter's first index. Iteration is in
/// construction order; releasing a value keeps the relative order of the
/// rest.
#[derive(Debug, Default)]
pub struct ValueRegistry {
    counter: IndexCounter,
    values: IndexMap<ValueIndex, TaggedValue>,
}

impl ValueRegistry {
    /// Empty registry numbering from 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty registry numbering from `counter`.
    pub fn with_counter(counter: IndexCounter) -> Self {
        Self {
            counter,
            values: IndexMap::new(),
        }
    }

    /// Construct and store a value, returning its index.
    pub fn insert(&mut self, variant: Variant, name: &str) -> ValueIndex {
        let value = TaggedValue::new_in(&self.counter, variant, name);
        let index = value.index();
        debug!(index = index.0, kind = %value.kind(), "registry insert");
        self.values.insert(index, value);
        index
    }

    /// Construct and store an `Unsigned` value.
    pub fn insert_unsigned(&mut self, value: u64, name: &str) -> ValueIndex {
        self.insert(Variant::Unsigned(value), name)
    }

    /// Construct and store a `Float` value.
    pub fn insert_float(&mut self, value: f64, name: &str) -> ValueIndex {
        self.insert(Variant::Float(value), name)
    }

    /// Construct and store a `Text` value. `value` is copied.
    pub fn insert_text(&mut self, value: &str, name: &str) -> ValueIndex {
        self.insert(Variant::Text(value.to_owned()), name)
    }

    /// Look up a live value.
    pub fn get(&self, index: ValueIndex) -> Option<&TaggedValue> {
        self.values.get(&index)
    }

    /// Look up a live value mutably (e.g. to swap its formatter).
    pub fn get_mut(&mut self, index: ValueIndex) -> Option<&mut TaggedValue> {
        self.values.get_mut(&index)
    }

    /// Remove a value and hand it back.
    ///
    /// Returns `None` if `index` was never issued here or was already
    /// released. The index is not reissued.
    pub fn release(&mut self, index: ValueIndex) -> Option<TaggedValue> {
        let value = self.values.shift_remove(&index)?;
        debug!(index = index.0, "registry release");
        Some(value)
    }

    /// Format every live value, in construction order.
    pub fn format_all(&self) -> Vec<String> {
        self.values.values().map(TaggedValue::format).collect()
    }

    /// Iterate over live values in construction order.
    pub fn iter(&self) -> impl Iterator<Item = &TaggedValue> {
        self.values.values()
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no values are live.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The index the next insert will receive.
    pub fn next_index(&self) -> ValueIndex {
        self.counter.peek()
    }
}
