//! Test utilities and fixture formatters for tagval development.
//!
//! - [`ConstFormatter`]: always renders the same text.
//! - [`RecordingFormatter`]: delegates to the default formatter and
//!   counts how often it was invoked.
//! - [`demo_values`]: the classic three-value fixture.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tagval_core::{DefaultFormatter, IndexCounter, TaggedValue, ValueFormatter, Variant};

/// Renders every value as a fixed string.
pub struct ConstFormatter {
    pub text: String,
}

impl ConstFormatter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ValueFormatter for ConstFormatter {
    fn format(&self, _value: &TaggedValue) -> String {
        self.text.clone()
    }
}

/// Delegates to [`DefaultFormatter`] and counts invocations.
///
/// Clones share the counter, so a test can keep one clone and attach
/// another to a value.
#[derive(Clone, Default)]
pub struct RecordingFormatter {
    inner: DefaultFormatter,
    calls: Arc<AtomicUsize>,
}

impl RecordingFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times [`format`](ValueFormatter::format) has run.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ValueFormatter for RecordingFormatter {
    fn format(&self, value: &TaggedValue) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.format(value)
    }
}

/// `(5, "tag0")`, `(0.5, "tag1")`, `("mystring", "tag0")`, numbered from
/// `counter`.
pub fn demo_values(counter: &IndexCounter) -> [TaggedValue; 3] {
    [
        TaggedValue::new_in(counter, Variant::Unsigned(5), "tag0"),
        TaggedValue::new_in(counter, Variant::Float(0.5), "tag1"),
        TaggedValue::new_in(counter, Variant::Text("mystring".to_string()), "tag0"),
    ]
}
