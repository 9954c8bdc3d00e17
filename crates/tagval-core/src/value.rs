//! The [`TaggedValue`] type: a named, indexed, dynamically typed value.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::ValueError;
use crate::format::{default_formatter, ValueFormatter};
use crate::id::{IndexCounter, ValueIndex};

/// Discriminant of a [`Variant`].
///
/// The explicit `u8` representation is stable and used across the C
/// boundary; [`TryFrom<u8>`] rejects anything else.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// An unsigned machine-size integer.
    Unsigned = 0,
    /// A double-precision float.
    Float = 1,
    /// An owned string.
    Text = 2,
}

impl ValueKind {
    /// The C type label used in formatted output.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Unsigned => "size_t",
            Self::Float => "double",
            Self::Text => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl TryFrom<u8> for ValueKind {
    type Error = ValueError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Unsigned),
            1 => Ok(Self::Float),
            2 => Ok(Self::Text),
            _ => Err(ValueError::InvalidKind { raw }),
        }
    }
}

/// Payload of a [`TaggedValue`]. Exactly one branch is active.
#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    /// Unsigned integer payload.
    Unsigned(u64),
    /// Floating-point payload.
    Float(f64),
    /// Owned text payload.
    Text(String),
}

impl Variant {
    /// The discriminant of this payload.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Unsigned(_) => ValueKind::Unsigned,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
        }
    }
}

/// A dynamically typed value with a name, an identity index and a
/// per-instance formatter.
///
/// Values are built by one of the per-variant constructors, which copy the
/// name (and, for text, the payload) into storage owned by the value,
/// draw the next [`ValueIndex`] and attach the [`DefaultFormatter`].
/// Dropping the value frees everything it owns;
/// [`release`](TaggedValue::release) does the same explicitly.
///
/// Values are not `Clone`: a copy would share the original's
/// identity index.
///
/// [`DefaultFormatter`]: crate::DefaultFormatter
pub struct TaggedValue {
    variant: Variant,
    name: Box<str>,
    index: ValueIndex,
    formatter: Arc<dyn ValueFormatter>,
}

impl TaggedValue {
    /// Unsigned value indexed from the process-wide counter.
    pub fn create_unsigned(value: u64, name: &str) -> Self {
        Self::new_in(IndexCounter::global(), Variant::Unsigned(value), name)
    }

    /// Float value indexed from the process-wide counter.
    pub fn create_float(value: f64, name: &str) -> Self {
        Self::new_in(IndexCounter::global(), Variant::Float(value), name)
    }

    /// Text value indexed from the process-wide counter. `value` is copied.
    pub fn create_text(value: &str, name: &str) -> Self {
        Self::new_in(
            IndexCounter::global(),
            Variant::Text(value.to_owned()),
            name,
        )
    }

    /// Fallible form of [`create_unsigned`](Self::create_unsigned).
    pub fn try_create_unsigned(value: u64, name: &str) -> Result<Self, ValueError> {
        Self::try_new_in(IndexCounter::global(), Variant::Unsigned(value), name)
    }

    /// Fallible form of [`create_float`](Self::create_float).
    pub fn try_create_float(value: f64, name: &str) -> Result<Self, ValueError> {
        Self::try_new_in(IndexCounter::global(), Variant::Float(value), name)
    }

    /// Fallible form of [`create_text`](Self::create_text).
    pub fn try_create_text(value: &str, name: &str) -> Result<Self, ValueError> {
        let text = try_copy(value)?;
        Self::try_new_in(IndexCounter::global(), Variant::Text(text), name)
    }

    /// Build a value indexed from `counter`.
    pub fn new_in(counter: &IndexCounter, variant: Variant, name: &str) -> Self {
        Self::assemble(counter, variant, Box::from(name))
    }

    /// Build a value indexed from `counter`, reporting allocation failure.
    ///
    /// The index is drawn only after every allocation has succeeded, so a
    /// failed attempt leaves no gap in the numbering.
    pub fn try_new_in(
        counter: &IndexCounter,
        variant: Variant,
        name: &str,
    ) -> Result<Self, ValueError> {
        let name = try_copy(name)?.into_boxed_str();
        Ok(Self::assemble(counter, variant, name))
    }

    fn assemble(counter: &IndexCounter, variant: Variant, name: Box<str>) -> Self {
        let index = counter.next();
        trace!(index = index.0, kind = %variant.kind(), name = &*name, "tagged value created");
        Self {
            variant,
            name,
            index,
            formatter: default_formatter(),
        }
    }

    /// Render this value through its attached formatter.
    pub fn format(&self) -> String {
        self.formatter.format(self)
    }

    /// Free the value and everything it owns.
    ///
    /// Equivalent to dropping it; consuming `self` makes a second release
    /// a compile error.
    pub fn release(self) {
        trace!(index = self.index.0, kind = %self.kind(), "tagged value released");
        drop(self);
    }

    /// Replace the formatter, builder style.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: ValueFormatter + 'static,
    {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Replace the formatter in place.
    pub fn set_formatter(&mut self, formatter: Arc<dyn ValueFormatter>) {
        self.formatter = formatter;
    }

    /// Reattach the default formatter.
    pub fn reset_formatter(&mut self) {
        self.formatter = default_formatter();
    }

    /// The attached formatter.
    pub fn formatter(&self) -> &Arc<dyn ValueFormatter> {
        &self.formatter
    }

    /// Discriminant of the payload.
    pub fn kind(&self) -> ValueKind {
        self.variant.kind()
    }

    /// The payload.
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// The label given at construction. May be empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The identity index assigned at construction.
    pub fn index(&self) -> ValueIndex {
        self.index
    }

    /// The payload if this is an `Unsigned` value.
    pub fn as_unsigned(&self) -> Option<u64> {
        match self.variant {
            Variant::Unsigned(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is a `Float` value.
    pub fn as_float(&self) -> Option<f64> {
        match self.variant {
            Variant::Float(v) => Some(v),
            _ => None,
        }
    }

    /// The payload if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match &self.variant {
            Variant::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl fmt::Debug for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedValue")
            .field("variant", &self.variant)
            .field("name", &self.name)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// Copy `s` into a fresh allocation, reporting exhaustion instead of aborting.
fn try_copy(s: &str) -> Result<String, ValueError> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())
        .map_err(|_| ValueError::AllocationFailed { bytes: s.len() })?;
    out.push_str(s);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_default_format() {
        let counter = IndexCounter::new();
        let v = TaggedValue::new_in(&counter, Variant::Unsigned(5), "tag0");
        assert_eq!(
            v.format(),
            "TaggedValue(type = size_t, name = 'tag0', index = 0, value = 5)"
        );
    }

    #[test]
    fn float_default_format() {
        let counter = IndexCounter::starting_at(1);
        let v = TaggedValue::new_in(&counter, Variant::Float(0.5), "tag1");
        assert_eq!(
            v.format(),
            "TaggedValue(type = double, name = 'tag1', index = 1, value = 0.500000)"
        );
    }

    #[test]
    fn text_default_format() {
        let counter = IndexCounter::starting_at(2);
        let v = TaggedValue::new_in(&counter, Variant::Text("mystring".into()), "tag0");
        assert_eq!(
            v.format(),
            "TaggedValue(type = string, name = 'tag0', index = 2, value = 'mystring')"
        );
    }

    #[test]
    fn empty_name_is_allowed() {
        let counter = IndexCounter::new();
        let v = TaggedValue::new_in(&counter, Variant::Unsigned(0), "");
        assert_eq!(v.name(), "");
        assert!(v.format().contains("name = ''"));
    }

    #[test]
    fn text_payload_is_copied() {
        let mut source = String::from("before");
        let v = TaggedValue::create_text(&source, "t");
        source.clear();
        source.push_str("after");
        assert_eq!(v.as_text(), Some("before"));
    }

    #[test]
    fn format_is_idempotent() {
        let v = TaggedValue::create_float(2.75, "f");
        let first = v.format();
        let second = v.format();
        assert_eq!(first, second);
        assert_eq!(v.to_string(), first);
    }

    #[test]
    fn global_constructors_increase_index() {
        let a = TaggedValue::create_unsigned(1, "same");
        let b = TaggedValue::create_unsigned(1, "same");
        assert!(b.index() > a.index());
        assert!(a.format().contains(&format!("index = {}", a.index())));
        assert!(b.format().contains(&format!("index = {}", b.index())));
    }

    #[test]
    fn try_constructors_succeed_normally() {
        let v = TaggedValue::try_create_text("payload", "name").unwrap();
        assert_eq!(v.kind(), ValueKind::Text);
        assert_eq!(v.name(), "name");
        let v = TaggedValue::try_create_unsigned(8, "u").unwrap();
        assert_eq!(v.as_unsigned(), Some(8));
        let v = TaggedValue::try_create_float(1.5, "f").unwrap();
        assert_eq!(v.as_float(), Some(1.5));
    }

    #[test]
    fn typed_getters_reject_other_kinds() {
        let counter = IndexCounter::new();
        let v = TaggedValue::new_in(&counter, Variant::Float(1.0), "f");
        assert_eq!(v.as_unsigned(), None);
        assert_eq!(v.as_text(), None);
    }

    #[test]
    fn per_instance_formatter_override() {
        let counter = IndexCounter::new();
        let plain = TaggedValue::new_in(&counter, Variant::Unsigned(7), "a");
        let custom = TaggedValue::new_in(&counter, Variant::Unsigned(7), "b")
            .with_formatter(|v: &TaggedValue| format!("<{}>", v.name()));
        assert_eq!(custom.format(), "<b>");
        assert!(plain.format().starts_with("TaggedValue("));
    }

    #[test]
    fn reset_formatter_restores_default() {
        let counter = IndexCounter::new();
        let mut v = TaggedValue::new_in(&counter, Variant::Unsigned(1), "r")
            .with_formatter(|_: &TaggedValue| String::from("custom"));
        assert_eq!(v.format(), "custom");
        v.reset_formatter();
        assert_eq!(
            v.format(),
            "TaggedValue(type = size_t, name = 'r', index = 0, value = 1)"
        );
    }

    #[test]
    fn formatting_does_not_touch_counter() {
        let counter = IndexCounter::new();
        let v = TaggedValue::new_in(&counter, Variant::Unsigned(1), "x");
        let _ = v.format();
        let _ = v.format();
        assert_eq!(counter.peek(), ValueIndex(1));
        assert_eq!(v.index(), ValueIndex(0));
    }

    #[test]
    fn released_index_is_not_reused() {
        let counter = IndexCounter::new();
        let first = TaggedValue::new_in(&counter, Variant::Unsigned(1), "x");
        let first_index = first.index();
        first.release();
        let second = TaggedValue::new_in(&counter, Variant::Unsigned(1), "x");
        assert_ne!(second.index(), first_index);
    }

    #[test]
    fn kind_discriminants_round_trip() {
        for kind in [ValueKind::Unsigned, ValueKind::Float, ValueKind::Text] {
            assert_eq!(ValueKind::try_from(kind as u8), Ok(kind));
        }
        assert_eq!(
            ValueKind::try_from(3),
            Err(ValueError::InvalidKind { raw: 3 })
        );
    }

    #[test]
    fn debug_omits_formatter() {
        let counter = IndexCounter::new();
        let v = TaggedValue::new_in(&counter, Variant::Unsigned(4), "d");
        let dbg = format!("{v:?}");
        assert!(dbg.contains("Unsigned(4)"));
        assert!(dbg.contains(".."));
    }
}
