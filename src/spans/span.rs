use std::ops::{Deref, Range};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::scalar::TimeScalar;

/// A type representing a half open span of time, ranging from [start, end).
///
/// Wraps a Rust `std::ops::Range` object, and adds some convenience methods.
/// No well-formedness invariant is enforced: a span with `end < start` is
/// carried as given, and the merge machinery uses its raw `end` unchanged.
#[derive(Clone, Debug)]
pub struct Span<T>(Range<T>);

impl<T> Span<T>
where
    T: TimeScalar,
{
    pub fn new(range: Range<T>) -> Self {
        Self(range)
    }

    #[inline(always)]
    pub fn start_mut(&mut self) -> &mut T {
        &mut self.0.start
    }

    #[inline(always)]
    pub fn end_mut(&mut self) -> &mut T {
        &mut self.0.end
    }

    #[inline]
    pub fn len(&self) -> T {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, pos: T) -> bool {
        pos >= self.start && pos < self.end
    }

    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        (self.start <= other.start && self.end > other.start)
            || (self.start > other.start && other.end > self.start)
    }
}

impl<T: PartialEq> PartialEq for Span<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq> Eq for Span<T> { }

impl<T> From<(T, T)> for Span<T> {
    fn from((start, end): (T, T)) -> Self {
        Self(start..end)
    }
}

impl<T> From<Range<T>> for Span<T> {
    fn from(range: Range<T>) -> Self {
        Self(range)
    }
}

/// Use the `Deref` operator to get a reference to the `Range` wrapped by the
/// `Span` newtype.
impl<T> Deref for Span<T> {
    type Target = Range<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Spans travel over the wire as 2-element `[start, end]` tuples.
impl<T: Serialize> Serialize for Span<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.0.start, &self.0.end).serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Span<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (start, end) = <(T, T)>::deserialize(deserializer)?;
        Ok(Self(start..end))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Span;

    type SpanTest = Span<i64>;

    #[test]
    fn test_span_overlaps() {
        let span1 = SpanTest::new(3..5);
        let span2 = SpanTest::new(7..10);
        let span3 = SpanTest::new(5..9);

        assert!(!span1.overlaps(&span2));
        assert!(!span2.overlaps(&span1));
        assert!(!span1.overlaps(&span3));
        assert!(!span3.overlaps(&span1));
        assert!(span3.overlaps(&span2));
        assert!(span2.overlaps(&span3));
    }

    #[test]
    fn test_contains() {
        let span = SpanTest::new(3..7);

        assert!(span.contains(3));
        assert!(span.contains(6));
        assert!(!span.contains(7));
        assert!(!span.contains(1));
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(SpanTest::new(3..7).len(), 4);
        assert!(!SpanTest::new(3..7).is_empty());
        assert!(SpanTest::new(3..3).is_empty());

        // Inverted spans are representable and report their raw width
        assert_eq!(SpanTest::new(7..3).len(), -4);
    }

    #[test]
    fn test_wire_shape_is_a_pair() {
        let span = SpanTest::new(3..7);
        assert_eq!(serde_json::to_value(&span).unwrap(), json!([3, 7]));

        let parsed: SpanTest = serde_json::from_value(json!([3, 7])).unwrap();
        assert_eq!(parsed, span);
    }
}
