use smallvec::SmallVec;

use super::scalar::TimeScalar;
use super::span::Span;

const SPANS_ON_STACK: usize = 8;
pub type SpanSmallVec<T> = SmallVec<[Span<T>; SPANS_ON_STACK]>;

/// Coalesce a collection of half open spans into the minimal sorted,
/// non-overlapping set, merging two spans whenever the gap between them is
/// no larger than `threshold`.
///
/// The input may be unsorted and may contain overlapping, nested, identical
/// or disjoint spans; it is never mutated. A negative `threshold` demands a
/// strict overlap of more than `|threshold|` before two spans merge.
/// Consecutive output segments are separated by a gap strictly greater than
/// `threshold`.
///
/// # Example
/// ```
/// use spanmerge::spans::{merge_spans, Span};
///
/// let spans = vec![Span::from((0i64, 5)), Span::from((8, 10)), Span::from((4, 6))];
/// let merged = merge_spans(&spans, 2);
/// assert_eq!(merged, vec![Span::from((0, 10))]);
/// ```
pub fn merge_spans<T>(spans: &[Span<T>], threshold: T) -> Vec<Span<T>>
where
    T: TimeScalar,
{
    let mut sorted: SpanSmallVec<T> = spans.iter().cloned().collect();
    sorted.sort_by(|a, b| a.start.cmp_total(&b.start));

    let mut merged: Vec<Span<T>> = Vec::with_capacity(sorted.len());
    for span in sorted {
        match merged.last_mut() {
            None => merged.push(span),
            Some(last) => {
                // A NaN on either side of the gate fails the comparison and
                // opens a new segment.
                if span.start <= last.end + threshold {
                    // Nested spans never shrink the open segment
                    if span.end > last.end {
                        *last.end_mut() = span.end;
                    }
                } else {
                    merged.push(span);
                }
            }
        }
    }

    merged
}
