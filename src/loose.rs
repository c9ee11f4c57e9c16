//! Permissive entry point for callers holding untyped, deserialized data.
//!
//! The typed [`merge_spans`](crate::spans::merge_spans) API makes invalid
//! top-level arguments unrepresentable; this module keeps a permissive
//! boundary for data that arrives as
//! [`serde_json::Value`]: arguments of the wrong shape degrade to an empty
//! result instead of an error.

use serde_json::Value;

use crate::errors::SpanmergeError;
use crate::spans::{merge_spans, Span};

impl TryFrom<&Value> for Span<f64> {
    type Error = SpanmergeError;

    fn try_from(value: &Value) -> Result<Self, SpanmergeError> {
        let pair = match value.as_array() {
            Some(pair) => pair,
            None => return Err(SpanmergeError::NotAPair),
        };

        match pair.as_slice() {
            [start, end] => {
                let start = start.as_f64().ok_or(SpanmergeError::NonNumericEndpoint(0))?;
                let end = end.as_f64().ok_or(SpanmergeError::NonNumericEndpoint(1))?;
                Ok(Span::new(start..end))
            }
            _ => Err(SpanmergeError::WrongArity(pair.len())),
        }
    }
}

/// Merge a loosely-typed collection of `[start, end)` pairs within the given
/// gap threshold.
///
/// If `ranges` is not an array, or `threshold` is not representable as a
/// number, the result is empty; nothing is raised. Entries that fail to
/// parse as a two-element numeric pair (see [`SpanmergeError`]) are skipped,
/// and the remaining well-formed entries still merge.
pub fn merge_time_ranges(ranges: &Value, threshold: &Value) -> Vec<Span<f64>> {
    let entries = match ranges.as_array() {
        Some(entries) => entries,
        None => return Vec::new(),
    };
    let threshold = match threshold.as_f64() {
        Some(threshold) => threshold,
        None => return Vec::new(),
    };

    let spans: Vec<Span<f64>> = entries
        .iter()
        .filter_map(|entry| Span::try_from(entry).ok())
        .collect();

    merge_spans(&spans, threshold)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::errors::SpanmergeError;
    use crate::spans::Span;
    use super::merge_time_ranges;

    #[test]
    fn test_non_sequence_ranges_degrade_to_empty() {
        assert!(merge_time_ranges(&Value::Null, &json!(5)).is_empty());
        assert!(merge_time_ranges(&json!(42), &json!(5)).is_empty());
        assert!(merge_time_ranges(&json!({"start": 0}), &json!(5)).is_empty());
    }

    #[test]
    fn test_non_numeric_threshold_degrades_to_empty() {
        assert!(merge_time_ranges(&json!([[0, 1]]), &json!("x")).is_empty());
        assert!(merge_time_ranges(&json!([[0, 1]]), &json!(true)).is_empty());
        assert!(merge_time_ranges(&json!([[0, 1]]), &Value::Null).is_empty());
    }

    #[test]
    fn test_merges_well_formed_input() {
        let merged = merge_time_ranges(&json!([[0, 5], [8, 10], [6, 8.5]]), &json!(1));
        assert_eq!(merged, vec![Span::from((0.0, 10.0))]);
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let ranges = json!([[0, 5], "x", [1], [2, "b", 3], [6, 10]]);
        let merged = merge_time_ranges(&ranges, &json!(2));
        assert_eq!(merged, vec![Span::from((0.0, 10.0))]);
    }

    #[test]
    fn test_entry_parse_errors_are_descriptive() {
        assert_eq!(Span::try_from(&json!("x")), Err(SpanmergeError::NotAPair));
        assert_eq!(Span::try_from(&json!([1])), Err(SpanmergeError::WrongArity(1)));
        assert_eq!(
            Span::try_from(&json!([1, "b"])),
            Err(SpanmergeError::NonNumericEndpoint(1))
        );
        assert_eq!(Span::try_from(&json!([3, 7])), Ok(Span::from((3.0, 7.0))));
    }
}
