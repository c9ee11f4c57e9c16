pub mod errors;
pub mod loose;
pub mod spans;

pub use loose::merge_time_ranges;
pub use spans::{merge_spans, Span, SpanSmallVec, TimeScalar};
