pub mod merging;
pub mod scalar;
pub mod span;

pub use merging::{merge_spans, SpanSmallVec};
pub use scalar::TimeScalar;
pub use span::Span;
