use std::cmp::Ordering;
use std::fmt::Debug;

use num::Num;

/// Numeric type usable as a span endpoint or gap threshold.
///
/// `cmp_total` provides the total ordering used by the sort step only;
/// gap comparisons during the coalesce pass go through `PartialOrd`, so
/// float NaN semantics there follow IEEE 754.
pub trait TimeScalar: Num + PartialOrd + Copy + Debug {
    fn cmp_total(&self, other: &Self) -> Ordering;
}

impl TimeScalar for i32 {
    #[inline(always)]
    fn cmp_total(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl TimeScalar for i64 {
    #[inline(always)]
    fn cmp_total(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl TimeScalar for u32 {
    #[inline(always)]
    fn cmp_total(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl TimeScalar for u64 {
    #[inline(always)]
    fn cmp_total(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl TimeScalar for f32 {
    // IEEE totalOrder: NaN sorts deterministically at the extremes
    #[inline(always)]
    fn cmp_total(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl TimeScalar for f64 {
    #[inline(always)]
    fn cmp_total(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}
