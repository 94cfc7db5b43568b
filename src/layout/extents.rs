//! Per-axis size accessors for viewport indexing.
//!
//! An axis is a sequence of cells with non-negative extents. The accessor
//! exposes the cumulative start offset of every index, which is monotonic, so
//! visible ranges can be found by binary search.

use serde::Serialize;

/// Inclusive range of cell indexes.
///
/// The constructors only build `start <= end` and return `None` for empty
/// ranges. A range written out by hand with `start > end` holds no indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    /// Build a range, `None` when `start > end`.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Range of `count` indexes starting at `start`, `None` when `count == 0`.
    pub fn with_len(start: usize, count: usize) -> Option<Self> {
        count
            .checked_sub(1)
            .and_then(|last| Self::new(start, start.saturating_add(last)))
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

/// Cumulative-offset view of one axis.
pub trait AxisExtents {
    /// Number of cells.
    fn len(&self) -> usize;

    /// Start offset of `index`; `offset(len())` is the total extent.
    fn offset(&self, index: usize) -> f32;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn total(&self) -> f32 {
        self.offset(self.len())
    }

    /// Extent of the cell at `index` (0 past the end).
    fn extent(&self, index: usize) -> f32 {
        if index >= self.len() {
            return 0.0;
        }
        self.offset(index + 1) - self.offset(index)
    }

    /// Summed extent of an inclusive index range.
    fn range_extent(&self, range: IndexRange) -> f32 {
        let end = range.end.min(self.len().saturating_sub(1));
        if range.start > end || self.is_empty() {
            return 0.0;
        }
        self.offset(end + 1) - self.offset(range.start)
    }

    /// Cells covering the span `[min, max]`.
    ///
    /// The start is the cell containing `min`. The end is the cell whose far
    /// edge reaches `max`; when `max` lands exactly on a boundary the cell
    /// after it is not included. Both ends clamp into `[0, len - 1]`.
    fn index_range(&self, min: f32, max: f32) -> Option<IndexRange> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let min = min.max(0.0);
        // first boundary strictly past min, minus one
        let start = partition(len, |i| self.offset(i) <= min).saturating_sub(1);
        // first boundary at or past max, minus one
        let end = partition(len, |i| self.offset(i) < max).checked_sub(1)?;
        IndexRange::new(start.min(len - 1), end.min(len - 1))
    }
}

/// Number of boundaries in `0..=len` satisfying a monotonic predicate.
fn partition(len: usize, pred: impl Fn(usize) -> bool) -> usize {
    let (mut lo, mut hi) = (0, len + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Every cell has the same extent (detail table rows).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformExtents {
    pub size: f32,
    pub len: usize,
}

impl UniformExtents {
    pub fn new(size: f32, len: usize) -> Self {
        Self {
            size: size.max(0.0),
            len,
        }
    }
}

impl AxisExtents for UniformExtents {
    fn len(&self) -> usize {
        self.len
    }

    #[allow(clippy::cast_precision_loss)]
    fn offset(&self, index: usize) -> f32 {
        self.size * index.min(self.len) as f32
    }

    fn index_range(&self, min: f32, max: f32) -> Option<IndexRange> {
        if self.len == 0 || self.size <= 0.0 {
            return None;
        }
        let last = self.len - 1;
        let start = float_to_index((min.max(0.0) / self.size).floor()).unwrap_or(0);
        // an exact boundary belongs to the next row, so step back one
        let end = float_to_index((max / self.size).ceil() - 1.0)?;
        IndexRange::new(start.min(last), end.min(last))
    }
}

/// Cells of arbitrary extent, backed by precomputed start offsets.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PrefixExtents {
    /// `offsets[i]` = start of cell `i`; one trailing entry holds the total
    offsets: Vec<f32>,
}

impl PrefixExtents {
    /// Accumulate offsets from per-cell extents; negative extents count as 0.
    pub fn from_extents(extents: impl IntoIterator<Item = f32>) -> Self {
        let mut offsets = vec![0.0];
        let mut pos = 0.0;
        for extent in extents {
            pos += extent.max(0.0);
            offsets.push(pos);
        }
        Self { offsets }
    }

    pub fn offsets(&self) -> &[f32] {
        &self.offsets
    }
}

impl AxisExtents for PrefixExtents {
    fn len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    fn offset(&self, index: usize) -> f32 {
        self.offsets
            .get(index)
            .or_else(|| self.offsets.last())
            .copied()
            .unwrap_or(0.0)
    }

    fn index_range(&self, min: f32, max: f32) -> Option<IndexRange> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let min = min.max(0.0);
        let start = self.offsets.partition_point(|&o| o <= min).saturating_sub(1);
        let end = self.offsets.partition_point(|&o| o < max).checked_sub(1)?;
        IndexRange::new(start.min(len - 1), end.min(len - 1))
    }
}

/// Truncate a non-negative float to an index.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn float_to_index(value: f32) -> Option<usize> {
    (value.is_finite() && value >= 0.0).then(|| value as usize)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn widths() -> PrefixExtents {
        // boundaries [0, 100, 250, 400]
        PrefixExtents::from_extents([100.0, 150.0, 150.0])
    }

    #[test]
    fn test_exact_boundary_excludes_next_cell() {
        assert_eq!(widths().index_range(100.0, 250.0), IndexRange::new(1, 1));
    }

    #[test_case(0.0, 50.0 => IndexRange::new(0, 0); "inside first")]
    #[test_case(0.0, 100.0 => IndexRange::new(0, 0); "ends on first boundary")]
    #[test_case(50.0, 260.0 => IndexRange::new(0, 2); "partial both ends")]
    #[test_case(-30.0, 120.0 => IndexRange::new(0, 1); "negative scroll clamps")]
    #[test_case(390.0, 900.0 => IndexRange::new(2, 2); "past the end clamps")]
    #[test_case(900.0, 1000.0 => IndexRange::new(2, 2); "scrolled beyond content")]
    #[test_case(0.0, 0.0 => None; "zero height viewport")]
    fn test_prefix_index_range(min: f32, max: f32) -> Option<IndexRange> {
        widths().index_range(min, max)
    }

    #[test]
    fn test_default_search_matches_prefix_search() {
        struct Slow(PrefixExtents);
        impl AxisExtents for Slow {
            fn len(&self) -> usize {
                self.0.len()
            }
            fn offset(&self, index: usize) -> f32 {
                self.0.offset(index)
            }
        }
        let slow = Slow(widths());
        for (min, max) in [(0.0, 50.0), (100.0, 250.0), (50.0, 260.0), (390.0, 900.0), (0.0, 0.0)] {
            assert_eq!(slow.index_range(min, max), widths().index_range(min, max));
        }
    }

    #[test_case(0.0, 90.0 => IndexRange::new(0, 2); "exact multiple stops before next row")]
    #[test_case(45.0, 100.0 => IndexRange::new(1, 3); "partial rows")]
    #[test_case(0.0, 10_000.0 => IndexRange::new(0, 9); "clamped to last row")]
    fn test_uniform_index_range(min: f32, max: f32) -> Option<IndexRange> {
        UniformExtents::new(30.0, 10).index_range(min, max)
    }

    #[test]
    fn test_empty_axis_has_no_range() {
        assert_eq!(UniformExtents::new(30.0, 0).index_range(0.0, 100.0), None);
        assert_eq!(PrefixExtents::default().index_range(0.0, 100.0), None);
        assert_eq!(PrefixExtents::from_extents([]).total(), 0.0);
    }

    #[test]
    fn test_range_extent() {
        let w = widths();
        assert_eq!(w.total(), 400.0);
        assert_eq!(w.extent(1), 150.0);
        assert_eq!(w.extent(7), 0.0);
        assert_eq!(w.range_extent(IndexRange { start: 1, end: 2 }), 300.0);
        assert_eq!(UniformExtents::new(30.0, 10).range_extent(IndexRange { start: 8, end: 20 }), 60.0);
    }

    #[test]
    fn test_index_range_helpers() {
        assert_eq!(IndexRange::with_len(3, 0), None);
        assert_eq!(IndexRange::with_len(3, 2), IndexRange::new(3, 4));
        let r = IndexRange { start: 2, end: 5 };
        assert_eq!(r.len(), 4);
        assert!(r.contains(5));
        assert!(!r.contains(6));
        assert!(!r.is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let r = IndexRange { start: 5, end: 2 };
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(!r.contains(3));
        assert_eq!(r.iter().count(), 0);
        assert_eq!(UniformExtents::new(30.0, 10).range_extent(r), 0.0);
    }
}
