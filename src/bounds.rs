//! Bounding boxes of materialized content.
//!
//! Boundaries are never stored: every container recomputes them on demand
//! from its axes, because content may have grown since the last query.

use std::fmt::{self, Debug, Display};

/// A half-open interval `start..end` of indices along one axis.
#[derive(Default, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Bounds {
    /// The first index, inclusive.
    pub start: isize,
    /// One past the last index.
    pub end: isize,
}

impl Bounds {
    pub const EMPTY: Self = Bounds {start: 0, end: 0};

    pub fn new(start: isize, end: isize) -> Self { Bounds {start, end} }

    /// The number of indices covered.
    pub fn len(self) -> usize { (self.end - self.start).max(0).unsigned_abs() }

    pub fn is_empty(self) -> bool { self.end <= self.start }

    pub fn contains(self, index: isize) -> bool { self.start <= index && index < self.end }

    /// The smallest interval covering both `self` and `other`.
    ///
    /// ```
    /// use stretchy::Bounds;
    /// assert_eq!(Bounds::new(-2, 0).union(Bounds::new(0, 6)), Bounds::new(-2, 6));
    /// ```
    pub fn union(self, other: Self) -> Self {
        Bounds {start: self.start.min(other.start), end: self.end.max(other.end)}
    }

    /// Whether `self` reaches past `inner` on either side.
    pub fn exceeds(self, inner: Self) -> bool {
        self.start < inner.start || self.end > inner.end
    }

    /// The indices covered, in ascending order.
    pub fn indices(self) -> std::ops::Range<isize> { self.start..self.end }
}

impl Debug for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

impl Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { Debug::fmt(self, f) }
}

impl From<(isize, isize)> for Bounds {
    fn from((start, end): (isize, isize)) -> Self { Bounds {start, end} }
}

impl From<Bounds> for (isize, isize) {
    fn from(b: Bounds) -> Self { (b.start, b.end) }
}

// ----------------------------------------------------------------------------

/// One [`Bounds`] per dimension, leading axis first.
pub type Boundaries = Vec<Bounds>;

/// Combines the boundaries of sibling planes dimension by dimension.
///
/// Each dimension of the result is the [`Bounds::union()`] of that dimension
/// across all `planes`. With no planes at all, every dimension is
/// [`Bounds::EMPTY`].
pub fn aggregate<I>(dims: usize, planes: I) -> Boundaries where
    I: IntoIterator<Item = Boundaries>,
{
    let mut planes = planes.into_iter();
    let Some(mut total) = planes.next() else {
        return vec![Bounds::EMPTY; dims];
    };
    debug_assert_eq!(total.len(), dims);
    for plane in planes {
        for (t, b) in total.iter_mut().zip(plane) {
            *t = t.union(b);
        }
    }
    total
}

/// The first component of each [`Bounds`].
pub fn offset(boundaries: &[Bounds]) -> Vec<isize> {
    boundaries.iter().map(|b| b.start).collect()
}

/// The length of each [`Bounds`].
pub fn shape(boundaries: &[Bounds]) -> Vec<usize> {
    boundaries.iter().map(|b| b.len()).collect()
}

// ----------------------------------------------------------------------------
