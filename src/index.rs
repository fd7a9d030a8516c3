use smallvec::{smallvec, SmallVec};

/// Where an integer index lives in an [`Axis`].
///
/// Index `i >= 0` lives at position `i` of the positive branch. Index
/// `i < 0` lives at position `-i - 1` of the negative branch, so `-1` is the
/// first element of the negative branch. There is no wraparound.
///
/// [`Axis`]: super::Axis
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Slot {
    Positive(usize),
    Negative(usize),
}

impl Slot {
    /// Translates `index` into a branch and a position within it.
    ///
    /// ```
    /// use stretchy::Slot;
    /// assert_eq!(Slot::of(3), Slot::Positive(3));
    /// assert_eq!(Slot::of(-1), Slot::Negative(0));
    /// assert_eq!(Slot::of(-4), Slot::Negative(3));
    /// ```
    #[inline(always)]
    pub fn of(index: isize) -> Self {
        if index >= 0 {
            Slot::Positive(index.unsigned_abs())
        } else {
            // `-(index + 1)` cannot overflow, even for `isize::MIN`.
            Slot::Negative((-(index + 1)).unsigned_abs())
        }
    }

    /// The inverse of [`Slot::of()`].
    pub fn index(self) -> isize {
        match self {
            Slot::Positive(i) => i as isize,
            Slot::Negative(i) => -(i as isize) - 1,
        }
    }

    /// The branch length needed for this slot to exist.
    #[inline(always)]
    pub fn required_len(self) -> usize {
        match self {
            Slot::Positive(i) | Slot::Negative(i) => i + 1,
        }
    }
}

// ----------------------------------------------------------------------------

/// The components of an index into a container, leading axis first.
pub type CoordVec = SmallVec<[isize; 4]>;

/// Implemented by types that can be used to index a container.
///
/// A 1-D container is indexed by one `isize`. A `D`-dimensional container is
/// indexed by `D` of them, e.g. a tuple `(isize, isize)` or an array
/// `[isize; 2]`. The number of components is checked when the index is used,
/// not here.
pub trait Coords {
    /// The components of `self`, leading axis first.
    fn coords(&self) -> CoordVec;
}

impl Coords for isize {
    fn coords(&self) -> CoordVec { smallvec![*self] }
}

impl Coords for (isize,) {
    fn coords(&self) -> CoordVec { smallvec![self.0] }
}

impl Coords for (isize, isize) {
    fn coords(&self) -> CoordVec { smallvec![self.0, self.1] }
}

impl Coords for (isize, isize, isize) {
    fn coords(&self) -> CoordVec { smallvec![self.0, self.1, self.2] }
}

impl Coords for (isize, isize, isize, isize) {
    fn coords(&self) -> CoordVec { smallvec![self.0, self.1, self.2, self.3] }
}

impl<const N: usize> Coords for [isize; N] {
    fn coords(&self) -> CoordVec { self.iter().copied().collect() }
}

impl Coords for [isize] {
    fn coords(&self) -> CoordVec { self.iter().copied().collect() }
}

impl Coords for Vec<isize> {
    fn coords(&self) -> CoordVec { self.iter().copied().collect() }
}

impl<C: Coords + ?Sized> Coords for &C {
    fn coords(&self) -> CoordVec { (**self).coords() }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_round_trip() {
        for i in [-5, -1, 0, 1, 7, isize::MIN, isize::MAX] {
            assert_eq!(Slot::of(i).index(), i);
        }
    }

    #[test]
    fn required_len() {
        assert_eq!(Slot::of(0).required_len(), 1);
        assert_eq!(Slot::of(2).required_len(), 3);
        assert_eq!(Slot::of(-1).required_len(), 1);
        assert_eq!(Slot::of(-3).required_len(), 3);
    }

    #[test]
    fn coords() {
        let one: isize = 5;
        assert_eq!(one.coords().as_slice(), [5]);
        let pair: (isize, isize) = (1, -2);
        assert_eq!(pair.coords().as_slice(), [1, -2]);
        let triple: (isize, isize, isize) = (1, -2, 3);
        assert_eq!(triple.coords().as_slice(), [1, -2, 3]);
        let array: [isize; 4] = [4, 5, 6, 7];
        assert_eq!(array.coords().as_slice(), [4, 5, 6, 7]);
        let vec: Vec<isize> = vec![0, -1];
        assert_eq!(vec.coords().as_slice(), [0, -1]);
        let slice: &[isize] = &[9, 8];
        assert_eq!(slice.coords().as_slice(), [9, 8]);
    }
}
