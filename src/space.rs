use std::fmt::{self, Debug, Display};

use super::{
    axis, bounds, Axis, Bounds, Boundaries, Cell, Coords, Error, Formatter, Nested, Render,
    Result, Stretchy,
};
use super::stretchy::{check_arity, resolve_offset};

/// A `D`-dimensional array (`D >= 2`) indexed by any `D` `isize`s.
///
/// This is an [`Axis`] of planes, each of which is a `D - 1`-dimensional
/// [`Stretchy`]. Planes are created when first written and are independent:
/// rows of a 2-D array may have different lengths, so the array can be
/// jagged. [`StretchyN::boundaries()`] reports the smallest box covering all
/// of them.
///
/// ```
/// use stretchy::{Bounds, StretchyN};
/// let mut s = StretchyN::new(2, '.').unwrap();
/// s[(0, 5)] = '#';
/// s[(3, -2)] = '@';
/// assert_eq!(s.boundaries(), [Bounds::new(0, 4), Bounds::new(-2, 6)]);
/// assert_eq!(s[(1, 1)], '.');
/// assert_eq!(s.len(), 4);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StretchyN<T> {
    dim: usize,
    axis: Axis<Stretchy<T>>,
}

impl<T: Clone> StretchyN<T> {
    /// Constructs an empty `StretchyN` with `dim` dimensions.
    ///
    /// Fails if `dim` is less than 2; use [`Stretchy1`](super::Stretchy1)
    /// instead.
    pub fn new(dim: usize, default: T) -> Result<Self> {
        if dim < 2 { return Err(Error::Dimension {min: 2, got: dim}); }
        Ok(Self::blank(dim, default))
    }

    /// `dim` must be at least 2.
    pub(crate) fn blank(dim: usize, default: T) -> Self {
        StretchyN {dim, axis: Axis::new(Stretchy::blank(dim - 1, default))}
    }

    /// Constructs a `StretchyN` holding `rows`, each of which is nested
    /// `dim - 1` levels deep.
    ///
    /// `offset` gives the index of the first element along each axis;
    /// missing trailing components are zero.
    pub fn with_content(
        dim: usize,
        default: T,
        rows: impl IntoIterator<Item = Nested<T>>,
        offset: impl Coords,
    ) -> Result<Self> {
        let mut s = Self::new(dim, default)?;
        s.replace_content(rows, offset)?;
        Ok(s)
    }

    /// Constructs a 2-D `StretchyN` from rows of elements.
    ///
    /// Each row is consumed lazily, as in
    /// [`Stretchy1::replace_content()`](super::Stretchy1::replace_content()).
    ///
    /// ```
    /// use stretchy::StretchyN;
    /// let s = StretchyN::from_rows('.', ["ab".chars(), "cde".chars()], (-1, 0)).unwrap();
    /// assert_eq!(s.offset(), [-1, 0]);
    /// assert_eq!(s.format("s").unwrap(), "ab.\ncde");
    /// ```
    pub fn from_rows<R: IntoIterator<Item = T>>(
        default: T,
        rows: impl IntoIterator<Item = R>,
        offset: impl Coords,
    ) -> Result<Self> {
        let offset = resolve_offset(2, &offset.coords())?;
        let mut s = Self::blank(2, default);
        for (index, row) in (offset[0]..).zip(rows) {
            if let Stretchy::One(line) = s.plane_mut(index) {
                line.replace_content(row, offset[1]);
            }
        }
        Ok(s)
    }

    /// Returns the plane at `index`, creating it (and any planes between it
    /// and the existing ones) if necessary.
    ///
    /// Callers must not replace the plane: every plane has `dim - 1`
    /// dimensions and the default of `self`.
    pub(crate) fn plane_mut(&mut self, index: isize) -> &mut Stretchy<T> {
        self.axis.get_mut(index)
    }

    /// Returns the element at `index`, growing the container if necessary.
    ///
    /// Fails if `index` does not have one component per dimension.
    pub fn get_mut(&mut self, index: impl Coords) -> Result<&mut T> {
        let index = index.coords();
        check_arity(self.dim, &index)?;
        Ok(self.entry(&index))
    }

    /// Stores `value` at `index`.
    ///
    /// Fails if `index` does not have one component per dimension.
    pub fn set(&mut self, index: impl Coords, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Returns a copy of the element at `index`, or of the default value.
    pub fn at(&self, index: impl Coords) -> Result<T> { self.get(index).cloned() }

    /// Discards the contents and reloads them from `rows`.
    ///
    /// Row `n` is loaded into the plane at `offset[0] + n`, which receives
    /// the rest of `offset`. An `offset` with a single component moves only
    /// the leading axis. Fails if `offset` has more than `dim` components, or
    /// if the nesting depth of `rows` is wrong, in which case `self` is left
    /// unchanged.
    pub fn replace_content(
        &mut self,
        rows: impl IntoIterator<Item = Nested<T>>,
        offset: impl Coords,
    ) -> Result<()> {
        let offset = resolve_offset(self.dim, &offset.coords())?;
        tracing::debug!(dim = self.dim, ?offset, "replacing content");
        let mut axis = Axis::new(self.axis.default_value().clone());
        for (index, row) in (offset[0]..).zip(rows) {
            axis.get_mut(index).load(row.into_seq(self.dim)?, &offset[1..])?;
        }
        self.axis = axis;
        Ok(())
    }

    /// `index` has `dim` components.
    pub(crate) fn entry(&mut self, index: &[isize]) -> &mut T {
        self.axis.get_mut(index[0]).entry(&index[1..])
    }
}

impl<T> StretchyN<T> {
    /// The number of dimensions.
    pub fn dim(&self) -> usize { self.dim }

    /// The value of every index that has not been written.
    pub fn default_value(&self) -> &T { self.axis.default_value().default_value() }

    /// The number of planes, i.e. the extent of the leading axis. This is not
    /// the number of elements.
    pub fn len(&self) -> usize { self.axis.len() }

    pub fn is_empty(&self) -> bool { self.axis.is_empty() }

    /// The bounding box of the materialized content, one [`Bounds`] per
    /// dimension.
    ///
    /// The leading axis is bounded by the planes that exist. Each other axis
    /// is bounded by the union of the bounds of all planes. Computed afresh
    /// on every call.
    pub fn boundaries(&self) -> Boundaries {
        let mut all = Vec::with_capacity(self.dim);
        all.push(self.axis.bounds());
        all.extend(bounds::aggregate(self.dim - 1, self.axis.iter().map(Stretchy::boundaries)));
        all
    }

    /// The first materialized index along each axis.
    pub fn offset(&self) -> Vec<isize> { bounds::offset(&self.boundaries()) }

    /// The extent of the materialized content along each axis.
    pub fn shape(&self) -> Vec<usize> { bounds::shape(&self.boundaries()) }

    /// Returns the element at `index`, or the default value. Never creates a
    /// plane.
    ///
    /// Fails if `index` does not have one component per dimension.
    pub fn get(&self, index: impl Coords) -> Result<&T> {
        let index = index.coords();
        check_arity(self.dim, &index)?;
        Ok(self.lookup(&index))
    }

    /// `index` has `dim` components.
    pub(crate) fn lookup(&self, index: &[isize]) -> &T {
        match self.axis.slot(index[0]) {
            Some(plane) => plane.lookup(&index[1..]),
            None => self.default_value(),
        }
    }

    /// Returns the plane at `index`, if it exists.
    ///
    /// Planes are read-only from outside; write through
    /// [`StretchyN::set()`] instead.
    ///
    /// ```compile_fail
    /// use stretchy::{Stretchy, StretchyN};
    /// let mut s = StretchyN::new(2, 0).unwrap();
    /// *s.plane_mut(0) = Stretchy::empty(3, 0).unwrap();
    /// ```
    pub fn plane(&self, index: isize) -> Option<&Stretchy<T>> { self.axis.slot(index) }

    /// Iterates over the planes in ascending index order.
    pub fn iter(&self) -> axis::Iter<'_, Stretchy<T>> { self.axis.iter() }

    /// Like [`StretchyN::iter()`] but pairs each plane with its index.
    pub fn indexed(&self) -> impl DoubleEndedIterator<Item = (isize, &Stretchy<T>)> {
        self.axis.indexed()
    }
}

impl<T: Cell> StretchyN<T> {
    /// Renders `self` as configured by the format specifier `spec`.
    ///
    /// See [`FormatSpec`](super::FormatSpec) for the syntax.
    pub fn format(&self, spec: &str) -> Result<String> {
        Formatter::parse(spec)?.render(self)
    }
}

/// # Panics
///
/// Panics if `index` does not have one component per dimension.
impl<T, C: Coords> std::ops::Index<C> for StretchyN<T> {
    type Output = T;
    fn index(&self, index: C) -> &T {
        match self.get(index) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

/// # Panics
///
/// Panics if `index` does not have one component per dimension.
impl<T: Clone, C: Coords> std::ops::IndexMut<C> for StretchyN<T> {
    fn index_mut(&mut self, index: C) -> &mut T {
        match self.get_mut(index) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, T> IntoIterator for &'a StretchyN<T> {
    type Item = &'a Stretchy<T>;
    type IntoIter = axis::Iter<'a, Stretchy<T>>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

// ----------------------------------------------------------------------------

impl<T: Cell> Render for StretchyN<T> {
    fn dim(&self) -> usize { self.dim }

    fn boundaries(&self) -> Boundaries { StretchyN::boundaries(self) }

    fn measure(&self, f: &mut Formatter, bounds: &[Bounds]) -> fmt::Result {
        for plane in self.iter() { plane.measure(f, &bounds[1..])?; }
        f.measure_padding(bounds[0], self.axis.bounds(), self.default_value())
    }

    fn emit(&self, f: &mut Formatter, bounds: &[Bounds], depth: usize, prefix: &mut Vec<isize>) -> fmt::Result {
        f.begin();
        for (n, index) in bounds[0].indices().enumerate() {
            if n > 0 { f.row_break(self.dim, depth); }
            prefix.push(index);
            if self.dim == 3 { f.label(prefix, depth)?; }
            // A missing plane prints like the empty default plane.
            self.axis.get(index).emit(f, &bounds[1..], depth + 1, prefix)?;
            prefix.pop();
        }
        f.end();
        Ok(())
    }
}

impl<T: Cell> Display for StretchyN<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = Formatter::default().render(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Shows the number of dimensions, the default value, the offset, and every
/// materialized element.
impl<T: Cell> Debug for StretchyN<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = Formatter::developer().render(self).map_err(|_| fmt::Error)?;
        write!(f, "StretchyN(dim={}, default=", self.dim)?;
        self.default_value().write_literal(f)?;
        f.write_str(", offset=(")?;
        for (n, i) in self.offset().into_iter().enumerate() {
            if n > 0 { f.write_str(", ")?; }
            write!(f, "{}", i)?;
        }
        write!(f, "), content=\n{})", content)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn grid(rows: &[&str], offset: (isize, isize)) -> StretchyN<char> {
        StretchyN::from_rows('.', rows.iter().map(|r| r.chars()), offset).unwrap()
    }

    #[test]
    fn new_needs_two_dims() {
        assert_eq!(StretchyN::new(1, 0), Err(Error::Dimension {min: 2, got: 1}));
        assert!(StretchyN::new(2, 0).is_ok());
    }

    #[test]
    fn empty_boundaries() {
        let s = StretchyN::new(3, 0).unwrap();
        assert_eq!(s.boundaries(), vec![Bounds::EMPTY; 3]);
        assert_eq!(s.offset(), [0, 0, 0]);
        assert_eq!(s.shape(), [0, 0, 0]);
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn jagged() {
        let mut s = StretchyN::new(2, 0).unwrap();
        s.set((0, 5), 1).unwrap();
        s.set((3, -2), 2).unwrap();
        assert_eq!(s.boundaries(), [Bounds::new(0, 4), Bounds::new(-2, 6)]);
        assert_eq!(s.plane(0).map(Stretchy::boundaries), Some(vec![Bounds::new(0, 6)]));
        assert_eq!(s.plane(1).map(Stretchy::boundaries), Some(vec![Bounds::EMPTY]));
        assert_eq!(s.offset(), [0, -2]);
        assert_eq!(s.shape(), [4, 8]);
    }

    #[test]
    fn reads_do_not_create_planes() {
        let mut s = StretchyN::new(3, 'x').unwrap();
        s[(0, 0, 0)] = 'y';
        assert_eq!(s[(5, 5, 5)], 'x');
        assert_eq!(s[(-5, 0, 0)], 'x');
        assert_eq!(s.get((0, 9, 9)), Ok(&'x'));
        assert_eq!(s.len(), 1);
        assert_eq!(s.boundaries(), [Bounds::new(0, 1); 3]);
        assert!(s.plane(5).is_none());
    }

    #[test]
    fn writes_and_reads_3d() {
        let mut s = StretchyN::new(3, 0).unwrap();
        s[(1, -1, 2)] = 7;
        s[(-2, 3, -4)] = 8;
        assert_eq!(s[(1, -1, 2)], 7);
        assert_eq!(s[(-2, 3, -4)], 8);
        assert_eq!(s.at((1, -1, 1)), Ok(0));
        assert_eq!(s.boundaries(), [Bounds::new(-2, 2), Bounds::new(-1, 4), Bounds::new(-4, 3)]);
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn arity_errors() {
        let mut s = StretchyN::new(2, 0).unwrap();
        assert_eq!(s.get(0), Err(Error::Arity {expected: 2, got: 1}));
        assert_eq!(s.set((0, 0, 0), 1), Err(Error::Arity {expected: 2, got: 3}));
        assert!(s.is_empty());
    }

    #[test]
    #[should_panic(expected = "index must have 2 components, got 3")]
    fn index_panics_on_arity() {
        let s = StretchyN::new(2, 0).unwrap();
        let _ = s[(0, 0, 0)];
    }

    #[test]
    fn bulk_load_nested() {
        let rows = [Nested::row([1, 2]), Nested::row([3])];
        let s = StretchyN::with_content(2, 0, rows, [-1, 2]).unwrap();
        assert_eq!(s[(-1, 2)], 1);
        assert_eq!(s[(-1, 3)], 2);
        assert_eq!(s[(0, 2)], 3);
        assert_eq!(s[(0, 3)], 0);
        assert_eq!(s[(-1, 1)], 0);
        assert_eq!(s.boundaries(), [Bounds::new(-1, 1), Bounds::new(0, 4)]);
    }

    #[test]
    fn bulk_load_scalar_offset() {
        let rows = [Nested::row([1, 2])];
        let s = StretchyN::with_content(2, 0, rows, -2).unwrap();
        assert_eq!(s[(-2, 0)], 1);
        assert_eq!(s[(-2, 1)], 2);
        assert_eq!(s.offset(), [-2, 0]);
    }

    #[test]
    fn bulk_load_3d_forwards_offset() {
        let rows = [Nested::rows([Nested::row([1]), Nested::row([2])])];
        let s = StretchyN::with_content(3, 0, rows, [4, -1, -3]).unwrap();
        assert_eq!(s[(4, -1, -3)], 1);
        assert_eq!(s[(4, 0, -3)], 2);
        assert_eq!(s.offset(), [0, -1, -3]);
    }

    #[test]
    fn failed_bulk_load_keeps_content() {
        let mut s = grid(&["ab"], (0, 0));
        let bad = [Nested::row(['x']), Nested::Item('y')];
        assert_eq!(s.replace_content(bad, 0), Err(Error::Nesting {dim: 2}));
        assert_eq!(s.format("s").unwrap(), "ab");
    }

    #[test]
    fn from_rows_is_jagged() {
        let s = grid(&["abc", "d"], (0, -1));
        assert_eq!(s.boundaries(), [Bounds::new(0, 2), Bounds::new(-1, 2)]);
        assert_eq!(s.format("s").unwrap(), "abc\nd..");
    }

    #[test]
    fn format_jagged() {
        let mut s = StretchyN::new(2, '.').unwrap();
        s[(0, 5)] = '#';
        s[(3, -2)] = '@';
        assert_eq!(s.format("s").unwrap(), [
            ".......#",
            "........",
            "........",
            "@.......",
        ].join("\n"));
    }

    #[test]
    fn display_2d() {
        let mut s = StretchyN::new(2, 0).unwrap();
        s[(0, 0)] = 1;
        s[(1, -1)] = 100;
        assert_eq!(s.to_string(), "[[  0   1]\n [100   0]]");
    }

    #[test]
    fn display_3d() {
        let mut s = StretchyN::new(3, 0).unwrap();
        s[(0, 0, 0)] = 1;
        s[(1, 1, 1)] = 2;
        assert_eq!(s.to_string(), [
            "[[[1 0]",
            "  [0 0]]",
            "",
            " [[0 0]",
            "  [0 2]]]",
        ].join("\n"));
    }

    #[test]
    fn index_labels() {
        let mut s = StretchyN::new(3, 0).unwrap();
        s[(0, 0, 0)] = 1;
        s[(1, 0, 0)] = 2;
        let text = Formatter::parse("s").unwrap().index_label("z={}").render(&s).unwrap();
        assert_eq!(text, "z=0\n1\n\nz=1\n2");
    }

    #[test]
    fn index_labels_4d() {
        let mut s = StretchyN::new(4, 'o').unwrap();
        s[(0, 0, 0, 0)] = 'a';
        s[(0, 1, 0, 0)] = 'b';
        let text = Formatter::parse("s").unwrap().index_label("[{}]").render(&s).unwrap();
        assert_eq!(text, "[0, 0]\na\n\n[0, 1]\nb");
    }

    #[test]
    fn render_within_wider() {
        let mut s = StretchyN::new(2, 0).unwrap();
        s[(0, 0)] = 5;
        let text = Formatter::default()
            .render_within(&s, &[Bounds::new(-1, 1), Bounds::new(0, 2)])
            .unwrap();
        assert_eq!(text, "[[0 0]\n [5 0]]");
    }

    #[test]
    fn debug_2d() {
        let s = grid(&["ab", "c"], (0, -1));
        assert_eq!(
            format!("{:?}", s),
            "StretchyN(dim=2, default='.', offset=(0, -1), content=\n[['a', 'b'],\n ['c', '.']])",
        );
    }

    #[test]
    fn literal_columns() {
        let s = grid(&["ab", "c"], (0, 0));
        assert_eq!(s.format("ra").unwrap(), "'a' 'b'\n'c' '.'");
    }

    #[test]
    fn nests_without_infinite_size() {
        assert!(std::mem::size_of::<StretchyN<u8>>() <= 128);
        assert!(std::mem::size_of::<Stretchy<u8>>() <= 128);
        let mut s = StretchyN::new(4, 0u8).unwrap();
        s[(2, -1, 3, -2)] = 9;
        assert_eq!(s[(2, -1, 3, -2)], 9);
    }

    #[test]
    fn gap_planes_match_container() {
        let mut s = StretchyN::new(3, '.').unwrap();
        s[(3, 1, 1)] = '#';
        s[(-2, 0, 0)] = '@';
        assert_eq!(s.len(), 6);
        for (index, plane) in s.indexed() {
            assert_eq!(plane.dim(), 2, "plane {index}");
            assert_eq!(plane.default_value(), &'.', "plane {index}");
        }
        s.set((0, 0), '#').unwrap_err();
        s.set((1, 2, 3), '#').unwrap();
        assert_eq!(s[(1, 2, 3)], '#');
        assert_eq!(s.boundaries(), [Bounds::new(-2, 4), Bounds::new(0, 3), Bounds::new(0, 4)]);
    }

    #[test]
    fn planes_in_order() {
        let mut s = StretchyN::new(2, 0).unwrap();
        s[(1, 0)] = 1;
        s[(-1, 0)] = -1;
        let firsts: Vec<i32> = s.iter().map(|p| *p.get(0).unwrap()).collect();
        assert_eq!(firsts, [-1, 0, 1]);
        let indices: Vec<isize> = s.indexed().map(|(i, _)| i).collect();
        assert_eq!(indices, [-1, 0, 1]);
    }
}
