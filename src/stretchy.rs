use std::fmt::{self, Debug, Display};

use super::{
    Bounds, Boundaries, Cell, CoordVec, Coords, Error, Formatter, Render, Result,
    Stretchy1, StretchyN,
};

/// A container of any number of dimensions: either a [`Stretchy1`] or a
/// [`StretchyN`].
///
/// This is the type of each plane of a [`StretchyN`]. The variant is chosen
/// by the number of dimensions when the container is constructed.
///
/// ```
/// use stretchy::Stretchy;
/// let mut s = Stretchy::empty(3, 0).unwrap();
/// s.set((1, -1, 2), 5).unwrap();
/// assert_eq!(s.get((1, -1, 2)), Ok(&5));
/// assert_eq!(s.get((9, 9, 9)), Ok(&0));
/// assert!(s.get((1, -1)).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Stretchy<T> {
    One(Stretchy1<T>),
    Many(StretchyN<T>),
}

impl<T: Clone> Stretchy<T> {
    /// Constructs an empty container with `dim` dimensions.
    pub fn empty(dim: usize, default: T) -> Result<Self> {
        if dim == 0 { return Err(Error::Dimension {min: 1, got: 0}); }
        Ok(Self::blank(dim, default))
    }

    /// Constructs a container with `dim` dimensions holding `content`.
    ///
    /// `content` must be nested `dim` levels deep. `offset` gives the index
    /// of the first element along each axis; missing trailing components are
    /// zero.
    pub fn with_content(dim: usize, default: T, content: Nested<T>, offset: impl Coords) -> Result<Self> {
        let mut s = Self::empty(dim, default)?;
        s.replace_content(content, offset)?;
        Ok(s)
    }

    /// `dim` must be at least 1.
    pub(crate) fn blank(dim: usize, default: T) -> Self {
        if dim == 1 {
            Stretchy::One(Stretchy1::new(default))
        } else {
            Stretchy::Many(StretchyN::blank(dim, default))
        }
    }

    /// Returns the element at `index`, growing the container if necessary.
    pub fn get_mut(&mut self, index: impl Coords) -> Result<&mut T> {
        let index = index.coords();
        check_arity(self.dim(), &index)?;
        Ok(self.entry(&index))
    }

    /// Stores `value` at `index`.
    pub fn set(&mut self, index: impl Coords, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Discards the contents and reloads them from `content`.
    ///
    /// See [`Stretchy::with_content()`].
    pub fn replace_content(&mut self, content: Nested<T>, offset: impl Coords) -> Result<()> {
        let offset = resolve_offset(self.dim(), &offset.coords())?;
        let dim = self.dim();
        self.load(content.into_seq(dim)?, &offset)
    }

    /// `index` has one component per dimension.
    pub(crate) fn entry(&mut self, index: &[isize]) -> &mut T {
        match self {
            Stretchy::One(s) => s.get_mut(index[0]),
            Stretchy::Many(s) => s.entry(index),
        }
    }

    /// `offset` has one component per dimension.
    pub(crate) fn load(&mut self, items: Vec<Nested<T>>, offset: &[isize]) -> Result<()> {
        match self {
            Stretchy::One(s) => {
                let values = items.into_iter()
                    .map(|item| item.into_item(1))
                    .collect::<Result<Vec<T>>>()?;
                s.replace_content(values, offset[0]);
                Ok(())
            },
            Stretchy::Many(s) => s.replace_content(items, offset),
        }
    }
}

impl<T> Stretchy<T> {
    /// The number of dimensions.
    pub fn dim(&self) -> usize {
        match self {
            Stretchy::One(_) => 1,
            Stretchy::Many(s) => s.dim(),
        }
    }

    /// The value of every index that has not been written.
    pub fn default_value(&self) -> &T {
        match self {
            Stretchy::One(s) => s.default_value(),
            Stretchy::Many(s) => s.default_value(),
        }
    }

    /// The number of materialized slices along the leading axis.
    pub fn len(&self) -> usize {
        match self {
            Stretchy::One(s) => s.len(),
            Stretchy::Many(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// The bounding box of the materialized content, one [`Bounds`] per
    /// dimension.
    pub fn boundaries(&self) -> Boundaries {
        match self {
            Stretchy::One(s) => s.boundaries(),
            Stretchy::Many(s) => s.boundaries(),
        }
    }

    /// The first materialized index along each axis.
    pub fn offset(&self) -> Vec<isize> { super::bounds::offset(&self.boundaries()) }

    /// The extent of the materialized content along each axis.
    pub fn shape(&self) -> Vec<usize> { super::bounds::shape(&self.boundaries()) }

    /// Returns the element at `index`, or the default value.
    ///
    /// Fails if `index` does not have one component per dimension.
    pub fn get(&self, index: impl Coords) -> Result<&T> {
        let index = index.coords();
        check_arity(self.dim(), &index)?;
        Ok(self.lookup(&index))
    }

    /// `index` has one component per dimension.
    pub(crate) fn lookup(&self, index: &[isize]) -> &T {
        match self {
            Stretchy::One(s) => s.get(index[0]),
            Stretchy::Many(s) => s.lookup(index),
        }
    }

    pub fn as_line(&self) -> Option<&Stretchy1<T>> {
        match self {
            Stretchy::One(s) => Some(s),
            Stretchy::Many(_) => None,
        }
    }

    pub fn as_space(&self) -> Option<&StretchyN<T>> {
        match self {
            Stretchy::One(_) => None,
            Stretchy::Many(s) => Some(s),
        }
    }
}

impl<T: Cell> Stretchy<T> {
    /// Renders `self` as configured by the format specifier `spec`.
    pub fn format(&self, spec: &str) -> Result<String> {
        Formatter::parse(spec)?.render(self)
    }
}

impl<T> From<Stretchy1<T>> for Stretchy<T> {
    fn from(s: Stretchy1<T>) -> Self { Stretchy::One(s) }
}

impl<T> From<StretchyN<T>> for Stretchy<T> {
    fn from(s: StretchyN<T>) -> Self { Stretchy::Many(s) }
}

impl<T: Cell> Render for Stretchy<T> {
    fn dim(&self) -> usize { Stretchy::dim(self) }

    fn boundaries(&self) -> Boundaries { Stretchy::boundaries(self) }

    fn measure(&self, f: &mut Formatter, bounds: &[Bounds]) -> fmt::Result {
        match self {
            Stretchy::One(s) => s.measure(f, bounds),
            Stretchy::Many(s) => s.measure(f, bounds),
        }
    }

    fn emit(&self, f: &mut Formatter, bounds: &[Bounds], depth: usize, prefix: &mut Vec<isize>) -> fmt::Result {
        match self {
            Stretchy::One(s) => s.emit(f, bounds, depth, prefix),
            Stretchy::Many(s) => s.emit(f, bounds, depth, prefix),
        }
    }
}

impl<T: Cell> Display for Stretchy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stretchy::One(s) => Display::fmt(s, f),
            Stretchy::Many(s) => Display::fmt(s, f),
        }
    }
}

impl<T: Cell> Debug for Stretchy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stretchy::One(s) => Debug::fmt(s, f),
            Stretchy::Many(s) => Debug::fmt(s, f),
        }
    }
}

// ----------------------------------------------------------------------------

/// Nested content for bulk-loading a container.
///
/// A `D`-dimensional container is loaded from a `Seq` nested `D` levels deep,
/// with `Item`s at the innermost level. Rows may have different lengths.
///
/// ```
/// use stretchy::{Nested, Stretchy};
/// let content = Nested::rows([Nested::row("ab".chars()), Nested::row("c".chars())]);
/// let s = Stretchy::with_content(2, '.', content, [0, -1]).unwrap();
/// assert_eq!(s.format("s").unwrap(), "ab\nc.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Item(T),
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// A `Seq` of `Item`s.
    pub fn row(items: impl IntoIterator<Item = T>) -> Self {
        Nested::Seq(items.into_iter().map(Nested::Item).collect())
    }

    /// A `Seq` of other `Nested`s.
    pub fn rows(rows: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::Seq(rows.into_iter().collect())
    }

    /// The contents of a `Seq`, needed at a level of a `dim`-dimensional
    /// container.
    pub(crate) fn into_seq(self, dim: usize) -> Result<Vec<Nested<T>>> {
        match self {
            Nested::Seq(items) => Ok(items),
            Nested::Item(_) => Err(Error::Nesting {dim}),
        }
    }

    /// The contents of an `Item`, needed at the innermost level of a
    /// `dim`-dimensional container.
    pub(crate) fn into_item(self, dim: usize) -> Result<T> {
        match self {
            Nested::Item(item) => Ok(item),
            Nested::Seq(_) => Err(Error::Nesting {dim}),
        }
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self { Self::rows(iter) }
}

// ----------------------------------------------------------------------------

/// Fails unless `index` has `dim` components.
pub(crate) fn check_arity(dim: usize, index: &[isize]) -> Result<()> {
    if index.len() == dim { Ok(()) } else { Err(Error::Arity {expected: dim, got: index.len()}) }
}

/// Pads `offset` with zeros to `dim` components.
///
/// Fails if `offset` has more than `dim` components.
pub(crate) fn resolve_offset(dim: usize, offset: &[isize]) -> Result<CoordVec> {
    if offset.len() > dim {
        return Err(Error::OffsetArity {dim, got: offset.len()});
    }
    let mut resolved: CoordVec = offset.iter().copied().collect();
    resolved.resize(dim, 0);
    Ok(resolved)
}

// ----------------------------------------------------------------------------
