use std::fmt::{self, Debug, Display};

use super::{axis, Axis, Bounds, Boundaries, Cell, Formatter, Render, Result};

/// A one-dimensional array indexed by any `isize`.
///
/// Every index is valid. Reading an index that has never been written gives
/// the default value; writing grows the array towards the index.
///
/// ```
/// use stretchy::Stretchy1;
/// let mut s = Stretchy1::new('.');
/// s[-2] = '#';
/// assert_eq!(s.offset(), -2);
/// assert_eq!(s.format("s").unwrap(), "#.");
/// assert_eq!(s[1_000_000], '.');
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stretchy1<T> {
    axis: Axis<T>,
}

impl<T> Stretchy1<T> {
    /// Constructs an empty `Stretchy1`.
    pub fn new(default: T) -> Self { Stretchy1 {axis: Axis::new(default)} }

    /// The value of every index that has not been written.
    pub fn default_value(&self) -> &T { self.axis.default_value() }

    /// Returns the element at `index`, or the default value.
    pub fn get(&self, index: isize) -> &T { self.axis.get(index) }

    /// The index of the first materialized element.
    pub fn offset(&self) -> isize { self.axis.bounds().start }

    /// The number of materialized elements.
    pub fn shape(&self) -> usize { self.axis.len() }

    /// The materialized indices, as a half-open interval.
    pub fn bounds(&self) -> Bounds { self.axis.bounds() }

    /// Like [`Stretchy1::bounds()`], in the form shared with
    /// multi-dimensional containers.
    pub fn boundaries(&self) -> Boundaries { vec![self.bounds()] }

    /// The number of materialized elements.
    pub fn len(&self) -> usize { self.axis.len() }

    pub fn is_empty(&self) -> bool { self.axis.is_empty() }

    /// Iterates over the materialized elements in ascending index order.
    pub fn iter(&self) -> axis::Iter<'_, T> { self.axis.iter() }

    /// Like [`Stretchy1::iter()`] but pairs each element with its index.
    pub fn indexed(&self) -> impl DoubleEndedIterator<Item = (isize, &T)> { self.axis.indexed() }

    /// The underlying storage.
    pub fn axis(&self) -> &Axis<T> { &self.axis }
}

impl<T: Clone> Stretchy1<T> {
    /// Constructs a `Stretchy1` whose content starts at `offset`.
    ///
    /// `content` is consumed lazily; see [`Axis::replace_content()`].
    ///
    /// ```
    /// use stretchy::Stretchy1;
    /// let s = Stretchy1::with_content('.', "12345".chars(), -7);
    /// assert_eq!(s.offset(), -7);
    /// assert_eq!(s.format("s").unwrap(), "12345..");
    /// ```
    pub fn with_content(default: T, content: impl IntoIterator<Item = T>, offset: isize) -> Self {
        let mut s = Self::new(default);
        s.replace_content(content, offset);
        s
    }

    /// Returns a copy of the element at `index`, or of the default value.
    pub fn at(&self, index: isize) -> T { self.axis.at(index) }

    /// Returns the element at `index`, growing the array if necessary.
    pub fn get_mut(&mut self, index: isize) -> &mut T { self.axis.get_mut(index) }

    /// Stores `value` at `index`.
    pub fn set(&mut self, index: isize, value: T) { self.axis.set(index, value); }

    /// Stores `value` at every `step`th index from `start` towards `stop`.
    ///
    /// See [`Axis::set_range()`]. Fails if `step` is zero.
    pub fn set_range(
        &mut self,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
        value: T,
    ) -> Result<()> {
        self.axis.set_range(start, stop, step, value)
    }

    /// Discards the contents and reloads them from `content`, whose first
    /// element is placed at `offset`.
    pub fn replace_content(&mut self, content: impl IntoIterator<Item = T>, offset: isize) {
        tracing::debug!(offset, "replacing 1-D content");
        self.axis.replace_content(content, offset);
    }
}

impl<T: Cell> Stretchy1<T> {
    /// Renders `self` as configured by the format specifier `spec`.
    ///
    /// See [`FormatSpec`](super::FormatSpec) for the syntax.
    pub fn format(&self, spec: &str) -> Result<String> {
        Formatter::parse(spec)?.render(self)
    }
}

impl<T> std::ops::Index<isize> for Stretchy1<T> {
    type Output = T;
    fn index(&self, index: isize) -> &T { self.get(index) }
}

impl<T: Clone> std::ops::IndexMut<isize> for Stretchy1<T> {
    fn index_mut(&mut self, index: isize) -> &mut T { self.get_mut(index) }
}

impl<'a, T> IntoIterator for &'a Stretchy1<T> {
    type Item = &'a T;
    type IntoIter = axis::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T: Default> Default for Stretchy1<T> {
    fn default() -> Self { Self::new(T::default()) }
}

// ----------------------------------------------------------------------------

impl<T: Cell> Render for Stretchy1<T> {
    fn dim(&self) -> usize { 1 }

    fn boundaries(&self) -> Boundaries { Stretchy1::boundaries(self) }

    fn measure(&self, f: &mut Formatter, bounds: &[Bounds]) -> fmt::Result {
        for item in self.iter() { f.measure(item)?; }
        f.measure_padding(bounds[0], self.bounds(), self.default_value())
    }

    fn emit(&self, f: &mut Formatter, bounds: &[Bounds], _: usize, _: &mut Vec<isize>) -> fmt::Result {
        f.begin();
        for (n, index) in bounds[0].indices().enumerate() {
            f.cell(self.get(index), n == 0)?;
        }
        f.end();
        Ok(())
    }
}

impl<T: Cell> Display for Stretchy1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = Formatter::default().render(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Shows the default value, the offset, and every materialized element.
impl<T: Cell> Debug for Stretchy1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let content = Formatter::developer().render(self).map_err(|_| fmt::Error)?;
        f.write_str("Stretchy1(default=")?;
        self.default_value().write_literal(f)?;
        write!(f, ", offset={}, content={})", self.offset(), content)
    }
}

// ----------------------------------------------------------------------------
