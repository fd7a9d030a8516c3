use std::iter::{FusedIterator, Rev};

use super::{Slot, Bounds, Error, Result};

/// Growable storage for one dimension, indexed by any `isize`.
///
/// The index space is split into two branches, each a contiguous `Vec`.
/// Index `i >= 0` is stored at `positive[i]` and index `i < 0` at
/// `negative[-i - 1]` (see [`Slot`]). Growing towards negative indices
/// therefore never shifts existing elements.
///
/// Reading an index that has never been written returns the default value.
/// Writing grows the relevant branch, filling any gap with copies of the
/// default. The axis never shrinks, except via [`Axis::replace_content()`].
///
/// The default is boxed, so that an axis may hold containers whose own
/// default is an axis of the same type.
///
/// ```
/// use stretchy::Axis;
/// let mut a = Axis::new('.');
/// a.set(2, '#');
/// a.set(-2, '@');
/// assert_eq!(a.iter().collect::<String>(), "@...#");
/// assert_eq!(a.get(1_000_000), &'.');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Axis<T> {
    positive: Vec<T>,
    negative: Vec<T>,
    default: Box<T>,
}

impl<T> Axis<T> {
    /// Constructs an empty `Axis`.
    pub fn new(default: T) -> Self {
        Axis {positive: Vec::new(), negative: Vec::new(), default: Box::new(default)}
    }

    /// The value returned for indices that have not been written.
    pub fn default_value(&self) -> &T { &*self.default }

    /// The number of materialized elements, in both branches.
    pub fn len(&self) -> usize { self.positive.len() + self.negative.len() }

    pub fn is_empty(&self) -> bool { self.positive.is_empty() && self.negative.is_empty() }

    /// The half-open interval `-len(negative)..len(positive)`.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(-(self.negative.len() as isize), self.positive.len() as isize)
    }

    /// Returns the element at `index` if it is materialized.
    pub fn slot(&self, index: isize) -> Option<&T> {
        match Slot::of(index) {
            Slot::Positive(i) => self.positive.get(i),
            Slot::Negative(i) => self.negative.get(i),
        }
    }

    /// Returns the element at `index` if it is materialized.
    pub fn slot_mut(&mut self, index: isize) -> Option<&mut T> {
        match Slot::of(index) {
            Slot::Positive(i) => self.positive.get_mut(i),
            Slot::Negative(i) => self.negative.get_mut(i),
        }
    }

    /// Returns the element at `index`, or the default value.
    ///
    /// Never mutates and never fails.
    pub fn get(&self, index: isize) -> &T {
        self.slot(index).unwrap_or(&*self.default)
    }

    /// Iterates over the materialized elements in ascending index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {negative: self.negative.iter().rev(), positive: self.positive.iter()}
    }

    /// Iterates mutably over the materialized elements in ascending index
    /// order.
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut T> {
        self.negative.iter_mut().rev().chain(self.positive.iter_mut())
    }

    /// Like [`Axis::iter()`] but pairs each element with its index.
    pub fn indexed(&self) -> impl DoubleEndedIterator<Item = (isize, &T)> {
        self.bounds().indices().zip(self.iter())
    }
}

impl<T: Clone> Axis<T> {
    /// Returns a copy of the element at `index`, or of the default value.
    pub fn at(&self, index: isize) -> T { self.get(index).clone() }

    /// Returns the element at `index`, growing the axis if necessary.
    pub fn get_mut(&mut self, index: isize) -> &mut T {
        let slot = Slot::of(index);
        let (branch, i) = match slot {
            Slot::Positive(i) => (&mut self.positive, i),
            Slot::Negative(i) => (&mut self.negative, i),
        };
        if branch.len() < slot.required_len() {
            tracing::trace!(index, from = branch.len(), to = slot.required_len(), "axis grows");
            branch.resize(slot.required_len(), (*self.default).clone());
        }
        &mut branch[i]
    }

    /// Stores `value` at `index`.
    ///
    /// Elements already materialized at other indices are never altered.
    pub fn set(&mut self, index: isize, value: T) {
        *self.get_mut(index) = value;
    }

    /// Stores `value` at every index of `start, start + step, ...` that lies
    /// before `stop`.
    ///
    /// The direction of travel is the sign of `step`. An omitted `start` or
    /// `stop` defaults to the current bounds, traversed in that direction:
    /// ascending from `-len(negative)` up to `len(positive)`, or descending
    /// from `len(positive) - 1` down to `-len(negative) - 1`.
    ///
    /// ```
    /// use stretchy::Axis;
    /// let mut a = Axis::new('.');
    /// a.set_range(Some(-2), Some(5), 3, '#').unwrap();
    /// assert_eq!(a.iter().collect::<String>(), "#..#..#");
    /// ```
    pub fn set_range(
        &mut self,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
        value: T,
    ) -> Result<()> {
        if step == 0 { return Err(Error::ZeroStep); }
        let bounds = self.bounds();
        let (mut index, stop) = if step > 0 {
            (start.unwrap_or(bounds.start), stop.unwrap_or(bounds.end))
        } else {
            (start.unwrap_or(bounds.end - 1), stop.unwrap_or(bounds.start - 1))
        };
        while (step > 0 && index < stop) || (step < 0 && index > stop) {
            self.set(index, value.clone());
            let Some(next) = index.checked_add(step) else { break };
            index = next;
        }
        Ok(())
    }

    /// Discards the contents and reloads them from `content`, whose first
    /// element is placed at `offset`.
    ///
    /// `content` is consumed lazily. With a negative `offset` the negative
    /// branch is filled first, from index `offset` up to `-1`; if `content`
    /// runs out before that, the remaining indices up to `-1` hold the
    /// default. Any further elements fill the positive branch.
    ///
    /// ```
    /// use stretchy::{Axis, Bounds};
    /// let mut a = Axis::new('.');
    /// a.replace_content("12".chars(), -4);
    /// assert_eq!(a.bounds(), Bounds::new(-4, 0));
    /// assert_eq!(a.iter().collect::<String>(), "12..");
    /// ```
    pub fn replace_content(&mut self, content: impl IntoIterator<Item = T>, offset: isize) {
        let mut items = content.into_iter().fuse();
        self.positive.clear();
        self.negative.clear();
        match Slot::of(offset) {
            Slot::Positive(padding) => {
                self.positive.resize(padding, (*self.default).clone());
            },
            Slot::Negative(_) => {
                self.negative.resize(offset.unsigned_abs(), (*self.default).clone());
                // The most negative index is the last element of the branch.
                for slot in self.negative.iter_mut().rev() {
                    match items.next() {
                        Some(item) => { *slot = item; },
                        None => break,
                    }
                }
            },
        }
        self.positive.extend(items);
        tracing::trace!(offset, bounds = %self.bounds(), "axis reloaded");
    }
}

impl<T: Default> Default for Axis<T> {
    fn default() -> Self { Self::new(T::default()) }
}

impl<'a, T> IntoIterator for &'a Axis<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

// ----------------------------------------------------------------------------

/// The return type of [`Axis::iter()`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    negative: Rev<std::slice::Iter<'a, T>>,
    positive: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.negative.next().or_else(|| self.positive.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.positive.next_back().or_else(|| self.negative.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize { self.negative.len() + self.positive.len() }
}

impl<T> FusedIterator for Iter<'_, T> {}

// ----------------------------------------------------------------------------
