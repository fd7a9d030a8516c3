//! Text forms of container elements.
//!
//! A [`Formatter`] prints each element either in plain form (like
//! [`Display`]) or in literal form (like [`Debug`]), and aligns it in a column
//! according to [`Cell::is_numeric()`].
//!
//! [`Formatter`]: super::Formatter
//! [`Display`]: std::fmt::Display
//! [`Debug`]: std::fmt::Debug

use std::fmt::{self, Write};

/// Implemented by element types that a [`Formatter`] can print.
///
/// Implement this for your own element types. The blanket implementations
/// cover the primitive types, strings, and [`Option`]s of other `Cell`s.
///
/// [`Formatter`]: super::Formatter
pub trait Cell {
    /// Writes the human-readable form of `self`.
    fn write_plain(&self, w: &mut dyn Write) -> fmt::Result;

    /// Writes the unambiguous, quoted form of `self`.
    fn write_literal(&self, w: &mut dyn Write) -> fmt::Result;

    /// Numeric cells are right-aligned in columns, all others left-aligned.
    /// `bool` counts as numeric.
    fn is_numeric(&self) -> bool { false }
}

macro_rules! impl_cell {
    ($numeric:literal: $($t:ty),*) => {$(
        impl Cell for $t {
            fn write_plain(&self, w: &mut dyn Write) -> fmt::Result { write!(w, "{}", self) }
            fn write_literal(&self, w: &mut dyn Write) -> fmt::Result { write!(w, "{:?}", self) }
            fn is_numeric(&self) -> bool { $numeric }
        }
    )*};
}

impl_cell!(true: i8, i16, i32, i64, i128, isize);
impl_cell!(true: u8, u16, u32, u64, u128, usize);
impl_cell!(true: f32, f64, bool);
impl_cell!(false: char, str, String);

impl Cell for () {
    fn write_plain(&self, _: &mut dyn Write) -> fmt::Result { Ok(()) }
    fn write_literal(&self, w: &mut dyn Write) -> fmt::Result { w.write_str("()") }
}

/// `None` is blank in plain form and `None` in literal form. `Some(x)` looks
/// exactly like `x`.
impl<T: Cell> Cell for Option<T> {
    fn write_plain(&self, w: &mut dyn Write) -> fmt::Result {
        match self {
            Some(t) => t.write_plain(w),
            None => Ok(()),
        }
    }

    fn write_literal(&self, w: &mut dyn Write) -> fmt::Result {
        match self {
            Some(t) => t.write_literal(w),
            None => w.write_str("None"),
        }
    }

    fn is_numeric(&self) -> bool { self.as_ref().map_or(false, T::is_numeric) }
}

impl<T: Cell + ?Sized> Cell for &T {
    fn write_plain(&self, w: &mut dyn Write) -> fmt::Result { (**self).write_plain(w) }
    fn write_literal(&self, w: &mut dyn Write) -> fmt::Result { (**self).write_literal(w) }
    fn is_numeric(&self) -> bool { (**self).is_numeric() }
}

impl<T: Cell + ?Sized> Cell for Box<T> {
    fn write_plain(&self, w: &mut dyn Write) -> fmt::Result { (**self).write_plain(w) }
    fn write_literal(&self, w: &mut dyn Write) -> fmt::Result { (**self).write_literal(w) }
    fn is_numeric(&self) -> bool { (**self).is_numeric() }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(c: &dyn Cell) -> String {
        let mut s = String::new();
        c.write_plain(&mut s).unwrap();
        s
    }

    fn literal(c: &dyn Cell) -> String {
        let mut s = String::new();
        c.write_literal(&mut s).unwrap();
        s
    }

    #[test]
    fn primitives() {
        assert_eq!(plain(&234i32), "234");
        assert_eq!(plain(&6.7f64), "6.7");
        assert_eq!(plain(&'x'), "x");
        assert_eq!(literal(&'x'), "'x'");
        assert_eq!(plain(&"ab"), "ab");
        assert_eq!(literal(&"ab"), "\"ab\"");
        assert_eq!(literal(&false), "false");
        assert!(234i32.is_numeric());
        assert!(!'x'.is_numeric());
        assert!(false.is_numeric());
    }

    #[test]
    fn option() {
        assert_eq!(plain(&None::<i32>), "");
        assert_eq!(literal(&None::<i32>), "None");
        assert_eq!(literal(&Some('x')), "'x'");
        assert!(Some(3u8).is_numeric());
        assert!(!None::<i32>.is_numeric());
    }
}
