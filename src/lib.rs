//! Sparse multi-dimensional arrays indexed by arbitrary integers, with aligned
//! text rendering.
//!
//! Unlike a conventional array, a "stretchy" array has no fixed size and no
//! bounds checks. Every `isize` is a valid index, including negative ones,
//! which do not wrap around. Reading an index that has never been written
//! gives a default value chosen at construction time. Writing an index grows
//! the array towards it.
//!
//! [`Axis<T>`] is the storage for one dimension. It splits the index space
//! into a non-negative branch and a negative branch, each a contiguous `Vec`,
//! so that growth in either direction is amortized O(1) and never shifts
//! existing elements. [`Stretchy1<T>`] is a one-dimensional array built on an
//! `Axis`. [`StretchyN<T>`] is a `D`-dimensional array built as an `Axis` of
//! `D - 1`-dimensional planes; the planes are [`Stretchy<T>`]s, which is
//! either kind of array. Planes are independent, so a multi-dimensional
//! array may be jagged. `boundaries()` reports the smallest box covering all
//! materialized content.
//!
//! ```
//! use stretchy::{Bounds, StretchyN};
//! let mut s = StretchyN::new(2, '.').unwrap();
//! s[(0, 2)] = '#';
//! s[(-1, -1)] = '@';
//! assert_eq!(s.boundaries(), [Bounds::new(-1, 1), Bounds::new(-1, 3)]);
//! assert_eq!(s.format("s").unwrap(), "@...\n...#");
//! ```
//!
//! [`Formatter`] renders arrays as text in two passes: it first measures the
//! widest cell, then prints every cell within the bounding box, padding with
//! the default value where content is missing. Its layout can be configured
//! with builder methods or with a compact [`FormatSpec`] string. Element types
//! implement [`Cell`] to say how they print.
//!
//! The containers are not synchronized. Share them between threads only
//! behind your own lock.

mod error;
pub use error::{Error, Result};

mod index;
pub use index::{Slot, Coords, CoordVec};

pub mod axis;
pub use axis::{Axis};

pub mod bounds;
pub use bounds::{Bounds, Boundaries};

mod cell;
pub use cell::{Cell};

pub mod format;
pub use format::{Formatter, FormatSpec, Layout, Render};

mod line;
pub use line::{Stretchy1};

mod space;
pub use space::{StretchyN};

mod stretchy;
pub use stretchy::{Stretchy, Nested};
