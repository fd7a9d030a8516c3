//! Text rendering of containers.
//!
//! Rendering is two passes over the same recursive structure. The measure
//! pass finds the widest cell, so that columns line up; it must see every
//! cell before the emit pass prints the first one.
//!
//! The layout is configured either with the builder methods of
//! [`Formatter`], or by parsing a compact [`FormatSpec`]:
//!
//! | Spec    | Meaning                                           |
//! |---------|---------------------------------------------------|
//! | `""`    | plain text, cells run together                    |
//! | `"s"`   | plain text, cells run together                    |
//! | `"Xs"`  | plain text, cells separated by the character `X`  |
//! | `"a"`   | plain text, aligned in columns                    |
//! | `"r"`   | literal text, separated by `,`                    |
//! | `"r…"`  | literal text, then any of the above               |

use std::fmt::{self, Write};
use std::str::FromStr;

use super::{Bounds, Boundaries, Cell, Error, Result};

/// How cells are laid out within a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Pad every cell to the width of the widest, one space between cells.
    Columns,
    /// Print cells at their natural width, with this between them.
    Separated(String),
}

/// A parsed format specifier.
///
/// ```
/// use stretchy::{FormatSpec, Layout};
/// let spec: FormatSpec = "r;s".parse().unwrap();
/// assert!(spec.literal);
/// assert_eq!(spec.layout, Layout::Separated(";".into()));
/// assert!("@@@".parse::<FormatSpec>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    /// Print cells using [`Cell::write_literal()`].
    pub literal: bool,
    pub layout: Layout,
}

impl FormatSpec {
    pub fn parse(spec: &str) -> Result<Self> {
        let (literal, rest) = match spec.strip_prefix('r') {
            Some("") => (true, ",s"),
            Some(rest) => (true, rest),
            None => (false, spec),
        };
        let mut chars = rest.chars();
        let layout = match (chars.next(), chars.next(), chars.next()) {
            (None, _, _) | (Some('s'), None, _) => Layout::Separated(String::new()),
            (Some('a'), None, _) => Layout::Columns,
            (Some(sep), Some('s'), None) => Layout::Separated(sep.to_string()),
            _ => return Err(Error::Format(spec.to_owned())),
        };
        Ok(FormatSpec {literal, layout})
    }
}

impl FromStr for FormatSpec {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

// ----------------------------------------------------------------------------

/// Implemented by the containers of this crate, so that a [`Formatter`] can
/// print them.
///
/// `bounds` always has one [`Bounds`] per dimension of `self`, leading axis
/// first. It may be wider or narrower than [`Render::boundaries()`]; cells
/// outside the materialized content print as the default value.
pub trait Render {
    /// The number of dimensions.
    fn dim(&self) -> usize;

    /// The bounding box of the materialized content.
    fn boundaries(&self) -> Boundaries;

    /// Measure pass: reports every materialized cell to the formatter, and
    /// the default value if `bounds` reaches past the materialized content.
    fn measure(&self, f: &mut Formatter, bounds: &[Bounds]) -> fmt::Result;

    /// Emit pass: prints every cell within `bounds`.
    ///
    /// - depth - the number of enclosing containers.
    /// - prefix - the indices that select `self` within the outermost
    ///   container.
    fn emit(
        &self,
        f: &mut Formatter,
        bounds: &[Bounds],
        depth: usize,
        prefix: &mut Vec<isize>,
    ) -> fmt::Result;
}

impl<R: Render + ?Sized> Render for &R {
    fn dim(&self) -> usize { (**self).dim() }
    fn boundaries(&self) -> Boundaries { (**self).boundaries() }
    fn measure(&self, f: &mut Formatter, bounds: &[Bounds]) -> fmt::Result {
        (**self).measure(f, bounds)
    }
    fn emit(&self, f: &mut Formatter, bounds: &[Bounds], depth: usize, prefix: &mut Vec<isize>) -> fmt::Result {
        (**self).emit(f, bounds, depth, prefix)
    }
}

// ----------------------------------------------------------------------------

/// A configurable text renderer for containers.
///
/// Each row of a 1-D container is wrapped in the begin/end delimiters. Each
/// plane of a `D`-dimensional container is wrapped likewise, and consecutive
/// planes are separated by a line break and `D - 2` blank lines. Continuation
/// lines are indented by the width of the begin delimiter per nesting level.
///
/// ```
/// use stretchy::{Formatter, StretchyN};
/// let mut s = StretchyN::new(2, 0).unwrap();
/// s[(0, 0)] = 1;
/// s[(1, 1)] = 22;
/// assert_eq!(Formatter::default().render(&s).unwrap(), "[[ 1  0]\n [ 0 22]]");
/// ```
///
/// The per-render state is only driven by [`Render`] implementations inside
/// this crate:
///
/// ```compile_fail
/// let mut f = stretchy::Formatter::default();
/// f.begin();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    literal: bool,
    separator: String,
    row_end: String,
    begin: String,
    end: String,
    arrange: bool,
    index_label: Option<String>,
    // Per-render state.
    width: usize,
    output: String,
    scratch: String,
}

impl Default for Formatter {
    /// Plain text, aligned in columns, wrapped in `[` and `]`.
    fn default() -> Self {
        Formatter {
            literal: false,
            separator: ",".into(),
            row_end: String::new(),
            begin: "[".into(),
            end: "]".into(),
            arrange: true,
            index_label: None,
            width: 0,
            output: String::new(),
            scratch: String::new(),
        }
    }
}

impl Formatter {
    /// Literal text separated by `", "`, rows terminated by `,`, no column
    /// alignment. Used by the `Debug` implementations of the containers.
    pub fn developer() -> Self {
        Self::default().literal(true).separator(", ").row_end(",").arrange(false)
    }

    /// A `Formatter` configured by `spec`, with no delimiters.
    pub fn from_spec(spec: &FormatSpec) -> Self {
        let f = Self::default().literal(spec.literal).delimiters("", "");
        match &spec.layout {
            Layout::Columns => f.arrange(true),
            Layout::Separated(sep) => f.arrange(false).separator(sep.clone()),
        }
    }

    /// Parses `spec` and calls [`Formatter::from_spec()`].
    pub fn parse(spec: &str) -> Result<Self> { Ok(Self::from_spec(&FormatSpec::parse(spec)?)) }

    /// Whether to print [`Cell::write_literal()`] instead of
    /// [`Cell::write_plain()`].
    pub fn literal(mut self, literal: bool) -> Self { self.literal = literal; self }

    /// Printed between cells, unless arranging in columns.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Printed after every row but the last, before the line break.
    pub fn row_end(mut self, row_end: impl Into<String>) -> Self {
        self.row_end = row_end.into();
        self
    }

    /// Printed around each row and each plane.
    pub fn delimiters(mut self, begin: impl Into<String>, end: impl Into<String>) -> Self {
        self.begin = begin.into();
        self.end = end.into();
        self
    }

    /// Pad every cell to the global maximum width, one space between cells.
    /// The separator is ignored.
    pub fn arrange(mut self, arrange: bool) -> Self { self.arrange = arrange; self }

    /// Print a line before each 2-D slice of a container with three or more
    /// dimensions. Every `{}` in `template` is replaced by the indices that
    /// select the slice, separated by `", "`.
    pub fn index_label(mut self, template: impl Into<String>) -> Self {
        self.index_label = Some(template.into());
        self
    }

    /// Renders `container` within its own [`Render::boundaries()`].
    #[tracing::instrument(level = "trace", skip_all, fields(dim = container.dim()))]
    pub fn render<R: Render + ?Sized>(&mut self, container: &R) -> Result<String> {
        let bounds = container.boundaries();
        self.run(container, &bounds)
    }

    /// Renders `container` within `bounds`, which must have one [`Bounds`]
    /// per dimension.
    ///
    /// `bounds` may reach beyond the materialized content, in which case the
    /// extra cells print as the default value.
    #[tracing::instrument(level = "trace", skip_all, fields(dim = container.dim()))]
    pub fn render_within<R: Render + ?Sized>(&mut self, container: &R, bounds: &[Bounds]) -> Result<String> {
        if bounds.len() != container.dim() {
            return Err(Error::Arity {expected: container.dim(), got: bounds.len()});
        }
        self.run(container, bounds)
    }

    fn run<R: Render + ?Sized>(&mut self, container: &R, bounds: &[Bounds]) -> Result<String> {
        self.width = 0;
        self.output.clear();
        container.measure(self, bounds)?;
        container.emit(self, bounds, 0, &mut Vec::new())?;
        tracing::debug!(width = self.width, bytes = self.output.len(), "rendered");
        Ok(std::mem::take(&mut self.output))
    }

    /// The widest cell seen so far in the current render.
    pub fn width(&self) -> usize { self.width }

    // ------------------------------------------------------------------------
    // Called by implementations of `Render`.

    /// Writes the text of `cell` into `self.scratch` and returns its width.
    fn text(&mut self, cell: &dyn Cell) -> std::result::Result<usize, fmt::Error> {
        self.scratch.clear();
        if self.literal {
            cell.write_literal(&mut self.scratch)?;
        } else {
            cell.write_plain(&mut self.scratch)?;
        }
        Ok(self.scratch.chars().count())
    }

    /// Widens the columns to fit `cell`.
    pub(crate) fn measure(&mut self, cell: &dyn Cell) -> fmt::Result {
        let width = self.text(cell)?;
        self.width = self.width.max(width);
        Ok(())
    }

    /// Like [`Formatter::measure()`], but only if `shown` reaches past
    /// `materialized`.
    pub(crate) fn measure_padding(&mut self, shown: Bounds, materialized: Bounds, default: &dyn Cell) -> fmt::Result {
        if shown.exceeds(materialized) { self.measure(default) } else { Ok(()) }
    }

    /// Prints `cell`, preceded by a separator unless it is `first` in its
    /// row.
    pub(crate) fn cell(&mut self, cell: &dyn Cell, first: bool) -> fmt::Result {
        if !first {
            if self.arrange {
                self.output.push(' ');
            } else {
                self.output.push_str(&self.separator);
            }
        }
        let width = self.text(cell)?;
        let padding = if self.arrange { self.width.saturating_sub(width) } else { 0 };
        if cell.is_numeric() {
            push_spaces(&mut self.output, padding);
            self.output.push_str(&self.scratch);
        } else {
            self.output.push_str(&self.scratch);
            push_spaces(&mut self.output, padding);
        }
        Ok(())
    }

    /// Opens a row or plane.
    pub(crate) fn begin(&mut self) { self.output.push_str(&self.begin); }

    /// Closes a row or plane.
    pub(crate) fn end(&mut self) { self.output.push_str(&self.end); }

    /// Separates two planes of a `dim`-dimensional container at nesting
    /// `depth`.
    pub(crate) fn row_break(&mut self, dim: usize, depth: usize) {
        self.output.push_str(&self.row_end);
        for _ in 1..dim { self.output.push('\n'); }
        self.indent(depth + 1);
    }

    /// Prints the index label of the 2-D slice selected by `prefix`, if a
    /// template is configured.
    pub(crate) fn label(&mut self, prefix: &[isize], depth: usize) -> fmt::Result {
        let Some(template) = &self.index_label else { return Ok(()) };
        let mut indices = String::new();
        for (n, i) in prefix.iter().enumerate() {
            if n > 0 { indices.push_str(", "); }
            write!(indices, "{}", i)?;
        }
        self.output.push_str(&template.replace("{}", &indices));
        self.output.push('\n');
        self.indent(depth + 1);
        Ok(())
    }

    fn indent(&mut self, depth: usize) {
        push_spaces(&mut self.output, depth * self.begin.chars().count());
    }
}

fn push_spaces(s: &mut String, n: usize) {
    s.extend(std::iter::repeat(' ').take(n));
}

// ----------------------------------------------------------------------------
