//! The crate-wide error type.
//!
//! Reading out of range is never an error: it yields the default value.
//! Everything here is a caller contract violation, reported before any
//! mutation or rendering happens, except [`Error::Render`], which passes on
//! a failure from an element's own formatting code.

use thiserror::Error;

/// Errors reported by containers and formatters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index tuple has the wrong number of components.
    #[error("index must have {expected} components, got {got}")]
    Arity { expected: usize, got: usize },

    /// A stride range was given a step of zero.
    #[error("step must not be zero")]
    ZeroStep,

    /// A bulk-load offset has more components than the container has
    /// dimensions.
    #[error("offset has {got} components but the container has {dim} dimensions")]
    OffsetArity { dim: usize, got: usize },

    /// Nested content does not have the nesting depth of the container.
    #[error("content nesting does not match a {dim}-dimensional container")]
    Nesting { dim: usize },

    /// Too few dimensions for the kind of container requested.
    #[error("container needs at least {min} dimensions, got {got}")]
    Dimension { min: usize, got: usize },

    /// Unrecognized format specifier.
    #[error("unknown format code '{0}'")]
    Format(String),

    /// An element failed to write its text.
    #[error("an element failed to render")]
    Render(#[from] std::fmt::Error),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
