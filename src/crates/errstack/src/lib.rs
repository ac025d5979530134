//! Layered error stacks
//!
//! `errstack` lets code that is unwinding a call chain build a hierarchy of
//! the errors it met on the way, without giving up `std::error::Error`
//! identity checks.
//!
//! A [`Stack`] is a list of layers, newest first. Each layer has a *target*
//! (the error it was wrapped with) and a *chain* of annotations:
//!
//! - [`Stack::wrap`] starts a new layer. Its target becomes the stack's
//!   `source()`, so [`is`] and [`find`] see it.
//! - [`Stack::add`] records context on the newest layer. Annotations are
//!   never visible to identity checks.
//!
//! # Modules
//!
//! - `stack` - The stack value and its construction operations
//! - `identity` - Walking `source()` chains, sentinel comparison
//! - `context` - `Result` extension for building stacks with `?`
//! - `render` - Rolled-out views and the pretty-print layout
//!
//! # Example
//!
//! ```rust
//! use errstack::Stack;
//!
//! let stack = Stack::new("first")
//!     .wrap("second")
//!     .add("third")
//!     .add("fourth")
//!     .wrap("fifth")
//!     .wrap("sixth")
//!     .add("seventh");
//!
//! assert_eq!(
//!     stack.to_string(),
//!     "sixth: seventh. fifth. second: fourth, third. first."
//! );
//!
//! let pretty = stack.roll_out().pretty_print();
//! assert_eq!(
//!     pretty,
//!     "sixth:\n....seventh\nfifth:\nsecond:\n....fourth\n....third\nfirst:"
//! );
//! ```

pub mod context;
pub mod identity;
pub mod render;
pub mod stack;

pub use context::StackContext;
pub use identity::{find, is, root_cause, sources, Sources};
pub use render::{
    Layout, PrettyPrintOptions, RenderedLayer, RenderedStack, PRETTY_PRINT_PLACEHOLDER,
};
pub use stack::{Layer, Stack};

use thiserror::Error;

/// Any error value a stack can hold
///
/// Every `std::error::Error + Send + Sync + 'static` converts into it, as do
/// `&str`, `String` and `anyhow::Error`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while compiling a pretty-print layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A pattern lacks its required placeholder
    #[error("pattern {pattern:?} is missing the {{{placeholder}}} placeholder")]
    MissingPlaceholder {
        pattern: String,
        placeholder: &'static str,
    },

    /// A pattern uses a placeholder that does not belong to it
    #[error("pattern {pattern:?} uses unknown placeholder {{{name}}}")]
    UnknownPlaceholder { pattern: String, name: String },

    /// A pattern repeats its placeholder
    #[error("pattern {pattern:?} uses the {{{placeholder}}} placeholder more than once")]
    DuplicatePlaceholder {
        pattern: String,
        placeholder: &'static str,
    },
}

/// Result type for errstack operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
