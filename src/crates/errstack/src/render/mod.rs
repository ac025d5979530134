//! Rendering stacks for humans
//!
//! [`Stack::roll_out`](crate::Stack::roll_out) detaches a stack into a
//! [`RenderedStack`], a string-only view. That view pretty-prints itself
//! through a compiled [`Layout`]:
//!
//! ```text
//! sixth:
//! ....seventh
//! fifth:
//! second:
//! ....fourth
//! ....third
//! first:
//! ```
//!
//! The default layout is compiled once per process. Custom layouts are built
//! from [`PrettyPrintOptions`] with [`Layout::compile`].

mod layout;
mod options;
mod rendered;
mod writer;

pub use layout::Layout;
pub use options::{
    PrettyPrintOptions, DEFAULT_ENTRY_PATTERN, DEFAULT_HEADER_PATTERN, ENTRY_PLACEHOLDER,
    TARGET_PLACEHOLDER,
};
pub use rendered::{RenderedLayer, RenderedStack};

/// Returned by [`RenderedStack::pretty_print`] when rendering fails
pub const PRETTY_PRINT_PLACEHOLDER: &str = "Pretty print error";
