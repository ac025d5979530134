//! Pretty-print layout options

use super::Layout;
use crate::Result;

/// Placeholder substituted with a layer's target message
pub const TARGET_PLACEHOLDER: &str = "target";

/// Placeholder substituted with one chain entry
pub const ENTRY_PLACEHOLDER: &str = "entry";

/// Default pattern for a layer's header line
pub const DEFAULT_HEADER_PATTERN: &str = "{target}:";

/// Default pattern for a chain entry line
pub const DEFAULT_ENTRY_PATTERN: &str = "....{entry}";

/// Options describing how a rolled-out stack is pretty-printed
///
/// Patterns use `{target}` and `{entry}` placeholders. They are checked when
/// compiled into a [`Layout`].
///
/// # Example
///
/// ```rust
/// use errstack::{Layout, PrettyPrintOptions, Stack};
///
/// let options = PrettyPrintOptions::new()
///     .with_header("[{target}]")
///     .with_entry("  - {entry}")
///     .with_separate_layers(true);
/// let layout = Layout::compile(&options).unwrap();
///
/// let stack = Stack::new("disk full").wrap("save failed").add("retrying");
/// assert_eq!(
///     stack.roll_out().pretty_print_with(&layout),
///     "[save failed]\n  - retrying\n\n[disk full]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettyPrintOptions {
    /// Header line of every layer, must contain `{target}` once
    pub header: String,
    /// Line of every chain entry, must contain `{entry}` once
    pub entry: String,
    /// Put a blank line between consecutive layers
    pub separate_layers: bool,
}

impl Default for PrettyPrintOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER_PATTERN.to_string(),
            entry: DEFAULT_ENTRY_PATTERN.to_string(),
            separate_layers: false,
        }
    }
}

impl PrettyPrintOptions {
    /// Create the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header pattern
    pub fn with_header(mut self, pattern: impl Into<String>) -> Self {
        self.header = pattern.into();
        self
    }

    /// Set the chain entry pattern
    pub fn with_entry(mut self, pattern: impl Into<String>) -> Self {
        self.entry = pattern.into();
        self
    }

    /// Enable or disable blank lines between layers
    pub fn with_separate_layers(mut self, separate: bool) -> Self {
        self.separate_layers = separate;
        self
    }

    /// Check that both patterns compile
    pub fn validate(&self) -> Result<()> {
        Layout::compile(self).map(|_| ())
    }
}
