//! Compiled pretty-print layouts

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::options::{PrettyPrintOptions, ENTRY_PLACEHOLDER, TARGET_PLACEHOLDER};
use super::writer::LineWriter;
use super::RenderedStack;
use crate::{LayoutError, Result};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_]\w*)\}").unwrap());

static DEFAULT_LAYOUT: LazyLock<Layout> = LazyLock::new(|| {
    Layout::compile(&PrettyPrintOptions::default())
        .expect("errstack: unable to compile the default pretty-print layout")
});

/// A line pattern split around its single placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern {
    prefix: String,
    suffix: String,
}

impl Pattern {
    fn compile(pattern: &str, placeholder: &'static str) -> Result<Self> {
        let mut found: Option<Range<usize>> = None;

        for caps in PLACEHOLDER_REGEX.captures_iter(pattern) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };

            if name.as_str() != placeholder {
                return Err(LayoutError::UnknownPlaceholder {
                    pattern: pattern.to_string(),
                    name: name.as_str().to_string(),
                });
            }
            if found.is_some() {
                return Err(LayoutError::DuplicatePlaceholder {
                    pattern: pattern.to_string(),
                    placeholder,
                });
            }
            found = Some(whole.range());
        }

        let range = found.ok_or_else(|| LayoutError::MissingPlaceholder {
            pattern: pattern.to_string(),
            placeholder,
        })?;

        Ok(Self {
            prefix: pattern[..range.start].to_string(),
            suffix: pattern[range.end..].to_string(),
        })
    }

    pub(crate) fn write<W: fmt::Write + ?Sized>(&self, out: &mut W, value: &str) -> fmt::Result {
        out.write_str(&self.prefix)?;
        out.write_str(value)?;
        out.write_str(&self.suffix)
    }
}

/// A compiled pretty-print layout
///
/// Compile custom layouts once with [`Layout::compile`] and reuse them; the
/// default layout lives in [`Layout::default_layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    header: Pattern,
    entry: Pattern,
    separate_layers: bool,
}

impl Layout {
    /// Compile a layout from options
    ///
    /// Fails if the header pattern does not contain exactly one `{target}`,
    /// if the entry pattern does not contain exactly one `{entry}`, or if
    /// either uses any other placeholder.
    pub fn compile(options: &PrettyPrintOptions) -> Result<Self> {
        Ok(Self {
            header: Pattern::compile(&options.header, TARGET_PLACEHOLDER)?,
            entry: Pattern::compile(&options.entry, ENTRY_PLACEHOLDER)?,
            separate_layers: options.separate_layers,
        })
    }

    /// The process-wide default layout
    ///
    /// Compiled on first use.
    ///
    /// # Panics
    ///
    /// Panics if the built-in patterns fail to compile.
    pub fn default_layout() -> &'static Layout {
        &DEFAULT_LAYOUT
    }

    /// Render `stack` into `out`
    ///
    /// Lines are separated by `\n`, with no trailing newline. Errors come
    /// only from `out` itself.
    pub fn render<W: fmt::Write + ?Sized>(&self, stack: &RenderedStack, out: &mut W) -> fmt::Result {
        let mut writer = LineWriter::new(out);

        for (index, layer) in stack.layers().iter().enumerate() {
            if index > 0 && self.separate_layers {
                writer.push_blank()?;
            }

            writer.push(&self.header, layer.key())?;
            for entry in layer.values() {
                writer.push(&self.entry, entry)?;
            }
        }

        Ok(())
    }
}

impl Default for Layout {
    fn default() -> Self {
        DEFAULT_LAYOUT.clone()
    }
}
