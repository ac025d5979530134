//! Line writer for pretty-print output

use std::fmt;

use super::layout::Pattern;

/// Writes newline-separated lines without a trailing newline
pub(crate) struct LineWriter<'a, W: fmt::Write + ?Sized> {
    out: &'a mut W,
    started: bool,
}

impl<'a, W: fmt::Write + ?Sized> LineWriter<'a, W> {
    pub(crate) fn new(out: &'a mut W) -> Self {
        Self {
            out,
            started: false,
        }
    }

    pub(crate) fn push(&mut self, pattern: &Pattern, value: &str) -> fmt::Result {
        self.start_line()?;
        pattern.write(&mut *self.out, value)
    }

    pub(crate) fn push_blank(&mut self) -> fmt::Result {
        self.start_line()
    }

    fn start_line(&mut self) -> fmt::Result {
        if self.started {
            self.out.write_char('\n')?;
        }
        self.started = true;
        Ok(())
    }
}
