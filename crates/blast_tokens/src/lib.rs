#![doc = include_str!("../README.md")]

use crate::spanned::{LineReader, Span, Spanned};
use std::fmt::{Display, Formatter};

pub mod spanned;
pub mod token;

/// An error along with the source it was found in, displayed as an excerpt of that source
/// pointing at the error's location.
#[derive(Debug)]
pub struct SpannedError<'s, E> {
    error: E,
    location: Option<Span>,
    src: &'s str,
    name: &'s str,
}

impl<'s, E> SpannedError<'s, E> {
    pub fn new(error: E, location: impl Into<Option<Span>>, src: &'s str) -> Self {
        Self {
            error,
            location: location.into(),
            src,
            name: "<input>",
        }
    }

    /// Sets the name shown for the source, such as its file path
    pub fn named(mut self, name: &'s str) -> Self {
        self.name = name;
        self
    }
}

impl<'s, E: Spanned> SpannedError<'s, E> {
    /// Creates a new spanned error from an error that knows its own location
    pub fn from_spanned(error: E, src: &'s str) -> Self {
        let span = error.span();
        Self::new(error, span, src)
    }
}

impl<E: Display> Display for SpannedError<'_, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.error)?;
        let Some(location) = &self.location else {
            return Ok(());
        };
        let (line, col) = location.line_col(self.src);
        writeln!(f, "  -> {}:{line}:{col}", self.name)?;
        let Some((lines, base_line)) = LineReader::new(2, 2).lines(self.src, location) else {
            return Ok(());
        };
        let width = lines
            .iter()
            .map(|line| line.line)
            .max()
            .unwrap_or(0)
            .to_string()
            .len();
        for line in &lines {
            writeln!(f, "{:width$} | {}", line.line, line.src.trim_end())?;
            if line.line == base_line {
                if location.is_empty() {
                    writeln!(f, "{}{}^", " ".repeat(width + 3), "-".repeat(line.col))?;
                } else {
                    writeln!(
                        f,
                        "{}{}{}",
                        " ".repeat(width + 3),
                        " ".repeat(line.col),
                        "~".repeat(location.len())
                    )?;
                }
            }
        }
        Ok(())
    }
}
