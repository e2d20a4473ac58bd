//! A trait that can provide the [Span] of the source text something was read from

/// A trait that can provide the [Span] of the source text something was read from
pub trait Spanned {
    fn span(&self) -> Span;
}

impl<S: Spanned + ?Sized> Spanned for &S {
    fn span(&self) -> Span {
        (**self).span()
    }
}

/// A byte range into a source string
#[derive(Debug, Default, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Gets a span directly after this span
    pub const fn end(&self) -> Self {
        Self {
            offset: self.offset + self.len,
            len: 0,
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the 1-based line and column this span starts at within `src`.
    ///
    /// Offsets past the end of `src` are clamped to the end.
    pub fn line_col(&self, src: &str) -> (usize, usize) {
        let before = src.get(..self.offset).unwrap_or(src);
        let line = before.matches('\n').count() + 1;
        let col = before
            .rsplit('\n')
            .next()
            .map_or(0, |line| line.chars().count());
        (line, col + 1)
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}

/// A line reader struct that's responsible for getting lines around a span
#[derive(Debug, Default)]
pub struct LineReader {
    before: usize,
    after: usize,
}

impl LineReader {
    /// Creates a new line reader that gets `before` number of lines before a span and `after` number
    /// of lines after.
    pub fn new(before: usize, after: usize) -> Self {
        Self { before, after }
    }

    /// Gets the lines for a given span, plus the base line number.
    ///
    /// Returns `None` if the span starts past the end of `src`.
    pub fn lines<'s>(&self, src: &'s str, span: &Span) -> Option<(Vec<Line<'s>>, usize)> {
        let mut lines = vec![];
        let mut base_line = None;
        let mut byte_offset = 0usize;
        for (idx, text) in src.split('\n').enumerate() {
            let line_n = idx + 1;
            let end = byte_offset + text.len();
            let mut col = 0;
            if base_line.is_none() && (byte_offset..=end).contains(&span.offset) {
                base_line = Some(line_n);
                let head = span.offset - byte_offset;
                col = text.get(..head).map_or(head, |head| head.chars().count());
            }
            lines.push(Line {
                line: line_n,
                col,
                src: text.trim_end_matches('\r'),
            });
            byte_offset = end + 1;
        }

        let base_line = base_line?;
        let range = base_line.saturating_sub(self.before)..=base_line.saturating_add(self.after);
        lines.retain(|line| range.contains(&line.line));
        Some((lines, base_line))
    }
}

#[derive(Debug)]
pub struct Line<'s> {
    pub line: usize,
    pub col: usize,
    pub src: &'s str,
}
