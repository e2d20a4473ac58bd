//! Runs source text through the scanner and parser, printing the result or the errors found.

use blast_parsing::{parse, scan};
use blast_tokens::spanned::Spanned;
use blast_tokens::SpannedError;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

const PROMPT: &str = ">>> ";

/// Writes printed programs to `out` and diagnostics to `err`
#[derive(Debug)]
pub struct Driver<O, E> {
    out: O,
    err: E,
    tokens: bool,
}

impl<O: Write, E: Write> Driver<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            tokens: false,
        }
    }

    /// Print tokens as `kind: lexeme` instead of parsing them
    pub fn dump_tokens(mut self, tokens: bool) -> Self {
        self.tokens = tokens;
        self
    }

    /// Runs a single program, where `name` is how the source is referred to in diagnostics.
    ///
    /// Returns whether the program was free of errors. Nothing is written to `out` when it wasn't.
    #[instrument(level = "debug", skip(self, src))]
    pub fn run(&mut self, name: &str, src: &str) -> io::Result<bool> {
        let output = scan(src);
        if output.has_errors() {
            for error in &output.errors {
                self.report(name, src, error)?;
            }
            return Ok(false);
        }

        if self.tokens {
            for token in &output.tokens {
                writeln!(self.out, "{:?}: {}", token.kind(), token.lexeme())?;
            }
            return Ok(true);
        }

        match parse(&output.tokens) {
            Ok(block) => {
                debug!("parsed {} statements from {name}", block.len());
                write!(self.out, "{block}")?;
                self.out.flush()?;
                Ok(true)
            }
            Err(error) => {
                self.report(name, src, &error)?;
                writeln!(self.err, "  while parsing {}", error.non_terminal_stack())?;
                Ok(false)
            }
        }
    }

    /// Reads programs from `input` one line at a time until it's exhausted. Errors are reported
    /// and the next line is read regardless.
    pub fn repl(&mut self, input: impl BufRead) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;
            let Some(line) = lines.next() else {
                writeln!(self.out)?;
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            self.run("<stdin>", &line)?;
        }
        info!("input closed");
        Ok(())
    }

    fn report<D: Display + Spanned>(&mut self, name: &str, src: &str, error: D) -> io::Result<()> {
        let error = SpannedError::from_spanned(error, src).named(name);
        write!(
            self.err,
            "{}: {error}",
            "error".if_supports_color(Stderr, |text| text.bright_red())
        )
    }
}
