//! the args for running blast

use crate::logging::LoggingArgs;
use clap::ArgGroup;
use std::path::{Path, PathBuf};

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Parses blast source and prints its syntax tree")]
#[clap(group(ArgGroup::new("input").required(true).args(["file", "expression", "interactive"])))]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// A blast source file to parse
    #[clap(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    file: Option<PathBuf>,
    /// Parse this source text instead of a file
    #[clap(short = 'e', long = "expression", value_name = "EXPR")]
    expression: Option<String>,
    /// Parse one line at a time from stdin until it closes
    #[clap(short = 'i', long = "interactive")]
    interactive: bool,
    /// Print each token as `kind: lexeme` instead of the syntax tree
    #[clap(long)]
    pub tokens: bool,
}

/// Where source text comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    File(&'a Path),
    Expression(&'a str),
    Interactive,
}

impl Args {
    /// Gets where source text should be read from
    pub fn input(&self) -> Input<'_> {
        match (&self.file, &self.expression) {
            (Some(file), _) => Input::File(file),
            (None, Some(expression)) => Input::Expression(expression),
            (None, None) => Input::Interactive,
        }
    }

    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}
