//! Logging setup shared by the binary

use clap::{value_parser, ArgAction, Args};
use std::io::stderr;
use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

/// How chatty blast is on stderr.
///
/// By default little more than the REPL closing is logged. `-v` adds the version, per-program
/// summaries and syntax errors as they are raised, `-vv` every scanned token and production.
#[derive(Debug, Default, Clone, Copy, Args)]
pub struct LoggingArgs {
    /// Log parse summaries, `-vv` to trace every token
    #[clap(short = 'v', long, value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Only log errors, `-qq` to log nothing
    #[clap(short = 'q', long, value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    pub fn log_level_filter(&self) -> LevelFilter {
        match (self.verbose, self.quiet) {
            (0, 0) => LevelFilter::INFO,
            (1, _) => LevelFilter::DEBUG,
            (_, 0) => LevelFilter::TRACE,
            (_, 1) => LevelFilter::ERROR,
            _ => LevelFilter::OFF,
        }
    }
}

/// Installs the global subscriber. Log lines go to stderr so they never mix with printed output.
pub fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(stderr)
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
