use blast::args::{Args, Input};
use blast::driver::Driver;
use blast::logging::init_logging;
use clap::Parser;
use eyre::WrapErr;
use std::fs;
use std::io::{stderr, stdin, stdout};
use std::process::ExitCode;
use tracing::{debug, trace};

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting blast with args: {args:?}");
    debug!("blast version: {}", env!("CARGO_PKG_VERSION"));

    let mut driver = Driver::new(stdout().lock(), stderr().lock()).dump_tokens(args.tokens);
    let ok = match args.input() {
        Input::File(path) => {
            let src = fs::read_to_string(path)
                .wrap_err_with(|| format!("could not read {}", path.display()))?;
            driver.run(&path.display().to_string(), &src)?
        }
        Input::Expression(src) => driver.run("<expression>", src)?,
        Input::Interactive => {
            driver.repl(stdin().lock())?;
            true
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
