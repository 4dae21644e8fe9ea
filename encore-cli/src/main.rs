//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use encore_cli::{CliError, LOG_ENV, run};

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    let mut logger = colog::default_builder();
    logger.filter(None, log::LevelFilter::Warn);
    logger.parse_env(LOG_ENV);
    logger.init();

    match run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("encore: {err}");
            std::process::exit(1);
        }
    }
}
