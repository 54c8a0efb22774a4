//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use skyglobe_cli::CliError;

fn main() {
    skyglobe_cli::init_logging();
    match skyglobe_cli::run() {
        Ok(()) => {}
        // Help and version requests are reported by clap itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("skyglobe: {err}");
            std::process::exit(1);
        }
    }
}
