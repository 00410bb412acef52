use topwords_cli::args::Args;
use topwords_cli::config::Config;
use topwords_cli::error::AppError;
use topwords_cli::logging;

fn main() {
    logging::init();

    let args = Args::parse_args();
    let result = Config::try_from(args)
        .map_err(AppError::from)
        .and_then(|config| topwords_cli::run(&config));

    // Failures are reported but the process still terminates normally.
    if let Err(e) = result {
        log::error!(target: logging::FAILURE_TARGET, "{}: {e}", e.stage());
    }
}
