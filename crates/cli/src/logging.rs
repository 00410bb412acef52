// crates/cli/src/logging.rs
use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Target of the pipeline failure record. Always enabled at `error`.
pub const FAILURE_TARGET: &str = "topwords::failure";

/// Install the stderr logger. Records print as `[LEVEL] message`.
///
/// `RUST_LOG` overrides the default `warn` filter, except that failures
/// logged under [`FAILURE_TARGET`] are never filtered out.
pub fn init() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.filter_module(FAILURE_TARGET, LevelFilter::Error);
    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    if let Err(e) = builder.try_init() {
        eprintln!("Logger Error: {e}");
    }
}
