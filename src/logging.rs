//! Logger bootstrap for the binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter used when `RUST_LOG` is unset.
///
/// Verbose mode only raises this crate to debug, so per-frame script
/// state shows up without the rest of the dependency graph turning chatty.
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    let crate_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!(
        "{},{}={crate_level}",
        LevelFilter::Info,
        env!("CARGO_CRATE_NAME")
    )
    .to_lowercase()
}

/// Installs `env_logger` as the global logger.
///
/// `RUST_LOG` takes precedence over [`default_filter`]. A logger that is
/// already installed is left in place, so repeated calls are harmless.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    if Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already installed; keeping it");
    }
}
