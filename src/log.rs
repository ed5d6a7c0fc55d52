//! Logger setup

use log::LevelFilter;
use std::env;

/// Initialise the global logger
///
/// `Debug` when `debug_enabled`, otherwise `Warn` so records do not interleave
/// with the puzzle rows. `RUST_LOG` overrides both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A second call (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("logger initialised at {level:?} level");
    }
}
