use log::LevelFilter;

/// Initialise the env_logger backend.
///
/// Logs at `Info` by default, `Debug` when `verbose` is set. An explicit
/// `RUST_LOG` always wins.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();
    log::debug!("Logger initialized at {:?} level", level);
}
