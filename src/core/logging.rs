//! Logging initialization

/// Initialize the logging system.
///
/// Uses env_logger with a default filter level of `info`; override with the
/// RUST_LOG environment variable. Panics if a logger is already installed.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Initialize logging for tests and embedders that may call more than once.
///
/// Captures output per test and ignores an already-installed logger.
pub fn try_init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(true)
        .try_init();
}
