//! Diagnostics are written through the `log` facade to stderr, which most hosts forward to their
//! own console. Verbosity is read from the `OVERDRIVE_LOG` environment variable using the usual
//! `env_logger` filter syntax.

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "OVERDRIVE_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs the logger. Hosts may load several instances of the plugin into one process, so only
/// the first call wins and later ones are silently ignored.
pub fn init() {
    let env = env_logger::Env::new().filter_or(LOG_ENV, DEFAULT_FILTER);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
