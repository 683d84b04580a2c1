//! Process-level setup for binaries built on thumbview.

/// Installs `env_logger` as the `log` backend.
///
/// Safe to call more than once; later calls are ignored. Library code never
/// calls this, so embedding applications keep control of their logger.
///
/// ```no_run
/// thumbview::init_logging();
/// ```
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("thumbview logging initialized");
    }
}
