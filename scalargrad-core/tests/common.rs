// Shared helpers for integration tests.

/// Routes `log` output of the library to the test harness.
/// Safe to call from every test: only the first call installs the logger.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
