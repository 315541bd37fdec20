
/// Routes `log` output through the test harness so it only shows for failing tests.
pub(crate) fn init_logging() {
    // Only the first test to get here installs the logger.
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}
