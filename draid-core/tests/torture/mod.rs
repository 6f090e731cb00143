// vim: tw=80
//! Torture tests: random block patterns against file-backed vdevs

mod vdev_draid;

/// Scale factor for test length, settable from the environment
pub fn test_scale() -> f64 {
    std::env::var("DRAID_TEST_SCALE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1.0)
}
