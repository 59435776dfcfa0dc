//! `ask` honours the config file's log level.
//!
//! Lives in its own test binary because the log level is process-global.

use chefbot::cli::{RuntimeOptions, run_ask};
use chefbot::config::{Config, LogLevel};
use tempfile::TempDir;

#[test]
fn test_run_ask_applies_config_log_level() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    let mut config = Config::default();
    config.log_level = LogLevel::Debug;
    config.save_to(&path).unwrap();

    let options = RuntimeOptions {
        config_path: Some(path),
        delay_ms: Some(0),
        ..Default::default()
    };
    log::set_max_level(log::LevelFilter::Off);

    let mut out = Vec::new();
    assert!(run_ask(&options, "tacos", &mut out).unwrap());
    assert_eq!(log::max_level(), log::LevelFilter::Debug);
}
