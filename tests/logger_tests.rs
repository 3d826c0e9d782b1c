//! Integration tests for logger behavior.

use famgraph::logger::{init_file_logging, level, set_level, set_level_from_str, Level};
use famgraph::{debug, error, info, warn};
use std::fs;
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARNING"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn set_level_round_trips() {
    set_level(Level::Error);
    assert_eq!(level(), Level::Error);
    set_level(Level::Debug);
    assert_eq!(level(), Level::Debug);
}

#[test]
fn logs_go_to_file_once_enabled() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("logs").join("famgraph.log");

    assert!(init_file_logging(&log_path));
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");

    // Other tests change the level concurrently; errors are logged at every level
    let contents = fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("[ERROR] error integration"));
}
