#![allow(non_snake_case)]

use super::*;
use test_case::test_case;
use tracing::Level;

#[test_case(LogLevel::Trace, LevelFilter::TRACE)]
#[test_case(LogLevel::Debug, LevelFilter::DEBUG)]
#[test_case(LogLevel::Info, LevelFilter::INFO)]
#[test_case(LogLevel::Warn, LevelFilter::WARN)]
#[test_case(LogLevel::Error, LevelFilter::ERROR)]
#[test_case(LogLevel::Off, LevelFilter::OFF)]
fn level_filter___each_level___maps_to_filter(level: LogLevel, expected: LevelFilter) {
    assert_eq!(level_filter(level), expected);
}

#[test]
fn level_filter___warn___enables_error_but_not_info() {
    let filter = level_filter(LogLevel::Warn);

    assert!(Level::ERROR <= filter);
    assert!(Level::WARN <= filter);
    assert!(Level::INFO > filter);
}

#[test]
fn level_filter___off___enables_nothing() {
    let filter = level_filter(LogLevel::Off);

    assert!(Level::ERROR > filter);
}
