#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized config TOML parsing tests
// ============================================================================

#[test_case(r#"log_level = "info""#, "info")]
#[test_case(r#"log_level = "debug""#, "debug")]
#[test_case(r#"log_level = "warn""#, "warn")]
#[test_case(r#"log_level = "error""#, "error")]
#[test_case(r#"log_level = "trace""#, "trace")]
#[test_case("", "warn")]
fn TranslateConfig___log_level_toml___parses_correctly(toml: &str, expected_level: &str) {
    let config = TranslateConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.log_level, expected_level);
}

#[test_case("strict = true", true)]
#[test_case("strict = false", false)]
#[test_case("", false)]
fn TranslateConfig___strict_toml___parses_correctly(toml: &str, expected: bool) {
    let config = TranslateConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.strict, expected);
}

#[test_case("pass_comments = false", false)]
#[test_case("pass_comments = true", true)]
#[test_case("", true)]
fn TranslateConfig___pass_comments_toml___parses_correctly(toml: &str, expected: bool) {
    let config = TranslateConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.pass_comments, expected);
}

// ============================================================================
// Parameterized derive validation tests
// ============================================================================

#[test_case("Debug", true)]
#[test_case("serde::Serialize", true)]
#[test_case("_Private", true)]
#[test_case("", false)]
#[test_case("Clone, Debug", false)]
#[test_case("9Lives", false)]
#[test_case("serde::", false)]
fn is_derive_path___candidate___validates(name: &str, expected: bool) {
    assert_eq!(is_derive_path(name), expected);
}
