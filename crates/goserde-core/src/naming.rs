//! Naming convention utilities.
//!
//! Go exported identifiers are `PascalCase` (`HostConfig`, `IPAddress`);
//! Rust fields are `snake_case`.
//!
//! | Input | Output |
//! |-------|--------|
//! | `HostConfig` | `host_config` |
//! | `IPAddress` | `ip_address` |
//! | `ID` | `id` |
//! | `already_snake` | `already_snake` |

use once_cell::sync::Lazy;
use regex::Regex;

/// Word boundary before a capitalized word: `tC` in `HostConfig`, `PA` in `IPAddress`.
#[allow(clippy::expect_used)] // Safe: constant pattern
static FIRST_CAP: Lazy<Regex> =
    Lazy::new(|| Regex::new("(.)([A-Z][a-z]+)").expect("valid first-cap pattern"));

/// Lowercase or digit followed by an uppercase letter.
#[allow(clippy::expect_used)] // Safe: constant pattern
static ALL_CAP: Lazy<Regex> =
    Lazy::new(|| Regex::new("([a-z0-9])([A-Z])").expect("valid all-cap pattern"));

/// The one acronym whose letters the word-boundary passes split apart.
const IP_SPLIT: &str = "i_p";
const IP_JOINED: &str = "ip";

/// Convert a Go identifier to snake_case.
///
/// # Examples
///
/// ```
/// use goserde_core::to_snake_case;
///
/// assert_eq!(to_snake_case("HostConfig"), "host_config");
/// assert_eq!(to_snake_case("IPAddress"), "ip_address");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let snake = FIRST_CAP.replace_all(s, "${1}_${2}");
    let snake = ALL_CAP.replace_all(&snake, "${1}_${2}");
    snake.to_lowercase().replace(IP_SPLIT, IP_JOINED)
}
