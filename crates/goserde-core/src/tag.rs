//! Struct tag interpretation.
//!
//! Reads the `json` key of a Go struct tag:
//!
//! | Tag | rename | optional | skip |
//! |-----|--------|----------|------|
//! | `` `json:"id"` `` | `id` | no | no |
//! | `` `json:"id,omitempty"` `` | `id` | yes | no |
//! | `` `json:",omitempty"` `` | - | yes | no |
//! | `` `json:""` `` | - | no | no |
//! | `` `json:"-"` `` | - | no | yes |
//! | `` `yaml:"id"` `` | - | no | no |

use crate::model::TagInfo;
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)] // Safe: constant pattern
static JSON_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:^|[\s`])json:"(?P<name>[^,"]*)(?P<options>(?:,[^,"]*)*)""#)
        .expect("valid json tag pattern")
});

const OMITEMPTY: &str = "omitempty";
const IGNORE_NAME: &str = "-";

/// Interpret a raw tag literal (delimiters included).
///
/// Never fails: anything that does not carry a well-formed `json` key yields
/// the default (no rename, not optional).
pub fn parse_tag(raw: Option<&str>) -> TagInfo {
    let Some(raw) = raw else {
        return TagInfo::default();
    };
    let Some(caps) = JSON_TAG.captures(raw) else {
        return TagInfo::default();
    };

    let name = caps.name("name").map_or("", |m| m.as_str());
    let options = caps.name("options").map_or("", |m| m.as_str());

    if name == IGNORE_NAME && options.is_empty() {
        return TagInfo {
            skip: true,
            ..TagInfo::default()
        };
    }

    TagInfo {
        rename: (!name.is_empty()).then(|| name.to_string()),
        optional: options.split(',').any(|opt| opt == OMITEMPTY),
        skip: false,
    }
}
