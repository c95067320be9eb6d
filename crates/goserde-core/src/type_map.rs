//! Go type expression to Rust type mapping.
//!
//! # Type Mappings
//!
//! | Go | Rust |
//! |----|------|
//! | `string` | `String` |
//! | `int` / `uint` | `isize` / `usize` |
//! | `int64` / `uint64` | `i64` / `u64` |
//! | `float64` | `f64` |
//! | `*T` | `T` |
//! | `[]T` | `Vec<T>` |
//! | `[3]T` | `(T, T, T)` (up to [`MAX_TUPLE_ARITY`] elements) |
//! | `map[K]V` | `HashMap<K, V>` |
//! | `pkg.T` | `pkg::T` |
//! | `struct { ... }` | `HashMap<String, String>` |
//! | anything else | [`UNSUPPORTED_TYPE_PLACEHOLDER`] |
//!
//! Identifiers outside the scalar table pass through unchanged; they are
//! assumed to name another type declared in the same file.

use crate::model::TypeExpr;
use tracing::warn;

/// Emitted for type expressions with no translation.
///
/// Deliberately not valid Rust syntax, so generated code containing it fails
/// to compile and cannot be mistaken for a real type.
pub const UNSUPPORTED_TYPE_PLACEHOLDER: &str = "<unsupported>";

/// Longest fixed-size array mapped to a tuple. serde implements its traits
/// for tuples up to this arity.
pub const MAX_TUPLE_ARITY: usize = 16;

/// Node kind reported for arrays longer than [`MAX_TUPLE_ARITY`].
const OVERSIZED_ARRAY_KIND: &str = "array_type";

/// Go predeclared scalar types and their Rust equivalents
struct TypeMapping {
    go_type: &'static str,
    rust_type: &'static str,
}

const TYPE_MAPPINGS: &[TypeMapping] = &[
    TypeMapping {
        go_type: "string",
        rust_type: "String",
    },
    TypeMapping {
        go_type: "bool",
        rust_type: "bool",
    },
    TypeMapping {
        go_type: "int",
        rust_type: "isize",
    },
    TypeMapping {
        go_type: "int8",
        rust_type: "i8",
    },
    TypeMapping {
        go_type: "int16",
        rust_type: "i16",
    },
    TypeMapping {
        go_type: "int32",
        rust_type: "i32",
    },
    TypeMapping {
        go_type: "int64",
        rust_type: "i64",
    },
    TypeMapping {
        go_type: "uint",
        rust_type: "usize",
    },
    TypeMapping {
        go_type: "uint8",
        rust_type: "u8",
    },
    TypeMapping {
        go_type: "uint16",
        rust_type: "u16",
    },
    TypeMapping {
        go_type: "uint32",
        rust_type: "u32",
    },
    TypeMapping {
        go_type: "uint64",
        rust_type: "u64",
    },
    TypeMapping {
        go_type: "uintptr",
        rust_type: "usize",
    },
    TypeMapping {
        go_type: "byte",
        rust_type: "u8",
    },
    TypeMapping {
        go_type: "rune",
        rust_type: "i32",
    },
    TypeMapping {
        go_type: "float32",
        rust_type: "f32",
    },
    TypeMapping {
        go_type: "float64",
        rust_type: "f64",
    },
];

/// Rust type for an inline anonymous struct. Nested structs are not lifted
/// into their own declarations.
const ANONYMOUS_STRUCT_TYPE: &str = "HashMap<String, String>";

/// Map a Go type expression to Rust type text.
///
/// # Examples
///
/// ```
/// use goserde_core::{TypeExpr, map_type};
///
/// let ty = TypeExpr::slice(TypeExpr::pointer(TypeExpr::ident("Port")));
/// assert_eq!(map_type(&ty), "Vec<Port>");
///
/// let ty = TypeExpr::fixed_array(TypeExpr::literal("2"), TypeExpr::ident("int64"));
/// assert_eq!(map_type(&ty), "(i64, i64)");
/// ```
pub fn map_type(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Literal(text) => text.clone(),
        TypeExpr::Identifier(name) => map_identifier(name).to_string(),
        TypeExpr::Pointer(inner) => map_type(inner),
        TypeExpr::Slice(elem) => format!("Vec<{}>", map_type(elem)),
        TypeExpr::FixedArray { len, elem } => match array_len(len) {
            Some(count) => {
                let elem = map_type(elem);
                format!("({})", vec![elem.as_str(); count].join(", "))
            }
            None => {
                warn!(
                    len = %map_type(len),
                    max = MAX_TUPLE_ARITY,
                    "fixed-size array too long for a tuple, emitting placeholder"
                );
                UNSUPPORTED_TYPE_PLACEHOLDER.to_string()
            }
        },
        TypeExpr::Map { key, value } => {
            format!("HashMap<{}, {}>", map_type(key), map_type(value))
        }
        TypeExpr::Qualified { container, member } => {
            format!("{}::{}", map_type(container), member)
        }
        TypeExpr::AnonymousStruct(_) => ANONYMOUS_STRUCT_TYPE.to_string(),
        TypeExpr::Unsupported { kind } => {
            warn!(kind = %kind, "no Rust equivalent for Go type expression, emitting placeholder");
            UNSUPPORTED_TYPE_PLACEHOLDER.to_string()
        }
    }
}

/// Look up a predeclared scalar; other names pass through.
fn map_identifier(name: &str) -> &str {
    TYPE_MAPPINGS
        .iter()
        .find(|m| m.go_type == name)
        .map_or(name, |m| m.rust_type)
}

/// Repeat count of a fixed-size array. Anything that is not a decimal
/// integer literal (a named constant, an expression) counts as zero.
/// `None` when the length exceeds [`MAX_TUPLE_ARITY`].
fn array_len(len: &TypeExpr) -> Option<usize> {
    let text = map_type(len);
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Some(0);
    }
    match text.parse::<usize>() {
        Ok(count) if count <= MAX_TUPLE_ARITY => Some(count),
        _ => None,
    }
}

/// First unsupported node kind inside `expr`, if any.
///
/// Anonymous struct fields are not inspected: the whole struct maps to a
/// generic map regardless of what its fields contain.
pub fn find_unsupported(expr: &TypeExpr) -> Option<&str> {
    match expr {
        TypeExpr::Unsupported { kind } => Some(kind),
        TypeExpr::Pointer(inner) | TypeExpr::Slice(inner) => find_unsupported(inner),
        TypeExpr::FixedArray { len, elem } => {
            if array_len(len).is_none() {
                return Some(OVERSIZED_ARRAY_KIND);
            }
            find_unsupported(len).or_else(|| find_unsupported(elem))
        }
        TypeExpr::Map { key, value } => find_unsupported(key).or_else(|| find_unsupported(value)),
        TypeExpr::Qualified { container, .. } => find_unsupported(container),
        TypeExpr::Literal(_) | TypeExpr::Identifier(_) | TypeExpr::AnonymousStruct(_) => None,
    }
}
