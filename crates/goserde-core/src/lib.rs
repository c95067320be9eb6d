//! goserde-core - Go struct to serde struct translation engine
//!
//! This crate provides the pieces that turn a parsed Go source file into
//! Rust type definitions:
//! - [`TypeExpr`], [`FieldDecl`], [`TypeDecl`] and [`SourceFile`], the parsed model
//! - [`map_type`] for translating type expressions
//! - [`parse_tag`] and [`to_snake_case`] for per-field naming decisions
//! - [`render_struct`] and [`walk`] for building the output model
//! - [`emit_rust`] and [`emit_json`] for turning it into text
//! - [`TranslateError`] for error handling
//! - [`TranslateConfig`] for translation settings

mod config;
mod emit;
mod error;
mod model;
mod naming;
mod render;
mod tag;
mod type_map;
mod walk;

pub use config::TranslateConfig;
pub use emit::{emit_json, emit_rust};
pub use error::{TranslateError, TranslateResult};
pub use model::{
    EmittedField, EmittedStruct, FieldDecl, Item, Rendered, RenderedItem, SourceFile, TagInfo,
    TypeDecl, TypeExpr,
};
pub use naming::to_snake_case;
pub use render::{render_field, render_fields, render_struct};
pub use tag::parse_tag;
pub use type_map::{MAX_TUPLE_ARITY, UNSUPPORTED_TYPE_PLACEHOLDER, find_unsupported, map_type};
pub use walk::walk;

/// Log levels understood by the CLI and configuration
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl std::str::FromStr for LogLevel {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            other => Err(TranslateError::Config(format!("unknown log level: {other}"))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}
