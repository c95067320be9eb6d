//! Output formatting for the rendered model.

use crate::config::TranslateConfig;
use crate::error::TranslateResult;
use crate::model::{EmittedField, EmittedStruct, Rendered, RenderedItem};

const INDENT: &str = "    ";

/// Format the rendered model as Rust source text.
///
/// `source_name` is the input path shown in the generated-file marker.
/// The `use std::collections::HashMap;` line is only written when some
/// field type needs it.
///
/// # Examples
///
/// ```
/// use goserde_core::{Rendered, TranslateConfig, emit_rust};
///
/// let config = TranslateConfig {
///     preamble: false,
///     ..TranslateConfig::default()
/// };
/// assert_eq!(emit_rust(&Rendered::default(), "empty.go", &config), "");
/// ```
pub fn emit_rust(rendered: &Rendered, source_name: &str, config: &TranslateConfig) -> String {
    let mut output = String::new();

    if config.preamble {
        output.push_str(&format!(
            "// Code generated by goserde from {source_name}. DO NOT EDIT.\n\n"
        ));
        output.push_str("use serde::{Deserialize, Serialize};\n");
        if rendered.uses_hash_map() {
            output.push_str("use std::collections::HashMap;\n");
        }
        output.push('\n');
    }

    for item in &rendered.items {
        match item {
            RenderedItem::Comment { text } => {
                output.push_str(text);
                output.push('\n');
            }
            RenderedItem::Struct(emitted) => write_struct(&mut output, emitted),
        }
    }

    output
}

fn write_struct(output: &mut String, emitted: &EmittedStruct) {
    output.push_str(&format!("#[derive({})]\n", emitted.derives.join(", ")));
    output.push_str(&format!("pub struct {} {{\n", emitted.name));
    for field in &emitted.fields {
        write_field(output, field);
    }
    output.push_str("}\n\n");
}

fn write_field(output: &mut String, field: &EmittedField) {
    if field.flatten {
        output.push_str(&format!("{INDENT}#[serde(flatten)]\n"));
    }
    if let Some(rename) = &field.rename {
        output.push_str(&format!("{INDENT}#[serde(rename = {rename:?})]\n"));
    }
    if field.skip {
        output.push_str(&format!("{INDENT}#[serde(skip)]\n"));
    }
    output.push_str(&format!("{INDENT}pub {}: {},\n", field.name, field.ty));
}

/// Format the rendered model as pretty-printed JSON.
pub fn emit_json(rendered: &Rendered) -> TranslateResult<String> {
    let mut json = serde_json::to_string_pretty(rendered)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "emit/emit_tests.rs"]
mod emit_tests;
