//! Struct field rendering.
//!
//! Combines the type mapper, the tag interpreter and the name converter into
//! one [`EmittedField`] per Go field. Field order is preserved: it becomes
//! the order of the generated struct.

use crate::model::{EmittedField, EmittedStruct, FieldDecl, TypeDecl, TypeExpr};
use crate::naming::to_snake_case;
use crate::tag::parse_tag;
use crate::type_map::map_type;

/// Rust keyword that Go field names commonly collide with, and its replacement.
const RESERVED_FIELD_NAME: &str = "type";
const RESERVED_FIELD_REPLACEMENT: &str = "kind";

/// Render one field.
///
/// Named fields get a snake_case name and a rename back to the wire name
/// (the tag's name, or the Go identifier). Embedded fields are flattened
/// into the parent and named after their type. `omitempty` and `-` fields
/// are wrapped in `Option`.
pub fn render_field(field: &FieldDecl) -> EmittedField {
    let mut ty = map_type(&field.ty);
    let tag = parse_tag(field.raw_tag.as_deref());

    let (mut name, rename, flatten) = match field.names.first() {
        Some(go_name) => {
            let rename = tag.rename.unwrap_or_else(|| go_name.clone());
            (to_snake_case(go_name), rename, false)
        }
        None => (to_snake_case(last_segment(&ty)), ty.clone(), true),
    };

    // Skipped fields are filled by `Default` on deserialize
    if tag.optional || tag.skip {
        ty = format!("Option<{ty}>");
    }

    if name == RESERVED_FIELD_NAME {
        name = RESERVED_FIELD_REPLACEMENT.to_string();
    }

    EmittedField {
        name,
        ty,
        rename: Some(rename),
        flatten,
        skip: tag.skip,
    }
}

/// Render fields in declaration order, one output per input.
pub fn render_fields(fields: &[FieldDecl]) -> Vec<EmittedField> {
    fields.iter().map(render_field).collect()
}

/// Render a struct declaration; `None` when the declaration is not a struct.
pub fn render_struct(decl: &TypeDecl, derives: &[String]) -> Option<EmittedStruct> {
    let TypeExpr::AnonymousStruct(fields) = &decl.ty else {
        return None;
    };

    Some(EmittedStruct {
        name: decl.name.clone(),
        derives: derives.to_vec(),
        fields: render_fields(fields),
    })
}

/// `pkg::Config` -> `Config`
fn last_segment(ty: &str) -> &str {
    ty.rsplit("::").next().unwrap_or(ty)
}
