//! Source file traversal.

use crate::config::TranslateConfig;
use crate::error::{TranslateError, TranslateResult};
use crate::model::{FieldDecl, Item, Rendered, RenderedItem, SourceFile, TypeDecl, TypeExpr};
use crate::render::render_struct;
use crate::type_map::{find_unsupported, map_type};
use tracing::{debug, info};

/// Build the rendered model for a parsed file.
///
/// Items are visited in document order. Struct declarations become
/// [`RenderedItem::Struct`], other declarations are skipped, and freestanding
/// comments pass through when `config.pass_comments` is set.
///
/// # Errors
///
/// In strict mode, returns [`TranslateError::UnsupportedType`] for the first
/// field whose type has no Rust translation.
pub fn walk(file: &SourceFile, config: &TranslateConfig) -> TranslateResult<Rendered> {
    let mut rendered = Rendered::default();
    let mut skipped = 0usize;

    for item in &file.items {
        match item {
            Item::Comment(text) => {
                if config.pass_comments {
                    rendered
                        .items
                        .push(RenderedItem::Comment { text: text.clone() });
                }
            }
            Item::Type(decl) if !decl.is_struct_shaped() => {
                debug!(name = %decl.name, "skipping non-struct declaration");
                skipped += 1;
            }
            Item::Type(decl) => {
                if config.strict {
                    check_supported(decl)?;
                }
                if let Some(emitted) = render_struct(decl, &config.derives) {
                    debug!(
                        name = %decl.name,
                        fields = emitted.fields.len(),
                        "rendered struct"
                    );
                    rendered.items.push(RenderedItem::Struct(emitted));
                }
            }
        }
    }

    info!(
        package = file.package.as_deref().unwrap_or(""),
        structs = rendered.structs().count(),
        skipped,
        "translation complete"
    );

    Ok(rendered)
}

/// Reject struct declarations containing a type with no translation.
fn check_supported(decl: &TypeDecl) -> TranslateResult<()> {
    let TypeExpr::AnonymousStruct(fields) = &decl.ty else {
        return Ok(());
    };

    for field in fields {
        if let Some(kind) = find_unsupported(&field.ty) {
            return Err(TranslateError::UnsupportedType {
                decl: decl.name.clone(),
                field: field_label(field),
                kind: kind.to_string(),
            });
        }
    }

    Ok(())
}

/// Go field name, or the type for embedded fields.
fn field_label(field: &FieldDecl) -> String {
    match field.names.first() {
        Some(name) => name.clone(),
        None => map_type(&field.ty),
    }
}
