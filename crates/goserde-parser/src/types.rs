//! Lowering of Go type expressions and struct fields.

use crate::Lowering;
use goserde_core::{FieldDecl, TypeExpr};
use tracing::trace;
use tree_sitter::Node;

impl Lowering<'_> {
    /// Lower any type node. Node kinds without a translation become
    /// [`TypeExpr::Unsupported`] carrying the grammar kind.
    pub(crate) fn type_expr(&self, node: Node<'_>) -> TypeExpr {
        match node.kind() {
            "type_identifier" => TypeExpr::ident(self.text(node)),
            "pointer_type" => match first_named_child(node) {
                Some(inner) => TypeExpr::pointer(self.type_expr(inner)),
                None => TypeExpr::unsupported(node.kind()),
            },
            "slice_type" => match node.child_by_field_name("element") {
                Some(elem) => TypeExpr::slice(self.type_expr(elem)),
                None => TypeExpr::unsupported(node.kind()),
            },
            "array_type" => match (
                node.child_by_field_name("length"),
                node.child_by_field_name("element"),
            ) {
                (Some(len), Some(elem)) => {
                    TypeExpr::fixed_array(TypeExpr::literal(self.text(len)), self.type_expr(elem))
                }
                _ => TypeExpr::unsupported(node.kind()),
            },
            "map_type" => match (
                node.child_by_field_name("key"),
                node.child_by_field_name("value"),
            ) {
                (Some(key), Some(value)) => TypeExpr::map(self.type_expr(key), self.type_expr(value)),
                _ => TypeExpr::unsupported(node.kind()),
            },
            "qualified_type" => match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => {
                    TypeExpr::qualified(TypeExpr::ident(self.text(package)), self.text(name))
                }
                _ => TypeExpr::unsupported(node.kind()),
            },
            "struct_type" => TypeExpr::AnonymousStruct(self.struct_fields(node)),
            "parenthesized_type" => match first_named_child(node) {
                Some(inner) => self.type_expr(inner),
                None => TypeExpr::unsupported(node.kind()),
            },
            other => {
                trace!(kind = other, "untranslated type expression");
                TypeExpr::unsupported(other)
            }
        }
    }

    /// Fields of a `struct_type`, in declaration order. `A, B int` yields one
    /// field per name. Comments inside the body are dropped.
    fn struct_fields(&self, node: Node<'_>) -> Vec<FieldDecl> {
        let mut fields = Vec::new();
        let mut cursor = node.walk();

        for list in node.named_children(&mut cursor) {
            if list.kind() != "field_declaration_list" {
                continue;
            }
            let mut list_cursor = list.walk();
            for decl in list.named_children(&mut list_cursor) {
                if decl.kind() == "field_declaration" {
                    self.field_declaration(decl, &mut fields);
                }
            }
        }

        fields
    }

    fn field_declaration(&self, node: Node<'_>, fields: &mut Vec<FieldDecl>) {
        let Some(ty_node) = node.child_by_field_name("type") else {
            return;
        };
        let raw_tag = node
            .child_by_field_name("tag")
            .map(|tag| self.text(tag).to_string());

        let mut cursor = node.walk();
        let names: Vec<&str> = node
            .children_by_field_name("name", &mut cursor)
            .map(|name| self.text(name))
            .collect();

        if names.is_empty() {
            let mut ty = self.type_expr(ty_node);
            if has_pointer_marker(node) {
                ty = TypeExpr::pointer(ty);
            }
            fields.push(FieldDecl {
                names: Vec::new(),
                ty,
                raw_tag,
            });
            return;
        }

        let ty = self.type_expr(ty_node);
        for name in names {
            fields.push(FieldDecl {
                names: vec![name.to_string()],
                ty: ty.clone(),
                raw_tag: raw_tag.clone(),
            });
        }
    }
}

fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    node.named_child(0)
}

/// Embedded `*T` fields carry the star as an unnamed token of the field
/// declaration itself.
fn has_pointer_marker(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|child| child.kind() == "*")
}
