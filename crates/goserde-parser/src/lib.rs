//! goserde-parser - Go source front end
//!
//! Parses Go source text with tree-sitter and lowers the syntax tree into the
//! [`SourceFile`] model consumed by `goserde-core`. Only the parts of a file
//! the translator looks at are kept: the package name, freestanding comments
//! and type declarations.

mod syntax_error;
mod types;

use goserde_core::{Item, SourceFile, TranslateError, TranslateResult, TypeDecl};
use std::path::Path;
use tracing::debug;
use tree_sitter::{Node, Parser};

/// Parse Go source text.
///
/// `path` is only used in error messages.
///
/// # Errors
///
/// Returns [`TranslateError::Parse`] when the text is not valid Go. The error
/// carries the 1-based line and column of the first syntax error.
///
/// # Examples
///
/// ```
/// use goserde_parser::parse_source;
/// use std::path::Path;
///
/// let file = parse_source("package p\n\ntype Foo struct{ Bar string }\n", Path::new("p.go")).unwrap();
/// assert_eq!(file.package.as_deref(), Some("p"));
/// assert_eq!(file.type_decls().count(), 1);
/// ```
pub fn parse_source(source: &str, path: &Path) -> TranslateResult<SourceFile> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|err| TranslateError::Parse {
            path: path.to_path_buf(),
            line: 0,
            column: 0,
            message: format!("incompatible Go grammar: {err}"),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| TranslateError::Parse {
            path: path.to_path_buf(),
            line: 0,
            column: 0,
            message: "parser produced no syntax tree".to_string(),
        })?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(syntax_error::locate(root, source, path));
    }

    let lowering = Lowering { source };
    let file = lowering.source_file(root);
    debug!(
        path = %path.display(),
        items = file.items.len(),
        "parsed Go source"
    );
    Ok(file)
}

/// Read and parse a Go source file.
///
/// # Errors
///
/// Returns [`TranslateError::Io`] when the file cannot be read, or
/// [`TranslateError::Parse`] as for [`parse_source`].
pub fn parse_file(path: impl AsRef<Path>) -> TranslateResult<SourceFile> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| TranslateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&source, path)
}

/// Converts syntax nodes into model values.
struct Lowering<'src> {
    source: &'src str,
}

impl<'src> Lowering<'src> {
    fn text(&self, node: Node<'_>) -> &'src str {
        &self.source[node.byte_range()]
    }

    fn source_file(&self, root: Node<'_>) -> SourceFile {
        let mut file = SourceFile::default();
        let mut cursor = root.walk();

        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_clause" => {
                    let mut inner = child.walk();
                    file.package = child
                        .named_children(&mut inner)
                        .find(|n| n.kind() == "package_identifier")
                        .map(|n| self.text(n).to_string());
                }
                "comment" => file.items.push(Item::Comment(self.text(child).to_string())),
                "type_declaration" => self.type_declaration(child, &mut file.items),
                _ => {}
            }
        }

        file
    }

    /// `type X ...` or a grouped `type ( ... )` block. Comments between the
    /// specs of a group are kept in place.
    fn type_declaration(&self, node: Node<'_>, items: &mut Vec<Item>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "type_spec" | "type_alias" => {
                    if let Some(decl) = self.type_spec(child) {
                        items.push(Item::Type(decl));
                    }
                }
                "comment" => items.push(Item::Comment(self.text(child).to_string())),
                _ => {}
            }
        }
    }

    fn type_spec(&self, node: Node<'_>) -> Option<TypeDecl> {
        let name = node.child_by_field_name("name")?;
        let ty = node.child_by_field_name("type")?;
        Some(TypeDecl::new(self.text(name), self.type_expr(ty)))
    }
}
