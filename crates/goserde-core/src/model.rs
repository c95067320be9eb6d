//! Parsed input model and rendered output model.
//!
//! The input half ([`SourceFile`], [`Item`], [`TypeDecl`], [`FieldDecl`],
//! [`TypeExpr`]) is produced by the parser front end and only read here.
//! The output half ([`Rendered`], [`EmittedStruct`], [`EmittedField`]) is built
//! by [`walk`](crate::walk) and consumed by the emitters.

use serde::Serialize;

/// A Go type expression.
///
/// Every construct the parser does not translate lands in
/// [`TypeExpr::Unsupported`], so matching on this enum is exhaustive over
/// everything that can appear in a struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Literal text, used for array lengths (`[4]int`).
    Literal(String),

    /// A named type: a predeclared scalar or another declared type.
    Identifier(String),

    /// `*T`
    Pointer(Box<TypeExpr>),

    /// `[]T`
    Slice(Box<TypeExpr>),

    /// `[N]T`
    FixedArray {
        len: Box<TypeExpr>,
        elem: Box<TypeExpr>,
    },

    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },

    /// `pkg.Name`
    Qualified {
        container: Box<TypeExpr>,
        member: String,
    },

    /// `struct { ... }` used inline as a field type.
    AnonymousStruct(Vec<FieldDecl>),

    /// Anything else (interfaces, channels, functions, generics, ...).
    /// `kind` is the grammar node kind, kept for diagnostics.
    Unsupported { kind: String },
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Identifier(name.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        TypeExpr::Literal(text.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Slice(Box::new(elem))
    }

    pub fn fixed_array(len: TypeExpr, elem: TypeExpr) -> Self {
        TypeExpr::FixedArray {
            len: Box::new(len),
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn qualified(container: TypeExpr, member: impl Into<String>) -> Self {
        TypeExpr::Qualified {
            container: Box::new(container),
            member: member.into(),
        }
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        TypeExpr::Unsupported { kind: kind.into() }
    }
}

/// A struct member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Zero names means an embedded field, which is flattened.
    pub names: Vec<String>,

    pub ty: TypeExpr,

    /// Raw tag literal including its delimiters, e.g. `` `json:"id"` ``.
    pub raw_tag: Option<String>,
}

impl FieldDecl {
    /// A named field.
    pub fn named(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            names: vec![name.into()],
            ty,
            raw_tag: None,
        }
    }

    /// An embedded (anonymous) field.
    pub fn embedded(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
            raw_tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.raw_tag = Some(tag.into());
        self
    }

    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}

/// A named type declaration (`type Name <expr>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub ty: TypeExpr,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Only struct definitions are translated; everything else is skipped.
    pub fn is_struct_shaped(&self) -> bool {
        matches!(self.ty, TypeExpr::AnonymousStruct(_))
    }
}

/// A top-level item of the source file, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Comment text exactly as written, delimiters included.
    Comment(String),
    Type(TypeDecl),
}

/// A parsed Go source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    pub package: Option<String>,
    pub items: Vec<Item>,
}

impl SourceFile {
    /// Type declarations in document order.
    pub fn type_decls(&self) -> impl Iterator<Item = &TypeDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Type(decl) => Some(decl),
            Item::Comment(_) => None,
        })
    }
}

/// Result of interpreting a field tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInfo {
    pub rename: Option<String>,
    pub optional: bool,
    /// `json:"-"`: the field never appears on the wire.
    pub skip: bool,
}

/// One rendered struct field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedField {
    pub name: String,
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rename: Option<String>,
    pub flatten: bool,
    pub skip: bool,
}

/// One rendered struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmittedStruct {
    pub name: String,
    pub derives: Vec<String>,
    pub fields: Vec<EmittedField>,
}

impl EmittedStruct {
    pub fn uses_hash_map(&self) -> bool {
        self.fields.iter().any(|f| f.ty.contains("HashMap<"))
    }
}

/// An item of the rendered output, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedItem {
    Comment { text: String },
    Struct(EmittedStruct),
}

/// The walker's output for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub items: Vec<RenderedItem>,
}

impl Rendered {
    pub fn structs(&self) -> impl Iterator<Item = &EmittedStruct> {
        self.items.iter().filter_map(|item| match item {
            RenderedItem::Struct(s) => Some(s),
            RenderedItem::Comment { .. } => None,
        })
    }

    pub fn uses_hash_map(&self) -> bool {
        self.structs().any(EmittedStruct::uses_hash_map)
    }
}
