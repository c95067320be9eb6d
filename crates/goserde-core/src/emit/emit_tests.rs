#![allow(non_snake_case)]

use super::*;
use crate::model::{FieldDecl, Item, SourceFile, TypeDecl, TypeExpr};
use crate::walk::walk;

fn ident(name: &str) -> TypeExpr {
    TypeExpr::ident(name)
}

fn render(items: Vec<Item>, config: &TranslateConfig) -> Rendered {
    let file = SourceFile {
        package: Some("types".to_string()),
        items,
    };
    walk(&file, config).unwrap()
}

fn foo_decl() -> TypeDecl {
    TypeDecl::new(
        "Foo",
        TypeExpr::AnonymousStruct(vec![
            FieldDecl::named("Bar", ident("string")).with_tag(r#"`json:"bar,omitempty"`"#),
        ]),
    )
}

#[test]
fn emit_rust___omitempty_struct___matches_expected_text() {
    let config = TranslateConfig::default();
    let rendered = render(vec![Item::Type(foo_decl())], &config);

    let text = emit_rust(&rendered, "foo.go", &config);

    let expected = "\
// Code generated by goserde from foo.go. DO NOT EDIT.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Foo {
    #[serde(rename = \"bar\")]
    pub bar: Option<String>,
}

";
    assert_eq!(text, expected);
}

#[test]
fn emit_rust___embedded_field___flatten_before_rename() {
    let config = TranslateConfig {
        preamble: false,
        ..TranslateConfig::default()
    };
    let decl = TypeDecl::new(
        "Container",
        TypeExpr::AnonymousStruct(vec![FieldDecl::embedded(ident("HostConfig"))]),
    );
    let rendered = render(vec![Item::Type(decl)], &config);

    let text = emit_rust(&rendered, "container.go", &config);

    let expected = "\
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Container {
    #[serde(flatten)]
    #[serde(rename = \"HostConfig\")]
    pub host_config: HostConfig,
}

";
    assert_eq!(text, expected);
}

#[test]
fn emit_rust___type_field___renamed_to_kind() {
    let config = TranslateConfig::default();
    let decl = TypeDecl::new(
        "Mount",
        TypeExpr::AnonymousStruct(vec![FieldDecl::named("Type", ident("string"))]),
    );
    let rendered = render(vec![Item::Type(decl)], &config);

    let text = emit_rust(&rendered, "mount.go", &config);

    assert!(text.contains("    #[serde(rename = \"Type\")]\n    pub kind: String,\n"));
}

#[test]
fn emit_rust___skipped_field___writes_skip_attribute() {
    let config = TranslateConfig::default();
    let decl = TypeDecl::new(
        "Auth",
        TypeExpr::AnonymousStruct(vec![
            FieldDecl::named("Password", ident("string")).with_tag(r#"`json:"-"`"#),
        ]),
    );
    let rendered = render(vec![Item::Type(decl)], &config);

    let text = emit_rust(&rendered, "auth.go", &config);

    assert!(text.contains(
        "    #[serde(rename = \"Password\")]\n    #[serde(skip)]\n    pub password: Option<String>,\n"
    ));
}

#[test]
fn emit_rust___skipped_struct_field___is_optional() {
    let config = TranslateConfig {
        preamble: false,
        ..TranslateConfig::default()
    };
    let decl = TypeDecl::new(
        "Account",
        TypeExpr::AnonymousStruct(vec![
            FieldDecl::named("Name", ident("string")).with_tag(r#"`json:"name"`"#),
            FieldDecl::named("Secret", TypeExpr::pointer(ident("Credentials")))
                .with_tag(r#"`json:"-"`"#),
        ]),
    );
    let rendered = render(vec![Item::Type(decl)], &config);

    let text = emit_rust(&rendered, "account.go", &config);

    assert!(text.contains("    #[serde(skip)]\n    pub secret: Option<Credentials>,\n"));
    assert!(!text.contains("pub secret: Credentials,"));
}

#[test]
fn emit_rust___map_field___imports_hash_map() {
    let config = TranslateConfig::default();
    let decl = TypeDecl::new(
        "Labels",
        TypeExpr::AnonymousStruct(vec![FieldDecl::named(
            "Values",
            TypeExpr::map(ident("string"), ident("string")),
        )]),
    );
    let rendered = render(vec![Item::Type(decl)], &config);

    let text = emit_rust(&rendered, "labels.go", &config);

    assert!(text.contains("use serde::{Deserialize, Serialize};\nuse std::collections::HashMap;\n\n"));
}

#[test]
fn emit_rust___no_map_field___omits_hash_map_import() {
    let config = TranslateConfig::default();
    let rendered = render(vec![Item::Type(foo_decl())], &config);

    let text = emit_rust(&rendered, "foo.go", &config);

    assert!(!text.contains("HashMap"));
}

#[test]
fn emit_rust___comments___written_verbatim_in_order() {
    let config = TranslateConfig {
        preamble: false,
        ..TranslateConfig::default()
    };
    let items = vec![
        Item::Comment("// Foo is a thing.".to_string()),
        Item::Type(foo_decl()),
        Item::Comment("/* trailing\n   block */".to_string()),
    ];
    let rendered = render(items, &config);

    let text = emit_rust(&rendered, "foo.go", &config);

    assert!(text.starts_with("// Foo is a thing.\n#[derive("));
    assert!(text.ends_with("}\n\n/* trailing\n   block */\n"));
}

#[test]
fn emit_rust___custom_derives___used_in_header() {
    let config = TranslateConfig {
        derives: vec!["Serialize".to_string(), "Deserialize".to_string()],
        ..TranslateConfig::default()
    };
    let rendered = render(vec![Item::Type(foo_decl())], &config);

    let text = emit_rust(&rendered, "foo.go", &config);

    assert!(text.contains("#[derive(Serialize, Deserialize)]\npub struct Foo {\n"));
}

#[test]
fn emit_rust___empty_struct___has_empty_body() {
    let config = TranslateConfig {
        preamble: false,
        ..TranslateConfig::default()
    };
    let decl = TypeDecl::new("Empty", TypeExpr::AnonymousStruct(Vec::new()));
    let rendered = render(vec![Item::Type(decl)], &config);

    let text = emit_rust(&rendered, "empty.go", &config);

    assert!(text.ends_with("pub struct Empty {\n}\n\n"));
}

#[test]
fn emit_rust___rename_with_quote___is_escaped() {
    let field = EmittedField {
        name: "odd".to_string(),
        ty: "String".to_string(),
        rename: Some("a\"b".to_string()),
        flatten: false,
        skip: false,
    };
    let mut output = String::new();

    write_field(&mut output, &field);

    assert_eq!(output, "    #[serde(rename = \"a\\\"b\")]\n    pub odd: String,\n");
}

#[test]
fn emit_rust___same_input___identical_output() {
    let config = TranslateConfig::default();
    let rendered = render(
        vec![Item::Comment("// c".to_string()), Item::Type(foo_decl())],
        &config,
    );

    assert_eq!(
        emit_rust(&rendered, "foo.go", &config),
        emit_rust(&rendered, "foo.go", &config)
    );
}

#[test]
fn emit_json___struct___tags_items_by_kind() {
    let config = TranslateConfig::default();
    let rendered = render(
        vec![Item::Comment("// c".to_string()), Item::Type(foo_decl())],
        &config,
    );

    let json = emit_json(&rendered).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["items"][0]["kind"], "comment");
    assert_eq!(value["items"][0]["text"], "// c");
    assert_eq!(value["items"][1]["kind"], "struct");
    assert_eq!(value["items"][1]["name"], "Foo");
    assert_eq!(value["items"][1]["fields"][0]["ty"], "Option<String>");
    assert_eq!(value["items"][1]["fields"][0]["rename"], "bar");
    assert!(json.ends_with('\n'));
}
