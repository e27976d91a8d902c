//! Unit tests for the declaration view.

use super::fixtures::{
    annotation, build, enclosing, map_key, multibinds_method, name, provides_method, ty,
};
use crate::binding::domain::{
    BindingDomainError, BindingKind, BindingMethod, BindingMethodBuilder, ContainerKind,
    Modifier, ModuleDeclaration, ParseBindingKindError, QualifiedName, vocabulary,
};
use rstest::rstest;

#[rstest]
#[case::simple("Foo", "Foo")]
#[case::dotted("com.example.Foo", "Foo")]
#[case::nested("com.example.Outer$Inner", "Outer$Inner")]
#[case::padded("  com.example.Foo  ", "Foo")]
fn qualified_name_accepts_dotted_identifiers(#[case] raw: &str, #[case] simple: &str) {
    let qualified = QualifiedName::new(raw).expect("valid name");
    assert_eq!(qualified.as_str(), raw.trim());
    assert_eq!(qualified.simple_name(), simple);
}

#[rstest]
#[case::empty_segment("com..Foo")]
#[case::trailing_dot("com.example.")]
#[case::leading_digit("com.1example.Foo")]
#[case::generic("java.util.Map<K, V>")]
fn qualified_name_rejects_malformed_names(#[case] raw: &str) {
    assert_eq!(
        QualifiedName::new(raw),
        Err(BindingDomainError::InvalidQualifiedName(raw.to_owned()))
    );
}

#[rstest]
fn qualified_name_rejects_blank_names() {
    assert_eq!(QualifiedName::new("   "), Err(BindingDomainError::EmptyQualifiedName));
}

#[rstest]
fn builder_requires_a_return_type() {
    let result = BindingMethod::builder(enclosing(ContainerKind::Module), "bar").build();
    assert_eq!(result, Err(BindingDomainError::MissingReturnType("bar".to_owned())));
}

#[rstest]
#[case::method_name(BindingMethod::builder(enclosing(ContainerKind::Module), "1bar"), "1bar")]
#[case::parameter_name(
    BindingMethod::builder(enclosing(ContainerKind::Module), "bar")
        .with_parameter("a-b", ty("int")),
    "a-b"
)]
#[case::type_parameter(
    BindingMethod::builder(enclosing(ContainerKind::Module), "bar").with_type_parameter(""),
    ""
)]
fn builder_rejects_invalid_identifiers(
    #[case] builder: BindingMethodBuilder,
    #[case] invalid: &str,
) {
    let result = builder.returning(ty("void")).build();
    assert_eq!(result, Err(BindingDomainError::InvalidIdentifier(invalid.to_owned())));
}

#[rstest]
fn subject_lists_parameter_types(multibinds_method: BindingMethodBuilder) {
    let method = build(
        multibinds_method
            .with_parameter("x", ty("int"))
            .with_parameter("names", ty("java.util.List<java.lang.String>")),
    );
    assert_eq!(
        method.subject(),
        "com.example.FooModule#bar(int, java.util.List<java.lang.String>)"
    );
}

#[rstest]
fn annotation_queries(provides_method: BindingMethodBuilder) {
    let method = build(
        provides_method
            .with_modifier(Modifier::Static)
            .with_annotation(annotation(vocabulary::INTO_MAP))
            .with_annotation(map_key()),
    );
    assert!(method.has_annotation(vocabulary::PROVIDES));
    assert!(!method.has_annotation(vocabulary::MULTIBINDS));
    assert!(method.has_modifier(Modifier::Static));
    assert_eq!(method.map_keys().count(), 1);
    assert_eq!(method.multibinding_annotations().count(), 1);
    assert_eq!(method.binding_kinds(), vec![BindingKind::Provides]);
}

#[rstest]
#[case("provides", BindingKind::Provides)]
#[case("Produces", BindingKind::Produces)]
#[case(" binds ", BindingKind::Binds)]
#[case("MULTIBINDS", BindingKind::Multibinds)]
fn binding_kind_parses_case_insensitively(#[case] raw: &str, #[case] expected: BindingKind) {
    assert_eq!(BindingKind::try_from(raw), Ok(expected));
}

#[rstest]
fn binding_kind_rejects_unknown_names() {
    assert_eq!(
        BindingKind::try_from("contributes"),
        Err(ParseBindingKindError("contributes".to_owned()))
    );
}

#[rstest]
fn method_deserialises_from_json() {
    let method: BindingMethod = serde_json::from_value(serde_json::json!({
        "enclosing": { "name": "com.example.FooModule", "kind": "module" },
        "name": "bar",
        "modifiers": ["abstract"],
        "return_type": {
            "declared": {
                "name": "java.util.Set",
                "arguments": [{ "declared": { "name": "com.example.Foo" } }]
            }
        },
        "annotations": [{ "type_name": "dagger.multibindings.Multibinds" }]
    }))
    .expect("valid method document");

    assert_eq!(method.return_type(), &ty("java.util.Set<com.example.Foo>"));
    assert!(method.has_modifier(Modifier::Abstract));
    assert_eq!(method.binding_kinds(), vec![BindingKind::Multibinds]);
}

#[rstest]
fn method_deserialisation_validates_names() {
    let result = serde_json::from_value::<BindingMethod>(serde_json::json!({
        "enclosing": { "name": "com.example.FooModule", "kind": "module" },
        "name": "not valid",
        "return_type": "void"
    }));
    assert!(result.is_err());
}

#[rstest]
fn module_declaration_keeps_method_order(multibinds_method: BindingMethodBuilder) {
    let first = build(multibinds_method);
    let second = build(
        BindingMethod::builder(enclosing(ContainerKind::Module), "baz").returning(ty("void")),
    );
    let module = ModuleDeclaration::new(enclosing(ContainerKind::Module))
        .with_method(first.clone())
        .with_method(second.clone());
    assert_eq!(module.name(), &name("com.example.FooModule"));
    assert_eq!(module.methods(), [first, second]);
}
