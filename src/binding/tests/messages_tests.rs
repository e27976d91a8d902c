//! Unit tests for the message catalog and validation profiles.

use super::fixtures::{build, multibinds_method, ty};
use crate::binding::{
    domain::BindingMethodBuilder,
    error::{MessageCatalogError, ProfileError},
    messages::{DiagnosticKind, MessageArgs, MessageCatalog, MessageKey},
    ports::validator::BindingMethodValidator,
    profile::{ProfileDocument, ValidationProfile},
    validation::MultibindsMethodValidator,
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[case(MessageKey::MustNotHaveParameters, "@Multibinds methods must not have parameters")]
#[case(MessageKey::MustReturnMapOrSet, "@Multibinds methods must return Map<K, V> or Set<T>")]
#[case(MessageKey::MustNotHaveMapKey, "@Multibinds methods must not have a map key")]
#[case(MessageKey::MustBeAbstract, "@Multibinds methods must be abstract")]
fn default_templates_render_with_the_label(#[case] key: MessageKey, #[case] expected: &str) {
    let catalog = MessageCatalog::new();
    assert_eq!(catalog.render(key, &MessageArgs::new("Multibinds")), expected);
}

#[rstest]
fn optional_arguments_are_substituted() {
    let args = MessageArgs::new("Produces")
        .with_superclass("java.lang.Exception")
        .with_thrown("java.lang.Throwable");
    assert_eq!(
        MessageCatalog::new().render(MessageKey::ThrowsOnlySubclasses, &args),
        "@Produces methods may only throw subclasses of java.lang.Exception, \
         but java.lang.Throwable is declared"
    );
}

#[rstest]
fn every_key_has_a_renderable_default() {
    let catalog = MessageCatalog::new();
    let args = MessageArgs::new("Provides")
        .with_enclosing("@Module")
        .with_superclass("java.lang.Exception")
        .with_thrown("java.io.IOException");
    for key in MessageKey::ALL {
        let rendered = catalog.render(key, &args);
        assert!(!rendered.contains("{{"), "{key} left a placeholder: {rendered}");
    }
}

#[rstest]
#[case(MessageKey::MustNotHaveParameters, DiagnosticKind::WrongParameters)]
#[case(MessageKey::BindsParameters, DiagnosticKind::WrongParameters)]
#[case(MessageKey::MissingMapKey, DiagnosticKind::MissingMapKey)]
#[case(MessageKey::MapKeyWithoutIntoMap, DiagnosticKind::UnexpectedMapKey)]
#[case(MessageKey::ThrowsOnlyUnchecked, DiagnosticKind::DisallowedException)]
#[case(MessageKey::NotInModule, DiagnosticKind::WrongEnclosingKind)]
fn keys_map_to_their_category(#[case] key: MessageKey, #[case] kind: DiagnosticKind) {
    assert_eq!(key.kind(), kind);
}

#[rstest]
fn override_replaces_the_template() {
    let catalog = MessageCatalog::new()
        .with_override(
            MessageKey::MustNotHaveParameters,
            "les méthodes @{{ annotation }} ne doivent pas avoir de paramètres",
        )
        .expect("valid template");
    assert_eq!(
        catalog.render(MessageKey::MustNotHaveParameters, &MessageArgs::new("Multibinds")),
        "les méthodes @Multibinds ne doivent pas avoir de paramètres"
    );
    assert_eq!(
        catalog.template(MessageKey::MustNotHaveMapKey),
        MessageKey::MustNotHaveMapKey.default_template()
    );
}

#[rstest]
fn override_with_broken_template_is_rejected() {
    let result = MessageCatalog::new().with_override(MessageKey::Private, "{{ annotation ");
    assert!(matches!(
        result,
        Err(MessageCatalogError::InvalidTemplate { key: MessageKey::Private, .. })
    ));
}

#[rstest]
fn profile_overrides_reach_validator_messages(multibinds_method: BindingMethodBuilder) {
    let profile = ValidationProfile::from_json_str(
        r#"{ "messages": { "must_not_have_parameters": "{{ annotation }}: no parameters allowed" } }"#,
    )
    .expect("valid profile");
    let validator = MultibindsMethodValidator::new(Arc::new(profile));
    let method = build(multibinds_method.with_parameter("x", ty("int")));

    let report = validator.validate(&method);

    assert_eq!(report.errors()[0].message(), "Multibinds: no parameters allowed");
}

#[rstest]
fn profile_lists_replace_defaults() {
    let profile = ValidationProfile::from_json_str(
        r#"{ "set_types": ["com.google.common.collect.ImmutableSet"], "framework_types": [] }"#,
    )
    .expect("valid profile");
    let types = profile.types();
    assert_eq!(types.set_types().len(), 1);
    assert!(types.framework_types().is_empty());
    assert_eq!(types.map_types().len(), 1);
}

#[rstest]
fn empty_document_yields_the_default_profile() {
    let profile = ValidationProfile::from_document(ProfileDocument::default())
        .expect("defaults are valid");
    assert_eq!(profile, ValidationProfile::default());
}

#[rstest]
#[case::unknown_field(r#"{ "map_typez": [] }"#)]
#[case::unknown_message_key(r#"{ "messages": { "no_such_key": "text" } }"#)]
#[case::not_json("map_types = []")]
fn malformed_documents_fail_to_parse(#[case] document: &str) {
    assert!(matches!(
        ValidationProfile::from_json_str(document),
        Err(ProfileError::Parse(_))
    ));
}

#[rstest]
fn invalid_type_name_in_profile_is_rejected() {
    assert!(matches!(
        ValidationProfile::from_json_str(r#"{ "additional_framework_types": ["not a type"] }"#),
        Err(ProfileError::InvalidName(_))
    ));
}

#[rstest]
fn invalid_template_in_profile_is_rejected() {
    assert!(matches!(
        ValidationProfile::from_json_str(r#"{ "messages": { "private": "{% if %}" } }"#),
        Err(ProfileError::Messages(_))
    ));
}
