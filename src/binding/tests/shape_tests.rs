//! Unit tests for the type shape inspector.

use super::fixtures::{name, ty};
use crate::binding::{
    domain::TypeRef,
    shape::{TypeShape, TypeVocabulary},
};
use rstest::{fixture, rstest};

#[fixture]
fn types() -> TypeVocabulary {
    TypeVocabulary::default()
}

#[rstest]
fn plain_map_exposes_its_arguments(types: TypeVocabulary) {
    let map = ty("java.util.Map<java.lang.String, com.example.Foo>");
    let TypeShape::PlainMap { key, value } = types.classify_map(&map) else {
        panic!("expected a plain map");
    };
    assert_eq!(key, &ty("java.lang.String"));
    assert_eq!(value, &ty("com.example.Foo"));
}

#[rstest]
fn plain_set_exposes_its_element(types: TypeVocabulary) {
    let set = ty("java.util.Set<com.example.Foo>");
    assert_eq!(
        types.classify_set(&set),
        TypeShape::PlainSet {
            element: &ty("com.example.Foo")
        }
    );
}

#[rstest]
#[case::raw_map("java.util.Map", TypeShape::RawMap)]
#[case::raw_set("java.util.Set", TypeShape::RawSet)]
#[case::wildcard_value("java.util.Map<java.lang.String, ? extends com.example.Foo>", TypeShape::Neither)]
#[case::wildcard_key("java.util.Map<?, com.example.Foo>", TypeShape::Neither)]
#[case::wildcard_element("java.util.Set<?>", TypeShape::Neither)]
#[case::framework_value("java.util.Map<java.lang.String, javax.inject.Provider<com.example.Foo>>", TypeShape::Neither)]
#[case::framework_element("java.util.Set<dagger.MembersInjector<com.example.Foo>>", TypeShape::Neither)]
#[case::wrong_arity("java.util.Map<com.example.Foo>", TypeShape::Neither)]
#[case::other_container("java.util.List<com.example.Foo>", TypeShape::Neither)]
#[case::primitive("int", TypeShape::Neither)]
#[case::void("void", TypeShape::Neither)]
fn non_plain_shapes(
    types: TypeVocabulary,
    #[case] expression: &str,
    #[case] expected: TypeShape<'static>,
) {
    let parsed = ty(expression);
    let shape = types.classify(&parsed);
    assert_eq!(shape, expected);
    assert!(!shape.is_plain());
}

#[rstest]
fn raw_shapes_are_flagged(types: TypeVocabulary) {
    assert!(types.classify(&ty("java.util.Map")).is_raw());
    assert!(types.classify(&ty("java.util.Set")).is_raw());
    assert!(!types.classify(&ty("java.util.Set<com.example.Foo>")).is_raw());
}

#[rstest]
fn only_the_outer_type_is_classified(types: TypeVocabulary) {
    let nested = ty("java.util.Map<java.lang.String, java.util.Set<? extends com.example.Foo>>");
    assert!(matches!(types.classify(&nested), TypeShape::PlainMap { .. }));
}

#[rstest]
fn type_variable_value_is_not_plain(types: TypeVocabulary) {
    let map = TypeRef::parameterized(
        name("java.util.Map"),
        [
            ty("java.lang.String"),
            TypeRef::type_variable("V").expect("valid type variable"),
        ],
    );
    assert_eq!(types.classify(&map), TypeShape::Neither);
}

#[rstest]
fn custom_vocabulary_recognises_other_containers() {
    let types = TypeVocabulary::new(
        [name("com.google.common.collect.ImmutableMap")],
        [name("com.google.common.collect.ImmutableSet")],
        [name("javax.inject.Provider")],
    );
    assert!(matches!(
        types.classify(&ty("com.google.common.collect.ImmutableSet<com.example.Foo>")),
        TypeShape::PlainSet { .. }
    ));
    assert_eq!(types.classify(&ty("java.util.Set<com.example.Foo>")), TypeShape::Neither);
    assert!(types.is_framework_type(&ty("javax.inject.Provider<com.example.Foo>")));
    assert!(!types.is_framework_type(&ty("dagger.Lazy<com.example.Foo>")));
}
