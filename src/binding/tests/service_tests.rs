//! Unit tests for the module validation service.

use super::fixtures::{
    annotation, build, enclosing, map_key, multibinds_method, name, provides_method, ty,
};
use crate::binding::{
    adapters::memory::InMemoryDeclarationSource,
    domain::{
        BindingMethod, ContainerKind, EnclosingElement, Modifier, ModuleDeclaration, vocabulary,
    },
    error::{DeclarationSourceError, ModuleValidationError},
    messages::MessageKey,
    ports::source::MockDeclarationSource,
    services::ModuleValidationService,
};
use mockall::predicate::eq;
use rstest::{fixture, rstest};

#[fixture]
fn module() -> ModuleDeclaration {
    ModuleDeclaration::new(enclosing(ContainerKind::Module))
        .with_method(build(multibinds_method()))
        .with_method(build(
            multibinds_method()
                .with_parameter("x", ty("int"))
                .with_annotation(map_key()),
        ))
        .with_method(build(
            multibinds_method().with_annotation(annotation(vocabulary::INTO_SET)),
        ))
        .with_method(build(provides_method()))
}

#[rstest]
fn module_report_nests_one_report_per_method(module: ModuleDeclaration) {
    let source = InMemoryDeclarationSource::new()
        .with_module(module)
        .expect("fresh source accepts modules");
    let service = ModuleValidationService::with_defaults(source);

    let report = service
        .validate_module(&name("com.example.FooModule"))
        .expect("module should be found");

    assert_eq!(report.subject(), "com.example.FooModule");
    assert!(report.items().is_empty());
    assert_eq!(report.subreports().len(), 4);
    assert!(report.has_errors());

    let per_method: Vec<Vec<MessageKey>> = report
        .subreports()
        .iter()
        .map(|method| method.errors().iter().map(|error| error.key()).collect())
        .collect();
    assert_eq!(
        per_method,
        vec![
            vec![],
            vec![MessageKey::MustNotHaveParameters, MessageKey::MustNotHaveMapKey],
            vec![MessageKey::MultibindingAnnotationNotOnBindingMethod],
            vec![],
        ]
    );
}

#[rstest]
#[case::into_set_and_elements_into_set(&[vocabulary::INTO_SET, vocabulary::ELEMENTS_INTO_SET])]
#[case::into_map(&[vocabulary::INTO_MAP])]
fn binds_contribution_annotations_are_reported_once(#[case] contributions: &[&str]) {
    let mut builder = BindingMethod::builder(enclosing(ContainerKind::Module), "bindFoo")
        .with_modifier(Modifier::Abstract)
        .with_annotation(annotation(vocabulary::BINDS))
        .with_parameter("impl", ty("com.example.FooImpl"))
        .returning(ty("com.example.Foo"));
    for contribution in contributions {
        builder = builder.with_annotation(annotation(contribution));
    }
    let module =
        ModuleDeclaration::new(enclosing(ContainerKind::Module)).with_method(build(builder));

    let report = ModuleValidationService::with_defaults(InMemoryDeclarationSource::new())
        .validate_declaration(&module);

    let keys: Vec<MessageKey> = report.errors().iter().map(|error| error.key()).collect();
    assert_eq!(keys, vec![MessageKey::MultibindingAnnotationNotOnBindingMethod]);
}

#[rstest]
fn unknown_module_is_an_error() {
    let service = ModuleValidationService::with_defaults(InMemoryDeclarationSource::new());
    let result = service.validate_module(&name("com.example.Missing"));
    assert!(matches!(
        result,
        Err(ModuleValidationError::NotFound(missing)) if missing.as_str() == "com.example.Missing"
    ));
}

#[rstest]
fn source_failure_is_propagated() {
    let mut source = MockDeclarationSource::new();
    source
        .expect_find_module()
        .with(eq(name("com.example.FooModule")))
        .times(1)
        .returning(|_| Err(DeclarationSourceError::malformed("truncated record")));

    let service = ModuleValidationService::with_defaults(source);
    let result = service.validate_module(&name("com.example.FooModule"));

    assert!(matches!(
        result,
        Err(ModuleValidationError::Source(DeclarationSourceError::Malformed(_)))
    ));
}

#[rstest]
fn validate_all_visits_every_listed_module(module: ModuleDeclaration) {
    let clean = ModuleDeclaration::new(EnclosingElement::new(
        name("com.example.BarModule"),
        ContainerKind::ProducerModule,
    ));
    let clean_name = clean.name().clone();
    let invalid_name = module.name().clone();

    let mut source = MockDeclarationSource::new();
    let listed = vec![clean_name.clone(), invalid_name.clone()];
    source
        .expect_list_modules()
        .times(1)
        .returning(move || Ok(listed.clone()));
    source
        .expect_find_module()
        .times(2)
        .returning(move |requested| {
            if requested == &clean_name {
                Ok(Some(clean.clone()))
            } else {
                Ok(Some(module.clone()))
            }
        });

    let service = ModuleValidationService::with_defaults(source);
    let reports = service.validate_all().expect("all modules should load");

    assert_eq!(reports.len(), 2);
    assert!(reports[0].is_clean());
    assert!(reports[1].has_errors());
    assert_eq!(reports[1].subject(), invalid_name.as_str());
}

#[rstest]
fn validate_all_stops_at_first_source_error() {
    let mut source = MockDeclarationSource::new();
    source
        .expect_list_modules()
        .returning(|| Err(DeclarationSourceError::malformed("index unreadable")));
    source.expect_find_module().never();

    let service = ModuleValidationService::with_defaults(source);
    assert!(service.validate_all().is_err());
}
