//! Individual validation rule implementations.
//!
//! Each rule is a pure function that inspects one aspect of a binding method
//! and appends zero or more diagnostics to the report under construction.
//! Rules never fail and never read what other rules reported.

use crate::binding::{
    domain::{BindingMethod, Modifier, QualifiedName, vocabulary},
    messages::{MessageArgs, MessageKey},
    ports::validator::{Abstractness, ExceptionPolicy, ValidatorConfig},
    profile::ValidationProfile,
    report::ValidationReportBuilder,
    shape::TypeShape,
};

/// The configuration and profile a rule runs against.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    config: &'a ValidatorConfig,
    profile: &'a ValidationProfile,
}

impl<'a> RuleContext<'a> {
    /// Creates a context.
    #[must_use]
    pub const fn new(config: &'a ValidatorConfig, profile: &'a ValidationProfile) -> Self {
        Self { config, profile }
    }

    /// Returns the validator configuration.
    #[must_use]
    pub const fn config(&self) -> &'a ValidatorConfig {
        self.config
    }

    /// Returns the validation profile.
    #[must_use]
    pub const fn profile(&self) -> &'a ValidationProfile {
        self.profile
    }

    /// Returns message arguments carrying the validator label.
    #[must_use]
    pub fn args(&self) -> MessageArgs {
        MessageArgs::new(self.config.label())
    }

    /// Appends an error rendered from `key` with the default arguments.
    pub fn error(&self, report: &mut ValidationReportBuilder, key: MessageKey) {
        self.error_with(report, key, &self.args());
    }

    /// Appends an error rendered from `key` with `args`.
    pub fn error_with(
        &self,
        report: &mut ValidationReportBuilder,
        key: MessageKey,
        args: &MessageArgs,
    ) {
        let message = self.profile.messages().render(key, args);
        report.add_error(key, message);
    }
}

/// Checks that the method's enclosing type is one of the allowed kinds.
pub fn check_enclosing_element(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    let config = context.config();
    if !config.enclosing_kinds().contains(&method.enclosing().kind()) {
        let args = context
            .args()
            .with_enclosing(config.enclosing_description());
        context.error_with(report, MessageKey::NotInModule, &args);
    }
}

/// Checks that the method declares no type parameters.
pub fn check_type_parameters(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    if !method.type_parameters().is_empty() {
        context.error(report, MessageKey::TypeParameters);
    }
}

/// Checks that the method is not private.
pub fn check_not_private(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    if method.has_modifier(Modifier::Private) {
        context.error(report, MessageKey::Private);
    }
}

/// Checks the method against the configured abstractness requirement.
pub fn check_abstractness(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    let is_abstract = method.has_modifier(Modifier::Abstract);
    match context.config().abstractness() {
        Abstractness::MustBeAbstract if !is_abstract => {
            context.error(report, MessageKey::MustBeAbstract);
        }
        Abstractness::MustBeConcrete if is_abstract => {
            context.error(report, MessageKey::MustNotBeAbstract);
        }
        _ => {}
    }
}

/// Checks the declared exceptions against the configured policy.
///
/// `ExceptionPolicy::None` reports once for the whole `throws` clause; the
/// other policies report once per offending type.
pub fn check_thrown_types(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    let thrown_types = method.thrown_types();
    match context.config().exception_policy() {
        ExceptionPolicy::None => {
            if !thrown_types.is_empty() {
                context.error(report, MessageKey::MayNotThrow);
            }
        }
        ExceptionPolicy::UncheckedOnly => {
            let unchecked = unchecked_roots();
            for thrown in thrown_types {
                if !unchecked.iter().any(|root| thrown.is_subclass_of(root)) {
                    let args = context.args().with_thrown(thrown.name().as_str());
                    context.error_with(report, MessageKey::ThrowsOnlyUnchecked, &args);
                }
            }
        }
        ExceptionPolicy::AnySubclassOf(superclass) => {
            for thrown in thrown_types {
                if !thrown.is_subclass_of(superclass) {
                    let args = context
                        .args()
                        .with_superclass(superclass.as_str())
                        .with_thrown(thrown.name().as_str());
                    context.error_with(report, MessageKey::ThrowsOnlySubclasses, &args);
                }
            }
        }
    }
}

fn unchecked_roots() -> Vec<QualifiedName> {
    [vocabulary::RUNTIME_EXCEPTION, vocabulary::ERROR]
        .into_iter()
        .filter_map(|name| QualifiedName::new(name).ok())
        .collect()
}

/// Checks that the method declares no parameters.
pub fn check_no_parameters(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    if !method.parameters().is_empty() {
        context.error(report, MessageKey::MustNotHaveParameters);
    }
}

/// Checks that the method declares exactly one parameter.
pub fn check_single_parameter(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    if method.parameters().len() != 1 {
        context.error(report, MessageKey::BindsParameters);
    }
}

/// Checks that the return type is a plain `Map<K, V>` or `Set<T>`.
pub fn check_returns_plain_collection(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    let shape = context.profile().types().classify(method.return_type());
    if !shape.is_plain() {
        context.error(report, MessageKey::MustReturnMapOrSet);
    }
}

/// Checks the return type of a method that provides a value: not `void`,
/// not a framework wrapper, and a plain `Set<T>` under `@ElementsIntoSet`.
pub fn check_returns_value(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    let return_type = method.return_type();
    if return_type.is_void() {
        context.error(report, MessageKey::MustReturnValue);
        return;
    }

    let types = context.profile().types();
    if types.is_framework_type(return_type) {
        context.error(report, MessageKey::MustNotReturnFrameworkType);
    }

    if method.has_annotation(vocabulary::ELEMENTS_INTO_SET)
        && !matches!(types.classify_set(return_type), TypeShape::PlainSet { .. })
    {
        context.error(report, MessageKey::ElementsIntoSetMustReturnSet);
    }
}

/// Checks that the method carries no map key.
pub fn check_no_map_key(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    if method.map_keys().next().is_some() {
        context.error(report, MessageKey::MustNotHaveMapKey);
    }
}

/// Checks map keys of a contributing method: `@IntoMap` requires exactly
/// one map key, and without `@IntoMap` no map key is allowed.
pub fn check_contribution_map_keys(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    let key_count = method.map_keys().count();
    if method.has_annotation(vocabulary::INTO_MAP) {
        match key_count {
            0 => context.error(report, MessageKey::MissingMapKey),
            1 => {}
            _ => context.error(report, MessageKey::MultipleMapKeys),
        }
    } else if key_count > 0 {
        context.error(report, MessageKey::MapKeyWithoutIntoMap);
    }
}

/// Checks that at most one contribution annotation is present.
pub fn check_single_multibinding_annotation(
    context: &RuleContext<'_>,
    method: &BindingMethod,
    report: &mut ValidationReportBuilder,
) {
    if method.multibinding_annotations().count() > 1 {
        context.error(report, MessageKey::MultipleMultibindingAnnotations);
    }
}
