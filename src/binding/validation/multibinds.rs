//! Validator for `@Multibinds` declarations.
//!
//! A multibinds declaration states that a map or set may be injected even
//! when nothing contributes to it. It must be an abstract, parameterless
//! method returning a plain `Map<K, V>` or `Set<T>`, with no map key and no
//! declared exceptions.

use crate::binding::{
    domain::BindingMethod,
    ports::validator::{BindingMethodValidator, ValidatorConfig},
    profile::ValidationProfile,
    report::ValidationReportBuilder,
    validation::rules::{self, RuleContext},
};
use std::sync::Arc;

/// Validates `@Multibinds` methods and methods of `@Multibindings`
/// interfaces.
///
/// # Examples
///
/// ```
/// use bindwright::binding::domain::{
///     Annotation, BindingMethod, ContainerKind, EnclosingElement, Modifier, QualifiedName,
///     vocabulary,
/// };
/// use bindwright::binding::ports::BindingMethodValidator;
/// use bindwright::binding::profile::ValidationProfile;
/// use bindwright::binding::validation::MultibindsMethodValidator;
/// use std::sync::Arc;
///
/// let module = EnclosingElement::new(
///     QualifiedName::new("com.example.FooModule").expect("valid name"),
///     ContainerKind::Module,
/// );
/// let method = BindingMethod::builder(module, "foos")
///     .with_modifier(Modifier::Abstract)
///     .with_annotation(Annotation::new(
///         QualifiedName::new(vocabulary::MULTIBINDS).expect("valid name"),
///     ))
///     .returning("java.util.Set<com.example.Foo>".parse().expect("valid type"))
///     .build()
///     .expect("valid method");
///
/// let validator = MultibindsMethodValidator::new(Arc::new(ValidationProfile::default()));
/// assert!(validator.validate(&method).is_clean());
/// ```
#[derive(Debug, Clone)]
pub struct MultibindsMethodValidator {
    config: ValidatorConfig,
    profile: Arc<ValidationProfile>,
}

impl MultibindsMethodValidator {
    /// Creates the validator for `@Multibinds` methods in `@Module` and
    /// `@ProducerModule` types.
    #[must_use]
    pub fn new(profile: Arc<ValidationProfile>) -> Self {
        Self::with_config(ValidatorConfig::multibinds(), profile)
    }

    /// Creates the validator for the methods of a `@Multibindings`
    /// interface.
    #[must_use]
    pub fn for_multibindings_interface(profile: Arc<ValidationProfile>) -> Self {
        Self::with_config(ValidatorConfig::multibindings_interface(), profile)
    }

    /// Creates a validator with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidatorConfig, profile: Arc<ValidationProfile>) -> Self {
        Self { config, profile }
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext::new(&self.config, &self.profile)
    }
}

impl BindingMethodValidator for MultibindsMethodValidator {
    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn profile(&self) -> &ValidationProfile {
        &self.profile
    }

    fn check_parameters(&self, method: &BindingMethod, report: &mut ValidationReportBuilder) {
        rules::check_no_parameters(&self.context(), method, report);
    }

    fn check_return_type(&self, method: &BindingMethod, report: &mut ValidationReportBuilder) {
        rules::check_returns_plain_collection(&self.context(), method, report);
    }

    fn check_map_keys(&self, method: &BindingMethod, report: &mut ValidationReportBuilder) {
        rules::check_no_map_key(&self.context(), method, report);
    }

    // Contribution annotations on multibinds methods are rejected by the
    // multibinding annotation pass, which always runs first.
    fn check_multibindings(&self, _method: &BindingMethod, _report: &mut ValidationReportBuilder) {}
}
